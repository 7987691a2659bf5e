use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SplitError {
    #[error("chunk size must be at least one byte")]
    InvalidChunkSize,

    #[error("chunk {index}: read {actual} of {expected} bytes at offset {offset}, source is shorter than planned")]
    ShortRead {
        index: usize,
        offset: u64,
        expected: u64,
        actual: u64,
    },

    #[error("chunk {index}: {}: {source}", path.display())]
    Io {
        index: usize,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
