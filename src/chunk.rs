use crate::error::SplitError;
use crate::plan::ChunkSpec;
use crate::utils::{display_bytes, new_bufwriter};
use std::fmt::{Display, Formatter};
use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom};
use std::ops::Range;
use std::path::{Path, PathBuf};
use tracing::trace;

/// One unit of work: copy a single byte range of the source file into its
/// own destination file. Every task opens an independent read handle and
/// seeks to its offset, so concurrent tasks never share a stream cursor.
pub struct ChunkTask {
    pub index: usize,
    byte_range: Range<u64>,
    source: PathBuf,
    dest: PathBuf,
}

impl Display for ChunkTask {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "chunk {} range={:?} size={:#.1} dest={:?}",
            self.index,
            self.byte_range,
            display_bytes(self.len()),
            self.dest
        )
    }
}

impl ChunkTask {
    pub fn new(spec: &ChunkSpec, source: &Path, source_name: &str, dest_dir: &Path) -> Self {
        ChunkTask {
            index: spec.index,
            byte_range: spec.byte_range.clone(),
            source: source.to_path_buf(),
            dest: dest_dir.join(spec.file_name(source_name)),
        }
    }

    pub fn len(&self) -> u64 {
        self.byte_range.end - self.byte_range.start
    }

    pub fn write(&self) -> Result<u64, SplitError> {
        trace!("{}", self);
        let expected = self.len();

        let mut source = File::open(&self.source).map_err(|e| self.io_error(&self.source, e))?;
        source
            .seek(SeekFrom::Start(self.byte_range.start))
            .map_err(|e| self.io_error(&self.source, e))?;

        let dest = File::create(&self.dest).map_err(|e| self.io_error(&self.dest, e))?;
        let mut writer = new_bufwriter(dest);
        let written = io::copy(&mut source.take(expected), &mut writer)
            .map_err(|e| self.io_error(&self.dest, e))?;
        writer
            .into_inner()
            .map_err(|e| self.io_error(&self.dest, e.into_error()))?;

        if written < expected {
            return Err(SplitError::ShortRead {
                index: self.index,
                offset: self.byte_range.start,
                expected,
                actual: written,
            });
        }
        Ok(written)
    }

    fn io_error(&self, path: &Path, source: io::Error) -> SplitError {
        SplitError::Io {
            index: self.index,
            path: path.to_path_buf(),
            source,
        }
    }
}
