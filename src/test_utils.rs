use std::fs;
use std::path::{Path, PathBuf};

pub fn patterned_content(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 251) as u8).collect()
}

pub fn write_source(dir: &Path, name: &str, content: &[u8]) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

pub fn read_chunk_files(dir: &Path, source_name: &str) -> Vec<Vec<u8>> {
    let mut chunks = vec![];
    for index in 0.. {
        let path = dir.join(format!("{source_name}_{index}"));
        if !path.exists() {
            break;
        }
        chunks.push(fs::read(&path).unwrap());
    }
    chunks
}

pub fn output_file_count(dir: &Path) -> usize {
    fs::read_dir(dir).unwrap().count()
}
