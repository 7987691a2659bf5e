use crate::error::SplitError;
use crate::utils::byte_range_chunks;
use itertools::Itertools;
use std::ops::Range;

pub const DEFAULT_CHUNK_SIZE: u64 = 1024 * 1024;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct SplitConfig {
    chunk_size: u64,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

impl SplitConfig {
    pub fn new(chunk_size: u64) -> Result<Self, SplitError> {
        if chunk_size == 0 {
            return Err(SplitError::InvalidChunkSize);
        }
        Ok(Self { chunk_size })
    }

    pub fn chunk_size(&self) -> u64 {
        self.chunk_size
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ChunkSpec {
    pub index: usize,
    pub byte_range: Range<u64>,
}

impl ChunkSpec {
    pub fn len(&self) -> u64 {
        self.byte_range.end - self.byte_range.start
    }

    pub fn file_name(&self, source_name: &str) -> String {
        format!("{}_{}", source_name, self.index)
    }
}

/// The ordered list of byte ranges covering the whole source file. A zero
/// sized source produces an empty plan, not a single empty chunk.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SplitPlan {
    chunks: Vec<ChunkSpec>,
}

impl SplitPlan {
    pub fn compute(source_size: u64, config: SplitConfig) -> Self {
        let chunks = byte_range_chunks(source_size, config.chunk_size())
            .enumerate()
            .map(|(index, byte_range)| ChunkSpec { index, byte_range })
            .collect_vec();
        Self { chunks }
    }

    pub fn chunks(&self) -> &[ChunkSpec] {
        &self.chunks
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    pub fn total_size(&self) -> u64 {
        self.chunks.iter().map(ChunkSpec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ten_bytes_in_chunks_of_four() {
        let plan = SplitPlan::compute(10, SplitConfig::new(4).unwrap());
        let ranges = plan
            .chunks()
            .iter()
            .map(|chunk| chunk.byte_range.clone())
            .collect_vec();
        assert_eq!(ranges, vec![0..4, 4..8, 8..10]);
        assert_eq!(plan.total_size(), 10);
    }

    #[test]
    fn exact_multiple_is_a_single_chunk() {
        let plan = SplitPlan::compute(DEFAULT_CHUNK_SIZE, SplitConfig::default());
        assert_eq!(plan.len(), 1);
        assert_eq!(plan.chunks()[0].byte_range, 0..DEFAULT_CHUNK_SIZE);
    }

    #[test]
    fn one_byte_over_the_default_chunk_size() {
        let plan = SplitPlan::compute(DEFAULT_CHUNK_SIZE + 1, SplitConfig::default());
        assert_eq!(plan.len(), 2);
        assert_eq!(
            plan.chunks()[1].byte_range,
            DEFAULT_CHUNK_SIZE..DEFAULT_CHUNK_SIZE + 1
        );
        assert_eq!(plan.chunks()[1].len(), 1);
    }

    #[test]
    fn empty_source_plans_no_chunks() {
        let plan = SplitPlan::compute(0, SplitConfig::new(4).unwrap());
        assert!(plan.is_empty());
        assert_eq!(plan.total_size(), 0);
    }

    #[test]
    fn chunks_are_contiguous_and_cover_the_source() {
        let plan = SplitPlan::compute(1234, SplitConfig::new(100).unwrap());
        let mut expected_start = 0;
        for (index, chunk) in plan.chunks().iter().enumerate() {
            assert_eq!(chunk.index, index);
            assert_eq!(chunk.byte_range.start, expected_start);
            expected_start = chunk.byte_range.end;
        }
        assert_eq!(expected_start, 1234);
        assert_eq!(plan.total_size(), 1234);
    }

    #[test]
    fn identical_inputs_produce_identical_plans() {
        let config = SplitConfig::new(7).unwrap();
        assert_eq!(
            SplitPlan::compute(100, config),
            SplitPlan::compute(100, config)
        );
    }

    #[test]
    fn zero_chunk_size_is_rejected() {
        assert!(matches!(
            SplitConfig::new(0),
            Err(SplitError::InvalidChunkSize)
        ));
    }

    #[test]
    fn chunk_file_names_use_the_index() {
        let plan = SplitPlan::compute(10, SplitConfig::new(4).unwrap());
        assert_eq!(plan.chunks()[2].file_name("data.bin"), "data.bin_2");
    }
}
