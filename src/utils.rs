use byte_unit::{AdjustedByte, Byte, UnitType};
use std::io::{BufWriter, Write};
use std::ops::Range;

const DEFAULT_BUFFER_SIZE: usize = 4 * 1024 * 1024;

pub fn display_bytes(size: u64) -> AdjustedByte {
    Byte::from(size).get_appropriate_unit(UnitType::Binary)
}

pub fn new_bufwriter<T: Write>(item: T) -> BufWriter<T> {
    BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, item)
}

// chunk_size must be non-zero, enforced by SplitConfig before any plan is
// computed.
pub fn byte_range_chunks(size: u64, chunk_size: u64) -> impl Iterator<Item = Range<u64>> {
    (0..size).step_by(chunk_size as usize).map(move |byte_start| {
        let byte_end = (byte_start + chunk_size).min(size);
        byte_start..byte_end
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn ranges_step_by_chunk_size() {
        assert_eq!(byte_range_chunks(10, 4).collect_vec(), vec![0..4, 4..8, 8..10]);
    }

    #[test]
    fn exact_multiple_has_no_tail() {
        assert_eq!(byte_range_chunks(8, 4).collect_vec(), vec![0..4, 4..8]);
    }

    #[test]
    fn zero_size_yields_no_ranges() {
        assert_eq!(byte_range_chunks(0, 4).count(), 0);
    }
}
