//! Byte frequency counting.
//!
//! Builds the 256-entry count table the Huffman coder weighs its leaves
//! with. Large buffers are counted in parallel chunks and the partial tables
//! summed; the result is identical to the sequential count, so compressed
//! output stays deterministic.

use rayon::prelude::*;

/// Below this size the rayon setup costs more than it saves.
const PARALLEL_THRESHOLD: usize = 64_000;
/// 16k chunks are pretty much the sweet spot.
const CHUNK_SIZE: usize = 16_000;

/// Frequency count of each byte value in `data`.
pub fn freqs(data: &[u8]) -> [u32; 256] {
    if data.len() > PARALLEL_THRESHOLD {
        data.par_chunks(CHUNK_SIZE)
            .fold(
                || [0u32; 256],
                |mut freqs, chunk| {
                    for &byte in chunk {
                        freqs[byte as usize] += 1;
                    }
                    freqs
                },
            )
            .reduce(
                || [0u32; 256],
                |mut sum, partial| {
                    for (total, count) in sum.iter_mut().zip(partial) {
                        *total += count;
                    }
                    sum
                },
            )
    } else {
        let mut freqs = [0u32; 256];
        for &byte in data {
            freqs[byte as usize] += 1;
        }
        freqs
    }
}

#[cfg(test)]
mod test {
    use super::freqs;

    #[test]
    fn small_input() {
        let counts = freqs(b"banana");
        assert_eq!(counts[b'a' as usize], 3);
        assert_eq!(counts[b'n' as usize], 2);
        assert_eq!(counts[b'b' as usize], 1);
        assert_eq!(counts.iter().sum::<u32>(), 6);
    }

    #[test]
    fn parallel_path_matches_sequential() {
        let data: Vec<u8> = (0..100_000u32).map(|i| (i % 251) as u8).collect();
        let mut expected = [0u32; 256];
        for &byte in &data {
            expected[byte as usize] += 1;
        }
        assert_eq!(freqs(&data), expected);
    }
}
