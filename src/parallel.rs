//! Partial net counts over partitions of the input, reduced on the rayon
//! global pool.

use rayon::prelude::*;

use crate::scalar::count_for_loop;

/// Inputs shorter than this are counted on the calling thread.
pub const PARALLEL_THRESHOLD: usize = 1024 * 1024;

pub fn count_parallel(bytes: &[u8]) -> isize {
    if bytes.len() < PARALLEL_THRESHOLD {
        return count_for_loop(bytes);
    }
    let num_threads = rayon::current_num_threads().max(1);
    let chunk_size = bytes.len().div_ceil(num_threads).max(PARALLEL_THRESHOLD / 4);
    bytes.par_chunks(chunk_size).map(count_for_loop).sum()
}
