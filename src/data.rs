//! Inputs for tests and benchmarks.

use rand::Rng as _;

const KILOBYTE: usize = 1024;
const MEGABYTE: usize = 1024 * KILOBYTE;

/// Size of the benchmark buffers.
pub const BENCH_LEN: usize = 12 * MEGABYTE;

pub fn all_s(len: usize) -> Vec<u8> {
    vec![b's'; len]
}

pub fn all_p(len: usize) -> Vec<u8> {
    vec![b'p'; len]
}

/// Every byte is either `'s'` or `'p'`, with equal odds.
pub fn random_sp(len: usize) -> Vec<u8> {
    let mut rng = rand::rng();
    (0..len)
        .map(|_| if rng.random_bool(0.5) { b's' } else { b'p' })
        .collect()
}

/// Printable ASCII, from `' '` to `'~'`.
pub fn random_printable(len: usize) -> Vec<u8> {
    let mut rng = rand::rng();
    (0..len).map(|_| rng.random_range(b' '..=b'~')).collect()
}

pub fn random_bytes(len: usize) -> Vec<u8> {
    let mut buf = vec![0; len];
    rand::fill(&mut buf[..]);
    buf
}
