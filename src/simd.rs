//! `std::simd`, 64 lanes at a time. Needs the `nightly` feature.

use std::simd::Simd;
use std::simd::cmp::SimdPartialEq as _;

const LANES: usize = 64;

pub fn count_portable_simd(bytes: &[u8]) -> isize {
    let all_s = Simd::<u8, LANES>::splat(b's');
    let all_p = Simd::<u8, LANES>::splat(b'p');
    let mut chunks = bytes.chunks_exact(LANES);
    let mut res = 0;
    for chunk in chunks.by_ref() {
        let current = Simd::<u8, LANES>::from_slice(chunk);
        res += current.simd_eq(all_s).to_bitmask().count_ones() as isize;
        res -= current.simd_eq(all_p).to_bitmask().count_ones() as isize;
    }
    res + crate::scalar::count_for_loop(chunks.remainder())
}
