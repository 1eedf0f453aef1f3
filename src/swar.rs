//! Eight bytes at a time, in a plain `u64`.

use crate::scalar::count_for_loop;
use crate::utils::{popcnt_u64, splat_u64, zero_lanes_u64};

const ALL_S: u64 = splat_u64(b's');
const ALL_P: u64 = splat_u64(b'p');

#[inline(always)]
fn count_word(word: u64) -> isize {
    let ss = zero_lanes_u64(word ^ ALL_S);
    let ps = zero_lanes_u64(word ^ ALL_P);
    popcnt_u64(ss) as isize - popcnt_u64(ps) as isize
}

pub fn count_swar(bytes: &[u8]) -> isize {
    let mut words = bytes.chunks_exact(8);
    let mut res = 0;
    for word in words.by_ref() {
        let mut buf = [0; 8];
        buf.copy_from_slice(word);
        res += count_word(u64::from_le_bytes(buf));
    }
    res + count_for_loop(words.remainder())
}
