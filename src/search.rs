use memchr::memchr_iter;

/// Two vectorized searches, one for each byte.
pub fn count_memchr(bytes: &[u8]) -> isize {
    let ss = memchr_iter(b's', bytes).count();
    let ps = memchr_iter(b'p', bytes).count();
    ss as isize - ps as isize
}
