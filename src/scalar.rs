//! Plain one-byte-at-a-time loops.

use std::ffi::CStr;

/// Size of the partitions summed by [`count_chunked`].
pub const CHUNK_LEN: usize = 4096;

/// Counts with an iterator that maps every byte to `+1`, `-1` or `0`.
pub fn count_ref(bytes: &[u8]) -> isize {
    bytes
        .iter()
        .map(|c| match c {
            b's' => 1,
            b'p' => -1,
            _ => 0,
        })
        .sum()
}

/// Counts with an explicit loop and a branch per byte.
#[inline(always)]
pub fn count_for_loop(bytes: &[u8]) -> isize {
    let mut res = 0;
    for &c in bytes {
        if c == b's' {
            res += 1;
        } else if c == b'p' {
            res -= 1;
        }
    }
    res
}

/// Counts with a `match` per byte.
pub fn count_match(bytes: &[u8]) -> isize {
    let mut res = 0;
    for &c in bytes {
        match c {
            b's' => res += 1,
            b'p' => res -= 1,
            _ => (),
        }
    }
    res
}

/// Counts a null-terminated string, stopping on the terminator.
pub fn count_cstr(s: &CStr) -> isize {
    let mut res = 0;
    let mut ptr = s.as_ptr().cast::<u8>();
    // SAFETY: a `CStr` is always terminated by a zero byte, and the loop
    // never reads past it.
    unsafe {
        while *ptr != b'\0' {
            match *ptr {
                b's' => res += 1,
                b'p' => res -= 1,
                _ => (),
            }
            ptr = ptr.add(1);
        }
    }
    res
}

/// Like [`count_cstr`], but the terminator is just another arm of the
/// `match`, which returns.
pub fn count_cstr_switch(s: &CStr) -> isize {
    let mut res = 0;
    let mut ptr = s.as_ptr().cast::<u8>();
    loop {
        // SAFETY: same as in `count_cstr`, the `b'\0'` arm stops the walk on
        // the terminator.
        let c = unsafe { *ptr };
        match c {
            b'\0' => return res,
            b's' => res += 1,
            b'p' => res -= 1,
            _ => (),
        }
        ptr = unsafe { ptr.add(1) };
    }
}

/// Sums the net count of every [`CHUNK_LEN`] partition of `bytes`.
pub fn count_chunked(bytes: &[u8]) -> isize {
    bytes.chunks(CHUNK_LEN).map(count_for_loop).sum()
}
