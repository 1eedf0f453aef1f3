const LO_7: u64 = 0x7f7f_7f7f_7f7f_7f7f;
const HI: u64 = 0x8080_8080_8080_8080;

/// `byte` repeated in all eight lanes of a `u64`.
#[inline(always)]
pub const fn splat_u64(byte: u8) -> u64 {
    byte as u64 * 0x0101_0101_0101_0101
}

/// High bit set in every lane of `word` that is zero, nothing else.
///
/// Exact: unlike the usual `(x - 0x01..) & !x & 0x80..` trick there is no
/// borrow between lanes, so no false positives.
#[inline(always)]
pub const fn zero_lanes_u64(word: u64) -> u64 {
    let nonzero = ((word & LO_7) + LO_7) | word;
    !nonzero & HI
}

#[cfg(target_arch = "x86_64")]
#[inline(always)]
pub fn popcnt_u64(x: u64) -> u64 {
    use std::arch::asm;

    if !std::is_x86_feature_detected!("popcnt") {
        return x.count_ones() as u64;
    }
    let res;
    unsafe {
        asm!(
            "popcnt {out}, {x}",
            x = in(reg) x,
            out = lateout(reg) res,
            options(pure, nomem, nostack),
        );
    };
    res
}

#[cfg(not(target_arch = "x86_64"))]
#[inline(always)]
pub fn popcnt_u64(x: u64) -> u64 {
    x.count_ones() as u64
}
