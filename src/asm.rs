//! Hand-written x86_64 loops.

use std::arch::asm;

/// Branchless: every byte picks a delta of `+1`, `-1` or `0` with `cmove`.
pub fn count_x86_cmov(bytes: &[u8]) -> isize {
    let Some(last) = bytes.last() else {
        return 0;
    };
    let res: isize;
    unsafe {
        asm!(
            "
                mov {idx}, {ptr}
                xor {res}, {res}

                2:
                xor {delta}, {delta}
                movzx {cur}, byte ptr [{idx}]
                cmp {cur}, {s}
                cmove {delta}, {one}
                cmp {cur}, {p}
                cmove {delta}, {minus_one}
                add {res}, {delta}
                add {idx}, 1
                cmp {idx}, {end}
                jbe 2b
            ",
            one = in(reg) 1_i64,
            minus_one = in(reg) -1_i64,
            ptr = in(reg) bytes.as_ptr(),
            end = in(reg) last as *const u8,
            s = in(reg) b's' as u64,
            p = in(reg) b'p' as u64,

            idx = out(reg) _,
            delta = out(reg) _,
            cur = out(reg) _,
            res = out(reg) res,
            options(readonly, nostack),
        );
    };
    res
}

/// One conditional jump per comparison.
pub fn count_x86_jne(bytes: &[u8]) -> isize {
    let Some(last) = bytes.last() else {
        return 0;
    };
    let res: isize;
    unsafe {
        asm!(
            "
                mov {idx}, {ptr}
                xor {res}, {res}

                2:
                movzx {cur}, byte ptr [{idx}]
                cmp {cur}, {s}
                jne 3f
                add {res}, 1
                jmp 4f

                3:
                cmp {cur}, {p}
                jne 4f
                sub {res}, 1

                4:
                add {idx}, 1
                cmp {idx}, {end}
                jbe 2b
            ",
            ptr = in(reg) bytes.as_ptr(),
            end = in(reg) last as *const u8,
            s = in(reg) b's' as u64,
            p = in(reg) b'p' as u64,

            idx = out(reg) _,
            cur = out(reg) _,
            res = out(reg) res,
            options(readonly, nostack),
        );
    };
    res
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;
    use crate::scalar::count_ref;

    #[test]
    fn count_x86_empty() {
        assert_eq!(count_x86_cmov(&[]), 0);
        assert_eq!(count_x86_jne(&[]), 0);
    }

    #[test]
    fn count_x86_one() {
        assert_eq!(count_x86_cmov(b"s"), 1);
        assert_eq!(count_x86_cmov(b"p"), -1);
        assert_eq!(count_x86_jne(b"s"), 1);
        assert_eq!(count_x86_jne(b"p"), -1);
    }

    #[test]
    fn count_x86_other() {
        assert_eq!(count_x86_cmov(b"xyz123"), 0);
        assert_eq!(count_x86_jne(b"xyz123"), 0);
    }

    #[test]
    fn long_case_no_error() {
        let mut buf = [0; 2048];
        rand::fill(&mut buf);
        assert_eq!(count_x86_cmov(&buf), count_ref(&buf));
        assert_eq!(count_x86_jne(&buf), count_ref(&buf));
    }

    quickcheck! {
        fn x86_equals_reference_impl(bytes: Vec<u8>) -> bool {
            let ref_ = count_ref(&bytes);
            ref_ == count_x86_cmov(&bytes) && ref_ == count_x86_jne(&bytes)
        }
    }
}
