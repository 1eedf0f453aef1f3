//! Whole-array passes, the way one would write it with numpy:
//! `count_nonzero(a == 's') - count_nonzero(a == 'p')`.
//!
//! The masks are materialized in scratch `Vec<bool>`s on purpose.

/// `bytes[i] == value` for every `i`.
#[inline(never)]
pub fn vec_eq(bytes: &[u8], value: u8) -> Vec<bool> {
    bytes.iter().map(|&c| c == value).collect()
}

/// Number of `true` entries.
#[inline(never)]
pub fn nonzeros(mask: &[bool]) -> usize {
    mask.iter().map(|&b| b as usize).sum()
}

/// One pass per mask, then one pass per sum.
pub fn count_masks(bytes: &[u8]) -> isize {
    let ss = vec_eq(bytes, b's');
    let ps = vec_eq(bytes, b'p');
    nonzeros(&ss) as isize - nonzeros(&ps) as isize
}

/// Both masks are filled in the same pass, the sums stay separate.
pub fn count_masks_fused(bytes: &[u8]) -> isize {
    let mut ss = Vec::with_capacity(bytes.len());
    let mut ps = Vec::with_capacity(bytes.len());
    for &c in bytes {
        ss.push(c == b's');
        ps.push(c == b'p');
    }
    nonzeros(&ss) as isize - nonzeros(&ps) as isize
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;
    use crate::scalar::count_ref;

    #[test]
    fn vec_eq_marks_positions() {
        assert_eq!(
            vec_eq(b"spxs", b's'),
            vec![true, false, false, true],
        );
        assert!(vec_eq(b"", b's').is_empty());
    }

    #[test]
    fn nonzeros_counts_true() {
        assert_eq!(nonzeros(&[true, false, true, true]), 3);
        assert_eq!(nonzeros(&[]), 0);
    }

    #[test]
    fn count_masks_small() {
        assert_eq!(count_masks(b""), 0);
        assert_eq!(count_masks(b"s"), 1);
        assert_eq!(count_masks(b"p"), -1);
        assert_eq!(count_masks_fused(b"sss"), 3);
        assert_eq!(count_masks_fused(b"ppp"), -3);
        assert_eq!(count_masks_fused(b"xyz123"), 0);
    }

    quickcheck! {
        fn masks_equal_reference_impl(bytes: Vec<u8>) -> bool {
            let ref_ = count_ref(&bytes);
            ref_ == count_masks(&bytes) && ref_ == count_masks_fused(&bytes)
        }
    }
}
