#![cfg_attr(feature = "nightly", feature(portable_simd))]

//! Many ways to compute the number of `'s'` bytes minus the number of `'p'`
//! bytes in a buffer.
//!
//! Every function here returns the same answer for the same input; they only
//! differ in the machine code they produce.
//!
//! ```
//! assert_eq!(sp_count::count(b"sspspss"), 3);
//! ```

#[cfg(target_arch = "x86_64")]
pub mod asm;
pub mod data;
pub mod error;
pub mod mask;
pub mod parallel;
pub mod scalar;
pub mod search;
#[cfg(feature = "nightly")]
pub mod simd;
pub mod swar;
pub mod table;
pub mod utils;
pub mod variant;

pub use error::{Error, Result};
pub use variant::Variant;

/// Net count of `bytes`: occurrences of `'s'` minus occurrences of `'p'`.
#[inline]
pub fn count(bytes: &[u8]) -> isize {
    scalar::count_for_loop(bytes)
}
