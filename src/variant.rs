use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::{mask, parallel, scalar, search, swar, table};

/// Every explicit-length implementation built for this target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    Reference,
    ForLoop,
    Match,
    Chunked,
    Lookup,
    StateMachine,
    Masks,
    MasksFused,
    Swar,
    Parallel,
    Memchr,
    #[cfg(target_arch = "x86_64")]
    X86Cmov,
    #[cfg(target_arch = "x86_64")]
    X86Jne,
    #[cfg(feature = "nightly")]
    PortableSimd,
}

impl Variant {
    pub const ALL: &'static [Variant] = &[
        Variant::Reference,
        Variant::ForLoop,
        Variant::Match,
        Variant::Chunked,
        Variant::Lookup,
        Variant::StateMachine,
        Variant::Masks,
        Variant::MasksFused,
        Variant::Swar,
        Variant::Parallel,
        Variant::Memchr,
        #[cfg(target_arch = "x86_64")]
        Variant::X86Cmov,
        #[cfg(target_arch = "x86_64")]
        Variant::X86Jne,
        #[cfg(feature = "nightly")]
        Variant::PortableSimd,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Variant::Reference => "reference",
            Variant::ForLoop => "for-loop",
            Variant::Match => "match",
            Variant::Chunked => "chunked",
            Variant::Lookup => "lookup",
            Variant::StateMachine => "state-machine",
            Variant::Masks => "masks",
            Variant::MasksFused => "masks-fused",
            Variant::Swar => "swar",
            Variant::Parallel => "parallel",
            Variant::Memchr => "memchr",
            #[cfg(target_arch = "x86_64")]
            Variant::X86Cmov => "x86-cmov",
            #[cfg(target_arch = "x86_64")]
            Variant::X86Jne => "x86-jne",
            #[cfg(feature = "nightly")]
            Variant::PortableSimd => "portable-simd",
        }
    }

    pub fn count(self, bytes: &[u8]) -> isize {
        match self {
            Variant::Reference => scalar::count_ref(bytes),
            Variant::ForLoop => scalar::count_for_loop(bytes),
            Variant::Match => scalar::count_match(bytes),
            Variant::Chunked => scalar::count_chunked(bytes),
            Variant::Lookup => table::count_lookup(bytes),
            Variant::StateMachine => table::count_state_machine(bytes),
            Variant::Masks => mask::count_masks(bytes),
            Variant::MasksFused => mask::count_masks_fused(bytes),
            Variant::Swar => swar::count_swar(bytes),
            Variant::Parallel => parallel::count_parallel(bytes),
            Variant::Memchr => search::count_memchr(bytes),
            #[cfg(target_arch = "x86_64")]
            Variant::X86Cmov => crate::asm::count_x86_cmov(bytes),
            #[cfg(target_arch = "x86_64")]
            Variant::X86Jne => crate::asm::count_x86_jne(bytes),
            #[cfg(feature = "nightly")]
            Variant::PortableSimd => crate::simd::count_portable_simd(bytes),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Variant::ALL
            .iter()
            .copied()
            .find(|v| v.name() == s)
            .ok_or_else(|| Error::UnknownVariant(s.to_owned()))
    }
}
