mod error;
mod base;
mod sequence;
mod range;
mod stem;

pub use error::*;
pub use base::*;
pub use sequence::*;
pub use range::*;
pub use stem::*;


/// Nucleic Acid INdeX: we use `u16` (0 to 65k), which is plenty for the
/// sequences we check. Ranges are half-open, so an index may equal the
/// sequence length, which therefore must not exceed `NAIDX::MAX`.
pub type NAIDX = u16;

/// Range key. Must be >= 2×`NAIDX` in bit width so we can safely pack
/// `(begin, end)` into one `R1KEY`.
pub type R1KEY = u32;

/// Stem key. Must be >= 3×`NAIDX` in bit width so we can safely pack
/// `(begin, end, stem)` into one `S1KEY`.
pub type S1KEY = u64;

/// Compile-time sanity check: the keys must hold their packed indices.
const _: () = {
    debug_assert!(2 * NAIDX::BITS <= R1KEY::BITS);
    debug_assert!(3 * NAIDX::BITS <= S1KEY::BITS);
};

