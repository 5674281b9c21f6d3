/// The storage word backing [`Digit`][crate::Digit].
///
/// Bases range over $1 < B \leq 2^{32}$, so every canonical residue
/// $0 \leq x < B$ fits a `u32`. Smaller bases would fit smaller words
/// (see [`storage_bits`]), but stable Rust cannot yet pick a distinct
/// storage type per const parameter, so all digits share this one.
pub type Word = u32;

/// Unsigned type with twice as many bits as [`Word`].
///
/// Products and sums of two residues always fit here, whatever the base.
pub type DoubleWord = u64;
/// Signed type with twice as many bits as [`Word`].
pub type SignedDoubleWord = i64;

/// The unsigned integer types that can serve as digit storage,
/// tied to their double-width companions.
///
/// The doubling relation is what makes overflow-free modular arithmetic
/// possible: `x * y` for `x, y < B <= 2^BITS` always fits `Double`,
/// and `x - y + B` always fits `SignedDouble`.
pub trait Promote: Sized {
    type Double;
    type SignedDouble;
    const BITS: u32;
}

impl Promote for u8 {
    type Double = u16;
    type SignedDouble = i16;
    const BITS: u32 = 8;
}

impl Promote for u16 {
    type Double = u32;
    type SignedDouble = i32;
    const BITS: u32 = 16;
}

impl Promote for u32 {
    type Double = u64;
    type SignedDouble = i64;
    const BITS: u32 = 32;
}

impl Promote for u64 {
    type Double = u128;
    type SignedDouble = i128;
    const BITS: u32 = 64;
}

/// Bit width of the narrowest unsigned type able to hold every residue
/// modulo `base`, i.e. all of `0..=base - 1`.
///
/// The switch points are at $2^8$ and $2^{16}$: base 256 still fits a
/// `u8` (residues 0..=255), base 257 does not.
pub const fn storage_bits(base: u64) -> u32 {
    if base <= 1 << 8 {
        8
    } else if base <= 1 << 16 {
        16
    } else {
        32
    }
}
