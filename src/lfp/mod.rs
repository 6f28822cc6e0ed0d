//! This module and its submodules contain the software implementation of the 16-bit logarithmic
//! fixed-point type.
//!
//! Some notation used in the comments:
//!
//!   - **`k`**: the base-2 logarithm of the absolute value of a number. A finite value is
//!     `±2^k`.
//!   - **Grid units**: `k` is always handled as an integer, in units of `2^-frac_bits`, i.e. as
//!     the fixed-point number it is stored as. A `k` of `406` in grid units with 8 fraction bits
//!     is the real exponent `406 / 256 = 1.5859375`.
//!   - **Mantissa**: when going to linear space, a number `2^k` is written as `m × 2^n`, with `n`
//!     the integer part of `k` and `m = 2^(fractional part of k)` in `[1, 2[`, represented as an
//!     unsigned fixed-point number (see [`Tables`](crate::Tables)).
//!
//! The key observation about the layout is that the 15 bits after the sign, read as an unsigned
//! integer, are `k + 2^14` in grid units, *whatever the split between integer and fraction
//! bits*, because the bias of the integer field is `2^(int_bits - 1)`. Hence everything that
//! works on `k` in grid units (decoding, encoding an on-grid value, multiplication, division,
//! comparisons, ...) does not depend on the format at all; only going to and from linear space
//! does.

/// A 16-bit logarithmic fixed-point number: `±2^k`, where `k` is a fixed-point number with a
/// (configurable) number of fraction bits. Plus two special values, [zero](Self::ZERO) and
/// [NaR](Self::NAR) (not-a-real).
///
/// A `LogFixPoint16` is just 16 bits; what real number those bits mean depends on the
/// [`Format`](crate::Format) they are read with. Methods and operators that need to know use
/// either an explicit `Format`, or the active one ([`crate::get`]).
///
/// ```
/// # use soft_logfixpoint::*;
/// let format = Format::new(8, RoundingMode::Lin)?;
/// let x = LogFixPoint16::from_bits(0b0_1000001_10010110);
/// assert_eq!(format.exponent(x), 1.5859375);
/// assert!((format.to_f64(x) - 3.).abs() < 3e-3);
/// # Ok::<(), Error>(())
/// ```
#[derive(Clone, Copy)]
#[derive(Default)]  // Default is zero
pub struct LogFixPoint16(u16);

/// Basics
mod basics;

/// Constants (zero, NaR, floatmin, floatmax, etc)
mod consts;

/// Decoding a bit pattern into its semantic value
mod decode;

/// Encoding a semantic value into a bit pattern, with rounding if necessary
mod encode;

/// Binary arithmetic operators
mod ops;

/// Unary operators (negation, abs, reciprocal, square, next/prior values)
mod unary;

/// Square root
mod math;

/// Equality and ordering
mod cmp;

/// Formatting
mod fmt;

/// Conversions to and from native numbers
pub(crate) mod convert;

/// Helpers for tests
#[cfg(test)]
pub(crate) mod test;

/// Exact values, used as a test oracle
#[cfg(test)]
mod rational;

pub use decode::Decoded;
