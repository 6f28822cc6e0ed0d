//! This crate provides a software implementation of a 16-bit *logarithmic fixed-point* number
//! format.
//!
//! # Introduction
//!
//! A [`LogFixPoint16`] represents a real number as `±2^k`, where the exponent `k` is itself a
//! signed fixed-point number with a configurable number of fraction bits. The 16 bits are laid out
//! as
//!
//! ```text
//!   s iiiiiii ffffffff
//!   │ │       └ fraction bits of k (7 to 11 of them)
//!   │ └ biased integer part of k (15 - fraction bits of them)
//!   └ sign
//! ```
//!
//! with two patterns set aside: `0x0000` is zero and `0x8000` is NaR ("not a real", the analogue
//! of NaN).
//!
//! Since values are stored in log space, multiplication, division, squaring, reciprocal, and
//! (almost always) square roots are exact additions/subtractions of `k`. Addition and subtraction
//! are the expensive operations: they go back to linear space through precomputed lookup tables,
//! and round the result. Rounding is either to nearest in linear space ([`RoundingMode::Lin`],
//! the default) or to nearest in log space ([`RoundingMode::Log`]).
//!
//! # Usage
//!
//! ```
//! use soft_logfixpoint::{Format, LogFixPoint16, RoundingMode, RoundFrom, RoundInto};
//!
//! // Every operation is available on an explicit format...
//! let format = Format::new(8, RoundingMode::Lin)?;
//! let a = format.from_f64(3.0);
//! assert_eq!(format.bitstring(a), "0 1000001 10010110");
//! assert_eq!(format.to_f64(format.mul(a, a)), format.to_f64(format.power2(a)));
//!
//! // ...or through the usual operators, which use the process-wide active format.
//! let b = LogFixPoint16::round_from(2.0_f64);
//! assert!(b * b == LogFixPoint16::round_from(4_i32));
//! let c: LogFixPoint16 = 1e6_f64.round_into();
//! assert!(LogFixPoint16::ZERO < LogFixPoint16::MIN_POSITIVE && LogFixPoint16::ONE < c);
//! # Ok::<(), soft_logfixpoint::Error>(())
//! ```
//!
//! # Configuration
//!
//! The active format starts as 8 fraction bits with linear rounding, and can be changed with
//! [`set_fracbits`], [`set_rounding_mode`], or [`set_format`]. Changing it does not touch values
//! that already exist: their bits stay the same, but what those bits *mean* changes with the
//! layout. Code that has to be deterministic regardless of the global setting should call the
//! methods on a [`Format`] directly.

mod error;
mod format;
mod lfp;

pub use error::{Error, Result};
pub use format::{Format, RoundingMode, Reconfigured, get, set_fracbits, set_rounding_mode, set_format};
pub use format::table::Tables;
pub use lfp::{LogFixPoint16, Decoded};
pub use lfp::convert::{RoundFrom, RoundInto};

/// Number of cases per proptest property.
#[cfg(test)]
const PROPTEST_CASES: u32 = if cfg!(debug_assertions) {0x1000} else {0x4_0000};
