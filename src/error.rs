//! Error types

use thiserror::Error;

/// The ways an operation on this crate can fail.
///
/// Numeric edge cases (overflow, underflow, division by zero, NaR operands) are *not* errors:
/// they are represented in-band by saturation, [zero](crate::LogFixPoint16::ZERO), or
/// [NaR](crate::LogFixPoint16::NAR). Only caller mistakes end up here.
#[derive(Error, Debug)]
#[derive(Clone, PartialEq, Eq)]
pub enum Error {
  #[error("Invalid format: {0} fraction bits (must be 7-11)")]
  InvalidFormat(u32),

  #[error("Invalid rounding mode: {0:?} (must be \"lin\" or \"log\")")]
  InvalidRoundingMode(String),

  #[error("Square root of a negative number")]
  NegativeRadicand,
}

pub type Result<T> = std::result::Result<T, Error>;
