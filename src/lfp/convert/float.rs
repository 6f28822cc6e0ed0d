use super::*;

use crate::{Format, Tables};
use core::num::FpCategory;

/// `2^exp`, for an `exp` in the range of normal `f64`s, built directly from its bits so that it is
/// exact.
#[inline]
fn pow2(exp: i32) -> f64 {
  debug_assert!((f64::MIN_EXP - 1 .. f64::MAX_EXP).contains(&exp));
  let biased = (exp + f64::MAX_EXP - 1) as u64;
  f64::from_bits(biased << (f64::MANTISSA_DIGITS - 1))
}

impl Format {
  /// Convert an `f64` into a [`LogFixPoint16`], rounding according to this format:
  ///
  ///   - Zero converts to zero, and NaN or infinities convert to NaR.
  ///   - Otherwise the value is rounded directly from its mantissa and exponent, never going
  ///     through an inexact `log2`. Values too large saturate, values too small become zero
  ///     (this includes every subnormal `f64`).
  ///
  /// ```
  /// # use soft_logfixpoint::*;
  /// let format = Format::DEFAULT;
  /// assert_eq!(format.from_f64(1.), LogFixPoint16::ONE);
  /// assert_eq!(format.from_f64(-1e100), LogFixPoint16::MIN);
  /// assert!(format.from_f64(1e-100).is_zero());
  /// assert!(format.from_f64(f64::NEG_INFINITY).is_nar());
  /// ```
  pub fn from_f64(self, value: f64) -> LogFixPoint16 {
    match value.classify() {
      FpCategory::Nan | FpCategory::Infinite => LogFixPoint16::NAR,
      // The smallest normal f64 is 2^-1022, far below the smallest value of any format.
      FpCategory::Zero | FpCategory::Subnormal => LogFixPoint16::ZERO,
      FpCategory::Normal => {
        const MANTISSA_DIGITS_EXPLICIT: u32 = f64::MANTISSA_DIGITS - 1;
        const HIDDEN_BIT: u64 = 1 << MANTISSA_DIGITS_EXPLICIT;
        const EXP_BIAS: i32 = f64::MAX_EXP - 1;

        let bits = value.to_bits();
        let mantissa = (bits & (HIDDEN_BIT - 1)) | HIDDEN_BIT;
        let exponent = ((bits >> MANTISSA_DIGITS_EXPLICIT) & 0x7ff) as i32 - EXP_BIAS;
        // From 52 fraction bits to a wide mantissa, with no bits lost.
        let mantissa = u128::from(mantissa) << (Tables::WIDE_WIDTH - MANTISSA_DIGITS_EXPLICIT);
        self.encode_linear(value.is_sign_negative(), exponent, mantissa, false)
      },
    }
  }

  /// Convert an `f32` into a [`LogFixPoint16`]; same as [`Self::from_f64`], since every `f32`
  /// converts to an `f64` exactly.
  pub fn from_f32(self, value: f32) -> LogFixPoint16 {
    self.from_f64(value.into())
  }

  /// Convert `x`, read in this format, into an `f64`. Zero converts to `0.`, NaR to NaN.
  ///
  /// This is exact, with respect to the value of `x` according to this format's lookup tables.
  ///
  /// ```
  /// # use soft_logfixpoint::*;
  /// let format = Format::DEFAULT;
  /// assert_eq!(format.to_f64(LogFixPoint16::from_bits(0b0_1000010_00000000)), 4.);
  /// assert_eq!(format.to_f64(LogFixPoint16::from_bits(0b1_0111111_00000000)), -0.5);
  /// ```
  pub fn to_f64(self, x: LogFixPoint16) -> f64 {
    match x.decode() {
      Decoded::Zero => 0.,
      Decoded::NaR => f64::NAN,
      Decoded::Finite { sign, k } => {
        let (n, i) = self.split_k(k);
        // `exp2` entries come from an `f64`, so they have at most 53 significant bits, and the
        // product is an exact scaling by a power of two.
        let abs = self.tables().exp2()[i] as f64 * pow2(n - Tables::MANTISSA_WIDTH as i32);
        if sign {-abs} else {abs}
      },
    }
  }

  /// Convert `x`, read in this format, into an `f32`, rounding to nearest; zero converts to `0.`,
  /// NaR to NaN. Values outside the range of `f32` would convert to infinity, but even with 7
  /// fraction bits floatmax just fits (floatmin is subnormal, though).
  pub fn to_f32(self, x: LogFixPoint16) -> f32 {
    self.to_f64(x) as f32
  }
}

impl RoundFrom<f64> for LogFixPoint16 {
  /// Convert an `f64` into a `LogFixPoint16` in the [active format](crate::get); see
  /// [`Format::from_f64`].
  fn round_from(value: f64) -> Self {
    crate::get().from_f64(value)
  }
}

impl RoundFrom<f32> for LogFixPoint16 {
  /// Convert an `f32` into a `LogFixPoint16` in the [active format](crate::get); see
  /// [`Format::from_f32`].
  fn round_from(value: f32) -> Self {
    crate::get().from_f32(value)
  }
}

impl RoundFrom<LogFixPoint16> for f64 {
  /// Convert a `LogFixPoint16` read in the [active format](crate::get) into an `f64`; see
  /// [`Format::to_f64`].
  fn round_from(value: LogFixPoint16) -> Self {
    crate::get().to_f64(value)
  }
}

impl RoundFrom<LogFixPoint16> for f32 {
  /// Convert a `LogFixPoint16` read in the [active format](crate::get) into an `f32`; see
  /// [`Format::to_f32`].
  fn round_from(value: LogFixPoint16) -> Self {
    crate::get().to_f32(value)
  }
}
