use super::*;

use crate::{Format, Tables};

impl Format {
  /// The kernel for converting an integer with sign `sign` and magnitude `abs` (which cannot be
  /// 0) into a [`LogFixPoint16`].
  fn from_sign_magnitude(self, sign: bool, abs: u64) -> LogFixPoint16 {
    debug_assert!(abs != 0, "Precondition violated: cannot be 0");
    // Shift the leading 1 to the top bit of a wide mantissa; the exponent is the position it was
    // at. A wide mantissa has room for all 64 bits, so this is always exact.
    //
    // Example:
    //
    //   value: 0b1011 (= 11)
    //    exp: 3
    //   mantissa: 1.011 (= 11 / 2^3)
    let exp = u64::BITS - 1 - abs.leading_zeros();
    let mantissa = u128::from(abs) << (Tables::WIDE_WIDTH - exp);
    self.encode_linear(sign, exp as i32, mantissa, false)
  }

  /// Convert an `i64` into a [`LogFixPoint16`], rounding according to this format. Values too
  /// large in absolute value saturate to [`LogFixPoint16::MAX`] / [`LogFixPoint16::MIN`].
  ///
  /// ```
  /// # use soft_logfixpoint::*;
  /// let format = Format::DEFAULT;
  /// assert_eq!(format.from_i64(0), LogFixPoint16::ZERO);
  /// assert_eq!(format.from_i64(-1), LogFixPoint16::MINUS_ONE);
  /// assert_eq!(format.from_i64(3), format.from_f64(3.));
  /// ```
  pub fn from_i64(self, value: i64) -> LogFixPoint16 {
    if value == 0 {
      LogFixPoint16::ZERO
    } else {
      self.from_sign_magnitude(value < 0, value.unsigned_abs())
    }
  }

  /// Convert a `u64` into a [`LogFixPoint16`], rounding according to this format. Values too
  /// large saturate to [`LogFixPoint16::MAX`].
  pub fn from_u64(self, value: u64) -> LogFixPoint16 {
    if value == 0 {
      LogFixPoint16::ZERO
    } else {
      self.from_sign_magnitude(false, value)
    }
  }

  /// Convert `x`, read in this format, into an `i64`:
  ///
  ///   - The value is rounded to the nearest integer, or in case of a tie to the even one.
  ///   - If it is outside the range of `i64`, it saturates to [`i64::MAX`] / [`i64::MIN`].
  ///   - NaR converts to [`i64::MIN`].
  ///
  /// ```
  /// # use soft_logfixpoint::*;
  /// let format = Format::DEFAULT;
  /// assert_eq!(format.to_i64(format.from_f64(3.)), 3);
  /// assert_eq!(format.to_i64(format.from_f64(-0.5)), 0);
  /// assert_eq!(format.to_i64(LogFixPoint16::MAX), i64::MAX);
  /// assert_eq!(format.to_i64(LogFixPoint16::NAR), i64::MIN);
  /// ```
  pub fn to_i64(self, x: LogFixPoint16) -> i64 {
    self.to_int(x)
  }

  /// Convert `x`, read in this format, into a `u64`:
  ///
  ///   - The value is rounded to the nearest integer, or in case of a tie to the even one.
  ///   - If it is above [`u64::MAX`], it saturates to it; negative values saturate to 0.
  ///   - NaR converts to 0, i.e. [`u64::MIN`], in line with the signed conversions.
  ///
  /// ```
  /// # use soft_logfixpoint::*;
  /// let format = Format::DEFAULT;
  /// assert_eq!(format.to_u64(format.from_f64(3.)), 3);
  /// assert_eq!(format.to_u64(format.from_f64(-3.)), 0);
  /// assert_eq!(format.to_u64(LogFixPoint16::MAX), u64::MAX);
  /// assert_eq!(format.to_u64(LogFixPoint16::NAR), 0);
  /// ```
  pub fn to_u64(self, x: LogFixPoint16) -> u64 {
    self.to_int(x)
  }

  /// Convert `x`, read in this format, into a primitive integer; see [`Self::to_i64`] and
  /// [`Self::to_u64`].
  fn to_int<T: RoundFromF64 + Bounded>(self, x: LogFixPoint16) -> T {
    if x.is_nar() {
      T::MIN
    } else {
      // `to_f64` is exact, and so is rounding an f64 to an integer-valued f64; the final cast
      // saturates.
      T::saturating_from_f64(self.to_f64(x).round_ties_even())
    }
  }
}

/// Saturating conversion from an integer-valued `f64`.
trait RoundFromF64 {
  fn saturating_from_f64(value: f64) -> Self;
}

trait Bounded {
  const MIN: Self;
}

macro_rules! make_impl {
  ($signed:ty, $unsigned:ty) => {
    impl RoundFromF64 for $signed {
      #[inline]
      fn saturating_from_f64(value: f64) -> Self {
        value as $signed
      }
    }

    impl RoundFromF64 for $unsigned {
      #[inline]
      fn saturating_from_f64(value: f64) -> Self {
        value as $unsigned
      }
    }

    impl Bounded for $signed {
      const MIN: Self = <$signed>::MIN;
    }

    impl Bounded for $unsigned {
      const MIN: Self = <$unsigned>::MIN;
    }

    impl RoundFrom<$signed> for LogFixPoint16 {
      #[doc = concat!("Convert an `", stringify!($signed), "` into a `LogFixPoint16` in the [active format](crate::get); see [`Format::from_i64`].")]
      fn round_from(value: $signed) -> Self {
        crate::get().from_i64(value.into())
      }
    }

    impl RoundFrom<$unsigned> for LogFixPoint16 {
      #[doc = concat!("Convert a `", stringify!($unsigned), "` into a `LogFixPoint16` in the [active format](crate::get); see [`Format::from_u64`].")]
      fn round_from(value: $unsigned) -> Self {
        crate::get().from_u64(value.into())
      }
    }

    impl RoundFrom<LogFixPoint16> for $signed {
      #[doc = concat!("Convert a `LogFixPoint16` read in the [active format](crate::get) into an `", stringify!($signed), "`:")]
      ///
      ///   - The value is rounded to the nearest integer, or in case of a tie to the even one.
      #[doc = concat!("  - If it is outside the range of `", stringify!($signed), "`, it saturates to its `MAX` or `MIN`.")]
      #[doc = concat!("  - NaR converts to [`", stringify!($signed), "::MIN`].")]
      fn round_from(value: LogFixPoint16) -> Self {
        crate::get().to_int(value)
      }
    }

    impl RoundFrom<LogFixPoint16> for $unsigned {
      #[doc = concat!("Convert a `LogFixPoint16` read in the [active format](crate::get) into a `", stringify!($unsigned), "`:")]
      ///
      ///   - The value is rounded to the nearest integer, or in case of a tie to the even one.
      #[doc = concat!("  - If it is above `", stringify!($unsigned), "::MAX` it saturates to it; negative values saturate to 0.")]
      ///   - NaR converts to 0.
      fn round_from(value: LogFixPoint16) -> Self {
        crate::get().to_int(value)
      }
    }
  }
}

make_impl!{i8, u8}
make_impl!{i16, u16}
make_impl!{i32, u32}
make_impl!{i64, u64}
