use super::*;

use crate::Format;

impl LogFixPoint16 {
  /// Zero (`0`), the additive identity element. There is no negative zero.
  //
  // Represented by the bit pattern `0x0000`.
  pub const ZERO: Self = Self(0);

  /// Not-a-real (`NaR`): the result of undefined operations, like `0 / 0` or `1 / 0`.
  //
  // Represented by the bit pattern `0x8000`.
  pub const NAR: Self = Self(Self::SIGN_MASK);

  /// Largest representable value ("floatmax"), equal to `-MIN`. Its real value is
  /// `2^(bias - 2^-frac_bits)`, so it depends on the format.
  //
  // Represented by the bit pattern `0x7fff`.
  pub const MAX: Self = Self(Self::MAGNITUDE_MASK);

  /// Smallest representable value, equal to `-MAX`.
  ///
  /// Not to be confused with the smallest absolute value, i.e. [`Self::MIN_POSITIVE`]!
  //
  // Represented by the bit pattern `0xffff`.
  pub const MIN: Self = Self(u16::MAX);

  /// Smallest *positive* value ("floatmin"), equal to `-MAX_NEGATIVE`. Its real value is
  /// `2^(-bias + 2^-frac_bits)`, so it depends on the format.
  //
  // Represented by the bit pattern `0x0001`.
  pub const MIN_POSITIVE: Self = Self(1);

  /// Largest *negative* value, equal to `-MIN_POSITIVE`.
  //
  // Represented by the bit pattern `0x8001`.
  pub const MAX_NEGATIVE: Self = Self(Self::SIGN_MASK | 1);

  /// One (`1`), the multiplicative identity element, in every format.
  //
  // Represented by the bit pattern `0x4000` (k = 0).
  pub const ONE: Self = Self(Self::K_OFFSET as u16);

  /// Negative one (`-1`), in every format.
  //
  // Represented by the bit pattern `0xc000`.
  pub const MINUS_ONE: Self = Self(Self::SIGN_MASK | Self::K_OFFSET as u16);
}

impl Format {
  /// The smallest positive value, [`LogFixPoint16::MIN_POSITIVE`], as an `f64` in this format.
  pub fn floatmin(self) -> f64 {
    self.to_f64(LogFixPoint16::MIN_POSITIVE)
  }

  /// The largest value, [`LogFixPoint16::MAX`], as an `f64` in this format.
  pub fn floatmax(self) -> f64 {
    self.to_f64(LogFixPoint16::MAX)
  }
}
