use super::*;

use crate::Format;

impl LogFixPoint16 {
  /// Return the absolute value of `self`. Zero and NaR are unchanged.
  #[inline]
  pub const fn abs(self) -> Self {
    if self.is_special() {
      self
    } else {
      Self(self.0 & Self::MAGNITUDE_MASK)
    }
  }

  /// Return the reciprocal `1 / self`.
  ///
  /// This is exact: the `k` of the result is `-k`, and the range of `k` is symmetric, so it
  /// never saturates nor underflows. The reciprocal of zero is NaR.
  ///
  /// ```
  /// # use soft_logfixpoint::*;
  /// assert_eq!(LogFixPoint16::MAX.inv(), LogFixPoint16::MIN_POSITIVE);
  /// assert_eq!(LogFixPoint16::MINUS_ONE.inv(), LogFixPoint16::MINUS_ONE);
  /// assert!(LogFixPoint16::ZERO.inv().is_nar());
  /// ```
  pub const fn inv(self) -> Self {
    if self.is_special() {
      Self::NAR
    } else {
      let (sign, k) = self.decode_finite();
      Self::encode_grid(sign, -k as i64)
    }
  }

  /// Return the square `self × self`. This is exact (`k` doubles), up to saturation and
  /// underflow, and is always nonnegative.
  pub const fn power2(self) -> Self {
    if self.is_special() {
      self
    } else {
      let (_, k) = self.decode_finite();
      Self::encode_grid(false, 2 * k as i64)
    }
  }

  /// The values of `self`'s magnitude in order, and `0` for zero: a key that orders like the real
  /// numbers do. `None` for NaR.
  #[inline]
  pub(crate) const fn order_key(self) -> Option<i32> {
    if self.is_nar() {
      None
    } else if self.0 & Self::SIGN_MASK == 0 {
      Some(self.0 as i32)
    } else {
      Some(-((self.0 & Self::MAGNITUDE_MASK) as i32))
    }
  }

  /// Inverse of [`Self::order_key`]; NaR if `key` is out of range.
  #[inline]
  const fn from_order_key(key: i32) -> Self {
    if key > Self::MAGNITUDE_MASK as i32 || key < -(Self::MAGNITUDE_MASK as i32) {
      Self::NAR
    } else if key >= 0 {
      Self(key as u16)
    } else {
      Self(Self::SIGN_MASK | (-key) as u16)
    }
  }

  /// The next representable value above `self` in the order of the real numbers, in every format.
  ///
  /// There is nothing above [`Self::MAX`], so `MAX.next_up()` is NaR; the next value of NaR is
  /// also NaR.
  ///
  /// ```
  /// # use soft_logfixpoint::*;
  /// assert_eq!(LogFixPoint16::ZERO.next_up(), LogFixPoint16::MIN_POSITIVE);
  /// assert_eq!(LogFixPoint16::MAX_NEGATIVE.next_up(), LogFixPoint16::ZERO);
  /// assert_eq!(LogFixPoint16::MIN.next_up().to_bits(), 0xfffe);
  /// assert!(LogFixPoint16::MAX.next_up().is_nar());
  /// ```
  pub const fn next_up(self) -> Self {
    match self.order_key() {
      Some(key) => Self::from_order_key(key + 1),
      None => Self::NAR,
    }
  }

  /// The next representable value below `self` in the order of the real numbers, in every format.
  ///
  /// There is nothing below [`Self::MIN`], so `MIN.next_down()` is NaR; the previous value of
  /// NaR is also NaR.
  pub const fn next_down(self) -> Self {
    match self.order_key() {
      Some(key) => Self::from_order_key(key - 1),
      None => Self::NAR,
    }
  }
}

impl Format {
  /// Same as `-x`, which does not depend on the format.
  #[inline]
  pub fn neg(self, x: LogFixPoint16) -> LogFixPoint16 {
    -x
  }

  /// Same as [`LogFixPoint16::abs`], which does not depend on the format.
  #[inline]
  pub fn abs(self, x: LogFixPoint16) -> LogFixPoint16 {
    x.abs()
  }

  /// Same as [`LogFixPoint16::inv`], which does not depend on the format.
  #[inline]
  pub fn inv(self, x: LogFixPoint16) -> LogFixPoint16 {
    x.inv()
  }

  /// Same as [`LogFixPoint16::power2`], which does not depend on the format.
  #[inline]
  pub fn power2(self, x: LogFixPoint16) -> LogFixPoint16 {
    x.power2()
  }
}

impl core::ops::Neg for LogFixPoint16 {
  type Output = LogFixPoint16;

  /// Flip the sign of a finite value; zero and NaR are unchanged (there is no negative zero).
  #[inline]
  fn neg(self) -> Self::Output {
    if self.is_special() {
      self
    } else {
      LogFixPoint16(self.0 ^ LogFixPoint16::SIGN_MASK)
    }
  }
}

impl core::ops::Neg for &LogFixPoint16 {
  type Output = LogFixPoint16;

  #[inline]
  fn neg(self) -> Self::Output {
    -*self
  }
}
