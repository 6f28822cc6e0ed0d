use super::*;

use crate::Format;

impl LogFixPoint16 {
  /// Divide `self` by `other`. Like [`Self::mul`], this is exact (`k`s subtract) up to
  /// saturation and underflow, and does not depend on the format.
  ///
  /// Division by zero is NaR, as is anything involving NaR; zero divided by anything else is zero.
  ///
  /// ```
  /// # use soft_logfixpoint::*;
  /// let x = LogFixPoint16::from_bits(0x4196);
  /// assert_eq!(x.div(x), LogFixPoint16::ONE);
  /// assert!(x.div(LogFixPoint16::ZERO).is_nar());
  /// assert!(LogFixPoint16::ZERO.div(x).is_zero());
  /// ```
  pub const fn div(self, other: Self) -> Self {
    if self.is_nar() || other.is_nar() || other.is_zero() {
      Self::NAR
    } else if self.is_zero() {
      Self::ZERO
    } else {
      let (x_sign, x_k) = self.decode_finite();
      let (y_sign, y_k) = other.decode_finite();
      Self::encode_grid(x_sign != y_sign, x_k as i64 - y_k as i64)
    }
  }
}

impl Format {
  /// Same as [`LogFixPoint16::div`], which does not depend on the format.
  #[inline]
  pub fn div(self, x: LogFixPoint16, y: LogFixPoint16) -> LogFixPoint16 {
    x.div(y)
  }
}

use core::ops::{Div, DivAssign};
super::mk_ops!{Div, DivAssign, div, div_assign}
