use super::*;

use crate::Format;

impl LogFixPoint16 {
  /// Multiply `self` by `other`. This is exact (`k`s add), except that results outside the
  /// representable range saturate to [`Self::MAX`] / [`Self::MIN`] or become [zero](Self::ZERO);
  /// since it does not round, it does not depend on the format.
  ///
  /// NaR times anything, *including zero*, is NaR.
  ///
  /// ```
  /// # use soft_logfixpoint::*;
  /// let x = LogFixPoint16::from_bits(0x4196);
  /// assert_eq!(x.mul(LogFixPoint16::ONE), x);
  /// assert_eq!(x.mul(LogFixPoint16::MINUS_ONE), -x);
  /// assert!(LogFixPoint16::NAR.mul(LogFixPoint16::ZERO).is_nar());
  /// ```
  pub const fn mul(self, other: Self) -> Self {
    if self.is_nar() || other.is_nar() {
      Self::NAR
    } else if self.is_zero() || other.is_zero() {
      Self::ZERO
    } else {
      let (x_sign, x_k) = self.decode_finite();
      let (y_sign, y_k) = other.decode_finite();
      Self::encode_grid(x_sign != y_sign, x_k as i64 + y_k as i64)
    }
  }
}

impl Format {
  /// Same as [`LogFixPoint16::mul`], which does not depend on the format.
  #[inline]
  pub fn mul(self, x: LogFixPoint16, y: LogFixPoint16) -> LogFixPoint16 {
    x.mul(y)
  }
}

use core::ops::{Mul, MulAssign};
super::mk_ops!{Mul, MulAssign, mul, mul_assign}
