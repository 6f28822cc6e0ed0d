use super::*;

use crate::{Format, Tables};

impl Format {
  /// Add two finite values, given as sign and `k` in grid units.
  ///
  /// `x` and `y` cannot be symmetrical (same `k`, different signs), since the result would be
  /// exactly zero; the caller must handle that case.
  pub(crate) fn add_kernel(self, x: (bool, i32), y: (bool, i32)) -> LogFixPoint16 {
    // Order the operands so that |x| ≥ |y|; the sign of the result is then the sign of `x`.
    let ((x_sign, x_k), (y_sign, y_k)) = if x.1 >= y.1 {(x, y)} else {(y, x)};
    debug_assert!(x_sign == y_sign || x_k != y_k, "Precondition violated: symmetrical operands");

    // Go to linear space: |x| = exp2[ix] × 2^(nx - 62), and likewise for y. Since x_k ≥ y_k, also
    // nx ≥ ny.
    let exp2 = self.tables().exp2();
    let (nx, ix) = self.split_k(x_k);
    let (ny, iy) = self.split_k(y_k);
    let shift = (nx - ny) as u32;

    // Both mantissas are in [1, 2[ with 62 fraction bits; put them in the upper half of a u128
    // (i.e. make them wide mantissas), so that up to 64 bits shifted out of `y` are kept exactly. Anything further is accumulated
    // in `sticky`.
    let x = u128::from(exp2[ix]) << 64;
    let y = u128::from(exp2[iy]) << 64;
    let (y, sticky) =
      if shift >= u128::BITS {
        (0, true)
      } else {
        (y >> shift, y & ((1 << shift) - 1) != 0)
      };

    // Same signs: the sum is at most 4, which still fits (the mantissas use bits 126 and below).
    //
    // Different signs: we know that x > y, strictly. If some bits of `y` were lost, the true `y`
    // is slightly *above* the truncated one, so the true difference is slightly *below* `x - y`:
    // subtract one more unit, and the sticky bit makes up for the (positive) remainder.
    let sum =
      if x_sign == y_sign {
        x + y
      } else {
        x - y - u128::from(sticky)
      };

    // Normalise: we want the leading 1 of `sum` at bit 126, the top of a wide mantissa. The value
    // of `sum` is `sum × 2^(nx - 126)`, so moving the leading 1 from bit `top` to bit 126 means an
    // exponent of `nx + top - 126`.
    //
    // Bits only get lost (here or in `sticky`) if `y` was shifted by more than 64 places, i.e. is
    // negligible next to `x`; the result is then very close to a grid point and far from any
    // rounding boundary.
    let top = u128::BITS - 1 - sum.leading_zeros();
    let (mantissa, lost) =
      if top > Tables::WIDE_WIDTH {
        (sum >> 1, sum & 1 != 0)
      } else {
        (sum << (Tables::WIDE_WIDTH - top), false)
      };
    let exp = nx + top as i32 - 126;

    self.encode_linear(x_sign, exp, mantissa, sticky || lost)
  }

  /// Add `x` and `y`, rounding according to this format.
  ///
  ///   - NaR plus anything is NaR.
  ///   - Zero plus `x` is `x`, unchanged.
  ///   - `x` plus `-x` is zero.
  ///   - Results too large saturate to [`LogFixPoint16::MAX`] / [`LogFixPoint16::MIN`].
  ///
  /// ```
  /// # use soft_logfixpoint::*;
  /// let format = Format::DEFAULT;
  /// let one = LogFixPoint16::ONE;
  /// assert_eq!(format.add(one, one), format.from_f64(2.));
  /// assert!(format.add(one, LogFixPoint16::MINUS_ONE).is_zero());
  /// ```
  pub fn add(self, x: LogFixPoint16, y: LogFixPoint16) -> LogFixPoint16 {
    if x.is_nar() || y.is_nar() {
      LogFixPoint16::NAR
    } else if x.is_zero() {
      y
    } else if y.is_zero() {
      x
    } else {
      let x = x.decode_finite();
      let y = y.decode_finite();
      if x.1 == y.1 && x.0 != y.0 {
        LogFixPoint16::ZERO
      } else {
        self.add_kernel(x, y)
      }
    }
  }

  /// Subtract `y` from `x`, rounding according to this format. Same as `self.add(x, -y)`.
  pub fn sub(self, x: LogFixPoint16, y: LogFixPoint16) -> LogFixPoint16 {
    self.add(x, -y)
  }
}

impl LogFixPoint16 {
  /// Addition in the [active format](crate::get); what the `+` operator does.
  #[inline]
  pub(crate) fn add(self, other: Self) -> Self {
    crate::get().add(self, other)
  }

  /// Subtraction in the [active format](crate::get); what the `-` operator does.
  #[inline]
  pub(crate) fn sub(self, other: Self) -> Self {
    crate::get().sub(self, other)
  }
}

use core::ops::{Add, AddAssign, Sub, SubAssign};
super::mk_ops!{Add, AddAssign, add, add_assign}
super::mk_ops!{Sub, SubAssign, sub, sub_assign}
