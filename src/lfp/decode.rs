use super::*;

use crate::Format;

/// The semantic value of a [`LogFixPoint16`]: one of the two special values, or a finite value
/// `±2^k`.
///
/// `k` is in *grid units*, i.e. it is the real exponent times `2^frac_bits`. Since the bias of
/// the integer field is `2^(int_bits - 1)`, the grid-unit `k` of a bit pattern is the same in
/// every format; converting it to a real exponent is what needs a [`Format`] (see
/// [`Format::exponent`]).
#[derive(Debug)]
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decoded {
  Zero,
  NaR,
  Finite {
    /// `true` if negative.
    sign: bool,
    /// Base-2 logarithm of the absolute value, in units of `2^-frac_bits`.
    k: i32,
  },
}

impl LogFixPoint16 {
  /// Decode `self` into its sign and `k`, or a special value.
  ///
  /// ```
  /// # use soft_logfixpoint::*;
  /// assert_eq!(LogFixPoint16::ZERO.decode(), Decoded::Zero);
  /// assert_eq!(LogFixPoint16::NAR.decode(), Decoded::NaR);
  /// assert_eq!(LogFixPoint16::MINUS_ONE.decode(), Decoded::Finite { sign: true, k: 0 });
  /// assert_eq!(LogFixPoint16::from_bits(0x4196).decode(), Decoded::Finite { sign: false, k: 406 });
  /// ```
  #[inline]
  pub const fn decode(self) -> Decoded {
    if self.is_zero() {
      Decoded::Zero
    } else if self.is_nar() {
      Decoded::NaR
    } else {
      let (sign, k) = self.decode_finite();
      Decoded::Finite { sign, k }
    }
  }

  /// Decode a value **which is not 0 or NaR** into its sign and `k` in grid units.
  #[inline]
  pub(crate) const fn decode_finite(self) -> (bool, i32) {
    debug_assert!(!self.is_special(), "Precondition violated: cannot be 0 or NaR");
    let sign = self.0 & Self::SIGN_MASK != 0;
    let k = (self.0 & Self::MAGNITUDE_MASK) as i32 - Self::K_OFFSET;
    (sign, k)
  }
}

impl Format {
  /// Decode `x`. The result does not actually depend on the format (see [`Decoded`]); this is
  /// [`LogFixPoint16::decode`], provided here so that every operation is available on a `Format`.
  #[inline]
  pub fn decode(self, x: LogFixPoint16) -> Decoded {
    x.decode()
  }

  /// The base-2 logarithm of the absolute value of `x` (i.e. the real exponent `k` of `±2^k`),
  /// read in this format. Zero gives `-∞`, NaR gives NaN.
  ///
  /// The result is exact: `k` has at most 15 significant bits.
  ///
  /// ```
  /// # use soft_logfixpoint::*;
  /// let x = LogFixPoint16::from_bits(0b0_1000001_10010110);
  /// assert_eq!(Format::new(8, RoundingMode::Lin)?.exponent(x), 1. + 150. / 256.);
  /// assert_eq!(Format::new(9, RoundingMode::Lin)?.exponent(x), 406. / 512.);
  /// # Ok::<(), Error>(())
  /// ```
  pub fn exponent(self, x: LogFixPoint16) -> f64 {
    match x.decode() {
      Decoded::Zero => f64::NEG_INFINITY,
      Decoded::NaR => f64::NAN,
      Decoded::Finite { k, .. } => self.k_to_f64(k),
    }
  }

  /// Convert a `k` in grid units to a real exponent.
  #[inline]
  pub(crate) fn k_to_f64(self, k: i32) -> f64 {
    f64::from(k) / f64::from(1u32 << self.frac_bits())
  }

  /// Split a `k` in grid units into its integer part `n` (rounded towards -∞) and its fraction
  /// index `i`, so that `k = n × 2^frac_bits + i`.
  #[inline]
  pub(crate) const fn split_k(self, k: i32) -> (i32, usize) {
    (k >> self.frac_bits(), (k & self.frac_mask()) as usize)
  }
}
