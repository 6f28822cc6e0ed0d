use super::*;

impl LogFixPoint16 {
  /// The size of this type in bits.
  pub const BITS: u32 = 16;

  /// The sign bit.
  pub(crate) const SIGN_MASK: u16 = 0x8000;

  /// All bits but the sign bit: the (offset) `k` of a finite value.
  pub(crate) const MAGNITUDE_MASK: u16 = 0x7fff;

  /// The magnitude bits of a finite value are `k + K_OFFSET`, with `k` in grid units, for every
  /// format.
  pub(crate) const K_OFFSET: i32 = 1 << 14;

  /// Smallest `k` of a finite value, in grid units (that of [`Self::MIN_POSITIVE`]).
  pub(crate) const K_MIN: i32 = 1 - Self::K_OFFSET;

  /// Largest `k` of a finite value, in grid units (that of [`Self::MAX`]).
  pub(crate) const K_MAX: i32 = Self::MAGNITUDE_MASK as i32 - Self::K_OFFSET;

  /// Construct a value from its raw bit representation.
  ///
  /// Every bit pattern is a valid value; which number it stands for depends on the
  /// [`Format`](crate::Format).
  #[inline]
  pub const fn from_bits(bits: u16) -> Self {
    Self(bits)
  }

  /// Return the raw bit representation of `self`.
  #[inline]
  pub const fn to_bits(self) -> u16 {
    self.0
  }

  /// Is `self` [zero](Self::ZERO)?
  #[inline]
  pub const fn is_zero(self) -> bool {
    self.0 == 0
  }

  /// Is `self` [NaR](Self::NAR)?
  #[inline]
  pub const fn is_nar(self) -> bool {
    self.0 == Self::SIGN_MASK
  }

  /// Is `self` either zero or NaR? Same as `self.is_zero() || self.is_nar()`, but faster.
  #[inline]
  pub(crate) const fn is_special(self) -> bool {
    self.0 & Self::MAGNITUDE_MASK == 0
  }

  /// Is `self` a finite, negative value? False for zero and for NaR.
  #[inline]
  pub const fn is_sign_negative(self) -> bool {
    self.0 & Self::SIGN_MASK != 0 && !self.is_special()
  }
}
