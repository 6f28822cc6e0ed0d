use super::*;

/// Used to do value-to-value conversions that may *round* the input (see below). It is the
/// reciprocal of [`RoundInto`].
///
/// The interface is identical to the standard [`From`]; but unlike that which is the
/// [convention for the `From` trait](core::convert::From#when-to-implement-from), these
/// conversions are _not necessarily lossless_.
///
/// Conversions to and from a [`LogFixPoint16`] through this trait use the [active
/// format](crate::get). To convert with a given format, use the corresponding methods on
/// [`Format`](crate::Format) instead, like [`Format::from_f64`](crate::Format::from_f64) or
/// [`Format::to_i64`](crate::Format::to_i64).
///
/// Like with [`From`], prefer implementing [`RoundFrom`] over [`RoundInto`], since implementing
/// [`RoundFrom`] automatically provides one with an implementation of [`RoundInto`], and prefer
/// using [`RoundInto`] over [`RoundFrom`] when specifying trait bounds on a generic function.
/// There's also a blanket implementation of `RoundFrom<T> for T`.
///
/// # Rounding
///
/// Into a [`LogFixPoint16`]:
///
///   - If the value is greater in absolute value than [`LogFixPoint16::MAX`], round to it (i.e.
///     never overflow to NaR).
///   - If the value is so small in absolute value that it would round to the grid point below
///     [`LogFixPoint16::MIN_POSITIVE`], it is zero.
///   - Otherwise, round to the nearest value according to the format's
///     [`RoundingMode`](crate::RoundingMode), or in case of a tie to the even bit pattern.
///
/// Out of a [`LogFixPoint16`], see the documentation for each specific implementation.
///
/// # Examples
///
/// ```
/// # use soft_logfixpoint::*;
/// assert!(LogFixPoint16::round_from(1) == LogFixPoint16::round_from(1.0001));
/// assert!(LogFixPoint16::round_from(1) < LogFixPoint16::round_from(1.01));
/// assert!(LogFixPoint16::round_from(f64::NAN).is_nar());
///
/// assert_eq!(i64::round_from(LogFixPoint16::round_from(1000)), 999);
/// assert!(f64::round_from(LogFixPoint16::NAR).is_nan());
/// ```
pub trait RoundFrom<T> {
  /// Converts to this type from the input type, rounding if necessary (see
  /// [Rounding](RoundFrom#rounding)).
  #[must_use]
  fn round_from(value: T) -> Self;
}

/// Used to do value-to-value conversions that may *round* the input. It is the reciprocal of
/// [`RoundFrom`], and implemented automatically for every type it is implemented for; see there
/// for details.
///
/// # Examples
///
/// ```
/// # use soft_logfixpoint::*;
/// let x: LogFixPoint16 = 3.0_f64.round_into();
/// assert_eq!(x.to_bits(), 0b0_1000001_10010110);
///
/// let y: f32 = LogFixPoint16::ONE.round_into();
/// assert_eq!(y, 1.);
/// let z: i8 = LogFixPoint16::MAX.round_into();
/// assert_eq!(z, i8::MAX);
/// ```
pub trait RoundInto<T> {
  /// Converts this type into the (usually inferred) input type, rounding if necessary (see
  /// [Rounding](RoundFrom#rounding)).
  #[must_use]
  fn round_into(self) -> T;
}

impl<T> RoundFrom<T> for T {
  fn round_from(value: T) -> Self {
    value
  }
}

impl<T, U> RoundInto<U> for T where U: RoundFrom<T> {
  fn round_into(self) -> U {
    U::round_from(self)
  }
}

mod float;
mod int;
