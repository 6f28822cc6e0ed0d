use super::*;

use core::cmp::Ordering;
use crate::{Format, RoundingMode};

use malachite::rational::Rational;
use malachite::base::num::arithmetic::traits::PowerOf2;

/// The error type returned when a [`LogFixPoint16`] cannot be converted to a [`Rational`] because
/// it is [NaR](LogFixPoint16::NAR).
#[derive(Debug)]
#[derive(PartialEq, Eq)]
pub struct IsNaR;

impl Format {
  /// The value of the grid point whose magnitude bits are `key`, as a [`Rational`].
  ///
  /// The true value `2^k` is irrational; what we use is the value the [lookup
  /// tables](crate::Tables) say it has, `exp2[i] × 2^(n - 62)`, since that is the value every
  /// operation that goes through linear space works with. Key `0` is the slot taken up by zero:
  /// the grid point just below [`LogFixPoint16::MIN_POSITIVE`].
  fn slot_value(self, key: u16) -> Rational {
    let (n, i) = self.split_k(i32::from(key) - LogFixPoint16::K_OFFSET);
    let mantissa = Rational::from(self.tables().exp2()[i]);
    mantissa * Rational::power_of_2(i64::from(n) - i64::from(crate::Tables::MANTISSA_WIDTH))
  }

  /// Convert `x` to a [`Rational`], read in this format; fails if `x` is NaR.
  pub(crate) fn to_rational(self, x: LogFixPoint16) -> Result<Rational, IsNaR> {
    match x.decode() {
      Decoded::Zero => Ok(Rational::from(0)),
      Decoded::NaR => Err(IsNaR),
      Decoded::Finite { sign, .. } => {
        let abs = self.slot_value(x.to_bits() & LogFixPoint16::MAGNITUDE_MASK);
        Ok(if sign {-abs} else {abs})
      },
    }
  }

  /// Compare the (nonnegative) `abs` with the rounding boundary between grid points `key` and
  /// `key + 1`: their arithmetic mean in linear rounding, their geometric mean in log rounding.
  fn cmp_boundary(self, abs: &Rational, key: u16) -> Ordering {
    let lo = self.slot_value(key);
    let hi = self.slot_value(key + 1);
    match self.rounding() {
      RoundingMode::Lin => (abs * Rational::from(2)).cmp(&(lo + hi)),
      RoundingMode::Log => (abs * abs).cmp(&(lo * hi)),
    }
  }
}

/// Check whether the rational number `exact` should be rounded to `x` in `format`.
///
///   - Round to the nearest grid point, where "nearest" is in terms of absolute **difference** in
///     [`RoundingMode::Lin`] and of absolute **ratio** in [`RoundingMode::Log`]; ties to the even
///     bit pattern.
///   - Overflow: anything that would round above [`LogFixPoint16::MAX`] is `MAX` (likewise for
///     negatives).
///   - Underflow: anything that would round to the grid point below
///     [`LogFixPoint16::MIN_POSITIVE`], or further down, is zero. Only this and the exact number
///     0 are rounded to zero.
///   - No number is rounded to NaR.
pub fn is_correct_rounded(format: Format, exact: Rational, x: LogFixPoint16) -> bool {
  let zero = Rational::from(0);
  if x.is_nar() { return false }
  if exact == zero { return x.is_zero() }

  // Signs must match, except that there is no negative zero.
  let negative = exact < zero;
  if !x.is_zero() && negative != x.is_sign_negative() { return false }
  let abs = if negative {-exact} else {exact};

  let key = x.to_bits() & LogFixPoint16::MAGNITUDE_MASK;
  let is_even = key & 1 == 0;
  // `abs` must be above the boundary with the grid point below (if any)...
  let above_prev = key == 0 || match format.cmp_boundary(&abs, key - 1) {
    Ordering::Greater => true,
    Ordering::Equal => is_even,
    Ordering::Less => false,
  };
  // ...and below the boundary with the grid point above (if any).
  let below_next = key == LogFixPoint16::MAGNITUDE_MASK || match format.cmp_boundary(&abs, key) {
    Ordering::Less => true,
    Ordering::Equal => is_even,
    Ordering::Greater => false,
  };
  above_prev && below_next
}

pub fn try_is_correct_rounded(format: Format, exact: Result<Rational, IsNaR>, x: LogFixPoint16) -> bool {
  match exact {
    Ok(exact) => is_correct_rounded(format, exact, x),
    Err(IsNaR) => x.is_nar(),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn examples() {
    let format = Format::DEFAULT;
    assert_eq!(format.to_rational(LogFixPoint16::ZERO), Ok(Rational::from(0)));
    assert_eq!(format.to_rational(LogFixPoint16::NAR), Err(IsNaR));
    assert_eq!(format.to_rational(LogFixPoint16::ONE), Ok(Rational::from(1)));
    assert_eq!(format.to_rational(LogFixPoint16::MINUS_ONE), Ok(Rational::from(-1)));
    // k = ±1, ±2, -1.5 (exp2 of a whole number of octaves is exact)
    assert_eq!(format.to_rational(LogFixPoint16::from_bits(0x4100)), Ok(Rational::from(2)));
    assert_eq!(format.to_rational(LogFixPoint16::from_bits(0x4200)), Ok(Rational::from(4)));
    assert_eq!(format.to_rational(LogFixPoint16::from_bits(0xbf00)), Ok(Rational::from_signeds(-1, 2)));
    assert_eq!(format.to_rational(LogFixPoint16::from_bits(0x3e80)), Ok(Rational::from_signeds(1, 2) * format.slot_value(0x3f80)));
    // Same bits, 9 fraction bits: k = 1 / 2
    let format = Format::new(9, RoundingMode::Lin).unwrap();
    assert_eq!(format.to_rational(LogFixPoint16::from_bits(0x4100)), Ok(format.slot_value(0x4100)));
    assert_eq!(format.to_rational(LogFixPoint16::from_bits(0x4200)), Ok(Rational::from(2)));
  }

  #[test]
  fn matches_to_f64() {
    for format in Format::all() {
      for x in LogFixPoint16::cases_exhaustive().step_by(97) {
        let exact = format.to_rational(x).unwrap();
        assert_eq!(Rational::try_from(format.to_f64(x)).ok(), Some(exact), "{x:?} in {format}");
      }
    }
  }

  #[test]
  fn correct_rounded() {
    for format in Format::all() {
      let three = format.from_f64(3.);
      assert!(is_correct_rounded(format, Rational::from(3), three));
      assert!(is_correct_rounded(format, Rational::from(-3), -three));
      assert!(!is_correct_rounded(format, Rational::from(3), -three));
      assert!(!is_correct_rounded(format, Rational::from(3), three.next_up()));
      assert!(!is_correct_rounded(format, Rational::from(3), three.next_down()));
      assert!(!is_correct_rounded(format, Rational::from(3), LogFixPoint16::NAR));

      assert!(is_correct_rounded(format, Rational::from(1), LogFixPoint16::ONE));
      assert!(is_correct_rounded(format, Rational::from(0), LogFixPoint16::ZERO));
      assert!(!is_correct_rounded(format, Rational::from(0), LogFixPoint16::MIN_POSITIVE));

      let huge = Rational::power_of_2(1000_i64);
      assert!(is_correct_rounded(format, huge.clone(), LogFixPoint16::MAX));
      assert!(is_correct_rounded(format, -huge.clone(), LogFixPoint16::MIN));
      assert!(!is_correct_rounded(format, huge, LogFixPoint16::MAX.next_down()));

      let tiny = Rational::power_of_2(-1000_i64);
      assert!(is_correct_rounded(format, tiny.clone(), LogFixPoint16::ZERO));
      assert!(is_correct_rounded(format, -tiny.clone(), LogFixPoint16::ZERO));
      assert!(!is_correct_rounded(format, tiny, LogFixPoint16::MIN_POSITIVE));
    }
  }

  #[test]
  fn try_correct_rounded() {
    let format = Format::DEFAULT;
    assert!(try_is_correct_rounded(format, Err(IsNaR), LogFixPoint16::NAR));
    assert!(!try_is_correct_rounded(format, Err(IsNaR), LogFixPoint16::ZERO));
    assert!(try_is_correct_rounded(format, Ok(Rational::from(1)), LogFixPoint16::ONE));
  }
}
