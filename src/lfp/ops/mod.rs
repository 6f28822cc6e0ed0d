use super::*;

/// Addition and subtraction (both use the same addition algorithm, and `a - b` is simply
/// `a + (-b)`).
mod add;

/// Multiplication.
mod mul;

/// Division.
mod div;

/// Helper macro for implementing operators for all combinations of value and reference.
///
/// `$name` must be an inherent method of [`LogFixPoint16`] (otherwise the call would resolve to
/// the operator trait's own method, and recurse).
macro_rules! mk_ops {
  ($trait:ident, $trait_assign:ident, $name:ident, $name_assign:ident) => {
    impl $trait<LogFixPoint16> for LogFixPoint16 {
      type Output = LogFixPoint16;

      #[inline]
      fn $name(self, rhs: Self) -> Self::Output { LogFixPoint16::$name(self, rhs) }
    }

    impl $trait<&LogFixPoint16> for LogFixPoint16 {
      type Output = LogFixPoint16;

      #[inline]
      fn $name(self, rhs: &Self) -> Self::Output { LogFixPoint16::$name(self, *rhs) }
    }

    impl $trait<LogFixPoint16> for &LogFixPoint16 {
      type Output = LogFixPoint16;

      #[inline]
      fn $name(self, rhs: LogFixPoint16) -> Self::Output { LogFixPoint16::$name(*self, rhs) }
    }

    impl $trait<&LogFixPoint16> for &LogFixPoint16 {
      type Output = LogFixPoint16;

      #[inline]
      fn $name(self, rhs: &LogFixPoint16) -> Self::Output { LogFixPoint16::$name(*self, *rhs) }
    }

    impl $trait_assign<LogFixPoint16> for LogFixPoint16 {
      #[inline]
      fn $name_assign(&mut self, rhs: LogFixPoint16) { *self = LogFixPoint16::$name(*self, rhs) }
    }

    impl $trait_assign<&LogFixPoint16> for LogFixPoint16 {
      #[inline]
      fn $name_assign(&mut self, rhs: &LogFixPoint16) { *self = LogFixPoint16::$name(*self, *rhs) }
    }
  }
}

pub(crate) use mk_ops;

/// Macro for instantating the suite of tests for a binary operator. `$method` is the [`Format`]
/// method that computes it.
macro_rules! mk_tests {
  ($op:tt, $op_assign:tt, $method:ident) => {
    use crate::{Format, LogFixPoint16, RoundingMode};
    use crate::lfp::rational;
    use malachite::rational::Rational;
    use proptest::prelude::*;

    #[allow(dead_code)]
    fn ops() {
      let mut a = LogFixPoint16::ONE;
      let mut b = LogFixPoint16::MINUS_ONE;
      let _ = a $op b;
      let _ = &a $op b;
      let _ = a $op &b;
      let _ = &a $op &b;
      a $op_assign b;
      b $op_assign &a;
    }

    /// Aux function: check that `a $op b` is rounded correctly in `format`.
    fn is_correct_rounded(format: Format, a: LogFixPoint16, b: LogFixPoint16) -> bool {
      let result = format.$method(a, b);
      if let (Ok(a), Ok(b)) = (format.to_rational(a), format.to_rational(b)) {
        if stringify!($op) == "/" && b == Rational::from(0) {
          return result.is_nar()
        }
        let exact = a $op b;
        rational::is_correct_rounded(format, exact, result)
      } else {
        result.is_nar()
      }
    }

    macro_rules! test_proptest {
      ($name:ident, $frac_bits:expr, $rounding:expr) => {
        proptest!{
          #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]
          #[test]
          fn $name(
            a in LogFixPoint16::cases_proptest_all(),
            b in LogFixPoint16::cases_proptest_all(),
          ) {
            let format = Format::new($frac_bits, $rounding).unwrap();
            assert!(is_correct_rounded(format, a, b), "{:?} {} {:?} in {}", a, stringify!($op), b, format)
          }
        }
      };
    }

    // Two random values are usually many octaves apart; also test values of similar magnitude,
    // where most of the interesting rounding happens.
    macro_rules! test_proptest_near {
      ($name:ident, $frac_bits:expr, $rounding:expr) => {
        proptest!{
          #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]
          #[test]
          fn $name((a, b) in LogFixPoint16::cases_proptest_near()) {
            let format = Format::new($frac_bits, $rounding).unwrap();
            assert!(is_correct_rounded(format, a, b), "{:?} {} {:?} in {}", a, stringify!($op), b, format)
          }
        }
      };
    }

    test_proptest!{lin_7_proptest, 7, RoundingMode::Lin}
    test_proptest!{lin_8_proptest, 8, RoundingMode::Lin}
    test_proptest!{lin_9_proptest, 9, RoundingMode::Lin}
    test_proptest!{lin_10_proptest, 10, RoundingMode::Lin}
    test_proptest!{lin_11_proptest, 11, RoundingMode::Lin}
    test_proptest!{log_7_proptest, 7, RoundingMode::Log}
    test_proptest!{log_8_proptest, 8, RoundingMode::Log}
    test_proptest!{log_9_proptest, 9, RoundingMode::Log}
    test_proptest!{log_10_proptest, 10, RoundingMode::Log}
    test_proptest!{log_11_proptest, 11, RoundingMode::Log}

    test_proptest_near!{lin_7_near, 7, RoundingMode::Lin}
    test_proptest_near!{lin_8_near, 8, RoundingMode::Lin}
    test_proptest_near!{lin_9_near, 9, RoundingMode::Lin}
    test_proptest_near!{lin_10_near, 10, RoundingMode::Lin}
    test_proptest_near!{lin_11_near, 11, RoundingMode::Lin}
    test_proptest_near!{log_7_near, 7, RoundingMode::Log}
    test_proptest_near!{log_8_near, 8, RoundingMode::Log}
    test_proptest_near!{log_9_near, 9, RoundingMode::Log}
    test_proptest_near!{log_10_near, 10, RoundingMode::Log}
    test_proptest_near!{log_11_near, 11, RoundingMode::Log}

    #[test]
    fn nar_dominates() {
      for format in Format::all() {
        for x in LogFixPoint16::cases_exhaustive_all() {
          assert!(format.$method(LogFixPoint16::NAR, x).is_nar(), "{x:?}");
          assert!(format.$method(x, LogFixPoint16::NAR).is_nar(), "{x:?}");
        }
      }
    }
  }
}

pub(crate) use mk_tests;
