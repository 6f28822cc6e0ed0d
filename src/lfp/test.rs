use super::*;

use proptest::prelude::*;
use std::sync::{Mutex, MutexGuard};

impl LogFixPoint16 {
  /// An iterator through all the values except 0 and NaR.
  pub(crate) fn cases_exhaustive() -> impl Iterator<Item = Self> {
    let pos = 1 ..= Self::MAGNITUDE_MASK;
    let neg = Self::SIGN_MASK + 1 ..= u16::MAX;
    pos.chain(neg).map(Self::from_bits)
  }

  /// An iterator through all the values, including 0 and NaR.
  pub(crate) fn cases_exhaustive_all() -> impl Iterator<Item = Self> {
    (0 ..= u16::MAX).map(Self::from_bits)
  }

  /// A [proptest Strategy](proptest::strategy::Strategy) that yields values except 0 and NaR.
  pub(crate) fn cases_proptest() -> impl Strategy<Value = Self> {
    (
      any::<bool>(),
      1 ..= Self::MAGNITUDE_MASK,
    ).prop_map(|(sign, abs)| {
      let sign = if sign {Self::SIGN_MASK} else {0};
      Self::from_bits(sign | abs)
    })
  }

  /// A [proptest Strategy](proptest::strategy::Strategy) that yields all values, with 0 and NaR
  /// a lot more often than their share of the bit patterns.
  pub(crate) fn cases_proptest_all() -> impl Strategy<Value = Self> {
    prop_oneof![
      1 => Just(Self::ZERO),
      1 => Just(Self::NAR),
      30 => Self::cases_proptest(),
    ]
  }

  /// A [proptest Strategy](proptest::strategy::Strategy) that yields pairs of values except 0 and
  /// NaR, of random signs but whose magnitudes are not too far apart.
  pub(crate) fn cases_proptest_near() -> impl Strategy<Value = (Self, Self)> {
    (
      Self::cases_proptest(),
      any::<bool>(),
      prop_oneof![-64 ..= 64_i32, -0x1000 ..= 0x1000_i32],
    ).prop_map(|(a, sign, delta)| {
      let (_, k) = a.decode_finite();
      let k = (k + delta).clamp(Self::K_MIN, Self::K_MAX);
      (a, Self::encode_grid(sign, k as i64))
    })
  }
}

/// Serialise tests that change (or depend on) the process-wide active format.
///
/// Tests run in parallel, so any test that calls [`crate::set_format`] and friends, or uses the
/// operators that read the active format, must hold this guard for its whole duration and leave
/// the active format as it found it.
pub(crate) fn active_lock() -> MutexGuard<'static, ()> {
  static LOCK: Mutex<()> = Mutex::new(());
  // A test that panicked while holding the lock does not make the others invalid.
  LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn cases_exhaustive() {
    let cases: Vec<_> = LogFixPoint16::cases_exhaustive().map(LogFixPoint16::to_bits).collect();
    assert_eq!(cases.len(), (1 << 16) - 2);
    assert_eq!(cases.first(), Some(&0x0001));
    assert_eq!(cases.last(), Some(&0xffff));
    assert!(!cases.contains(&0x0000));
    assert!(!cases.contains(&0x8000));
  }

  #[test]
  fn cases_exhaustive_all() {
    assert_eq!(LogFixPoint16::cases_exhaustive_all().count(), 1 << 16);
  }

  proptest!{
    #[test]
    fn cases_proptest(x in LogFixPoint16::cases_proptest()) {
      prop_assert!(!x.is_special())
    }

    #[test]
    fn cases_proptest_near((a, b) in LogFixPoint16::cases_proptest_near()) {
      prop_assert!(!a.is_special() && !b.is_special());
      let (_, ka) = a.decode_finite();
      let (_, kb) = b.decode_finite();
      prop_assert!((ka - kb).abs() <= 0x1000);
    }
  }
}
