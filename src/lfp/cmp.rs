use super::*;

use core::cmp::Ordering;

// Comparisons follow the real numbers, which means NaR is not equal to anything (not even to
// itself) and is unordered. Hence no `Eq`, `Ord`, or `Hash`: compare `to_bits()` for identity.
//
// Since every format has the same grid of `k`s (see the module docs), the order of two values is
// the same whatever format they are read in.

impl PartialEq for LogFixPoint16 {
  #[inline]
  fn eq(&self, other: &Self) -> bool {
    !self.is_nar() && self.0 == other.0
  }
}

impl PartialOrd for LogFixPoint16 {
  #[inline]
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    match (self.order_key(), other.order_key()) {
      (Some(a), Some(b)) => Some(a.cmp(&b)),
      _ => None,
    }
  }
}
