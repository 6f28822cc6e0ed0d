use super::*;

use core::cmp::Ordering;
use std::sync::OnceLock;

/// The lookup tables that take a [`Format`] between linear space and log space.
///
/// Both tables are indexed by a fraction index `i`, that is, a `k` whose integer part is 0 and
/// whose fraction bits are `i`; they have `2^frac_bits` entries each.
///
///   - [`Self::exp2`] maps `i` to the linear mantissa `2^(i / 2^frac_bits)`, as an unsigned
///     fixed-point number with [`Self::MANTISSA_WIDTH`] fraction bits (so in the range
///     [`Self::ONE`] ..< `2 * Self::ONE`).
///   - [`Self::log2_bounds`] is the inverse map, `log2(mantissa)`, but *with rounding already
///     folded in*: `log2_bounds[i]` is the mantissa (with one more fraction bit than `exp2`, so
///     that a midpoint is never truncated) at which rounding switches from fraction index `i` to
///     `i + 1`. In [`RoundingMode::Lin`] that is the arithmetic mean of the linear values of `i`
///     and `i + 1`, exactly; in [`RoundingMode::Log`] it is their geometric mean, which is
///     irrational, so the table holds an f64 approximation of it.
///
/// So taking the log of a mantissa and rounding it, in either mode, is a partition-point search
/// through `log2_bounds`, followed by an exact comparison against the one or two boundaries that
/// may be involved (see [`Self::round_mantissa`]). The boundaries are defined in terms of the
/// `exp2` entries, so a value lands on the side of the nearer of its two neighbours as they are
/// actually stored.
///
/// Tables are generated lazily, at most once per `(frac_bits, rounding)` pair, and live for the
/// rest of the program: get them with [`Format::tables`].
pub struct Tables {
  format: Format,
  exp2: Box<[u64]>,
  log2_bounds: Box<[u64]>,
}

impl Tables {
  /// Number of fraction bits of a mantissa in [`Self::exp2`].
  pub const MANTISSA_WIDTH: u32 = 62;

  /// The mantissa `1.0`.
  pub const ONE: u64 = 1 << Self::MANTISSA_WIDTH;

  /// The mantissa `2.0`; exclusive upper bound of a normalised mantissa.
  pub(crate) const TWO: u64 = 2 << Self::MANTISSA_WIDTH;

  /// Number of fraction bits of a wide mantissa, as taken by [`Self::round_mantissa`]: those of
  /// [`Self::exp2`] followed by 64 more.
  pub(crate) const WIDE_WIDTH: u32 = Self::MANTISSA_WIDTH + 64;

  /// The wide mantissa `1.0`.
  pub(crate) const WIDE_ONE: u128 = 1 << Self::WIDE_WIDTH;

  /// The wide mantissa `2.0`.
  pub(crate) const WIDE_TWO: u128 = 2 << Self::WIDE_WIDTH;

  /// Compute the tables for `format`. This is a pure function of `format`, and costs
  /// `O(2^frac_bits)`; it is what [`Format::tables`] calls (once) on a cache miss.
  pub fn generate(format: Format) -> Self {
    let len = 1usize << format.frac_bits();
    let scale = len as f64;

    // `x` is in [1, 2[, so scaling it by a power of two into an u64 is exact.
    let q62 = |x: f64| (x * Self::ONE as f64) as u64;
    let q63 = |x: f64| (x * Self::TWO as f64) as u64;

    let exp2: Box<[u64]> = (0 .. len)
      .map(|i| q62((i as f64 / scale).exp2()))
      .collect();

    let log2_bounds: Box<[u64]> = (0 .. len)
      .map(|i| match format.rounding() {
        // Sum of two Q62 values = their mean as a Q63 value, with no bits lost.
        RoundingMode::Lin => exp2[i] + exp2.get(i + 1).copied().unwrap_or(Self::TWO),
        RoundingMode::Log => q63(((2 * i + 1) as f64 / (2. * scale)).exp2()),
      })
      .collect();

    Self { format, exp2, log2_bounds }
  }

  /// The format these tables were generated for.
  pub fn format(&self) -> Format {
    self.format
  }

  /// `exp2[i]` is `2^(i / 2^frac_bits)` with [`Self::MANTISSA_WIDTH`] fraction bits.
  pub fn exp2(&self) -> &[u64] {
    &self.exp2
  }

  /// `log2_bounds[i]` is the mantissa, with `MANTISSA_WIDTH + 1` fraction bits, above which
  /// fraction index `i` rounds up to `i + 1`.
  pub fn log2_bounds(&self) -> &[u64] {
    &self.log2_bounds
  }

  /// Round `log2(mantissa)` to a fraction index, according to the tables' rounding mode.
  ///
  /// `mantissa` is a *wide* mantissa: [`Self::WIDE_WIDTH`] fraction bits, normalised (in
  /// [`Self::WIDE_ONE`] ..< [`Self::WIDE_TWO`]). `sticky` is `true` if and only if the true
  /// mantissa is *above* `mantissa` by less than one unit in the last place (i.e. some nonzero
  /// bits were lost when computing it). Bits are only ever lost when the value is very close to a
  /// grid point, far from any boundary, so `sticky` only matters for telling a value exactly on a
  /// boundary from one just above it.
  ///
  /// The result is in `0 ..= 2^frac_bits`; `2^frac_bits` means the value rounded up to the next
  /// power of two. Ties round to the even index.
  pub(crate) fn round_mantissa(&self, mantissa: u128, sticky: bool) -> u32 {
    debug_assert!(
      (Self::WIDE_ONE .. Self::WIDE_TWO).contains(&mantissa),
      "Mantissa {mantissa:#x} is not normalised",
    );
    let len = self.exp2.len();
    // The stored bounds are far closer to the exact ones than to each other, so this is off by at
    // most one.
    let approx = (mantissa >> (Self::WIDE_WIDTH - Self::MANTISSA_WIDTH - 1)) as u64;
    let mut index = self.log2_bounds.partition_point(|&bound| bound < approx);
    while index > 0 && self.cmp_bound(index - 1, mantissa, sticky).is_le() {
      index -= 1
    }
    while index < len && self.cmp_bound(index, mantissa, sticky).is_gt() {
      index += 1
    }
    // Now boundary `index - 1` < mantissa ≤ boundary `index`.
    let tie = index < len && self.cmp_bound(index, mantissa, sticky).is_eq();
    index as u32 + u32::from(tie && index & 1 == 1)
  }

  /// Compare a wide mantissa (plus less than one unit, if `sticky`) with the exact boundary
  /// between fraction indices `i` and `i + 1`: `(exp2[i] + exp2[i + 1]) / 2` in linear mode,
  /// `√(exp2[i] × exp2[i + 1])` in log mode.
  fn cmp_bound(&self, i: usize, mantissa: u128, sticky: bool) -> Ordering {
    let lo = self.exp2[i];
    let hi = self.exp2.get(i + 1).copied().unwrap_or(Self::TWO);
    let ordering = match self.format.rounding() {
      // 2 × mantissa, against the sum of two mantissas moved to the wide position.
      RoundingMode::Lin => (mantissa << 1).cmp(&(u128::from(lo + hi) << 64)),
      RoundingMode::Log => cmp_square(mantissa, u128::from(lo) * u128::from(hi)),
    };
    if ordering.is_eq() && sticky {Ordering::Greater} else {ordering}
  }
}

/// Compare `m²` with `p × 2^128`, exactly, for `m < 2^127` and `p < 2^126` (that is, a wide
/// mantissa squared against the product of two table mantissas).
fn cmp_square(m: u128, p: u128) -> Ordering {
  // m = h × 2^64 + r, so m² = h² × 2^128 + 2hr × 2^64 + r².
  let (h, r) = (m >> 64, m & u128::from(u64::MAX));
  let hh = h * h;
  if hh > p {
    return Ordering::Greater
  }
  // Left to compare: 2hr × 2^64 + r² against (p - h²) × 2^128, i.e. 2hr + r² / 2^64 against
  // (p - h²) × 2^64. The left side is always below 2^128.
  let d = p - hh;
  if d >> 64 != 0 {
    return Ordering::Less
  }
  let rr = r * r;
  let lhs = 2 * h * r + (rr >> 64);
  match lhs.cmp(&(d << 64)) {
    Ordering::Equal if rr as u64 != 0 => Ordering::Greater,
    ordering => ordering,
  }
}

impl core::fmt::Debug for Tables {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("Tables")
      .field("format", &self.format)
      .field("len", &self.exp2.len())
      .finish_non_exhaustive()
  }
}

/// One slot per valid `(frac_bits, rounding)` pair.
static CACHE: [[OnceLock<Tables>; 2]; 5] = [const { [const { OnceLock::new() }; 2] }; 5];

impl Format {
  /// The lookup tables for this format, generated on first use.
  ///
  /// Tables are never freed nor modified once generated, so the reference stays valid (and the
  /// same) for the whole program, regardless of any later changes to the active format.
  pub fn tables(self) -> &'static Tables {
    let slot = &CACHE[(self.frac_bits() - Self::MIN_FRAC_BITS) as usize][self.rounding() as usize];
    slot.get_or_init(|| {
      log::debug!("Generating lookup tables for {self}");
      Tables::generate(self)
    })
  }
}
