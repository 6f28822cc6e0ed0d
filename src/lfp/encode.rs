use super::*;

use crate::{Format, RoundingMode, Tables};

impl LogFixPoint16 {
  /// Encode a semantic value. Since `k` is already on the grid there is no rounding, only
  /// saturation:
  ///
  ///   - If `k` is above the largest representable `k`, the result is [`Self::MAX`] (or
  ///     [`Self::MIN`] if negative): never overflow to NaR.
  ///   - If `k` is below the smallest representable `k`, the result is [`Self::ZERO`], whatever
  ///     the sign.
  ///
  /// ```
  /// # use soft_logfixpoint::*;
  /// assert_eq!(LogFixPoint16::encode(Decoded::Finite { sign: false, k: 0 }).to_bits(), 0x4000);
  /// assert_eq!(LogFixPoint16::encode(Decoded::Finite { sign: true, k: 99999 }).to_bits(), 0xffff);
  /// assert_eq!(LogFixPoint16::encode(Decoded::Finite { sign: true, k: -99999 }).to_bits(), 0x0000);
  /// ```
  pub const fn encode(value: Decoded) -> Self {
    match value {
      Decoded::Zero => Self::ZERO,
      Decoded::NaR => Self::NAR,
      Decoded::Finite { sign, k } => Self::encode_grid(sign, k as i64),
    }
  }

  /// Encode a finite value whose `k` (in grid units) is exact, saturating as in [`Self::encode`].
  ///
  /// `k` is an `i64` so that callers can pass sums and products of `k`s without worrying about
  /// overflow.
  #[inline]
  pub(crate) const fn encode_grid(sign: bool, k: i64) -> Self {
    let sign_bits = if sign {Self::SIGN_MASK} else {0};
    if k > Self::K_MAX as i64 {
      Self(sign_bits | Self::MAGNITUDE_MASK)
    } else if k < Self::K_MIN as i64 {
      Self::ZERO
    } else {
      Self(sign_bits | (k + Self::K_OFFSET as i64) as u16)
    }
  }
}

impl Format {
  /// Encode an on-grid value; same as [`LogFixPoint16::encode`], which does not depend on the
  /// format.
  #[inline]
  pub fn encode(self, value: Decoded) -> LogFixPoint16 {
    LogFixPoint16::encode(value)
  }

  /// Encode the number `±2^k`, for an arbitrary real `k`, rounding `k` to this format's grid
  /// according to its [rounding mode](RoundingMode):
  ///
  ///   - [`RoundingMode::Log`]: round `k` to the nearest grid point (ties to even).
  ///   - [`RoundingMode::Lin`]: of the two grid points around `k`, pick the one whose *linear*
  ///     value is nearest to `2^k` (ties to even).
  ///
  /// Special cases: a NaN `k` gives [NaR](LogFixPoint16::NAR). `k` too large (including `+∞`)
  /// saturates to [`LogFixPoint16::MAX`] or [`LogFixPoint16::MIN`]. `k` too small (including
  /// `-∞`, which is `log2(0)`) gives [zero](LogFixPoint16::ZERO). A `k` is too small if it rounds
  /// to a grid point below that of [`LogFixPoint16::MIN_POSITIVE`]; the zero bit pattern takes up
  /// the slot of the grid point just below it.
  ///
  /// ```
  /// # use soft_logfixpoint::*;
  /// let format = Format::new(8, RoundingMode::Lin)?;
  /// let three = format.encode_real(false, 3_f64.log2());
  /// assert_eq!(format.bitstring(three), "0 1000001 10010110");
  /// assert_eq!(format.encode_real(true, f64::INFINITY), LogFixPoint16::MIN);
  /// assert!(format.encode_real(false, f64::NAN).is_nar());
  /// # Ok::<(), Error>(())
  /// ```
  pub fn encode_real(self, sign: bool, k: f64) -> LogFixPoint16 {
    if k.is_nan() {
      return LogFixPoint16::NAR
    }

    // Anything at least one unit away from the representable range of `k` saturates/underflows
    // regardless of rounding; this also keeps the arithmetic below within range.
    let scale = f64::from(1u32 << self.frac_bits());
    let limit = f64::from(LogFixPoint16::K_OFFSET + 1) / scale;
    if k >= limit {
      return LogFixPoint16::encode_grid(sign, i64::MAX)
    } else if k <= -limit {
      return LogFixPoint16::ZERO
    }

    match self.rounding() {
      RoundingMode::Log => {
        // `k * scale` is exact (multiplication by a power of two).
        LogFixPoint16::encode_grid(sign, (k * scale).round_ties_even() as i64)
      },
      RoundingMode::Lin => {
        // Go to linear space: 2^k = m × 2^n, then round the mantissa `m` like any other.
        let n = k.floor();
        let m = (k - n).exp2();
        let (n, mantissa) =
          if m < 2. {
            (n, (m * Tables::WIDE_ONE as f64) as u128)
          } else {
            (n + 1., Tables::WIDE_ONE)
          };
        self.encode_linear(sign, n as i32, mantissa, false)
      },
    }
  }

  /// Encode the number `±mantissa × 2^exp`, where `mantissa` is an unsigned fixed-point number
  /// with [`Tables::WIDE_WIDTH`] fraction bits, normalised to `[1, 2[`, rounding according to
  /// this format's rounding mode (ties to even) and saturating as in [`Self::encode_real`].
  ///
  /// `sticky` is the sticky bit: it is `false` **if and only if** `mantissa` is exact. If some
  /// nonzero bits below the last bit of `mantissa` were lost (i.e. the true mantissa is slightly
  /// *above* `mantissa`), it must be `true`. This is what makes a value exactly on a rounding
  /// boundary distinguishable from one just above it.
  ///
  /// This is the workhorse of every operation that goes through linear space: addition,
  /// subtraction, and conversions from native numbers.
  pub(crate) fn encode_linear(self, sign: bool, exp: i32, mantissa: u128, sticky: bool) -> LogFixPoint16 {
    debug_assert!(
      (Tables::WIDE_ONE .. Tables::WIDE_TWO).contains(&mantissa),
      "Precondition violated: mantissa {mantissa:#x} is not normalised",
    );
    let index = self.tables().round_mantissa(mantissa, sticky);
    let k = (i64::from(exp) << self.frac_bits()) + i64::from(index);
    LogFixPoint16::encode_grid(sign, k)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use proptest::prelude::*;

  mod roundtrip {
    use super::*;

    #[test]
    fn decode_encode_exhaustive() {
      for x in LogFixPoint16::cases_exhaustive_all() {
        assert_eq!(LogFixPoint16::encode(x.decode()).to_bits(), x.to_bits())
      }
    }

    #[test]
    fn encode_real_exhaustive() {
      // Encoding the exact exponent of a value gives back the same bits, in every format.
      for format in Format::all() {
        for x in LogFixPoint16::cases_exhaustive() {
          let sign = x.is_sign_negative();
          let y = format.encode_real(sign, format.exponent(x));
          assert_eq!(y.to_bits(), x.to_bits(), "{x:?} in {format}");
        }
      }
    }

    macro_rules! test_idempotent {
      ($name:ident, $frac_bits:expr, $rounding:expr) => {
        proptest!{
          #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]
          #[test]
          fn $name(sign in any::<bool>(), k in -200_f64 .. 200_f64) {
            // Encoding rounds once; decoding and encoding again does not move the value.
            let format = Format::new($frac_bits, $rounding).unwrap();
            let x = format.encode_real(sign, k);
            prop_assert!(!x.is_nar());
            let y = format.encode_real(x.is_sign_negative(), format.exponent(x));
            prop_assert_eq!(y.to_bits(), x.to_bits());
          }
        }
      }
    }

    test_idempotent!{lin_7, 7, RoundingMode::Lin}
    test_idempotent!{lin_8, 8, RoundingMode::Lin}
    test_idempotent!{lin_9, 9, RoundingMode::Lin}
    test_idempotent!{lin_10, 10, RoundingMode::Lin}
    test_idempotent!{lin_11, 11, RoundingMode::Lin}
    test_idempotent!{log_7, 7, RoundingMode::Log}
    test_idempotent!{log_8, 8, RoundingMode::Log}
    test_idempotent!{log_9, 9, RoundingMode::Log}
    test_idempotent!{log_10, 10, RoundingMode::Log}
    test_idempotent!{log_11, 11, RoundingMode::Log}
  }

  mod rounding {
    use super::*;

    #[test]
    fn three() {
      // log2(3) = 1.58496..., × 256 = 405.75: between grid points 405 and 406. Both in log space
      // (406 is nearer) and in linear space (2^(406/256) = 3.0023 vs 2^(405/256) = 2.9942) the
      // answer is 406.
      for rounding in [RoundingMode::Lin, RoundingMode::Log] {
        let format = Format::new(8, rounding).unwrap();
        let x = format.encode_real(false, 3_f64.log2());
        assert_eq!(x.to_bits(), 0b0_1000001_10010110);
        assert_eq!(format.bitstring(x), "0 1000001 10010110");
        assert!((format.to_f64(x) - 3.).abs() < 3. * 2_f64.powf(1. / 512.) - 3.);
      }
    }

    #[test]
    fn lin_vs_log() {
      // Just above the log-space midpoint between grid points 0 and 1 (k = 0.5 / 256), linear
      // rounding still rounds down, since the linear midpoint is a bit higher.
      let k = 0.5 / 256. + 1e-9;
      let lin = Format::new(8, RoundingMode::Lin).unwrap();
      let log = Format::new(8, RoundingMode::Log).unwrap();
      assert_eq!(lin.encode_real(false, k), LogFixPoint16::ONE);
      assert_eq!(log.encode_real(false, k).to_bits(), LogFixPoint16::ONE.to_bits() + 1);
    }

    #[test]
    fn log_ties_to_even() {
      let format = Format::new(8, RoundingMode::Log).unwrap();
      // Exactly half-way between grid points 0 and 1: round to 0 (even).
      assert_eq!(format.encode_real(false, 0.5 / 256.).to_bits(), 0x4000);
      // Exactly half-way between grid points 1 and 2: round to 2 (even).
      assert_eq!(format.encode_real(false, 1.5 / 256.).to_bits(), 0x4002);
      // Negative k, between -1 and -2: round to -2.
      assert_eq!(format.encode_real(false, -1.5 / 256.).to_bits(), 0x4000 - 2);
    }

    #[test]
    fn saturate() {
      for format in Format::all() {
        let max_k = format.exponent(LogFixPoint16::MAX);
        for k in [max_k + 1e-6, max_k + 0.5, max_k + 1., 1e10, f64::INFINITY] {
          assert_eq!(format.encode_real(false, k).to_bits(), LogFixPoint16::MAX.to_bits());
          assert_eq!(format.encode_real(true, k).to_bits(), LogFixPoint16::MIN.to_bits());
        }
      }
    }

    #[test]
    fn underflow() {
      for format in Format::all() {
        let min_k = format.exponent(LogFixPoint16::MIN_POSITIVE);
        let ulp = 1. / (1 << format.frac_bits()) as f64;
        // Rounds up to floatmin.
        assert_eq!(format.encode_real(false, min_k - ulp / 4.), LogFixPoint16::MIN_POSITIVE);
        assert_eq!(format.encode_real(true, min_k - ulp / 4.), LogFixPoint16::MAX_NEGATIVE);
        // Rounds down to the slot below floatmin, i.e. zero.
        for k in [min_k - ulp * 3. / 4., min_k - 1., -1e10, f64::NEG_INFINITY] {
          assert!(format.encode_real(false, k).is_zero());
          assert!(format.encode_real(true, k).is_zero());
        }
      }
    }

    #[test]
    fn never_nar() {
      for format in Format::all() {
        for k in [-1e300, -1e5, -300., -64., 0., 64., 300., 1e5, 1e300] {
          assert!(!format.encode_real(false, k).is_nar());
          assert!(!format.encode_real(true, k).is_nar());
        }
      }
    }
  }

  mod linear {
    use super::*;

    #[test]
    fn powers_of_two() {
      for format in Format::all() {
        for exp in -20 .. 20 {
          let x = format.encode_linear(false, exp, Tables::WIDE_ONE, false);
          assert_eq!(x.decode(), Decoded::Finite { sign: false, k: exp << format.frac_bits() });
        }
      }
    }

    #[test]
    fn carry_into_next_octave() {
      // A mantissa just below 2 rounds up to the next power of two.
      for format in Format::all() {
        let x = format.encode_linear(true, 3, Tables::WIDE_TWO - 1, false);
        assert_eq!(x.decode(), Decoded::Finite { sign: true, k: 4 << format.frac_bits() });
      }
    }

    #[test]
    fn sticky_breaks_ties() {
      let format = Format::DEFAULT;
      let bounds = format.tables().log2_bounds();
      // A tie between an even grid point `i` and `i + 1` rounds down, unless sticky.
      let i = 42;
      let tie = u128::from(bounds[i]) << (Tables::WIDE_WIDTH - Tables::MANTISSA_WIDTH - 1);
      assert_eq!(format.encode_linear(false, 0, tie, false).to_bits(), 0x4000 + i as u16);
      assert_eq!(format.encode_linear(false, 0, tie, true).to_bits(), 0x4001 + i as u16);
    }
  }
}
