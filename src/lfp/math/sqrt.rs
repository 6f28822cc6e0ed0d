use super::*;

use crate::{Error, Format, Result, RoundingMode};

impl Format {
  /// Return the square root of `x`, rounded according to this format, or
  /// [`Error::NegativeRadicand`] if `x` is negative. The square root of zero is zero, and that of
  /// NaR is NaR.
  ///
  /// The `k` of the result is half that of `x`. If `k` is odd, the exact result is exactly half
  /// way between two grid points, *in log space*:
  ///
  ///   - [`RoundingMode::Log`] rounds to the one with the even bit pattern.
  ///   - [`RoundingMode::Lin`] always rounds down, since the geometric mean of two numbers is
  ///     always below their arithmetic mean.
  ///
  /// ```
  /// # use soft_logfixpoint::*;
  /// let format = Format::DEFAULT;
  /// let x = format.from_f64(16.);
  /// assert_eq!(format.sqrt(x)?, format.from_f64(4.));
  /// assert_eq!(format.sqrt(-x), Err(Error::NegativeRadicand));
  /// # Ok::<(), Error>(())
  /// ```
  pub fn sqrt(self, x: LogFixPoint16) -> Result<LogFixPoint16> {
    match x.decode() {
      Decoded::Zero | Decoded::NaR => Ok(x),
      Decoded::Finite { sign: true, .. } => Err(Error::NegativeRadicand),
      Decoded::Finite { sign: false, k } => {
        // `k >> 1` rounds down; when `k` is odd, the other candidate is one grid point above.
        let half = k >> 1;
        let round_up = k & 1 == 1 && match self.rounding() {
          RoundingMode::Lin => false,
          // The bit pattern of a finite value is `k + 2^14`, so it has the same parity as `k`.
          RoundingMode::Log => half & 1 == 1,
        };
        Ok(LogFixPoint16::encode_grid(false, i64::from(half + i32::from(round_up))))
      },
    }
  }
}

impl LogFixPoint16 {
  /// Return the square root of `self` in the [active format](crate::get); see [`Format::sqrt`].
  pub fn sqrt(self) -> Result<Self> {
    crate::get().sqrt(self)
  }
}
