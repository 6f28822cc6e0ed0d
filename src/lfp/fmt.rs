use super::*;

use core::fmt::{Debug, Display};
use crate::Format;

impl Debug for LogFixPoint16 {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let bits = self.0;
    f.debug_tuple("LogFixPoint16")
      .field(&format_args!("0b{bits:016b}"))
      .finish()
  }
}

/// Print the real value of `self` *in the active format* (see [`crate::get`]), or `NaR`.
/// Formatting options (precision, width, etc) are those of [`f64`].
impl Display for LogFixPoint16 {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    if self.is_nar() {
      f.pad("NaR")
    } else {
      Display::fmt(&crate::get().to_f64(*self), f)
    }
  }
}

impl Format {
  /// The bits of `x` grouped as sign, integer bits, and fraction bits of this format, separated
  /// by spaces.
  ///
  /// ```
  /// # use soft_logfixpoint::*;
  /// let x = LogFixPoint16::from_bits(0x4196);
  /// assert_eq!(Format::new(8, RoundingMode::Lin)?.bitstring(x), "0 1000001 10010110");
  /// assert_eq!(Format::new(11, RoundingMode::Lin)?.bitstring(x), "0 1000 00110010110");
  /// # Ok::<(), Error>(())
  /// ```
  pub fn bitstring(self, x: LogFixPoint16) -> String {
    let bits = x.to_bits();
    let sign = bits >> 15;
    let int = (bits & LogFixPoint16::MAGNITUDE_MASK) >> self.frac_bits();
    let frac = bits & self.frac_mask() as u16;
    format!(
      "{sign} {int:0wi$b} {frac:0wf$b}",
      wi = self.int_bits() as usize,
      wf = self.frac_bits() as usize,
    )
  }
}

impl LogFixPoint16 {
  /// The bits of `self` grouped according to the [active format](crate::get); see
  /// [`Format::bitstring`].
  pub fn bitstring(self) -> String {
    crate::get().bitstring(self)
  }
}
