//! The bit layout and rounding policy of a [`LogFixPoint16`](crate::LogFixPoint16), and the
//! process-wide *active* format used by the operators and the [`RoundFrom`](crate::RoundFrom)
//! conversions.
//!
//! A [`Format`] is a plain `Copy` value: every operation whose result depends on the layout or on
//! the rounding mode is a method on it, so callers that need determinism can simply hold on to
//! one. The active format exists for convenience, and is stored in a single atomic word so a
//! reader never sees half of a reconfiguration.

use core::sync::atomic::{AtomicU8, Ordering};

use crate::error::{Error, Result};

/// Lookup tables for going between linear and log space.
pub mod table;

/// How results that fall between two representable values are rounded.
#[derive(Debug, Default)]
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundingMode {
  /// Round to the representable value nearest in *linear* space, i.e. nearest on the real line.
  #[default]
  Lin,
  /// Round to the representable value nearest in *log* space, i.e. round `k` to the nearest
  /// point of the fraction grid.
  Log,
}

impl core::str::FromStr for RoundingMode {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    match s {
      "lin" => Ok(Self::Lin),
      "log" => Ok(Self::Log),
      _ => Err(Error::InvalidRoundingMode(s.to_owned())),
    }
  }
}

impl core::fmt::Display for RoundingMode {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.write_str(match self {
      Self::Lin => "lin",
      Self::Log => "log",
    })
  }
}

/// A bit layout (number of fraction bits; the integer bits are the remaining 15 - fraction bits)
/// together with a [`RoundingMode`].
///
/// ```
/// # use soft_logfixpoint::*;
/// let format = Format::new(9, RoundingMode::Log)?;
/// assert_eq!(format.int_bits(), 6);
/// assert_eq!(format.bias(), 32);
///
/// assert_eq!(Format::new(12, RoundingMode::Lin), Err(Error::InvalidFormat(12)));
/// # Ok::<(), Error>(())
/// ```
#[derive(Debug)]
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Format {
  frac_bits: u8,
  rounding: RoundingMode,
}

impl Default for Format {
  fn default() -> Self {
    Self::DEFAULT
  }
}

impl Format {
  /// Fewest fraction bits a format may have.
  pub const MIN_FRAC_BITS: u32 = 7;

  /// Most fraction bits a format may have.
  pub const MAX_FRAC_BITS: u32 = 11;

  /// The format every process starts with: 7 integer bits, 8 fraction bits, linear rounding.
  pub const DEFAULT: Self = Self { frac_bits: 8, rounding: RoundingMode::Lin };

  /// Make a new format with `frac_bits` fraction bits, failing with [`Error::InvalidFormat`]
  /// unless `frac_bits` is in `7 ..= 11`.
  pub fn new(frac_bits: u32, rounding: RoundingMode) -> Result<Self> {
    if (Self::MIN_FRAC_BITS ..= Self::MAX_FRAC_BITS).contains(&frac_bits) {
      Ok(Self { frac_bits: frac_bits as u8, rounding })
    } else {
      Err(Error::InvalidFormat(frac_bits))
    }
  }

  /// All 10 valid formats, in order of increasing fraction bits, `Lin` before `Log`.
  pub fn all() -> impl Iterator<Item = Self> {
    (Self::MIN_FRAC_BITS ..= Self::MAX_FRAC_BITS).flat_map(|frac_bits| {
      [RoundingMode::Lin, RoundingMode::Log].map(|rounding| Self { frac_bits: frac_bits as u8, rounding })
    })
  }

  /// The same format but with `frac_bits` fraction bits.
  pub fn with_frac_bits(self, frac_bits: u32) -> Result<Self> {
    Self::new(frac_bits, self.rounding)
  }

  /// The same format but with a different rounding mode.
  pub const fn with_rounding(self, rounding: RoundingMode) -> Self {
    Self { frac_bits: self.frac_bits, rounding }
  }

  /// Number of fraction bits of `k`.
  #[inline]
  pub const fn frac_bits(self) -> u32 {
    self.frac_bits as u32
  }

  /// Number of (biased) integer bits of `k`, i.e. `15 - frac_bits`.
  #[inline]
  pub const fn int_bits(self) -> u32 {
    15 - self.frac_bits as u32
  }

  #[inline]
  pub const fn rounding(self) -> RoundingMode {
    self.rounding
  }

  /// The bias of the integer field, `2^(int_bits - 1)`: a stored integer field `i` means an
  /// integer part of `i - bias`.
  #[inline]
  pub const fn bias(self) -> i32 {
    1 << (self.int_bits() - 1)
  }

  /// Mask for the fraction bits of a `k` in grid units.
  #[inline]
  pub(crate) const fn frac_mask(self) -> i32 {
    (1 << self.frac_bits) - 1
  }

  /// The format as a single byte: fraction bits in the low nibble, rounding mode above.
  const fn pack(self) -> u8 {
    self.frac_bits | (self.rounding as u8) << 4
  }

  /// Inverse of [`Self::pack`].
  const fn unpack(packed: u8) -> Self {
    let rounding = if packed >> 4 == 0 {RoundingMode::Lin} else {RoundingMode::Log};
    Self { frac_bits: packed & 0xf, rounding }
  }
}

impl core::fmt::Display for Format {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    write!(
      f, "{} integer bits, {} fraction bits, {} rounding",
      self.int_bits(), self.frac_bits(), self.rounding,
    )
  }
}

/// Returned whenever the active format is changed. Also logged at info level.
#[derive(Debug)]
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Reconfigured {
  pub previous: Format,
  pub current: Format,
}

impl Reconfigured {
  /// Whether the bit layout changed, i.e. whether existing bit patterns now mean different
  /// numbers.
  pub fn layout_changed(&self) -> bool {
    self.previous.frac_bits != self.current.frac_bits
  }
}

impl core::fmt::Display for Reconfigured {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    write!(f, "LogFixPoint16 format: {} (was: {})", self.current, self.previous)?;
    if self.layout_changed() {
      f.write_str("; existing values are reinterpreted under the new layout")?;
    }
    Ok(())
  }
}

static ACTIVE: AtomicU8 = AtomicU8::new(Format::DEFAULT.pack());

/// The active format.
pub fn get() -> Format {
  Format::unpack(ACTIVE.load(Ordering::Acquire))
}

/// Make `format` the active format.
pub fn set_format(format: Format) -> Reconfigured {
  update(|_| format)
}

/// Change the number of fraction bits of the active format, keeping its rounding mode. Fails
/// with [`Error::InvalidFormat`], leaving the active format untouched, unless `frac_bits` is in
/// `7 ..= 11`.
pub fn set_fracbits(frac_bits: u32) -> Result<Reconfigured> {
  // Validate up front, so that the update itself cannot fail.
  Format::DEFAULT.with_frac_bits(frac_bits)?;
  Ok(update(|format| Format { frac_bits: frac_bits as u8, ..format }))
}

/// Change the rounding mode of the active format, keeping its layout.
///
/// To go from a textual identifier, parse it first; this is where an unknown identifier is
/// rejected:
///
/// ```
/// # use soft_logfixpoint::*;
/// let mode: RoundingMode = "log".parse()?;
/// assert_eq!(mode, RoundingMode::Log);
/// assert_eq!("nearest".parse::<RoundingMode>(), Err(Error::InvalidRoundingMode("nearest".into())));
/// # Ok::<(), Error>(())
/// ```
pub fn set_rounding_mode(rounding: RoundingMode) -> Reconfigured {
  update(|format| format.with_rounding(rounding))
}

/// Atomically replace the active format by `f(active)`. The tables for the new format are
/// generated *before* it is published.
fn update(f: impl Fn(Format) -> Format) -> Reconfigured {
  let mut previous = get();
  loop {
    let current = f(previous);
    current.tables();
    match ACTIVE.compare_exchange_weak(previous.pack(), current.pack(), Ordering::AcqRel, Ordering::Acquire) {
      Ok(_) => {
        let event = Reconfigured { previous, current };
        log::info!("{event}");
        return event
      },
      Err(actual) => previous = Format::unpack(actual),
    }
  }
}
