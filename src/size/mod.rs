//! The byte-count value type and its two text forms: an exact canonical one
//! for storage and a lossy one-decimal one for display.

mod serde;

use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use std::str::FromStr;

/// An unsigned 64-bit count of bytes.
///
/// Immutable value type: "mutation" is replacement. Fractional amounts only
/// exist in text form and are resolved to whole bytes at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ByteSize(u64);

impl ByteSize {
    /// One byte.
    pub const B: Self = Self(1);
    /// One kilobyte (1024 bytes).
    pub const KB: Self = Self(1 << 10);
    /// One megabyte.
    pub const MB: Self = Self(1 << 20);
    /// One gigabyte.
    pub const GB: Self = Self(1 << 30);
    /// One terabyte.
    pub const TB: Self = Self(1 << 40);
    /// One petabyte.
    pub const PB: Self = Self(1 << 50);
    /// One exabyte. Largest supported unit; anything bigger could not
    /// represent even a single whole unit in 64 bits.
    pub const EB: Self = Self(1 << 60);
    /// Largest representable size; overflowing parses saturate to this.
    pub const MAX: Self = Self(u64::MAX);

    #[must_use]
    pub const fn new(bytes: u64) -> Self {
        Self(bytes)
    }

    /// Exact byte count.
    #[must_use]
    pub const fn bytes(self) -> u64 {
        self.0
    }

    /// Value in kilobytes.
    #[must_use]
    pub fn kilobytes(self) -> f64 {
        self.in_unit(Self::KB)
    }

    /// Value in megabytes.
    #[must_use]
    pub fn megabytes(self) -> f64 {
        self.in_unit(Self::MB)
    }

    /// Value in gigabytes.
    #[must_use]
    pub fn gigabytes(self) -> f64 {
        self.in_unit(Self::GB)
    }

    /// Value in terabytes.
    #[must_use]
    pub fn terabytes(self) -> f64 {
        self.in_unit(Self::TB)
    }

    /// Value in petabytes.
    #[must_use]
    pub fn petabytes(self) -> f64 {
        self.in_unit(Self::PB)
    }

    /// Value in exabytes.
    #[must_use]
    pub fn exabytes(self) -> f64 {
        self.in_unit(Self::EB)
    }

    /// Splitting into quotient and remainder before going to floating point
    /// keeps the integer part exact even where `u64 as f64` alone would
    /// round; a single divide loses whole bytes above 2^53.
    #[allow(clippy::cast_precision_loss)]
    fn in_unit(self, unit: Self) -> f64 {
        let whole = self.0 / unit.0;
        let rem = self.0 % unit.0;
        whole as f64 + rem as f64 / unit.0 as f64
    }

    /// Approximate one-decimal form for terminal output, e.g. `"1.5 GB"`.
    ///
    /// Picks the largest unit the value strictly exceeds; at or below one
    /// kilobyte it falls back to a whole-number byte count. Lossy; use the
    /// [`Display`](fmt::Display) form when the text must round-trip.
    #[must_use]
    pub fn human_readable(self) -> String {
        if self > Self::EB {
            format!("{:.1} EB", self.exabytes())
        } else if self > Self::PB {
            format!("{:.1} PB", self.petabytes())
        } else if self > Self::TB {
            format!("{:.1} TB", self.terabytes())
        } else if self > Self::GB {
            format!("{:.1} GB", self.gigabytes())
        } else if self > Self::MB {
            format!("{:.1} MB", self.megabytes())
        } else if self > Self::KB {
            format!("{:.1} KB", self.kilobytes())
        } else {
            format!("{} B", self.0)
        }
    }
}

/// Canonical form: the shortest exact representation, no space, no decimal
/// point. `2048 * MB` prints as `"2GB"`, `B + KB` as `"1025B"`, zero as
/// `"0B"`. Re-parsing this form always reproduces the original value.
impl fmt::Display for ByteSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 0 {
            return f.write_str("0B");
        }
        // Largest divisor first so the mantissa is as short as possible
        for (unit, suffix) in [
            (Self::EB, "EB"),
            (Self::PB, "PB"),
            (Self::TB, "TB"),
            (Self::GB, "GB"),
            (Self::MB, "MB"),
            (Self::KB, "KB"),
        ] {
            if self.0 % unit.0 == 0 {
                return write!(f, "{}{suffix}", self.0 / unit.0);
            }
        }
        write!(f, "{}B", self.0)
    }
}

impl FromStr for ByteSize {
    type Err = crate::error::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse::parse_str(s)
    }
}

impl Add for ByteSize {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for ByteSize {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for ByteSize {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for ByteSize {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl Mul<u64> for ByteSize {
    type Output = Self;

    fn mul(self, rhs: u64) -> Self {
        Self(self.0 * rhs)
    }
}

impl Mul<ByteSize> for u64 {
    type Output = ByteSize;

    fn mul(self, rhs: ByteSize) -> ByteSize {
        ByteSize(self * rhs.0)
    }
}

impl From<u64> for ByteSize {
    fn from(bytes: u64) -> Self {
        Self(bytes)
    }
}

impl From<ByteSize> for u64 {
    fn from(size: ByteSize) -> Self {
        size.0
    }
}
