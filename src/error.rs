//! Typed outcomes for byte-size parsing.

use crate::size::ByteSize;
use std::fmt;

/// What went wrong, without the input text. Comparable in tests and match
/// arms where the full [`ParseError`] would get in the way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    /// Input does not match `digits ['.' digits] [unit]`, or the unit token
    /// is not a recognized suffix.
    Syntax,
    /// The mathematically correct result exceeds `u64::MAX`. The parser
    /// saturates instead of wrapping; see [`ParseError::fallback`].
    Overflow,
    /// A capital unit prefix with a lowercase trailing `b` (`Kb`, `Mb`, ...)
    /// denotes bits by convention. Refused outright rather than silently
    /// treated as bytes.
    Bits,
}

/// Returned by the parser so callers can distinguish malformed input from
/// overflow and from bit-unit rejection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    kind: ParseErrorKind,
    input: String,
}

impl ParseError {
    pub(crate) fn new(kind: ParseErrorKind, input: &[u8]) -> Self {
        Self {
            kind,
            input: String::from_utf8_lossy(input).into_owned(),
        }
    }

    /// Which of the three failure kinds occurred.
    #[must_use]
    pub const fn kind(&self) -> ParseErrorKind {
        self.kind
    }

    /// The original unparsed text, kept for diagnostics.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// The defined substitute value for this failure: saturated to
    /// [`ByteSize::MAX`] on overflow, zero otherwise. Callers that proceed
    /// despite the error get a clamped value, never a wrapped one.
    #[must_use]
    pub const fn fallback(&self) -> ByteSize {
        match self.kind {
            ParseErrorKind::Overflow => ByteSize::MAX,
            ParseErrorKind::Syntax | ParseErrorKind::Bits => ByteSize::new(0),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ParseErrorKind::Syntax => write!(f, "invalid byte size: '{}'", self.input),
            ParseErrorKind::Overflow => {
                write!(f, "byte size out of 64-bit range: '{}'", self.input)
            }
            ParseErrorKind::Bits => write!(
                f,
                "unit with capital prefix and lowercase 'b' means bits, not bytes: '{}'",
                self.input
            ),
        }
    }
}

impl std::error::Error for ParseError {}
