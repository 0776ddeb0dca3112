#![forbid(unsafe_code)]

//! `datasize` - Byte counts as a value type, with exact parsing of
//! human-friendly notation.
//!
//! Applications read sizes like `"500M"` or `"10.5 MB"` from config files and
//! command lines but compute with raw byte counts. [`ByteSize`] bridges the
//! two: a `u64` newtype with power-of-1024 unit constants, a canonical text
//! form that round-trips exactly, and a single-pass parser that refuses to
//! wrap on overflow or silently reinterpret bit units as bytes.
//!
//! # Example
//!
//! ```
//! use datasize::ByteSize;
//!
//! let size: ByteSize = "10.5 MB".parse().unwrap();
//! assert_eq!(size.bytes(), 11_010_048);
//! assert_eq!(size.to_string(), "10752KB");
//! assert_eq!(size.human_readable(), "10.5 MB");
//! ```
//!
//! Parsing distinguishes three failure kinds: malformed input, 64-bit
//! overflow (the value saturates rather than wraps), and bit units such as
//! `"Mb"` (capital prefix, lowercase `b`), which conventionally denote bits
//! and are rejected rather than misread as bytes.

pub mod error;
pub mod parse;
pub mod size;

// Re-exports for convenience
pub use error::{ParseError, ParseErrorKind};
pub use parse::{must_parse, must_parse_str, parse, parse_str};
pub use size::ByteSize;
