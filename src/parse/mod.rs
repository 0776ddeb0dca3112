//! Config files and command lines write sizes as `"2GB"` or `"10.5 MB"` but
//! code computes with raw byte counts. This module turns that notation into
//! exact [`ByteSize`] values.
//!
//! One left-to-right pass over the input bytes, no backtracking, no
//! allocation outside the error path. Grammar:
//! `digits ['.' digits] [whitespace* unit]`: the first byte must be a digit,
//! at most one decimal point, and the unit suffix may be a prefix letter
//! (`K`/`M`/...), a two-letter form (`KB`/`KiB`), or spelled out
//! (`kilobyte`), all case-insensitive. The one deliberate exception: a
//! capital prefix with a lowercase `b` (`Kb`, `Mb`, ...) conventionally
//! means bits and is rejected with [`ParseErrorKind::Bits`] instead of being
//! silently read as bytes.

use crate::error::{ParseError, ParseErrorKind};
use crate::size::ByteSize;

/// Parses human-friendly byte-size notation into an exact byte count.
///
/// Fractional parts are resolved to whole bytes, rounding down:
/// `"10.5 MB"` is exactly `10 * MB + MB / 2`. Values beyond `u64::MAX`
/// fail with [`ParseErrorKind::Overflow`] and saturate rather than wrap;
/// [`ParseError::fallback`] is [`ByteSize::MAX`] in that case.
///
/// # Errors
/// [`ParseErrorKind::Syntax`] on malformed input or an unknown unit,
/// [`ParseErrorKind::Overflow`] past the 64-bit range, and
/// [`ParseErrorKind::Bits`] for bit-style units such as `"Mb"`.
pub fn parse(t: &[u8]) -> Result<ByteSize, ParseError> {
    let mut value: u64 = 0;
    let mut decimal: u64 = 0;
    let mut power: u64 = 1;
    let mut seen_decimal = false;
    let mut i = 0;

    while i < t.len() {
        match t[i] {
            c @ b'0'..=b'9' => {
                let digit = u64::from(c - b'0');
                if seen_decimal {
                    decimal = decimal
                        .checked_mul(10)
                        .and_then(|d| d.checked_add(digit))
                        .ok_or_else(|| ParseError::new(ParseErrorKind::Overflow, t))?;
                    // Past 19 fractional digits the contribution is below
                    // one byte for every unit; saturating keeps the divisor
                    // well-defined instead of wrapping.
                    power = power.saturating_mul(10);
                } else {
                    value = value
                        .checked_mul(10)
                        .and_then(|v| v.checked_add(digit))
                        .ok_or_else(|| ParseError::new(ParseErrorKind::Overflow, t))?;
                }
            }
            b'.' => {
                if seen_decimal || i == 0 {
                    return Err(ParseError::new(ParseErrorKind::Syntax, t));
                }
                seen_decimal = true;
            }
            _ => {
                // A non-digit may only end the number, never start it
                if i == 0 {
                    return Err(ParseError::new(ParseErrorKind::Syntax, t));
                }
                break;
            }
        }
        i += 1;
    }

    // Empty input never entered the loop
    if i == 0 {
        return Err(ParseError::new(ParseErrorKind::Syntax, t));
    }

    let unit = t[i..].trim_ascii();

    // Checked before lowercasing: the capitalization IS the signal
    if matches!(unit, b"Kb" | b"Mb" | b"Gb" | b"Tb" | b"Pb" | b"Eb") {
        return Err(ParseError::new(ParseErrorKind::Bits, t));
    }

    let multiplier =
        unit_multiplier(unit).ok_or_else(|| ParseError::new(ParseErrorKind::Syntax, t))?;

    let scaled = value
        .checked_mul(multiplier)
        .ok_or_else(|| ParseError::new(ParseErrorKind::Overflow, t))?;

    // Fractional bytes: decimal/power of a unit, truncated to whole bytes.
    // Widening to 128 bits keeps the product exact for every reachable
    // accumulator value.
    let fractional = u128::from(decimal) * u128::from(multiplier) / u128::from(power);
    let fractional = u64::try_from(fractional)
        .map_err(|_| ParseError::new(ParseErrorKind::Overflow, t))?;

    let total = scaled
        .checked_add(fractional)
        .ok_or_else(|| ParseError::new(ParseErrorKind::Overflow, t))?;

    Ok(ByteSize::new(total))
}

/// [`parse`] for string slices.
///
/// # Errors
/// Same conditions as [`parse`].
pub fn parse_str(s: &str) -> Result<ByteSize, ParseError> {
    parse(s.as_bytes())
}

/// [`parse`] for call sites that have already validated their input or
/// accept a fatal failure.
///
/// # Panics
/// On any parse error.
#[must_use]
pub fn must_parse(t: &[u8]) -> ByteSize {
    match parse(t) {
        Ok(size) => size,
        Err(err) => panic!("{err}"),
    }
}

/// [`must_parse`] for string slices.
///
/// # Panics
/// On any parse error.
#[must_use]
pub fn must_parse_str(s: &str) -> ByteSize {
    must_parse(s.as_bytes())
}

/// Maps a unit token to its power-of-1024 byte multiplier. `None` means the
/// token is not a recognized suffix.
fn unit_multiplier(unit: &[u8]) -> Option<u64> {
    // Longest accepted token is "kilobytes"; anything longer cannot match
    const MAX_UNIT_LEN: usize = 9;
    if unit.len() > MAX_UNIT_LEN {
        return None;
    }
    let mut lower = [0u8; MAX_UNIT_LEN];
    for (dst, src) in lower.iter_mut().zip(unit) {
        *dst = src.to_ascii_lowercase();
    }

    match &lower[..unit.len()] {
        b"" | b"b" | b"byte" | b"bytes" => Some(ByteSize::B.bytes()),
        b"k" | b"kb" | b"kib" | b"kilo" | b"kilobyte" | b"kilobytes" => Some(ByteSize::KB.bytes()),
        b"m" | b"mb" | b"mib" | b"mega" | b"megabyte" | b"megabytes" => Some(ByteSize::MB.bytes()),
        b"g" | b"gb" | b"gib" | b"giga" | b"gigabyte" | b"gigabytes" => Some(ByteSize::GB.bytes()),
        b"t" | b"tb" | b"tib" | b"tera" | b"terabyte" | b"terabytes" => Some(ByteSize::TB.bytes()),
        b"p" | b"pb" | b"pib" | b"peta" | b"petabyte" | b"petabytes" => Some(ByteSize::PB.bytes()),
        b"e" | b"eb" | b"eib" | b"exa" | b"exabyte" | b"exabytes" => Some(ByteSize::EB.bytes()),
        _ => None,
    }
}
