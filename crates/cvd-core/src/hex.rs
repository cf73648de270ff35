//! Hex color codec.
//!
//! Accepted input formats (the leading `#` is optional, digits are
//! case-insensitive):
//! * `#rgb` - each nibble is doubled
//! * `#rrggbb`
//!
//! Output is always lowercase `#rrggbb`.

use std::str::FromStr;

use crate::{Error, Result, Rgb8};

fn nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

/// Parses a hex color string.
///
/// # Example
///
/// ```rust
/// use cvd_core::{Rgb8, hex};
///
/// assert_eq!(hex::parse("#ff8000").unwrap(), Rgb8::new(255, 128, 0));
/// assert_eq!(hex::parse("F80").unwrap(), Rgb8::new(255, 136, 0));
/// assert!(hex::parse("#12345").is_err());
/// ```
pub fn parse(input: &str) -> Result<Rgb8> {
    let invalid = || Error::InvalidHex(input.to_string());
    let digits = input.strip_prefix('#').unwrap_or(input).as_bytes();

    let nib = |c: u8| nibble(c).ok_or_else(invalid);

    match digits.len() {
        3 => Ok(Rgb8::new(
            nib(digits[0])? * 17,
            nib(digits[1])? * 17,
            nib(digits[2])? * 17,
        )),
        6 => {
            let byte = |hi: u8, lo: u8| -> Result<u8> { Ok(nib(hi)? << 4 | nib(lo)?) };
            Ok(Rgb8::new(
                byte(digits[0], digits[1])?,
                byte(digits[2], digits[3])?,
                byte(digits[4], digits[5])?,
            ))
        }
        _ => Err(invalid()),
    }
}

/// Formats a color as lowercase `#rrggbb`.
pub fn format(color: Rgb8) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r, color.g, color.b)
}

impl Rgb8 {
    /// Parses `#rgb` / `#rrggbb` (see [`parse`]).
    #[inline]
    pub fn from_hex(input: &str) -> Result<Self> {
        parse(input)
    }

    /// Formats as lowercase `#rrggbb` (see [`format()`]).
    #[inline]
    pub fn to_hex(self) -> String {
        format(self)
    }
}

impl FromStr for Rgb8 {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse(s)
    }
}
