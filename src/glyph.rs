//! Private-use glyph codes.
//!
//! Emoji codes are written as `E` followed by hex digits (`E001`, `E0ff`) and
//! name an offset from U+E000. Valid codes always land in U+E000..=U+EFFF.

use std::fmt;
use thiserror::Error;

/// First codepoint of the emoji window.
pub const GLYPH_BASE: u32 = 0xE000;

/// Last codepoint of the emoji window (inclusive).
pub const GLYPH_LAST: u32 = 0xEFFF;

/// Largest offset a code may carry.
pub const MAX_OFFSET: u32 = GLYPH_LAST - GLYPH_BASE;

/// Errors produced when turning a code string into a [`Glyph`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GlyphError {
    /// The code is not `E` followed by one or more hex digits.
    #[error("invalid emoji code {code:?}: expected 'E' followed by hex digits")]
    InvalidCodeFormat { code: String },

    /// The code parsed but points outside U+E000..=U+EFFF.
    ///
    /// `codepoint` is `None` when the offset does not even fit in 32 bits.
    #[error("emoji code {code:?} is out of the private use area (U+E000..=U+EFFF)")]
    OutOfRange { code: String, codepoint: Option<u32> },
}

/// A single character in the emoji window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Glyph(char);

impl Glyph {
    /// Build a glyph from an offset relative to U+E000.
    ///
    /// Returns `None` when the offset is above `0xFFF`.
    pub fn from_offset(offset: u16) -> Option<Self> {
        let offset = u32::from(offset);
        if offset > MAX_OFFSET {
            return None;
        }
        char::from_u32(GLYPH_BASE + offset).map(Glyph)
    }

    /// The glyph as a `char`.
    pub fn as_char(self) -> char {
        self.0
    }

    /// The Unicode scalar value.
    pub fn codepoint(self) -> u32 {
        u32::from(self.0)
    }

    /// Offset from U+E000.
    pub fn offset(self) -> u16 {
        // Always <= 0xFFF
        (self.codepoint() - GLYPH_BASE) as u16
    }

    /// Canonical code for this glyph, e.g. `E001`.
    pub fn code(self) -> String {
        format!("E{:03X}", self.offset())
    }
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Glyph> for char {
    fn from(glyph: Glyph) -> Self {
        glyph.0
    }
}

/// Convert an emoji code such as `E001` into its private-use glyph.
///
/// The prefix is a single `E` (or `e`); the remainder must be one or more
/// hex digits in either case. Leading zeros are allowed, so `E0000001` is the
/// same glyph as `E1`.
pub fn format_glyph(code: &str) -> Result<Glyph, GlyphError> {
    let digits = code
        .strip_prefix('E')
        .or_else(|| code.strip_prefix('e'))
        .filter(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_hexdigit()))
        .ok_or_else(|| GlyphError::InvalidCodeFormat {
            code: code.to_string(),
        })?;

    // Only overflow can fail here; every byte is already a hex digit
    let offset = u32::from_str_radix(digits, 16).map_err(|_| GlyphError::OutOfRange {
        code: code.to_string(),
        codepoint: None,
    })?;

    if offset > MAX_OFFSET {
        return Err(GlyphError::OutOfRange {
            code: code.to_string(),
            codepoint: GLYPH_BASE.checked_add(offset),
        });
    }

    char::from_u32(GLYPH_BASE + offset)
        .map(Glyph)
        .ok_or_else(|| GlyphError::OutOfRange {
            code: code.to_string(),
            codepoint: Some(GLYPH_BASE + offset),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_offset_in_window() {
        for offset in 0..=MAX_OFFSET {
            let code = format!("E{:X}", offset);
            let glyph = format_glyph(&code).unwrap();
            assert_eq!(glyph.codepoint(), GLYPH_BASE + offset, "code {code}");
            assert_eq!(glyph.to_string().chars().count(), 1);
        }
    }

    #[test]
    fn test_lowercase_digits_and_prefix() {
        assert_eq!(format_glyph("E0ff").unwrap().codepoint(), 0xE0FF);
        assert_eq!(format_glyph("e0FF").unwrap().codepoint(), 0xE0FF);
    }

    #[test]
    fn test_leading_zeros() {
        assert_eq!(format_glyph("E0000001").unwrap().codepoint(), 0xE001);
        assert_eq!(format_glyph("E0").unwrap().codepoint(), 0xE000);
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(
            format_glyph("E1000"),
            Err(GlyphError::OutOfRange {
                code: "E1000".to_string(),
                codepoint: Some(0xF000),
            })
        );
        assert!(matches!(
            format_glyph("EFFFFF"),
            Err(GlyphError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_offset_overflowing_u32() {
        assert_eq!(
            format_glyph("E1FFFFFFFFF"),
            Err(GlyphError::OutOfRange {
                code: "E1FFFFFFFFF".to_string(),
                codepoint: None,
            })
        );
    }

    #[test]
    fn test_invalid_format() {
        for code in [
            "", "E", "ZZZZ", "001", "X001", "E00G", "E 01", " E001", "E001 ", "E+1", "E-1",
            "0xE001", "E0x1",
        ] {
            assert!(
                matches!(format_glyph(code), Err(GlyphError::InvalidCodeFormat { .. })),
                "expected InvalidCodeFormat for {code:?}"
            );
        }
    }

    #[test]
    fn test_from_offset() {
        assert_eq!(Glyph::from_offset(0x10).map(Glyph::as_char), Some('\u{E010}'));
        assert_eq!(Glyph::from_offset(0xFFF).map(Glyph::codepoint), Some(0xEFFF));
        assert_eq!(Glyph::from_offset(0x1000), None);
    }

    #[test]
    fn test_canonical_code() {
        assert_eq!(format_glyph("E1").unwrap().code(), "E001");
        assert_eq!(format_glyph("eabc").unwrap().code(), "EABC");
        assert_eq!(Glyph::from_offset(0xFFF).unwrap().code(), "EFFF");
    }
}
