//! Errors raised while reading colors and building palettes.

use std::fmt;
use std::num::ParseIntError;

/// A hex color string could not be read.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseColorError {
    /// Wrong number of hex digits after stripping `#` (3 or 6 are accepted)
    InvalidLength { digits: usize },
    /// The string contains non-ASCII characters
    NonAscii,
    /// A digit is not hexadecimal
    InvalidHex(ParseIntError),
}

impl From<ParseIntError> for ParseColorError {
    fn from(err: ParseIntError) -> Self {
        ParseColorError::InvalidHex(err)
    }
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseColorError::InvalidLength { digits } => {
                write!(f, "expected 3 or 6 hex digits, found {digits}")
            }
            ParseColorError::NonAscii => f.write_str("color contains non-ASCII characters"),
            ParseColorError::InvalidHex(err) => write!(f, "bad hex digit ({err})"),
        }
    }
}

impl std::error::Error for ParseColorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        if let ParseColorError::InvalidHex(err) = self {
            Some(err)
        } else {
            None
        }
    }
}

/// A palette was rejected at construction.
///
/// Palette order decides ties in nearest-color search, so a palette that
/// lists a color twice is refused instead of silently deduplicated.
#[derive(Debug, Clone, PartialEq)]
pub enum PaletteError {
    EmptyPalette,
    /// More entries than a `u8` index can address
    TooManyColors { count: usize },
    /// Entry `index` repeats an earlier entry
    DuplicateColor { index: usize },
    ParseColor(ParseColorError),
}

impl From<ParseColorError> for PaletteError {
    fn from(err: ParseColorError) -> Self {
        PaletteError::ParseColor(err)
    }
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaletteError::EmptyPalette => f.write_str("palette cannot be empty"),
            PaletteError::TooManyColors { count } => {
                write!(f, "palette has {count} colors, at most 64 are supported")
            }
            PaletteError::DuplicateColor { index } => {
                write!(f, "palette entry {index} repeats an earlier color")
            }
            PaletteError::ParseColor(err) => write!(f, "invalid color: {err}"),
        }
    }
}

impl std::error::Error for PaletteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        if let PaletteError::ParseColor(err) = self {
            Some(err)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_palette_error_messages() {
        assert_eq!(
            PaletteError::EmptyPalette.to_string(),
            "palette cannot be empty"
        );
        assert_eq!(
            PaletteError::DuplicateColor { index: 4 }.to_string(),
            "palette entry 4 repeats an earlier color"
        );
        assert_eq!(
            PaletteError::TooManyColors { count: 65 }.to_string(),
            "palette has 65 colors, at most 64 are supported"
        );
    }

    #[test]
    fn test_parse_color_messages() {
        assert_eq!(
            ParseColorError::InvalidLength { digits: 4 }.to_string(),
            "expected 3 or 6 hex digits, found 4"
        );
        assert_eq!(
            PaletteError::from(ParseColorError::NonAscii).to_string(),
            "invalid color: color contains non-ASCII characters"
        );
    }

    #[test]
    fn test_parse_error_source_chain() {
        let inner = u8::from_str_radix("zz", 16).unwrap_err();
        let err = PaletteError::from(ParseColorError::from(inner));
        let source = err.source().expect("parse error should have a source");
        assert!(source.source().is_some());
        assert!(err.to_string().starts_with("invalid color: bad hex digit"));
    }
}
