use std::num::ParseIntError;

use thiserror::Error;

/// Palette does not fit the indexed color being resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PaletteError {
    #[error("color index {index} is out of range for a palette of {len}")]
    IndexOutOfRange { index: u8, len: usize },

    #[error(
        "cannot brighten color index {index}: palette of {len} has no bright range"
    )]
    NoBrightRange { index: u8, len: usize },
}

/// Errors produced while parsing an [`Rgb`](crate::Rgb) from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseRgbError {
    #[error("expected `#rrggbb` or `0xrrggbb`, got `{0}`")]
    InvalidFormat(String),

    #[error("invalid color component: {0}")]
    InvalidComponent(#[from] ParseIntError),
}
