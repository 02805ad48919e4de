//! Error types for color parsing and canvas redraws.

use thiserror::Error;

/// Failure to read a swatch color string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("expected `rgb(r, g, b)`, got {0:?}")]
    NotRgb(String),

    #[error("expected 3 channels, got {0}")]
    ChannelCount(usize),

    #[error("channel {0:?} is not an integer in 0..=255")]
    Channel(String),

    #[error("expected `#rrggbb`, got {0:?}")]
    NotHex(String),
}

/// Errors surfaced by the picker while applying a color.
#[derive(Debug, Error)]
pub enum PickerError {
    #[error("color error: {0}")]
    Color(#[from] ColorError),

    /// The scene returned no descriptors where the redraw needs the first one.
    #[error("scene returned no {0} descriptors")]
    EmptyScene(&'static str),

    /// A drawing routine of the hosting scene failed.
    #[error("scene error: {0}")]
    Scene(String),
}

pub type Result<T, E = PickerError> = std::result::Result<T, E>;
