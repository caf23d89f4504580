//! Errors returned by the strict parsing functions.

use thiserror::Error;

/// The reason a color string could not be turned into a color.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ParseColorError {
    /// The input looked like a hex color but is not `#rgb` or `#rrggbb`.
    #[error("invalid hex color: {0:?}")]
    InvalidHex(String),

    /// The input is neither hex nor an `rgb(...)` or `hsl(...)` literal.
    #[error("unrecognized color: {0:?}")]
    UnrecognizedFormat(String),
}
