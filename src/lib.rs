//! brandtone provides the color operations behind a brand theme editor:
//! conversions between hex, RGB and HSL, WCAG contrast checks, the search
//! for accessible variants of a color and tonal palettes.
//!
//! The free functions take and return strings and never fail, falling back
//! to a documented value on unparseable input. The [`Rgb`] and [`Hsl`]
//! models and [`parse_color`] offer the same operations on typed values.
//!
//! ```rust
//! use brandtone::{check_contrast, generate_color_palette, normalize_color, Level};
//!
//! let primary = normalize_color("rgb(37, 99, 235)");
//! assert_eq!(primary, "#2563eb");
//! assert_eq!(check_contrast("#ffffff", &primary).level, Level::Aa);
//! assert_eq!(generate_color_palette(&primary).len(), 9);
//! ```

#![deny(missing_docs)]

mod accessible;
mod color;
mod contrast;
mod convert;
mod error;
mod format;
mod hex;
mod math;
mod models;
mod palette;
mod parse;
mod presets;
mod scheme;

pub use accessible::generate_accessible_color;
pub use color::{Component, Components};
pub use contrast::{
    check_contrast, contrast_ratio, luminance, try_contrast_ratio, ColorContrast, Conformance,
    Level, AAA_RATIO, AA_LARGE_RATIO, AA_RATIO,
};
pub use convert::{hsl_to_rgb, rgb_to_hsl};
pub use error::ParseColorError;
pub use format::{format_color, ColorFormat};
pub use hex::{hex_to_rgb, is_valid_hex_color, rgb_to_hex};
pub use models::{Hsl, Rgb};
pub use palette::{generate_color_palette, PALETTE_LIGHTNESS};
pub use parse::{normalize_color, parse_color};
pub use presets::default_color_schemes;
pub use scheme::{ColorScheme, ContrastCheck, ContrastIssue, SchemeColors};
