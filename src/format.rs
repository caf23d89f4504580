//! Display a hex color in the notation picked in a color picker.

use crate::Rgb;

/// The notations a color can be displayed in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ColorFormat {
    /// `#rrggbb`.
    #[default]
    Hex,
    /// `rgb(r, g, b)`.
    Rgb,
    /// `hsl(h, s%, l%)`, rounded to integers.
    Hsl,
}

/// Format a six digit hex color in the given notation. Values that are not
/// six digit hex colors are returned unchanged.
///
/// The `Rgb` and `Hsl` output is accepted by [`crate::normalize_color`].
pub fn format_color(value: &str, format: ColorFormat) -> String {
    let Some(rgb) = Rgb::from_hex(value) else {
        return value.to_owned();
    };

    match format {
        ColorFormat::Hex => value.to_owned(),
        ColorFormat::Rgb => format!("rgb({}, {}, {})", rgb.red, rgb.green, rgb.blue),
        ColorFormat::Hsl => rgb.to_hsl().to_string(),
    }
}
