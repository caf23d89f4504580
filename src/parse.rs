//! Turn the color notations accepted by the theme editor into colors.
//!
//! Only three notations are understood: hex, `rgb(r, g, b)` and
//! `hsl(h, s%, l%)` with integer components.

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::{hex::parse_hex, hsl_to_rgb, is_valid_hex_color, Component, ParseColorError, Rgb};

/// `rgb(r, g, b)` with integer channels.
/// Groups 1-3: red, green and blue.
static RGB_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"rgb\(([0-9]+),\s*([0-9]+),\s*([0-9]+)\)").expect("rgb regex pattern is valid")
});

/// `hsl(h, s%, l%)` with integer components.
/// Groups 1-3: hue, saturation and lightness.
static HSL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"hsl\(([0-9]+),\s*([0-9]+)%,\s*([0-9]+)%\)").expect("hsl regex pattern is valid")
});

/// Digits matched by the patterns above, saturated to a channel.
fn channel(digits: &str) -> u8 {
    digits
        .parse::<u32>()
        .ok()
        .and_then(|value| u8::try_from(value).ok())
        .unwrap_or(u8::MAX)
}

fn number(digits: &str) -> Component {
    digits.parse().unwrap_or(0.0)
}

/// Parse hex (`#rgb` or `#rrggbb`), `rgb(r, g, b)` or `hsl(h, s%, l%)`.
///
/// Channels above 255 are clamped, hues wrap around and percentages are
/// clamped to 100.
///
/// ```rust
/// use brandtone::{parse_color, Rgb};
/// assert_eq!(parse_color("#fff"), Ok(Rgb::WHITE));
/// assert_eq!(parse_color("rgb(37, 99, 235)"), Ok(Rgb::new(37, 99, 235)));
/// assert!(parse_color("red").is_err());
/// ```
pub fn parse_color(color: &str) -> Result<Rgb, ParseColorError> {
    if color.starts_with('#') {
        return parse_hex(color);
    }

    if let Some(captures) = RGB_REGEX.captures(color) {
        return Ok(Rgb::new(
            channel(&captures[1]),
            channel(&captures[2]),
            channel(&captures[3]),
        ));
    }

    if let Some(captures) = HSL_REGEX.captures(color) {
        return Ok(hsl_to_rgb(
            number(&captures[1]),
            number(&captures[2]),
            number(&captures[3]),
        ));
    }

    Err(ParseColorError::UnrecognizedFormat(color.to_owned()))
}

/// Convert any accepted notation to a hex color, never failing.
///
/// Valid hex input is returned as given, including the 3 digit shorthand.
/// `rgb(...)` and `hsl(...)` literals become lowercase `#rrggbb`. Anything
/// else, including invalid hex, becomes `#000000`.
pub fn normalize_color(color: &str) -> String {
    if color.starts_with('#') {
        if is_valid_hex_color(color) {
            return color.to_owned();
        }
        debug!(color, "invalid hex color, normalizing to black");
        return Rgb::BLACK.to_hex();
    }

    match parse_color(color) {
        Ok(rgb) => rgb.to_hex(),
        Err(err) => {
            debug!(%err, "normalizing to black");
            Rgb::BLACK.to_hex()
        }
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_color(s)
    }
}
