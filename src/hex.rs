//! Parsing, formatting and validation of hex color notation.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::{ParseColorError, Rgb};

/// Six hex digits with an optional leading `#`.
/// Groups 1-3: red, green and blue.
static HEX_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^#?([0-9a-f]{2})([0-9a-f]{2})([0-9a-f]{2})$")
        .expect("hex regex pattern is valid")
});

/// `#` followed by exactly 3 or 6 hex digits.
static VALID_HEX_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#([A-Fa-f0-9]{6}|[A-Fa-f0-9]{3})$").expect("hex validation pattern is valid")
});

/// Parse a six digit hex color, with or without a leading `#`. The digits
/// are case insensitive. Shorthand (`#fff`) and any other notation return
/// `None`.
///
/// ```rust
/// use brandtone::{hex_to_rgb, Rgb};
/// assert_eq!(hex_to_rgb("#2563EB"), Some(Rgb::new(37, 99, 235)));
/// assert_eq!(hex_to_rgb("#fff"), None);
/// ```
pub fn hex_to_rgb(hex: &str) -> Option<Rgb> {
    let captures = HEX_REGEX.captures(hex)?;
    let channel = |i: usize| u8::from_str_radix(&captures[i], 16).ok();
    Some(Rgb::new(channel(1)?, channel(2)?, channel(3)?))
}

/// Format the channels as `#rrggbb` in lowercase.
pub fn rgb_to_hex(red: u8, green: u8, blue: u8) -> String {
    format!("#{red:02x}{green:02x}{blue:02x}")
}

/// Return true if `hex` is `#` followed by exactly 3 or 6 hex digits.
pub fn is_valid_hex_color(hex: &str) -> bool {
    VALID_HEX_REGEX.is_match(hex)
}

/// Strictly parse `#rgb` or `#rrggbb`, expanding the shorthand form.
pub(crate) fn parse_hex(hex: &str) -> Result<Rgb, ParseColorError> {
    if !is_valid_hex_color(hex) {
        return Err(ParseColorError::InvalidHex(hex.to_owned()));
    }

    let digits = &hex[1..];
    let rgb = if digits.len() == 3 {
        let expanded: String = digits.chars().flat_map(|c| [c, c]).collect();
        hex_to_rgb(&expanded)
    } else {
        hex_to_rgb(digits)
    };

    rgb.ok_or_else(|| ParseColorError::InvalidHex(hex.to_owned()))
}

impl Rgb {
    /// Parse a six digit hex color. See [`hex_to_rgb`].
    pub fn from_hex(hex: &str) -> Option<Self> {
        hex_to_rgb(hex)
    }

    /// Format this color as `#rrggbb`.
    pub fn to_hex(&self) -> String {
        rgb_to_hex(self.red, self.green, self.blue)
    }
}

/// Formats as lowercase `#rrggbb`.
impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}
