//! Relative luminance and contrast ratios as defined by WCAG 2.x.
//! <https://www.w3.org/TR/WCAG21/#dfn-contrast-ratio>

use std::fmt;

use bitflags::bitflags;
use tracing::debug;

use crate::{math::weighted_sum, Component, Components, ParseColorError, Rgb};

/// Minimum ratio for AAA conformance of normal text.
pub const AAA_RATIO: Component = 7.0;

/// Minimum ratio for AA conformance of normal text, and AAA of large text.
pub const AA_RATIO: Component = 4.5;

/// Minimum ratio for AA conformance of large text.
pub const AA_LARGE_RATIO: Component = 3.0;

const LUMINANCE_WEIGHTS: [Component; 3] = [0.2126, 0.7152, 0.0722];

/// Remove the sRGB gamma encoding from unit range components, using the
/// threshold given by WCAG 2.x.
fn to_linear_light(from: &Components) -> Components {
    from.map(|value| {
        if value <= 0.03928 {
            value / 12.92
        } else {
            ((value + 0.055) / 1.055).powf(2.4)
        }
    })
}

/// Relative luminance of 8-bit channels, in [0, 1].
pub fn luminance(red: u8, green: u8, blue: u8) -> Component {
    Rgb::new(red, green, blue).luminance()
}

/// Contrast ratio between two six digit hex colors, in [1, 21]. The order
/// of the colors does not matter. If either color can not be parsed the
/// ratio is 1.
pub fn contrast_ratio(first: &str, second: &str) -> Component {
    try_contrast_ratio(first, second).unwrap_or_else(|err| {
        debug!(%err, "contrast against an unparseable color, using 1:1");
        1.0
    })
}

/// Contrast ratio between two six digit hex colors, failing if either color
/// can not be parsed.
pub fn try_contrast_ratio(first: &str, second: &str) -> Result<Component, ParseColorError> {
    let parse = |hex: &str| {
        Rgb::from_hex(hex).ok_or_else(|| ParseColorError::InvalidHex(hex.to_owned()))
    };
    Ok(parse(first)?.contrast_ratio(&parse(second)?))
}

/// Classify the contrast between a foreground and background color.
///
/// ```rust
/// use brandtone::{check_contrast, Level};
/// let contrast = check_contrast("#000000", "#ffffff");
/// assert_eq!(contrast.level, Level::Aaa);
/// assert!(contrast.is_accessible);
/// ```
pub fn check_contrast(foreground: &str, background: &str) -> ColorContrast {
    ColorContrast::from_ratio(contrast_ratio(foreground, background))
}

impl Rgb {
    /// The relative luminance of this color, in [0, 1].
    pub fn luminance(&self) -> Component {
        weighted_sum(&to_linear_light(&self.to_unit()), LUMINANCE_WEIGHTS)
    }

    /// The contrast ratio between this color and another, in [1, 21].
    pub fn contrast_ratio(&self, other: &Rgb) -> Component {
        let first = self.luminance();
        let second = other.luminance();

        let brightest = first.max(second);
        let darkest = first.min(second);

        (brightest + 0.05) / (darkest + 0.05)
    }

    /// Classify the contrast of this color used as text on `background`.
    pub fn contrast(&self, background: &Rgb) -> ColorContrast {
        ColorContrast::from_ratio(self.contrast_ratio(background))
    }
}

/// The WCAG level a contrast ratio reaches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "UPPERCASE")
)]
pub enum Level {
    /// Below 3:1.
    Fail,
    /// At least 3:1. Only sufficient for large text, so not accessible.
    A,
    /// At least 4.5:1.
    Aa,
    /// At least 7:1.
    Aaa,
}

impl Level {
    /// Classify a ratio, checking the thresholds from high to low.
    pub fn from_ratio(ratio: Component) -> Self {
        if ratio >= AAA_RATIO {
            Self::Aaa
        } else if ratio >= AA_RATIO {
            Self::Aa
        } else if ratio >= AA_LARGE_RATIO {
            Self::A
        } else {
            Self::Fail
        }
    }

    /// Only AA and AAA count as accessible for general text.
    pub fn is_accessible(&self) -> bool {
        matches!(self, Self::Aa | Self::Aaa)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Aaa => "AAA",
            Self::Aa => "AA",
            Self::A => "A",
            Self::Fail => "FAIL",
        })
    }
}

bitflags! {
    /// The WCAG success criteria that a contrast ratio satisfies.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Conformance : u8 {
        /// Large text at level AA, 3:1.
        const AA_LARGE = 1 << 0;
        /// Normal text at level AA, 4.5:1.
        const AA = 1 << 1;
        /// Large text at level AAA, 4.5:1.
        const AAA_LARGE = 1 << 2;
        /// Normal text at level AAA, 7:1.
        const AAA = 1 << 3;
    }
}

impl Conformance {
    /// The criteria met by `ratio`.
    pub fn from_ratio(ratio: Component) -> Self {
        let mut conformance = Self::empty();
        conformance.set(Self::AA_LARGE, ratio >= AA_LARGE_RATIO);
        conformance.set(Self::AA | Self::AAA_LARGE, ratio >= AA_RATIO);
        conformance.set(Self::AAA, ratio >= AAA_RATIO);
        conformance
    }
}

/// The result of checking the contrast between two colors.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct ColorContrast {
    /// The contrast ratio, in [1, 21].
    pub ratio: Component,
    /// The level reached by the ratio.
    pub level: Level,
    /// Whether the ratio is sufficient for normal text (AA or better).
    pub is_accessible: bool,
}

impl ColorContrast {
    /// Classify a contrast ratio.
    pub fn from_ratio(ratio: Component) -> Self {
        let level = Level::from_ratio(ratio);
        Self {
            ratio,
            level,
            is_accessible: level.is_accessible(),
        }
    }

    /// The success criteria met by this contrast.
    pub fn conformance(&self) -> Conformance {
        Conformance::from_ratio(self.ratio)
    }

    /// Whether this contrast is enough for AA, taking the text size into
    /// account.
    pub fn passes(&self, large_text: bool) -> bool {
        let required = if large_text {
            Conformance::AA_LARGE
        } else {
            Conformance::AA
        };
        self.conformance().contains(required)
    }

    /// A one line, human readable verdict on this contrast.
    ///
    /// The ratio is shown with two decimals. Ratios exactly halfway between
    /// two hundredths round to the even digit, so `1.125` reads `1.12`.
    pub fn describe(&self, large_text: bool) -> String {
        let ratio = self.ratio;
        match self.level {
            Level::Aaa => format!("Excellent ({ratio:.2}:1) - Exceeds all accessibility standards"),
            Level::Aa => format!("Good ({ratio:.2}:1) - Meets WCAG AA standards"),
            Level::A => {
                format!("Fair ({ratio:.2}:1) - Meets WCAG A standards but not recommended")
            }
            Level::Fail => {
                let minimum = if large_text { "3:1" } else { "4.5:1" };
                format!(
                    "Poor ({ratio:.2}:1) - Does not meet accessibility standards (min: {minimum})"
                )
            }
        }
    }
}
