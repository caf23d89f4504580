//! Theme color schemes and their accessibility audit.

use std::fmt;

use crate::{check_contrast, ColorContrast, AA_RATIO};

/// The role colors of a theme, as hex strings.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct SchemeColors {
    /// Primary brand color.
    pub primary: String,
    /// Secondary brand color.
    pub secondary: String,

    /// Headings.
    pub heading_text: String,
    /// Running text.
    pub body_text: String,
    /// Links.
    pub link_default: String,
    /// Hovered links.
    pub link_hover: String,
    /// Visited links.
    pub link_visited: String,
    /// Navigation entries.
    pub navigation_text: String,
    /// Button labels.
    pub button_text: String,

    /// Page background.
    pub main_background: String,
    /// Header background.
    pub header_background: String,
    /// Footer background.
    pub footer_background: String,
    /// Sidebar background.
    pub sidebar_background: String,
    /// Button background.
    pub button_background: String,
    /// Hovered button background.
    pub button_hover_background: String,
    /// Pressed button background.
    pub button_active_background: String,
    /// Call to action background.
    pub cta_background: String,

    /// Borders.
    pub border_color: String,
    /// Icons.
    pub icon_color: String,
    /// Highlights.
    pub highlight_color: String,
    /// Informational alerts.
    pub alert_info: String,
    /// Success alerts.
    pub alert_success: String,
    /// Warning alerts.
    pub alert_warning: String,
    /// Error alerts.
    pub alert_error: String,

    /// Card background.
    pub card_background: String,
    /// Input background.
    pub input_background: String,
    /// Input border.
    pub input_border: String,
    /// Focused input outline.
    pub input_focus: String,
    /// Drop shadows.
    pub shadow_color: String,
}

/// A named set of theme colors.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct ColorScheme {
    /// Unique id of the scheme.
    pub id: String,
    /// Display name.
    pub name: String,
    /// The role colors.
    pub colors: SchemeColors,
    /// Built in schemes can not be deleted.
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_default: bool,
    /// ISO 8601 creation time.
    #[cfg_attr(feature = "serde", serde(default))]
    pub created_at: String,
    /// ISO 8601 time of the last change.
    #[cfg_attr(feature = "serde", serde(default))]
    pub updated_at: String,
}

/// A text/background pair of a scheme that must stay readable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContrastCheck<'a> {
    /// What the pair is used for.
    pub label: &'static str,
    /// The text color.
    pub foreground: &'a str,
    /// The color behind the text.
    pub background: &'a str,
}

impl ContrastCheck<'_> {
    /// Check the contrast of this pair.
    pub fn contrast(&self) -> ColorContrast {
        check_contrast(self.foreground, self.background)
    }
}

/// A pair of a scheme that is not accessible.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContrastIssue {
    /// What the pair is used for.
    pub label: &'static str,
    /// The failing contrast.
    pub contrast: ColorContrast,
}

/// Formats as `label: ratio:1 (needs 4.5:1)`, with the ratio rounded to two
/// decimals and exact ties going to the even digit.
impl fmt::Display for ContrastIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {:.2}:1 (needs {AA_RATIO}:1)",
            self.label, self.contrast.ratio
        )
    }
}

impl ColorScheme {
    /// The critical pairs of this scheme.
    pub fn contrast_checks(&self) -> [ContrastCheck<'_>; 4] {
        let c = &self.colors;
        [
            ContrastCheck {
                label: "Heading text on main background",
                foreground: &c.heading_text,
                background: &c.main_background,
            },
            ContrastCheck {
                label: "Body text on main background",
                foreground: &c.body_text,
                background: &c.main_background,
            },
            ContrastCheck {
                label: "Button text on button background",
                foreground: &c.button_text,
                background: &c.button_background,
            },
            ContrastCheck {
                label: "Navigation text on header background",
                foreground: &c.navigation_text,
                background: &c.header_background,
            },
        ]
    }

    /// The number of critical pairs that are accessible.
    pub fn accessible_pair_count(&self) -> usize {
        self.contrast_checks()
            .iter()
            .filter(|check| check.contrast().is_accessible)
            .count()
    }

    /// The critical pairs that are not accessible, in check order.
    pub fn accessibility_issues(&self) -> Vec<ContrastIssue> {
        self.contrast_checks()
            .iter()
            .filter_map(|check| {
                let contrast = check.contrast();
                (!contrast.is_accessible).then_some(ContrastIssue {
                    label: check.label,
                    contrast,
                })
            })
            .collect()
    }
}
