//! The color schemes every installation starts with.

use std::sync::LazyLock;

use crate::{ColorScheme, SchemeColors};

/// Build [`SchemeColors`] from role/hex pairs.
macro_rules! scheme_colors {
    ($($role:ident: $hex:literal),* $(,)?) => {
        SchemeColors {
            $($role: $hex.to_owned(),)*
        }
    };
}

/// Roles shared by the light schemes, which only differ in their brand hues.
macro_rules! light_scheme {
    (
        primary: $primary:literal,
        secondary: $secondary:literal,
        hover: $hover:literal,
        active: $active:literal,
        sidebar: $sidebar:literal,
        highlight: $highlight:literal $(,)?
    ) => {
        scheme_colors! {
            primary: $primary,
            secondary: $secondary,

            heading_text: "#1f2937",
            body_text: "#374151",
            link_default: $primary,
            link_hover: $hover,
            link_visited: $secondary,
            navigation_text: "#ffffff",
            button_text: "#ffffff",

            main_background: "#ffffff",
            header_background: $primary,
            footer_background: "#1f2937",
            sidebar_background: $sidebar,
            button_background: $primary,
            button_hover_background: $hover,
            button_active_background: $active,
            cta_background: $secondary,

            border_color: "#e5e7eb",
            icon_color: "#6b7280",
            highlight_color: $highlight,
            alert_info: "#3b82f6",
            alert_success: "#10b981",
            alert_warning: "#f59e0b",
            alert_error: "#ef4444",

            card_background: "#ffffff",
            input_background: "#ffffff",
            input_border: "#d1d5db",
            input_focus: $primary,
            shadow_color: "#00000010",
        }
    };
}

fn preset(id: &str, name: &str, is_default: bool, colors: SchemeColors) -> ColorScheme {
    ColorScheme {
        id: id.to_owned(),
        name: name.to_owned(),
        colors,
        is_default,
        created_at: String::new(),
        updated_at: String::new(),
    }
}

static DEFAULT_SCHEMES: LazyLock<[ColorScheme; 5]> = LazyLock::new(|| {
    [
        preset(
            "default-blue",
            "Professional Blue",
            true,
            light_scheme! {
                primary: "#2563eb",
                secondary: "#7c3aed",
                hover: "#1d4ed8",
                active: "#1e40af",
                sidebar: "#f9fafb",
                highlight: "#fef3c7",
            },
        ),
        preset(
            "modern-green",
            "Modern Green",
            false,
            light_scheme! {
                primary: "#059669",
                secondary: "#0d9488",
                hover: "#047857",
                active: "#065f46",
                sidebar: "#f0fdf4",
                highlight: "#dcfce7",
            },
        ),
        preset(
            "elegant-purple",
            "Elegant Purple",
            false,
            light_scheme! {
                primary: "#7c3aed",
                secondary: "#a855f7",
                hover: "#6d28d9",
                active: "#5b21b6",
                sidebar: "#faf5ff",
                highlight: "#f3e8ff",
            },
        ),
        preset(
            "warm-orange",
            "Warm Orange",
            false,
            light_scheme! {
                primary: "#ea580c",
                secondary: "#f97316",
                hover: "#c2410c",
                active: "#9a3412",
                sidebar: "#fff7ed",
                highlight: "#fed7aa",
            },
        ),
        preset(
            "dark-theme",
            "Dark Professional",
            false,
            scheme_colors! {
                primary: "#3b82f6",
                secondary: "#8b5cf6",

                heading_text: "#f9fafb",
                body_text: "#e5e7eb",
                link_default: "#60a5fa",
                link_hover: "#93c5fd",
                link_visited: "#a78bfa",
                navigation_text: "#f9fafb",
                button_text: "#ffffff",

                main_background: "#111827",
                header_background: "#1f2937",
                footer_background: "#0f172a",
                sidebar_background: "#1f2937",
                button_background: "#3b82f6",
                button_hover_background: "#2563eb",
                button_active_background: "#1d4ed8",
                cta_background: "#8b5cf6",

                border_color: "#374151",
                icon_color: "#9ca3af",
                highlight_color: "#1e40af",
                alert_info: "#3b82f6",
                alert_success: "#10b981",
                alert_warning: "#f59e0b",
                alert_error: "#ef4444",

                card_background: "#1f2937",
                input_background: "#374151",
                input_border: "#4b5563",
                input_focus: "#3b82f6",
                shadow_color: "#00000040",
            },
        ),
    ]
});

/// The built in color schemes, in the order they are offered. Their
/// timestamps are empty; the settings store stamps them when persisting.
pub fn default_color_schemes() -> &'static [ColorScheme] {
    DEFAULT_SCHEMES.as_slice()
}

impl ColorScheme {
    /// The built in scheme marked as default, or the first built in scheme
    /// if none is marked.
    pub fn default_scheme() -> &'static ColorScheme {
        let schemes = default_color_schemes();
        schemes
            .iter()
            .find(|scheme| scheme.is_default)
            .unwrap_or(&schemes[0])
    }

    /// A new, non default scheme starting from the colors of
    /// [`ColorScheme::default_scheme`].
    pub fn custom(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            colors: Self::default_scheme().colors.clone(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{is_valid_hex_color, Level};

    #[test]
    fn built_in_schemes() {
        let ids = default_color_schemes()
            .iter()
            .map(|scheme| scheme.id.as_str())
            .collect::<Vec<_>>();
        assert_eq!(
            ids,
            ["default-blue", "modern-green", "elegant-purple", "warm-orange", "dark-theme"]
        );
        assert_eq!(
            default_color_schemes()
                .iter()
                .filter(|scheme| scheme.is_default)
                .count(),
            1
        );
    }

    #[test]
    fn default_scheme_is_professional_blue() {
        let scheme = ColorScheme::default_scheme();
        assert_eq!(scheme.id, "default-blue");
        assert_eq!(scheme.name, "Professional Blue");
        assert_eq!(scheme.colors.primary, "#2563eb");
        assert_eq!(scheme.colors.secondary, "#7c3aed");
    }

    #[test]
    fn accessible_pairs_of_built_in_schemes() {
        #[rustfmt::skip]
        const EXPECTED: &[(&str, usize)] = &[
            ("default-blue",   4),
            ("modern-green",   2),
            ("elegant-purple", 4),
            ("warm-orange",    2),
            ("dark-theme",     3),
        ];

        for (scheme, &(id, count)) in default_color_schemes().iter().zip(EXPECTED) {
            assert_eq!(scheme.id, id);
            assert_eq!(scheme.accessible_pair_count(), count, "{id}");
        }
    }

    #[test]
    fn white_buttons_fail_on_green_and_orange() {
        for id in ["modern-green", "warm-orange"] {
            let scheme = default_color_schemes()
                .iter()
                .find(|scheme| scheme.id == id)
                .unwrap();
            let labels = scheme
                .accessibility_issues()
                .iter()
                .map(|issue| {
                    assert_eq!(issue.contrast.level, Level::A);
                    issue.label
                })
                .collect::<Vec<_>>();
            assert_eq!(
                labels,
                [
                    "Button text on button background",
                    "Navigation text on header background",
                ]
            );
        }
    }

    #[test]
    fn role_colors_are_hex() {
        for scheme in default_color_schemes() {
            let c = &scheme.colors;
            for hex in [
                &c.primary,
                &c.heading_text,
                &c.body_text,
                &c.main_background,
                &c.header_background,
                &c.button_background,
                &c.input_focus,
            ] {
                assert!(is_valid_hex_color(hex), "{}: {hex}", scheme.id);
            }
        }
    }

    #[test]
    fn custom_schemes_start_from_the_default() {
        let scheme = ColorScheme::custom("custom-1", "Mine");
        assert_eq!(scheme.id, "custom-1");
        assert_eq!(scheme.name, "Mine");
        assert!(!scheme.is_default);
        assert_eq!(scheme.colors, ColorScheme::default_scheme().colors);
    }
}
