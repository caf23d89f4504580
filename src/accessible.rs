//! Search for a variant of a color that is readable on a given background.

use tracing::{debug, trace};

use crate::{Component, Rgb, AA_LARGE_RATIO, AA_RATIO};

/// Return a variant of `base` with enough contrast against `background`.
///
/// Hue and saturation of `base` are kept while the lightness is scanned
/// upwards from 5 to 95 in steps of 5. The first candidate reaching 3:1 for
/// large text, or 4.5:1 otherwise, is returned. When none does, the result
/// is black on light backgrounds and white on dark ones. If either color is
/// not a six digit hex color, `base` is returned unchanged.
pub fn generate_accessible_color(base: &str, background: &str, large_text: bool) -> String {
    let (Some(color), Some(bg)) = (Rgb::from_hex(base), Rgb::from_hex(background)) else {
        debug!(base, background, "unparseable color, keeping base color");
        return base.to_owned();
    };

    color.accessible_on(&bg, large_text).to_hex()
}

impl Rgb {
    /// Find the first lightness of this color's hue and saturation that is
    /// readable on `background`. See [`generate_accessible_color`].
    pub fn accessible_on(&self, background: &Rgb, large_text: bool) -> Rgb {
        let target = if large_text { AA_LARGE_RATIO } else { AA_RATIO };
        let hsl = self.to_hsl();

        let found = (5u8..=95).step_by(5).find_map(|lightness| {
            let candidate = hsl.with_lightness(Component::from(lightness)).to_rgb();
            let ratio = candidate.contrast_ratio(background);
            trace!(lightness, ratio, "accessible color candidate");
            (ratio >= target).then_some(candidate)
        });

        found.unwrap_or_else(|| {
            let fallback = if background.luminance() > 0.5 {
                Rgb::BLACK
            } else {
                Rgb::WHITE
            };
            debug!(%background, %fallback, "no lightness reaches the target ratio");
            fallback
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contrast_ratio;

    #[test]
    fn white_on_white_never_returns_white() {
        let color = generate_accessible_color("#ffffff", "#ffffff", false);
        assert_ne!(color, "#ffffff");
        assert!(color == "#000000" || contrast_ratio(&color, "#ffffff") >= 4.5);
        assert_eq!(color, "#0d0d0d");
    }

    #[test]
    fn first_passing_lightness_is_returned() {
        // Lightness 5 already passes against white.
        assert_eq!(generate_accessible_color("#2563eb", "#ffffff", false), "#020917");

        // Against black the scan has to climb to lightness 60.
        let color = generate_accessible_color("#2563eb", "#000000", false);
        assert_eq!(color, "#4479ee");
        assert!(contrast_ratio(&color, "#000000") >= 4.5);
    }

    #[test]
    fn large_text_has_a_lower_target() {
        assert_eq!(generate_accessible_color("#2563eb", "#777777", true), "#020917");
    }

    #[test]
    fn falls_back_to_black_or_white() {
        // Nothing in the scan reaches 4.5:1 on mid gray, which is dark.
        assert_eq!(generate_accessible_color("#2563eb", "#777777", false), "#ffffff");

        let light = Rgb::new(0xcc, 0xcc, 0xcc);
        assert!(light.luminance() > 0.5);
        let color = Rgb::new(0x80, 0x80, 0x80).accessible_on(&light, false);
        assert!(color == Rgb::BLACK || color.contrast_ratio(&light) >= 4.5);
    }

    #[test]
    fn unparseable_input_is_returned_unchanged() {
        assert_eq!(generate_accessible_color("#fff", "#000000", false), "#fff");
        assert_eq!(generate_accessible_color("#2563eb", "white", false), "#2563eb");
    }

    #[test]
    fn result_always_meets_target_or_is_black_or_white() {
        let colors = ["#2563eb", "#7c3aed", "#ff0000", "#00ff00", "#777777", "#1e293b"];
        for base in colors {
            for bg in colors {
                for large_text in [false, true] {
                    let target = if large_text { 3.0 } else { 4.5 };
                    let color = generate_accessible_color(base, bg, large_text);
                    assert!(
                        color == "#000000"
                            || color == "#ffffff"
                            || contrast_ratio(&color, bg) >= target,
                        "{base} on {bg}: {color}"
                    );
                }
            }
        }
    }
}
