//! Tonal palettes.

use tracing::debug;

use crate::{Component, Rgb};

/// The lightness of each palette step, from dark to light.
pub const PALETTE_LIGHTNESS: [Component; 9] = [10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0, 90.0];

/// Generate the 9 step palette of `base` as hex colors, ordered from dark to
/// light. A `base` that is not a six digit hex color is returned as the only
/// element.
pub fn generate_color_palette(base: &str) -> Vec<String> {
    match Rgb::from_hex(base) {
        Some(rgb) => rgb.palette().iter().map(Rgb::to_hex).collect(),
        None => {
            debug!(base, "unparseable palette base");
            vec![base.to_owned()]
        }
    }
}

impl Rgb {
    /// Generate the 9 step palette of this color, keeping its hue and
    /// saturation. See [`PALETTE_LIGHTNESS`].
    pub fn palette(&self) -> [Rgb; 9] {
        let hsl = self.to_hsl();
        PALETTE_LIGHTNESS.map(|lightness| hsl.with_lightness(lightness).to_rgb())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{hex_to_rgb, is_valid_hex_color};

    #[test]
    fn brand_blue_palette() {
        assert_eq!(
            generate_color_palette("#2563eb"),
            [
                "#04122f", "#09235d", "#0d358c", "#1146bb", "#1558ea", "#4479ee", "#739bf2",
                "#a2bcf6", "#d0defb",
            ]
        );
    }

    #[test]
    fn palette_lightness_increases() {
        for base in ["#2563eb", "#7c3aed", "#ff0000", "#777777", "#000000", "#ffffff"] {
            let palette = generate_color_palette(base);
            assert_eq!(palette.len(), 9);
            assert!(palette.iter().all(|hex| is_valid_hex_color(hex)));

            let lightness = palette
                .iter()
                .map(|hex| hex_to_rgb(hex).unwrap().to_hsl().lightness)
                .collect::<Vec<_>>();
            assert!(
                lightness.windows(2).all(|w| w[0] < w[1]),
                "{base}: {lightness:?}"
            );
        }
    }

    #[test]
    fn palette_keeps_hue() {
        let hue = Rgb::new(37, 99, 235).to_hsl().hue;
        for rgb in &Rgb::new(37, 99, 235).palette()[2..7] {
            assert!((rgb.to_hsl().hue - hue).abs() < 2.0, "{rgb}");
        }
    }

    #[test]
    fn unparseable_base_is_passed_through() {
        assert_eq!(generate_color_palette("#fff"), ["#fff"]);
        assert_eq!(generate_color_palette("not a color"), ["not a color"]);
    }
}
