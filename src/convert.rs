//! Conversions between the RGB and HSL models.
//!
//! Conversions operate on fractional components internally and only round
//! when producing 8-bit channels, so `Rgb -> Hsl -> Rgb` is exact up to
//! rounding.

use crate::{Component, Components, Hsl, Rgb};

/// Convert 8-bit channels to the HSL notation. The hue is in degrees,
/// saturation and lightness in percent. Achromatic colors have a hue and
/// saturation of 0.
pub fn rgb_to_hsl(red: u8, green: u8, blue: u8) -> Hsl {
    Rgb::new(red, green, blue).to_hsl()
}

/// Convert a color in the HSL notation to 8-bit channels. The hue is taken
/// modulo 360 and saturation and lightness are clamped to [0, 100].
pub fn hsl_to_rgb(hue: Component, saturation: Component, lightness: Component) -> Rgb {
    Hsl::new(hue, saturation, lightness).to_rgb()
}

impl Rgb {
    /// Convert this color to the HSL notation.
    pub fn to_hsl(&self) -> Hsl {
        let Components(hue, saturation, lightness) = util::rgb_to_hsl(&self.to_unit());
        Hsl::new(hue, saturation, lightness)
    }
}

impl Hsl {
    /// Convert this color from the HSL notation to 8-bit sRGB channels.
    pub fn to_rgb(&self) -> Rgb {
        Rgb::from_unit(&util::hsl_to_rgb(&Components(
            self.hue,
            self.saturation,
            self.lightness,
        )))
    }
}

mod util {
    use crate::{
        color::{Component, Components},
        math::{clamp_percent, normalize_hue},
    };

    /// Convert unit range RGB components to HSL with the hue in degrees and
    /// saturation and lightness in percent.
    pub fn rgb_to_hsl(from: &Components) -> Components {
        let Components(red, green, blue) = *from;

        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);

        let lightness = (max + min) / 2.0;

        if max == min {
            return Components(0.0, 0.0, lightness * 100.0);
        }

        let delta = max - min;

        let saturation = if lightness > 0.5 {
            delta / (2.0 - max - min)
        } else {
            delta / (max + min)
        };

        let sector = if max == red {
            (green - blue) / delta + if green < blue { 6.0 } else { 0.0 }
        } else if max == green {
            (blue - red) / delta + 2.0
        } else {
            (red - green) / delta + 4.0
        };

        Components(sector / 6.0 * 360.0, saturation * 100.0, lightness * 100.0)
    }

    /// Sample one RGB channel at position `t` around the hue circle.
    fn hue_to_channel(p: Component, q: Component, mut t: Component) -> Component {
        if t < 0.0 {
            t += 1.0;
        }
        if t > 1.0 {
            t -= 1.0;
        }

        if t < 1.0 / 6.0 {
            p + (q - p) * 6.0 * t
        } else if t < 1.0 / 2.0 {
            q
        } else if t < 2.0 / 3.0 {
            p + (q - p) * (2.0 / 3.0 - t) * 6.0
        } else {
            p
        }
    }

    /// Convert HSL (degrees and percentages) to unit range RGB components.
    pub fn hsl_to_rgb(from: &Components) -> Components {
        let hue = normalize_hue(from.0) / 360.0;
        let saturation = clamp_percent(from.1) / 100.0;
        let lightness = clamp_percent(from.2) / 100.0;

        if saturation == 0.0 {
            return Components(lightness, lightness, lightness);
        }

        let q = if lightness < 0.5 {
            lightness * (1.0 + saturation)
        } else {
            lightness + saturation - lightness * saturation
        };
        let p = 2.0 * lightness - q;

        Components(
            hue_to_channel(p, q, hue + 1.0 / 3.0),
            hue_to_channel(p, q, hue),
            hue_to_channel(p, q, hue - 1.0 / 3.0),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_channels_near, assert_component_eq};

    #[test]
    fn primaries_to_hsl() {
        #[rustfmt::skip]
        const TESTS: &[(u8, u8, u8, Component, Component, Component)] = &[
            (255,   0,   0,   0.0, 100.0,  50.0),
            (  0, 255,   0, 120.0, 100.0,  50.0),
            (  0,   0, 255, 240.0, 100.0,  50.0),
            (255,   0, 255, 300.0, 100.0,  50.0),
            (  0,   0,   0,   0.0,   0.0,   0.0),
            (255, 255, 255,   0.0,   0.0, 100.0),
        ];

        for &(r, g, b, h, s, l) in TESTS {
            let hsl = rgb_to_hsl(r, g, b);
            assert_component_eq!(hsl.hue, h);
            assert_component_eq!(hsl.saturation, s);
            assert_component_eq!(hsl.lightness, l);
        }
    }

    #[test]
    fn brand_blue_to_hsl() {
        let hsl = rgb_to_hsl(37, 99, 235);
        assert!((hsl.hue - 221.2121).abs() < 1e-3);
        assert!((hsl.saturation - 83.1933).abs() < 1e-3);
        assert!((hsl.lightness - 53.3333).abs() < 1e-3);
    }

    #[test]
    fn achromatic_has_no_hue_or_saturation() {
        let hsl = rgb_to_hsl(119, 119, 119);
        assert_eq!(hsl.hue, 0.0);
        assert_eq!(hsl.saturation, 0.0);
        assert_component_eq!(hsl.lightness, 119.0 / 255.0 * 100.0);
    }

    #[test]
    fn hsl_to_primaries() {
        assert_eq!(hsl_to_rgb(0.0, 100.0, 50.0), Rgb::new(255, 0, 0));
        assert_eq!(hsl_to_rgb(120.0, 100.0, 50.0), Rgb::new(0, 255, 0));
        assert_eq!(hsl_to_rgb(240.0, 100.0, 25.0), Rgb::new(0, 0, 128));
        assert_eq!(hsl_to_rgb(221.0, 83.0, 53.0), Rgb::new(36, 99, 235));
        assert_eq!(hsl_to_rgb(0.0, 0.0, 50.0), Rgb::new(128, 128, 128));
    }

    #[test]
    fn hsl_out_of_range_is_normalized() {
        assert_eq!(hsl_to_rgb(360.0, 100.0, 50.0), Rgb::new(255, 0, 0));
        assert_eq!(hsl_to_rgb(720.0, 150.0, 50.0), Rgb::new(255, 0, 0));
        assert_eq!(hsl_to_rgb(-120.0, 100.0, 50.0), Rgb::new(0, 0, 255));
        assert_eq!(hsl_to_rgb(0.0, 100.0, 120.0), Rgb::WHITE);
        assert_eq!(hsl_to_rgb(0.0, -10.0, 50.0), Rgb::new(128, 128, 128));
    }

    #[test]
    fn hsl_round_trip_within_one() {
        for r in (0..=255).step_by(5) {
            for g in (0..=255).step_by(5) {
                for b in (0..=255).step_by(5) {
                    let hsl = rgb_to_hsl(r, g, b);
                    let back = hsl_to_rgb(hsl.hue, hsl.saturation, hsl.lightness);
                    assert_channels_near!(back, Rgb::new(r, g, b), 1);
                }
            }
        }
    }

    #[test]
    fn hue_is_always_in_range() {
        for r in (0..=255).step_by(17) {
            for g in (0..=255).step_by(17) {
                for b in (0..=255).step_by(17) {
                    let hsl = rgb_to_hsl(r, g, b);
                    assert!((0.0..360.0).contains(&hsl.hue), "{hsl:?}");
                }
            }
        }
    }
}
