//! Model a color with the HSL notation in the sRGB color space.

use std::fmt;

use crate::Component;

brandtone_macros::gen_model! {
    /// A color specified with the HSL notation. The hue is in degrees, the
    /// saturation and lightness are percentages.
    pub struct Hsl {
        /// The hue component of the color, in [0, 360).
        hue: Component,
        /// The saturation component of the color, in [0, 100].
        saturation: Component,
        /// The lightness component of the color, in [0, 100].
        lightness: Component,
    }
}

impl Hsl {
    /// Return this color with its lightness replaced, keeping hue and
    /// saturation.
    pub fn with_lightness(&self, lightness: Component) -> Self {
        Self::new(self.hue, self.saturation, lightness)
    }
}

/// Formats as `hsl(H, S%, L%)` with every component rounded to an integer.
impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({}, {}%, {}%)",
            self.hue.round() as i64,
            self.saturation.round() as i64,
            self.lightness.round() as i64,
        )
    }
}
