//! Model a color in the sRGB color space with 8-bit channels.

use crate::{math::to_channel, Component, Components};

brandtone_macros::gen_model! {
    /// A color specified in the sRGB color space with 8-bit channels.
    pub struct Rgb {
        /// The red channel of the color.
        red: u8,
        /// The green channel of the color.
        green: u8,
        /// The blue channel of the color.
        blue: u8,
    }
}

impl Rgb {
    /// Black, `#000000`.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// White, `#ffffff`.
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Return the channels scaled to the range [0, 1].
    pub fn to_unit(&self) -> Components {
        let max = Component::from(u8::MAX);
        Components(
            Component::from(self.red) / max,
            Component::from(self.green) / max,
            Component::from(self.blue) / max,
        )
    }

    /// Create a color from channels in the range [0, 1]. Channels are rounded
    /// to the nearest integer and clamped.
    pub fn from_unit(from: &Components) -> Self {
        Self::new(to_channel(from.0), to_channel(from.1), to_channel(from.2))
    }
}
