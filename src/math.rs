//! Math utility functions.

use euclid::default::Vector3D;
use num_traits::{clamp, Float};

use crate::{Component, Components};

type Vector = Vector3D<Component>;

/// Multiply each of the 3 components with its weight and sum the results.
pub fn weighted_sum(components: &Components, weights: [Component; 3]) -> Component {
    let Components(x, y, z) = *components;
    Vector::new(x, y, z).dot(Vector::new(weights[0], weights[1], weights[2]))
}

/// Scale a value in the unit range to an 8-bit channel. The result is rounded
/// to the nearest integer and clamped to [0, 255]. NaN maps to 0.
pub fn to_channel<T: Float>(unit: T) -> u8 {
    let Some(max) = T::from(u8::MAX) else {
        return 0;
    };
    clamp((unit * max).round(), T::zero(), max)
        .to_u8()
        .unwrap_or(0)
}

/// Bring a hue in degrees into the range [0, 360).
pub fn normalize_hue(hue: Component) -> Component {
    hue.rem_euclid(360.0)
}

/// Clamp a percentage into [0, 100].
pub fn clamp_percent(value: Component) -> Component {
    clamp(value, 0.0, 100.0)
}
