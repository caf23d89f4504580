//! Scalar types shared by the color models and conversions.

/// A 64-bit floating point value that all fractional color math is done in.
pub type Component = f64;

/// Represent the three components that describe any color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Components(pub Component, pub Component, pub Component);

impl Components {
    /// Return new components with each component mapped with the given
    /// function.
    pub fn map(&self, f: impl Fn(Component) -> Component) -> Self {
        Self(f(self.0), f(self.1), f(self.2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_applies_to_every_component() {
        let c = Components(0.1, 0.2, 0.3).map(|v| v * 10.0);
        crate::assert_component_eq!(c.0, 1.0);
        crate::assert_component_eq!(c.1, 2.0);
        crate::assert_component_eq!(c.2, 3.0);
    }
}
