//! Models are structs that represent a color in a specific notation. They
//! are the typed counterpart of the hex and CSS strings accepted by the free
//! functions of this crate.

mod hsl;
mod rgb;

pub use hsl::*;
pub use rgb::*;
