mod bound;
mod web_mercator;
mod wrap;

pub use bound::Bound;
pub use web_mercator::{DegreesToMeters, MetersToDegrees};
pub use wrap::{Minimize, Normalize};
