pub mod clip;
mod crop;
mod filter;
mod simplify;

pub use crop::Crop;
pub use filter::{FiniteFilterType, PointFiniteFilter};
pub use simplify::Simplify;
