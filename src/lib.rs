//! Simple-features geometry algorithms.
//!
//! Envelopes, centroids, Douglas–Peucker simplification, the Shamos–Hoey
//! simple polygon test, envelope cropping and WGS84 / Web Mercator
//! bounding over a single [`Geometry`] value type.

pub mod error;
mod facade;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod projection;
pub mod sweep;

pub use error::{EnvelopeError, GeometryError, Result, SfError};
pub use geometry::{Envelope, Geometry, GeometryType, Point};
pub use math::Tolerances;
pub use projection::Projection;
