mod bounding_box;
mod centroid;
mod is_simple;

pub use bounding_box::BuildEnvelope;
pub use centroid::{Centroid, CurveCentroid, DegreesCentroid, PointCentroid, SurfaceCentroid};
pub use is_simple::IsSimple;
