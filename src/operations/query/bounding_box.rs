use crate::geometry::{Envelope, Geometry};

/// Computes the bounding envelope of a geometry.
///
/// Every coordinate is visited; z and m ranges are filled only from
/// coordinates that carry them.
#[derive(Debug, Default, Clone, Copy)]
pub struct BuildEnvelope;

impl BuildEnvelope {
    /// Creates a new `BuildEnvelope` query.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Executes the query. Returns `None` for a geometry without coordinates.
    #[must_use]
    pub fn execute(&self, geometry: &Geometry) -> Option<Envelope> {
        let mut envelope = None;
        Self::expand(&mut envelope, geometry);
        envelope
    }

    /// Grows `envelope` to cover `geometry`, starting it if still empty.
    pub fn expand(envelope: &mut Option<Envelope>, geometry: &Geometry) {
        geometry.for_each_point(&mut |p| match envelope {
            Some(env) => env.expand_to_include(p),
            None => *envelope = Some(Envelope::from_point(p)),
        });
    }
}
