use thiserror::Error;

/// Top-level error type for the sfgeom crate.
#[derive(Debug, Error)]
pub enum SfError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Envelope(#[from] EnvelopeError),
}

/// Errors raised while constructing geometry values.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("invalid coordinate value {value:?}")]
    InvalidCoordinate { value: String },

    #[error("{collection} cannot hold a {child} geometry")]
    HeterogeneousCollection {
        collection: &'static str,
        child: &'static str,
    },

    #[error("triangle ring must have 3 distinct points plus closure, got {0} points")]
    InvalidTriangle(usize),
}

/// Errors raised while constructing envelopes.
#[derive(Debug, Error)]
pub enum EnvelopeError {
    #[error("{axis} bounds are inverted: min {min} > max {max}")]
    InvertedBounds {
        axis: &'static str,
        min: f64,
        max: f64,
    },

    #[error("{axis} bounds are not finite: [{min}, {max}]")]
    NonFinite {
        axis: &'static str,
        min: f64,
        max: f64,
    },
}

/// Convenience type alias for results using [`SfError`].
pub type Result<T> = std::result::Result<T, SfError>;
