// File: crates/plotgrid-core/src/error.rs
// Summary: Validation errors for ranges, actor shapes and grid dimensionality.

use thiserror::Error;

/// Result alias using the crate-wide [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Invalid numeric domain for the requested range kind.
#[derive(Error, Clone, Debug, PartialEq)]
pub enum DomainError {
    #[error("sample count must be at least 1")]
    ZeroSamples,

    #[error("{field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: f64 },

    #[error("{kind} range needs start < stop, got start={start} stop={stop}")]
    InvertedBounds { kind: &'static str, start: f64, stop: f64 },

    #[error("log range needs start > 0 and stop > 0, got start={start} stop={stop}")]
    NonPositiveLogBound { start: f64, stop: f64 },

    #[error("log base must be positive and not 1, got {base}")]
    InvalidLogBase { base: f64 },

    #[error("hyperbolic range [{start}, {stop}] contains 0, reciprocal undefined")]
    ZeroCrossing { start: f64, stop: f64 },

    #[error("polar radius bounds need 0 <= start <= stop, got start={start} stop={stop}")]
    NegativeRadius { start: f64, stop: f64 },
}

/// Coordinate arrays of one actor disagree in length or shape.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ShapeError {
    #[error("`{field}` has {actual} values but `{expected_field}` has {expected}")]
    LengthMismatch {
        expected_field: &'static str,
        expected: usize,
        field: &'static str,
        actual: usize,
    },

    #[error("`{field}` is {}x{} but `{expected_field}` is {}x{}", actual.0, actual.1, expected.0, expected.1)]
    MeshShape {
        expected_field: &'static str,
        expected: (usize, usize),
        field: &'static str,
        actual: (usize, usize),
    },

    #[error("`{field}` row {row} has {actual} values, expected {expected}")]
    RaggedMesh {
        field: &'static str,
        row: usize,
        expected: usize,
        actual: usize,
    },
}

/// Mismatch between a grid's axis count and an actor's dimensionality.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum DimensionError {
    #[error("a grid needs 2 or 3 axes, got {count}")]
    AxisCount { count: usize },

    #[error("{actor_dims}D actor cannot be added to a grid with {grid_axes} axes")]
    ActorNeedsDepth { actor_dims: usize, grid_axes: usize },
}

/// Crate-wide error.
#[derive(Error, Clone, Debug, PartialEq)]
pub enum Error {
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("shape error: {0}")]
    Shape(#[from] ShapeError),

    #[error("dimension error: {0}")]
    Dimension(#[from] DimensionError),

    #[error("unknown color `{0}`")]
    UnknownColor(String),

    #[error("unknown legend location `{0}`")]
    UnknownLegendLocation(String),
}
