use thiserror::Error;

/// Top-level error type for the offcurve kernel.
#[derive(Debug, Error)]
pub enum OffcurveError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),

    #[error(transparent)]
    Tessellation(#[from] TessellationError),
}

/// Errors related to geometric computations.
///
/// Degenerate input (parallel lines, circles that miss each other) is not
/// an error: the join and intersection routines fall back silently.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("{0} is not supported by this curve")]
    Unsupported(&'static str),
}

/// Errors related to curve operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Errors related to curve sampling.
#[derive(Debug, Error)]
pub enum TessellationError {
    #[error("invalid sampling parameters: {0}")]
    InvalidParameters(String),
}

/// Convenience type alias for results using [`OffcurveError`].
pub type Result<T> = std::result::Result<T, OffcurveError>;
