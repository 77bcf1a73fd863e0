use thiserror::Error;

/// Top-level error type for the orifold kernel.
#[derive(Debug, Error)]
pub enum OrifoldError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors raised when a geometric primitive is built from invalid values.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("{label} must be a finite number, got {value}")]
    NonFinite { label: &'static str, value: f64 },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Errors related to constructive operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("operation failed: {0}")]
    Failed(String),
}

/// Convenience type alias for results using [`OrifoldError`].
pub type Result<T> = std::result::Result<T, OrifoldError>;

/// Checks that `value` is finite, naming it `label` in the error.
///
/// # Errors
///
/// Returns [`GeometryError::NonFinite`] for NaN or infinite values.
pub fn ensure_finite(value: f64, label: &'static str) -> std::result::Result<f64, GeometryError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(GeometryError::NonFinite { label, value })
    }
}
