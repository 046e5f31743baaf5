use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CoordinateSystemErrors {
    #[error("{parameter} cannot be negative, got {value}")]
    InvalidArgument { parameter: &'static str, value: f64 },
}

/// Returns `value` if it is a valid length (non-negative), otherwise an
/// `InvalidArgument` naming `parameter`. NaN is rejected.
pub(crate) fn non_negative(
    parameter: &'static str,
    value: f64,
) -> Result<f64, CoordinateSystemErrors> {
    if value >= 0.0 {
        Ok(value)
    } else {
        tracing::warn!("rejected {parameter} = {value}");
        Err(CoordinateSystemErrors::InvalidArgument { parameter, value })
    }
}
