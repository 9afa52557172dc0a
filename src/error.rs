use thiserror::Error;

/// Top-level error type for the Euclis geometry kernel.
#[derive(Debug, Error)]
pub enum EuclisError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Path(#[from] PathError),
}

/// Contract violations raised by shape constructors and setters.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("parameter {parameter} = {value} must be positive or zero")]
    NegativeValue { parameter: &'static str, value: f64 },

    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("zero-length vector")]
    ZeroVector,

    #[error("no shape with this id in the multi-shape")]
    ShapeNotFound,
}

/// Errors related to path construction and path iteration.
#[derive(Debug, Error)]
pub enum PathError {
    #[error("path iterator has no more elements")]
    IterationExhausted,

    #[error("path has no current point; a move-to is required first")]
    MissingMoveTo,

    #[error("index {index} is out of bounds for a path of {len} points")]
    IndexOutOfBounds { index: usize, len: usize },
}

/// Convenience type alias for results using [`EuclisError`].
pub type Result<T> = std::result::Result<T, EuclisError>;

/// Fails with [`GeometryError::NegativeValue`] when `value` is below zero.
///
/// # Errors
///
/// Returns an error if `value < 0`.
pub(crate) fn ensure_non_negative(parameter: &'static str, value: f64) -> Result<f64> {
    if value < 0.0 {
        tracing::debug!(parameter, value, "rejected negative shape parameter");
        return Err(GeometryError::NegativeValue { parameter, value }.into());
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_value_is_rejected() {
        let err = ensure_non_negative("radius", -1.0);
        assert!(matches!(
            err,
            Err(EuclisError::Geometry(GeometryError::NegativeValue {
                parameter: "radius",
                ..
            }))
        ));
    }

    #[test]
    fn zero_is_accepted() {
        assert!(ensure_non_negative("width", 0.0).is_ok());
    }

    #[test]
    fn messages_name_the_parameter() {
        let err: EuclisError = GeometryError::NegativeValue {
            parameter: "height",
            value: -2.0,
        }
        .into();
        assert_eq!(err.to_string(), "parameter height = -2 must be positive or zero");
    }
}
