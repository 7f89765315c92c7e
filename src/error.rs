use thiserror::Error;

/// Top-level error type for the planar geometry crate.
#[derive(Debug, Error)]
pub enum PlanarError {
    #[error(transparent)]
    Polygon(#[from] PolygonError),
}

/// Errors raised by polygon construction and vertex access.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PolygonError {
    #[error("invalid polygon: {0}")]
    InvalidPolygon(String),

    #[error("vertex index {index} is out of range for a polygon with {len} vertices")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Convenience type alias for results using [`PlanarError`].
pub type Result<T> = std::result::Result<T, PlanarError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polygon_error_converts_into_planar_error() {
        let err: PlanarError = PolygonError::IndexOutOfRange { index: 7, len: 3 }.into();
        assert_eq!(
            err.to_string(),
            "vertex index 7 is out of range for a polygon with 3 vertices"
        );
    }
}
