use thiserror::Error;

/// Top-level error type for the geomath kernel.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeomathError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Matrix(#[from] MatrixError),
}

/// Errors raised while constructing or mutating geometric primitives.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeometryError {
    #[error(
        "the start point ({}, {}, {}) and the end point ({}, {}, {}) are the same and cannot form a line",
        start[0], start[1], start[2], end[0], end[1], end[2]
    )]
    DegenerateLine { start: [f64; 3], end: [f64; 3] },

    #[error("the points cannot form a {0}")]
    NoGeometry(&'static str),
}

/// Errors related to matrix construction and inversion.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MatrixError {
    #[error("the matrix determinant is zero")]
    Singular,

    #[error("expected {expected} matrix elements, found {available}")]
    ElementCount { expected: usize, available: usize },
}

impl GeometryError {
    /// Builds a [`GeometryError::DegenerateLine`] for two coincident 2D points.
    #[must_use]
    pub(crate) fn degenerate_line_2d(x: f64, y: f64) -> Self {
        tracing::debug!(x, y, "rejected degenerate 2D line");
        Self::DegenerateLine {
            start: [x, y, 0.0],
            end: [x, y, 0.0],
        }
    }

    /// Builds a [`GeometryError::DegenerateLine`] for two coincident 3D points.
    #[must_use]
    pub(crate) fn degenerate_line_3d(x: f64, y: f64, z: f64) -> Self {
        tracing::debug!(x, y, z, "rejected degenerate 3D line");
        Self::DegenerateLine {
            start: [x, y, z],
            end: [x, y, z],
        }
    }
}

/// Convenience type alias for results using [`GeomathError`].
pub type Result<T> = std::result::Result<T, GeomathError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degenerate_line_message_names_the_point() {
        let err: GeomathError = GeometryError::degenerate_line_2d(1.0, 2.0).into();
        let msg = err.to_string();
        assert!(msg.contains("(1, 2, 0)"), "msg={msg}");
        assert!(msg.contains("cannot form a line"));
    }

    #[test]
    fn matrix_errors_are_transparent() {
        let err: GeomathError = MatrixError::Singular.into();
        assert_eq!(err.to_string(), "the matrix determinant is zero");
        assert!(matches!(err, GeomathError::Matrix(MatrixError::Singular)));
    }
}
