use crate::{GridBounds, GridPoint};

/// Errors returned by grid indexing and sampling.
#[derive(thiserror::Error, Debug)]
pub enum GridError {
    #[error("grid point {point} is outside the {bounds} grid")]
    OutOfBounds { point: GridPoint, bounds: GridBounds },
    #[error("coordinate is not finite or does not fit the grid index range")]
    NonFiniteCoordinate,
    #[error("buffer holds {actual} values, grid needs {expected}")]
    ShapeMismatch { expected: usize, actual: usize },
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
