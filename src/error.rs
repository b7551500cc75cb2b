//! Error types for montage composition and rendering.

use thiserror::Error;

/// Failures surfaced by composition and rendering.
///
/// Nothing is caught or logged internally; every failure propagates to the
/// caller and composition is all-or-nothing (no partial grid is ever
/// returned).
#[derive(Debug, Error)]
pub enum GridPlotError {
    /// An image buffer's length does not match the tile pixel count.
    #[error("image {index} has {actual} elements, expected {expected}")]
    ShapeMismatch {
        /// Flat batch index of the offending image.
        index: usize,
        /// Actual buffer length.
        actual: usize,
        /// Required length, `tile.height * tile.width`.
        expected: usize,
    },

    /// The batch holds fewer images than the grid has cells.
    #[error("batch holds {actual} images but the grid needs {required}")]
    BatchTooSmall { required: usize, actual: usize },

    /// The grid has a zero row or column count.
    #[error("grid must have at least one row and one column")]
    EmptyGrid,

    /// A tile dimension is zero.
    #[error("tiles must be at least one pixel in each dimension")]
    EmptyTile,

    /// Block concatenation failed inside ndarray.
    #[error("array concatenation failed: {0}")]
    Concat(#[from] ndarray::ShapeError),

    /// Writing the montage raster failed.
    #[error("failed to write montage: {0}")]
    Write(#[from] image::ImageError),

    /// Interactive display failed or is unavailable.
    #[error("display error: {0}")]
    Display(String),
}

/// Standard Result type for all gridplot operations.
pub type Result<T> = std::result::Result<T, GridPlotError>;
