//! Grid and tile geometry types.
//!
//! Both types use plain `usize` dimensions and follow the row-major ndarray
//! convention: array shapes are `(height, width)` with rows first.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of tile rows and columns in a composed montage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridShape {
    /// Tile rows in the output grid.
    pub rows: usize,
    /// Tile columns in the output grid.
    pub cols: usize,
}

impl GridShape {
    /// Create a new GridShape.
    pub fn from_rows_cols(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Total number of grid cells, `rows * cols`.
    ///
    /// This is the number of batch images a composition consumes; any images
    /// beyond it are ignored.
    pub fn tile_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Convert to tuple (rows, cols).
    pub fn to_tuple(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Create from tuple (rows, cols).
    pub fn from_tuple(dimensions: (usize, usize)) -> Self {
        Self {
            rows: dimensions.0,
            cols: dimensions.1,
        }
    }
}

impl Default for GridShape {
    /// An 8x8 grid, the conventional montage size for batch previews.
    fn default() -> Self {
        Self { rows: 8, cols: 8 }
    }
}

impl From<(usize, usize)> for GridShape {
    fn from(dimensions: (usize, usize)) -> Self {
        Self::from_tuple(dimensions)
    }
}

impl fmt::Display for GridShape {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// Pixel height and width of one tile before composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileShape {
    /// Tile height in pixels.
    pub height: usize,
    /// Tile width in pixels.
    pub width: usize,
}

impl TileShape {
    /// Create a new TileShape.
    pub fn from_height_width(height: usize, width: usize) -> Self {
        Self { height, width }
    }

    /// Total number of pixels per tile, the required flat buffer length.
    pub fn pixel_count(&self) -> usize {
        self.height * self.width
    }

    /// Convert to tuple (height, width).
    pub fn to_tuple(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    /// Create from tuple (height, width).
    pub fn from_tuple(dimensions: (usize, usize)) -> Self {
        Self {
            height: dimensions.0,
            width: dimensions.1,
        }
    }
}

impl Default for TileShape {
    /// 28x28 pixels, the classic handwritten-digit image size.
    fn default() -> Self {
        Self {
            height: 28,
            width: 28,
        }
    }
}

impl From<(usize, usize)> for TileShape {
    fn from(dimensions: (usize, usize)) -> Self {
        Self::from_tuple(dimensions)
    }
}

impl fmt::Display for TileShape {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}x{}", self.height, self.width)
    }
}
