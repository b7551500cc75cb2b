//! Row-major montage composition.
//!
//! Maps a flat batch of image buffers onto a rectangular grid: batch element
//! `cols * j + i` is reshaped into a `(height, width)` tile and placed at grid
//! position (row `j`, column `i`). Tiles in a row are concatenated
//! horizontally into a strip, strips are stacked vertically.

use ndarray::{concatenate, Array2, ArrayView2, Axis};

use crate::error::{GridPlotError, Result};
use crate::shape::{GridShape, TileShape};

/// Arrange a batch of flat image buffers into a single 2D montage.
///
/// The output has shape `(grid.rows * tile.height, grid.cols * tile.width)`.
/// Only the first `grid.tile_count()` images are consumed; excess images are
/// ignored. This is a pure transform with no side effects.
///
/// # Errors
/// - [`GridPlotError::ShapeMismatch`] if any consumed buffer's length differs
///   from `tile.pixel_count()`, identifying the offending batch index. The
///   whole composition is aborted; no partial grid is returned.
/// - [`GridPlotError::BatchTooSmall`] if the batch holds fewer images than
///   the grid has cells.
/// - [`GridPlotError::EmptyGrid`] / [`GridPlotError::EmptyTile`] for
///   zero-sized grid or tile dimensions.
///
/// # Example
/// ```
/// use gridplot::{compose, GridShape, TileShape};
///
/// let tiles: Vec<Vec<u8>> = vec![vec![0; 4]; 4];
/// let montage = compose(
///     &tiles,
///     GridShape::from_rows_cols(2, 2),
///     TileShape::from_height_width(2, 2),
/// )
/// .unwrap();
/// assert_eq!(montage.dim(), (4, 4));
/// ```
pub fn compose<T, B>(images: &[B], grid: GridShape, tile: TileShape) -> Result<Array2<T>>
where
    T: Clone,
    B: AsRef<[T]>,
{
    if grid.rows == 0 || grid.cols == 0 {
        return Err(GridPlotError::EmptyGrid);
    }
    if tile.height == 0 || tile.width == 0 {
        return Err(GridPlotError::EmptyTile);
    }

    let required = grid.tile_count();
    if images.len() < required {
        return Err(GridPlotError::BatchTooSmall {
            required,
            actual: images.len(),
        });
    }

    log::debug!("composing {grid} montage of {tile} tiles");

    let expected = tile.pixel_count();
    let mut strips = Vec::with_capacity(grid.rows);
    for j in 0..grid.rows {
        let mut blocks = Vec::with_capacity(grid.cols);
        for i in 0..grid.cols {
            // Column count is the stride through the flat batch.
            let index = grid.cols * j + i;
            let buffer = images[index].as_ref();
            if buffer.len() != expected {
                return Err(GridPlotError::ShapeMismatch {
                    index,
                    actual: buffer.len(),
                    expected,
                });
            }
            let block = ArrayView2::from_shape((tile.height, tile.width), buffer).map_err(
                |_| GridPlotError::ShapeMismatch {
                    index,
                    actual: buffer.len(),
                    expected,
                },
            )?;
            blocks.push(block);
        }
        strips.push(concatenate(Axis(1), &blocks)?);
    }

    let views: Vec<_> = strips.iter().map(|strip| strip.view()).collect();
    Ok(concatenate(Axis(0), &views)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undersized_batch_is_rejected() {
        let images: Vec<Vec<u8>> = vec![vec![0; 4]; 3];
        let err = compose(
            &images,
            GridShape::from_rows_cols(2, 2),
            TileShape::from_height_width(2, 2),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            GridPlotError::BatchTooSmall {
                required: 4,
                actual: 3
            }
        ));
    }

    #[test]
    fn mismatched_buffer_names_the_offender() {
        let mut images: Vec<Vec<u8>> = vec![vec![0; 4]; 4];
        images[2] = vec![0; 5];
        let err = compose(
            &images,
            GridShape::from_rows_cols(2, 2),
            TileShape::from_height_width(2, 2),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            GridPlotError::ShapeMismatch {
                index: 2,
                actual: 5,
                expected: 4
            }
        ));
    }

    #[test]
    fn degenerate_shapes_are_rejected() {
        let images: Vec<Vec<u8>> = vec![vec![0; 4]; 4];
        assert!(matches!(
            compose(
                &images,
                GridShape::from_rows_cols(0, 2),
                TileShape::from_height_width(2, 2)
            ),
            Err(GridPlotError::EmptyGrid)
        ));
        assert!(matches!(
            compose(
                &images,
                GridShape::from_rows_cols(2, 2),
                TileShape::from_height_width(2, 0)
            ),
            Err(GridPlotError::EmptyTile)
        ));
    }
}
