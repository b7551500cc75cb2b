//! Montage visualization for batches of small grayscale images.
//!
//! Arranges a batch of flat image buffers into a rectangular grid and either
//! writes the result to a raster file or displays it in a window. The typical
//! use is eyeballing small-image datasets (28x28 handwritten digits and the
//! like) while debugging a model or a data pipeline.
//!
//! Composition is row-major: batch element `cols * j + i` lands at grid
//! position (row `j`, column `i`). Images beyond the grid's cell count are
//! silently ignored, so a caller can hand over a whole over-provisioned batch.
//!
//! ```no_run
//! use gridplot::{plot_grid, GridShape, TileShape};
//!
//! # fn main() -> gridplot::Result<()> {
//! let images: Vec<Vec<f32>> = vec![vec![0.0; 28 * 28]; 64];
//! plot_grid(
//!     &images,
//!     GridShape::default(),
//!     TileShape::default(),
//!     Some("montage.png".as_ref()),
//! )?;
//! # Ok(())
//! # }
//! ```
//!
//! Interactive display is behind the non-default `sdl2` cargo feature since
//! it links against the SDL2 system library.

pub mod compose;
pub mod convert;
pub mod error;
pub mod render;
#[cfg(feature = "sdl2")]
pub mod screen;
pub mod shape;

pub use compose::compose;
pub use error::{GridPlotError, Result};
pub use render::{Colormap, FileRenderer, RenderContext, RenderOptions, Renderer};
pub use shape::{GridShape, TileShape};

use num_traits::ToPrimitive;
use std::path::Path;

/// Compose a batch into a montage and render it in one call.
///
/// With `file` present the montage is written to that path; otherwise it is
/// shown in a blocking window (requires the `sdl2` feature). Rendering uses
/// the default [`RenderOptions`]; construct a [`RenderContext`] directly for
/// anything fancier.
pub fn plot_grid<T, B>(
    images: &[B],
    grid: GridShape,
    tile: TileShape,
    file: Option<&Path>,
) -> Result<()>
where
    T: Copy + ToPrimitive,
    B: AsRef<[T]>,
{
    let montage = compose(images, grid, tile)?;
    RenderContext::default().render(&montage, file)
}
