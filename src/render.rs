//! Montage rendering: normalization, colormap, file and window output.
//!
//! Rendering goes through an explicit [`RenderContext`] rather than any
//! process-global plotting state. The context owns its configuration, and
//! every transient resource (image buffers, window handles) lives only for
//! the duration of a single call, so repeated renders in a long-running
//! process leak nothing.

use std::path::{Path, PathBuf};

use image::imageops::{self, FilterType};
use image::GrayImage;
use ndarray::Array2;
use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::convert::to_gray_image;
use crate::error::Result;
#[cfg(not(feature = "sdl2"))]
use crate::error::GridPlotError;

/// Default recorded output resolution in dots per inch.
pub const DEFAULT_DPI: u32 = 200;

/// Per-pixel mapping applied after min-max normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Colormap {
    /// Low values render dark, high values bright.
    #[default]
    Grayscale,
    /// Low values render bright, high values dark.
    InvertedGrayscale,
}

impl Colormap {
    /// Map one normalized 8-bit value through the colormap.
    pub fn apply(self, value: u8) -> u8 {
        match self {
            Colormap::Grayscale => value,
            Colormap::InvertedGrayscale => 255 - value,
        }
    }
}

/// Visual configuration for montage output.
///
/// These are the knobs a plotting backend would otherwise hardcode. Defaults
/// match the conventional dataset-preview rendering: plain grayscale at
/// native resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Colormap applied to the normalized montage.
    pub colormap: Colormap,
    /// Integer nearest-neighbor magnification. 1 renders one pixel per
    /// array element.
    pub upscale: u32,
    /// Recorded physical resolution for consumers that embed DPI metadata.
    /// Raster files are written at native pixel resolution regardless.
    pub dpi: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            colormap: Colormap::Grayscale,
            upscale: 1,
            dpi: DEFAULT_DPI,
        }
    }
}

/// Output sink for a prepared montage.
///
/// The seam between pipeline and backend: production code presents to a file
/// or a window, tests substitute an in-memory capture so the full render
/// path runs without a display.
pub trait Renderer {
    /// Consume one prepared 8-bit grayscale frame.
    fn present(&mut self, frame: &GrayImage) -> Result<()>;
}

/// Renderer that writes frames to a raster file.
///
/// The format follows the path extension (PNG typical). Fails if the path is
/// not writable.
pub struct FileRenderer {
    path: PathBuf,
}

impl FileRenderer {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Renderer for FileRenderer {
    fn present(&mut self, frame: &GrayImage) -> Result<()> {
        log::info!(
            "writing {}x{} montage to {}",
            frame.width(),
            frame.height(),
            self.path.display()
        );
        frame.save(&self.path)?;
        Ok(())
    }
}

/// Rendering context owning the visual configuration.
///
/// Construct once, render as often as needed; each call acquires and releases
/// its own resources.
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    options: RenderOptions,
}

impl RenderContext {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Normalize a montage to 8-bit grayscale and apply colormap and upscale.
    pub fn prepare<T>(&self, frame: &Array2<T>) -> GrayImage
    where
        T: ToPrimitive + Copy,
    {
        let mut img = to_gray_image(frame);

        if self.options.colormap != Colormap::Grayscale {
            for pixel in img.pixels_mut() {
                pixel.0[0] = self.options.colormap.apply(pixel.0[0]);
            }
        }

        if self.options.upscale > 1 {
            let (width, height) = img.dimensions();
            img = imageops::resize(
                &img,
                width * self.options.upscale,
                height * self.options.upscale,
                FilterType::Nearest,
            );
        }

        img
    }

    /// Prepare a montage and hand it to an arbitrary renderer.
    pub fn render_to<T>(&self, frame: &Array2<T>, renderer: &mut dyn Renderer) -> Result<()>
    where
        T: ToPrimitive + Copy,
    {
        renderer.present(&self.prepare(frame))
    }

    /// Write a montage to a raster file.
    pub fn save<T>(&self, frame: &Array2<T>, path: &Path) -> Result<()>
    where
        T: ToPrimitive + Copy,
    {
        self.render_to(frame, &mut FileRenderer::new(path))
    }

    /// Display a montage in a window, blocking until it is dismissed.
    ///
    /// Requires the `sdl2` cargo feature; without it this fails with a
    /// [`Display`](crate::GridPlotError::Display) error instead of silently
    /// doing nothing.
    pub fn show<T>(&self, frame: &Array2<T>) -> Result<()>
    where
        T: ToPrimitive + Copy,
    {
        #[cfg(feature = "sdl2")]
        {
            crate::screen::show_blocking(&self.prepare(frame), "gridplot")
        }
        #[cfg(not(feature = "sdl2"))]
        {
            let _ = frame;
            Err(GridPlotError::Display(
                "interactive display requires the sdl2 feature".to_string(),
            ))
        }
    }

    /// Render to a file when a destination is given, otherwise to a window.
    pub fn render<T>(&self, frame: &Array2<T>, destination: Option<&Path>) -> Result<()>
    where
        T: ToPrimitive + Copy,
    {
        match destination {
            Some(path) => self.save(frame, path),
            None => self.show(frame),
        }
    }
}
