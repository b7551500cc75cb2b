//! Blocking SDL window display for composed montages.
//!
//! Single-threaded and cooperative: the call suspends the caller until the
//! window is dismissed with Quit, Escape or Q. All SDL handles are scoped to
//! the call and released on every exit path.

use std::time::Duration;

use image::GrayImage;
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::{Color, PixelFormatEnum};

use crate::error::{GridPlotError, Result};

fn display_err(context: &str, detail: impl std::fmt::Display) -> GridPlotError {
    GridPlotError::Display(format!("{context}: {detail}"))
}

/// Show a prepared grayscale frame in a window sized to the frame.
pub fn show_blocking(frame: &GrayImage, title: &str) -> Result<()> {
    let (width, height) = frame.dimensions();

    let sdl_context = sdl2::init().map_err(|e| display_err("SDL init failed", e))?;
    let video = sdl_context
        .video()
        .map_err(|e| display_err("video subsystem init failed", e))?;

    let window = video
        .window(title, width, height)
        .position_centered()
        .build()
        .map_err(|e| display_err("failed to create window", e))?;

    let mut canvas = window
        .into_canvas()
        .build()
        .map_err(|e| display_err("failed to create canvas", e))?;
    let texture_creator = canvas.texture_creator();

    let mut texture = texture_creator
        .create_texture_streaming(PixelFormatEnum::RGB24, width, height)
        .map_err(|e| display_err("failed to create texture", e))?;

    // Expand single-channel data into the RGB24 layout SDL expects.
    let mut rgb = Vec::with_capacity((width * height * 3) as usize);
    for pixel in frame.pixels() {
        rgb.extend_from_slice(&[pixel.0[0]; 3]);
    }
    texture
        .update(None, &rgb, (width * 3) as usize)
        .map_err(|e| display_err("failed to update texture", e))?;

    let mut event_pump = sdl_context
        .event_pump()
        .map_err(|e| display_err("failed to get event pump", e))?;

    'running: loop {
        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape | Keycode::Q),
                    ..
                } => break 'running,
                _ => {}
            }
        }

        canvas.set_draw_color(Color::RGB(0, 0, 0));
        canvas.clear();
        canvas
            .copy(&texture, None, None)
            .map_err(|e| display_err("failed to copy texture", e))?;
        canvas.present();

        std::thread::sleep(Duration::from_millis(16));
    }

    Ok(())
}
