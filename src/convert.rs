//! Conversions between ndarray frames and `image` crate buffers.
//!
//! ndarray uses matrix indexing `[row, col]` with `(height, width)` shapes;
//! the image crate uses graphics indexing `(x, y)` with `(width, height)`
//! dimensions. Every conversion here maps array index `[y, x]` to pixel
//! `(x, y)` so orientation is preserved.

use image::{GrayImage, ImageBuffer, Luma};
use ndarray::Array2;
use num_traits::ToPrimitive;

/// Convert a numeric frame to an 8-bit grayscale image by min-max scaling.
///
/// The frame's value range is mapped linearly onto 0..=255, the same
/// normalization a grayscale display colormap applies. Non-finite values are
/// ignored when scanning the range and render as black. A constant frame has
/// no range and maps entirely to black.
pub fn to_gray_image<T>(frame: &Array2<T>) -> GrayImage
where
    T: ToPrimitive + Copy,
{
    let (height, width) = frame.dim();

    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for value in frame.iter() {
        if let Some(v) = value.to_f64() {
            if v.is_finite() {
                lo = lo.min(v);
                hi = hi.max(v);
            }
        }
    }
    let scale = if hi > lo { 255.0 / (hi - lo) } else { 0.0 };

    ImageBuffer::from_fn(width as u32, height as u32, |x, y| {
        let v = frame[[y as usize, x as usize]].to_f64().unwrap_or(lo);
        let scaled = ((v - lo) * scale).round().clamp(0.0, 255.0);
        Luma([if scaled.is_finite() { scaled as u8 } else { 0 }])
    })
}

/// Convert an `Array2<u8>` to a GrayImage without scaling.
///
/// Pixel values are transferred exactly; only the coordinate convention
/// changes.
pub fn array2_to_gray_image(arr: &Array2<u8>) -> GrayImage {
    let (height, width) = arr.dim();
    ImageBuffer::from_fn(width as u32, height as u32, |x, y| {
        Luma([arr[[y as usize, x as usize]]])
    })
}

/// Convert a GrayImage back to an `Array2<u8>`.
///
/// Reverses [`array2_to_gray_image`], recovering identical pixel data in
/// `(height, width)` array form.
pub fn gray_image_to_array2(img: &GrayImage) -> Array2<u8> {
    let (width, height) = img.dimensions();
    Array2::from_shape_fn((height as usize, width as usize), |(y, x)| {
        img.get_pixel(x as u32, y as u32).0[0]
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn normalization_maps_range_onto_full_scale() {
        let frame = Array2::from_shape_vec((2, 2), vec![0.0f64, 0.25, 0.5, 1.0]).unwrap();
        let img = to_gray_image(&frame);

        let expected = [0.0, 63.75, 127.5, 255.0];
        for (pixel, want) in img.pixels().zip(expected) {
            assert_abs_diff_eq!(pixel.0[0] as f64, want, epsilon = 0.5);
        }
    }

    #[test]
    fn normalization_handles_negative_values() {
        let frame = Array2::from_shape_vec((1, 3), vec![-1.0f32, 0.0, 1.0]).unwrap();
        let img = to_gray_image(&frame);
        assert_eq!(img.get_pixel(0, 0).0[0], 0);
        assert_eq!(img.get_pixel(1, 0).0[0], 128);
        assert_eq!(img.get_pixel(2, 0).0[0], 255);
    }

    #[test]
    fn constant_frame_maps_to_black() {
        let frame = Array2::from_elem((3, 3), 42u16);
        let img = to_gray_image(&frame);
        assert!(img.pixels().all(|p| p.0[0] == 0));
    }

    #[test]
    fn nan_values_render_as_black() {
        let frame = Array2::from_shape_vec((1, 3), vec![0.0f64, f64::NAN, 10.0]).unwrap();
        let img = to_gray_image(&frame);
        assert_eq!(img.get_pixel(0, 0).0[0], 0);
        assert_eq!(img.get_pixel(1, 0).0[0], 0);
        assert_eq!(img.get_pixel(2, 0).0[0], 255);
    }

    #[test]
    fn u8_conversion_roundtrip() {
        let arr = Array2::from_shape_fn((3, 4), |(y, x)| ((y * 4 + x) * 20) as u8);
        let img = array2_to_gray_image(&arr);
        let back = gray_image_to_array2(&img);
        assert_eq!(arr, back);
    }

    #[test]
    fn conversion_swaps_dimension_order() {
        let arr = Array2::from_elem((50, 75), 128u8);
        let img = array2_to_gray_image(&arr);
        assert_eq!(img.width(), 75);
        assert_eq!(img.height(), 50);
    }
}
