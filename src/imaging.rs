// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Moving grids in and out of the `image` crate.

use crate::pixelgrid::{Color, PixelGrid};
use image::{GenericImageView, ImageBuffer, Pixel, Primitive, Rgb, RgbImage};
use num_traits::NumCast;

/// Copy any image into a grid.  Alpha is dropped, gray is spread
/// across all three channels, and deeper samples are scaled down to
/// eight bits.
pub fn grid_from_image<I, P, S>(image: &I) -> PixelGrid
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let (width, height) = image.dimensions();
    let scale: f64 = NumCast::from(S::max_value()).unwrap_or(255.0);
    let to_eight_bits = |sample: S| {
        let sample: f64 = NumCast::from(sample).unwrap_or(0.0);
        (sample * 255.0 / scale).round() as u8
    };

    PixelGrid::from_fn(height as usize, width as usize, |row, col| {
        let rgb = image.get_pixel(col as u32, row as u32).to_rgb();
        let channels = rgb.channels();
        Color::new(
            to_eight_bits(channels[0]),
            to_eight_bits(channels[1]),
            to_eight_bits(channels[2]),
        )
    })
}

pub fn grid_to_image(grid: &PixelGrid) -> RgbImage {
    ImageBuffer::from_fn(grid.width() as u32, grid.height() as u32, |x, y| {
        *Rgb::from_slice(&grid.get(y as usize, x as usize).channels())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma, RgbaImage};

    #[test]
    fn rgb_images_come_and_go_unchanged() {
        let image = RgbImage::from_raw(2, 1, vec![1, 2, 3, 200, 100, 50]).unwrap();
        let grid = grid_from_image(&image);
        assert_eq!(grid.dimensions(), (1, 2));
        assert_eq!(grid.get(0, 0), Color::new(1, 2, 3));
        assert_eq!(grid.get(0, 1), Color::new(200, 100, 50));
        assert_eq!(grid_to_image(&grid).into_raw(), image.into_raw());
    }

    #[test]
    fn gray_is_spread_across_channels() {
        let image = GrayImage::from_raw(1, 2, vec![7, 250]).unwrap();
        let grid = grid_from_image(&image);
        assert_eq!(grid.dimensions(), (2, 1));
        assert_eq!(grid.get(1, 0), Color::new(250, 250, 250));
    }

    #[test]
    fn alpha_is_dropped() {
        let image = RgbaImage::from_raw(1, 1, vec![10, 20, 30, 0]).unwrap();
        assert_eq!(grid_from_image(&image).get(0, 0), Color::new(10, 20, 30));
    }

    #[test]
    fn sixteen_bit_samples_are_scaled() {
        let image: ImageBuffer<Luma<u16>, Vec<u16>> = ImageBuffer::from_raw(2, 1, vec![65535, 0]).unwrap();
        let grid = grid_from_image(&image);
        assert_eq!(grid.get(0, 0), Color::new(255, 255, 255));
        assert_eq!(grid.get(0, 1), Color::new(0, 0, 0));
    }
}
