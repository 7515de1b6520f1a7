// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the energy of an image
//!
//! The energy of a pixel is the sum of its color distance to each of
//! its (up to) eight neighbors.  Pixels on the border simply have
//! fewer neighbors; nothing wraps around and nothing is padded.
//!
//! The full build here runs once when a carving session starts (and
//! again after an insertion batch); between seams the field is patched
//! by the incremental updater, which calls `pixel_energy` directly.

use crate::pixelgrid::Color;
use crate::pixelpairs::energy_of_pair;
use crate::twodmap::TwoDimensionalMap;
use itertools::iproduct;

/// The per-pixel energy field.
pub type EnergyMap = TwoDimensionalMap<u32>;

/// The working pixel store.
pub type PixelMap = TwoDimensionalMap<Color>;

/// The energy of the single pixel at (`row`, `col`).
pub fn pixel_energy(pixels: &PixelMap, row: usize, col: usize) -> u32 {
    let here = pixels[(row, col)];
    iproduct!(-1isize..=1, -1isize..=1)
        .filter(|&offset| offset != (0, 0))
        .filter_map(|(drow, dcol)| pixels.neighbor(row, col, drow, dcol))
        .map(|there| energy_of_pair(here, there))
        .sum()
}

/// Compute the energy of every pixel.  The field has the same size
/// and spare capacity as the pixel map, so it can be carved alongside
/// it.
#[cfg(not(feature = "threaded"))]
pub fn calculate_energy(pixels: &PixelMap) -> EnergyMap {
    let mut emap = EnergyMap::like(pixels);
    for (row, col) in iproduct!(0..pixels.height(), 0..pixels.width()) {
        emap[(row, col)] = pixel_energy(pixels, row, col);
    }
    emap
}

/// Compute the energy of every pixel, one band of rows per core.
/// Every pixel depends only on the (read-only) pixel map, so the bands
/// need no coordination beyond the scope join.
#[cfg(feature = "threaded")]
pub fn calculate_energy(pixels: &PixelMap) -> EnergyMap {
    let mut emap = EnergyMap::like(pixels);
    let (height, width) = (pixels.height(), pixels.width());
    if height == 0 || width == 0 {
        return emap;
    }

    let threads = num_cpus::get().max(1);
    let rows_per_band = (height + threads - 1) / threads;
    crossbeam::scope(|scope| {
        for (first_row, stride, band) in emap.bands_mut(rows_per_band) {
            scope.spawn(move |_| {
                for (i, line) in band.chunks_mut(stride).enumerate() {
                    for (col, cell) in line[..width].iter_mut().enumerate() {
                        *cell = pixel_energy(pixels, first_row + i, col);
                    }
                }
            });
        }
    })
    .unwrap_or_else(|panic| std::panic::resume_unwind(panic));
    emap
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corners() -> PixelMap {
        let mut pixels = PixelMap::new(2, 2);
        pixels[(0, 0)] = Color::new(0, 0, 0);
        pixels[(0, 1)] = Color::new(10, 0, 0);
        pixels[(1, 0)] = Color::new(0, 20, 0);
        pixels[(1, 1)] = Color::new(0, 0, 30);
        pixels
    }

    #[test]
    fn energy_generator_works() {
        let energy = calculate_energy(&corners());
        assert_eq!(energy.row(0), &[60, 80]);
        assert_eq!(energy.row(1), &[100, 120]);
    }

    #[test]
    fn uniform_images_have_no_energy() {
        let mut pixels = PixelMap::new(4, 5);
        for (row, col) in iproduct!(0..4, 0..5) {
            pixels[(row, col)] = Color::new(128, 128, 128);
        }
        let energy = calculate_energy(&pixels);
        assert!(energy.rows().all(|row| row.iter().all(|&e| e == 0)));
    }

    #[test]
    fn interior_pixels_see_eight_neighbors() {
        let mut pixels = PixelMap::new(3, 3);
        pixels[(1, 1)] = Color::new(1, 1, 1);
        let energy = calculate_energy(&pixels);
        assert_eq!(energy[(1, 1)], 8 * 3);
        // Every other pixel touches the center exactly once.
        assert_eq!(energy[(0, 0)], 3);
        assert_eq!(energy[(2, 1)], 3);
    }

    #[test]
    fn single_pixels_have_no_neighbors() {
        let pixels = PixelMap::new(1, 1);
        assert_eq!(pixel_energy(&pixels, 0, 0), 0);
    }
}
