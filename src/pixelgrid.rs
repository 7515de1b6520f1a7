// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Colors and the pixel grid handed in and out of the carver.

use crate::error::ResizeError;
use crate::twodmap::TwoDimensionalMap;

/// An RGB triple, eight bits per channel.  No alpha.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Color {
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Color { red, green, blue }
    }

    /// The channel-by-channel mean of two colors, rounded down.
    pub fn average(a: Color, b: Color) -> Color {
        let mean = |x: u8, y: u8| ((u16::from(x) + u16::from(y)) / 2) as u8;
        Color {
            red: mean(a.red, b.red),
            green: mean(a.green, b.green),
            blue: mean(a.blue, b.blue),
        }
    }

    pub fn channels(self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }
}

impl From<[u8; 3]> for Color {
    fn from([red, green, blue]: [u8; 3]) -> Self {
        Color { red, green, blue }
    }
}

/// A rectangular raster of colors, addressed by (row, col).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    pub(crate) map: TwoDimensionalMap<Color>,
}

impl PixelGrid {
    /// A black grid.
    pub fn new(height: usize, width: usize) -> Self {
        Self::filled(height, width, Color::default())
    }

    /// A grid with every pixel set to `color`.
    pub fn filled(height: usize, width: usize, color: Color) -> Self {
        Self::from_fn(height, width, |_, _| color)
    }

    /// Build a grid by asking `f` for the color at every (row, col).
    pub fn from_fn<F>(height: usize, width: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> Color,
    {
        let mut map = TwoDimensionalMap::new(height, width);
        for row in 0..height {
            for col in 0..width {
                map[(row, col)] = f(row, col);
            }
        }
        PixelGrid { map }
    }

    /// Build a grid from row-major colors.
    pub fn from_raw(height: usize, width: usize, colors: Vec<Color>) -> Result<Self, ResizeError> {
        if colors.len() != height * width {
            return Err(ResizeError::BufferSize {
                expected: height * width,
                actual: colors.len(),
            });
        }
        Ok(Self::from_fn(height, width, |row, col| colors[row * width + col]))
    }

    pub fn height(&self) -> usize {
        self.map.height()
    }

    pub fn width(&self) -> usize {
        self.map.width()
    }

    /// (height, width)
    pub fn dimensions(&self) -> (usize, usize) {
        (self.height(), self.width())
    }

    pub fn get(&self, row: usize, col: usize) -> Color {
        self.map[(row, col)]
    }

    pub fn set(&mut self, row: usize, col: usize, color: Color) {
        self.map[(row, col)] = color;
    }

    /// Iterate over the rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Color]> + '_ {
        self.map.rows()
    }

    /// All colors, row-major.
    pub fn to_vec(&self) -> Vec<Color> {
        self.rows().flat_map(|row| row.iter().cloned()).collect()
    }
}
