// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The two-dimensional map underneath everything.
//!
//! The pixels, the energy field and both seam cost fields are all the
//! same shape and are all mutated the same way: a seam is cut out of
//! (or spliced into) every line, and the cells past it slide over by
//! one.  Storage is row-major with spare capacity on both axes, so a
//! map can grow towards its target size without reallocating.

use crate::flipper::Orientation;
use std::ops::{Index, IndexMut};

/// Defines the basic two-dimensional map: an addressable field
/// containing one of several possible objects during processing: a
/// color for the pixel grid, a u32 for the energy field, or a cost
/// plus back pointer for the seam cost fields.
#[derive(Debug, Clone)]
pub struct TwoDimensionalMap<P: Default + Copy> {
    height: usize,
    width: usize,
    rows: usize,
    stride: usize,
    data: Vec<P>,
}

impl<P: Default + Copy> TwoDimensionalMap<P> {
    /// Define a new map with no room to grow.  The content type must
    /// implement the Default trait.
    pub fn new(height: usize, width: usize) -> Self {
        Self::with_capacity(height, width, height, width)
    }

    /// Define a new map of `height` by `width` that can grow to
    /// `max_height` by `max_width` in place.
    pub fn with_capacity(height: usize, width: usize, max_height: usize, max_width: usize) -> Self {
        let rows = max_height.max(height);
        let stride = max_width.max(width);
        TwoDimensionalMap {
            height,
            width,
            rows,
            stride,
            data: vec![P::default(); rows * stride],
        }
    }

    /// A fresh, default-filled map with the same dimensions and the
    /// same capacity as `other`.
    pub fn like<Q: Default + Copy>(other: &TwoDimensionalMap<Q>) -> Self {
        Self::with_capacity(other.height, other.width, other.rows, other.stride)
    }

    // Absolutely, the number one name of this game is keep the index
    // math in a singular location and never, ever mess with it.
    #[inline]
    fn get_index(&self, row: usize, col: usize) -> usize {
        row * self.stride + col
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// The largest (height, width) this map can reach without
    /// reallocating.
    pub fn capacity(&self) -> (usize, usize) {
        (self.rows, self.stride)
    }

    /// Number of lines a seam of this orientation crosses.
    #[inline]
    pub fn lines(&self, orientation: Orientation) -> usize {
        orientation.lines(self.height, self.width)
    }

    /// Number of positions on each line for this orientation.
    #[inline]
    pub fn span(&self, orientation: Orientation) -> usize {
        orientation.span(self.height, self.width)
    }

    /// Get the value at a (line, position) address.
    #[inline]
    pub fn at(&self, orientation: Orientation, line: usize, pos: usize) -> P {
        self[orientation.place(line, pos)]
    }

    /// Get a mutable reference to the value at a (line, position)
    /// address.
    #[inline]
    pub fn at_mut(&mut self, orientation: Orientation, line: usize, pos: usize) -> &mut P {
        &mut self[orientation.place(line, pos)]
    }

    /// The value of the cell offset by (`drow`, `dcol`) from
    /// (`row`, `col`), or None if that cell lies outside the map.
    #[inline]
    pub fn neighbor(&self, row: usize, col: usize, drow: isize, dcol: isize) -> Option<P> {
        let r = row as isize + drow;
        let c = col as isize + dcol;
        if r < 0 || c < 0 || r >= self.height as isize || c >= self.width as isize {
            return None;
        }
        Some(self.data[self.get_index(r as usize, c as usize)])
    }

    /// One row of the map, without its spare capacity.
    pub fn row(&self, row: usize) -> &[P] {
        let start = self.get_index(row, 0);
        &self.data[start..start + self.width]
    }

    /// Iterate over the rows of the map.
    pub fn rows(&self) -> impl Iterator<Item = &[P]> + '_ {
        (0..self.height).map(move |r| self.row(r))
    }

    /// Split the live rows into bands of at most `rows_per_band` rows
    /// each.  Every band is handed out with the row number it starts
    /// at and the row stride, so each can be filled on its own thread.
    #[cfg(feature = "threaded")]
    pub fn bands_mut(&mut self, rows_per_band: usize) -> impl Iterator<Item = (usize, usize, &mut [P])> + '_ {
        let stride = self.stride;
        let live = self.height * stride;
        let band = rows_per_band.max(1);
        self.data[..live]
            .chunks_mut(band * stride)
            .enumerate()
            .map(move |(i, chunk)| (i * band, stride, chunk))
    }

    /// Cut the cell at `pos` out of `line`, sliding everything after
    /// it one step back.  The map's logical size is unchanged until
    /// `shrink` is called, so a whole seam can be cut line by line.
    pub fn remove_at(&mut self, orientation: Orientation, line: usize, pos: usize) {
        match orientation {
            Orientation::Vertical => {
                let start = self.get_index(line, 0);
                self.data
                    .copy_within(start + pos + 1..start + self.width, start + pos);
            }
            Orientation::Horizontal => {
                for row in pos..self.height.saturating_sub(1) {
                    let (to, from) = (self.get_index(row, line), self.get_index(row + 1, line));
                    self.data[to] = self.data[from];
                }
            }
        }
    }

    /// Open a gap at `pos` on `line`, sliding everything from `pos` on
    /// one step forward, and put `value` in the gap.  As with
    /// `remove_at`, call `grow` once every line has had its cell.
    pub fn insert_at(&mut self, orientation: Orientation, line: usize, pos: usize, value: P) {
        match orientation {
            Orientation::Vertical => {
                assert!(self.width < self.stride, "no room to widen the map");
                let start = self.get_index(line, 0);
                self.data
                    .copy_within(start + pos..start + self.width, start + pos + 1);
            }
            Orientation::Horizontal => {
                assert!(self.height < self.rows, "no room to heighten the map");
                for row in (pos + 1..=self.height).rev() {
                    let (to, from) = (self.get_index(row, line), self.get_index(row - 1, line));
                    self.data[to] = self.data[from];
                }
            }
        }
        let (row, col) = orientation.place(line, pos);
        let index = self.get_index(row, col);
        self.data[index] = value;
    }

    /// Drop the last position of every line after a seam was cut.
    pub fn shrink(&mut self, orientation: Orientation) {
        match orientation {
            Orientation::Vertical => self.width -= 1,
            Orientation::Horizontal => self.height -= 1,
        }
    }

    /// Take in the extra position of every line after a seam was
    /// spliced in.
    pub fn grow(&mut self, orientation: Orientation) {
        match orientation {
            Orientation::Vertical => self.width += 1,
            Orientation::Horizontal => self.height += 1,
        }
        debug_assert!(self.width <= self.stride && self.height <= self.rows);
    }
}

impl<P: Default + Copy> Index<(usize, usize)> for TwoDimensionalMap<P> {
    type Output = P;

    /// A convenience addressing mode for getting values.
    fn index(&self, (row, col): (usize, usize)) -> &P {
        debug_assert!(row < self.height && col < self.width);
        let index = self.get_index(row, col);
        &self.data[index]
    }
}

impl<P: Default + Copy> IndexMut<(usize, usize)> for TwoDimensionalMap<P> {
    /// A convenience addressing mode for setting values.
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut P {
        debug_assert!(row < self.height && col < self.width);
        let index = self.get_index(row, col);
        &mut self.data[index]
    }
}

// Spare capacity holds whatever was last slid into it, so only the
// live region takes part in comparisons.
impl<P: Default + Copy + PartialEq> PartialEq for TwoDimensionalMap<P> {
    fn eq(&self, other: &Self) -> bool {
        self.height == other.height
            && self.width == other.width
            && self.rows().zip(other.rows()).all(|(a, b)| a == b)
    }
}

impl<P: Default + Copy + Eq> Eq for TwoDimensionalMap<P> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn counting(height: usize, width: usize) -> TwoDimensionalMap<u32> {
        let mut map = TwoDimensionalMap::with_capacity(height, width, height + 1, width + 1);
        for r in 0..height {
            for c in 0..width {
                map[(r, c)] = (r * 10 + c) as u32;
            }
        }
        map
    }

    #[test]
    fn neighbors_stop_at_the_border() {
        let map = counting(3, 3);
        assert_eq!(map.neighbor(1, 1, -1, -1), Some(0));
        assert_eq!(map.neighbor(1, 1, 1, 1), Some(22));
        assert_eq!(map.neighbor(0, 0, -1, 0), None);
        assert_eq!(map.neighbor(2, 2, 0, 1), None);
    }

    #[test]
    fn removing_a_vertical_seam_closes_each_row() {
        let mut map = counting(2, 4);
        map.remove_at(Orientation::Vertical, 0, 1);
        map.remove_at(Orientation::Vertical, 1, 3);
        map.shrink(Orientation::Vertical);
        assert_eq!(map.row(0), &[0, 2, 3]);
        assert_eq!(map.row(1), &[10, 11, 12]);
    }

    #[test]
    fn removing_a_horizontal_seam_closes_each_column() {
        let mut map = counting(3, 2);
        map.remove_at(Orientation::Horizontal, 0, 0);
        map.remove_at(Orientation::Horizontal, 1, 2);
        map.shrink(Orientation::Horizontal);
        assert_eq!(map.row(0), &[10, 1]);
        assert_eq!(map.row(1), &[20, 11]);
        assert_eq!(map.height(), 2);
    }

    #[test]
    fn inserting_opens_a_gap_in_place() {
        let mut map = counting(2, 3);
        map.insert_at(Orientation::Vertical, 0, 0, 99);
        map.insert_at(Orientation::Vertical, 1, 2, 98);
        map.grow(Orientation::Vertical);
        assert_eq!(map.row(0), &[99, 0, 1, 2]);
        assert_eq!(map.row(1), &[10, 11, 98, 12]);

        let mut map = counting(2, 2);
        map.insert_at(Orientation::Horizontal, 0, 1, 77);
        map.insert_at(Orientation::Horizontal, 1, 0, 66);
        map.grow(Orientation::Horizontal);
        assert_eq!(map.row(0), &[0, 66]);
        assert_eq!(map.row(1), &[77, 1]);
        assert_eq!(map.row(2), &[10, 11]);
    }

    #[test]
    fn equality_ignores_spare_capacity() {
        let mut a = counting(2, 3);
        let b = counting(2, 3);
        a.remove_at(Orientation::Vertical, 0, 0);
        a.insert_at(Orientation::Vertical, 0, 0, 0);
        assert_eq!(a, b);
        a[(1, 1)] = 5;
        assert_ne!(a, b);
    }
}
