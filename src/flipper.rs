// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seam orientation and the dimensional flipper
//!
//! Every algorithm in this crate is written once, in terms of *lines*
//! and *positions*.  A seam visits every line exactly once and picks
//! one position on each.  For a vertical seam the lines are the rows
//! and the positions are the columns; for a horizontal seam the two
//! are swapped.  Flipping the coordinates here, rather than keeping a
//! vertical and a horizontal copy of every routine, means the
//! horizontal case can never drift out of step with the vertical one.

use crate::cq;

/// The direction a seam runs in.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Top to bottom, one column per row.  Removing one narrows the
    /// image by one column.
    Vertical,
    /// Left to right, one row per column.  Removing one shortens the
    /// image by one row.
    Horizontal,
}

impl Orientation {
    /// Both orientations, horizontal first.  That is also the order
    /// in which the carver settles ties.
    pub const BOTH: [Orientation; 2] = [Orientation::Horizontal, Orientation::Vertical];

    /// The other orientation.
    pub fn turn(self) -> Self {
        cq!(
            self == Orientation::Vertical,
            Orientation::Horizontal,
            Orientation::Vertical
        )
    }

    /// Map a (line, position) pair to a (row, col) pair.
    #[inline]
    pub fn place(self, line: usize, pos: usize) -> (usize, usize) {
        match self {
            Orientation::Vertical => (line, pos),
            Orientation::Horizontal => (pos, line),
        }
    }

    /// Number of lines, which is also the length of a seam.
    #[inline]
    pub fn lines(self, height: usize, width: usize) -> usize {
        cq!(self == Orientation::Vertical, height, width)
    }

    /// Number of positions available on each line.
    #[inline]
    pub fn span(self, height: usize, width: usize) -> usize {
        cq!(self == Orientation::Vertical, width, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flipping_swaps_coordinates() {
        assert_eq!(Orientation::Vertical.place(2, 7), (2, 7));
        assert_eq!(Orientation::Horizontal.place(2, 7), (7, 2));
    }

    #[test]
    fn lines_and_span_follow_the_seam() {
        // A 3-row, 5-column grid.
        assert_eq!(Orientation::Vertical.lines(3, 5), 3);
        assert_eq!(Orientation::Vertical.span(3, 5), 5);
        assert_eq!(Orientation::Horizontal.lines(3, 5), 5);
        assert_eq!(Orientation::Horizontal.span(3, 5), 3);
    }

    #[test]
    fn turning_twice_is_identity() {
        for o in Orientation::BOTH.iter() {
            assert_eq!(o.turn().turn(), *o);
            assert_ne!(o.turn(), *o);
        }
    }
}
