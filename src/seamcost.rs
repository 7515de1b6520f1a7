// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seam costs using forward energy.
//!
//! Rather than asking "how much energy does this pixel have?", forward
//! energy asks "how much energy would cutting this pixel out add to
//! the picture?".  Cutting pixel P out of a line makes its two
//! neighbors A (before) and B (after) adjacent:
//!
//! ```text
//! newA = oldA − d(A,P) + d(A,B)
//! newB = oldB − d(B,P) + d(B,A)
//! ```
//!
//! and the local disruption is |(oldA + oldB) − (newA + newB)|.  A
//! neighbor that falls outside the image contributes no terms at all.
//!
//! The accumulated cost of a cell is its disruption plus the cheapest
//! of the (up to) three cells it could have been reached from on the
//! previous line:
//!
//! ```text
//!                       ⎧ M(line−1, pos−1)
//! M(line,pos) = D + min ⎨ M(line−1, pos)
//!                       ⎩ M(line−1, pos+1)
//! ```
//!
//! Ties go to the first candidate in that order.  The first line has
//! nothing to accumulate and no predecessor.

use crate::cq;
use crate::energy::{EnergyMap, PixelMap};
use crate::flipper::Orientation;
use crate::pixelpairs::energy_of_maybe_pair;
use crate::twodmap::TwoDimensionalMap;

/// Where a vertical seam came from, one row up.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Upward {
    NorthWest,
    North,
    NorthEast,
}

/// Where a horizontal seam came from, one column to the left.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Leftward {
    NorthWest,
    West,
    SouthWest,
}

/// The back pointer of a cost cell.  The two orientations have their
/// own direction sets, so a vertical field can never hold a westward
/// pointer and vice versa.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Predecessor {
    Vertical(Upward),
    Horizontal(Leftward),
}

impl Predecessor {
    /// The predecessor `shift` positions away on the previous line.
    fn from_shift(orientation: Orientation, shift: isize) -> Self {
        match (orientation, shift) {
            (Orientation::Vertical, s) if s < 0 => Predecessor::Vertical(Upward::NorthWest),
            (Orientation::Vertical, 0) => Predecessor::Vertical(Upward::North),
            (Orientation::Vertical, _) => Predecessor::Vertical(Upward::NorthEast),
            (Orientation::Horizontal, s) if s < 0 => Predecessor::Horizontal(Leftward::NorthWest),
            (Orientation::Horizontal, 0) => Predecessor::Horizontal(Leftward::West),
            (Orientation::Horizontal, _) => Predecessor::Horizontal(Leftward::SouthWest),
        }
    }

    /// How far along the previous line the predecessor sits.
    pub fn shift(self) -> isize {
        match self {
            Predecessor::Vertical(Upward::NorthWest) => -1,
            Predecessor::Vertical(Upward::North) => 0,
            Predecessor::Vertical(Upward::NorthEast) => 1,
            Predecessor::Horizontal(Leftward::NorthWest) => -1,
            Predecessor::Horizontal(Leftward::West) => 0,
            Predecessor::Horizontal(Leftward::SouthWest) => 1,
        }
    }
}

/// Accumulated cost plus back pointer.
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq)]
pub struct CostCell {
    pub value: u32,
    pub predecessor: Option<Predecessor>,
}

pub type CostMap = TwoDimensionalMap<CostCell>;

/// The dynamic-programming table for one seam orientation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeamCostField {
    orientation: Orientation,
    pub(crate) cells: CostMap,
}

impl SeamCostField {
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn lines(&self) -> usize {
        self.cells.lines(self.orientation)
    }

    pub fn span(&self) -> usize {
        self.cells.span(self.orientation)
    }

    /// The cell at a (line, position) address.
    pub fn cell(&self, line: usize, pos: usize) -> CostCell {
        self.cells.at(self.orientation, line, pos)
    }

    /// Recompute a single cell.  Returns true if it changed.
    pub(crate) fn refresh_cell(&mut self, pixels: &PixelMap, energy: &EnergyMap, line: usize, pos: usize) -> bool {
        let cell = cost_cell(&self.cells, pixels, energy, self.orientation, line, pos);
        let slot = self.cells.at_mut(self.orientation, line, pos);
        let changed = *slot != cell;
        *slot = cell;
        changed
    }

    /// Recompute a whole line from the one before it.
    pub(crate) fn refresh_line(&mut self, pixels: &PixelMap, energy: &EnergyMap, line: usize) {
        for pos in 0..self.span() {
            self.refresh_cell(pixels, energy, line, pos);
        }
    }

    /// Force the terminal cell at `pos` out of contention.  Used to
    /// draw several different seams from one frozen field.
    pub(crate) fn exclude_terminal(&mut self, pos: usize) {
        let last = self.lines() - 1;
        self.cells.at_mut(self.orientation, last, pos).value = u32::max_value();
    }
}

/// How much cutting the pixel at (`line`, `pos`) out would disturb its
/// two neighbors on that line.
pub fn disruption(pixels: &PixelMap, energy: &EnergyMap, orientation: Orientation, line: usize, pos: usize) -> u32 {
    let span = pixels.span(orientation);
    let here = Some(pixels.at(orientation, line, pos));
    let before = cq!(pos == 0, None, Some(pos - 1));
    let after = cq!(pos + 1 >= span, None, Some(pos + 1));

    let color = |p: Option<usize>| p.map(|p| pixels.at(orientation, line, p));
    let erg = |p: Option<usize>| p.map_or(0, |p| i64::from(energy.at(orientation, line, p)));
    let pair = |a, b| i64::from(energy_of_maybe_pair(a, b));

    let (cb, ca) = (color(before), color(after));
    let old = erg(before) + erg(after);
    let new_before = cq!(before.is_none(), 0, erg(before) - pair(cb, here) + pair(cb, ca));
    let new_after = cq!(after.is_none(), 0, erg(after) - pair(ca, here) + pair(ca, cb));
    (old - (new_before + new_after)).abs() as u32
}

/// Compute one cell of the cost table from the previous line.
fn cost_cell(
    costs: &CostMap,
    pixels: &PixelMap,
    energy: &EnergyMap,
    orientation: Orientation,
    line: usize,
    pos: usize,
) -> CostCell {
    let value = disruption(pixels, energy, orientation, line, pos);
    if line == 0 {
        return CostCell {
            value,
            predecessor: None,
        };
    }

    let span = costs.span(orientation) as isize;
    let parent = (-1isize..=1)
        .filter(|shift| (0..span).contains(&(pos as isize + shift)))
        .map(|shift| {
            let above = costs.at(orientation, line - 1, (pos as isize + shift) as usize);
            (shift, above.value)
        })
        .min_by_key(|&(_, value)| value);

    match parent {
        Some((shift, above)) => CostCell {
            value: value.saturating_add(above),
            predecessor: Some(Predecessor::from_shift(orientation, shift)),
        },
        None => CostCell {
            value,
            predecessor: None,
        },
    }
}

/// Build the full cost table for one orientation.
pub fn calculate_cost(pixels: &PixelMap, energy: &EnergyMap, orientation: Orientation) -> SeamCostField {
    let mut field = SeamCostField {
        orientation,
        cells: CostMap::like(pixels),
    };
    for line in 0..field.lines() {
        field.refresh_line(pixels, energy, line);
    }
    field
}
