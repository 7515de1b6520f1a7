// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Pick the cheapest seam out of a cost field and trace it back.

use crate::flipper::Orientation;
use crate::seamcost::SeamCostField;

/// A connected path through the image: one position per line, with
/// neighboring positions never more than one apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seam {
    orientation: Orientation,
    positions: Vec<usize>,
    cost: u32,
}

impl Seam {
    pub(crate) fn new(orientation: Orientation, positions: Vec<usize>, cost: u32) -> Self {
        Seam {
            orientation,
            positions,
            cost,
        }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// The position on each line, first line first.  For a vertical
    /// seam these are column numbers, one per row.
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    /// The accumulated cost at the seam's terminal cell.
    pub fn cost(&self) -> u32 {
        self.cost
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// The lowest and highest position the seam touches on `line` and
    /// the lines directly before and after it.  This is the stretch of
    /// a line whose neighborhood a cut along this seam can disturb.
    pub fn reach(&self, line: usize) -> (usize, usize) {
        let first = line.saturating_sub(1);
        let last = (line + 1).min(self.positions.len() - 1);
        let around = &self.positions[first..=last];
        let lowest = around.iter().cloned().min().unwrap_or(0);
        let highest = around.iter().cloned().max().unwrap_or(0);
        (lowest, highest)
    }
}

/// This trait defines how we get seams out of whatever is holding the
/// costs.  It's a primitive interface, just enough to let the carver
/// peek at the cheapest cost before committing to an orientation.
pub trait SeamFinder {
    /// The terminal position with the strictly smallest cost, and that
    /// cost.  The first position wins a tie.  None if every terminal
    /// cell has been excluded.
    fn cheapest_terminal(&self) -> Option<(usize, u32)>;

    /// Walk the back pointers from `terminal` to the first line.
    fn trace(&self, terminal: usize) -> Seam;

    /// The cheapest seam.
    fn find_seam(&self) -> Option<Seam> {
        self.cheapest_terminal().map(|(terminal, _)| self.trace(terminal))
    }
}

impl SeamFinder for SeamCostField {
    fn cheapest_terminal(&self) -> Option<(usize, u32)> {
        if self.lines() == 0 {
            return None;
        }
        let last = self.lines() - 1;
        let mut best: Option<(usize, u32)> = None;
        let mut lowest = u32::max_value();
        for pos in 0..self.span() {
            let value = self.cell(last, pos).value;
            if value < lowest {
                lowest = value;
                best = Some((pos, value));
            }
        }
        best
    }

    fn trace(&self, terminal: usize) -> Seam {
        let lines = self.lines();
        let cost = self.cell(lines - 1, terminal).value;
        let mut seam_pos = terminal;
        // Working backwards, gather the positions, then reverse them
        // so the first line comes first.
        let mut positions = (0..lines)
            .rev()
            .fold(Vec::with_capacity(lines), |mut acc, line| {
                acc.push(seam_pos);
                if let Some(predecessor) = self.cell(line, seam_pos).predecessor {
                    seam_pos = (seam_pos as isize + predecessor.shift()) as usize;
                }
                acc
            });
        positions.reverse();
        Seam::new(self.orientation(), positions, cost)
    }
}
