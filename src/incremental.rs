// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Patching the fields after a seam is cut.
//!
//! A pixel's energy depends only on its 3×3 neighborhood, so after a
//! cut only the pixels within a couple of positions of the seam (on
//! its own line and the lines either side) can have new energy.  The
//! cost field is patched the same way: cells near the seam are
//! recomputed, and any cell whose value actually changed marks its
//! three children on the next line for recomputation too.  Everything
//! else slid over with the cut and is still correct.
//!
//! A cost field of the *other* orientation runs across the seam, so
//! every one of its lines from the first one the seam touched onward
//! is recomputed.

use crate::energy::{pixel_energy, EnergyMap, PixelMap};
use crate::seamcost::SeamCostField;
use crate::seamfinder::Seam;
use log::trace;
use std::ops::Range;

// How far either side of the seam's reach a pixel's energy can change.
const ENERGY_REACH: usize = 2;

// Disruption reads the energy one position further out.
const COST_REACH: usize = ENERGY_REACH + 1;

fn window(seam: &Seam, line: usize, span: usize, reach: usize) -> Range<usize> {
    let (lowest, highest) = seam.reach(line);
    lowest.saturating_sub(reach)..(highest + reach + 1).min(span)
}

/// Recompute the energy around the path `seam` was cut along.
pub fn refresh_energy(seam: &Seam, pixels: &PixelMap, energy: &mut EnergyMap) {
    let orientation = seam.orientation();
    let span = pixels.span(orientation);
    let mut touched = 0;
    for line in 0..seam.len() {
        for pos in window(seam, line, span, ENERGY_REACH) {
            let (row, col) = orientation.place(line, pos);
            energy[(row, col)] = pixel_energy(pixels, row, col);
            touched += 1;
        }
    }
    trace!("energy: refreshed {} pixels", touched);
}

/// Patch a cost field of the same orientation as the seam that was
/// cut.  Call after `refresh_energy`.
pub fn refresh_along(seam: &Seam, field: &mut SeamCostField, pixels: &PixelMap, energy: &EnergyMap) {
    debug_assert_eq!(seam.orientation(), field.orientation());
    let span = field.span();
    let mut touched = 0;
    // The stretch of the previous line whose values changed.
    let mut changed: Option<(usize, usize)> = None;

    for line in 0..field.lines() {
        let mut range = window(seam, line, span, COST_REACH);
        if let Some((first, last)) = changed {
            range = range.start.min(first.saturating_sub(1))..range.end.max((last + 2).min(span));
        }

        changed = None;
        for pos in range {
            touched += 1;
            if field.refresh_cell(pixels, energy, line, pos) {
                changed = Some(changed.map_or((pos, pos), |(first, _)| (first, pos)));
            }
        }
    }
    trace!("{:?} costs: refreshed {} cells", field.orientation(), touched);
}

/// Patch a cost field whose lines run across the seam that was cut.
/// Call after `refresh_energy`.
pub fn refresh_across(seam: &Seam, field: &mut SeamCostField, pixels: &PixelMap, energy: &EnergyMap) {
    debug_assert_ne!(seam.orientation(), field.orientation());
    let first = seam
        .positions()
        .iter()
        .cloned()
        .min()
        .unwrap_or(0)
        .saturating_sub(COST_REACH);
    for line in first..field.lines() {
        field.refresh_line(pixels, energy, line);
    }
    trace!(
        "{:?} costs: refreshed lines {}..{}",
        field.orientation(),
        first,
        field.lines()
    );
}
