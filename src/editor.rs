// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Cutting seams out and splicing seams in.
//!
//! Removal keeps the pixels, the energy field and every live cost
//! field in lock step: the same cell leaves every map, so the cells
//! that slide over keep their values and only the neighborhood of the
//! seam needs recomputing afterwards.
//!
//! Insertion only touches the pixels.  A batch of seams is drawn from
//! one frozen cost field, so each seam's positions are in the
//! coordinates of the grid as it was before the batch began.  Every
//! earlier seam in the batch that went in at or before a position on
//! the same line pushes that position one step further along.

use crate::cq;
use crate::energy::{EnergyMap, PixelMap};
use crate::pixelgrid::Color;
use crate::seamcost::SeamCostField;
use crate::seamfinder::Seam;
use crate::twodmap::TwoDimensionalMap;

fn cut<P: Default + Copy>(map: &mut TwoDimensionalMap<P>, seam: &Seam) {
    let orientation = seam.orientation();
    for (line, &pos) in seam.positions().iter().enumerate() {
        map.remove_at(orientation, line, pos);
    }
    map.shrink(orientation);
}

/// Cut `seam` out of the pixels, the energy field and each of
/// `fields`, whatever the fields' own orientation.
pub fn remove_seam<'a, I>(seam: &Seam, pixels: &mut PixelMap, energy: &mut EnergyMap, fields: I)
where
    I: IntoIterator<Item = &'a mut SeamCostField>,
{
    cut(pixels, seam);
    cut(energy, seam);
    for field in fields {
        cut(&mut field.cells, seam);
    }
}

/// Splice a batch of seams into the pixels, in order.  The new pixel
/// on each line goes in just before the seam pixel and takes the mean
/// of the seam pixel and the one before it; on the leading edge it is
/// a copy of the seam pixel.
pub fn insert_seams(pixels: &mut PixelMap, seams: &[Seam]) {
    let orientation = match seams.first() {
        Some(seam) => seam.orientation(),
        None => return,
    };
    let mut inserted: Vec<Vec<usize>> = vec![Vec::new(); pixels.lines(orientation)];

    for seam in seams {
        for (line, &original) in seam.positions().iter().enumerate() {
            let earlier = &mut inserted[line];
            let pos = original + earlier.iter().filter(|&&p| p <= original).count();
            earlier.push(original);

            let here = pixels.at(orientation, line, pos);
            let fill = cq!(
                pos == 0,
                here,
                Color::average(pixels.at(orientation, line, pos - 1), here)
            );
            pixels.insert_at(orientation, line, pos, fill);
        }
        pixels.grow(orientation);
    }
}
