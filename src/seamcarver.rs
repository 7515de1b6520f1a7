// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seamcarve - The main loop
//!
//! The carver owns the working pixels, the energy field and up to two
//! cost fields for the whole session.  Each step either cuts one seam
//! or splices in one batch of seams:
//!
//! * both dimensions shrinking: cut whichever orientation has the
//!   cheaper seam right now, horizontal on a tie;
//! * otherwise, bring the height to its target first, then the width.
//!
//! Cuts keep the fields alive and patch them in place.  Splicing
//! changes too much at once, so the fields are rebuilt from scratch
//! before the next step.  Every step leaves the carver consistent, so
//! a caller can stop stepping at any point and take the grid as it is.

use crate::cq;
use crate::editor;
use crate::energy::{calculate_energy, EnergyMap, PixelMap};
use crate::error::ResizeError;
use crate::flipper::Orientation;
use crate::incremental;
use crate::pixelgrid::PixelGrid;
use crate::seamcost::{calculate_cost, SeamCostField};
use crate::seamfinder::{Seam, SeamFinder};
use log::{debug, info};

/// What the carver has left to do after a step.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Progress {
    Working,
    Done,
}

/// A resize in progress.
pub struct SeamCarver {
    pixels: PixelMap,
    energy: EnergyMap,
    vertical: Option<SeamCostField>,
    horizontal: Option<SeamCostField>,
    stale: bool,
    target: (usize, usize),
}

impl SeamCarver {
    /// Take ownership of `grid` and get ready to carve it to
    /// `target_height` by `target_width`.
    pub fn new(grid: PixelGrid, target_height: usize, target_width: usize) -> Result<Self, ResizeError> {
        if target_height < 1 || target_width < 1 {
            return Err(ResizeError::InvalidDimension {
                height: target_height,
                width: target_width,
            });
        }
        let (height, width) = grid.dimensions();
        if height < 1 || width < 1 {
            return Err(ResizeError::DegenerateInput { height, width });
        }

        // Room to grow towards the target without reallocating.
        let mut pixels = PixelMap::with_capacity(
            height,
            width,
            height.max(target_height),
            width.max(target_width),
        );
        for (row, colors) in grid.rows().enumerate() {
            for (col, &color) in colors.iter().enumerate() {
                pixels[(row, col)] = color;
            }
        }

        info!(
            "carving {}x{} to {}x{}",
            height, width, target_height, target_width
        );
        Ok(SeamCarver {
            energy: EnergyMap::like(&pixels),
            pixels,
            vertical: None,
            horizontal: None,
            stale: true,
            target: (target_height, target_width),
        })
    }

    /// Current (height, width).
    pub fn dimensions(&self) -> (usize, usize) {
        (self.pixels.height(), self.pixels.width())
    }

    /// Rows and columns still to be removed or added.
    pub fn remaining(&self) -> (usize, usize) {
        let (height, width) = self.dimensions();
        let (target_height, target_width) = self.target;
        (
            cq!(height > target_height, height - target_height, target_height - height),
            cq!(width > target_width, width - target_width, target_width - width),
        )
    }

    /// Cut one seam or splice in one batch.
    pub fn step(&mut self) -> Progress {
        let (height, width) = self.dimensions();
        let (target_height, target_width) = self.target;

        if height > target_height && width > target_width {
            let across = self.field(Orientation::Horizontal).cheapest_terminal();
            let down = self.field(Orientation::Vertical).cheapest_terminal();
            let orientation = match (across, down) {
                (Some((_, h)), Some((_, v))) => {
                    cq!(h <= v, Orientation::Horizontal, Orientation::Vertical)
                }
                (None, Some(_)) => Orientation::Vertical,
                _ => Orientation::Horizontal,
            };
            self.remove(orientation);
        } else {
            let (orientation, current, target) = cq!(
                height != target_height,
                (Orientation::Horizontal, height, target_height),
                (Orientation::Vertical, width, target_width)
            );
            if current != target {
                self.retire(orientation.turn());
                if current > target {
                    self.remove(orientation);
                } else {
                    self.insert(orientation, target - current);
                }
            }
        }

        cq!(self.dimensions() == self.target, Progress::Done, Progress::Working)
    }

    /// Hand back the grid as it stands.
    pub fn into_grid(self) -> PixelGrid {
        let pixels = &self.pixels;
        PixelGrid::from_fn(pixels.height(), pixels.width(), |row, col| pixels[(row, col)])
    }

    // The cost field for `orientation`, rebuilding whatever is out of
    // date first.
    fn field(&mut self, orientation: Orientation) -> &mut SeamCostField {
        if self.stale {
            self.energy = calculate_energy(&self.pixels);
            self.vertical = None;
            self.horizontal = None;
            self.stale = false;
        }
        let (pixels, energy) = (&self.pixels, &self.energy);
        let slot = match orientation {
            Orientation::Vertical => &mut self.vertical,
            Orientation::Horizontal => &mut self.horizontal,
        };
        slot.get_or_insert_with(|| calculate_cost(pixels, energy, orientation))
    }

    // Stop maintaining a field that will not be asked for again.
    fn retire(&mut self, orientation: Orientation) {
        match orientation {
            Orientation::Vertical => self.vertical = None,
            Orientation::Horizontal => self.horizontal = None,
        }
    }

    fn remove(&mut self, orientation: Orientation) {
        let field = self.field(orientation);
        let seam = field.find_seam().unwrap_or_else(|| field.trace(0));

        editor::remove_seam(
            &seam,
            &mut self.pixels,
            &mut self.energy,
            self.vertical.iter_mut().chain(self.horizontal.iter_mut()),
        );
        incremental::refresh_energy(&seam, &self.pixels, &mut self.energy);
        let (along, across) = match orientation {
            Orientation::Vertical => (&mut self.vertical, &mut self.horizontal),
            Orientation::Horizontal => (&mut self.horizontal, &mut self.vertical),
        };
        if let Some(field) = along.as_mut() {
            incremental::refresh_along(&seam, field, &self.pixels, &self.energy);
        }
        if let Some(field) = across.as_mut() {
            incremental::refresh_across(&seam, field, &self.pixels, &self.energy);
        }

        let (height, width) = self.dimensions();
        debug!(
            "cut {:?} seam at cost {}: now {}x{}",
            orientation,
            seam.cost(),
            height,
            width
        );
    }

    fn insert(&mut self, orientation: Orientation, wanted: usize) {
        self.stale = true;
        let seams = pick_batch(self.field(orientation), wanted);
        editor::insert_seams(&mut self.pixels, &seams);
        self.stale = true;

        let (height, width) = self.dimensions();
        debug!(
            "spliced {} {:?} seams: now {}x{}",
            seams.len(),
            orientation,
            height,
            width
        );
    }
}

// Up to `wanted` distinct seams from one frozen field, no more than
// one per terminal position.  Never empty: once every terminal has
// saturated, the seam ending at position 0 is taken.
fn pick_batch(field: &mut SeamCostField, wanted: usize) -> Vec<Seam> {
    let batch = wanted.min(field.span()).max(1);
    let mut seams = Vec::with_capacity(batch);
    while seams.len() < batch {
        match field.cheapest_terminal() {
            Some((terminal, _)) => {
                seams.push(field.trace(terminal));
                field.exclude_terminal(terminal);
            }
            None if seams.is_empty() => seams.push(field.trace(0)),
            None => break,
        }
    }
    seams
}

/// Resize `grid` to `target_height` by `target_width`, carving or
/// splicing seams as needed.
pub fn resize(grid: PixelGrid, target_height: usize, target_width: usize) -> Result<PixelGrid, ResizeError> {
    let mut carver = SeamCarver::new(grid, target_height, target_width)?;
    while carver.dimensions() != carver.target {
        if carver.step() == Progress::Done {
            break;
        }
    }
    let grid = carver.into_grid();
    info!("carved to {}x{}", grid.height(), grid.width());
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixelgrid::Color;

    const GRAY: Color = Color::new(90, 90, 90);

    #[test]
    fn ties_between_orientations_go_horizontal() {
        let mut carver = SeamCarver::new(PixelGrid::filled(5, 5, GRAY), 3, 3).unwrap();
        assert_eq!(carver.remaining(), (2, 2));
        assert_eq!(carver.step(), Progress::Working);
        assert_eq!(carver.dimensions(), (4, 5));
    }

    #[test]
    fn cheaper_orientation_is_cut_first() {
        // One-pixel vertical stripes: cutting a row is free, cutting a
        // column always closes up two stripes.
        let grid = PixelGrid::from_fn(6, 6, |_, col| {
            cq!(col % 2 == 0, Color::new(0, 0, 0), Color::new(200, 200, 200))
        });
        let mut carver = SeamCarver::new(grid, 5, 5).unwrap();
        carver.step();
        assert_eq!(carver.dimensions(), (5, 6));

        let grid = PixelGrid::from_fn(6, 6, |row, _| {
            cq!(row % 2 == 0, Color::new(0, 0, 0), Color::new(200, 200, 200))
        });
        let mut carver = SeamCarver::new(grid, 5, 5).unwrap();
        carver.step();
        assert_eq!(carver.dimensions(), (6, 5));
    }

    #[test]
    fn stepping_can_stop_anywhere() {
        let grid = PixelGrid::filled(8, 8, GRAY);
        let mut carver = SeamCarver::new(grid, 4, 8).unwrap();
        carver.step();
        carver.step();
        assert_eq!(carver.remaining(), (2, 0));
        let grid = carver.into_grid();
        assert_eq!(grid.dimensions(), (6, 8));
        assert!(grid.to_vec().iter().all(|&c| c == GRAY));
    }

    #[test]
    fn insertion_finishes_in_one_batch_when_it_fits() {
        let mut carver = SeamCarver::new(PixelGrid::filled(3, 4, GRAY), 3, 7).unwrap();
        assert_eq!(carver.pixels.capacity(), (3, 7));
        assert_eq!(carver.step(), Progress::Done);
        assert_eq!(carver.dimensions(), (3, 7));
    }

    #[test]
    fn large_insertions_take_several_batches() {
        // Each batch is at most as wide as the grid it is drawn from.
        let mut carver = SeamCarver::new(PixelGrid::filled(2, 2, GRAY), 2, 9).unwrap();
        assert_eq!(carver.step(), Progress::Working);
        assert_eq!(carver.dimensions(), (2, 4));
        assert_eq!(carver.step(), Progress::Working);
        assert_eq!(carver.dimensions(), (2, 8));
        assert_eq!(carver.step(), Progress::Done);
        assert_eq!(carver.dimensions(), (2, 9));
    }

    #[test]
    fn the_other_field_is_dropped_once_one_dimension_is_done() {
        let mut carver = SeamCarver::new(PixelGrid::filled(6, 6, GRAY), 4, 5).unwrap();
        carver.step();
        carver.step();
        assert_eq!(carver.dimensions(), (4, 6));
        assert!(carver.horizontal.is_some());
        carver.step();
        assert_eq!(carver.dimensions(), (4, 5));
        assert!(carver.horizontal.is_none());
        assert!(carver.vertical.is_some());
    }

    #[test]
    fn a_batch_is_never_empty() {
        let pixels = PixelMap::new(3, 4);
        let energy = calculate_energy(&pixels);
        let mut field = calculate_cost(&pixels, &energy, Orientation::Vertical);
        assert_eq!(pick_batch(&mut field, 9).len(), 4);

        // Every terminal spent, as when all costs have saturated.
        let mut field = calculate_cost(&pixels, &energy, Orientation::Vertical);
        (0..4).for_each(|pos| field.exclude_terminal(pos));
        let seams = pick_batch(&mut field, 2);
        assert_eq!(seams.len(), 1);
        assert_eq!(seams[0].positions(), &[0, 0, 0]);
    }

    #[test]
    fn bad_targets_and_empty_grids_are_refused() {
        assert_eq!(
            resize(PixelGrid::new(3, 3), 0, 5).unwrap_err(),
            ResizeError::InvalidDimension {
                height: 0,
                width: 5
            }
        );
        assert_eq!(
            resize(PixelGrid::new(0, 3), 2, 2).unwrap_err(),
            ResizeError::DegenerateInput {
                height: 0,
                width: 3
            }
        );
    }
}
