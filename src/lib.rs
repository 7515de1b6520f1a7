// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

// #![deny(missing_docs)]

mod ternary;

pub mod twodmap;
pub mod flipper;
pub use flipper::Orientation;

pub mod error;
pub use error::ResizeError;

pub mod pixelgrid;
pub use pixelgrid::{Color, PixelGrid};

pub mod pixelpairs;
pub mod energy;
pub use energy::calculate_energy;

pub mod seamcost;
pub use seamcost::{calculate_cost, SeamCostField};

pub mod seamfinder;
pub use seamfinder::{Seam, SeamFinder};

pub mod editor;
pub mod incremental;

pub mod seamcarver;
pub use seamcarver::{resize, Progress, SeamCarver};

pub mod imaging;
pub use imaging::{grid_from_image, grid_to_image};
