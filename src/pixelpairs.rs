// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the energy of a pixel pair
//!
//! Given two pixels, the energy between them is the distance between
//! the colors that make them up, measured channel by channel:
//!
//! ```text
//! d(p, q) = |Δr| + |Δg| + |Δb|
//! ```
//!
//! Summed over a pixel's eight neighbors this gives the pixel's
//! energy; it is also the unit the forward-energy cost is counted in.

use crate::pixelgrid::Color;

/// (Pixel, Pixel) -> Energy
#[inline]
pub fn energy_of_pair(p1: Color, p2: Color) -> u32 {
    p1.channels()
        .iter()
        .zip(p2.channels().iter())
        .map(|(&a, &b)| (i32::from(a) - i32::from(b)).abs() as u32)
        .sum()
}

/// Like `energy_of_pair`, but a missing pixel contributes nothing.
#[inline]
pub fn energy_of_maybe_pair(p1: Option<Color>, p2: Option<Color>) -> u32 {
    match (p1, p2) {
        (Some(a), Some(b)) => energy_of_pair(a, b),
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_energy_is_manhattan_distance() {
        let a = Color::new(10, 200, 30);
        let b = Color::new(20, 100, 30);
        assert_eq!(energy_of_pair(a, b), 110);
        assert_eq!(energy_of_pair(b, a), 110);
        assert_eq!(energy_of_pair(a, a), 0);
        assert_eq!(
            energy_of_pair(Color::new(0, 0, 0), Color::new(255, 255, 255)),
            765
        );
    }

    #[test]
    fn missing_pixels_cost_nothing() {
        let a = Some(Color::new(1, 1, 1));
        assert_eq!(energy_of_maybe_pair(a, None), 0);
        assert_eq!(energy_of_maybe_pair(None, a), 0);
        assert_eq!(energy_of_maybe_pair(a, Some(Color::new(0, 0, 0))), 3);
    }
}
