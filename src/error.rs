// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use failure::Fail;

/// Everything that can stop a resize.  All of these are raised before
/// the grid is touched.
#[derive(Debug, Fail, PartialEq, Eq)]
pub enum ResizeError {
    /// A target dimension was zero.
    #[fail(
        display = "target size must be at least 1x1, got {}x{}",
        height, width
    )]
    InvalidDimension { height: usize, width: usize },

    /// The source grid has no pixels to carve.
    #[fail(display = "cannot carve a {}x{} image", height, width)]
    DegenerateInput { height: usize, width: usize },

    /// A raw color buffer did not match the dimensions it came with.
    #[fail(
        display = "expected {} pixels in the buffer, found {}",
        expected, actual
    )]
    BufferSize { expected: usize, actual: usize },
}
