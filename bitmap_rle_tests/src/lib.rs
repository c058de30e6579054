// Copyright 2025 the Bitmap RLE Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bitmap RLE tests.

// LINEBENDER LINT SET - lib.rs - v2
// See https://linebender.org/wiki/canonical-lints/
// These lints aren't included in Cargo.toml because they
// shouldn't apply to examples and tests
#![warn(unused_crate_dependencies)]
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![allow(missing_docs, clippy::missing_assert_message)]

use bitmap_rle::color::Rgba8;
use bitmap_rle::palette::Palette;
use bitmap_rle::pixmap::Pixmap;
use bitmap_rle::Grid;

// Only used by the tests under `tests/`.
use png as _;

/// A 9x8 heart, with a run of identical rows in the middle.
pub const HEART: [&str; 8] = [
    ".xx...xx.",
    "xxxx.xxxx",
    "xxxxxxxxx",
    "xxxxxxxxx",
    "xxxxxxxxx",
    ".xxxxxxx.",
    "..xxxxx..",
    "...xxx...",
];

/// [`HEART`], encoded.
pub const HEART_ENCODED: &str = ".2x3.2x./4x.4x/9x3/.7x./2.5x2./3.3x3.";

/// Number of `x` cells in [`HEART`].
pub const HEART_CELLS: usize = 54;

/// Colors for [`HEART`], in the palette file format.
pub const HEART_PALETTE: &str = "\
# transparent background
. rgba(0, 0, 0, 0)

# red heart
x rgba(200, 30, 40, 255)
";

pub const HEART_RED: Rgba8 = Rgba8 {
    r: 200,
    g: 30,
    b: 40,
    a: 255,
};

pub fn heart() -> Grid {
    Grid::from_rows(HEART).unwrap()
}

pub fn heart_palette() -> Palette {
    Palette::parse(HEART_PALETTE).unwrap()
}

/// Count the pixels of `pixmap` equal to `color`.
pub fn count_pixels(pixmap: &Pixmap, color: Rgba8) -> usize {
    pixmap.data().iter().filter(|pixel| **pixel == color).count()
}
