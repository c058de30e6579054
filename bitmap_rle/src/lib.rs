// Copyright 2025 the Bitmap RLE Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Run-length encoding for small color-index bitmaps.
//!
//! A bitmap is a rectangular [`Grid`] of [`Symbol`]s, where each symbol is a key into a
//! [`Palette`](palette::Palette). Grids are stored and shipped as compact strings:
//!
//! ```text
//! grid        encoded
//! aaa
//! aaa   --->  3a2/3b
//! bbb
//! ```
//!
//! Each row is run-length encoded on its own (`aaa` becomes `3a`), and runs of identical
//! rows are folded into a single token with a trailing repeat count (`3a2`).
//! See the [`codec`] module for the exact grammar.
//!
//! # Usage
//!
//! ```
//! use bitmap_rle::{codec, Grid};
//!
//! let grid = Grid::from_rows(["aaa", "aaa", "bbb"]).unwrap();
//! let encoded = codec::encode(&grid);
//! assert_eq!(encoded, "3a2/3b");
//! assert_eq!(codec::decode(&encoded).unwrap(), grid);
//! ```
//!
//! Decoded grids can be painted into a [`Pixmap`](pixmap::Pixmap) with
//! [`raster::rasterize`], and post-processed with the per-pixel [`filter`]s.
//!
//! # Features
//!
//! - `png` (enabled by default): Allow exporting [`Pixmap`](pixmap::Pixmap)s as PNG images.

// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod codec;
pub mod filter;
pub mod grid;
pub mod palette;
pub mod pixmap;
pub mod raster;
pub mod symbol;

pub use grid::Grid;
pub use peniko;
pub use peniko::color;
pub use symbol::Symbol;

use codec::DecodeError;
use grid::ShapeError;
use palette::PaletteEntryError;
use symbol::SymbolError;

/// Errors that can occur while building, decoding or rasterizing a bitmap.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// A character in a grid row can't be used as a symbol.
    #[error("Invalid symbol at row {row}, column {column}")]
    InvalidSymbol {
        row: usize,
        column: usize,
        #[source]
        source: SymbolError,
    },
    /// The rows don't form a non-empty rectangle.
    #[error(transparent)]
    Shape(#[from] ShapeError),
    /// A row token of an encoded string violates the grammar.
    ///
    /// `token` is the 0-based index of the offending `/`-separated token.
    #[error("Malformed row token {token}")]
    Decode {
        token: usize,
        #[source]
        source: DecodeError,
    },
    /// A palette entry couldn't be read.
    ///
    /// `line` is the 1-based line of a palette file, or position in a list of entries.
    #[error("Invalid palette entry on line {line}")]
    PaletteEntry {
        line: usize,
        #[source]
        source: PaletteEntryError,
    },
    /// The grid uses a symbol the palette has no color for.
    #[error("No palette color for symbol `{symbol}` at ({x}, {y})")]
    MissingColor { symbol: Symbol, x: usize, y: usize },
    /// Rasterization was asked to paint cells zero pixels wide.
    #[error("Pixel size must be at least 1")]
    InvalidPixelSize,
    /// The rasterized bitmap wouldn't fit in a [`Pixmap`](pixmap::Pixmap).
    #[error("A {width}x{height} grid at pixel size {pixel_size} exceeds the maximum pixmap size")]
    TooLarge {
        width: usize,
        height: usize,
        pixel_size: u16,
    },
}

/// Shorthand for results of this crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
