// Copyright 2025 the Bitmap RLE Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Painting grids into pixmaps.

use crate::codec;
use crate::grid::Grid;
use crate::palette::Palette;
use crate::pixmap::Pixmap;
use crate::Error;

/// Options which are relevant for rasterizing a grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RasterOptions {
    /// Side length, in pixels, of the square each grid cell is painted as.
    pub pixel_size: u16,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self { pixel_size: 2 }
    }
}

/// Paint each cell of `grid` as a `pixel_size` square of its palette color.
///
/// ```
/// use bitmap_rle::palette::Palette;
/// use bitmap_rle::raster::{rasterize, RasterOptions};
/// use bitmap_rle::Grid;
///
/// let grid = Grid::from_rows(["ab"]).unwrap();
/// let palette =
///     Palette::from_css_entries([('a', "rgba(0, 0, 0, 255)"), ('b', "rgba(255, 255, 255, 255)")])
///         .unwrap();
/// let pixmap = rasterize(&grid, &palette, &RasterOptions { pixel_size: 3 }).unwrap();
/// assert_eq!((pixmap.width(), pixmap.height()), (6, 3));
/// ```
pub fn rasterize(grid: &Grid, palette: &Palette, options: &RasterOptions) -> Result<Pixmap, Error> {
    let size = options.pixel_size;
    if size == 0 {
        return Err(Error::InvalidPixelSize);
    }
    let too_large = || Error::TooLarge {
        width: grid.width(),
        height: grid.height(),
        pixel_size: size,
    };
    let scale = |cells: usize| {
        u16::try_from(cells)
            .ok()
            .and_then(|cells| cells.checked_mul(size))
            .ok_or_else(too_large)
    };
    let mut pixmap = Pixmap::new(scale(grid.width())?, scale(grid.height())?);

    let step = usize::from(size);
    for ((y, row), py) in grid.rows().enumerate().zip((0..pixmap.height()).step_by(step)) {
        for ((x, &symbol), px) in row.iter().enumerate().zip((0..pixmap.width()).step_by(step)) {
            let color = palette
                .get(symbol)
                .ok_or(Error::MissingColor { symbol, x, y })?;
            pixmap.fill_rect(px, py, size, size, color);
        }
    }

    log::debug!(
        "Rasterized {}x{} grid into {}x{} pixmap",
        grid.width(),
        grid.height(),
        pixmap.width(),
        pixmap.height()
    );
    Ok(pixmap)
}

/// Decode `encoded` and rasterize the result.
///
/// See [`codec::decode`] and [`rasterize`].
pub fn rasterize_encoded(
    encoded: &str,
    palette: &Palette,
    options: &RasterOptions,
) -> Result<Pixmap, Error> {
    let grid = codec::decode(encoded)?;
    rasterize(&grid, palette, options)
}
