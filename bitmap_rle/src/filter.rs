// Copyright 2025 the Bitmap RLE Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-pixel image filters.
//!
//! Filters look at one pixel at a time, so they run in a single pass over the pixmap and can
//! be applied in place.

use core::str::FromStr;

use peniko::color::Rgba8;
use thiserror::Error;

use crate::pixmap::Pixmap;

/// What a [`Filter::Mask`] turns fully transparent pixels into.
const MASK_BACKGROUND: Rgba8 = Rgba8 {
    r: 255,
    g: 255,
    b: 255,
    a: 0,
};

/// A filter applied to every pixel of a [`Pixmap`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Filter {
    /// Replace every pixel that isn't fully transparent with the given color, and every fully
    /// transparent pixel with transparent white. Produces a silhouette.
    Mask(Rgba8),
    /// Replace the red, green and blue components with their mean, keeping alpha.
    Grayscale,
}

impl Filter {
    /// Color used by [`Filter::mask`].
    pub const DEFAULT_MASK_COLOR: Rgba8 = Rgba8 {
        r: 0,
        g: 0,
        b: 0,
        a: 255,
    };

    /// An opaque black silhouette mask.
    pub const fn mask() -> Self {
        Self::Mask(Self::DEFAULT_MASK_COLOR)
    }

    /// Filter a single pixel.
    pub fn filter_pixel(&self, pixel: Rgba8) -> Rgba8 {
        match *self {
            Self::Mask(color) => {
                if pixel.a > 0 {
                    color
                } else {
                    MASK_BACKGROUND
                }
            }
            Self::Grayscale => {
                let sum = u16::from(pixel.r) + u16::from(pixel.g) + u16::from(pixel.b);
                // Round to nearest: floor(sum / 3 + 1 / 2).
                let mean = u8::try_from((2 * sum + 3) / 6).unwrap_or(u8::MAX);
                Rgba8 {
                    r: mean,
                    g: mean,
                    b: mean,
                    a: pixel.a,
                }
            }
        }
    }

    /// Return a filtered copy of `pixmap`.
    pub fn apply(&self, pixmap: &Pixmap) -> Pixmap {
        let mut out = pixmap.clone();
        self.apply_in_place(&mut out);
        out
    }

    /// Filter every pixel of `pixmap`.
    pub fn apply_in_place(&self, pixmap: &mut Pixmap) {
        for pixel in pixmap.data_mut() {
            *pixel = self.filter_pixel(*pixel);
        }
    }
}

/// A filter name that isn't known.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown filter `{0}`, expected `mask` or `grayscale`")]
pub struct UnknownFilter(pub String);

impl FromStr for Filter {
    type Err = UnknownFilter;

    /// Parse a filter name. `mask` gives [`Filter::mask`].
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        if name.eq_ignore_ascii_case("mask") {
            Ok(Self::mask())
        } else if name.eq_ignore_ascii_case("grayscale") {
            Ok(Self::Grayscale)
        } else {
            Err(UnknownFilter(name.to_string()))
        }
    }
}
