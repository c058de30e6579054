// Copyright 2025 the Bitmap RLE Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The alphabet of grid cells.

use core::fmt;

use thiserror::Error;

/// Separates row tokens in an encoded bitmap.
pub const ROW_SEPARATOR: char = '/';

/// A single grid cell, usually a key into a [`Palette`](crate::palette::Palette).
///
/// Any `char` is a valid symbol except ASCII digits, which the encoding reserves for
/// run lengths, and [`ROW_SEPARATOR`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol(char);

impl Symbol {
    /// Check that `ch` can be used as a symbol.
    pub fn new(ch: char) -> Result<Self, SymbolError> {
        if ch.is_ascii_digit() {
            Err(SymbolError::Digit(ch))
        } else if ch == ROW_SEPARATOR {
            Err(SymbolError::RowSeparator)
        } else {
            Ok(Self(ch))
        }
    }

    /// The character this symbol is written as.
    pub const fn as_char(self) -> char {
        self.0
    }
}

impl TryFrom<char> for Symbol {
    type Error = SymbolError;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        Self::new(ch)
    }
}

impl From<Symbol> for char {
    fn from(symbol: Symbol) -> Self {
        symbol.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A character that is reserved by the encoding.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolError {
    /// ASCII digits encode run lengths and repeat counts.
    #[error("Digit `{0}` is reserved for run lengths")]
    Digit(char),
    /// `/` separates rows.
    #[error("`/` is reserved as the row separator")]
    RowSeparator,
}
