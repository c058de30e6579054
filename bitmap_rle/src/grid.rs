// Copyright 2025 the Bitmap RLE Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A rectangular grid of symbols.

use core::fmt;

use thiserror::Error;

use crate::symbol::Symbol;
use crate::Error;

/// A non-empty, rectangular grid of [`Symbol`]s.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    /// Number of symbols in each row. Always at least 1.
    width: usize,
    /// Number of rows. Always at least 1.
    height: usize,
    /// Symbols, stored in row-major order.
    symbols: Vec<Symbol>,
}

impl Grid {
    /// Build a grid from rows given as strings.
    ///
    /// ```
    /// use bitmap_rle::Grid;
    ///
    /// let grid = Grid::from_rows(["ab", "ba"]).unwrap();
    /// assert_eq!((grid.width(), grid.height()), (2, 2));
    /// ```
    pub fn from_rows<I, R>(rows: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<str>,
    {
        let mut builder = GridBuilder::default();
        for row in rows {
            builder.push_chars(row.as_ref().chars())?;
        }
        builder.finish()
    }

    /// Build a grid from rows given as sequences of characters.
    ///
    /// This is equivalent to joining each row into a string and calling
    /// [`from_rows`](Self::from_rows).
    pub fn from_char_rows<I, R>(rows: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = char>,
    {
        let mut builder = GridBuilder::default();
        for row in rows {
            builder.push_chars(row)?;
        }
        builder.finish()
    }

    /// Build a `width` by `height` grid where every cell is `symbol`.
    pub fn filled(width: usize, height: usize, symbol: Symbol) -> Result<Self, ShapeError> {
        if width == 0 || height == 0 {
            return Err(ShapeError::Empty);
        }
        let len = width
            .checked_mul(height)
            .ok_or(ShapeError::Overflow { width, height })?;
        Ok(Self {
            width,
            height,
            symbols: vec![symbol; len],
        })
    }

    /// Assemble a grid from already validated parts.
    pub(crate) fn from_parts(width: usize, height: usize, symbols: Vec<Symbol>) -> Self {
        debug_assert!(width > 0 && height > 0, "Grids are never empty");
        debug_assert_eq!(symbols.len(), width * height, "Grids are rectangular");
        Self {
            width,
            height,
            symbols,
        }
    }

    /// Return the number of symbols in each row.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Return the number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Return the symbol at the given position, or `None` if it is out of bounds.
    pub fn get(&self, x: usize, y: usize) -> Option<Symbol> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.symbols[y * self.width + x])
    }

    /// Return row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y` is not less than [`height`](Self::height).
    pub fn row(&self, y: usize) -> &[Symbol] {
        let start = y * self.width;
        &self.symbols[start..start + self.width]
    }

    /// Iterate over the rows from top to bottom.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[Symbol]> + '_ {
        self.symbols.chunks_exact(self.width)
    }

    /// Returns all symbols in row-major order.
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Return each row as a string.
    pub fn to_strings(&self) -> Vec<String> {
        self.rows()
            .map(|row| row.iter().copied().map(char::from).collect())
            .collect()
    }
}

impl fmt::Display for Grid {
    /// Writes one row per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.rows().enumerate() {
            if y > 0 {
                f.write_str("\n")?;
            }
            for symbol in row {
                fmt::Display::fmt(symbol, f)?;
            }
        }
        Ok(())
    }
}

/// Grid rows that don't form a non-empty rectangle.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeError {
    /// There were no rows, or no columns.
    #[error("A grid needs at least one row and one column")]
    Empty,
    /// `width * height` doesn't fit in a `usize`.
    #[error("A {width}x{height} grid has too many cells to address")]
    Overflow { width: usize, height: usize },
    /// Row `row` has a different length than the rows above it.
    #[error("Row {row} has {found} symbols, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// Accumulates rows while checking that they line up.
#[derive(Default)]
pub(crate) struct GridBuilder {
    width: Option<usize>,
    height: usize,
    symbols: Vec<Symbol>,
}

impl GridBuilder {
    fn push_chars(&mut self, row: impl IntoIterator<Item = char>) -> Result<(), Error> {
        let start = self.symbols.len();
        for (column, ch) in row.into_iter().enumerate() {
            let symbol = Symbol::new(ch).map_err(|source| Error::InvalidSymbol {
                row: self.height,
                column,
                source,
            })?;
            self.symbols.push(symbol);
        }
        self.end_row(start)?;
        Ok(())
    }

    /// Append `row` `count` times.
    pub(crate) fn push_repeated(&mut self, row: &[Symbol], count: usize) -> Result<(), ShapeError> {
        for _ in 0..count {
            let start = self.symbols.len();
            self.symbols.extend_from_slice(row);
            self.end_row(start)?;
        }
        Ok(())
    }

    /// Number of rows pushed so far.
    pub(crate) fn height(&self) -> usize {
        self.height
    }

    fn end_row(&mut self, start: usize) -> Result<(), ShapeError> {
        let found = self.symbols.len() - start;
        match self.width {
            None => self.width = Some(found),
            Some(expected) if expected != found => {
                return Err(ShapeError::Ragged {
                    row: self.height,
                    expected,
                    found,
                });
            }
            Some(_) => {}
        }
        self.height += 1;
        Ok(())
    }

    pub(crate) fn finish(self) -> Result<Grid, Error> {
        match self.width {
            Some(width) if width > 0 => Ok(Grid::from_parts(width, self.height, self.symbols)),
            _ => Err(ShapeError::Empty.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Grid, ShapeError};
    use crate::symbol::{Symbol, SymbolError};
    use crate::Error;

    #[test]
    fn rows_and_char_rows_agree() {
        let from_strings = Grid::from_rows(["abc", "cba"]).unwrap();
        let from_chars =
            Grid::from_char_rows([vec!['a', 'b', 'c'], vec!['c', 'b', 'a']]).unwrap();
        assert_eq!(from_strings, from_chars);
        assert_eq!(from_strings.to_strings(), ["abc", "cba"]);
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let err = Grid::from_rows(["abc", "ab"]).unwrap_err();
        assert!(matches!(
            err,
            Error::Shape(ShapeError::Ragged {
                row: 1,
                expected: 3,
                found: 2
            })
        ));
    }

    #[test]
    fn empty_grids_are_rejected() {
        let no_rows: [&str; 0] = [];
        assert!(matches!(
            Grid::from_rows(no_rows),
            Err(Error::Shape(ShapeError::Empty))
        ));
        assert!(matches!(
            Grid::from_rows(["", ""]),
            Err(Error::Shape(ShapeError::Empty))
        ));
        let symbol = Symbol::new('x').unwrap();
        assert_eq!(Grid::filled(0, 3, symbol), Err(ShapeError::Empty));
    }

    #[test]
    fn filled() {
        let symbol = Symbol::new('x').unwrap();
        let grid = Grid::filled(3, 2, symbol).unwrap();
        assert_eq!(grid.to_strings(), ["xxx", "xxx"]);
        assert_eq!(
            Grid::filled(usize::MAX, 2, symbol),
            Err(ShapeError::Overflow {
                width: usize::MAX,
                height: 2
            })
        );
    }

    #[test]
    fn digit_symbols_report_position() {
        let err = Grid::from_rows(["ab", "a1"]).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidSymbol {
                row: 1,
                column: 1,
                source: SymbolError::Digit('1')
            }
        ));
    }

    #[test]
    fn accessors() {
        let grid = Grid::from_rows(["ab", "cd", "ef"]).unwrap();
        assert_eq!(grid.get(1, 2).map(Symbol::as_char), Some('f'));
        assert_eq!(grid.get(2, 0), None);
        assert_eq!(grid.row(1), [Symbol::new('c').unwrap(), Symbol::new('d').unwrap()]);
        assert_eq!(grid.rows().len(), 3);
        assert_eq!(grid.to_string(), "ab\ncd\nef");
    }
}
