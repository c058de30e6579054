// Copyright 2025 the Bitmap RLE Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Encoding grids to and from their compact string form.
//!
//! ## Grammar
//!
//! ```text
//! encoded = token ( "/" token )*
//! token   = run+ repeat?
//! run     = count? symbol
//! count   = digit+          ; number of times `symbol` repeats, at least 1
//! repeat  = digit+          ; number of identical rows this token stands for
//! ```
//!
//! A `count` is always immediately followed by the symbol it repeats, and symbols are never
//! digits (see [`Symbol`]). So the row part of a token always ends with a symbol, and any
//! digits at the very end of a token belong to `repeat`. Decoding takes the longest trailing
//! digit run as the repeat count, which is unambiguous.
//!
//! The encoder writes a `count` only for runs of two or more, and a `repeat` only for two or
//! more rows. The decoder also accepts explicit counts of 1.
//!
//! ## Row folding
//!
//! While encoding, consecutive rows are compared by their symbols rather than by their
//! encoded form, and each row is run-length encoded only when it is written out.

use thiserror::Error;

use crate::grid::{Grid, GridBuilder};
use crate::symbol::{Symbol, SymbolError, ROW_SEPARATOR};
use crate::Error;

/// Bounds on the size of decoded grids.
///
/// Encoded bitmaps are tiny compared to what they expand to (`65535a` is six bytes), so
/// decoding untrusted input should set limits that suit the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Limits {
    /// Maximum number of symbols in a row.
    pub max_width: usize,
    /// Maximum number of rows.
    pub max_height: usize,
    /// Maximum number of symbols in the whole grid.
    pub max_cells: usize,
}

impl Limits {
    /// Default for [`max_cells`](Self::max_cells): 4096 × 4096 symbols, 64 MiB of grid.
    pub const DEFAULT_MAX_CELLS: usize = 1 << 24;
}

impl Default for Limits {
    /// Rows and columns up to the largest [`Pixmap`](crate::pixmap::Pixmap) side at pixel
    /// size 1, and at most [`DEFAULT_MAX_CELLS`](Self::DEFAULT_MAX_CELLS) symbols in total.
    fn default() -> Self {
        Self {
            max_width: usize::from(u16::MAX),
            max_height: usize::from(u16::MAX),
            max_cells: Self::DEFAULT_MAX_CELLS,
        }
    }
}

/// A row token that doesn't follow the grammar.
///
/// Offsets are byte offsets into the token.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The token has no symbols.
    #[error("Row has no symbols")]
    EmptyRow,
    /// A run length isn't followed by a symbol.
    #[error("Run length at offset {offset} isn't followed by a symbol")]
    DanglingCount { offset: usize },
    /// A run length of zero.
    #[error("Run length at offset {offset} is zero")]
    ZeroRun { offset: usize },
    /// The row would be wider than the limit.
    #[error("Run at offset {offset} makes the row wider than {limit} symbols")]
    RunTooLong { offset: usize, limit: usize },
    /// A repeat count of zero.
    #[error("Repeat count is zero")]
    ZeroRepeat,
    /// The grid would be taller than the limit.
    #[error("Repeat count makes the grid taller than {limit} rows")]
    RepeatTooLong { limit: usize },
    /// The grid would hold more symbols than the limit.
    #[error("Row makes the grid larger than {limit} symbols")]
    TooManyCells { limit: usize },
    /// A reserved character in symbol position.
    #[error("Invalid symbol at offset {offset}")]
    InvalidSymbol {
        offset: usize,
        #[source]
        source: SymbolError,
    },
}

/// Run-length encode a single row.
///
/// ```
/// use bitmap_rle::{codec, Grid};
///
/// let grid = Grid::from_rows(["aaab"]).unwrap();
/// assert_eq!(codec::encode_row(grid.row(0)), "3ab");
/// ```
pub fn encode_row(row: &[Symbol]) -> String {
    let mut out = String::new();
    encode_row_into(&mut out, row);
    out
}

fn encode_row_into(out: &mut String, row: &[Symbol]) {
    let mut symbols = row.iter().copied();
    let Some(mut current) = symbols.next() else {
        return;
    };
    let mut run = 1_usize;
    for symbol in symbols {
        if symbol == current {
            run += 1;
        } else {
            push_run(out, current, run);
            current = symbol;
            run = 1;
        }
    }
    push_run(out, current, run);
}

fn push_run(out: &mut String, symbol: Symbol, run: usize) {
    if run > 1 {
        out.push_str(&run.to_string());
    }
    out.push(symbol.as_char());
}

/// Decode a single run-length encoded row, using the default [`Limits`].
pub fn decode_row(row: &str) -> Result<Vec<Symbol>, DecodeError> {
    decode_row_with_limits(row, &Limits::default())
}

/// Decode a single run-length encoded row.
///
/// The row must not contain a repeat count; see [`decode`] for whole bitmaps.
pub fn decode_row_with_limits(row: &str, limits: &Limits) -> Result<Vec<Symbol>, DecodeError> {
    let mut out = Vec::new();
    // Offset of the first digit and the value accumulated so far.
    let mut pending: Option<(usize, usize)> = None;
    for (offset, ch) in row.char_indices() {
        if let Some(digit) = ch.to_digit(10) {
            let (start, count) = pending.unwrap_or((offset, 0));
            let count = count
                .checked_mul(10)
                .and_then(|count| count.checked_add(digit as usize))
                .ok_or(DecodeError::RunTooLong {
                    offset: start,
                    limit: limits.max_width,
                })?;
            pending = Some((start, count));
            continue;
        }

        let symbol =
            Symbol::new(ch).map_err(|source| DecodeError::InvalidSymbol { offset, source })?;
        let (start, count) = pending.take().unwrap_or((offset, 1));
        if count == 0 {
            return Err(DecodeError::ZeroRun { offset: start });
        }
        if count > limits.max_width - out.len().min(limits.max_width) {
            return Err(DecodeError::RunTooLong {
                offset: start,
                limit: limits.max_width,
            });
        }
        out.extend(core::iter::repeat(symbol).take(count));
    }

    if let Some((offset, _)) = pending {
        return Err(DecodeError::DanglingCount { offset });
    }
    if out.is_empty() {
        return Err(DecodeError::EmptyRow);
    }
    Ok(out)
}

/// Encode a grid, folding runs of identical rows.
///
/// ```
/// use bitmap_rle::{codec, Grid};
///
/// let grid = Grid::from_rows(["ab", "ab", "ab", "ba"]).unwrap();
/// assert_eq!(codec::encode(&grid), "ab3/ba");
/// ```
pub fn encode(grid: &Grid) -> String {
    let mut out = String::new();
    let mut rows = grid.rows();
    let Some(mut previous) = rows.next() else {
        return out;
    };
    let mut repeat = 1_usize;
    for row in rows {
        if row == previous {
            repeat += 1;
        } else {
            push_token(&mut out, previous, repeat);
            out.push(ROW_SEPARATOR);
            previous = row;
            repeat = 1;
        }
    }
    push_token(&mut out, previous, repeat);

    log::debug!(
        "Encoded {}x{} grid into {} bytes",
        grid.width(),
        grid.height(),
        out.len()
    );
    out
}

fn push_token(out: &mut String, row: &[Symbol], repeat: usize) {
    encode_row_into(out, row);
    if repeat > 1 {
        out.push_str(&repeat.to_string());
    }
}

/// Build a grid from rows given as strings and encode it.
///
/// Fails if the rows don't form a valid [`Grid`].
pub fn encode_rows<I, R>(rows: I) -> Result<String, Error>
where
    I: IntoIterator<Item = R>,
    R: AsRef<str>,
{
    Ok(encode(&Grid::from_rows(rows)?))
}

/// Decode an encoded bitmap, using the default [`Limits`].
///
/// ```
/// use bitmap_rle::codec;
///
/// let grid = codec::decode("3a2/3b").unwrap();
/// assert_eq!(grid.to_strings(), ["aaa", "aaa", "bbb"]);
/// ```
pub fn decode(encoded: &str) -> Result<Grid, Error> {
    decode_with_limits(encoded, &Limits::default())
}

/// Decode an encoded bitmap.
pub fn decode_with_limits(encoded: &str, limits: &Limits) -> Result<Grid, Error> {
    let mut builder = GridBuilder::default();
    for (token_index, token) in encoded.split(ROW_SEPARATOR).enumerate() {
        let decode_error = |source: DecodeError| Error::Decode {
            token: token_index,
            source,
        };

        let (row, repeat) = split_repeat(token, limits).map_err(decode_error)?;
        if repeat == 1 && row.len() < token.len() {
            log::warn!("Row token {token_index} has an explicit repeat count of 1");
        }
        if repeat > limits.max_height - builder.height().min(limits.max_height) {
            return Err(decode_error(DecodeError::RepeatTooLong {
                limit: limits.max_height,
            }));
        }

        let symbols = decode_row_with_limits(row, limits).map_err(decode_error)?;
        let cells = (builder.height() + repeat).checked_mul(symbols.len());
        if cells.map_or(true, |cells| cells > limits.max_cells) {
            return Err(decode_error(DecodeError::TooManyCells {
                limit: limits.max_cells,
            }));
        }
        builder.push_repeated(&symbols, repeat)?;
    }

    let grid = builder.finish()?;
    log::debug!(
        "Decoded {} bytes into {}x{} grid",
        encoded.len(),
        grid.width(),
        grid.height()
    );
    Ok(grid)
}

/// Split a token into its row part and repeat count.
fn split_repeat<'a>(token: &'a str, limits: &Limits) -> Result<(&'a str, usize), DecodeError> {
    let row = token.trim_end_matches(|ch: char| ch.is_ascii_digit());
    let digits = &token[row.len()..];
    if row.is_empty() {
        return Err(DecodeError::EmptyRow);
    }
    if digits.is_empty() {
        return Ok((row, 1));
    }
    // Only ASCII digits remain, so parsing can only fail by overflowing.
    let repeat = digits
        .parse::<usize>()
        .map_err(|_| DecodeError::RepeatTooLong {
            limit: limits.max_height,
        })?;
    if repeat == 0 {
        return Err(DecodeError::ZeroRepeat);
    }
    Ok((row, repeat))
}
