// Copyright 2025 the Bitmap RLE Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mapping symbols to colors.

use std::collections::HashMap;

use peniko::color::Rgba8;
use thiserror::Error;

use crate::symbol::{Symbol, SymbolError};
use crate::Error;

/// A color string that isn't of the form `rgba(R, G, B, A)`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// The string doesn't follow the `rgba(R, G, B, A)` syntax.
    #[error("Invalid RGBA format `{0}`")]
    Format(String),
    /// A component is larger than 255.
    #[error("The {channel} component of `{input}` is out of range 0..=255")]
    OutOfRange {
        input: String,
        channel: &'static str,
    },
}

/// Parse a color of the exact form `rgba(R, G, B, A)`.
///
/// All four components are decimal integers in `0..=255`; alpha `255` is opaque. Each comma
/// must be followed by at least one space. Nothing may precede or follow the color.
///
/// ```
/// use bitmap_rle::palette::parse_rgba;
/// use bitmap_rle::color::Rgba8;
///
/// assert_eq!(
///     parse_rgba("rgba(255, 128, 0, 255)").unwrap(),
///     Rgba8 { r: 255, g: 128, b: 0, a: 255 }
/// );
/// assert!(parse_rgba("rgba(255,128,0,255)").is_err());
/// ```
pub fn parse_rgba(input: &str) -> Result<Rgba8, ColorParseError> {
    let format_error = || ColorParseError::Format(input.to_string());

    let body = input
        .strip_prefix("rgba(")
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(format_error)?;

    const CHANNELS: [&str; 4] = ["red", "green", "blue", "alpha"];
    let mut components = [0_u8; 4];
    let mut parts = body.split(',');
    for (index, channel) in CHANNELS.into_iter().enumerate() {
        let part = parts.next().ok_or_else(format_error)?;
        let digits = if index == 0 {
            part
        } else {
            part.strip_prefix(' ')
                .ok_or_else(format_error)?
                .trim_start_matches(char::is_whitespace)
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(format_error());
        }
        components[index] = digits
            .parse::<u8>()
            .map_err(|_| ColorParseError::OutOfRange {
                input: input.to_string(),
                channel,
            })?;
    }
    if parts.next().is_some() {
        return Err(format_error());
    }

    let [r, g, b, a] = components;
    Ok(Rgba8 { r, g, b, a })
}

/// The problem with a single palette file entry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PaletteEntryError {
    /// The line has a symbol but no color.
    #[error("Missing color after the symbol")]
    MissingColor,
    /// The symbol is reserved by the encoding.
    #[error(transparent)]
    Symbol(#[from] SymbolError),
    /// The color couldn't be parsed.
    #[error(transparent)]
    Color(#[from] ColorParseError),
}

/// Colors for the symbols of a bitmap.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Palette {
    colors: HashMap<Symbol, Rgba8>,
}

impl Palette {
    /// Create an empty palette.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a palette from `(symbol, "rgba(R, G, B, A)")` pairs.
    ///
    /// Errors report the 1-based position of the offending pair as their line.
    pub fn from_css_entries<'a, I>(entries: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (char, &'a str)>,
    {
        let mut palette = Self::new();
        for (index, (ch, color)) in entries.into_iter().enumerate() {
            let entry_error = |source: PaletteEntryError| Error::PaletteEntry {
                line: index + 1,
                source,
            };
            let symbol = Symbol::new(ch).map_err(|err| entry_error(err.into()))?;
            palette
                .insert_css(symbol, color)
                .map_err(|err| entry_error(err.into()))?;
        }
        Ok(palette)
    }

    /// Read a palette file.
    ///
    /// Each non-blank line holds a symbol, whitespace, and an `rgba(R, G, B, A)` color.
    /// The symbol is the first character of the line, so a line starting with two spaces
    /// gives the space symbol a color. Lines starting with `#` are comments, so `#` itself
    /// can't be given a color here. Later entries replace earlier ones for the same symbol.
    ///
    /// ```text
    /// # sky and grass
    /// . rgba(135, 206, 235, 255)
    /// g rgba(34, 139, 34, 255)
    /// ```
    pub fn parse(text: &str) -> Result<Self, Error> {
        let mut palette = Self::new();
        for (index, line) in text.lines().enumerate() {
            let line = line.trim_end();
            if line.trim_start().is_empty() || line.starts_with('#') {
                continue;
            }
            let entry_error = |source: PaletteEntryError| Error::PaletteEntry {
                line: index + 1,
                source,
            };

            let mut chars = line.chars();
            let Some(ch) = chars.next() else {
                continue;
            };
            let rest = chars.as_str();
            let color = rest.trim_start();
            if color.is_empty() || color.len() == rest.len() {
                return Err(entry_error(PaletteEntryError::MissingColor));
            }
            let symbol = Symbol::new(ch).map_err(|err| entry_error(err.into()))?;
            let color = parse_rgba(color).map_err(|err| entry_error(err.into()))?;
            if palette.insert(symbol, color).is_some() {
                log::warn!("Palette line {} redefines symbol `{symbol}`", index + 1);
            }
        }
        Ok(palette)
    }

    /// Set the color of `symbol`, returning its previous color.
    pub fn insert(&mut self, symbol: Symbol, color: Rgba8) -> Option<Rgba8> {
        self.colors.insert(symbol, color)
    }

    /// Set the color of `symbol` from an `rgba(R, G, B, A)` string.
    pub fn insert_css(&mut self, symbol: Symbol, color: &str) -> Result<(), ColorParseError> {
        self.insert(symbol, parse_rgba(color)?);
        Ok(())
    }

    /// Return the color of `symbol`.
    pub fn get(&self, symbol: Symbol) -> Option<Rgba8> {
        self.colors.get(&symbol).copied()
    }

    /// Return the number of symbols with a color.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns whether no symbol has a color.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}
