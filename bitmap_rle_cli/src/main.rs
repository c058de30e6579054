// Copyright 2025 the Bitmap RLE Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Encode, decode and render run-length encoded bitmaps from the shell.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use bitmap_rle::filter::Filter;
use bitmap_rle::palette::{parse_rgba, Palette};
use bitmap_rle::raster::{self, RasterOptions};
use bitmap_rle::{codec, Grid};
use clap::{Parser, Subcommand};

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    match args.command {
        Command::Encode { input } => {
            let text = read_input(input.as_deref())?;
            println!("{}", codec::encode(&parse_grid(&text)?));
        }
        Command::Decode { input } => {
            let text = read_input(input.as_deref())?;
            println!("{}", decode_bitmap(&text)?);
        }
        Command::Render(render_args) => render(&render_args)?,
    }
    Ok(())
}

fn render(args: &RenderArgs) -> Result<()> {
    let palette_text = fs::read_to_string(&args.palette)
        .with_context(|| format!("Couldn't read palette {}", args.palette.display()))?;
    let palette = Palette::parse(&palette_text)
        .with_context(|| format!("Couldn't parse palette {}", args.palette.display()))?;
    if palette.is_empty() {
        log::warn!("Palette {} defines no colors", args.palette.display());
    }

    let text = read_input(args.input.as_deref())?;
    let grid = if args.grid {
        parse_grid(&text)?
    } else {
        decode_bitmap(&text)?
    };

    let options = RasterOptions {
        pixel_size: args.pixel_size,
    };
    let mut pixmap = raster::rasterize(&grid, &palette, &options)?;

    if let Some(filter) = &args.filter {
        let filter = match filter.parse::<Filter>()? {
            Filter::Mask(_) => match &args.mask_color {
                Some(color) => Filter::Mask(parse_rgba(color)?),
                None => Filter::mask(),
            },
            filter => filter,
        };
        filter.apply_in_place(&mut pixmap);
    } else if args.mask_color.is_some() {
        bail!("`--mask-color` needs `--filter mask`");
    }

    let (width, height) = (pixmap.width(), pixmap.height());
    let png = pixmap.into_png()?;
    fs::write(&args.output, png)
        .with_context(|| format!("Couldn't write {}", args.output.display()))?;
    println!("Wrote result ({width}x{height}) to {:?}", args.output);
    Ok(())
}

/// Read a grid given as one row per line.
///
/// Spaces are symbols, so lines are taken as they are.
fn parse_grid(text: &str) -> Result<Grid> {
    Grid::from_rows(text.lines()).context("Input isn't a valid grid")
}

/// Decode an encoded bitmap, ignoring the line break it was saved with.
fn decode_bitmap(text: &str) -> Result<Grid> {
    codec::decode(text.trim_end_matches(['\n', '\r'])).context("Couldn't decode bitmap")
}

/// Read the whole of `path`, or standard input if there is no path.
fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Couldn't read input {}", path.display())),
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Couldn't read standard input")?;
            Ok(text)
        }
    }
}

#[derive(Parser, Debug)]
#[command(about, long_about = None, bin_name = "bitmap-rle")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Encode a grid given as one row per line
    Encode {
        /// File to read the grid from, standard input if absent
        input: Option<PathBuf>,
    },
    /// Decode an encoded bitmap into one row per line
    Decode {
        /// File to read the encoded bitmap from, standard input if absent
        input: Option<PathBuf>,
    },
    /// Rasterize a bitmap into a PNG image
    Render(RenderArgs),
}

#[derive(clap::Args, Debug)]
struct RenderArgs {
    /// Palette file, one `<symbol> rgba(R, G, B, A)` entry per line
    #[arg(long, short)]
    palette: PathBuf,
    /// Side length in pixels of each bitmap cell
    #[arg(long, default_value_t = RasterOptions::default().pixel_size)]
    pixel_size: u16,
    /// Filter to apply after rasterizing: `mask` or `grayscale`
    #[arg(long)]
    filter: Option<String>,
    /// Color for `--filter mask`, as `rgba(R, G, B, A)`
    #[arg(long)]
    mask_color: Option<String>,
    /// Read the input as a grid (one row per line) instead of an encoded bitmap
    #[arg(long)]
    grid: bool,
    /// Where to write the PNG image
    #[arg(long, short)]
    output: PathBuf,
    /// File to read the bitmap from, standard input if absent
    input: Option<PathBuf>,
}
