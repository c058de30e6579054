// Copyright 2025 the Bitmap RLE Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rasterizing, filtering and exporting bitmaps.

use bitmap_rle::color::Rgba8;
use bitmap_rle::filter::Filter;
use bitmap_rle::palette::Palette;
use bitmap_rle::pixmap::{Pixmap, TRANSPARENT};
use bitmap_rle::raster::{rasterize, rasterize_encoded, RasterOptions};
use bitmap_rle::{Error, Symbol};
use bitmap_rle_tests::{
    count_pixels, heart, heart_palette, HEART_CELLS, HEART_ENCODED, HEART_RED,
};

fn render_heart(pixel_size: u16) -> Pixmap {
    rasterize(&heart(), &heart_palette(), &RasterOptions { pixel_size }).unwrap()
}

#[test]
fn heart_blocks() {
    let pixmap = render_heart(3);
    assert_eq!((pixmap.width(), pixmap.height()), (27, 24));
    assert_eq!(count_pixels(&pixmap, HEART_RED), HEART_CELLS * 9);
    assert_eq!(
        count_pixels(&pixmap, TRANSPARENT),
        27 * 24 - HEART_CELLS * 9
    );
    // The top left cell is background, the one to its right is red.
    assert_eq!(pixmap.sample(2, 2), TRANSPARENT);
    assert_eq!(pixmap.sample(3, 0), HEART_RED);
    assert_eq!(pixmap.sample(5, 2), HEART_RED);
}

#[test]
fn encoded_and_decoded_rasterize_alike() {
    let options = RasterOptions::default();
    let from_string = rasterize_encoded(HEART_ENCODED, &heart_palette(), &options).unwrap();
    assert_eq!(from_string, render_heart(options.pixel_size));
}

#[test]
fn missing_palette_entry() {
    let palette = Palette::parse(". rgba(0, 0, 0, 0)").unwrap();
    let err = rasterize(&heart(), &palette, &RasterOptions::default()).unwrap_err();
    let missing = Symbol::new('x').unwrap();
    assert!(matches!(err, Error::MissingColor { symbol, x: 1, y: 0 } if symbol == missing));
}

#[test]
fn mask_silhouette() {
    let pixmap = render_heart(1);
    let blue = Rgba8 {
        r: 0,
        g: 0,
        b: 255,
        a: 255,
    };
    let masked = Filter::Mask(blue).apply(&pixmap);
    assert_eq!(count_pixels(&masked, blue), HEART_CELLS);
    let background = Rgba8 {
        r: 255,
        g: 255,
        b: 255,
        a: 0,
    };
    assert_eq!(count_pixels(&masked, background), 9 * 8 - HEART_CELLS);
}

#[test]
fn grayscale_heart() {
    let mut pixmap = render_heart(1);
    Filter::Grayscale.apply_in_place(&mut pixmap);
    // (200 + 30 + 40) / 3 = 90
    let gray = Rgba8 {
        r: 90,
        g: 90,
        b: 90,
        a: 255,
    };
    assert_eq!(count_pixels(&pixmap, gray), HEART_CELLS);
    assert_eq!(count_pixels(&pixmap, TRANSPARENT), 9 * 8 - HEART_CELLS);
}

#[test]
fn png_export() {
    let pixmap = render_heart(2);
    let expected = pixmap.data_as_u8_slice().to_vec();
    let encoded = pixmap.into_png().unwrap();

    let decoder = png::Decoder::new(encoded.as_slice());
    let mut reader = decoder.read_info().unwrap();
    assert_eq!(reader.info().size(), (18, 16));
    assert_eq!(
        reader.output_color_type(),
        (png::ColorType::Rgba, png::BitDepth::Eight)
    );
    let mut buf = vec![0; reader.output_buffer_size()];
    reader.next_frame(&mut buf).unwrap();
    assert_eq!(buf, expected);
}
