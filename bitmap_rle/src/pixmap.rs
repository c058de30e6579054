// Copyright 2025 the Bitmap RLE Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A simple pixmap type.

use peniko::color::Rgba8;

/// Fully transparent black, the initial value of every pixel.
pub const TRANSPARENT: Rgba8 = Rgba8 {
    r: 0,
    g: 0,
    b: 0,
    a: 0,
};

/// A pixmap of unpremultiplied RGBA8 values.
///
/// Colors are stored as given, the same way a browser canvas exposes its image data.
#[derive(Debug, Clone, PartialEq)]
pub struct Pixmap {
    /// Width of the pixmap in pixels.
    width: u16,
    /// Height of the pixmap in pixels.
    height: u16,
    /// Buffer of the pixmap in RGBA8 format.
    buf: Vec<Rgba8>,
}

impl Pixmap {
    /// Create a new pixmap with the given width and height in pixels.
    ///
    /// All pixels are initialized to transparent black.
    pub fn new(width: u16, height: u16) -> Self {
        let buf = vec![TRANSPARENT; usize::from(width) * usize::from(height)];
        Self { width, height, buf }
    }

    /// Create a new pixmap with the given RGBA8 data.
    ///
    /// The pixels are in row-major order.
    ///
    /// # Panics
    ///
    /// Panics if the `data` vector is not of length `width * height`.
    pub fn from_parts(data: Vec<Rgba8>, width: u16, height: u16) -> Self {
        assert_eq!(
            data.len(),
            usize::from(width) * usize::from(height),
            "Expected `data` to have length of exactly `width * height`"
        );
        Self {
            width,
            height,
            buf: data,
        }
    }

    /// Return the width of the pixmap.
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Return the height of the pixmap.
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Returns a reference to the underlying data.
    ///
    /// The pixels are in row-major order.
    pub fn data(&self) -> &[Rgba8] {
        &self.buf
    }

    /// Returns a mutable reference to the underlying data.
    ///
    /// The pixels are in row-major order.
    pub fn data_mut(&mut self) -> &mut [Rgba8] {
        &mut self.buf
    }

    /// Returns a reference to the underlying data as bytes.
    ///
    /// The pixels are in row-major order. Each pixel consists of four bytes in the order
    /// `[r, g, b, a]`.
    pub fn data_as_u8_slice(&self) -> &[u8] {
        bytemuck::cast_slice(&self.buf)
    }

    /// Sample a pixel from the pixmap.
    #[inline(always)]
    pub fn sample(&self, x: u16, y: u16) -> Rgba8 {
        self.buf[self.index(x, y)]
    }

    /// Set a pixel in the pixmap at the given coordinates.
    ///
    /// The coordinate system has its origin at the top-left corner, with `x` increasing to the
    /// right and `y` increasing downward.
    #[inline(always)]
    pub fn set_pixel(&mut self, x: u16, y: u16, pixel: Rgba8) {
        let idx = self.index(x, y);
        self.buf[idx] = pixel;
    }

    /// Set every pixel of the `width` by `height` rectangle at `(x, y)` to `pixel`.
    ///
    /// The rectangle is clipped to the pixmap.
    pub fn fill_rect(&mut self, x: u16, y: u16, width: u16, height: u16, pixel: Rgba8) {
        let x0 = usize::from(x.min(self.width));
        let x1 = usize::from(x.saturating_add(width).min(self.width));
        let y0 = y.min(self.height);
        let y1 = y.saturating_add(height).min(self.height);
        let stride = usize::from(self.width);
        for row in y0..y1 {
            let start = usize::from(row) * stride;
            self.buf[start + x0..start + x1].fill(pixel);
        }
    }

    /// Consume the pixmap, returning the data as the underlying [`Vec`] of RGBA8.
    ///
    /// The pixels are in row-major order.
    pub fn take(self) -> Vec<Rgba8> {
        self.buf
    }

    /// Return the current content of the pixmap as a PNG.
    #[cfg(feature = "png")]
    pub fn into_png(self) -> Result<Vec<u8>, png::EncodingError> {
        let mut data = Vec::new();
        let mut encoder =
            png::Encoder::new(&mut data, u32::from(self.width), u32::from(self.height));
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(self.data_as_u8_slice())?;
        writer.finish().map(|_| data)
    }

    #[inline(always)]
    fn index(&self, x: u16, y: u16) -> usize {
        usize::from(self.width) * usize::from(y) + usize::from(x)
    }
}
