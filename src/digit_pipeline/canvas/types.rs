//! Canvas snapshot types

use crate::digit_pipeline::common::error::{PipelineError, Result};

/// Bytes per RGBA pixel.
pub const BYTES_PER_PIXEL: usize = 4;

/// Intensity of the untouched drawing surface.
pub const WHITE: u8 = 255;

/// A snapshot of the drawing surface as a flat RGBA buffer.
///
/// Strokes are grayscale on a white ground, so the R, G and B channels of a
/// pixel are equal up to anti-aliasing noise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawCanvas {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
}

impl RawCanvas {
    /// Wraps an RGBA buffer of exactly `width * height * 4` bytes.
    pub fn new(width: usize, height: usize, pixels: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(PipelineError::InvalidDimensions(width, height));
        }

        let expected = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(BYTES_PER_PIXEL))
            .ok_or(PipelineError::InvalidDimensions(width, height))?;

        if pixels.len() != expected {
            return Err(PipelineError::InvalidBufferLength {
                expected,
                actual: pixels.len(),
            });
        }

        Ok(Self { width, height, pixels })
    }

    /// An opaque all-white canvas.
    pub fn blank(width: usize, height: usize) -> Result<Self> {
        let len = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(BYTES_PER_PIXEL))
            .ok_or(PipelineError::InvalidDimensions(width, height))?;
        Self::new(width, height, vec![WHITE; len])
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// The `[r, g, b, a]` bytes at `(x, y)`.
    ///
    /// Panics if the coordinate is outside the canvas.
    pub fn rgba(&self, x: usize, y: usize) -> [u8; 4] {
        let i = self.offset(x, y);
        [
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        ]
    }

    /// Grayscale value at `(x, y)`, read from the red channel.
    pub fn gray(&self, x: usize, y: usize) -> u8 {
        self.pixels[self.offset(x, y)]
    }

    /// Overwrites the pixel at `(x, y)` with an opaque gray level.
    pub(crate) fn set_gray(&mut self, x: usize, y: usize, value: u8) {
        let i = self.offset(x, y);
        self.pixels[i] = value;
        self.pixels[i + 1] = value;
        self.pixels[i + 2] = value;
        self.pixels[i + 3] = u8::MAX;
    }

    pub(crate) fn fill(&mut self, value: u8) {
        for px in self.pixels.chunks_exact_mut(BYTES_PER_PIXEL) {
            px.copy_from_slice(&[value, value, value, u8::MAX]);
        }
    }

    fn offset(&self, x: usize, y: usize) -> usize {
        assert!(x < self.width && y < self.height, "pixel ({x}, {y}) out of bounds");
        (y * self.width + x) * BYTES_PER_PIXEL
    }
}
