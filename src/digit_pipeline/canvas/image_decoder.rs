//! Canvas decoder backed by the `image` crate.
//!
//! Turns an encoded snapshot of the drawing surface (PNG, or any format the
//! `image` crate was built with) into a [`RawCanvas`].

use tracing::debug;
use crate::digit_pipeline::common::error::{PipelineError, Result};
use crate::digit_pipeline::canvas::types::{RawCanvas, WHITE};
use crate::digit_pipeline::canvas::decoder::CanvasDecoder;

pub struct ImageCanvasDecoder;

impl CanvasDecoder for ImageCanvasDecoder {
    /// Decodes `data` and flattens it onto a white background.
    ///
    /// The live drawing surface is always pre-filled white, so a transparent
    /// pixel in an exported snapshot means "not drawn". Compositing over white
    /// keeps such pixels out of the ink set.
    ///
    /// ```no_run
    /// use digit_canvas_rs::digit_pipeline::{CanvasDecoder, ImageCanvasDecoder};
    ///
    /// let bytes = std::fs::read("drawing.png").unwrap();
    /// let canvas = ImageCanvasDecoder.decode_canvas(&bytes).unwrap();
    /// assert_eq!(canvas.pixels().len(), canvas.width() * canvas.height() * 4);
    /// ```
    fn decode_canvas(&self, data: &[u8]) -> Result<RawCanvas> {
        debug!("Decoding canvas snapshot, {} bytes", data.len());

        let decoded = image::load_from_memory(data)
            .map_err(|e| PipelineError::DecodeError(e.to_string()))?
            .to_rgba8();

        let width = decoded.width() as usize;
        let height = decoded.height() as usize;
        debug!("Decoded canvas: {}x{}", width, height);

        let mut pixels = decoded.into_raw();
        for px in pixels.chunks_exact_mut(4) {
            let alpha = u32::from(px[3]);
            if alpha == u32::from(u8::MAX) {
                continue;
            }
            for channel in &mut px[..3] {
                let over_white = (u32::from(*channel) * alpha
                    + u32::from(WHITE) * (255 - alpha)
                    + 127)
                    / 255;
                *channel = over_white as u8;
            }
            px[3] = u8::MAX;
        }

        RawCanvas::new(width, height, pixels)
    }
}
