//! Canvas capture module
//!
//! This module provides the boundary between the drawing surface and the
//! pipeline: RGBA snapshots, a session that accumulates strokes, and decoding
//! of encoded snapshots.

mod source;
mod decoder;
mod image_decoder;
mod drawing_session;
pub mod types;

pub use source::CanvasSource;
pub use decoder::CanvasDecoder;
pub use image_decoder::ImageCanvasDecoder;
pub use drawing_session::{DrawingSession, DEFAULT_CANVAS_SIZE, DEFAULT_LINE_WIDTH};
pub use types::RawCanvas;
