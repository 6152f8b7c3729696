//! Presentation module
//!
//! This module turns the debug matrix into display-ready data: an annotated
//! cell grid and an encoded grayscale image.

mod presenter;
mod writer;
mod tiff_debug_writer;
pub mod types;

pub use presenter::present;
pub use writer::DebugImageWriter;
pub use tiff_debug_writer::TiffDebugWriter;
pub use types::{DisplayCell, DisplayGrid, Shade, TextContrast, CONTRAST_THRESHOLD};
