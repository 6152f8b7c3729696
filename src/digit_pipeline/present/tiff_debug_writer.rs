use std::io::Write;
use tracing::debug;
use crate::digit_pipeline::common::error::{PipelineError, Result};
use crate::digit_pipeline::canonicalize::types::{DebugMatrix, GRID_SIZE};
use crate::digit_pipeline::present::writer::DebugImageWriter;

/// Writes the debug matrix as an uncompressed 8-bit grayscale TIFF.
///
/// Ink is bright on a black ground, the way the classifier sees it.
pub struct TiffDebugWriter;

impl DebugImageWriter for TiffDebugWriter {
    fn write_debug_image(&self, matrix: &DebugMatrix, output: &mut dyn Write) -> Result<()> {
        debug!("Encoding {}x{} debug TIFF", GRID_SIZE, GRID_SIZE);

        let mut buffer = Vec::new();

        let mut encoder = tiff::encoder::TiffEncoder::new(std::io::Cursor::new(&mut buffer))
            .map_err(|e| PipelineError::EncodeError(e.to_string()))?
            .with_compression(tiff::encoder::Compression::Uncompressed);

        encoder
            .write_image::<tiff::encoder::colortype::Gray8>(
                GRID_SIZE as u32,
                GRID_SIZE as u32,
                matrix.as_slice(),
            )
            .map_err(|e| PipelineError::EncodeError(e.to_string()))?;

        output.write_all(&buffer)?;

        debug!("Debug TIFF encoding complete, {} bytes", buffer.len());
        Ok(())
    }
}
