use std::io::Write;
use crate::digit_pipeline::common::error::Result;
use crate::digit_pipeline::canonicalize::types::DebugMatrix;

pub trait DebugImageWriter {
    fn write_debug_image(&self, debug: &DebugMatrix, output: &mut dyn Write) -> Result<()>;
}
