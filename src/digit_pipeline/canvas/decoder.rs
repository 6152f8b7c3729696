use crate::digit_pipeline::common::error::Result;
use crate::digit_pipeline::canvas::types::RawCanvas;

pub trait CanvasDecoder {
    fn decode_canvas(&self, data: &[u8]) -> Result<RawCanvas>;
}
