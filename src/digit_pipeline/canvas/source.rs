use crate::digit_pipeline::canvas::types::RawCanvas;

/// The drawing surface, as seen from the prediction pipeline.
///
/// Stroke accumulation belongs to the implementor; the pipeline only takes
/// snapshots and asks for a reset.
pub trait CanvasSource {
    fn current_raw_canvas(&self) -> RawCanvas;
    fn clear(&mut self);
}
