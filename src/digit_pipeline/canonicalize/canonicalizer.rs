use tracing::debug;
use crate::digit_pipeline::common::error::{PipelineError, Result};
use crate::digit_pipeline::canvas::types::RawCanvas;
use crate::digit_pipeline::canonicalize::bounding_box;
use crate::digit_pipeline::canonicalize::resample::{resample_into_grid, Placement, ResampleFilter};
use crate::digit_pipeline::canonicalize::types::{BoundingBox, CanonicalGrid, DebugMatrix, NormalizedMatrix};

/// Crops, scales, centers and resamples a drawing into the classifier grid.
#[derive(Debug, Clone, Copy, Default)]
pub struct Canonicalizer {
    filter: ResampleFilter,
}

impl Canonicalizer {
    pub fn new(filter: ResampleFilter) -> Self {
        Self { filter }
    }

    pub fn filter(&self) -> ResampleFilter {
        self.filter
    }

    pub fn detect_bounding_box(&self, raw: &RawCanvas) -> BoundingBox {
        bounding_box::detect_bounding_box(raw)
    }

    /// Produces the normalized and debug matrices for the ink inside `bbox`.
    ///
    /// The caller is expected to have rejected an empty box already; passing
    /// one anyway yields [`PipelineError::EmptyDrawing`]. A non-empty box that
    /// reaches outside the canvas is [`PipelineError::InvalidBoundingBox`].
    pub fn canonicalize(&self, raw: &RawCanvas, bbox: &BoundingBox) -> Result<CanonicalGrid> {
        if bbox.is_empty() {
            return Err(PipelineError::EmptyDrawing);
        }
        if bbox.x1 < 0
            || bbox.y1 < 0
            || bbox.x2 >= raw.width() as i64
            || bbox.y2 >= raw.height() as i64
        {
            return Err(PipelineError::InvalidBoundingBox {
                x1: bbox.x1,
                y1: bbox.y1,
                x2: bbox.x2,
                y2: bbox.y2,
            });
        }

        let placement = Placement::for_crop(bbox.width(), bbox.height());
        debug!(
            "Cropped {}x{}, scale {:.4}, offset ({:.3}, {:.3}), filter {:?}",
            bbox.width(),
            bbox.height(),
            placement.scale,
            placement.offset_x,
            placement.offset_y,
            self.filter
        );

        let gray = resample_into_grid(raw, bbox, self.filter);
        let debug = DebugMatrix::from_gray(&gray);
        let normalized = NormalizedMatrix::from_debug(&debug);

        Ok(CanonicalGrid { normalized, debug })
    }
}

/// [`Canonicalizer::canonicalize`] with the default bilinear filter.
pub fn canonicalize(raw: &RawCanvas, bbox: &BoundingBox) -> Result<CanonicalGrid> {
    Canonicalizer::default().canonicalize(raw, bbox)
}
