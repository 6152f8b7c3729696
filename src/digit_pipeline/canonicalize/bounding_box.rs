use tracing::debug;
use crate::digit_pipeline::canvas::types::{RawCanvas, BYTES_PER_PIXEL, WHITE};
use crate::digit_pipeline::canonicalize::types::BoundingBox;

/// Finds the inclusive extent of every ink pixel on the canvas.
///
/// A pixel counts as ink when any of its R, G, B channels is below pure
/// white, so faint anti-aliased fringes are included. Returns
/// [`BoundingBox::empty`] when nothing is drawn.
pub fn detect_bounding_box(raw: &RawCanvas) -> BoundingBox {
    let width = raw.width();
    let mut bbox = BoundingBox::empty(width, raw.height());

    for (i, px) in raw.pixels().chunks_exact(BYTES_PER_PIXEL).enumerate() {
        if px[..3].iter().all(|&c| c == WHITE) {
            continue;
        }
        let x = (i % width) as i64;
        let y = (i / width) as i64;
        bbox.x1 = bbox.x1.min(x);
        bbox.y1 = bbox.y1.min(y);
        bbox.x2 = bbox.x2.max(x);
        bbox.y2 = bbox.y2.max(y);
    }

    debug!(
        "Bounding box: ({}, {}) - ({}, {})",
        bbox.x1, bbox.y1, bbox.x2, bbox.y2
    );
    bbox
}
