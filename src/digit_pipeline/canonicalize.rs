//! Canonicalization module
//!
//! This module turns a freehand canvas snapshot into the fixed 28×28 grid the
//! digit classifier expects: bounding-box detection, aspect-preserving scale
//! into a centered 20×20 box, resampling and grayscale inversion.

mod bounding_box;
mod resample;
mod canonicalizer;
pub mod types;


pub use bounding_box::detect_bounding_box;
pub use resample::{Placement, ResampleFilter};
pub use canonicalizer::{canonicalize, Canonicalizer};
pub use types::{
    BoundingBox, CanonicalGrid, DebugMatrix, NormalizedMatrix, GRID_LEN, GRID_SIZE, TARGET_SIZE,
};
