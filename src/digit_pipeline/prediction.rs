//! Prediction orchestration module
//!
//! This module composes canvas capture, canonicalization, presentation and
//! classification into one request and reports the outcome to a display.

mod pipeline;
mod surface;
pub mod types;

#[cfg(test)]
mod tests;

pub use pipeline::DigitPredictionPipeline;
pub use surface::{DisplaySurface, LogSurface, CONNECTION_FAILURE_MESSAGE, EMPTY_DRAWING_MESSAGE};
pub use types::{PredictionConfig, PredictionConfigBuilder, PredictionReport, DEFAULT_ENDPOINT};
