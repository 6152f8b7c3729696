//! Digit recognition pipeline module
//!
//! This module turns a hand-drawn digit into the classifier's 28×28 input,
//! with separate modules for canvas capture, canonicalization, presentation,
//! the classifier boundary, and request orchestration.

pub mod canvas;
pub mod canonicalize;
pub mod present;
pub mod classifier;
pub mod prediction;
pub mod common;

pub use common::{
    PipelineError,
    Result,
};

pub use canvas::{
    RawCanvas,
    CanvasSource,
    CanvasDecoder,
    DrawingSession,
    ImageCanvasDecoder,
};

pub use canonicalize::{
    BoundingBox,
    CanonicalGrid,
    Canonicalizer,
    DebugMatrix,
    NormalizedMatrix,
    ResampleFilter,
    canonicalize,
    detect_bounding_box,
};

pub use present::{
    DebugImageWriter,
    DisplayCell,
    DisplayGrid,
    Shade,
    TextContrast,
    TiffDebugWriter,
    present,
};

pub use classifier::{
    DigitClassifier,
    HttpClassifier,
    PredictionResult,
};

pub use prediction::{
    DigitPredictionPipeline,
    DisplaySurface,
    LogSurface,
    PredictionConfig,
    PredictionConfigBuilder,
    PredictionReport,
};
