//! Prediction pipeline configuration and result types

use std::time::Duration;

use crate::digit_pipeline::canonicalize::{DebugMatrix, ResampleFilter};
use crate::digit_pipeline::classifier::PredictionResult;
use crate::digit_pipeline::present::DisplayGrid;

pub const DEFAULT_ENDPOINT: &str = "https://back-end-knnmodel.onrender.com/predict";

/// Configuration for the drawing-to-prediction pipeline
#[derive(Debug, Clone)]
pub struct PredictionConfig {
    /// Classifier endpoint receiving the `{"pixels": [...]}` POST
    pub endpoint: String,
    /// Upper bound on one classifier round trip
    pub timeout: Duration,
    /// Sampling filter used when resampling into the 28×28 grid
    pub resample_filter: ResampleFilter,
    /// Whether to check canvas dimensions before processing
    pub validate_canvas: bool,
    /// Largest accepted canvas side, when validation is on; unbounded by default
    pub max_canvas_dimension: Option<usize>,
    /// Whether the HTTP client picks up proxy settings from the environment
    pub honor_system_proxy: bool,
}

impl Default for PredictionConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: Duration::from_secs(30),
            resample_filter: ResampleFilter::Bilinear,
            validate_canvas: true,
            max_canvas_dimension: None,
            honor_system_proxy: true,
        }
    }
}

impl PredictionConfig {
    pub fn builder() -> PredictionConfigBuilder {
        PredictionConfigBuilder::default()
    }
}

/// Builder for PredictionConfig
#[derive(Default)]
pub struct PredictionConfigBuilder {
    endpoint: Option<String>,
    timeout: Option<Duration>,
    resample_filter: Option<ResampleFilter>,
    validate_canvas: Option<bool>,
    max_canvas_dimension: Option<Option<usize>>,
    honor_system_proxy: Option<bool>,
}

impl PredictionConfigBuilder {
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn resample_filter(mut self, filter: ResampleFilter) -> Self {
        self.resample_filter = Some(filter);
        self
    }

    pub fn validate_canvas(mut self, validate: bool) -> Self {
        self.validate_canvas = Some(validate);
        self
    }

    pub fn max_canvas_dimension(mut self, max: Option<usize>) -> Self {
        self.max_canvas_dimension = Some(max);
        self
    }

    pub fn honor_system_proxy(mut self, honor: bool) -> Self {
        self.honor_system_proxy = Some(honor);
        self
    }

    pub fn build(self) -> PredictionConfig {
        let default = PredictionConfig::default();
        PredictionConfig {
            endpoint: self.endpoint.unwrap_or(default.endpoint),
            timeout: self.timeout.unwrap_or(default.timeout),
            resample_filter: self.resample_filter.unwrap_or(default.resample_filter),
            validate_canvas: self.validate_canvas.unwrap_or(default.validate_canvas),
            max_canvas_dimension: self.max_canvas_dimension.unwrap_or(default.max_canvas_dimension),
            honor_system_proxy: self.honor_system_proxy.unwrap_or(default.honor_system_proxy),
        }
    }
}

/// Everything a successful prediction hands to the display surface.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionReport {
    pub result: PredictionResult,
    pub debug: DebugMatrix,
    pub display: DisplayGrid,
}

impl PredictionReport {
    pub fn summary(&self) -> String {
        self.result.summary()
    }
}
