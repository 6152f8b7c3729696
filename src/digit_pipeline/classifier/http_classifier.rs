//! Classifier client speaking JSON over HTTP.
//!
//! Every failure on this path (transport, non-2xx status, malformed body or
//! an answer of the wrong shape) surfaces as
//! [`PipelineError::ClassifierUnreachable`]. There are no retries.

use std::time::Duration;

use tracing::debug;
use crate::digit_pipeline::common::error::{PipelineError, Result};
use crate::digit_pipeline::canonicalize::types::NormalizedMatrix;
use crate::digit_pipeline::classifier::client::DigitClassifier;
use crate::digit_pipeline::classifier::types::{PredictionRequest, PredictionResponse, PredictionResult};
use crate::digit_pipeline::prediction::types::PredictionConfig;

pub struct HttpClassifier {
    client: reqwest::blocking::Client,
    endpoint: String,
}

fn unreachable(e: reqwest::Error) -> PipelineError {
    PipelineError::ClassifierUnreachable(e.to_string())
}

impl HttpClassifier {
    pub fn new(config: &PredictionConfig) -> Result<Self> {
        Self::with_endpoint(&config.endpoint, config.timeout, config.honor_system_proxy)
    }

    pub fn with_endpoint(endpoint: &str, timeout: Duration, honor_system_proxy: bool) -> Result<Self> {
        let mut builder = reqwest::blocking::Client::builder().timeout(timeout);
        if !honor_system_proxy {
            builder = builder.no_proxy();
        }
        let client = builder.build().map_err(unreachable)?;

        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl DigitClassifier for HttpClassifier {
    fn classify(&self, pixels: &NormalizedMatrix) -> Result<PredictionResult> {
        debug!("POST {} with {} pixels", self.endpoint, pixels.as_slice().len());

        let response = self
            .client
            .post(&self.endpoint)
            .json(&PredictionRequest { pixels })
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(unreachable)?;

        let body: PredictionResponse = response.json().map_err(unreachable)?;
        debug!("Classifier answered {} with {} certainties", body.prediction, body.certainty.len());

        PredictionResult::try_from(body)
    }
}
