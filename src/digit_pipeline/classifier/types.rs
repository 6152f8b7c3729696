//! Classifier wire and result types

use serde::{Deserialize, Serialize};
use crate::digit_pipeline::common::error::{PipelineError, Result};
use crate::digit_pipeline::canonicalize::types::NormalizedMatrix;

/// Number of digit classes.
pub const CLASS_COUNT: usize = 10;

/// Request body: `{"pixels": [784 floats]}`.
#[derive(Debug, Serialize)]
pub struct PredictionRequest<'a> {
    pub pixels: &'a NormalizedMatrix,
}

/// Response body: `{"prediction": 7, "certainty": [10 floats]}`.
#[derive(Debug, Clone, Deserialize)]
pub struct PredictionResponse {
    pub prediction: i64,
    pub certainty: Vec<f64>,
}

/// A validated classifier answer.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionResult {
    label: u8,
    confidences: Vec<f64>,
}

impl PredictionResult {
    pub fn new(label: u8, confidences: Vec<f64>) -> Result<Self> {
        if usize::from(label) >= CLASS_COUNT || confidences.len() != CLASS_COUNT {
            return Err(PipelineError::ClassifierUnreachable(format!(
                "unexpected response shape: prediction {} with {} certainties",
                label,
                confidences.len()
            )));
        }
        Ok(Self { label, confidences })
    }

    pub fn label(&self) -> u8 {
        self.label
    }

    pub fn confidences(&self) -> &[f64] {
        &self.confidences
    }

    /// Confidence reported for the predicted label.
    pub fn certainty(&self) -> f64 {
        self.confidences[usize::from(self.label)]
    }

    pub fn certainty_percent(&self) -> f64 {
        self.certainty() * 100.0
    }

    /// User-facing text, e.g. `Prediction: 7 (93.00%)`.
    pub fn summary(&self) -> String {
        format!("Prediction: {} ({:.2}%)", self.label, self.certainty_percent())
    }
}

impl TryFrom<PredictionResponse> for PredictionResult {
    type Error = PipelineError;

    fn try_from(response: PredictionResponse) -> Result<Self> {
        let label = u8::try_from(response.prediction).map_err(|_| {
            PipelineError::ClassifierUnreachable(format!(
                "prediction {} is not a digit",
                response.prediction
            ))
        })?;
        PredictionResult::new(label, response.certainty)
    }
}
