use crate::digit_pipeline::common::error::Result;
use crate::digit_pipeline::canonicalize::types::NormalizedMatrix;
use crate::digit_pipeline::classifier::types::PredictionResult;

pub trait DigitClassifier {
    fn classify(&self, pixels: &NormalizedMatrix) -> Result<PredictionResult>;
}
