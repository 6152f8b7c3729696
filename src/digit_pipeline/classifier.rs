//! Classifier boundary module
//!
//! This module defines how the normalized grid is sent to the remote digit
//! classifier and how its answer is validated.

mod client;
mod http_classifier;
pub mod types;

pub use client::DigitClassifier;
pub use http_classifier::HttpClassifier;
pub use types::{PredictionRequest, PredictionResponse, PredictionResult, CLASS_COUNT};
