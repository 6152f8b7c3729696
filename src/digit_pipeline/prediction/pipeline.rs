use std::path::Path;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use tracing::{debug, info, instrument, warn};

use crate::digit_pipeline::{
    common::error::{PipelineError, Result},
    canvas::{CanvasDecoder, CanvasSource, ImageCanvasDecoder, RawCanvas},
    canonicalize::Canonicalizer,
    classifier::{DigitClassifier, HttpClassifier},
    present::present,
    prediction::surface::{DisplaySurface, CONNECTION_FAILURE_MESSAGE, EMPTY_DRAWING_MESSAGE},
    prediction::types::{PredictionConfig, PredictionReport},
};

pub struct DigitPredictionPipeline<D: CanvasDecoder, C: DigitClassifier> {
    decoder: D,
    classifier: C,
    canonicalizer: Canonicalizer,
    config: PredictionConfig,
}

impl DigitPredictionPipeline<ImageCanvasDecoder, HttpClassifier> {
    pub fn new(config: PredictionConfig) -> Result<Self> {
        let classifier = HttpClassifier::new(&config)?;
        Ok(Self::with_custom(ImageCanvasDecoder, classifier, config))
    }
}

impl<D: CanvasDecoder, C: DigitClassifier> DigitPredictionPipeline<D, C> {
    pub fn with_custom(decoder: D, classifier: C, config: PredictionConfig) -> Self {
        Self {
            decoder,
            classifier,
            canonicalizer: Canonicalizer::new(config.resample_filter),
            config,
        }
    }

    fn validate_canvas(&self, canvas: &RawCanvas) -> Result<()> {
        if !self.config.validate_canvas {
            return Ok(());
        }

        let (width, height) = (canvas.width(), canvas.height());
        if let Some(max) = self.config.max_canvas_dimension {
            if width > max || height > max {
                warn!("Canvas {}x{} exceeds maximum {}", width, height, max);
                return Err(PipelineError::InvalidDimensions(width, height));
            }
        }

        Ok(())
    }

    /// Runs one prediction request from canvas snapshot to report.
    ///
    /// A blank canvas fails with [`PipelineError::EmptyDrawing`] before the
    /// classifier is contacted.
    #[instrument(skip(self, canvas), fields(width = canvas.width(), height = canvas.height()))]
    pub fn predict(&self, canvas: &RawCanvas) -> Result<PredictionReport> {
        info!("Starting digit prediction");

        self.validate_canvas(canvas)?;

        let bbox = {
            let _span = tracing::info_span!("detect_bounding_box").entered();
            self.canonicalizer.detect_bounding_box(canvas)
        };
        if bbox.is_empty() {
            return Err(PipelineError::EmptyDrawing);
        }

        let grid = {
            let _span = tracing::info_span!("canonicalize",
                crop_width = bbox.width(),
                crop_height = bbox.height()
            ).entered();
            self.canonicalizer.canonicalize(canvas, &bbox)?
        };

        let display = {
            let _span = tracing::info_span!("present").entered();
            present(&grid.debug)
        };

        let result = {
            let _span = tracing::info_span!("classify").entered();
            self.classifier.classify(&grid.normalized)?
        };

        info!(
            label = result.label(),
            certainty = result.certainty(),
            "Prediction complete"
        );

        Ok(PredictionReport {
            result,
            debug: grid.debug,
            display,
        })
    }

    /// Decodes an encoded snapshot and predicts on it.
    pub fn predict_encoded(&self, data: &[u8]) -> Result<PredictionReport> {
        let canvas = {
            let _span = tracing::info_span!("decode_canvas", input_size = data.len()).entered();
            self.decoder.decode_canvas(data)?
        };
        self.predict(&canvas)
    }

    #[instrument(skip(self, input_path))]
    pub fn predict_file<P: AsRef<Path>>(&self, input_path: P) -> Result<PredictionReport> {
        let input_path = input_path.as_ref();
        info!(input = %input_path.display(), "Predicting from file");

        let data = {
            let _span = tracing::info_span!("read_input_file").entered();
            std::fs::read(input_path).map_err(|e| {
                PipelineError::InputReadError(format!("{}: {}", input_path.display(), e))
            })?
        };

        self.predict_encoded(&data)
    }

    /// Handles one "predict" action end to end.
    ///
    /// The outcome always lands on `surface`: the report on success, a
    /// user-facing message otherwise. On failure the surface keeps whatever it
    /// showed before apart from the message. Returns the report, if any.
    pub fn handle_predict(
        &self,
        source: &dyn CanvasSource,
        surface: &dyn DisplaySurface,
    ) -> Option<PredictionReport> {
        self.handle_canvas(&source.current_raw_canvas(), surface)
    }

    /// Like [`handle_predict`](Self::handle_predict) for an encoded snapshot
    /// stored at `input_path`. Read and decode failures are reported on
    /// `surface` too.
    pub fn handle_file<P: AsRef<Path>>(
        &self,
        input_path: P,
        surface: &dyn DisplaySurface,
    ) -> Option<PredictionReport> {
        Self::report_outcome(self.predict_file(input_path), surface)
    }

    fn handle_canvas(&self, canvas: &RawCanvas, surface: &dyn DisplaySurface) -> Option<PredictionReport> {
        Self::report_outcome(self.predict(canvas), surface)
    }

    fn report_outcome(
        outcome: Result<PredictionReport>,
        surface: &dyn DisplaySurface,
    ) -> Option<PredictionReport> {
        match outcome {
            Ok(report) => {
                surface.show_report(&report);
                Some(report)
            }
            Err(e) => {
                let message = match &e {
                    PipelineError::EmptyDrawing => EMPTY_DRAWING_MESSAGE.to_string(),
                    PipelineError::ClassifierUnreachable(_) => CONNECTION_FAILURE_MESSAGE.to_string(),
                    other => format!("Error: {}", other),
                };
                warn!(error = %e, "Prediction failed");
                surface.show_message(&message);
                None
            }
        }
    }

    /// Resets the drawing and the display.
    pub fn clear(&self, source: &mut dyn CanvasSource, surface: &dyn DisplaySurface) {
        debug!("Clearing canvas and display");
        source.clear();
        surface.clear();
    }

    pub fn config(&self) -> &PredictionConfig {
        &self.config
    }
}

impl<D, C> DigitPredictionPipeline<D, C>
where
    D: CanvasDecoder + Send + Sync + 'static,
    C: DigitClassifier + Send + Sync + 'static,
{
    /// Runs [`handle_predict`](Self::handle_predict) for `canvas` on a
    /// background thread.
    ///
    /// Requests are independent: nothing orders or cancels them, and each
    /// writes to `surface` when it finishes.
    pub fn spawn_predict(
        self: &Arc<Self>,
        canvas: RawCanvas,
        surface: Arc<dyn DisplaySurface + Send + Sync>,
    ) -> JoinHandle<Option<PredictionReport>> {
        let pipeline = Arc::clone(self);
        thread::spawn(move || pipeline.handle_canvas(&canvas, surface.as_ref()))
    }
}
