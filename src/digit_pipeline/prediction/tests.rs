use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::digit_pipeline::common::error::{PipelineError, Result};
use crate::digit_pipeline::canvas::{CanvasSource, DrawingSession, ImageCanvasDecoder, RawCanvas};
use crate::digit_pipeline::canonicalize::{NormalizedMatrix, ResampleFilter};
use crate::digit_pipeline::classifier::{DigitClassifier, PredictionResult};
use crate::digit_pipeline::prediction::{
    DigitPredictionPipeline, DisplaySurface, PredictionConfig, PredictionReport,
    CONNECTION_FAILURE_MESSAGE, EMPTY_DRAWING_MESSAGE,
};

const SEVEN: [f64; 10] = [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.93, 0.07, 0.0];

struct MockClassifier {
    should_fail: bool,
    calls: Arc<AtomicUsize>,
    received: Arc<Mutex<Vec<NormalizedMatrix>>>,
}

impl MockClassifier {
    fn new(should_fail: bool) -> Self {
        Self {
            should_fail,
            calls: Arc::new(AtomicUsize::new(0)),
            received: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl DigitClassifier for MockClassifier {
    fn classify(&self, pixels: &NormalizedMatrix) -> Result<PredictionResult> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.received.lock().unwrap().push(pixels.clone());
        if self.should_fail {
            return Err(PipelineError::ClassifierUnreachable("Mock network error".to_string()));
        }
        PredictionResult::new(7, SEVEN.to_vec())
    }
}

#[derive(Default)]
struct RecordingSurface {
    reports: Mutex<Vec<PredictionReport>>,
    message: Mutex<Option<String>>,
    clears: AtomicUsize,
}

impl DisplaySurface for RecordingSurface {
    fn show_report(&self, report: &PredictionReport) {
        self.reports.lock().unwrap().push(report.clone());
        *self.message.lock().unwrap() = Some(report.summary());
    }

    fn show_message(&self, message: &str) {
        *self.message.lock().unwrap() = Some(message.to_string());
    }

    fn clear(&self) {
        self.reports.lock().unwrap().clear();
        *self.message.lock().unwrap() = None;
        self.clears.fetch_add(1, Ordering::SeqCst);
    }
}

fn pipeline(classifier: MockClassifier) -> DigitPredictionPipeline<ImageCanvasDecoder, MockClassifier> {
    DigitPredictionPipeline::with_custom(ImageCanvasDecoder, classifier, PredictionConfig::default())
}

fn drawn_session() -> DrawingSession {
    let mut session = DrawingSession::new().unwrap();
    session.stroke(&[(80.0, 60.0), (180.0, 60.0), (120.0, 220.0)]);
    session
}

#[test]
fn test_config_builder() {
    let config = PredictionConfig::builder()
        .endpoint("http://localhost:5000/predict")
        .timeout(std::time::Duration::from_secs(2))
        .resample_filter(ResampleFilter::Area)
        .validate_canvas(false)
        .max_canvas_dimension(None)
        .honor_system_proxy(false)
        .build();

    assert_eq!(config.endpoint, "http://localhost:5000/predict");
    assert_eq!(config.timeout, std::time::Duration::from_secs(2));
    assert_eq!(config.resample_filter, ResampleFilter::Area);
    assert!(!config.validate_canvas);
    assert_eq!(config.max_canvas_dimension, None);
    assert!(!config.honor_system_proxy);
}

#[test]
fn test_default_config() {
    let config = PredictionConfig::default();
    assert_eq!(config.endpoint, "https://back-end-knnmodel.onrender.com/predict");
    assert_eq!(config.resample_filter, ResampleFilter::Bilinear);
    assert!(config.validate_canvas);
    assert_eq!(config.max_canvas_dimension, None);
}

#[test]
fn test_blank_canvas_skips_classifier() {
    let classifier = MockClassifier::new(false);
    let calls = classifier.calls.clone();
    let pipeline = pipeline(classifier);
    let session = DrawingSession::new().unwrap();
    let surface = RecordingSurface::default();

    let result = pipeline.predict(&session.current_raw_canvas());
    assert!(matches!(result, Err(PipelineError::EmptyDrawing)));

    assert!(pipeline.handle_predict(&session, &surface).is_none());
    assert_eq!(surface.message.lock().unwrap().as_deref(), Some(EMPTY_DRAWING_MESSAGE));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_single_pixel_reaches_classifier_as_block() {
    let classifier = MockClassifier::new(false);
    let received = classifier.received.clone();
    let pipeline = pipeline(classifier);

    let mut canvas = RawCanvas::blank(280, 280).unwrap();
    canvas.set_gray(140, 140, 0);

    let report = pipeline.predict(&canvas).unwrap();
    assert_eq!(report.debug.get(4, 4), 255);
    assert_eq!(report.debug.get(23, 23), 255);
    assert_eq!(report.debug.get(3, 4), 0);
    assert_eq!(report.debug.get(24, 24), 0);

    let sent = received.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].get(10, 10), 1.0);
    assert_eq!(sent[0].get(0, 0), 0.0);
}

#[test]
fn test_successful_prediction_is_displayed() {
    let pipeline = pipeline(MockClassifier::new(false));
    let session = drawn_session();
    let surface = RecordingSurface::default();

    let report = pipeline.handle_predict(&session, &surface).unwrap();

    assert_eq!(report.result.label(), 7);
    assert_eq!(report.summary(), "Prediction: 7 (93.00%)");
    assert_eq!(surface.message.lock().unwrap().as_deref(), Some("Prediction: 7 (93.00%)"));
    assert_eq!(surface.reports.lock().unwrap().len(), 1);
    assert_eq!(report.display.rows().len(), 28);
}

#[test]
fn test_classifier_failure_keeps_previous_report() {
    let session = drawn_session();
    let surface = RecordingSurface::default();

    pipeline(MockClassifier::new(false)).handle_predict(&session, &surface).unwrap();
    let shown = surface.reports.lock().unwrap().clone();

    let failed = pipeline(MockClassifier::new(true)).handle_predict(&session, &surface);
    assert!(failed.is_none());
    assert_eq!(surface.message.lock().unwrap().as_deref(), Some(CONNECTION_FAILURE_MESSAGE));
    assert_eq!(*surface.reports.lock().unwrap(), shown);
}

#[test]
fn test_oversized_canvas_is_rejected() {
    let config = PredictionConfig::builder().max_canvas_dimension(Some(100)).build();
    let pipeline = DigitPredictionPipeline::with_custom(ImageCanvasDecoder, MockClassifier::new(false), config);

    let result = pipeline.predict(&RawCanvas::blank(101, 50).unwrap());
    assert!(matches!(result, Err(PipelineError::InvalidDimensions(101, 50))));
}

#[test]
fn test_default_config_accepts_large_canvas() {
    let classifier = MockClassifier::new(false);
    let calls = classifier.calls.clone();
    let pipeline = pipeline(classifier);

    let mut canvas = RawCanvas::blank(9000, 2).unwrap();
    canvas.set_gray(4500, 1, 0);

    let report = pipeline.predict(&canvas).unwrap();
    assert_eq!(report.result.label(), 7);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_handle_file_reports_blank_drawing() {
    let classifier = MockClassifier::new(false);
    let calls = classifier.calls.clone();
    let pipeline = pipeline(classifier);
    let surface = RecordingSurface::default();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("blank.png");
    image::RgbaImage::from_pixel(32, 32, image::Rgba([255, 255, 255, 255]))
        .save(&path)
        .unwrap();

    assert!(pipeline.handle_file(&path, &surface).is_none());
    assert_eq!(surface.message.lock().unwrap().as_deref(), Some(EMPTY_DRAWING_MESSAGE));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_handle_file_reports_classifier_failure() {
    let pipeline = pipeline(MockClassifier::new(true));
    let surface = RecordingSurface::default();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dot.png");
    let mut img = image::RgbaImage::from_pixel(32, 32, image::Rgba([255, 255, 255, 255]));
    img.put_pixel(5, 5, image::Rgba([0, 0, 0, 255]));
    img.save(&path).unwrap();

    assert!(pipeline.handle_file(&path, &surface).is_none());
    assert_eq!(surface.message.lock().unwrap().as_deref(), Some(CONNECTION_FAILURE_MESSAGE));
    assert!(surface.reports.lock().unwrap().is_empty());
}

#[test]
fn test_canvas_validation_disabled() {
    let config = PredictionConfig::builder()
        .validate_canvas(false)
        .max_canvas_dimension(Some(100))
        .build();
    let pipeline = DigitPredictionPipeline::with_custom(ImageCanvasDecoder, MockClassifier::new(false), config);

    let mut canvas = RawCanvas::blank(101, 50).unwrap();
    canvas.set_gray(10, 10, 0);
    assert!(pipeline.predict(&canvas).is_ok());
}

#[test]
fn test_predict_file_reads_png() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("drawing.png");

    let mut img = image::RgbaImage::from_pixel(64, 64, image::Rgba([255, 255, 255, 255]));
    for y in 10..50 {
        img.put_pixel(30, y, image::Rgba([0, 0, 0, 255]));
    }
    img.save(&path).unwrap();

    let report = pipeline(MockClassifier::new(false)).predict_file(&path).unwrap();
    // 1×40 line scales by 0.5 to 0.5×20, centered at column 13.75.
    assert!(report.debug.get(14, 13) > 0);
    assert_eq!(report.debug.get(14, 10), 0);
}

#[test]
fn test_missing_file_is_input_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = pipeline(MockClassifier::new(false)).predict_file(dir.path().join("missing.png"));
    assert!(matches!(result, Err(PipelineError::InputReadError(_))));
}

#[test]
fn test_overlapping_requests_complete_independently() {
    let classifier = MockClassifier::new(false);
    let calls = classifier.calls.clone();
    let pipeline = Arc::new(pipeline(classifier));
    let surface = Arc::new(RecordingSurface::default());
    let canvas = drawn_session().current_raw_canvas();

    let first = pipeline.spawn_predict(canvas.clone(), surface.clone());
    let second = pipeline.spawn_predict(canvas, surface.clone());

    let a = first.join().unwrap().unwrap();
    let b = second.join().unwrap().unwrap();
    assert_eq!(a, b);
    assert_eq!(calls.load(Ordering::SeqCst), 2);
    assert_eq!(surface.reports.lock().unwrap().len(), 2);
}

#[test]
fn test_clear_resets_source_and_surface() {
    let pipeline = pipeline(MockClassifier::new(false));
    let mut session = drawn_session();
    let surface = RecordingSurface::default();
    pipeline.handle_predict(&session, &surface).unwrap();

    pipeline.clear(&mut session, &surface);

    assert_eq!(surface.clears.load(Ordering::SeqCst), 1);
    assert!(surface.message.lock().unwrap().is_none());
    assert!(pipeline.predict(&session.current_raw_canvas()).is_err());
}
