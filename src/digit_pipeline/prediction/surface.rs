use tracing::{debug, info, warn};
use crate::digit_pipeline::prediction::types::PredictionReport;

/// Shown when the predict action fires on a blank canvas.
pub const EMPTY_DRAWING_MESSAGE: &str = "Draw something first.";

/// Shown for every classifier failure.
pub const CONNECTION_FAILURE_MESSAGE: &str = "Error: could not connect to the server.";

/// Where prediction outcomes end up.
///
/// Methods take `&self` so one surface can be shared by overlapping requests;
/// the most recent call wins.
pub trait DisplaySurface {
    fn show_report(&self, report: &PredictionReport);
    fn show_message(&self, message: &str);
    fn clear(&self);
}

/// Surface that writes outcomes to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSurface;

impl DisplaySurface for LogSurface {
    fn show_report(&self, report: &PredictionReport) {
        info!("{}", report.summary());
        debug!("Debug matrix:\n{}", report.display);
    }

    fn show_message(&self, message: &str) {
        warn!("{}", message);
    }

    fn clear(&self) {
        info!("Display cleared");
    }
}
