use anyhow::Context;
use digit_canvas_rs::digit_pipeline::{
    DebugImageWriter, DigitPredictionPipeline, LogSurface, PredictionConfig, ResampleFilter,
    TiffDebugWriter,
};
use digit_canvas_rs::logger;

use tracing::info;

fn main() -> anyhow::Result<()> {
    logger::init();

    info!("Starting digit_canvas...");

    let config = PredictionConfig::builder()
        .resample_filter(ResampleFilter::Bilinear)
        .build();
    let pipeline = DigitPredictionPipeline::new(config).context("building prediction pipeline")?;

    info!("Prediction pipeline initialized");
    info!("Endpoint: {}", pipeline.config().endpoint);
    info!("Resample filter: {:?}", pipeline.config().resample_filter);

    if let Some(report) = pipeline.handle_file("drawing.png", &LogSurface) {
        let mut out = std::fs::File::create("debug.tiff").context("creating debug.tiff")?;
        TiffDebugWriter
            .write_debug_image(&report.debug, &mut out)
            .context("writing debug image")?;
        info!("Debug image written to debug.tiff");
    }

    Ok(())
}
