//! In-memory drawing surface.
//!
//! Rasterizes pointer strokes into an owned [`RawCanvas`] the same way the
//! interactive surface does: solid black ink with round caps and joins on a
//! white-filled ground.

use tracing::trace;
use crate::digit_pipeline::common::error::{PipelineError, Result};
use crate::digit_pipeline::canvas::source::CanvasSource;
use crate::digit_pipeline::canvas::types::{RawCanvas, WHITE};

pub const DEFAULT_CANVAS_SIZE: usize = 280;
pub const DEFAULT_LINE_WIDTH: f64 = 10.0;
const INK: u8 = 0;

#[derive(Debug, Clone)]
pub struct DrawingSession {
    canvas: RawCanvas,
    line_width: f64,
    pen: Option<(f64, f64)>,
}

impl DrawingSession {
    /// A 280×280 surface with a 10px pen.
    pub fn new() -> Result<Self> {
        Self::with_size(DEFAULT_CANVAS_SIZE, DEFAULT_CANVAS_SIZE, DEFAULT_LINE_WIDTH)
    }

    /// Fails with [`PipelineError::InvalidLineWidth`] unless `line_width` is
    /// finite and positive.
    pub fn with_size(width: usize, height: usize, line_width: f64) -> Result<Self> {
        if !line_width.is_finite() || line_width <= 0.0 {
            return Err(PipelineError::InvalidLineWidth(line_width));
        }
        Ok(Self {
            canvas: RawCanvas::blank(width, height)?,
            line_width,
            pen: None,
        })
    }

    pub fn is_drawing(&self) -> bool {
        self.pen.is_some()
    }

    /// Puts the pen down. Nothing is inked until the pen moves.
    pub fn begin_stroke(&mut self, x: f64, y: f64) {
        self.pen = Some((x, y));
    }

    /// Extends the current stroke to `(x, y)`. Ignored while the pen is up.
    pub fn extend_stroke(&mut self, x: f64, y: f64) {
        let Some(from) = self.pen else {
            return;
        };
        self.ink_segment(from, (x, y));
        self.pen = Some((x, y));
    }

    pub fn end_stroke(&mut self) {
        self.pen = None;
    }

    /// Draws a whole polyline as one stroke.
    pub fn stroke(&mut self, points: &[(f64, f64)]) {
        let Some((&(x, y), rest)) = points.split_first() else {
            return;
        };
        self.begin_stroke(x, y);
        for &(x, y) in rest {
            self.extend_stroke(x, y);
        }
        self.end_stroke();
    }

    // Inks every pixel whose center lies within half the line width of the
    // segment, which yields round caps and joins.
    fn ink_segment(&mut self, (ax, ay): (f64, f64), (bx, by): (f64, f64)) {
        let radius = self.line_width / 2.0;
        let width = self.canvas.width();
        let height = self.canvas.height();

        let min_x = (ax.min(bx) - radius).floor().max(0.0) as usize;
        let min_y = (ay.min(by) - radius).floor().max(0.0) as usize;
        let max_x = ((ax.max(bx) + radius).ceil().max(0.0) as usize).min(width);
        let max_y = ((ay.max(by) + radius).ceil().max(0.0) as usize).min(height);

        trace!("Inking segment ({ax}, {ay}) -> ({bx}, {by})");

        let (dx, dy) = (bx - ax, by - ay);
        let len_sq = dx * dx + dy * dy;

        for y in min_y..max_y {
            for x in min_x..max_x {
                let rx = x as f64 + 0.5 - ax;
                let ry = y as f64 + 0.5 - ay;
                let t = if len_sq > 0.0 {
                    ((rx * dx + ry * dy) / len_sq).clamp(0.0, 1.0)
                } else {
                    0.0
                };
                let cx = t * dx - rx;
                let cy = t * dy - ry;
                if cx * cx + cy * cy <= radius * radius {
                    self.canvas.set_gray(x, y, INK);
                }
            }
        }
    }
}

impl CanvasSource for DrawingSession {
    fn current_raw_canvas(&self) -> RawCanvas {
        self.canvas.clone()
    }

    fn clear(&mut self) {
        self.canvas.fill(WHITE);
        self.pen = None;
    }
}
