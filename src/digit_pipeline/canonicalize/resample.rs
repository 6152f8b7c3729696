//! Sub-pixel resampling of the cropped drawing into the 28×28 grid.
//!
//! The crop is drawn into a destination rectangle with fractional origin and
//! size on a white grid. Each destination pixel is composited from a filtered
//! source sample weighted by how much of the pixel the rectangle covers.

use crate::digit_pipeline::canvas::types::{RawCanvas, WHITE};
use crate::digit_pipeline::canonicalize::types::{BoundingBox, GRID_LEN, GRID_SIZE, TARGET_SIZE};

/// How source pixels are combined into one destination sample.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResampleFilter {
    /// Bilinear interpolation at the destination pixel center, clamped to the
    /// crop edges.
    #[default]
    Bilinear,
    /// Box-filter average over the destination pixel's source footprint.
    /// Keeps thin strokes visible when the drawing is shrunk a lot.
    Area,
}

/// Where the crop lands on the grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub scale: f64,
    pub offset_x: f64,
    pub offset_y: f64,
    pub scaled_width: f64,
    pub scaled_height: f64,
}

impl Placement {
    /// Uniform scale that fits the crop into the target box, centered on the grid.
    pub fn for_crop(cropped_width: usize, cropped_height: usize) -> Self {
        let target = TARGET_SIZE as f64;
        let grid = GRID_SIZE as f64;
        let cw = cropped_width as f64;
        let ch = cropped_height as f64;

        let scale = (target / cw).min(target / ch);
        let scaled_width = cw * scale;
        let scaled_height = ch * scale;

        Self {
            scale,
            offset_x: (grid - scaled_width) / 2.0,
            offset_y: (grid - scaled_height) / 2.0,
            scaled_width,
            scaled_height,
        }
    }
}

// Source taps for one destination row or column: (index into the crop, weight).
struct AxisSample {
    coverage: f64,
    taps: Vec<(usize, f64)>,
}

fn overlap(a0: f64, a1: f64, b0: f64, b1: f64) -> f64 {
    (a1.min(b1) - a0.max(b0)).max(0.0)
}

fn axis_samples(
    span: usize,
    offset: f64,
    scaled: f64,
    scale: f64,
    filter: ResampleFilter,
) -> Vec<AxisSample> {
    let last = span - 1;

    (0..GRID_SIZE)
        .map(|d| {
            let d0 = d as f64;
            let coverage = overlap(d0, d0 + 1.0, offset, offset + scaled);
            if coverage <= 0.0 {
                return AxisSample { coverage: 0.0, taps: Vec::new() };
            }

            let taps = match filter {
                ResampleFilter::Bilinear => {
                    let u = ((d0 + 0.5 - offset) / scale - 0.5).clamp(0.0, last as f64);
                    let i0 = u.floor() as usize;
                    let i1 = (i0 + 1).min(last);
                    let t = u - i0 as f64;
                    vec![(i0, 1.0 - t), (i1, t)]
                }
                ResampleFilter::Area => {
                    let a = ((d0 - offset) / scale).max(0.0);
                    let b = ((d0 + 1.0 - offset) / scale).min(span as f64);
                    let first = (a.floor() as usize).min(last);
                    let end = (b.ceil() as usize).clamp(first + 1, span);

                    let mut taps: Vec<(usize, f64)> = (first..end)
                        .map(|i| (i, overlap(a, b, i as f64, i as f64 + 1.0)))
                        .filter(|&(_, w)| w > 0.0)
                        .collect();
                    let total: f64 = taps.iter().map(|&(_, w)| w).sum();
                    if total > 0.0 {
                        for tap in &mut taps {
                            tap.1 /= total;
                        }
                    } else {
                        taps = vec![(first, 1.0)];
                    }
                    taps
                }
            };

            AxisSample { coverage, taps }
        })
        .collect()
}

/// Draws `bbox` of `raw` into a white 28×28 grid and returns its 784 gray
/// levels in raster order.
///
/// All coordinates are computed relative to the box origin, so the output
/// depends only on the cropped pixels.
pub(crate) fn resample_into_grid(
    raw: &RawCanvas,
    bbox: &BoundingBox,
    filter: ResampleFilter,
) -> Vec<u8> {
    let cropped_width = bbox.width();
    let cropped_height = bbox.height();
    let placement = Placement::for_crop(cropped_width, cropped_height);

    let columns = axis_samples(
        cropped_width,
        placement.offset_x,
        placement.scaled_width,
        placement.scale,
        filter,
    );
    let rows = axis_samples(
        cropped_height,
        placement.offset_y,
        placement.scaled_height,
        placement.scale,
        filter,
    );

    let x1 = bbox.x1 as usize;
    let y1 = bbox.y1 as usize;
    let white = f64::from(WHITE);
    let mut grid = vec![WHITE; GRID_LEN];

    for (dy, row) in rows.iter().enumerate() {
        if row.coverage <= 0.0 {
            continue;
        }
        for (dx, col) in columns.iter().enumerate() {
            let coverage = row.coverage * col.coverage;
            if coverage <= 0.0 {
                continue;
            }

            let mut sample = 0.0;
            for &(j, wy) in &row.taps {
                for &(i, wx) in &col.taps {
                    sample += wx * wy * f64::from(raw.gray(x1 + i, y1 + j));
                }
            }

            let composited = sample * coverage + white * (1.0 - coverage);
            grid[dy * GRID_SIZE + dx] = composited.round().clamp(0.0, white) as u8;
        }
    }

    grid
}
