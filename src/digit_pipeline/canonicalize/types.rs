//! Canonical grid types

use serde::Serialize;

/// Side length of the classifier input grid.
pub const GRID_SIZE: usize = 28;

/// Number of cells in the classifier input grid.
pub const GRID_LEN: usize = GRID_SIZE * GRID_SIZE;

/// Side length of the box the drawn content is scaled to fit.
pub const TARGET_SIZE: usize = 20;

/// Inclusive pixel extent of the ink on a canvas.
///
/// A canvas with no ink yields the sentinel
/// `{x1: width, y1: height, x2: -1, y2: -1}`, see [`BoundingBox::is_empty`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub x1: i64,
    pub y1: i64,
    pub x2: i64,
    pub y2: i64,
}

impl BoundingBox {
    pub fn empty(width: usize, height: usize) -> Self {
        Self {
            x1: width as i64,
            y1: height as i64,
            x2: -1,
            y2: -1,
        }
    }

    /// True for the "nothing drawn" sentinel (or anything inverted like it).
    pub fn is_empty(&self) -> bool {
        self.x2 < self.x1 || self.y2 < self.y1
    }

    /// Inclusive horizontal span; zero for an empty box.
    pub fn width(&self) -> usize {
        if self.is_empty() { 0 } else { (self.x2 - self.x1 + 1) as usize }
    }

    /// Inclusive vertical span; zero for an empty box.
    pub fn height(&self) -> usize {
        if self.is_empty() { 0 } else { (self.y2 - self.y1 + 1) as usize }
    }

    pub fn contains(&self, x: usize, y: usize) -> bool {
        let (x, y) = (x as i64, y as i64);
        x >= self.x1 && x <= self.x2 && y >= self.y1 && y <= self.y2
    }
}

/// Classifier input: 28×28 ink densities in `[0, 1]`, row-major.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct NormalizedMatrix(Vec<f64>);

/// Un-normalized counterpart of [`NormalizedMatrix`]: ink densities in `0..=255`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebugMatrix(Vec<u8>);

impl NormalizedMatrix {
    pub fn from_debug(debug: &DebugMatrix) -> Self {
        Self(debug.0.iter().map(|&v| f64::from(v) / 255.0).collect())
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.0[row * GRID_SIZE + col]
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.0.chunks_exact(GRID_SIZE)
    }
}

impl DebugMatrix {
    /// Builds the matrix from 784 destination gray levels in raster order.
    pub(crate) fn from_gray(gray: &[u8]) -> Self {
        debug_assert_eq!(gray.len(), GRID_LEN);
        Self(gray.iter().map(|&g| 255 - g).collect())
    }

    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.0[row * GRID_SIZE + col]
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.0.chunks_exact(GRID_SIZE)
    }

    /// The matrix as an opaque 28×28 RGBA image, one gray level per cell.
    pub fn to_rgba(&self) -> Vec<u8> {
        self.0.iter().flat_map(|&v| [v, v, v, u8::MAX]).collect()
    }
}

/// Output of canonicalization: the classifier input and its debug view.
#[derive(Debug, Clone, PartialEq)]
pub struct CanonicalGrid {
    pub normalized: NormalizedMatrix,
    pub debug: DebugMatrix,
}
