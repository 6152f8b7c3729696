//! Display grid types

use std::fmt;

/// Debug values at or below this render with dark text.
pub const CONTRAST_THRESHOLD: u8 = 128;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextContrast {
    DarkText,
    LightText,
}

impl TextContrast {
    pub fn for_value(value: u8) -> Self {
        if value <= CONTRAST_THRESHOLD {
            TextContrast::DarkText
        } else {
            TextContrast::LightText
        }
    }

    pub fn class_name(&self) -> &'static str {
        match self {
            TextContrast::DarkText => "dark-text",
            TextContrast::LightText => "light-text",
        }
    }
}

/// Opaque RGB background color of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shade {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Shade {
    pub fn gray(level: u8) -> Self {
        Self { r: level, g: level, b: level }
    }
}

impl fmt::Display for Shade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayCell {
    pub value: u8,
    pub background: Shade,
    pub contrast: TextContrast,
}

/// Annotated 28×28 view of a debug matrix, row by row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayGrid {
    rows: Vec<Vec<DisplayCell>>,
}

impl DisplayGrid {
    pub(crate) fn new(rows: Vec<Vec<DisplayCell>>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<DisplayCell>] {
        &self.rows
    }

    pub fn cell(&self, row: usize, col: usize) -> &DisplayCell {
        &self.rows[row][col]
    }
}

impl fmt::Display for DisplayGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            let line: Vec<String> = row.iter().map(|c| format!("{:>3}", c.value)).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
