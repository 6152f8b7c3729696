use crate::digit_pipeline::canonicalize::types::DebugMatrix;
use crate::digit_pipeline::present::types::{DisplayCell, DisplayGrid, Shade, TextContrast};

/// Builds the annotated table for a debug matrix.
///
/// Each cell shows its ink density `v`, is shaded `rgb(255-v, 255-v, 255-v)`
/// so denser ink is darker, and picks a text color readable on that shade.
pub fn present(debug: &DebugMatrix) -> DisplayGrid {
    let rows = debug
        .rows()
        .map(|row| {
            row.iter()
                .map(|&value| DisplayCell {
                    value,
                    background: Shade::gray(255 - value),
                    contrast: TextContrast::for_value(value),
                })
                .collect()
        })
        .collect();

    DisplayGrid::new(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::digit_pipeline::canonicalize::types::{GRID_LEN, GRID_SIZE};

    fn ramp() -> DebugMatrix {
        let gray: Vec<u8> = (0..GRID_LEN).map(|i| 255 - (i % 256) as u8).collect();
        DebugMatrix::from_gray(&gray)
    }

    #[test]
    fn test_grid_shape_and_values() {
        let debug = ramp();
        let grid = present(&debug);

        assert_eq!(grid.rows().len(), GRID_SIZE);
        assert!(grid.rows().iter().all(|r| r.len() == GRID_SIZE));
        assert_eq!(grid.cell(0, 5).value, 5);
        assert_eq!(grid.cell(10, 3).value, debug.get(10, 3));
    }

    #[test]
    fn test_background_mirrors_value() {
        let grid = present(&ramp());
        let cell = grid.cell(7, 4);
        assert_eq!(cell.background, Shade::gray(255 - cell.value));
        assert_eq!(Shade::gray(55).to_string(), "rgb(55, 55, 55)");
    }

    #[test]
    fn test_contrast_boundary() {
        assert_eq!(TextContrast::for_value(0), TextContrast::DarkText);
        assert_eq!(TextContrast::for_value(128), TextContrast::DarkText);
        assert_eq!(TextContrast::for_value(129), TextContrast::LightText);
        assert_eq!(TextContrast::for_value(255), TextContrast::LightText);

        // Cells 128 and 129 of the ramp sit at row 4, columns 16 and 17.
        let grid = present(&ramp());
        assert_eq!(grid.cell(4, 16).value, 128);
        assert_eq!(grid.cell(4, 16).contrast, TextContrast::DarkText);
        assert_eq!(grid.cell(4, 17).value, 129);
        assert_eq!(grid.cell(4, 17).contrast.class_name(), "light-text");
    }

    #[test]
    fn test_text_rendering_has_one_line_per_row() {
        let rendered = present(&ramp()).to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), GRID_SIZE);
        assert!(lines[0].starts_with("  0   1   2"));
    }
}
