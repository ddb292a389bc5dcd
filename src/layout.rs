use crate::point::Point2;
use serde::{Deserialize, Serialize};
use std::fs;

/// Cell code marking an empty cell (no tile)
pub const EMPTY_CELL: i32 = -1;

/// One entry of the tile-type table. Cells reference entries by index;
/// a `None` slot makes every cell pointing at it unusable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TileDef {
    pub name: String,
}

impl TileDef {
    pub fn new(name: &str) -> Self {
        TileDef {
            name: name.to_string(),
        }
    }
}

/// Immutable tile layout descriptor.
///
/// `cells` is row-major: a negative code means empty, a non-negative code
/// indexes `tile_defs`. The grid is centred on the world origin with rows
/// growing downward, so cell (0, 0) sits in the top-left quadrant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TileLayout {
    pub rows: i32,
    pub cols: i32,
    pub tile_size: f32,
    pub cells: Vec<i32>,
    pub tile_defs: Vec<Option<TileDef>>,
}

impl TileLayout {
    /// Create a layout with all cells empty
    pub fn new(rows: i32, cols: i32, tile_size: f32, tile_defs: Vec<Option<TileDef>>) -> Self {
        TileLayout {
            rows,
            cols,
            tile_size,
            cells: vec![EMPTY_CELL; (rows * cols).max(0) as usize],
            tile_defs,
        }
    }

    /// Create a layout with the given cells, all referencing one tile type
    pub fn with_cells(rows: i32, cols: i32, tile_size: f32, cells: Vec<i32>) -> Self {
        TileLayout {
            rows,
            cols,
            tile_size,
            cells,
            tile_defs: vec![Some(TileDef::new("ground"))],
        }
    }

    /// Check that the dimensions describe the cell array
    pub fn is_well_formed(&self) -> bool {
        self.rows > 0
            && self.cols > 0
            && self.cells.len() as i64 == self.rows as i64 * self.cols as i64
    }

    /// Raw cell code at (row, col); out of bounds reads as empty
    pub fn cell_code(&self, row: i32, col: i32) -> i32 {
        if row < 0 || row >= self.rows || col < 0 || col >= self.cols {
            return EMPTY_CELL;
        }
        // widen before multiplying so oversized dimensions cannot wrap
        let idx = row as i64 * self.cols as i64 + col as i64;
        self.cells.get(idx as usize).copied().unwrap_or(EMPTY_CELL)
    }

    /// Check if the cell at (row, col) holds a usable tile.
    ///
    /// Total over all integer inputs: out-of-bounds coordinates, negative
    /// codes, codes past the tile-type table and absent table entries all
    /// read as "not usable".
    pub fn is_usable(&self, row: i32, col: i32) -> bool {
        let code = self.cell_code(row, col);
        if code < 0 || code as usize >= self.tile_defs.len() {
            return false;
        }
        self.tile_defs[code as usize].is_some()
    }

    /// World-space offset of cell (0, 0)'s centre; the grid is centred on
    /// the origin
    pub fn offset(&self) -> Point2 {
        Point2::new(
            -self.tile_size * (self.cols - 1) as f32 / 2.0,
            self.tile_size * (self.rows - 1) as f32 / 2.0,
        )
    }

    /// World-space centre of cell (row, col); rows grow downward
    pub fn cell_center(&self, row: i32, col: i32) -> Point2 {
        let offset = self.offset();
        Point2::new(
            offset.x + self.tile_size * col as f32,
            offset.y - self.tile_size * row as f32,
        )
    }

    /// Parse a layout from text: one line per row, '■' for a tile,
    /// '□' or ' ' or '.' for an empty cell
    pub fn from_text(text: &str, tile_size: f32) -> Result<Self, String> {
        let lines: Vec<&str> = text
            .lines()
            .filter(|line| !line.trim().is_empty())
            .collect();

        if lines.is_empty() {
            return Err("no grid lines found in layout text".to_string());
        }

        let cols = lines[0].chars().count() as i32;
        let rows = lines.len() as i32;

        let mut cells = Vec::with_capacity((rows * cols) as usize);
        for line in &lines {
            let width = line.chars().count() as i32;
            if width != cols {
                return Err(format!(
                    "inconsistent row width: expected {}, found {}",
                    cols, width
                ));
            }
            for ch in line.chars() {
                match ch {
                    '■' => cells.push(0),
                    '□' | ' ' | '.' => cells.push(EMPTY_CELL),
                    _ => return Err(format!("unexpected character '{}' in layout text", ch)),
                }
            }
        }

        Ok(TileLayout::with_cells(rows, cols, tile_size, cells))
    }

    /// Load a text-format layout from a file
    pub fn load_text_file(path: &str, tile_size: f32) -> Result<Self, String> {
        let text =
            fs::read_to_string(path).map_err(|e| format!("Failed to read layout file: {}", e))?;
        TileLayout::from_text(&text, tile_size)
    }

    /// Save to a JSON file
    pub fn save_to_file(&self, path: &str) -> Result<(), String> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize layout: {}", e))?;

        fs::write(path, json).map_err(|e| format!("Failed to write layout file: {}", e))?;

        Ok(())
    }

    /// Load from a JSON file
    pub fn load_from_file(path: &str) -> Result<Self, String> {
        let json =
            fs::read_to_string(path).map_err(|e| format!("Failed to read layout file: {}", e))?;

        let layout: TileLayout =
            serde_json::from_str(&json).map_err(|e| format!("Failed to parse layout file: {}", e))?;

        Ok(layout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usable_in_bounds() {
        let layout = TileLayout::with_cells(2, 2, 1.0, vec![0, EMPTY_CELL, 0, 0]);
        assert!(layout.is_usable(0, 0));
        assert!(!layout.is_usable(0, 1));
        assert!(layout.is_usable(1, 0));
        assert!(layout.is_usable(1, 1));
    }

    #[test]
    fn test_usable_total_over_extremes() {
        let layout = TileLayout::with_cells(3, 3, 1.0, vec![0; 9]);
        assert!(!layout.is_usable(-1, 0));
        assert!(!layout.is_usable(0, -1));
        assert!(!layout.is_usable(3, 0));
        assert!(!layout.is_usable(0, 3));
        assert!(!layout.is_usable(i32::MIN, i32::MIN));
        assert!(!layout.is_usable(i32::MAX, i32::MAX));
    }

    #[test]
    fn test_code_past_table_is_unusable() {
        let layout = TileLayout::with_cells(1, 2, 1.0, vec![0, 7]);
        assert!(layout.is_usable(0, 0));
        assert!(!layout.is_usable(0, 1));
    }

    #[test]
    fn test_absent_tile_def_is_unusable() {
        let mut layout = TileLayout::with_cells(1, 2, 1.0, vec![0, 1]);
        layout.tile_defs.push(None);
        assert!(layout.is_usable(0, 0));
        assert!(!layout.is_usable(0, 1));
    }

    #[test]
    fn test_grid_is_centred() {
        let layout = TileLayout::with_cells(3, 3, 2.0, vec![0; 9]);
        let centre = layout.cell_center(1, 1);
        assert_eq!(centre, Point2::new(0.0, 0.0));

        let top_left = layout.cell_center(0, 0);
        assert_eq!(top_left, Point2::new(-2.0, 2.0));
    }

    #[test]
    fn test_from_text() {
        let layout = TileLayout::from_text("■■□\n□■■\n", 1.0).expect("parse failed");
        assert_eq!(layout.rows, 2);
        assert_eq!(layout.cols, 3);
        assert!(layout.is_usable(0, 0));
        assert!(!layout.is_usable(0, 2));
        assert!(!layout.is_usable(1, 0));
        assert!(layout.is_usable(1, 2));
    }
}
