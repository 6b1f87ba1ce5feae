//! Project save/load
//!
//! The `.pix` project format is JSON with an exact shape:
//!
//! ```text
//! { "grid_size": 16, "image_data": [[ "#RRGGBB" | null, ... ], ...] }
//! ```
//!
//! `image_data` is indexed `[row][col]`, row-major, with null for unset
//! cells. Decoding validates the structure before any grid is produced, so
//! a failed load never leaves a partially populated model behind.

use crate::canvas::PixelGrid;
use crate::color::Rgb;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

/// Error type for project encode/decode and file I/O
#[derive(Debug)]
pub enum ProjectError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Validation(String),
}

impl From<std::io::Error> for ProjectError {
    fn from(e: std::io::Error) -> Self {
        ProjectError::Io(e)
    }
}

impl From<serde_json::Error> for ProjectError {
    fn from(e: serde_json::Error) -> Self {
        ProjectError::Json(e)
    }
}

impl fmt::Display for ProjectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectError::Io(e) => write!(f, "IO error: {}", e),
            ProjectError::Json(e) => write!(f, "JSON error: {}", e),
            ProjectError::Validation(e) => write!(f, "Validation error: {}", e),
        }
    }
}

impl std::error::Error for ProjectError {}

/// The persisted project record
///
/// Field names and nesting are the on-disk contract; do not rename.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub grid_size: usize,
    pub image_data: Vec<Vec<Option<Rgb>>>,
}

impl Project {
    /// Snapshot the current grid into a persistable record
    pub fn from_grid(grid: &PixelGrid) -> Self {
        let size = grid.size();
        let mut image_data = vec![vec![None; size]; size];
        for (row, col, cell) in grid.iter() {
            image_data[row][col] = cell;
        }
        Self {
            grid_size: size,
            image_data,
        }
    }

    /// Check that image_data dimensions agree with grid_size
    pub fn validate(&self) -> Result<(), ProjectError> {
        if self.grid_size < 1 {
            return Err(ProjectError::Validation(format!(
                "grid_size must be at least 1, got {}",
                self.grid_size
            )));
        }
        if self.image_data.len() != self.grid_size {
            return Err(ProjectError::Validation(format!(
                "image_data has {} rows, expected {}",
                self.image_data.len(),
                self.grid_size
            )));
        }
        for (row, cells) in self.image_data.iter().enumerate() {
            if cells.len() != self.grid_size {
                return Err(ProjectError::Validation(format!(
                    "row {} has {} cells, expected {}",
                    row,
                    cells.len(),
                    self.grid_size
                )));
            }
        }
        Ok(())
    }

    /// Build a fully-populated grid from this record
    pub fn into_grid(self) -> Result<PixelGrid, ProjectError> {
        self.validate()?;
        let size = self.grid_size;
        let cells: Vec<Option<Rgb>> = self.image_data.into_iter().flatten().collect();

        let mut grid = PixelGrid::new(size);
        grid.replace_all(size, cells)
            .map_err(|e| ProjectError::Validation(e.to_string()))?;
        Ok(grid)
    }
}

/// Serialize a grid to project JSON
pub fn encode(grid: &PixelGrid) -> Result<String, ProjectError> {
    let project = Project::from_grid(grid);
    Ok(serde_json::to_string(&project)?)
}

/// Deserialize project JSON into a fresh grid
///
/// Callers keep their current grid when this fails; no partial state is
/// ever returned.
pub fn decode(text: &str) -> Result<PixelGrid, ProjectError> {
    let project: Project = serde_json::from_str(text)?;
    project.into_grid()
}

/// Write a grid to a `.pix` file
pub fn save<P: AsRef<Path>>(grid: &PixelGrid, path: P) -> Result<(), ProjectError> {
    let text = encode(grid)?;
    fs::write(path, text)?;
    Ok(())
}

/// Read a grid from a `.pix` file
pub fn load<P: AsRef<Path>>(path: P) -> Result<PixelGrid, ProjectError> {
    let text = fs::read_to_string(path)?;
    decode(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_grid() -> PixelGrid {
        let mut grid = PixelGrid::new(8);
        grid.set(0, 0, Rgb::WHITE).unwrap();
        grid.set(2, 3, Rgb::new(255, 0, 0)).unwrap();
        grid.set(7, 7, Rgb::new(0, 128, 128)).unwrap();
        grid
    }

    #[test]
    fn test_round_trip() {
        let grid = sample_grid();
        let text = encode(&grid).unwrap();
        let back = decode(&text).unwrap();
        assert_eq!(back, grid);
    }

    #[test]
    fn test_round_trip_blank_and_resized() {
        for size in [1, 8, 16, 32, 13] {
            let grid = PixelGrid::new(size);
            let back = decode(&encode(&grid).unwrap()).unwrap();
            assert_eq!(back, grid);
        }
    }

    #[test]
    fn test_encoded_shape_is_the_contract() {
        let mut grid = PixelGrid::new(2);
        grid.set(0, 1, Rgb::new(255, 0, 0)).unwrap();
        let text = encode(&grid).unwrap();

        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["grid_size"], 2);
        // Outer array indexed by row, literal hex string or null
        assert_eq!(value["image_data"][0][0], serde_json::Value::Null);
        assert_eq!(value["image_data"][0][1], "#FF0000");
        assert_eq!(value["image_data"][1][0], serde_json::Value::Null);
    }

    #[test]
    fn test_white_and_unset_survive_round_trip() {
        let mut grid = PixelGrid::new(4);
        grid.set(0, 0, Rgb::WHITE).unwrap();
        let back = decode(&encode(&grid).unwrap()).unwrap();
        assert_eq!(back.get(0, 0).unwrap(), Some(Rgb::WHITE));
        assert_eq!(back.get(0, 1).unwrap(), None);
    }

    #[test]
    fn test_decode_rejects_row_count_mismatch() {
        // 10 rows claimed as a 16x16 grid
        let rows: Vec<String> = (0..10)
            .map(|_| format!("[{}]", vec!["null"; 16].join(",")))
            .collect();
        let text = format!(
            "{{\"grid_size\":16,\"image_data\":[{}]}}",
            rows.join(",")
        );
        let err = decode(&text).unwrap_err();
        assert!(matches!(err, ProjectError::Validation(_)));
    }

    #[test]
    fn test_decode_rejects_ragged_rows() {
        let text = r##"{"grid_size":2,"image_data":[["#000000",null],[null]]}"##;
        assert!(matches!(
            decode(text).unwrap_err(),
            ProjectError::Validation(_)
        ));
    }

    #[test]
    fn test_decode_rejects_missing_fields_and_bad_json() {
        assert!(matches!(
            decode(r#"{"image_data":[]}"#).unwrap_err(),
            ProjectError::Json(_)
        ));
        assert!(matches!(
            decode(r#"{"grid_size":8}"#).unwrap_err(),
            ProjectError::Json(_)
        ));
        assert!(matches!(decode("not json").unwrap_err(), ProjectError::Json(_)));
        assert!(matches!(
            decode(r#"{"grid_size":0,"image_data":[]}"#).unwrap_err(),
            ProjectError::Validation(_)
        ));
    }

    #[test]
    fn test_decode_rejects_bad_hex_cell() {
        let text = r#"{"grid_size":1,"image_data":[["red"]]}"#;
        assert!(matches!(decode(text).unwrap_err(), ProjectError::Json(_)));
    }

    #[test]
    fn test_save_and_load_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("sprite.pix");

        let grid = sample_grid();
        save(&grid, &path).unwrap();
        let back = load(&path).unwrap();
        assert_eq!(back, grid);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = load(dir.path().join("nope.pix")).unwrap_err();
        assert!(matches!(err, ProjectError::Io(_)));
    }
}
