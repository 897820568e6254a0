use std::fs;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::cells::GridDimensions;
use crate::errors::*;
use crate::layout::{self, LayoutOptions};
use crate::units::{CellHeight, CellWidth, ColumnsCount, RowsCount, WallThickness};

/// Size of the maze and of the canvas it is drawn on.
///
/// Any field left out of a JSON config takes its default: a 3 x 3 maze on a 600 x 600 canvas with
/// walls 2 units thick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MazeConfig {
    pub rows: usize,
    pub columns: usize,
    pub width: f32,
    pub height: f32,
    pub wall_thickness: f32,
}

impl Default for MazeConfig {
    fn default() -> MazeConfig {
        MazeConfig {
            rows: 3,
            columns: 3,
            width: 600.0,
            height: 600.0,
            wall_thickness: 2.0,
        }
    }
}

impl MazeConfig {
    pub fn from_json_str(json: &str) -> Result<MazeConfig> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<MazeConfig> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .chain_err(|| format!("Failed to read maze config {}", path.display()))?;
        let config = MazeConfig::from_json_str(&json)
            .chain_err(|| format!("Failed to parse maze config {}", path.display()))?;
        info!("loaded maze config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    pub fn dimensions(&self) -> Result<GridDimensions> {
        GridDimensions::new(RowsCount(self.rows), ColumnsCount(self.columns))
    }

    /// Cells share the canvas evenly, so each one is `width / columns` wide and `height / rows` high.
    pub fn layout_options(&self) -> Result<LayoutOptions> {
        let dimensions = self.dimensions()?;
        layout::ensure_positive("canvas width", self.width)?;
        layout::ensure_positive("canvas height", self.height)?;
        LayoutOptions::new(CellWidth(self.width / dimensions.columns().0 as f32),
                           CellHeight(self.height / dimensions.rows().0 as f32),
                           WallThickness(self.wall_thickness))
    }
}
