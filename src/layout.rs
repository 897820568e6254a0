//! Turns a generated maze into the rectangles and markers a 2D physics world is built from.
//!
//! Coordinates are in canvas units with the origin at the top left corner of the maze and `y`
//! growing downwards. Every rectangle is described by its centre point and its full width and height.

use error_chain::bail;
use serde::{Deserialize, Serialize};

use crate::cells::{CellCoordinate, GridDimensions};
use crate::errors::*;
use crate::units::{CellHeight, CellWidth, WallThickness};
use crate::walls::Walls;

/// Side of the goal square relative to the cell it sits in.
pub const GOAL_SIZE_RATIO: f32 = 0.7;
/// Ball radius relative to the smaller cell side.
pub const BALL_RADIUS_RATIO: f32 = 0.25;

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutOptions {
    cell_width: CellWidth,
    cell_height: CellHeight,
    wall_thickness: WallThickness,
}

impl LayoutOptions {
    pub fn new(cell_width: CellWidth, cell_height: CellHeight, wall_thickness: WallThickness) -> Result<LayoutOptions> {
        ensure_positive("cell width", cell_width.0)?;
        ensure_positive("cell height", cell_height.0)?;
        ensure_positive("wall thickness", wall_thickness.0)?;
        Ok(LayoutOptions { cell_width, cell_height, wall_thickness })
    }

    pub fn cell_width(&self) -> CellWidth {
        self.cell_width
    }

    pub fn cell_height(&self) -> CellHeight {
        self.cell_height
    }

    pub fn wall_thickness(&self) -> WallThickness {
        self.wall_thickness
    }

    /// Centre point of a cell.
    pub fn cell_centre(&self, coord: CellCoordinate) -> (f32, f32) {
        let (w, h) = (self.cell_width.0, self.cell_height.0);
        (coord.column as f32 * w + w / 2.0, coord.row as f32 * h + h / 2.0)
    }
}

pub(crate) fn ensure_positive(name: &'static str, value: f32) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        bail!(ErrorKind::InvalidLength(name, value));
    }
    Ok(())
}

#[derive(Eq, PartialEq, Copy, Clone, Debug, Serialize, Deserialize)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A static rectangular obstacle.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct WallSegment {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub orientation: Orientation,
}

/// The square region the ball has to reach.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalMarker {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Where the player ball is placed and how big it is.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct BallMarker {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
}

/// One segment per wall still standing between two cells.
///
/// Closed horizontal edges come first, row by row, followed by the closed vertical edges.
/// A horizontal segment spans one cell width along the bottom of its upper cell; a vertical segment
/// spans one cell height along the right side of its left cell.
pub fn wall_segments(walls: &Walls, options: &LayoutOptions) -> Vec<WallSegment> {
    let (w, h) = (options.cell_width.0, options.cell_height.0);
    let WallThickness(thickness) = options.wall_thickness;
    let closed_count = walls.dimensions().edges_count().0 - walls.links_count();
    let mut segments = Vec::with_capacity(closed_count);

    for (row, open_row) in walls.horizontal_rows().iter().enumerate() {
        for (column, &open) in open_row.iter().enumerate() {
            if open {
                continue;
            }
            segments.push(WallSegment {
                x: column as f32 * w + w / 2.0,
                y: row as f32 * h + h,
                width: w,
                height: thickness,
                orientation: Orientation::Horizontal,
            });
        }
    }

    for (row, open_row) in walls.vertical_rows().iter().enumerate() {
        for (column, &open) in open_row.iter().enumerate() {
            if open {
                continue;
            }
            segments.push(WallSegment {
                x: column as f32 * w + w,
                y: row as f32 * h + h / 2.0,
                width: thickness,
                height: h,
                orientation: Orientation::Vertical,
            });
        }
    }

    debug_assert_eq!(segments.len(), closed_count);
    segments
}

/// The frame around the whole maze: top, bottom, left then right. Each is twice the wall
/// thickness and centred on the canvas edge, so half of it lies outside the canvas.
pub fn boundary_walls(dimensions: &GridDimensions, options: &LayoutOptions) -> [WallSegment; 4] {
    let width = dimensions.columns().0 as f32 * options.cell_width.0;
    let height = dimensions.rows().0 as f32 * options.cell_height.0;
    let thickness = options.wall_thickness.0 * 2.0;

    let horizontal = |y| WallSegment {
        x: width / 2.0,
        y,
        width,
        height: thickness,
        orientation: Orientation::Horizontal,
    };
    let vertical = |x| WallSegment {
        x,
        y: height / 2.0,
        width: thickness,
        height,
        orientation: Orientation::Vertical,
    };

    [horizontal(0.0), horizontal(height), vertical(0.0), vertical(width)]
}

/// Goal square centred in the bottom right cell.
pub fn goal_marker(dimensions: &GridDimensions, options: &LayoutOptions) -> GoalMarker {
    let (x, y) = options.cell_centre(dimensions.last_cell());
    GoalMarker {
        x,
        y,
        width: options.cell_width.0 * GOAL_SIZE_RATIO,
        height: options.cell_height.0 * GOAL_SIZE_RATIO,
    }
}

/// Ball centred in the top left cell.
pub fn ball_marker(options: &LayoutOptions) -> BallMarker {
    let (x, y) = options.cell_centre(CellCoordinate::new(0, 0));
    BallMarker {
        x,
        y,
        radius: options.cell_width.0.min(options.cell_height.0) * BALL_RADIUS_RATIO,
    }
}

/// Everything the physics layer needs to build the maze world.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MazeLayout {
    pub rows: usize,
    pub columns: usize,
    pub options: LayoutOptions,
    pub boundary: Vec<WallSegment>,
    pub walls: Vec<WallSegment>,
    pub goal: GoalMarker,
    pub ball: BallMarker,
}

impl MazeLayout {
    pub fn new(walls: &Walls, options: LayoutOptions) -> MazeLayout {
        let dimensions = walls.dimensions();
        MazeLayout {
            rows: dimensions.rows().0,
            columns: dimensions.columns().0,
            options,
            boundary: boundary_walls(dimensions, &options).to_vec(),
            walls: wall_segments(walls, &options),
            goal: goal_marker(dimensions, &options),
            ball: ball_marker(&options),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
