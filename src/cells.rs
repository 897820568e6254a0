use error_chain::bail;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::errors::*;
use crate::units::{ColumnsCount, EdgesCount, RowsCount};

pub type CoordinateSmallVec = SmallVec<[CellCoordinate; 4]>;

/// A cell in the maze grid. Row 0 is the top of the maze, column 0 the left.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd, Serialize, Deserialize)]
pub struct CellCoordinate {
    pub row: usize,
    pub column: usize,
}

impl CellCoordinate {
    pub fn new(row: usize, column: usize) -> CellCoordinate {
        CellCoordinate { row, column }
    }
}

impl From<(usize, usize)> for CellCoordinate {
    fn from(row_column_pair: (usize, usize)) -> CellCoordinate {
        CellCoordinate::new(row_column_pair.0, row_column_pair.1)
    }
}

#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// The neighbour candidate order a cell starts from before it is shuffled.
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Right, Direction::Down, Direction::Left];

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
        }
    }
}

/// Size of a rectangular grid, at least 1 x 1. The cell count and the interior edge count (just
/// under twice the cell count) both fit in a `usize`.
#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub struct GridDimensions {
    rows: RowsCount,
    columns: ColumnsCount,
}

impl GridDimensions {
    pub fn new(rows: RowsCount, columns: ColumnsCount) -> Result<GridDimensions> {
        let edges_fit = rows.0.checked_mul(columns.0)
            .and_then(|cells| cells.checked_mul(2))
            .is_some();
        if rows.0 == 0 || columns.0 == 0 || !edges_fit {
            bail!(ErrorKind::InvalidDimension(rows.0, columns.0));
        }
        Ok(GridDimensions { rows, columns })
    }

    #[inline(always)]
    pub fn rows(&self) -> RowsCount {
        self.rows
    }

    #[inline(always)]
    pub fn columns(&self) -> ColumnsCount {
        self.columns
    }

    #[inline(always)]
    pub fn size(&self) -> usize {
        self.rows.0 * self.columns.0
    }

    /// Count of interior edges between adjacent cells, open or not.
    pub fn edges_count(&self) -> EdgesCount {
        let (RowsCount(rows), ColumnsCount(columns)) = (self.rows, self.columns);
        EdgesCount(rows * (columns - 1) + (rows - 1) * columns)
    }

    /// The bottom right cell, where the goal sits.
    pub fn last_cell(&self) -> CellCoordinate {
        CellCoordinate::new(self.rows.0 - 1, self.columns.0 - 1)
    }

    #[inline]
    pub fn is_valid_coordinate(&self, coord: CellCoordinate) -> bool {
        coord.row < self.rows.0 && coord.column < self.columns.0
    }

    #[inline]
    pub fn coordinate_to_index(&self, coord: CellCoordinate) -> Option<usize> {
        if self.is_valid_coordinate(coord) {
            Some(coord.row * self.columns.0 + coord.column)
        } else {
            None
        }
    }

    #[inline]
    pub fn coordinate_from_index(&self, index: usize) -> CellCoordinate {
        let ColumnsCount(width) = self.columns;
        CellCoordinate::new(index / width, index % width)
    }

    /// Creates a new coordinate offset 1 cell away in the given direction.
    /// Returns None if that cell lies outside the grid.
    pub fn offset_coordinate(&self, coord: CellCoordinate, dir: Direction) -> Option<CellCoordinate> {
        let (row, column) = (coord.row, coord.column);
        let neighbour = match dir {
            Direction::Up => row.checked_sub(1).map(|r| CellCoordinate::new(r, column)),
            Direction::Right => column.checked_add(1).map(|c| CellCoordinate::new(row, c)),
            Direction::Down => row.checked_add(1).map(|r| CellCoordinate::new(r, column)),
            Direction::Left => column.checked_sub(1).map(|c| CellCoordinate::new(row, c)),
        };
        neighbour.filter(|c| self.is_valid_coordinate(*c))
    }

    /// Cells up, right, down or left of a cell, not necessarily linked by a passage.
    pub fn neighbours(&self, coord: CellCoordinate) -> CoordinateSmallVec {
        Direction::ALL
            .iter()
            .filter_map(|dir| self.offset_coordinate(coord, *dir))
            .collect()
    }

    /// Row-major iteration over every cell.
    pub fn iter(&self) -> impl Iterator<Item = CellCoordinate> {
        let dimensions = *self;
        (0..self.size()).map(move |index| dimensions.coordinate_from_index(index))
    }
}
