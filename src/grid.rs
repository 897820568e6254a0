use std::fmt;

use bit_set::BitSet;

use crate::cells::{CellCoordinate, GridDimensions};
use crate::walls::Walls;

/// Working state of one maze generation run: which cells have been visited plus the walls carved
/// so far. Each run owns a fresh grid; once generation finishes only the walls are kept.
pub struct Grid {
    visited: BitSet,
    walls: Walls,
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Grid :: dimensions: {:?}, visited: {:?}, links: {:?}",
               self.walls.dimensions(), self.visited.len(), self.walls.links_count())
    }
}

impl Grid {
    pub fn new(dimensions: GridDimensions) -> Grid {
        Grid {
            visited: BitSet::with_capacity(dimensions.size()),
            walls: Walls::new(dimensions),
        }
    }

    #[inline]
    pub fn dimensions(&self) -> &GridDimensions {
        self.walls.dimensions()
    }

    #[inline]
    pub fn walls(&self) -> &Walls {
        &self.walls
    }

    #[inline]
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    /// Panics if the coordinate is outside the grid. Callers bounds check first.
    #[inline]
    pub fn is_visited(&self, coord: CellCoordinate) -> bool {
        self.visited.contains(self.cell_index(coord))
    }

    /// Panics if the coordinate is outside the grid.
    #[inline]
    pub fn mark_visited(&mut self, coord: CellCoordinate) {
        let index = self.cell_index(coord);
        let _ = self.visited.insert(index);
    }

    /// Remove the wall between `coord` and the cell to its right.
    /// Panics unless `coord.column` is in `[0, columns - 2]`.
    pub fn open_vertical(&mut self, coord: CellCoordinate) {
        self.walls.open_vertical(coord);
    }

    /// Remove the wall between `coord` and the cell below it.
    /// Panics unless `coord.row` is in `[0, rows - 2]`.
    pub fn open_horizontal(&mut self, coord: CellCoordinate) {
        self.walls.open_horizontal(coord);
    }

    /// Finish with the grid, discarding the visited cells.
    pub fn into_walls(self) -> Walls {
        self.walls
    }

    fn cell_index(&self, coord: CellCoordinate) -> usize {
        self.dimensions()
            .coordinate_to_index(coord)
            .unwrap_or_else(|| panic!("cell {:?} is outside the grid", coord))
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::units::{ColumnsCount, RowsCount};

    fn grid(rows: usize, columns: usize) -> Grid {
        Grid::new(GridDimensions::new(RowsCount(rows), ColumnsCount(columns)).expect("valid dimensions"))
    }

    #[test]
    fn cells_start_unvisited() {
        let g = grid(3, 2);
        assert!(g.dimensions().iter().all(|c| !g.is_visited(c)));
        assert_eq!(g.visited_count(), 0);
    }

    #[test]
    fn mark_visited_is_idempotent() {
        let mut g = grid(3, 2);
        let c = CellCoordinate::new(2, 1);
        g.mark_visited(c);
        g.mark_visited(c);
        assert!(g.is_visited(c));
        assert!(!g.is_visited(CellCoordinate::new(1, 1)));
        assert_eq!(g.visited_count(), 1);
    }

    #[test]
    #[should_panic]
    fn visited_query_outside_grid_panics() {
        let g = grid(2, 2);
        let _ = g.is_visited(CellCoordinate::new(2, 0));
    }

    #[test]
    fn walls_survive_the_grid() {
        let mut g = grid(2, 3);
        g.mark_visited(CellCoordinate::new(0, 0));
        g.open_vertical(CellCoordinate::new(0, 1));
        g.open_horizontal(CellCoordinate::new(0, 2));
        let walls = g.into_walls();
        assert!(walls.is_vertical_open(CellCoordinate::new(0, 1)));
        assert!(walls.is_horizontal_open(CellCoordinate::new(0, 2)));
        assert_eq!(walls.links_count(), 2);
    }
}
