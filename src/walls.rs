use std::fmt;

use bit_set::BitSet;
use petgraph::graph::{NodeIndex, UnGraph};

use crate::cells::{CellCoordinate, CoordinateSmallVec, Direction, GridDimensions};
use crate::grid_displays::{BlankDisplay, CellDisplay};
use crate::units::{ColumnsCount, RowsCount};

/// Open/closed state of every interior edge of a maze.
///
/// The vertical matrix is `rows x (columns - 1)`: entry `(r, c)` is the edge between cell `(r, c)`
/// and `(r, c + 1)`. The horizontal matrix is `(rows - 1) x columns`: entry `(r, c)` is the edge
/// between `(r, c)` and `(r + 1, c)`. A set bit means the wall has been removed.
///
/// Only the maze grid can open walls, so once generation hands these out they are immutable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Walls {
    dimensions: GridDimensions,
    vertical: BitSet,
    horizontal: BitSet,
}

impl Walls {
    pub(crate) fn new(dimensions: GridDimensions) -> Walls {
        let (RowsCount(rows), ColumnsCount(columns)) = (dimensions.rows(), dimensions.columns());
        Walls {
            dimensions,
            vertical: BitSet::with_capacity(rows * (columns - 1)),
            horizontal: BitSet::with_capacity((rows - 1) * columns),
        }
    }

    #[inline]
    pub fn dimensions(&self) -> &GridDimensions {
        &self.dimensions
    }

    /// Panics if `coord.column` is not in `[0, columns - 2]` or `coord.row` is not in `[0, rows - 1]`.
    pub(crate) fn open_vertical(&mut self, coord: CellCoordinate) {
        let index = self.vertical_index(coord)
            .unwrap_or_else(|| panic!("no vertical edge to the right of {:?}", coord));
        self.vertical.insert(index);
    }

    /// Panics if `coord.row` is not in `[0, rows - 2]` or `coord.column` is not in `[0, columns - 1]`.
    pub(crate) fn open_horizontal(&mut self, coord: CellCoordinate) {
        let index = self.horizontal_index(coord)
            .unwrap_or_else(|| panic!("no horizontal edge below {:?}", coord));
        self.horizontal.insert(index);
    }

    /// Is the edge between `coord` and the cell to its right open?
    /// False when there is no such edge.
    pub fn is_vertical_open(&self, coord: CellCoordinate) -> bool {
        self.vertical_index(coord).map_or(false, |i| self.vertical.contains(i))
    }

    /// Is the edge between `coord` and the cell below it open?
    /// False when there is no such edge.
    pub fn is_horizontal_open(&self, coord: CellCoordinate) -> bool {
        self.horizontal_index(coord).map_or(false, |i| self.horizontal.contains(i))
    }

    pub fn open_vertical_count(&self) -> usize {
        self.vertical.len()
    }

    pub fn open_horizontal_count(&self) -> usize {
        self.horizontal.len()
    }

    pub fn links_count(&self) -> usize {
        self.open_vertical_count() + self.open_horizontal_count()
    }

    /// Is there an open edge leading from `coord` in the given direction?
    pub fn is_neighbour_linked(&self, coord: CellCoordinate, direction: Direction) -> bool {
        match direction {
            Direction::Right => self.is_vertical_open(coord),
            Direction::Down => self.is_horizontal_open(coord),
            Direction::Left | Direction::Up => {
                self.dimensions
                    .offset_coordinate(coord, direction)
                    .map_or(false, |neighbour| self.is_neighbour_linked(neighbour, direction.opposite()))
            }
        }
    }

    /// Are two cells adjacent and joined by an open edge?
    pub fn is_linked(&self, a: CellCoordinate, b: CellCoordinate) -> bool {
        Direction::ALL.iter().any(|&dir| {
            self.dimensions.offset_coordinate(a, dir) == Some(b) && self.is_neighbour_linked(a, dir)
        })
    }

    /// Cells reachable from `coord` in one step through an open edge.
    pub fn links(&self, coord: CellCoordinate) -> CoordinateSmallVec {
        Direction::ALL
            .iter()
            .filter(|&&dir| self.is_neighbour_linked(coord, dir))
            .filter_map(|&dir| self.dimensions.offset_coordinate(coord, dir))
            .collect()
    }

    /// Every open edge as a pair of cells. Vertical edges come first in row-major order, then
    /// horizontal edges, also row-major.
    pub fn iter_links(&self) -> impl Iterator<Item = (CellCoordinate, CellCoordinate)> + '_ {
        let ColumnsCount(columns) = self.dimensions.columns();
        let vertical_links = self.vertical.iter().map(move |i| {
            let left = CellCoordinate::new(i / (columns - 1), i % (columns - 1));
            (left, CellCoordinate::new(left.row, left.column + 1))
        });
        let horizontal_links = self.horizontal.iter().map(move |i| {
            let top = CellCoordinate::new(i / columns, i % columns);
            (top, CellCoordinate::new(top.row + 1, top.column))
        });
        vertical_links.chain(horizontal_links)
    }

    /// The vertical matrix as nested rows, `true` meaning open.
    pub fn vertical_rows(&self) -> Vec<Vec<bool>> {
        let (RowsCount(rows), ColumnsCount(columns)) = (self.dimensions.rows(), self.dimensions.columns());
        (0..rows)
            .map(|r| (0..columns - 1).map(|c| self.is_vertical_open(CellCoordinate::new(r, c))).collect())
            .collect()
    }

    /// The horizontal matrix as nested rows, `true` meaning open.
    pub fn horizontal_rows(&self) -> Vec<Vec<bool>> {
        let (RowsCount(rows), ColumnsCount(columns)) = (self.dimensions.rows(), self.dimensions.columns());
        (0..rows - 1)
            .map(|r| (0..columns).map(|c| self.is_horizontal_open(CellCoordinate::new(r, c))).collect())
            .collect()
    }

    /// Undirected graph with one node per cell (node index is the row-major cell index) and one
    /// edge per open wall.
    pub fn passage_graph(&self) -> UnGraph<(), ()> {
        let mut graph = UnGraph::with_capacity(self.dimensions.size(), self.links_count());
        for _ in 0..self.dimensions.size() {
            let _ = graph.add_node(());
        }
        for (a, b) in self.iter_links() {
            if let (Some(a_index), Some(b_index)) =
                (self.dimensions.coordinate_to_index(a), self.dimensions.coordinate_to_index(b)) {
                let _ = graph.add_edge(NodeIndex::new(a_index), NodeIndex::new(b_index), ());
            }
        }
        graph
    }

    /// Box drawing rendering of the maze, with each 3 glyph cell body supplied by `display`.
    pub fn render_text(&self, display: &dyn CellDisplay) -> String {
        const WALL_L: &str = "╴";
        const WALL_R: &str = "╶";
        const WALL_U: &str = "╵";
        const WALL_D: &str = "╷";
        const WALL_LR_3: &str = "───";
        const WALL_LR: &str = "─";
        const WALL_UD: &str = "│";
        const WALL_LD: &str = "┐";
        const WALL_RU: &str = "└";
        const WALL_LU: &str = "┘";
        const WALL_RD: &str = "┌";
        const WALL_LRU: &str = "┴";
        const WALL_LRD: &str = "┬";
        const WALL_LRUD: &str = "┼";
        const WALL_RUD: &str = "├";
        const WALL_LUD: &str = "┤";

        let (RowsCount(rows_count), ColumnsCount(columns_count)) =
            (self.dimensions.rows(), self.dimensions.columns());

        // The top boundary is special cased, every other row draws its own bottom edge.
        let mut output = String::from(WALL_RD);
        for column in 0..columns_count {
            output.push_str(WALL_LR_3);
            let coord = CellCoordinate::new(0, column);
            if self.is_neighbour_linked(coord, Direction::Right) {
                output.push_str(WALL_LR);
            } else if column == columns_count - 1 {
                output.push_str(WALL_LD);
            } else {
                output.push_str(WALL_LRD);
            }
        }
        output.push('\n');

        for row in 0..rows_count {
            let is_last_row = row == rows_count - 1;

            let mut middle_section = String::from(WALL_UD);
            let mut bottom_section = String::new();

            for column in 0..columns_count {
                let coord = CellCoordinate::new(row, column);
                let is_last_column = column == columns_count - 1;
                let right_open = self.is_neighbour_linked(coord, Direction::Right);
                let down_open = self.is_neighbour_linked(coord, Direction::Down);

                middle_section.push_str(&display.render_cell_body(coord));
                middle_section.push_str(if right_open { " " } else { WALL_UD });

                if column == 0 {
                    bottom_section.push_str(if is_last_row {
                        WALL_RU
                    } else if down_open {
                        WALL_UD
                    } else {
                        WALL_RUD
                    });
                }
                bottom_section.push_str(if down_open { "   " } else { WALL_LR_3 });

                let corner = match (is_last_row, is_last_column) {
                    (true, true) => WALL_LU,
                    (true, false) => if right_open { WALL_LR } else { WALL_LRU },
                    (false, true) => if down_open { WALL_UD } else { WALL_LUD },
                    (false, false) => {
                        let right_cell = CellCoordinate::new(row, column + 1);
                        let down_cell = CellCoordinate::new(row + 1, column);
                        let show_right = !self.is_neighbour_linked(right_cell, Direction::Down);
                        let show_down = !self.is_neighbour_linked(down_cell, Direction::Right);
                        let show_up = !right_open;
                        let show_left = !down_open;

                        match (show_left, show_right, show_up, show_down) {
                            (true, true, true, true) => WALL_LRUD,
                            (true, true, true, false) => WALL_LRU,
                            (true, true, false, true) => WALL_LRD,
                            (true, false, true, true) => WALL_LUD,
                            (false, true, true, true) => WALL_RUD,
                            (true, true, false, false) => WALL_LR,
                            (false, false, true, true) => WALL_UD,
                            (false, true, true, false) => WALL_RU,
                            (true, false, false, true) => WALL_LD,
                            (true, false, true, false) => WALL_LU,
                            (false, true, false, true) => WALL_RD,
                            (true, false, false, false) => WALL_L,
                            (false, true, false, false) => WALL_R,
                            (false, false, true, false) => WALL_U,
                            (false, false, false, true) => WALL_D,
                            (false, false, false, false) => " ",
                        }
                    }
                };
                bottom_section.push_str(corner);
            }

            output.push_str(&middle_section);
            output.push('\n');
            output.push_str(&bottom_section);
            output.push('\n');
        }

        output
    }

    fn vertical_index(&self, coord: CellCoordinate) -> Option<usize> {
        let (RowsCount(rows), ColumnsCount(columns)) = (self.dimensions.rows(), self.dimensions.columns());
        if coord.row < rows && coord.column + 1 < columns {
            Some(coord.row * (columns - 1) + coord.column)
        } else {
            None
        }
    }

    fn horizontal_index(&self, coord: CellCoordinate) -> Option<usize> {
        let (RowsCount(rows), ColumnsCount(columns)) = (self.dimensions.rows(), self.dimensions.columns());
        if coord.row + 1 < rows && coord.column < columns {
            Some(coord.row * columns + coord.column)
        } else {
            None
        }
    }
}

impl fmt::Display for Walls {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.render_text(&BlankDisplay))
    }
}
