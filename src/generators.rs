use log::debug;
use rand::Rng;

use crate::cells::{CellCoordinate, Direction, GridDimensions};
use crate::errors::*;
use crate::grid::Grid;
use crate::units::{ColumnsCount, RowsCount};
use crate::walls::Walls;

/// Build a fresh grid of the given size and carve a perfect maze into it with the
/// recursive backtracker.
///
/// Fails with `InvalidDimension` before drawing any random numbers if either count is zero or
/// the grid is too large to index.
pub fn generate_maze<R>(rows: RowsCount, columns: ColumnsCount, rng: &mut R) -> Result<Walls>
    where R: Rng
{
    let dimensions = GridDimensions::new(rows, columns)?;
    let mut grid = Grid::new(dimensions);
    recursive_backtracker(&mut grid, rng);
    Ok(grid.into_walls())
}

/// Apply the recursive backtracker maze generation algorithm to a grid.
///
/// From a random start cell, take a random unvisited neighbour, knock down the wall between the two
/// and carry on from there. When a cell has no unvisited neighbours left, back up to the most recent
/// cell that still has one. Every cell is visited exactly once and a wall is only removed when
/// stepping into an unvisited cell, so the passages form a spanning tree: a perfect maze.
///
/// The backtracking is done with an explicit stack rather than the call stack so large grids are
/// fine. The order walls are removed in, and the order random numbers are drawn in, is the same as
/// the plain recursive version: each cell shuffles its 4 candidate neighbours when first entered,
/// and a candidate's visited state is checked only when it comes up.
pub fn recursive_backtracker<R>(grid: &mut Grid, rng: &mut R)
    where R: Rng
{
    let dimensions = *grid.dimensions();
    let start = random_start_cell(&dimensions, rng);
    debug!("recursive backtracker over {:?} starting at {:?}", dimensions, start);

    let mut stack: Vec<Frame> = Vec::new();
    stack.extend(enter_cell(grid, start, rng));

    while let Some(frame) = stack.last_mut() {

        if frame.next_candidate == frame.candidates.len() {
            stack.pop();
            continue;
        }
        let cell = frame.cell;
        let direction = frame.candidates[frame.next_candidate];
        frame.next_candidate += 1;

        let neighbour = match dimensions.offset_coordinate(cell, direction) {
            Some(coord) => coord,
            None => continue,
        };
        if grid.is_visited(neighbour) {
            continue;
        }

        remove_wall(grid, cell, neighbour, direction);
        stack.extend(enter_cell(grid, neighbour, rng));
    }

    debug!("recursive backtracker visited {} cells, opened {} walls",
           grid.visited_count(), grid.walls().links_count());
}

/// Choose a cell uniformly at random: the row is drawn first, then the column.
pub fn random_start_cell<R>(dimensions: &GridDimensions, rng: &mut R) -> CellCoordinate
    where R: Rng
{
    let (RowsCount(rows), ColumnsCount(columns)) = (dimensions.rows(), dimensions.columns());
    let row = rng.gen_range(0..rows);
    let column = rng.gen_range(0..columns);
    CellCoordinate::new(row, column)
}

/// Fisher-Yates shuffle, walking from the last index down to 1.
///
/// At index `i` an offset `k` is drawn uniformly from `[0, i]` and element `i` is swapped with
/// element `i - k`, which is itself uniform over `[0, i]`. A random source that only ever produces
/// zero therefore leaves the slice untouched.
pub fn shuffle<T, R>(items: &mut [T], rng: &mut R)
    where R: Rng
{
    for i in (1..items.len()).rev() {
        let offset = rng.gen_range(0..=i);
        items.swap(i, i - offset);
    }
}

/// A cell whose neighbours are being worked through.
#[derive(Debug)]
struct Frame {
    cell: CellCoordinate,
    candidates: [Direction; 4],
    next_candidate: usize,
}

fn enter_cell<R>(grid: &mut Grid, cell: CellCoordinate, rng: &mut R) -> Option<Frame>
    where R: Rng
{
    if grid.is_visited(cell) {
        return None;
    }
    grid.mark_visited(cell);

    let mut candidates = Direction::ALL;
    shuffle(&mut candidates, rng);
    Some(Frame {
        cell,
        candidates,
        next_candidate: 0,
    })
}

fn remove_wall(grid: &mut Grid, cell: CellCoordinate, neighbour: CellCoordinate, direction: Direction) {
    match direction {
        Direction::Right => grid.open_vertical(cell),
        Direction::Left => grid.open_vertical(neighbour),
        Direction::Down => grid.open_horizontal(cell),
        Direction::Up => grid.open_horizontal(neighbour),
    }
}
