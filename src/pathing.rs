use crate::cells::{CellCoordinate, CoordinateSmallVec};
use crate::utils::{self, FnvHashMap};
use crate::walls::Walls;

/// Number of steps from a start cell to every cell reachable from it.
#[derive(Debug, Clone)]
pub struct Distances {
    start_coordinate: CellCoordinate,
    distances: FnvHashMap<CellCoordinate, u32>,
    max_distance: u32,
}

impl Distances {
    /// Flood fill outwards from `start_coordinate` through open walls.
    /// None if the start is not a cell of the maze.
    pub fn new(walls: &Walls, start_coordinate: CellCoordinate) -> Option<Distances> {

        if !walls.dimensions().is_valid_coordinate(start_coordinate) {
            return None;
        }

        let mut max = 0;
        let mut distances = utils::fnv_hashmap(walls.dimensions().size());
        distances.insert(start_coordinate, 0);

        // Every link is one step, so the first time a cell is reached is by a shortest route and the
        // map doubles as the visited set.
        let mut frontier = vec![start_coordinate];
        while !frontier.is_empty() {

            let mut new_frontier = vec![];
            for cell_coord in &frontier {
                let distance_to_cell = distances[cell_coord];
                if distance_to_cell > max {
                    max = distance_to_cell;
                }

                for link_coordinate in walls.links(*cell_coord).iter() {
                    if !distances.contains_key(link_coordinate) {
                        distances.insert(*link_coordinate, distance_to_cell + 1);
                        new_frontier.push(*link_coordinate);
                    }
                }
            }
            frontier = new_frontier;
        }

        Some(Distances {
            start_coordinate,
            distances,
            max_distance: max,
        })
    }

    #[inline]
    pub fn start(&self) -> CellCoordinate {
        self.start_coordinate
    }

    #[inline]
    pub fn max_distance(&self) -> u32 {
        self.max_distance
    }

    /// None if the cell cannot be reached from the start.
    #[inline]
    pub fn distance_from_start_to(&self, coord: CellCoordinate) -> Option<u32> {
        self.distances.get(&coord).cloned()
    }

    #[inline]
    pub fn reachable_count(&self) -> usize {
        self.distances.len()
    }

    /// All cells at the maximum distance from the start.
    pub fn furthest_points(&self) -> CoordinateSmallVec {
        let mut points: CoordinateSmallVec = self.distances
            .iter()
            .filter(|&(_, &d)| d == self.max_distance)
            .map(|(&coord, _)| coord)
            .collect();
        points.sort();
        points
    }
}

/// Walk back from `end_point` to the start of `distances`, always stepping to a linked cell one
/// closer to the start. The path returned runs from the start to the end, both included.
pub fn shortest_path(walls: &Walls,
                     distances: &Distances,
                     end_point: CellCoordinate)
                     -> Option<Vec<CellCoordinate>> {

    let end_distance = distances.distance_from_start_to(end_point)?;

    let mut path = Vec::with_capacity(end_distance as usize + 1);
    path.push(end_point);
    let mut current = end_point;
    let mut current_distance = end_distance;

    while current != distances.start() {
        let previous = walls.links(current)
            .iter()
            .cloned()
            .find(|&link| distances.distance_from_start_to(link) == Some(current_distance - 1))?;
        path.push(previous);
        current = previous;
        current_distance -= 1;
    }

    path.reverse();
    Some(path)
}

/// The route the ball has to roll, from the top left cell to the goal in the bottom right.
pub fn solution(walls: &Walls) -> Option<Vec<CellCoordinate>> {
    let start = CellCoordinate::new(0, 0);
    let distances = Distances::new(walls, start)?;
    shortest_path(walls, &distances, walls.dimensions().last_cell())
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::cells::GridDimensions;
    use crate::generators::generate_maze;
    use crate::grid::Grid;
    use crate::units::{ColumnsCount, RowsCount};
    use quickcheck::quickcheck;
    use rand::rngs::mock::StepRng;
    use rand::SeedableRng;
    use rand_xorshift::XorShiftRng;

    fn gc(row: usize, column: usize) -> CellCoordinate {
        CellCoordinate::new(row, column)
    }

    fn zero_rng_2_by_2() -> Walls {
        generate_maze(RowsCount(2), ColumnsCount(2), &mut StepRng::new(0, 0)).unwrap()
    }

    #[test]
    fn distances_construction_requires_valid_start_coordinate() {
        let walls = zero_rng_2_by_2();
        assert!(Distances::new(&walls, gc(2, 0)).is_none());
        assert!(Distances::new(&walls, gc(0, 2)).is_none());
    }

    #[test]
    fn distances_along_the_known_maze() {
        // (0,0) -> (0,1) -> (1,1) -> (1,0)
        let walls = zero_rng_2_by_2();
        let d = Distances::new(&walls, gc(0, 0)).unwrap();
        assert_eq!(d.start(), gc(0, 0));
        assert_eq!(d.distance_from_start_to(gc(0, 0)), Some(0));
        assert_eq!(d.distance_from_start_to(gc(0, 1)), Some(1));
        assert_eq!(d.distance_from_start_to(gc(1, 1)), Some(2));
        assert_eq!(d.distance_from_start_to(gc(1, 0)), Some(3));
        assert_eq!(d.max_distance(), 3);
        assert_eq!(&*d.furthest_points(), &[gc(1, 0)]);
    }

    #[test]
    fn unreachable_cells_have_no_distance() {
        let d = GridDimensions::new(RowsCount(2), ColumnsCount(2)).unwrap();
        let walls = Grid::new(d).into_walls();
        let distances = Distances::new(&walls, gc(0, 0)).unwrap();
        assert_eq!(distances.reachable_count(), 1);
        assert_eq!(distances.distance_from_start_to(gc(1, 1)), None);
        assert!(shortest_path(&walls, &distances, gc(1, 1)).is_none());
        assert!(solution(&walls).is_none());
    }

    #[test]
    fn known_solution() {
        let walls = zero_rng_2_by_2();
        assert_eq!(solution(&walls), Some(vec![gc(0, 0), gc(0, 1), gc(1, 1)]));
    }

    #[test]
    fn path_to_start_is_just_the_start() {
        let walls = zero_rng_2_by_2();
        let d = Distances::new(&walls, gc(1, 1)).unwrap();
        assert_eq!(shortest_path(&walls, &d, gc(1, 1)), Some(vec![gc(1, 1)]));
    }

    #[test]
    fn generated_mazes_are_always_solvable() {
        fn p(rows: u8, columns: u8, seed: u64) -> bool {
            let (rows, columns) = (rows as usize % 16 + 1, columns as usize % 16 + 1);
            let mut rng = XorShiftRng::seed_from_u64(seed);
            let walls = generate_maze(RowsCount(rows), ColumnsCount(columns), &mut rng).unwrap();

            let every_cell_reachable = Distances::new(&walls, gc(0, 0))
                .map_or(false, |d| d.reachable_count() == rows * columns);
            let path = match solution(&walls) {
                Some(path) => path,
                None => return false,
            };
            let ends_are_right = path.first() == Some(&gc(0, 0)) &&
                                 path.last() == Some(&gc(rows - 1, columns - 1));
            let steps_are_linked = path.windows(2).all(|pair| walls.is_linked(pair[0], pair[1]));
            every_cell_reachable && ends_are_right && steps_are_linked
        }
        quickcheck(p as fn(u8, u8, u64) -> bool);
    }
}
