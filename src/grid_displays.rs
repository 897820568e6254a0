use crate::cells::CellCoordinate;
use crate::utils::{self, FnvHashSet};

pub trait CellDisplay {
    /// Render the contents of a grid cell as text.
    /// The String should be 3 glyphs long, padded if required.
    fn render_cell_body(&self, _: CellCoordinate) -> String {
        String::from("   ")
    }
}

#[derive(Debug, Copy, Clone)]
pub struct BlankDisplay;
impl CellDisplay for BlankDisplay {}

#[derive(Debug)]
pub struct PathDisplay {
    on_path_coordinates: FnvHashSet<CellCoordinate>,
}
impl PathDisplay {
    pub fn new(path: &[CellCoordinate]) -> Self {
        let mut on_path_coordinates = utils::fnv_hashset(path.len());
        on_path_coordinates.extend(path.iter().cloned());
        PathDisplay { on_path_coordinates }
    }
}
impl CellDisplay for PathDisplay {
    fn render_cell_body(&self, coord: CellCoordinate) -> String {
        if self.on_path_coordinates.contains(&coord) {
            String::from(" . ")
        } else {
            String::from("   ")
        }
    }
}

/// Marks where the ball starts and where the goal is.
#[derive(Debug)]
pub struct StartEndPointsDisplay {
    start: CellCoordinate,
    end: CellCoordinate,
}
impl StartEndPointsDisplay {
    pub fn new(start: CellCoordinate, end: CellCoordinate) -> StartEndPointsDisplay {
        StartEndPointsDisplay { start, end }
    }
}
impl CellDisplay for StartEndPointsDisplay {
    fn render_cell_body(&self, coord: CellCoordinate) -> String {
        if coord == self.start {
            String::from(" S ")
        } else if coord == self.end {
            String::from(" E ")
        } else {
            String::from("   ")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_cells_are_dotted() {
        let display = PathDisplay::new(&[CellCoordinate::new(0, 0), CellCoordinate::new(0, 1)]);
        assert_eq!(display.render_cell_body(CellCoordinate::new(0, 1)), " . ");
        assert_eq!(display.render_cell_body(CellCoordinate::new(1, 1)), "   ");
    }

    #[test]
    fn start_and_end_markers() {
        let display = StartEndPointsDisplay::new(CellCoordinate::new(0, 0), CellCoordinate::new(2, 2));
        assert_eq!(display.render_cell_body(CellCoordinate::new(0, 0)), " S ");
        assert_eq!(display.render_cell_body(CellCoordinate::new(2, 2)), " E ");
        assert_eq!(display.render_cell_body(CellCoordinate::new(1, 2)), "   ");
        assert_eq!(BlankDisplay.render_cell_body(CellCoordinate::new(0, 0)), "   ");
    }
}
