//! **maze_layout** generates perfect mazes with a randomized recursive backtracker and lays them out
//! as wall rectangles, a goal square and a ball start point for a 2D physics world.

pub mod cells;
pub mod config;
pub mod errors;
pub mod generators;
pub mod grid;
pub mod grid_displays;
pub mod layout;
pub mod pathing;
pub mod units;
pub mod walls;
mod utils;
