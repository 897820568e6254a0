use std::fs;

use docopt::Docopt;
use log::info;
use rand::{Rng, SeedableRng};
use rand_xorshift::XorShiftRng;
use serde::Deserialize;

use maze_layout::{
    cells::CellCoordinate,
    config::MazeConfig,
    generators,
    grid_displays::{PathDisplay, StartEndPointsDisplay},
    layout::MazeLayout,
    pathing,
};

const USAGE: &str = "Maze driver

Usage:
    maze_driver -h | --help
    maze_driver [--config=<path>] [--rows=<n>] [--columns=<n>] [--seed=<n>] [--show-path] [--text-out=<path>] [--layout-json=<path>]

Options:
    -h --help              Show this screen.
    --config=<path>        JSON maze config with any of: rows, columns, width, height, wall_thickness.
    --rows=<n>             Number of cell rows, overrides the config.
    --columns=<n>          Number of cell columns, overrides the config.
    --seed=<n>             Seed the random generator to get the same maze again.
    --show-path            Draw the solution from the ball start to the goal instead of the S and E markers.
    --text-out=<path>      Write the text rendering of the maze to a file instead of stdout.
    --layout-json=<path>   Write the wall segments, goal and ball for the physics world as JSON.
";

#[derive(Debug, Deserialize)]
struct MazeArgs {
    flag_config: Option<String>,
    flag_rows: Option<usize>,
    flag_columns: Option<usize>,
    flag_seed: Option<u64>,
    flag_show_path: bool,
    flag_text_out: Option<String>,
    flag_layout_json: Option<String>,
}

mod errors {
    use error_chain::*;
    error_chain! {

        links {
            Maze(::maze_layout::errors::Error, ::maze_layout::errors::ErrorKind);
        }

        foreign_links {
            DocOptFailure(::docopt::Error);
            Io(::std::io::Error);
        }
    }
}
use crate::errors::*;

fn main() -> Result<()> {
    env_logger::init();

    let args: MazeArgs = Docopt::new(USAGE).and_then(|d| d.deserialize())?;

    let mut config = match args.flag_config {
        Some(ref path) => MazeConfig::load(path)?,
        None => MazeConfig::default(),
    };
    if let Some(rows) = args.flag_rows {
        config.rows = rows;
    }
    if let Some(columns) = args.flag_columns {
        config.columns = columns;
    }

    let dimensions = config.dimensions()?;
    let layout_options = config.layout_options()?;

    let seed = args.flag_seed.unwrap_or_else(|| rand::thread_rng().gen());
    info!("generating {} x {} maze with seed {}", config.rows, config.columns, seed);
    let mut rng = XorShiftRng::seed_from_u64(seed);
    let walls = generators::generate_maze(dimensions.rows(), dimensions.columns(), &mut rng)?;

    let text = if args.flag_show_path {
        let path = pathing::solution(&walls)
            .ok_or("Generated maze has no route from the start to the goal.")?;
        walls.render_text(&PathDisplay::new(&path))
    } else {
        walls.render_text(&StartEndPointsDisplay::new(CellCoordinate::new(0, 0), dimensions.last_cell()))
    };

    match args.flag_text_out {
        Some(ref path) => {
            fs::write(path, &text)
                .chain_err(|| format!("Failed to write maze to text file {}", path))?;
            info!("wrote text maze to {}", path);
        }
        None => println!("{}", text),
    }

    if let Some(ref path) = args.flag_layout_json {
        let layout = MazeLayout::new(&walls, layout_options);
        fs::write(path, layout.to_json()?)
            .chain_err(|| format!("Failed to write maze layout to {}", path))?;
        info!("wrote {} wall segments to {}", layout.walls.len(), path);
    }

    Ok(())
}
