use grid_astar::{render_path, solve, GridDescription};
use log::info;
use std::error::Error;
use std::fs;

// Reads a grid description (X = wall, S = start, E = end), searches it and prints the grid with
// the path drawn in, followed by every visited node.
//
// cargo run --example solve_file -- demos/input.txt
fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let file = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "demos/input.txt".to_owned());
    info!("Reading grid from {}", file);
    let description = fs::read_to_string(&file)?.parse::<GridDescription>()?;
    let mut grid = description.build()?;
    let (path, report) = solve(&mut grid)?;
    match path {
        Ok(path) => print!("{}", render_path(&grid, &path)),
        Err(e) => {
            print!("{}", grid);
            println!("{}", e);
        }
    }
    println!();
    print!("{}", report);
    Ok(())
}
