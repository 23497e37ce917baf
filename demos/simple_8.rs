use grid_astar::{find_path, render_path, Grid};
use grid_util::point::Point;

// In this example a path is found on a 3x3 grid with shape
//  ___
// |S  |
// | X |
// |  E|
//  ___
// where
// - X marks a wall
// - S marks the start
// - E marks the end
//
// Nodes have an 8-neighborhood

fn main() -> grid_astar::Result<()> {
    let mut grid = Grid::create(3, 3)?;
    grid.set_start(Point::new(0, 0))?;
    grid.set_end(Point::new(2, 2))?;
    grid.set_walls(vec![Point::new(1, 1)])?;
    grid.compute_heuristic_all()?;
    println!("{}", grid);
    let path = find_path(&mut grid)?;
    println!("{}", render_path(&grid, &path));
    println!("Path:");
    for p in path {
        println!("{:?}", p);
    }
    Ok(())
}
