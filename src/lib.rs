//! # grid_astar
//!
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) search on a 2-D grid with walls.
//! Movement is 8-directional with integer costs: [C] for a straight step and [D] for a diagonal
//! one. The heuristic is the Manhattan distance to the end scaled by [C] and is computed once
//! for the whole grid before searching.
//!
//! Every cell of a [Grid] carries a [Node] holding its G, H and F cost and a back-pointer to its
//! predecessor on the best route found so far. [AstarSearch] owns the frontier and visited sets
//! and repeatedly expands the frontier member with the lowest F (then H, then coordinate) until
//! the end is selected or the frontier runs dry.
//!
//! ```
//! use grid_astar::{find_path, Grid};
//! use grid_util::Point;
//!
//! let mut grid = Grid::create(3, 3).unwrap();
//! grid.set_start(Point::new(0, 0)).unwrap();
//! grid.set_end(Point::new(2, 2)).unwrap();
//! grid.set_walls(vec![Point::new(1, 1)]).unwrap();
//! grid.compute_heuristic_all().unwrap();
//! let path = find_path(&mut grid).unwrap();
//! assert_eq!(path.first(), Some(&Point::new(0, 0)));
//! assert_eq!(path.last(), Some(&Point::new(2, 2)));
//! ```
pub mod cost;
pub mod description;
pub mod error;
pub mod frontier;
pub mod grid;
pub mod node;
pub mod path;
pub mod render;
pub mod report;
pub mod search;

pub use description::GridDescription;
pub use error::{AstarError, Result};
pub use grid::Grid;
pub use node::{CellKind, Node};
pub use path::{convert_cost_to_unit_cost_float, path_cost};
pub use render::render_path;
pub use report::SearchReport;
pub use search::{AstarSearch, SearchConfig, SearchState};

use grid_util::Point;
use std::time::Instant;

/// Cost of a straight move.
pub const C: i32 = 10;
/// Cost of a diagonal move, roughly `C * sqrt(2)`.
pub const D: i32 = 14;
pub const DIAGONAL_SURCHARGE: i32 = D - C;
/// A cell re-enters the frontier at most once per neighbour, which bounds the number of
/// iterations by this factor times the number of cells.
pub const ITERATION_CAP_FACTOR: usize = 8;

/// Runs a search to completion and returns the path in Start to End order.
pub fn find_path(grid: &mut Grid) -> Result<Vec<Point>> {
    let mut search = AstarSearch::new(grid)?;
    search.run()?;
    search.path()
}

/// Like [find_path], with the iteration cap of [SearchConfig::bounded], and also returns a
/// timed [SearchReport]. The report is produced for every search that started; the inner result
/// holds the path, [NoPathFound](AstarError::NoPathFound) or
/// [SearchAborted](AstarError::SearchAborted).
pub fn solve(grid: &mut Grid) -> Result<(Result<Vec<Point>>, SearchReport)> {
    let config = SearchConfig::bounded(grid);
    solve_with_config(grid, config)
}

fn solve_with_config(
    grid: &mut Grid,
    config: SearchConfig,
) -> Result<(Result<Vec<Point>>, SearchReport)> {
    let now = Instant::now();
    let mut search = AstarSearch::with_config(grid, config)?;
    let outcome = match search.run() {
        Ok(_) => search.path(),
        Err(e @ AstarError::SearchAborted { .. }) => Err(e),
        Err(e) => return Err(e),
    };
    let elapsed = now.elapsed();
    Ok((outcome, search.report(elapsed)))
}
