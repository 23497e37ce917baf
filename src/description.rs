//! Text description of a grid, one line per row:
//!
//! - `X` marks a wall
//! - `S` marks the start
//! - `E` marks the end
//! - any other character is an open cell
//!
//! The longest line determines the width; shorter lines are padded with open cells.
use crate::error::{AstarError, Result};
use crate::grid::Grid;
use crate::node::CellKind;
use crate::render::{END, START, WALL};
use grid_util::Point;
use log::info;
use std::str::FromStr;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridDescription {
    pub width: usize,
    pub height: usize,
    pub start: Point,
    pub end: Point,
    pub walls: Vec<Point>,
}

fn place(slot: &mut Option<Point>, kind: CellKind, point: Point) -> Result<()> {
    match slot {
        Some(first) => Err(AstarError::DuplicateEndpoint {
            kind,
            first: *first,
            second: point,
        }),
        None => {
            *slot = Some(point);
            Ok(())
        }
    }
}

impl FromStr for GridDescription {
    type Err = AstarError;

    fn from_str(s: &str) -> Result<GridDescription> {
        let mut width = 0;
        let mut height = 0;
        let mut start = None;
        let mut end = None;
        let mut walls = Vec::new();
        for (y, line) in s.lines().enumerate() {
            height += 1;
            width = width.max(line.chars().count());
            for (x, c) in line.chars().enumerate() {
                let point = Point::new(x as i32, y as i32);
                match c {
                    WALL => walls.push(point),
                    START => place(&mut start, CellKind::Start, point)?,
                    END => place(&mut end, CellKind::End, point)?,
                    _ => {}
                }
            }
        }
        if width == 0 || height == 0 {
            return Err(AstarError::InvalidDimensions { width, height });
        }
        Ok(GridDescription {
            width,
            height,
            start: start.ok_or(AstarError::MissingEndpoint(CellKind::Start))?,
            end: end.ok_or(AstarError::MissingEndpoint(CellKind::End))?,
            walls,
        })
    }
}

impl GridDescription {
    /// Creates the grid, places the endpoints and walls, and computes the heuristic, leaving
    /// the grid ready to be searched.
    pub fn build(&self) -> Result<Grid> {
        info!(
            "Building {}x{} grid with {} walls",
            self.width,
            self.height,
            self.walls.len()
        );
        let mut grid = Grid::create(self.width, self.height)?;
        grid.set_start(self.start)?;
        grid.set_end(self.end)?;
        grid.set_walls(self.walls.iter().copied())?;
        grid.compute_heuristic_all()?;
        Ok(grid)
    }
}
