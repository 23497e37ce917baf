use crate::cost::step_cost;
use crate::error::{AstarError, Result};
use crate::grid::Grid;
use crate::node::{CellKind, Node};
use crate::C;
use grid_util::{Point, ValueGrid};
use itertools::Itertools;

impl Grid {
    /// Walks the back-pointers from `end` to the Start cell, both included, and returns the
    /// coordinates in that order. Fails with [NoPathFound](AstarError::NoPathFound) if the
    /// chain stops anywhere else or is longer than the number of cells in the grid.
    pub fn reconstruct(&self, end: Point) -> Result<Vec<Point>> {
        let limit = self.width() * self.height();
        let chain = std::iter::successors(Some(self.node_at(end)?), |node| {
            node.parent.map(|parent| self.node(parent))
        })
        .take(limit)
        .collect::<Vec<&Node>>();
        match chain.last() {
            Some(last) if last.kind == CellKind::Start => {
                Ok(chain.iter().map(|node| node.point).collect())
            }
            _ => Err(AstarError::NoPathFound),
        }
    }
}

/// Sums the straight and diagonal step costs along a path.
pub fn path_cost(path: &[Point]) -> i32 {
    path.iter()
        .tuple_windows()
        .map(|(from, to)| step_cost(from, to))
        .sum()
}

/// Converts the integer cost to an approximate floating point equivalent where cardinal directions have cost 1.0.
pub fn convert_cost_to_unit_cost_float(cost: i32) -> f64 {
    (cost as f64) / (C as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain(grid: &mut Grid, points: &[Point]) {
        for (from, to) in points.iter().tuple_windows() {
            grid.compute_g(*to, *from).unwrap();
        }
    }

    #[test]
    fn reconstructs_from_end_to_start() {
        let mut grid = Grid::create(4, 4).unwrap();
        grid.set_start(Point::new(0, 0)).unwrap();
        grid.set_end(Point::new(3, 2)).unwrap();
        let route = [
            Point::new(0, 0),
            Point::new(1, 1),
            Point::new(2, 1),
            Point::new(3, 2),
        ];
        chain(&mut grid, &route);
        let path = grid.reconstruct(Point::new(3, 2)).unwrap();
        assert_eq!(path, route.iter().rev().copied().collect::<Vec<_>>());
        assert_eq!(grid.node_at(Point::new(3, 2)).unwrap().g, path_cost(&route));
    }

    #[test]
    fn broken_chain_is_no_path() {
        let mut grid = Grid::create(3, 3).unwrap();
        grid.set_start(Point::new(0, 0)).unwrap();
        grid.set_end(Point::new(2, 2)).unwrap();
        assert_eq!(
            grid.reconstruct(Point::new(2, 2)).unwrap_err(),
            AstarError::NoPathFound
        );
        chain(&mut grid, &[Point::new(1, 1), Point::new(2, 2)]);
        assert_eq!(
            grid.reconstruct(Point::new(2, 2)).unwrap_err(),
            AstarError::NoPathFound
        );
        assert!(grid.reconstruct(Point::new(3, 3)).is_err());
    }

    #[test]
    fn cyclic_chain_is_cut_off() {
        let mut grid = Grid::create(2, 2).unwrap();
        grid.set_start(Point::new(0, 0)).unwrap();
        grid.set_end(Point::new(1, 1)).unwrap();
        grid.node_mut(Point::new(1, 1)).parent = Some(Point::new(1, 0));
        grid.node_mut(Point::new(1, 0)).parent = Some(Point::new(0, 1));
        grid.node_mut(Point::new(0, 1)).parent = Some(Point::new(1, 0));
        assert_eq!(
            grid.reconstruct(Point::new(1, 1)).unwrap_err(),
            AstarError::NoPathFound
        );
    }

    #[test]
    fn start_alone_is_a_path() {
        let mut grid = Grid::create(2, 2).unwrap();
        grid.set_start(Point::new(1, 0)).unwrap();
        assert_eq!(grid.reconstruct(Point::new(1, 0)).unwrap(), [Point::new(1, 0)]);
    }

    #[test]
    fn path_costs() {
        let path = [
            Point::new(0, 0),
            Point::new(1, 1),
            Point::new(2, 1),
            Point::new(2, 2),
        ];
        assert_eq!(path_cost(&path), 34);
        assert_eq!(path_cost(&path[..1]), 0);
        assert_eq!(path_cost(&[]), 0);
        assert!((convert_cost_to_unit_cost_float(34) - 3.4).abs() < 1e-9);
    }
}
