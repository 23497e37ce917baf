//! The cost model: heuristic, accumulated cost and their sum, all in fixed-point units where
//! [C] is one straight step and [D] one diagonal step.
use crate::error::{AstarError, Result};
use crate::grid::Grid;
use crate::node::CellKind;
use crate::{C, D};
use grid_util::Point;
use log::debug;

/// Whether a single move from `from` to `to` changes both coordinates.
pub fn is_diagonal(from: &Point, to: &Point) -> bool {
    from.x != to.x && from.y != to.y
}

/// Cost of a single move between adjacent cells.
pub fn step_cost(from: &Point, to: &Point) -> i32 {
    if is_diagonal(from, to) {
        D
    } else {
        C
    }
}

/// Manhattan distance scaled to straight-move units.
pub fn heuristic(point: &Point, end: &Point) -> i32 {
    point.manhattan_distance(end) * C
}

impl Grid {
    /// Stores H for every cell. The End cell always gets 0. Needs to run after the endpoints and
    /// walls are placed; repeated calls with the same End give the same values.
    pub fn compute_heuristic_all(&mut self) -> Result<()> {
        let end = self.end().ok_or(AstarError::MissingEndpoint(CellKind::End))?;
        debug!("Computing heuristic towards {}", end);
        for node in self.nodes_mut() {
            node.h = match node.kind {
                CellKind::End => 0,
                _ => heuristic(&node.point, &end),
            };
        }
        self.heuristic_dirty = false;
        Ok(())
    }

    /// Sets G of `point` to G of `predecessor` plus the step cost between them and points the
    /// back-pointer at `predecessor`. The Start cell keeps G = 0 and no back-pointer.
    pub fn compute_g(&mut self, point: Point, predecessor: Point) -> Result<()> {
        let predecessor_g = self.node_at(predecessor)?.g;
        let node = self.node_at_mut(point)?;
        if node.kind == CellKind::Start {
            return Ok(());
        }
        node.g = predecessor_g + step_cost(&predecessor, &point);
        node.parent = Some(predecessor);
        Ok(())
    }

    /// F = G + H. Has to follow every G update of the same cell.
    pub fn compute_f(&mut self, point: Point) -> Result<()> {
        let node = self.node_at_mut(point)?;
        node.f = node.g + node.h;
        Ok(())
    }
}
