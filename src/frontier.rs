//! Open and closed sets of the search.
use crate::cost::step_cost;
use crate::error::Result;
use crate::grid::Grid;
use fxhash::FxBuildHasher;
use grid_util::Point;
use indexmap::IndexSet;
use log::trace;
use std::cmp::Ordering;

type FxIndexSet<K> = IndexSet<K, FxBuildHasher>;

/// Selection key of a frontier member.
#[derive(Clone, Copy, Debug)]
struct Candidate {
    f: i32,
    h: i32,
    point: Point,
}

impl Eq for Candidate {}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        // Lowest F first, then lowest H, then the lexicographically smallest (x, y) so that the
        // outcome never depends on insertion order.
        self.f
            .cmp(&other.f)
            .then_with(|| self.h.cmp(&other.h))
            .then_with(|| self.point.x.cmp(&other.point.x))
            .then_with(|| self.point.y.cmp(&other.point.y))
    }
}

/// Cells discovered but not yet finalised.
#[derive(Clone, Debug, Default)]
pub struct Frontier {
    open: FxIndexSet<Point>,
}

impl Frontier {
    pub fn new(start: Point) -> Frontier {
        let mut frontier = Frontier::default();
        frontier.insert(start);
        frontier
    }

    /// Returns false if the cell was already a member.
    pub fn insert(&mut self, point: Point) -> bool {
        self.open.insert(point)
    }

    pub fn remove(&mut self, point: &Point) -> bool {
        self.open.swap_remove(point)
    }

    pub fn contains(&self, point: &Point) -> bool {
        self.open.contains(point)
    }

    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    pub fn len(&self) -> usize {
        self.open.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Point> {
        self.open.iter()
    }

    /// Recomputes G and F of every member from its current back-pointer. Predecessors may have
    /// become cheaper since a member was discovered.
    pub fn refresh_costs(&self, grid: &mut Grid) -> Result<()> {
        for &point in &self.open {
            if let Some(parent) = grid.node_at(point)?.parent {
                grid.compute_g(point, parent)?;
            }
            grid.compute_f(point)?;
        }
        Ok(())
    }

    /// The member with minimum F, ties broken by minimum H and then by coordinate.
    pub fn select(&self, grid: &Grid) -> Option<Point> {
        self.open
            .iter()
            .map(|&point| {
                let node = grid.node(point);
                Candidate {
                    f: node.f,
                    h: node.h,
                    point,
                }
            })
            .min()
            .map(|candidate| candidate.point)
    }
}

/// Finalised cells in the order they were finalised.
#[derive(Clone, Debug, Default)]
pub struct Visited {
    closed: FxIndexSet<Point>,
}

impl Visited {
    pub fn insert(&mut self, point: Point) -> bool {
        self.closed.insert(point)
    }

    /// Evicts a cell so it can be re-opened. Keeps the order of the remaining cells.
    pub fn remove(&mut self, point: &Point) -> bool {
        self.closed.shift_remove(point)
    }

    pub fn contains(&self, point: &Point) -> bool {
        self.closed.contains(point)
    }

    pub fn is_empty(&self) -> bool {
        self.closed.is_empty()
    }

    pub fn len(&self) -> usize {
        self.closed.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Point> {
        self.closed.iter()
    }
}

/// Pushes the open neighbours of `point` that are either unreached or reachable more cheaply
/// through `point` into the frontier, pointing their back-pointers at `point`. Neighbours that
/// were already finalised are re-opened. Returns the number of cells pushed.
pub fn expand_neighbors(
    grid: &mut Grid,
    point: Point,
    frontier: &mut Frontier,
    visited: &mut Visited,
) -> usize {
    let g = grid.node(point).g;
    let mut pushed = 0;
    for neighbour in grid.neighbours(&point) {
        let node = grid.node_mut(neighbour);
        let unreached = !node.is_reached();
        if unreached || node.g > g + step_cost(&point, &neighbour) {
            node.parent = Some(point);
            if !unreached {
                trace!("Cheaper route to {} through {}", neighbour, point);
                if visited.remove(&neighbour) {
                    trace!("Re-opening {}", neighbour);
                }
            }
            frontier.insert(neighbour);
            pushed += 1;
        }
    }
    pushed
}
