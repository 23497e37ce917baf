//! The best-first search driver.
use crate::error::{AstarError, Result};
use crate::frontier::{expand_neighbors, Frontier, Visited};
use crate::grid::Grid;
use crate::node::CellKind;
use crate::report::SearchReport;
use crate::ITERATION_CAP_FACTOR;
use grid_util::{Point, ValueGrid};
use log::{debug, info, warn};
use std::time::Duration;

/// Lifecycle of a search. [Found](SearchState::Found) and [Exhausted](SearchState::Exhausted)
/// are terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchState {
    Ready,
    Running,
    Found,
    Exhausted,
}

impl SearchState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, SearchState::Found | SearchState::Exhausted)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchConfig {
    /// Number of selections after which the search gives up with
    /// [SearchAborted](AstarError::SearchAborted). Unbounded if `None`.
    pub max_iterations: Option<usize>,
}

impl SearchConfig {
    /// A cap proportional to the grid size, see [ITERATION_CAP_FACTOR].
    pub fn bounded(grid: &Grid) -> SearchConfig {
        SearchConfig {
            max_iterations: Some(grid.width() * grid.height() * ITERATION_CAP_FACTOR),
        }
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> SearchConfig {
        self.max_iterations = Some(max_iterations);
        self
    }
}

/// A* search over a [Grid] it exclusively borrows for its whole lifetime. The frontier and
/// visited sets are owned here; costs and back-pointers are written into the grid's nodes.
#[derive(Debug)]
pub struct AstarSearch<'a> {
    grid: &'a mut Grid,
    frontier: Frontier,
    visited: Visited,
    state: SearchState,
    iterations: usize,
    config: SearchConfig,
    end: Point,
}

impl<'a> AstarSearch<'a> {
    pub fn new(grid: &'a mut Grid) -> Result<AstarSearch<'a>> {
        AstarSearch::with_config(grid, SearchConfig::default())
    }

    /// Prepares a search in the [Ready](SearchState::Ready) state. Costs left over from an
    /// earlier search are cleared and the heuristic is recomputed if the endpoints moved since
    /// it was last computed.
    pub fn with_config(grid: &'a mut Grid, config: SearchConfig) -> Result<AstarSearch<'a>> {
        let start = grid
            .start()
            .ok_or(AstarError::MissingEndpoint(CellKind::Start))?;
        let end = grid.end().ok_or(AstarError::MissingEndpoint(CellKind::End))?;
        grid.reset_search();
        if grid.heuristic_dirty {
            debug!("Heuristic is stale, recomputing");
            grid.compute_heuristic_all()?;
        }
        grid.compute_f(start)?;
        info!("Searching for a path from {} to {}", start, end);
        Ok(AstarSearch {
            grid,
            frontier: Frontier::new(start),
            visited: Visited::default(),
            state: SearchState::Ready,
            iterations: 0,
            config,
            end,
        })
    }

    /// Performs one iteration: refresh the frontier costs, select the best member, stop if it is
    /// the End cell, otherwise expand it and move it to the visited set. Terminal searches are
    /// left untouched.
    pub fn step(&mut self) -> Result<SearchState> {
        if self.state.is_terminal() {
            return Ok(self.state);
        }
        if let Some(max_iterations) = self.config.max_iterations {
            if self.iterations >= max_iterations {
                warn!("Giving up after {} iterations", self.iterations);
                return Err(AstarError::SearchAborted {
                    iterations: self.iterations,
                });
            }
        }
        self.state = SearchState::Running;
        self.iterations += 1;

        self.frontier.refresh_costs(self.grid)?;
        let current = match self.frontier.select(self.grid) {
            Some(current) => current,
            None => {
                self.state = SearchState::Exhausted;
                return Ok(self.state);
            }
        };
        let node = self.grid.node(current);
        debug!(
            "Selected {} (G = {}, H = {}, F = {})",
            current, node.g, node.h, node.f
        );
        if node.kind == CellKind::End {
            info!(
                "Reached {} with cost {} after {} iterations",
                current, node.g, self.iterations
            );
            self.state = SearchState::Found;
            return Ok(self.state);
        }

        expand_neighbors(self.grid, current, &mut self.frontier, &mut self.visited);
        self.frontier.remove(&current);
        self.visited.insert(current);

        if self.frontier.is_empty() {
            info!(
                "Frontier exhausted after {} iterations, {} is unreachable",
                self.iterations, self.end
            );
            self.state = SearchState::Exhausted;
        }
        Ok(self.state)
    }

    /// Steps until a terminal state is reached.
    pub fn run(&mut self) -> Result<SearchState> {
        while !self.state.is_terminal() {
            self.step()?;
        }
        Ok(self.state)
    }

    /// The path in Start to End order. Only a terminal search has one to offer, and an
    /// exhausted search fails with [NoPathFound](AstarError::NoPathFound) because the End
    /// cell's back-pointer chain never reaches the Start cell.
    pub fn path(&self) -> Result<Vec<Point>> {
        if !self.state.is_terminal() {
            return Err(AstarError::NoPathFound);
        }
        let mut path = self.grid.reconstruct(self.end)?;
        path.reverse();
        Ok(path)
    }

    /// Snapshot of the visited nodes for diagnostics.
    pub fn report(&self, elapsed: Duration) -> SearchReport {
        SearchReport {
            elapsed,
            state: self.state,
            iterations: self.iterations,
            visited: self.visited.iter().map(|p| *self.grid.node(*p)).collect(),
        }
    }

    pub fn state(&self) -> SearchState {
        self.state
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn frontier(&self) -> impl Iterator<Item = &Point> {
        self.frontier.iter()
    }

    /// Finalised cells in finalisation order.
    pub fn visited(&self) -> impl Iterator<Item = &Point> {
        self.visited.iter()
    }

    pub fn grid(&self) -> &Grid {
        self.grid
    }
}
