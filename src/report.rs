//! Diagnostic listing of a finished search. Has no influence on the search itself.
use crate::node::Node;
use crate::search::SearchState;
use core::fmt;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct SearchReport {
    pub elapsed: Duration,
    pub state: SearchState,
    pub iterations: usize,
    /// Finalised nodes with their last G, H and F, in finalisation order.
    pub visited: Vec<Node>,
}

impl fmt::Display for SearchReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "The path took {} ms to calculate",
            self.elapsed.as_millis()
        )?;
        writeln!(
            f,
            "{:?} after {} iterations, {} nodes visited",
            self.state,
            self.iterations,
            self.visited.len()
        )?;
        for node in &self.visited {
            let coordinates = format!("{}, {}", node.point.x, node.point.y);
            writeln!(
                f,
                "{:<6} : G = {:<4}| H = {:<4}| F = {:<4}",
                coordinates, node.g, node.h, node.f
            )?;
        }
        Ok(())
    }
}
