use crate::error::{AstarError, Result};
use crate::node::{CellKind, Node};
use grid_util::{Point, ValueGrid};
use itertools::iproduct;
use log::{debug, warn};
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

/// Fixed-size arena of [Node]s, one per cell, stored row by row. Back-pointers in the nodes
/// refer to other cells of the same grid by coordinate, so the best-path tree lives entirely
/// inside this arena.
///
/// In addition to the nodes, connected components of the open cells are tracked in a
/// [UnionFind] structure. These are only used for reachability queries and never influence
/// the search itself.
#[derive(Clone, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    nodes: Vec<Node>,
    start: Option<Point>,
    end: Option<Point>,
    pub components: UnionFind<usize>,
    pub components_dirty: bool,
    pub(crate) heuristic_dirty: bool,
}

impl Grid {
    /// Allocates a `width` x `height` grid of Normal cells.
    pub fn create(width: usize, height: usize) -> Result<Grid> {
        let max_side = i32::MAX as usize;
        if width == 0 || height == 0 || width > max_side || height > max_side {
            return Err(AstarError::InvalidDimensions { width, height });
        }
        width
            .checked_mul(height)
            .ok_or(AstarError::InvalidDimensions { width, height })?;
        Ok(Grid::new(width, height, false))
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as usize) < self.width
            && (point.y as usize) < self.height
    }

    fn ix(&self, point: Point) -> usize {
        point.y as usize * self.width + point.x as usize
    }

    fn checked_ix(&self, point: Point) -> Result<usize> {
        if self.contains(point) {
            Ok(self.ix(point))
        } else {
            Err(AstarError::OutOfBounds(point))
        }
    }

    pub fn node_at(&self, point: Point) -> Result<&Node> {
        let ix = self.checked_ix(point)?;
        Ok(&self.nodes[ix])
    }

    pub(crate) fn node_at_mut(&mut self, point: Point) -> Result<&mut Node> {
        let ix = self.checked_ix(point)?;
        Ok(&mut self.nodes[ix])
    }

    /// Infallible lookup for points already known to be inside the grid.
    pub(crate) fn node(&self, point: Point) -> &Node {
        &self.nodes[self.ix(point)]
    }

    pub(crate) fn node_mut(&mut self, point: Point) -> &mut Node {
        let ix = self.ix(point);
        &mut self.nodes[ix]
    }

    /// All nodes in row-major order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    pub(crate) fn nodes_mut(&mut self) -> impl Iterator<Item = &mut Node> {
        self.nodes.iter_mut()
    }

    pub fn start(&self) -> Option<Point> {
        self.start
    }

    pub fn end(&self) -> Option<Point> {
        self.end
    }

    pub fn set_start(&mut self, point: Point) -> Result<()> {
        self.set_endpoint(CellKind::Start, point)
    }

    pub fn set_end(&mut self, point: Point) -> Result<()> {
        self.set_endpoint(CellKind::End, point)
    }

    /// Marks `point` as the single Start or End cell. A previously marked cell of the same kind
    /// reverts to Normal instead of keeping its old kind, so a grid never holds two Start or two
    /// End cells. If `point` held the other endpoint, that endpoint is unset.
    fn set_endpoint(&mut self, kind: CellKind, point: Point) -> Result<()> {
        let ix = self.checked_ix(point)?;
        let previous = match kind {
            CellKind::Start => self.start.take(),
            _ => self.end.take(),
        };
        if let Some(previous) = previous {
            self.node_mut(previous).kind = CellKind::Normal;
        }
        match self.nodes[ix].kind {
            CellKind::Start if kind == CellKind::End => {
                warn!("End placed on the start cell {}, start is now unset", point);
                self.start = None;
            }
            CellKind::End if kind == CellKind::Start => {
                warn!("Start placed on the end cell {}, end is now unset", point);
                self.end = None;
            }
            CellKind::Wall => {
                self.components_dirty = true;
            }
            _ => {}
        }
        self.nodes[ix].kind = kind;
        match kind {
            CellKind::Start => self.start = Some(point),
            _ => self.end = Some(point),
        }
        self.heuristic_dirty = true;
        Ok(())
    }

    /// Marks every given coordinate as a wall. The whole batch is validated first: if any
    /// coordinate is outside the grid nothing is changed and the first offending coordinate is
    /// returned. Walls on the Start or End cell are ignored.
    pub fn set_walls<I>(&mut self, walls: I) -> Result<()>
    where
        I: IntoIterator<Item = Point>,
    {
        let walls = walls.into_iter().collect::<Vec<Point>>();
        if let Some(&outside) = walls.iter().find(|p| !self.contains(**p)) {
            return Err(AstarError::OutOfBounds(outside));
        }
        for wall in walls {
            self.set(wall.x, wall.y, true);
        }
        Ok(())
    }

    /// In-bounds, non-wall cells of the 3x3 neighbourhood of `point`, centre excluded.
    pub fn neighbours(&self, point: &Point) -> SmallVec<[Point; 8]> {
        iproduct!(-1..=1, -1..=1)
            .filter(|&(dx, dy)| dx != 0 || dy != 0)
            .map(|(dx, dy)| Point::new(point.x + dx, point.y + dy))
            .filter(|p| self.contains(*p) && !self.node(*p).is_wall())
            .collect()
    }

    /// Clears costs and back-pointers left behind by an earlier search.
    pub(crate) fn reset_search(&mut self) {
        self.nodes.iter_mut().for_each(Node::reset);
    }

    /// Retrieves the component id a given [Point] belongs to, or `None` outside the grid.
    pub fn get_component(&self, point: &Point) -> Option<usize> {
        self.contains(*point)
            .then(|| self.components.find(self.ix(*point)))
    }

    /// Checks if start and goal are on the same component.
    pub fn reachable(&self, start: &Point, goal: &Point) -> bool {
        !self.unreachable(start, goal)
    }

    /// Checks if start and goal are not on the same component.
    pub fn unreachable(&self, start: &Point, goal: &Point) -> bool {
        if self.contains(*start) && self.contains(*goal) {
            !self.components.equiv(self.ix(*start), self.ix(*goal))
        } else {
            true
        }
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up open 8-neighbours to the same components.
    pub fn generate_components(&mut self) {
        debug!(
            "Generating connected components for {}x{} grid",
            self.width, self.height
        );
        self.components = UnionFind::new(self.width * self.height);
        self.components_dirty = false;
        for y in 0..self.height as i32 {
            for x in 0..self.width as i32 {
                let point = Point::new(x, y);
                if self.node(point).is_wall() {
                    continue;
                }
                let parent_ix = self.ix(point);
                // Forward half of the neighbourhood, the other half links up from the far side.
                let linked = [(1, 0), (-1, 1), (0, 1), (1, 1)]
                    .into_iter()
                    .map(|(dx, dy)| Point::new(x + dx, y + dy))
                    .filter(|p| self.contains(*p) && !self.node(*p).is_wall())
                    .map(|p| self.ix(p))
                    .collect::<SmallVec<[usize; 4]>>();
                for ix in linked {
                    self.components.union(parent_ix, ix);
                }
            }
        }
    }
}

impl ValueGrid<bool> for Grid {
    fn new(width: usize, height: usize, default_value: bool) -> Self {
        let kind = if default_value {
            CellKind::Wall
        } else {
            CellKind::Normal
        };
        let nodes = (0..height as i32)
            .flat_map(|y| (0..width as i32).map(move |x| Point::new(x, y)))
            .map(|p| Node {
                kind,
                ..Node::new(p)
            })
            .collect();
        let mut grid = Grid {
            width,
            height,
            nodes,
            start: None,
            end: None,
            components: UnionFind::new(width * height),
            components_dirty: false,
            heuristic_dirty: true,
        };
        grid.generate_components();
        grid
    }
    /// Cells outside the grid count as blocked.
    fn get(&self, x: i32, y: i32) -> bool {
        let p = Point::new(x, y);
        !self.contains(p) || self.node(p).is_wall()
    }
    /// Blocks or unblocks a cell. Joins newly connected components and flags the components
    /// as dirty if components are (potentially) broken apart into multiple.
    fn set(&mut self, x: i32, y: i32, blocked: bool) {
        let p = Point::new(x, y);
        if !self.contains(p) {
            warn!("Ignoring cell {} outside the {}x{} grid", p, self.width, self.height);
            return;
        }
        let node = self.node_mut(p);
        match node.kind {
            CellKind::Start | CellKind::End => {
                if blocked {
                    warn!("Ignoring wall on {:?} cell {}", node.kind, p);
                }
                return;
            }
            CellKind::Wall if !blocked => node.kind = CellKind::Normal,
            CellKind::Normal if blocked => node.kind = CellKind::Wall,
            _ => return,
        }
        if blocked {
            debug!("Wall placed at {}", p);
            self.components_dirty = true;
        } else {
            let p_ix = self.ix(p);
            for n in self.neighbours(&p) {
                let n_ix = self.ix(n);
                self.components.union(p_ix, n_ix);
            }
        }
    }
    fn width(&self) -> usize {
        self.width
    }
    fn height(&self) -> usize {
        self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_rejects_empty_dimensions() {
        assert_eq!(
            Grid::create(0, 3).unwrap_err(),
            AstarError::InvalidDimensions {
                width: 0,
                height: 3
            }
        );
        assert!(Grid::create(4, 0).is_err());
        let grid = Grid::create(4, 2).unwrap();
        assert_eq!(grid.nodes().count(), 8);
        assert!(grid.nodes().all(|n| n.kind == CellKind::Normal && n.parent.is_none()));
    }

    #[test]
    fn node_lookup_is_bounds_checked() {
        let grid = Grid::create(3, 2).unwrap();
        let p = Point::new(2, 1);
        assert_eq!(grid.node_at(p).unwrap().point, p);
        for outside in [Point::new(3, 0), Point::new(0, 2), Point::new(-1, 0)] {
            assert_eq!(
                grid.node_at(outside).unwrap_err(),
                AstarError::OutOfBounds(outside)
            );
        }
    }

    #[test]
    fn endpoints_are_unique() {
        let mut grid = Grid::create(3, 3).unwrap();
        grid.set_start(Point::new(0, 0)).unwrap();
        grid.set_start(Point::new(1, 0)).unwrap();
        grid.set_end(Point::new(2, 2)).unwrap();
        assert_eq!(grid.node(Point::new(0, 0)).kind, CellKind::Normal);
        assert_eq!(grid.node(Point::new(1, 0)).kind, CellKind::Start);
        assert_eq!(grid.start(), Some(Point::new(1, 0)));
        assert_eq!(
            grid.nodes().filter(|n| n.kind == CellKind::Start).count(),
            1
        );

        // Placing the end on the start cell takes the cell over.
        grid.set_end(Point::new(1, 0)).unwrap();
        assert_eq!(grid.start(), None);
        assert_eq!(grid.end(), Some(Point::new(1, 0)));
        assert_eq!(grid.node(Point::new(2, 2)).kind, CellKind::Normal);
        assert!(grid.set_start(Point::new(5, 5)).is_err());
    }

    #[test]
    fn set_walls_is_all_or_nothing() {
        let mut grid = Grid::create(3, 3).unwrap();
        let err = grid
            .set_walls(vec![Point::new(1, 1), Point::new(3, 1), Point::new(4, 4)])
            .unwrap_err();
        assert_eq!(err, AstarError::OutOfBounds(Point::new(3, 1)));
        assert!(!grid.get(1, 1));

        grid.set_start(Point::new(0, 0)).unwrap();
        grid.set_walls(vec![Point::new(1, 1), Point::new(0, 0)]).unwrap();
        assert!(grid.get(1, 1));
        assert_eq!(grid.node(Point::new(0, 0)).kind, CellKind::Start);
    }

    #[test]
    fn neighbours_skip_centre_walls_and_border() {
        let mut grid = Grid::create(3, 3).unwrap();
        grid.set(1, 0, true);
        let corner = grid.neighbours(&Point::new(0, 0));
        assert_eq!(corner.len(), 2);
        assert!(!corner.contains(&Point::new(0, 0)));
        assert!(!corner.contains(&Point::new(1, 0)));
        let centre = grid.neighbours(&Point::new(1, 1));
        assert_eq!(centre.len(), 7);
        assert!(!centre.contains(&Point::new(1, 1)));
    }

    /// Tests whether points are correctly mapped to different connected components
    #[test]
    fn test_component_generation() {
        // Corresponds to the following 3x2 grid:
        //  ___
        // | X |
        // | X |
        //  ___
        let mut grid = Grid::create(3, 2).unwrap();
        grid.set(1, 0, true);
        grid.set(1, 1, true);
        grid.update();
        let p1 = Point::new(0, 0);
        let p2 = Point::new(1, 1);
        let p3 = Point::new(0, 1);
        let p4 = Point::new(2, 0);
        assert!(grid.unreachable(&p1, &p2));
        assert!(grid.reachable(&p1, &p3));
        assert!(grid.unreachable(&p1, &p4));
        assert_ne!(grid.get_component(&p1), grid.get_component(&p4));
        assert_eq!(grid.get_component(&Point::new(3, 0)), None);
    }

    // Diagonal moves between two walls connect the corners.
    #[test]
    fn diagonal_gap_is_reachable() {
        //  __
        // | X|
        // |X |
        //  __
        let mut grid = Grid::create(2, 2).unwrap();
        grid.set_walls(vec![Point::new(1, 0), Point::new(0, 1)]).unwrap();
        grid.update();
        assert!(grid.reachable(&Point::new(0, 0), &Point::new(1, 1)));
        grid.set(1, 0, false);
        assert!(grid.reachable(&Point::new(0, 0), &Point::new(1, 0)));
    }

    #[test]
    fn cells_outside_the_grid_are_blocked_and_untouched() {
        let mut grid = Grid::create(3, 3).unwrap();
        // (3, 0) would alias (0, 1) in row-major order.
        grid.set(3, 0, true);
        grid.set(-1, 0, true);
        grid.set(0, 7, true);
        assert!(grid.nodes().all(|n| n.kind == CellKind::Normal));
        assert!(!grid.components_dirty);
        assert!(grid.get(3, 0));
        assert!(grid.get(-1, 2));
        assert!(!grid.get(0, 1));
        grid.set(3, 0, false);
        assert!(grid.reachable(&Point::new(0, 0), &Point::new(2, 2)));
    }
}
