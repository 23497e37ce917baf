use grid_util::Point;

/// Static classification of a grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellKind {
    Start,
    End,
    Wall,
    Normal,
}

/// Per-cell search record. One exists for every cell of a [Grid](crate::grid::Grid) and is
/// mutated in place during a search.
///
/// A `g` of 0 on anything but the Start cell means the cell has not been reached yet.
/// `parent` is the back-pointer along the best known route, stored as the coordinate of the
/// predecessor cell in the same grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Node {
    pub point: Point,
    pub kind: CellKind,
    pub g: i32,
    pub h: i32,
    pub f: i32,
    pub parent: Option<Point>,
}

impl Node {
    pub fn new(point: Point) -> Node {
        Node {
            point,
            kind: CellKind::Normal,
            g: 0,
            h: 0,
            f: 0,
            parent: None,
        }
    }

    /// Whether the node can be used as a predecessor on a path.
    pub fn is_reached(&self) -> bool {
        self.kind == CellKind::Start || self.g != 0
    }

    pub fn is_wall(&self) -> bool {
        self.kind == CellKind::Wall
    }

    /// Clears the cost and back-pointer left by a previous search. The heuristic is kept.
    pub(crate) fn reset(&mut self) {
        self.g = 0;
        self.f = 0;
        self.parent = None;
    }
}
