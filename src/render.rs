//! Text rendering using the same alphabet as [GridDescription](crate::description::GridDescription).
use crate::grid::Grid;
use crate::node::{CellKind, Node};
use core::fmt;
use fxhash::FxHashSet;
use grid_util::{Point, ValueGrid};

pub const WALL: char = 'X';
pub const START: char = 'S';
pub const END: char = 'E';
pub const OPEN: char = '.';
pub const PATH: char = '*';

fn cell_char(node: &Node) -> char {
    match node.kind {
        CellKind::Wall => WALL,
        CellKind::Start => START,
        CellKind::End => END,
        CellKind::Normal => OPEN,
    }
}

fn write_rows<F>(grid: &Grid, mut cell: F) -> String
where
    F: FnMut(&Node) -> char,
{
    let mut out = String::with_capacity((grid.width() + 1) * grid.height());
    for (ix, node) in grid.nodes().enumerate() {
        if ix > 0 && ix % grid.width() == 0 {
            out.push('\n');
        }
        out.push(cell(node));
    }
    out.push('\n');
    out
}

/// Renders the grid with the cells of `path` other than Start and End marked with [PATH].
pub fn render_path(grid: &Grid, path: &[Point]) -> String {
    let on_path = path.iter().copied().collect::<FxHashSet<Point>>();
    write_rows(grid, |node: &Node| {
        if node.kind == CellKind::Normal && on_path.contains(&node.point) {
            PATH
        } else {
            cell_char(node)
        }
    })
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", write_rows(self, cell_char))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_cells_and_path() {
        let mut grid = Grid::create(4, 3).unwrap();
        grid.set_start(Point::new(0, 0)).unwrap();
        grid.set_end(Point::new(3, 2)).unwrap();
        grid.set_walls(vec![Point::new(1, 0), Point::new(1, 1)]).unwrap();
        assert_eq!(grid.to_string(), "SX..\n.X..\n...E\n");
        let path = [
            Point::new(0, 0),
            Point::new(0, 1),
            Point::new(1, 2),
            Point::new(2, 2),
            Point::new(3, 2),
        ];
        assert_eq!(render_path(&grid, &path), "SX..\n*X..\n.**E\n");
    }
}
