use crate::grid::{GridCoord, OrganizedGrid};
use serde::Serialize;

/// Connected component of invalid samples plus the finite samples around it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Hole {
    /// Invalid cells, each belonging to exactly one hole.
    pub interior: Vec<GridCoord>,
    /// Finite 4-neighbours of the interior, listed once per hole.
    pub border: Vec<GridCoord>,
}

impl Hole {
    pub fn size(&self) -> usize {
        self.interior.len()
    }
}

/// Iterative 4-connected flood fill over invalid samples.
///
/// One grower owns the visited matrix for a single frame. Interior cells are
/// claimed once; finite cells are recorded as border and may be claimed again
/// by a later hole that shares them.
pub(crate) struct RegionGrower<'a> {
    grid: &'a OrganizedGrid,
    visited: Vec<bool>,
    border_stamp: Vec<u32>,
    stamp: u32,
    stack: Vec<GridCoord>,
}

impl<'a> RegionGrower<'a> {
    pub(crate) fn new(grid: &'a OrganizedGrid) -> Self {
        let n = grid.len();
        Self {
            grid,
            visited: vec![false; n],
            border_stamp: vec![0; n],
            stamp: 0,
            stack: Vec::with_capacity(64),
        }
    }

    #[inline]
    fn idx(&self, c: GridCoord) -> usize {
        c.row * self.grid.width() + c.col
    }

    #[inline]
    pub(crate) fn is_visited(&self, c: GridCoord) -> bool {
        self.visited[self.idx(c)]
    }

    /// Grow the hole containing `seed`, which should be invalid and unvisited.
    pub(crate) fn grow(&mut self, seed: GridCoord) -> Hole {
        self.stamp += 1;
        self.stack.clear();
        self.stack.push(seed);

        let width = self.grid.width();
        let height = self.grid.height();
        let mut hole = Hole::default();

        while let Some(c) = self.stack.pop() {
            let idx = self.idx(c);
            let finite = self.grid.is_finite_at(c);
            if self.visited[idx] && !finite {
                continue;
            }
            self.visited[idx] = true;
            if finite {
                if self.border_stamp[idx] != self.stamp {
                    self.border_stamp[idx] = self.stamp;
                    hole.border.push(c);
                }
                continue;
            }
            hole.interior.push(c);
            // Pushed in reverse so the left neighbour is expanded first.
            if c.row + 1 < height {
                self.stack.push(GridCoord::new(c.col, c.row + 1));
            }
            if c.row > 0 {
                self.stack.push(GridCoord::new(c.col, c.row - 1));
            }
            if c.col + 1 < width {
                self.stack.push(GridCoord::new(c.col + 1, c.row));
            }
            if c.col > 0 {
                self.stack.push(GridCoord::new(c.col - 1, c.row));
            }
        }
        hole
    }
}
