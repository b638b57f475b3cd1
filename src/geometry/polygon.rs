//! Integer polygon helpers on grid coordinates.
//!
//! The containment test is a crossing-number test with a fixed tie-break:
//! a vertex counts as "above" the query when its row is `>=` the query row,
//! and crossings are decided by comparing the two cross-product terms with
//! `<=`. Points on an edge therefore resolve the same way on every call,
//! which matters for polygons whose vertices sit exactly on grid cells.
use crate::grid::GridCoord;
use serde::Serialize;

/// Crossing-number containment test for `query` against `polygon`.
///
/// The last vertex connects back to the first. An empty polygon contains
/// nothing.
pub fn point_in_polygon(polygon: &[GridCoord], query: GridCoord) -> bool {
    let Some(&last) = polygon.last() else {
        log::debug!("point_in_polygon called with an empty polygon");
        return false;
    };
    let qc = query.col as i64;
    let qr = query.row as i64;

    let mut inside = false;
    let (mut sc, mut sr) = (last.col as i64, last.row as i64);
    let mut start_above = sr >= qr;
    for v in polygon {
        let (ec, er) = (v.col as i64, v.row as i64);
        let end_above = er >= qr;
        if start_above != end_above {
            if (er - qr) * (ec - sc) <= (er - sr) * (ec - qc) {
                if end_above {
                    inside = !inside;
                }
            } else if !end_above {
                inside = !inside;
            }
        }
        start_above = end_above;
        sc = ec;
        sr = er;
    }
    inside
}

/// Axis-aligned bounds of a polygon in grid coordinates (inclusive).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct GridBounds {
    pub min_col: usize,
    pub min_row: usize,
    pub max_col: usize,
    pub max_row: usize,
}

impl GridBounds {
    /// Bounds of `coords` inside a `width × height` grid.
    ///
    /// The minimum starts at `(width, height)` and the maximum at `(0, 0)`,
    /// so an empty input yields an inverted box that iterates over nothing.
    pub fn from_coords(coords: &[GridCoord], width: usize, height: usize) -> Self {
        let mut b = GridBounds {
            min_col: width,
            min_row: height,
            max_col: 0,
            max_row: 0,
        };
        for c in coords {
            b.min_col = b.min_col.min(c.col);
            b.min_row = b.min_row.min(c.row);
            b.max_col = b.max_col.max(c.col);
            b.max_row = b.max_row.max(c.row);
        }
        b
    }

    /// True when the box reaches the physical edge of the grid.
    pub fn touches_border(&self, width: usize, height: usize) -> bool {
        self.min_col == 0
            || self.min_row == 0
            || self.max_col + 1 == width
            || self.max_row + 1 == height
    }

    /// Cells of the half-open box `[min, max)`, column-major.
    pub fn half_open_cells(&self) -> impl Iterator<Item = GridCoord> + '_ {
        (self.min_col..self.max_col)
            .flat_map(move |col| (self.min_row..self.max_row).map(move |row| GridCoord::new(col, row)))
    }
}
