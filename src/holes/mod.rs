//! Hole discovery and classification.
//!
//! A hole is a maximal 4-connected set of invalid samples. The scan walks the
//! table hull's bounding box (half-open, column-major) and starts a flood fill
//! at every invalid, unvisited cell that lies inside the table polygon. The
//! flood fill records:
//!
//! - the interior: the invalid cells of the component, each claimed once per
//!   frame through the visited matrix;
//! - the border: the finite cells touching the interior. Border cells are not
//!   expanded and may belong to several neighbouring holes.
//!
//! Holes whose interior does not exceed the configured minimum size are
//! dropped right away. The survivors are classified against the table
//! polygon by counting interior cells inside and outside it
//! (see [`classify_counts`]).
//!
//! Complexity
//! - Every invalid cell is expanded at most once, so the scan is O(W*H); the
//!   visited matrix is allocated per call and never outlives it.

mod classify;
mod region;

pub use classify::{classify_counts, classify_hole, count_containment, Containment, HoleClass};
pub use region::Hole;

pub(crate) use region::RegionGrower;

use crate::geometry::{point_in_polygon, GridBounds};
use crate::grid::{GridCoord, OrganizedGrid};

/// Output of a full-frame hole scan.
#[derive(Clone, Debug, Default)]
pub struct HoleScan {
    /// Holes larger than the minimum size, in discovery order.
    pub holes: Vec<Hole>,
    /// Components grown but discarded as too small.
    pub too_small: usize,
}

/// Find every hole seeded inside `table_polygon`.
///
/// `bounds` is the bounding box of the polygon; seeds are taken from the
/// half-open box `[min, max)`.
pub fn scan_holes(
    grid: &OrganizedGrid,
    table_polygon: &[GridCoord],
    bounds: &GridBounds,
    min_hole_size: usize,
) -> HoleScan {
    let mut grower = RegionGrower::new(grid);
    let mut scan = HoleScan::default();
    let max_col = bounds.max_col.min(grid.width());
    let max_row = bounds.max_row.min(grid.height());
    for col in bounds.min_col..max_col {
        for row in bounds.min_row..max_row {
            let c = GridCoord::new(col, row);
            if grower.is_visited(c)
                || grid.is_finite_at(c)
                || !point_in_polygon(table_polygon, c)
            {
                continue;
            }
            let hole = grower.grow(c);
            if hole.size() > min_hole_size {
                scan.holes.push(hole);
            } else {
                scan.too_small += 1;
            }
        }
    }
    scan
}

#[cfg(test)]
mod tests;
