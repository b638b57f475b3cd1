//! Removal index collection.
//!
//! Each accepted outline is rasterized over its bounding box; finite samples
//! enclosed by the outline are blanked downstream. Outlines of neighbouring
//! holes can overlap, so the collected list is canonicalized (sorted,
//! deduplicated) once per frame.
use super::params::BorderTouchPolicy;
use crate::geometry::{point_in_polygon, GridBounds};
use crate::grid::{GridCoord, OrganizedGrid};
use log::debug;

/// Result of rasterizing one outline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OutlineRaster {
    pub bounds: GridBounds,
    pub touches_border: bool,
    /// Finite samples enclosed by the outline.
    pub enclosed: usize,
    /// Samples appended to the removal list (zero when retracted).
    pub kept: usize,
}

#[derive(Debug, Default)]
pub struct RemovalIndexBuilder {
    indices: Vec<usize>,
    scratch: Vec<usize>,
}

impl RemovalIndexBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect the finite samples enclosed by `polygon`.
    ///
    /// Cells are taken from the half-open bounding box `[min, max)`. When the
    /// box touches the image edge and `policy` is
    /// [`BorderTouchPolicy::DropIndices`], nothing is appended.
    pub fn add_outline(
        &mut self,
        grid: &OrganizedGrid,
        polygon: &[GridCoord],
        policy: BorderTouchPolicy,
    ) -> OutlineRaster {
        let bounds = GridBounds::from_coords(polygon, grid.width(), grid.height());
        let touches_border = bounds.touches_border(grid.width(), grid.height());

        self.scratch.clear();
        for c in bounds.half_open_cells() {
            if !point_in_polygon(polygon, c) || !grid.is_finite_at(c) {
                continue;
            }
            match grid.to_index(c) {
                Ok(idx) => self.scratch.push(idx),
                Err(err) => debug!("RemovalIndexBuilder::add_outline skipping cell: {}", err),
            }
        }

        let enclosed = self.scratch.len();
        let kept = if touches_border && policy == BorderTouchPolicy::DropIndices {
            0
        } else {
            self.indices.extend_from_slice(&self.scratch);
            enclosed
        };
        OutlineRaster {
            bounds,
            touches_border,
            enclosed,
            kept,
        }
    }

    /// Number of collected indices, duplicates included.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Sorted, duplicate-free removal indices.
    pub fn finish(mut self) -> Vec<usize> {
        canonicalize(&mut self.indices);
        self.indices
    }
}

/// Sort and deduplicate in place so the list is strictly increasing.
pub fn canonicalize(indices: &mut Vec<usize>) {
    indices.sort_unstable();
    indices.dedup();
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;

    fn flat_grid(width: usize, height: usize) -> OrganizedGrid {
        OrganizedGrid::from_fn(width, height, |c, r| Point3::new(c as f32, r as f32, 1.0))
    }

    fn square(c0: usize, r0: usize, c1: usize, r1: usize) -> Vec<GridCoord> {
        vec![
            GridCoord::new(c0, r0),
            GridCoord::new(c1, r0),
            GridCoord::new(c1, r1),
            GridCoord::new(c0, r1),
        ]
    }

    #[test]
    fn overlapping_outlines_yield_strictly_increasing_indices() {
        let grid = flat_grid(30, 30);
        let mut builder = RemovalIndexBuilder::new();
        let a = builder.add_outline(&grid, &square(5, 5, 15, 15), BorderTouchPolicy::KeepIndices);
        let b = builder.add_outline(&grid, &square(10, 10, 20, 20), BorderTouchPolicy::KeepIndices);
        assert!(a.enclosed > 0 && b.enclosed > 0);
        let raw = builder.len();
        let out = builder.finish();
        assert!(out.len() < raw, "overlap must produce duplicates before canonicalization");
        assert!(out.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn invalid_samples_are_not_collected() {
        let grid = OrganizedGrid::from_fn(20, 20, |c, r| {
            if (8..12).contains(&c) && (8..12).contains(&r) {
                Point3::new(f32::NAN, f32::NAN, f32::NAN)
            } else {
                Point3::new(c as f32, r as f32, 1.0)
            }
        });
        let mut builder = RemovalIndexBuilder::new();
        builder.add_outline(&grid, &square(6, 6, 14, 14), BorderTouchPolicy::KeepIndices);
        let out = builder.finish();
        assert!(!out.is_empty());
        for idx in out {
            let c = grid.to_coords(idx).unwrap();
            assert!(grid.is_finite_at(c));
            assert!((6..14).contains(&c.col) && (6..14).contains(&c.row));
        }
    }

    #[test]
    fn border_touching_outline_follows_policy() {
        let grid = flat_grid(20, 20);
        let outline = square(0, 3, 6, 9);

        let mut keep = RemovalIndexBuilder::new();
        let r = keep.add_outline(&grid, &outline, BorderTouchPolicy::KeepIndices);
        assert!(r.touches_border);
        assert_eq!(r.kept, r.enclosed);
        assert!(!keep.is_empty());

        let mut drop = RemovalIndexBuilder::new();
        let r = drop.add_outline(&grid, &outline, BorderTouchPolicy::DropIndices);
        assert!(r.touches_border);
        assert!(r.enclosed > 0);
        assert_eq!(r.kept, 0);
        assert!(drop.finish().is_empty());
    }

    #[test]
    fn canonicalize_sorts_and_dedups() {
        let mut v = vec![9, 3, 3, 7, 1, 9, 0];
        canonicalize(&mut v);
        assert_eq!(v, vec![0, 1, 3, 7, 9]);
    }
}
