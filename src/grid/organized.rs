//! Owned organized depth grid in row-major layout (stride == width).
//!
//! Samples are `Point3<f32>` in the sensor frame. A sample with any
//! non-finite coordinate is invalid (missing depth). Linear indices follow
//! `row * width + col`.
use crate::error::HoleError;
use nalgebra::Point3;
use serde::{Deserialize, Serialize};

/// Integer (column, row) position in the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GridCoord {
    pub col: usize,
    pub row: usize,
}

impl GridCoord {
    #[inline]
    pub const fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }
}

/// Returns true when the sample carries valid depth.
#[inline]
pub fn is_finite_point(p: &Point3<f32>) -> bool {
    p.x.is_finite() && p.y.is_finite() && p.z.is_finite()
}

#[derive(Clone, Debug)]
pub struct OrganizedGrid {
    width: usize,
    height: usize,
    points: Vec<Point3<f32>>,
}

impl OrganizedGrid {
    /// Wrap a row-major sample buffer of `width * height` points.
    pub fn new(width: usize, height: usize, points: Vec<Point3<f32>>) -> Result<Self, HoleError> {
        let expected = width * height;
        if points.len() != expected {
            return Err(HoleError::GridSize {
                expected,
                got: points.len(),
            });
        }
        Ok(Self {
            width,
            height,
            points,
        })
    }

    /// Build a grid by evaluating `f(col, row)` for every cell.
    pub fn from_fn(
        width: usize,
        height: usize,
        mut f: impl FnMut(usize, usize) -> Point3<f32>,
    ) -> Self {
        let mut points = Vec::with_capacity(width * height);
        for row in 0..height {
            for col in 0..width {
                points.push(f(col, row));
            }
        }
        Self {
            width,
            height,
            points,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// A grid with more than one row supports 2D addressing.
    #[inline]
    pub fn is_organized(&self) -> bool {
        self.height > 1
    }

    #[inline]
    pub fn points(&self) -> &[Point3<f32>] {
        &self.points
    }

    #[inline]
    pub fn row(&self, row: usize) -> &[Point3<f32>] {
        let start = row * self.width;
        &self.points[start..start + self.width]
    }

    /// Sample at `coord`; the caller guarantees it is in bounds.
    #[inline]
    pub fn at(&self, coord: GridCoord) -> &Point3<f32> {
        &self.points[coord.row * self.width + coord.col]
    }

    #[inline]
    pub fn contains(&self, coord: GridCoord) -> bool {
        coord.col < self.width && coord.row < self.height
    }

    #[inline]
    pub fn is_finite_at(&self, coord: GridCoord) -> bool {
        is_finite_point(self.at(coord))
    }

    /// Convert a linear index into its (column, row) position.
    pub fn to_coords(&self, index: usize) -> Result<GridCoord, HoleError> {
        if !self.is_organized() {
            return Err(HoleError::NotOrganized {
                width: self.width,
                height: self.height,
            });
        }
        if index >= self.points.len() {
            return Err(HoleError::InvalidIndex {
                index,
                len: self.points.len(),
            });
        }
        let row = index / self.width;
        Ok(GridCoord::new(index - row * self.width, row))
    }

    /// Convert a (column, row) position into its linear index.
    ///
    /// Single-row grids accept row 0 only.
    pub fn to_index(&self, coord: GridCoord) -> Result<usize, HoleError> {
        if !self.contains(coord) {
            return Err(HoleError::InvalidCoordinate {
                col: coord.col,
                row: coord.row,
                width: self.width,
                height: self.height,
            });
        }
        Ok(coord.row * self.width + coord.col)
    }

    /// Copy of the grid with the listed samples replaced by NaN points.
    ///
    /// Organization is preserved; out-of-range indices are ignored.
    pub fn blanked(&self, remove_indices: &[usize]) -> OrganizedGrid {
        let mut points = self.points.clone();
        let nan = Point3::new(f32::NAN, f32::NAN, f32::NAN);
        for &idx in remove_indices {
            if let Some(p) = points.get_mut(idx) {
                *p = nan;
            } else {
                log::debug!(
                    "OrganizedGrid::blanked skipping index {} (len={})",
                    idx,
                    self.points.len()
                );
            }
        }
        OrganizedGrid {
            width: self.width,
            height: self.height,
            points,
        }
    }

    /// Number of invalid samples.
    pub fn invalid_count(&self) -> usize {
        self.points.iter().filter(|p| !is_finite_point(p)).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat(width: usize, height: usize) -> OrganizedGrid {
        OrganizedGrid::from_fn(width, height, |c, r| Point3::new(c as f32, r as f32, 1.0))
    }

    #[test]
    fn coords_roundtrip_for_every_cell() {
        let grid = flat(7, 5);
        for row in 0..5 {
            for col in 0..7 {
                let c = GridCoord::new(col, row);
                let idx = grid.to_index(c).unwrap();
                assert_eq!(idx, row * 7 + col);
                assert_eq!(grid.to_coords(idx).unwrap(), c);
            }
        }
    }

    #[test]
    fn out_of_bounds_addressing_is_rejected() {
        let grid = flat(4, 3);
        assert!(matches!(
            grid.to_index(GridCoord::new(4, 0)),
            Err(HoleError::InvalidCoordinate { col: 4, .. })
        ));
        assert!(matches!(
            grid.to_index(GridCoord::new(0, 3)),
            Err(HoleError::InvalidCoordinate { row: 3, .. })
        ));
        assert!(matches!(
            grid.to_coords(12),
            Err(HoleError::InvalidIndex { index: 12, len: 12 })
        ));
    }

    #[test]
    fn single_row_grid_only_addresses_row_zero() {
        let grid = flat(6, 1);
        assert_eq!(grid.to_index(GridCoord::new(3, 0)).unwrap(), 3);
        assert!(grid.to_index(GridCoord::new(3, 1)).is_err());
        assert!(matches!(
            grid.to_coords(3),
            Err(HoleError::NotOrganized { .. })
        ));
    }

    #[test]
    fn new_rejects_mismatched_buffer() {
        let err = OrganizedGrid::new(3, 3, vec![Point3::origin(); 8]).unwrap_err();
        assert_eq!(err, HoleError::GridSize { expected: 9, got: 8 });
    }

    #[test]
    fn blanked_sets_listed_samples_invalid() {
        let grid = flat(3, 3);
        let out = grid.blanked(&[0, 4, 100]);
        assert_eq!(out.width(), 3);
        assert_eq!(out.height(), 3);
        assert!(!out.is_finite_at(GridCoord::new(0, 0)));
        assert!(!out.is_finite_at(GridCoord::new(1, 1)));
        assert!(out.is_finite_at(GridCoord::new(2, 2)));
        assert_eq!(out.invalid_count(), 2);
        assert_eq!(grid.invalid_count(), 0);
    }
}
