use hole_detector::{OrganizedGrid, PlaneModel};
use nalgebra::Point3;

/// Sample spacing of the synthetic tables, in metres.
pub const SPACING: f32 = 0.01;
/// Distance of the synthetic tables from the sensor, in metres.
pub const DEPTH: f32 = 1.0;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Flat table at `DEPTH` facing the sensor, centred on the optical axis.
///
/// Cells for which `invalid(col, row)` holds are NaN; `height_above(col, row)`
/// lifts the remaining samples towards the sensor.
pub fn table_grid(
    width: usize,
    height: usize,
    invalid: impl Fn(usize, usize) -> bool,
    height_above: impl Fn(usize, usize) -> f32,
) -> OrganizedGrid {
    OrganizedGrid::from_fn(width, height, |c, r| {
        if invalid(c, r) {
            Point3::new(f32::NAN, f32::NAN, f32::NAN)
        } else {
            Point3::new(
                (c as f32 - width as f32 / 2.0) * SPACING,
                (r as f32 - height as f32 / 2.0) * SPACING,
                DEPTH - height_above(c, r),
            )
        }
    })
}

/// Flat table with the given invalid cells.
pub fn flat_table(
    width: usize,
    height: usize,
    invalid: impl Fn(usize, usize) -> bool,
) -> OrganizedGrid {
    table_grid(width, height, invalid, |_, _| 0.0)
}

/// Plane of the synthetic tables.
pub fn table_plane() -> PlaneModel {
    PlaneModel::new(0.0, 0.0, 1.0, -DEPTH)
}

/// Hull indices of the axis-aligned rectangle `[c0, c1] x [r0, r1]`.
pub fn rect_hull(width: usize, c0: usize, r0: usize, c1: usize, r1: usize) -> Vec<usize> {
    vec![
        r0 * width + c0,
        r0 * width + c1,
        r1 * width + c1,
        r1 * width + c0,
    ]
}

pub fn in_block(c: usize, r: usize, cols: (usize, usize), rows: (usize, usize)) -> bool {
    (cols.0..=cols.1).contains(&c) && (rows.0..=rows.1).contains(&r)
}
