use crate::error::HoleError;
use nalgebra::Point2;
use std::cmp::Ordering;

#[inline]
fn cross(o: &Point2<f32>, a: &Point2<f32>, b: &Point2<f32>) -> f32 {
    (a.x - o.x) * (b.y - o.y) - (a.y - o.y) * (b.x - o.x)
}

/// 2D convex hull (Andrew's monotone chain) returning indices into `points`.
///
/// Vertices come out counter-clockwise starting at the lowest-x point;
/// collinear and duplicate points are dropped. Fails when fewer than three
/// points are given or all points are collinear.
pub fn convex_hull_2d(points: &[Point2<f32>]) -> Result<Vec<usize>, HoleError> {
    if points.len() < 3 {
        return Err(HoleError::DegenerateGeometry {
            reason: "convex hull needs at least three points",
        });
    }
    let mut order: Vec<usize> = (0..points.len()).collect();
    order.sort_by(|&a, &b| {
        let (pa, pb) = (&points[a], &points[b]);
        pa.x.partial_cmp(&pb.x)
            .unwrap_or(Ordering::Equal)
            .then(pa.y.partial_cmp(&pb.y).unwrap_or(Ordering::Equal))
            .then(a.cmp(&b))
    });

    let mut hull: Vec<usize> = Vec::with_capacity(2 * order.len());
    // Lower chain.
    for &i in &order {
        while hull.len() >= 2
            && cross(
                &points[hull[hull.len() - 2]],
                &points[hull[hull.len() - 1]],
                &points[i],
            ) <= 0.0
        {
            hull.pop();
        }
        hull.push(i);
    }
    // Upper chain.
    let lower_len = hull.len() + 1;
    for &i in order.iter().rev().skip(1) {
        while hull.len() >= lower_len
            && cross(
                &points[hull[hull.len() - 2]],
                &points[hull[hull.len() - 1]],
                &points[i],
            ) <= 0.0
        {
            hull.pop();
        }
        hull.push(i);
    }
    // The last vertex repeats the first.
    hull.pop();

    if hull.len() < 3 {
        return Err(HoleError::DegenerateGeometry {
            reason: "points are collinear",
        });
    }
    Ok(hull)
}
