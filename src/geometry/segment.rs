use nalgebra::Point3;

/// Euclidean distance from `p` to the segment `[a, b]`.
///
/// A zero-length segment degrades to the distance to `a`.
pub fn point_segment_distance(a: &Point3<f32>, b: &Point3<f32>, p: &Point3<f32>) -> f32 {
    let ab = b - a;
    let len_sq = ab.norm_squared();
    if len_sq <= f32::EPSILON {
        return (p - a).norm();
    }
    let t = ((p - a).dot(&ab) / len_sq).clamp(0.0, 1.0);
    (p - (a + ab * t)).norm()
}

/// Edges of the closed polyline through `vertices` (last vertex back to the
/// first), skipping every edge that touches a missing vertex.
pub fn closed_polyline_edges(vertices: &[Option<Point3<f32>>]) -> Vec<(Point3<f32>, Point3<f32>)> {
    let Some(mut start) = vertices.last().copied() else {
        return Vec::new();
    };
    let mut edges = Vec::with_capacity(vertices.len());
    for &end in vertices {
        if let (Some(a), Some(b)) = (start, end) {
            edges.push((a, b));
        }
        start = end;
    }
    edges
}

/// Minimum distance from `p` to any of `edges`; `f32::MAX` without edges.
pub fn min_distance_to_edges(edges: &[(Point3<f32>, Point3<f32>)], p: &Point3<f32>) -> f32 {
    edges
        .iter()
        .map(|(a, b)| point_segment_distance(a, b, p))
        .fold(f32::MAX, f32::min)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn distance_clamps_to_endpoints() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(1.0, 0.0, 0.0);
        assert_relative_eq!(
            point_segment_distance(&a, &b, &Point3::new(0.5, 2.0, 0.0)),
            2.0,
            epsilon = 1e-6
        );
        assert_relative_eq!(
            point_segment_distance(&a, &b, &Point3::new(4.0, 0.0, 0.0)),
            3.0,
            epsilon = 1e-6
        );
        assert_relative_eq!(
            point_segment_distance(&a, &a, &Point3::new(0.0, 0.0, 2.0)),
            2.0,
            epsilon = 1e-6
        );
    }

    #[test]
    fn closed_polyline_includes_wrap_edge() {
        let square = [
            Some(Point3::new(0.0, 0.0, 1.0)),
            Some(Point3::new(1.0, 0.0, 1.0)),
            Some(Point3::new(1.0, 1.0, 1.0)),
            Some(Point3::new(0.0, 1.0, 1.0)),
        ];
        let edges = closed_polyline_edges(&square);
        assert_eq!(edges.len(), 4);
        let d = min_distance_to_edges(&edges, &Point3::new(0.1, 0.5, 1.0));
        assert_relative_eq!(d, 0.1, epsilon = 1e-6);
        assert!(closed_polyline_edges(&[]).is_empty());
    }

    #[test]
    fn missing_vertex_drops_both_adjacent_edges() {
        let square = [
            Some(Point3::new(0.0, 0.0, 1.0)),
            Some(Point3::new(1.0, 0.0, 1.0)),
            None,
            Some(Point3::new(0.0, 1.0, 1.0)),
        ];
        let edges = closed_polyline_edges(&square);
        assert_eq!(edges.len(), 2);
        // No chord between (1, 0) and (0, 1): the closest remaining edges are the axes.
        let d = min_distance_to_edges(&edges, &Point3::new(0.6, 0.6, 1.0));
        assert_relative_eq!(d, 0.6, epsilon = 1e-6);

        assert!(closed_polyline_edges(&[None, None, None]).is_empty());
        assert_eq!(min_distance_to_edges(&[], &Point3::origin()), f32::MAX);
    }
}
