use hole_detector::{HoleDetector, HoleParams, OrganizedGrid, PlaneModel};
use nalgebra::Point3;

fn main() {
    // Demo stub: a flat table one metre away with a square dropout in the middle
    let (w, h) = (160usize, 120usize);
    let grid = OrganizedGrid::from_fn(w, h, |c, r| {
        if (70..86).contains(&c) && (50..66).contains(&r) {
            Point3::new(f32::NAN, f32::NAN, f32::NAN)
        } else {
            Point3::new((c as f32 - 80.0) * 0.005, (r as f32 - 60.0) * 0.005, 1.0)
        }
    });
    let plane = PlaneModel::new(0.0, 0.0, 1.0, -1.0);
    let hull = [
        10 * w + 10,
        10 * w + (w - 10),
        (h - 10) * w + (w - 10),
        (h - 10) * w + 10,
    ];

    let det = HoleDetector::new(HoleParams::default());
    match det.process(&grid, Some(&plane), Some(&hull)) {
        Ok(res) => println!(
            "holes={} removed={} latency_ms={:.3}",
            res.outlines.len(),
            res.remove_indices.len(),
            res.latency_ms
        ),
        Err(err) => eprintln!("detection failed: {err}"),
    }
}
