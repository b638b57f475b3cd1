//! Detector pipeline driving hole detection end-to-end.
//!
//! The [`HoleDetector`] takes an organized grid together with the table
//! plane and hull produced by upstream segmentation, and returns the outlines
//! of the holes found on the table plus the grid indices to blank.
//!
//! Typical usage:
//! ```no_run
//! use hole_detector::{HoleDetector, HoleParams, OrganizedGrid, PlaneModel};
//!
//! # fn example(grid: OrganizedGrid, plane: PlaneModel, hull: Vec<usize>) {
//! let detector = HoleDetector::new(HoleParams::default());
//! let report = detector.process_with_diagnostics(&grid, Some(&plane), Some(&hull)).unwrap();
//! println!("{} holes, {} samples to remove",
//!     report.detection.outlines.len(),
//!     report.detection.remove_indices.len());
//! # }
//! ```

// Stages
// - Table: resolve hull indices into a grid polygon, its bounding box and 3D edges.
// - Scan: grow 4-connected invalid components seeded inside the polygon.
// - Classify: inside / overlap / outside by interior containment counts.
// - Filter: plane alignment for both classes, edge-artifact rejection for overlap holes.
// - Outline: project the border onto the plane and take its convex hull.
// - Removal: rasterize each outline and collect enclosed finite samples.
use super::filters::{
    border_inside_flags, inside_plane_alignment, max_min_edge_distance, overlap_plane_alignment,
};
use super::outline::{build_outline, HoleBorder, OutlineHull};
use super::params::HoleParams;
use super::removal::RemovalIndexBuilder;
use super::table::TableHull;
use crate::diagnostics::timing::elapsed_ms;
use crate::diagnostics::{
    DetectionReport, HoleDecision, HoleId, HoleSample, HoleScanStage, InputDescriptor,
    PipelineTrace, TimingBreakdown,
};
use crate::error::HoleError;
use crate::geometry::{PlaneFrame, PlaneModel};
use crate::grid::OrganizedGrid;
use crate::holes::{classify_hole, scan_holes, Hole, HoleClass};
use crate::types::{HoleDetection, HoleOutline};
use log::debug;
use std::time::Instant;

/// Hole detector for organized depth grids.
#[derive(Clone, Debug, Default)]
pub struct HoleDetector {
    params: HoleParams,
}

/// Intermediate verdict of the filter and outline stages for one hole.
enum HoleVerdict {
    Outline(OutlineHull),
    Rejected(HoleDecision),
}

impl HoleDetector {
    pub fn new(params: HoleParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &HoleParams {
        &self.params
    }

    /// Detect holes in `grid`.
    ///
    /// Fails with [`HoleError::MissingInput`] when the plane or hull is
    /// absent or unusable, and with [`HoleError::NotOrganized`] for a
    /// single-row cloud.
    pub fn process(
        &self,
        grid: &OrganizedGrid,
        plane: Option<&PlaneModel>,
        hull_indices: Option<&[usize]>,
    ) -> Result<HoleDetection, HoleError> {
        self.process_with_diagnostics(grid, plane, hull_indices)
            .map(|report| report.detection)
    }

    /// Same as [`process`](Self::process) but also returns the pipeline trace.
    pub fn process_with_diagnostics(
        &self,
        grid: &OrganizedGrid,
        plane: Option<&PlaneModel>,
        hull_indices: Option<&[usize]>,
    ) -> Result<DetectionReport, HoleError> {
        let total_start = Instant::now();
        if !grid.is_organized() {
            return Err(HoleError::NotOrganized {
                width: grid.width(),
                height: grid.height(),
            });
        }
        let plane = plane.ok_or(HoleError::MissingInput {
            what: "table plane",
        })?;
        plane.validate()?;
        let hull_indices = hull_indices.ok_or(HoleError::MissingInput {
            what: "table hull indices",
        })?;

        let mut timings = TimingBreakdown::default();
        let table_start = Instant::now();
        let table = TableHull::from_indices(grid, hull_indices)?;
        let frame = PlaneFrame::new(plane);
        timings.push_since("table", table_start);

        let scan_start = Instant::now();
        let scan = scan_holes(grid, &table.polygon, &table.bounds, self.params.min_hole_size);
        let mut scan_stage = HoleScanStage {
            elapsed_ms: 0.0,
            holes: scan.holes.len(),
            too_small: scan.too_small,
            classes: Default::default(),
        };
        let classified: Vec<_> = scan
            .holes
            .iter()
            .map(|hole| {
                let (class, containment) =
                    classify_hole(hole, &table.polygon, self.params.inside_out_factor);
                scan_stage.classes.record(class);
                (class, containment)
            })
            .collect();
        scan_stage.elapsed_ms = elapsed_ms(scan_start);
        timings.push("scan", scan_stage.elapsed_ms);
        debug!(
            "HoleDetector::process scan holes={} too_small={} inside={} overlap={} outside={}",
            scan_stage.holes,
            scan_stage.too_small,
            scan_stage.classes.inside,
            scan_stage.classes.overlap,
            scan_stage.classes.outside
        );

        let filter_start = Instant::now();
        let mut removal = RemovalIndexBuilder::new();
        let mut outlines = Vec::new();
        let mut samples = Vec::with_capacity(scan.holes.len());
        for (i, (hole, (class, containment))) in scan.holes.iter().zip(classified).enumerate() {
            let mut sample = HoleSample::new(HoleId(i as u32), class, containment);
            sample.interior_size = hole.size();
            sample.border_size = hole.border.len();

            let verdict = match class {
                HoleClass::Outside => HoleVerdict::Rejected(HoleDecision::Outside),
                HoleClass::Inside => self.inside_outline(grid, plane, &frame, hole, &mut sample),
                HoleClass::Overlap => {
                    self.overlap_outline(grid, plane, &frame, &table, hole, &mut sample)
                }
            };

            match verdict {
                HoleVerdict::Rejected(decision) => sample.decision = decision,
                HoleVerdict::Outline(outline) => {
                    let raster = removal.add_outline(
                        grid,
                        &outline.polygon,
                        self.params.border_touch_policy,
                    );
                    sample.removed_samples = raster.kept;
                    if raster.touches_border {
                        debug!(
                            "HoleDetector::process hole {} touches the image border (kept {} of {})",
                            i, raster.kept, raster.enclosed
                        );
                        sample.decision = HoleDecision::TouchesBorder;
                    } else {
                        outlines.push(HoleOutline {
                            class,
                            points: outline.points,
                            polygon: outline.polygon,
                            interior_size: sample.interior_size,
                            border_size: sample.border_size,
                        });
                    }
                }
            }
            debug!(
                "HoleDetector::process hole {} class={:?} size={} decision={:?}",
                i, class, sample.interior_size, sample.decision
            );
            samples.push(sample);
        }
        timings.push_since("filter_outline", filter_start);

        let raw_remove_count = removal.len();
        let remove_indices = removal.finish();
        let latency_ms = elapsed_ms(total_start);
        timings.total_ms = latency_ms;
        debug!(
            "HoleDetector::process outlines={} removed={} (raw {}) latency_ms={:.3}",
            outlines.len(),
            remove_indices.len(),
            raw_remove_count,
            latency_ms
        );

        let trace = PipelineTrace {
            input: InputDescriptor {
                width: grid.width(),
                height: grid.height(),
                invalid_samples: grid.invalid_count(),
                table_hull_vertices: table.polygon.len(),
            },
            timings,
            scan: scan_stage,
            holes: samples,
            raw_remove_count,
        };
        Ok(DetectionReport {
            detection: HoleDetection {
                outlines,
                remove_indices,
                latency_ms,
            },
            trace,
        })
    }

    fn inside_outline(
        &self,
        grid: &OrganizedGrid,
        plane: &PlaneModel,
        frame: &PlaneFrame,
        hole: &Hole,
        sample: &mut HoleSample,
    ) -> HoleVerdict {
        let Some(alignment) = inside_plane_alignment(grid, plane, &hole.border) else {
            return HoleVerdict::Rejected(HoleDecision::Degenerate);
        };
        sample.mean_plane_distance = Some(alignment.mean_distance);
        if !alignment.passes(self.params.plane_dist_threshold) {
            return HoleVerdict::Rejected(HoleDecision::OffPlane);
        }
        let border = HoleBorder::raw(grid, &hole.border);
        Self::outline_or_degenerate(plane, frame, &border)
    }

    fn overlap_outline(
        &self,
        grid: &OrganizedGrid,
        plane: &PlaneModel,
        frame: &PlaneFrame,
        table: &TableHull,
        hole: &Hole,
        sample: &mut HoleSample,
    ) -> HoleVerdict {
        let inside = border_inside_flags(&hole.border, &table.polygon);
        let Some(alignment) = overlap_plane_alignment(grid, plane, &hole.border, &inside) else {
            return HoleVerdict::Rejected(HoleDecision::NoInsideBorder);
        };
        sample.mean_plane_distance = Some(alignment.mean_distance);
        if !alignment.passes(self.params.overlap_plane_dist_threshold()) {
            return HoleVerdict::Rejected(HoleDecision::OffPlane);
        }

        let border = HoleBorder::reprojected(
            grid,
            plane,
            &hole.border,
            &inside,
            self.params.reproject_dist_threshold(),
        );
        sample.reprojected_border = border.reprojected;
        sample.dropped_border = border.dropped;

        let edge_distance = max_min_edge_distance(&border.inside_points(), &table.edges);
        sample.edge_distance = edge_distance;
        match edge_distance {
            Some(d) if d > self.params.min_distance_to_convex_hull => {}
            _ => return HoleVerdict::Rejected(HoleDecision::EdgeArtifact),
        }
        Self::outline_or_degenerate(plane, frame, &border)
    }

    fn outline_or_degenerate(
        plane: &PlaneModel,
        frame: &PlaneFrame,
        border: &HoleBorder,
    ) -> HoleVerdict {
        match build_outline(plane, frame, border) {
            Ok(outline) => HoleVerdict::Outline(outline),
            Err(err) => {
                debug!("HoleDetector::outline rejected: {}", err);
                HoleVerdict::Rejected(HoleDecision::Degenerate)
            }
        }
    }
}
