use hole_detector::config::{self, ScanToolConfig};
use hole_detector::diagnostics::{DetectionReport, HoleDecision};
use hole_detector::grid::io::{load_frame, save_removal_mask, write_json_file};
use hole_detector::HoleDetector;
use std::env;
use std::path::PathBuf;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config: ScanToolConfig = config::load_config(&PathBuf::from(config_path))?;

    let frame = load_frame(&config.input)?;
    let detector = HoleDetector::new(config.params.clone());
    let report = detector
        .process_with_diagnostics(
            &frame.grid,
            frame.plane.as_ref(),
            frame.hull_indices.as_deref(),
        )
        .map_err(|e| format!("Detection failed for {}: {e}", config.input.display()))?;

    print_text_summary(&report);
    println!(
        "  border touch policy: {:?}",
        detector.params().border_touch_policy
    );

    write_json_file(&config.output.report_json, &report)?;
    println!("JSON report written to {}", config.output.report_json.display());

    if let Some(mask_path) = &config.output.mask_image {
        save_removal_mask(&frame.grid, &report.detection.remove_indices, mask_path)?;
        println!("Removal mask written to {}", mask_path.display());
    }

    Ok(())
}

fn print_text_summary(report: &DetectionReport) {
    let trace = &report.trace;
    println!("Hole scan summary");
    println!(
        "  grid: {}x{} ({} invalid samples)",
        trace.input.width, trace.input.height, trace.input.invalid_samples
    );
    println!(
        "  holes: {} (inside {}, overlap {}, outside {}), {} too small",
        trace.scan.holes,
        trace.scan.classes.inside,
        trace.scan.classes.overlap,
        trace.scan.classes.outside,
        trace.scan.too_small
    );
    for decision in [
        HoleDecision::OffPlane,
        HoleDecision::NoInsideBorder,
        HoleDecision::EdgeArtifact,
        HoleDecision::Degenerate,
        HoleDecision::TouchesBorder,
    ] {
        let n = report.holes_with(decision).len();
        if n > 0 {
            println!("  rejected {decision:?}: {n}");
        }
    }
    println!("  outlines: {}", report.detection.outlines.len());
    println!(
        "  removed samples: {}",
        report.detection.remove_indices.len()
    );
    println!("  latency_ms: {:.3}", report.detection.latency_ms);
    for stage in &trace.timings.stages {
        println!("    {:<16} {:>8.3} ms", stage.label, stage.elapsed_ms);
    }
}

fn usage() -> String {
    "Usage: hole_scan <config.json>".to_string()
}
