//! Diagnostics data model exposed by the detector and the scan tool.
//!
//! `DetectionReport` is the main entry point returned by the detector,
//! bundling the frame result (`HoleDetection`) and a `PipelineTrace` that
//! records every hole the scan found and why it was kept or dropped.

pub mod holes;
pub mod pipeline;
pub mod timing;

pub use holes::{ClassCounts, HoleDecision, HoleId, HoleSample, HoleScanStage};
pub use pipeline::{DetectionReport, InputDescriptor, PipelineTrace};
pub use timing::{StageTiming, TimingBreakdown};
