//! Diagnostics data model returned alongside the arrangement.
//!
//! `BuildReport` is the entry point: the finished arrangement plus a
//! `BuildTrace` with the per-axis elbow search, the raw segments in the
//! order they were snapped, degenerate clusters and stage timings.

mod clustering;
mod pipeline;
mod timing;

pub use clustering::AxisClusteringTrace;
pub use pipeline::{BuildReport, BuildTrace, InputDescriptor};
pub use timing::{elapsed_ms, StageTiming, TimingBreakdown};
