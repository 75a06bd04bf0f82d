// File: crates/profile-analysis/src/lib.rs
// Summary: Analysis of page-fault profiler output: sample loading, utilization math, chart building and pipelines.

pub mod config;
pub mod error;
pub mod logging;
pub mod pipeline;
pub mod plots;
pub mod samples;
pub mod utilization;

pub use config::{PageFaultConfig, TableSource, UtilizationConfig};
pub use error::AnalysisError;
pub use pipeline::{run_page_faults, run_utilization, Presenter, WindowPresenter};
pub use samples::{parse_samples, read_samples, Sample, SampleSeries};
pub use utilization::{compute_utilization, Measurement, UtilizationSeries, DEFAULT_MEASUREMENTS, HZ};
