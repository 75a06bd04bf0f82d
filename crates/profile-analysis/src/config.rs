// File: crates/profile-analysis/src/config.rs
// Summary: Run configuration for both analysis pipelines; defaults reproduce the fixed inputs and outputs.

use std::path::PathBuf;

use chart_core::types::{HEIGHT, WIDTH};
use chart_core::{RenderOptions, Theme};

/// Profiler dump read when no input is given.
pub const DEFAULT_SAMPLE_PATH: &str = "profile1.data";
/// PNG written by the page-fault pipeline when no output is given.
pub const DEFAULT_PAGE_FAULT_PNG: &str = "case_1_work_1_2.png";

#[derive(Clone, Debug)]
pub struct PageFaultConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Present the chart after saving it.
    pub show: bool,
    pub theme: Theme,
}

impl Default for PageFaultConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_SAMPLE_PATH),
            output: PathBuf::from(DEFAULT_PAGE_FAULT_PNG),
            show: true,
            theme: Theme::light(),
        }
    }
}

/// Where the utilization pipeline takes its measurements from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum TableSource {
    /// The compiled-in table (`utilization::DEFAULT_MEASUREMENTS`).
    #[default]
    Builtin,
    /// A CSV file with `N,CPU_time,start_jiffy,end_jiffy` columns.
    Csv(PathBuf),
}

#[derive(Clone, Debug)]
pub struct UtilizationConfig {
    pub table: TableSource,
    /// PNG to write; the chart is only presented when unset.
    pub output: Option<PathBuf>,
    pub show: bool,
    pub theme: Theme,
}

impl Default for UtilizationConfig {
    fn default() -> Self {
        Self { table: TableSource::Builtin, output: None, show: true, theme: Theme::light() }
    }
}

/// Render options for a 10x6 figure.
pub fn figure_options(theme: Theme) -> RenderOptions {
    RenderOptions { width: WIDTH, height: HEIGHT, theme, ..RenderOptions::default() }
}
