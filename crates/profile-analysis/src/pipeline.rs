// File: crates/profile-analysis/src/pipeline.rs
// Summary: Entry points for the two analyses: load, derive, build chart, save and present.

use anyhow::{Context, Result};
use chart_core::{Chart, RenderOptions};
use tracing::info;

use crate::config::{figure_options, PageFaultConfig, TableSource, UtilizationConfig};
use crate::plots::{page_fault_chart, utilization_chart};
use crate::samples::{read_samples, SampleSeries};
use crate::utilization::{compute_utilization, load_measurements_csv, UtilizationSeries, DEFAULT_MEASUREMENTS};

/// Where a finished chart is shown.
pub trait Presenter {
    fn present(&mut self, chart: &Chart, opts: &RenderOptions) -> Result<()>;
}

/// Shows the chart in a blocking preview window.
#[derive(Clone, Copy, Debug, Default)]
pub struct WindowPresenter;

impl Presenter for WindowPresenter {
    fn present(&mut self, chart: &Chart, opts: &RenderOptions) -> Result<()> {
        let title = chart.title.as_deref().unwrap_or("chart");
        chart_window::show(chart, opts, title)
    }
}

/// Read samples, save the page-fault chart as PNG, then present it when `cfg.show`.
pub fn run_page_faults(cfg: &PageFaultConfig, presenter: &mut dyn Presenter) -> Result<SampleSeries> {
    let samples = read_samples(&cfg.input)
        .with_context(|| format!("failed to load samples from '{}'", cfg.input.display()))?;

    let chart = page_fault_chart(&samples);
    let opts = figure_options(cfg.theme);
    chart
        .render_to_png(&opts, &cfg.output)
        .with_context(|| format!("failed to write '{}'", cfg.output.display()))?;
    info!(path = %cfg.output.display(), "wrote page fault chart");

    if cfg.show {
        presenter.present(&chart, &opts)?;
    }
    Ok(samples)
}

/// Derive utilization from the configured table, optionally save it, then present it when `cfg.show`.
pub fn run_utilization(cfg: &UtilizationConfig, presenter: &mut dyn Presenter) -> Result<UtilizationSeries> {
    let measurements = match &cfg.table {
        TableSource::Builtin => DEFAULT_MEASUREMENTS.to_vec(),
        TableSource::Csv(path) => load_measurements_csv(path)?,
    };

    let report = compute_utilization(&measurements);
    for ((n, u), t) in report.n.iter().zip(&report.cpu_utilization).zip(&report.finish_time_s) {
        info!(n, cpu_utilization = u, finish_time_s = t, "derived");
    }

    let chart = utilization_chart(&report);
    let opts = figure_options(cfg.theme);
    if let Some(output) = &cfg.output {
        chart
            .render_to_png(&opts, output)
            .with_context(|| format!("failed to write '{}'", output.display()))?;
        info!(path = %output.display(), "wrote utilization chart");
    }

    if cfg.show {
        presenter.present(&chart, &opts)?;
    }
    Ok(report)
}
