// File: crates/profile-analysis/src/bin/page_faults.rs
// Summary: Plots accumulated minor/major page faults from a profiler sample dump, saves a PNG and shows it.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use profile_analysis::config::{DEFAULT_PAGE_FAULT_PNG, DEFAULT_SAMPLE_PATH};
use profile_analysis::logging::init_tracing;
use profile_analysis::{run_page_faults, PageFaultConfig, WindowPresenter};

#[derive(Debug, Parser)]
#[command(name = "page-faults", version, about = "Plot accumulated page fault counts against jiffies")]
struct Args {
    /// Sample file: one `jiffies min_flt maj_flt cpu_use` line per sample
    #[arg(default_value = DEFAULT_SAMPLE_PATH)]
    input: PathBuf,

    /// PNG to write
    #[arg(short, long, default_value = DEFAULT_PAGE_FAULT_PNG)]
    output: PathBuf,

    /// Only write the PNG; do not open a window
    #[arg(long)]
    no_show: bool,

    /// Colour theme (light, dark)
    #[arg(long, default_value = "light")]
    theme: String,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let cfg = PageFaultConfig {
        input: args.input,
        output: args.output,
        show: !args.no_show,
        theme: chart_core::theme::find(&args.theme),
    };
    let samples = run_page_faults(&cfg, &mut WindowPresenter)?;
    println!("Plotted {} samples; wrote {}", samples.len(), cfg.output.display());
    Ok(())
}
