// File: crates/profile-analysis/src/bin/cpu_utilization.rs
// Summary: Derives CPU utilization and finish time per degree of multiprogramming and shows a dual-axis chart.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use profile_analysis::logging::init_tracing;
use profile_analysis::{run_utilization, TableSource, UtilizationConfig, WindowPresenter};

#[derive(Debug, Parser)]
#[command(name = "cpu-utilization", version, about = "Plot CPU utilization and finish time against N")]
struct Args {
    /// CSV with N,CPU_time,start_jiffy,end_jiffy columns (built-in table when omitted)
    #[arg(long)]
    table: Option<PathBuf>,

    /// Also write the chart to this PNG
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Do not open a window
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

    let cfg = UtilizationConfig {
        table: args.table.map(TableSource::Csv).unwrap_or_default(),
        output: args.output,
        show: !args.no_show,
        theme: chart_core::theme::find(&args.theme),
    };
    let report = run_utilization(&cfg, &mut WindowPresenter)?;

    println!("{:>4}  {:>15}  {:>15}", "N", "CPU utilization", "finish time (s)");
    for ((n, u), t) in report.n.iter().zip(&report.cpu_utilization).zip(&report.finish_time_s) {
        println!("{n:>4}  {u:>15.5}  {t:>15.3}");
    }
    Ok(())
}
