// File: crates/profile-analysis/tests/pipeline.rs
// Purpose: End-to-end runs of both analyses with a recording presenter in place of the window.

use std::io::Write;
use std::path::Path;

use anyhow::Result;
use chart_core::{Chart, RenderOptions};
use profile_analysis::{
    compute_utilization, run_page_faults, run_utilization, PageFaultConfig, Presenter, TableSource,
    UtilizationConfig, DEFAULT_MEASUREMENTS,
};

#[derive(Default)]
struct Recording {
    shown: Vec<(Chart, i32, i32)>,
}

impl Presenter for Recording {
    fn present(&mut self, chart: &Chart, opts: &RenderOptions) -> Result<()> {
        self.shown.push((chart.clone(), opts.width, opts.height));
        Ok(())
    }
}

fn png_dimensions(path: &Path) -> (u32, u32) {
    let img = image::open(path).expect("decode png");
    (img.width(), img.height())
}

fn sample_file(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("profile1.data");
    let mut f = std::fs::File::create(&path).expect("create sample file");
    writeln!(f, "4294892296 120 0 15").unwrap();
    writeln!(f, "garbage").unwrap();
    writeln!(f, "4294892346 348 2 40").unwrap();
    writeln!(f, "4294892396 512 2 58").unwrap();
    path
}

#[test]
fn page_faults_writes_png_then_presents() {
    let dir = tempfile::tempdir().expect("tempdir");
    let cfg = PageFaultConfig {
        input: sample_file(dir.path()),
        output: dir.path().join("out/case_1_work_1_2.png"),
        ..PageFaultConfig::default()
    };
    let mut presenter = Recording::default();

    let samples = run_page_faults(&cfg, &mut presenter).expect("pipeline");

    assert_eq!(samples.jiffies, vec![4294892296, 4294892346, 4294892396]);
    assert_eq!(png_dimensions(&cfg.output), (1000, 600));
    assert_eq!(presenter.shown.len(), 1);
    let (chart, w, h) = &presenter.shown[0];
    assert_eq!((*w, *h), (1000, 600));
    assert_eq!(chart.series[0].len(), 3);
}

#[test]
fn page_faults_without_show_only_writes() {
    let dir = tempfile::tempdir().expect("tempdir");
    let cfg = PageFaultConfig {
        input: sample_file(dir.path()),
        output: dir.path().join("faults.png"),
        show: false,
        ..PageFaultConfig::default()
    };
    let mut presenter = Recording::default();

    run_page_faults(&cfg, &mut presenter).expect("pipeline");
    assert!(cfg.output.exists());
    assert!(presenter.shown.is_empty());
}

#[test]
fn page_faults_missing_input_fails_before_writing() {
    let dir = tempfile::tempdir().expect("tempdir");
    let cfg = PageFaultConfig {
        input: dir.path().join("absent.data"),
        output: dir.path().join("faults.png"),
        ..PageFaultConfig::default()
    };
    let mut presenter = Recording::default();

    let err = run_page_faults(&cfg, &mut presenter).expect_err("missing input");
    assert!(format!("{err:#}").contains("absent.data"));
    assert!(!cfg.output.exists());
    assert!(presenter.shown.is_empty());
}

#[test]
fn utilization_presents_builtin_table_without_writing() {
    let cfg = UtilizationConfig::default();
    assert!(cfg.output.is_none());
    let mut presenter = Recording::default();

    let report = run_utilization(&cfg, &mut presenter).expect("pipeline");

    assert_eq!(report, compute_utilization(&DEFAULT_MEASUREMENTS));
    assert_eq!(presenter.shown.len(), 1);
    assert!(presenter.shown[0].0.y2_axis.is_some());
}

#[test]
fn utilization_writes_png_when_asked() {
    let dir = tempfile::tempdir().expect("tempdir");
    let cfg = UtilizationConfig {
        output: Some(dir.path().join("utilization.png")),
        show: false,
        ..UtilizationConfig::default()
    };
    let mut presenter = Recording::default();

    run_utilization(&cfg, &mut presenter).expect("pipeline");
    assert_eq!(png_dimensions(dir.path().join("utilization.png").as_path()), (1000, 600));
    assert!(presenter.shown.is_empty());
}

#[test]
fn utilization_reads_csv_table() {
    let dir = tempfile::tempdir().expect("tempdir");
    let table = dir.path().join("runs.csv");
    std::fs::write(&table, "N,CPU_time,start_jiffy,end_jiffy\n2,500000000,0,1000\n4,3000000000,0,2000\n")
        .expect("write table");
    let cfg = UtilizationConfig { table: TableSource::Csv(table), show: false, ..UtilizationConfig::default() };

    let report = run_utilization(&cfg, &mut Recording::default()).expect("pipeline");
    assert_eq!(report.n, vec![2, 4]);
    assert_eq!(report.cpu_utilization, vec![0.5, 1.5]);
    assert_eq!(report.finish_time_s, vec![1.0, 2.0]);
}

#[test]
fn rendering_leaves_the_chart_untouched() {
    let report = compute_utilization(&DEFAULT_MEASUREMENTS);
    let chart = profile_analysis::plots::utilization_chart(&report);
    let before = chart.clone();
    let mut opts = RenderOptions::default();
    opts.draw_labels = false;

    chart.render_to_rgba8(&opts).expect("render");
    assert_eq!(chart, before);
}
