// File: crates/chart-core/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing a PNG.

use chart_core::{Axis, Chart, LegendPosition, RenderOptions, Series};
use chart_core::axis::AxisSide;

#[test]
fn render_smoke_png() {
    // Minimal data: tiny line series
    let mut chart = Chart::new().with_title("Smoke");
    chart.x_axis = Axis::new("X", 0.0, 4.0);
    chart.y_axis = Axis::new("Y", 0.0, 4.0);
    chart.grid = Some(AxisSide::Left);
    chart.legend = Some(LegendPosition::UpperLeft);
    chart.add_series(Series::with_data(
        "line",
        vec![(0.0, 0.0), (1.0, 2.0), (2.0, 1.0), (3.0, 3.5), (4.0, 2.5)],
    ));

    let opts = RenderOptions::default();
    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("nested/smoke.png");

    chart.render_to_png(&opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn png_has_figure_dimensions() {
    let mut chart = Chart::new();
    chart.add_series(Series::with_data("a", vec![(0.0, 1.0), (1.0, 2.0)]));
    chart.autoscale_axes(0.05);

    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
    let img = image::load_from_memory(&bytes).expect("decode png");
    assert_eq!((img.width(), img.height()), (1000, 600));
}

#[test]
fn empty_chart_still_renders() {
    let chart = Chart::new();
    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    let (px, w, h, _) = chart.render_to_rgba8(&opts).expect("render empty");
    assert_eq!(px.len(), (w * h * 4) as usize);
}
