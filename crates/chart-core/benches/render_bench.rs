use anyhow::Result;
use chart_core::{Axis, AxisSide, Chart, Marker, RenderOptions, Series};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn build_chart_xy(n: usize) -> Chart {
    let mut ch = Chart::new().with_title("bench");
    let mut minor = Vec::with_capacity(n);
    let mut major = Vec::with_capacity(n);
    for i in 0..n {
        let x = i as f64;
        minor.push((x, x * 3.0 + (i as f64 * 0.01).sin() * 10.0));
        major.push((x, (i / 100) as f64));
    }
    ch.x_axis = Axis::new("Jiffies", 0.0, 1.0);
    ch.y_axis = Axis::new("Count", 0.0, 1.0);
    ch.grid = Some(AxisSide::Left);
    ch.add_series(Series::with_data("minor", minor));
    ch.add_series(Series::with_data("major", major).with_marker(Marker::Cross));
    ch.autoscale_axes(0.05);
    ch
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    for &n in &[1_000usize, 10_000usize] {
        group.bench_function(format!("xy_{n}"), |b| {
            let ch = build_chart_xy(n);
            let mut opts = RenderOptions::default();
            opts.draw_labels = false;
            b.iter(|| -> Result<()> {
                let bytes = ch.render_to_png_bytes(&opts)?;
                black_box(bytes);
                Ok(())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
