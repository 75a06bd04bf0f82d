// File: crates/chart-core/src/chart.rs
// Summary: Chart struct and headless rendering pipeline (RGBA buffer, PNG bytes, PNG file) using Skia CPU raster surfaces.

use std::io::Cursor;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use skia_safe as skia;
use tracing::debug;

use crate::axis::{Axis, AxisSide};
use crate::geometry::RectI32;
use crate::grid::{nice_ticks, Ticks};
use crate::scale::LinearScale;
use crate::series::{Marker, Series};
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, WIDTH};
use crate::view::Extents;

const X_TICK_TARGET: usize = 8;
const Y_TICK_TARGET: usize = 6;
const TICK_LEN: f32 = 5.0;
const PAD: f32 = 6.0;
const OUTER: f32 = 10.0;
const MARKER_RADIUS: f32 = 4.0;
const LEGEND_SWATCH: f32 = 28.0;

/// Corner of the plot area the legend box is anchored to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LegendPosition {
    #[default]
    UpperLeft,
    UpperRight,
}

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    /// Margins around the plot area when `tight_layout` is off or labels are disabled.
    pub insets: Insets,
    pub theme: Theme,
    /// Text (ticks, labels, title, legend) is skipped entirely when false.
    pub draw_labels: bool,
    /// Size margins from the measured labels instead of `insets`.
    pub tight_layout: bool,
    /// Axis label size in pixels; tick labels and title scale from it.
    pub font_size: f32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::light(),
            draw_labels: true,
            tight_layout: true,
            font_size: 14.0,
        }
    }
}

impl RenderOptions {
    fn tick_size(&self) -> f32 { self.font_size * 0.85 }
    fn title_size(&self) -> f32 { self.font_size * 1.15 }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Chart {
    pub title: Option<String>,
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    /// Secondary vertical axis drawn on the right, sharing the x axis.
    pub y2_axis: Option<Axis>,
    /// Axis whose ticks place the horizontal grid lines; no grid when unset.
    pub grid: Option<AxisSide>,
    pub legend: Option<LegendPosition>,
}

impl Default for Chart {
    fn default() -> Self { Self::new() }
}

struct AxisTicks {
    x: Ticks,
    y: Ticks,
    y2: Option<Ticks>,
}

struct Layout {
    plot: RectI32,
    y_tick_width: f32,
    y2_tick_width: f32,
}

impl Chart {
    pub fn new() -> Self {
        Self {
            title: None,
            series: Vec::new(),
            x_axis: Axis::default(),
            y_axis: Axis::default(),
            y2_axis: None,
            grid: None,
            legend: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    /// Axis a series bound to `side` is measured against. Right falls back to
    /// the primary axis when no secondary axis is configured.
    pub fn axis_for(&self, side: AxisSide) -> &Axis {
        match side {
            AxisSide::Left => &self.y_axis,
            AxisSide::Right => self.y2_axis.as_ref().unwrap_or(&self.y_axis),
        }
    }

    /// Fit axis ranges to the data, padding each side by `margin` of the span.
    /// Each vertical axis only considers the series bound to it; axes without
    /// data keep their current range.
    pub fn autoscale_axes(&mut self, margin: f64) {
        if let Some(e) = Extents::of(self.series.iter().map(|s| s.data_xy.as_slice())) {
            let e = e.padded(margin);
            self.x_axis.min = e.x_min;
            self.x_axis.max = e.x_max;
        }
        let left = side_extents(&self.series, AxisSide::Left, margin);
        let right = side_extents(&self.series, AxisSide::Right, margin);
        if let Some(e) = left {
            self.y_axis.min = e.y_min;
            self.y_axis.max = e.y_max;
        }
        if let (Some(axis), Some(e)) = (self.y2_axis.as_mut(), right) {
            axis.min = e.y_min;
            axis.max = e.y_max;
        }
    }

    /// Render into a tightly packed, unpremultiplied RGBA8 buffer.
    /// Returns (pixels, width, height, stride in bytes).
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        let (w, h) = (opts.width.max(1), opts.height.max(1));
        let mut surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or_else(|| anyhow!("failed to create raster surface"))?;

        self.draw(surface.canvas(), (w, h), opts);

        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(anyhow!("failed to read back raster pixels"));
        }
        debug!(width = w, height = h, series = self.series.len(), "rendered chart");
        Ok((pixels, w as u32, h as u32, stride))
    }

    /// Render and encode as PNG in memory.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let (pixels, w, h, _) = self.render_to_rgba8(opts)?;
        let img = image::RgbaImage::from_raw(w, h, pixels)
            .ok_or_else(|| anyhow!("pixel buffer does not match {w}x{h}"))?;
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, image::ImageFormat::Png).context("encode PNG failed")?;
        Ok(out.into_inner())
    }

    /// Render the chart to a PNG at `output_png_path`, creating parent directories.
    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<Path>) -> Result<()> {
        let path = output_png_path.as_ref();
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
        }
        std::fs::write(path, &bytes).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }

    fn ticks(&self) -> AxisTicks {
        AxisTicks {
            x: nice_ticks(self.x_axis.min, self.x_axis.max, X_TICK_TARGET),
            y: nice_ticks(self.y_axis.min, self.y_axis.max, Y_TICK_TARGET),
            y2: self.y2_axis.as_ref().map(|a| nice_ticks(a.min, a.max, Y_TICK_TARGET)),
        }
    }

    fn series_color(&self, index: usize, theme: &Theme) -> skia::Color {
        self.series[index].color.unwrap_or_else(|| theme.series_color(index))
    }

    fn layout(&self, shaper: Option<&TextShaper>, opts: &RenderOptions, (w, h): (i32, i32), ticks: &AxisTicks) -> Layout {
        let Some(shaper) = shaper else {
            return Layout { plot: RectI32::inset(w, h, &opts.insets), y_tick_width: 0.0, y2_tick_width: 0.0 };
        };
        let ts = opts.tick_size();
        let fs = opts.font_size;
        let y_tick_width = shaper.max_width(&ticks.y.labels(), ts);
        let y2_tick_width = ticks.y2.as_ref().map(|t| shaper.max_width(&t.labels(), ts)).unwrap_or(0.0);

        if !opts.tight_layout {
            return Layout { plot: RectI32::inset(w, h, &opts.insets), y_tick_width, y2_tick_width };
        }

        let left = OUTER + label_band(&self.y_axis, fs) + y_tick_width + PAD + TICK_LEN;
        let right = match &self.y2_axis {
            Some(axis) => OUTER + label_band(axis, fs) + y2_tick_width + PAD + TICK_LEN,
            // leave room for the overhang of the last x tick label
            None => OUTER + ticks.x.labels().last().map(|l| shaper.measure_width(l, ts) * 0.5).unwrap_or(0.0),
        };
        let top = OUTER + match self.title.as_deref() {
            Some(t) if !t.is_empty() => opts.title_size() * 1.2 + PAD,
            _ => ts * 0.5,
        };
        let bottom = OUTER + label_band(&self.x_axis, fs) + ts * 1.2 + PAD + TICK_LEN;

        let insets = Insets::new(left.ceil() as u32, right.ceil() as u32, top.ceil() as u32, bottom.ceil() as u32);
        Layout { plot: RectI32::inset(w, h, &insets), y_tick_width, y2_tick_width }
    }

    fn draw(&self, canvas: &skia::Canvas, size: (i32, i32), opts: &RenderOptions) {
        let theme = &opts.theme;
        canvas.clear(theme.background);

        let shaper = opts.draw_labels.then(TextShaper::new);
        let ticks = self.ticks();
        let layout = self.layout(shaper.as_ref(), opts, size, &ticks);
        let plot = layout.plot;
        let xs = LinearScale::horizontal(&plot, &self.x_axis);
        let ys = LinearScale::vertical(&plot, &self.y_axis);
        let y2s = self.y2_axis.as_ref().map(|a| LinearScale::vertical(&plot, a));

        if let Some(side) = self.grid {
            let (gs, gt) = match (side, &y2s, &ticks.y2) {
                (AxisSide::Right, Some(s), Some(t)) => (s, t),
                _ => (&ys, &ticks.y),
            };
            draw_grid(canvas, &plot, theme, &xs, &ticks.x, gs, gt);
        }

        canvas.save();
        canvas.clip_rect(plot.to_skia(), skia::ClipOp::Intersect, true);
        for (i, s) in self.series.iter().enumerate() {
            let scale = LinearScale::vertical(&plot, self.axis_for(s.y_axis));
            draw_line_series(canvas, &xs, &scale, s, self.series_color(i, theme));
        }
        canvas.restore();

        draw_frame(canvas, &plot, theme);
        draw_tick_marks(canvas, &plot, theme, &xs, &ticks.x, &ys, &ticks.y, y2s.as_ref().zip(ticks.y2.as_ref()));

        let Some(shaper) = shaper else { return };
        let ts = opts.tick_size();
        let fs = opts.font_size;

        // x ticks and label
        let x_color = self.x_axis.color.unwrap_or(theme.tick);
        let x_tick_base = plot.bottom as f32 + TICK_LEN + PAD + ts * 0.9;
        for (v, label) in ticks.x.values.iter().zip(ticks.x.labels()) {
            shaper.draw_centered(canvas, &label, xs.to_px(*v), x_tick_base, ts, x_color);
        }
        if !self.x_axis.label.is_empty() {
            let base = plot.bottom as f32 + TICK_LEN + PAD + ts * 1.2 + PAD + fs * 0.9;
            let color = self.x_axis.color.unwrap_or(theme.axis_label);
            shaper.draw_centered(canvas, &self.x_axis.label, plot.center_x(), base, fs, color);
        }

        // left axis
        let y_color = self.y_axis.color.unwrap_or(theme.tick);
        let y_tick_right = plot.left as f32 - TICK_LEN - PAD;
        for (v, label) in ticks.y.values.iter().zip(ticks.y.labels()) {
            shaper.draw_right(canvas, &label, y_tick_right, ys.to_px(*v) + ts * 0.35, ts, y_color);
        }
        if !self.y_axis.label.is_empty() {
            let cx = y_tick_right - layout.y_tick_width - PAD - fs * 0.6;
            let color = self.y_axis.color.unwrap_or(theme.axis_label);
            shaper.draw_vertical(canvas, &self.y_axis.label, cx, plot.center_y(), fs, color);
        }

        // right axis
        if let (Some(axis), Some(scale), Some(t)) = (&self.y2_axis, &y2s, &ticks.y2) {
            let color = axis.color.unwrap_or(theme.tick);
            let tick_left = plot.right as f32 + TICK_LEN + PAD;
            for (v, label) in t.values.iter().zip(t.labels()) {
                shaper.draw_left(canvas, &label, tick_left, scale.to_px(*v) + ts * 0.35, ts, color);
            }
            if !axis.label.is_empty() {
                let cx = tick_left + layout.y2_tick_width + PAD + fs * 0.6;
                let color = axis.color.unwrap_or(theme.axis_label);
                shaper.draw_vertical(canvas, &axis.label, cx, plot.center_y(), fs, color);
            }
        }

        if let Some(title) = self.title.as_deref().filter(|t| !t.is_empty()) {
            let base = plot.top as f32 - PAD - opts.title_size() * 0.2;
            shaper.draw_centered(canvas, title, plot.center_x(), base, opts.title_size(), theme.title);
        }

        if let Some(pos) = self.legend {
            let entries: Vec<(&Series, skia::Color)> = self
                .series
                .iter()
                .enumerate()
                .filter(|(_, s)| !s.label.is_empty())
                .map(|(i, s)| (s, self.series_color(i, theme)))
                .collect();
            draw_legend(canvas, &shaper, &plot, theme, ts, pos, &entries);
        }
    }
}

// ---- helpers ----------------------------------------------------------------

fn side_extents(series: &[Series], side: AxisSide, margin: f64) -> Option<Extents> {
    Extents::of(series.iter().filter(|s| s.y_axis == side).map(|s| s.data_xy.as_slice()))
        .map(|e| e.padded(margin))
}

fn label_band(axis: &Axis, size: f32) -> f32 {
    if axis.label.is_empty() { 0.0 } else { size * 1.2 + PAD }
}

fn stroke_paint(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(color);
    paint
}

fn draw_grid(
    canvas: &skia::Canvas,
    plot: &RectI32,
    theme: &Theme,
    xs: &LinearScale,
    x_ticks: &Ticks,
    ys: &LinearScale,
    y_ticks: &Ticks,
) {
    let paint = stroke_paint(theme.grid, 0.8);
    let (l, t, r, b) = (plot.left as f32, plot.top as f32, plot.right as f32, plot.bottom as f32);

    // verticals
    for &x in &x_ticks.values {
        let px = xs.to_px(x);
        canvas.draw_line((px, t), (px, b), &paint);
    }
    // horizontals
    for &y in &y_ticks.values {
        let py = ys.to_px(y);
        canvas.draw_line((l, py), (r, py), &paint);
    }
}

fn draw_frame(canvas: &skia::Canvas, plot: &RectI32, theme: &Theme) {
    canvas.draw_rect(plot.to_skia(), &stroke_paint(theme.axis_line, 1.0));
}

#[allow(clippy::too_many_arguments)]
fn draw_tick_marks(
    canvas: &skia::Canvas,
    plot: &RectI32,
    theme: &Theme,
    xs: &LinearScale,
    x_ticks: &Ticks,
    ys: &LinearScale,
    y_ticks: &Ticks,
    right: Option<(&LinearScale, &Ticks)>,
) {
    let paint = stroke_paint(theme.axis_line, 1.0);
    let (l, r, b) = (plot.left as f32, plot.right as f32, plot.bottom as f32);

    for &x in &x_ticks.values {
        let px = xs.to_px(x);
        canvas.draw_line((px, b), (px, b + TICK_LEN), &paint);
    }
    for &y in &y_ticks.values {
        let py = ys.to_px(y);
        canvas.draw_line((l - TICK_LEN, py), (l, py), &paint);
    }
    if let Some((scale, ticks)) = right {
        for &y in &ticks.values {
            let py = scale.to_px(y);
            canvas.draw_line((r, py), (r + TICK_LEN, py), &paint);
        }
    }
}

fn draw_line_series(canvas: &skia::Canvas, xs: &LinearScale, ys: &LinearScale, series: &Series, color: skia::Color) {
    let pts: Vec<skia::Point> = series
        .data_xy
        .iter()
        .filter(|(x, y)| x.is_finite() && y.is_finite())
        .map(|&(x, y)| skia::Point::new(xs.to_px(x), ys.to_px(y)))
        .collect();

    if pts.len() >= 2 {
        let mut stroke = stroke_paint(color, series.stroke_width);
        stroke.set_stroke_join(skia::paint::Join::Round);
        stroke.set_stroke_cap(skia::paint::Cap::Round);
        canvas.draw_points(skia::canvas::PointMode::Polygon, &pts, &stroke);
    }

    for p in &pts {
        draw_marker(canvas, series.marker, (p.x, p.y), color);
    }
}

fn draw_marker(canvas: &skia::Canvas, marker: Marker, (x, y): (f32, f32), color: skia::Color) {
    let r = MARKER_RADIUS;
    match marker {
        Marker::None => {}
        Marker::Circle => {
            let mut fill = skia::Paint::default();
            fill.set_anti_alias(true);
            fill.set_style(skia::paint::Style::Fill);
            fill.set_color(color);
            canvas.draw_circle((x, y), r, &fill);
        }
        Marker::Cross => {
            let paint = stroke_paint(color, 1.5);
            canvas.draw_line((x - r, y - r), (x + r, y + r), &paint);
            canvas.draw_line((x - r, y + r), (x + r, y - r), &paint);
        }
    }
}

fn draw_legend(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    plot: &RectI32,
    theme: &Theme,
    size: f32,
    pos: LegendPosition,
    entries: &[(&Series, skia::Color)],
) {
    if entries.is_empty() { return; }

    let row_h = size * 1.5;
    let labels: Vec<&str> = entries.iter().map(|(s, _)| s.label.as_str()).collect();
    let box_w = PAD * 3.0 + LEGEND_SWATCH + shaper.max_width(&labels, size);
    let box_h = PAD * 2.0 + row_h * entries.len() as f32;
    let left = match pos {
        LegendPosition::UpperLeft => plot.left as f32 + OUTER,
        LegendPosition::UpperRight => plot.right as f32 - OUTER - box_w,
    };
    let top = plot.top as f32 + OUTER;
    let rect = skia::Rect::from_xywh(left, top, box_w, box_h);

    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);
    fill.set_color(theme.legend_fill);
    canvas.draw_round_rect(rect, 3.0, 3.0, &fill);
    canvas.draw_round_rect(rect, 3.0, 3.0, &stroke_paint(theme.legend_border, 1.0));

    for (i, (series, color)) in entries.iter().enumerate() {
        let cy = top + PAD + row_h * (i as f32 + 0.5);
        let x0 = left + PAD;
        canvas.draw_line((x0, cy), (x0 + LEGEND_SWATCH, cy), &stroke_paint(*color, series.stroke_width));
        draw_marker(canvas, series.marker, (x0 + LEGEND_SWATCH * 0.5, cy), *color);
        shaper.draw_left(canvas, &series.label, x0 + LEGEND_SWATCH + PAD, cy + size * 0.35, size, theme.axis_label);
    }
}
