// File: crates/chart-core/src/theme.rs
// Summary: Light/Dark theming for chart rendering colors.

use skia_safe as skia;

pub const TAB_BLUE: skia::Color = skia::Color::new(0xff1f77b4);
pub const TAB_ORANGE: skia::Color = skia::Color::new(0xffff7f0e);
pub const TAB_GREEN: skia::Color = skia::Color::new(0xff2ca02c);
pub const TAB_RED: skia::Color = skia::Color::new(0xffd62728);
pub const TAB_PURPLE: skia::Color = skia::Color::new(0xff9467bd);
pub const TAB_BROWN: skia::Color = skia::Color::new(0xff8c564b);
pub const TAB_PINK: skia::Color = skia::Color::new(0xffe377c2);
pub const TAB_GRAY: skia::Color = skia::Color::new(0xff7f7f7f);
pub const TAB_OLIVE: skia::Color = skia::Color::new(0xffbcbd22);
pub const TAB_CYAN: skia::Color = skia::Color::new(0xff17becf);

/// Default series colour cycle.
pub const TAB10: [skia::Color; 10] = [
    TAB_BLUE, TAB_ORANGE, TAB_GREEN, TAB_RED, TAB_PURPLE,
    TAB_BROWN, TAB_PINK, TAB_GRAY, TAB_OLIVE, TAB_CYAN,
];

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    pub title: skia::Color,
    pub legend_fill: skia::Color,
    pub legend_border: skia::Color,
    pub palette: [skia::Color; 10],
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            grid: skia::Color::from_argb(255, 0xb0, 0xb0, 0xb0),
            axis_line: skia::Color::from_argb(255, 0, 0, 0),
            axis_label: skia::Color::from_argb(255, 0, 0, 0),
            tick: skia::Color::from_argb(255, 0, 0, 0),
            title: skia::Color::from_argb(255, 0, 0, 0),
            legend_fill: skia::Color::from_argb(204, 255, 255, 255),
            legend_border: skia::Color::from_argb(255, 0xcc, 0xcc, 0xcc),
            palette: TAB10,
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            title: skia::Color::from_argb(255, 235, 235, 245),
            legend_fill: skia::Color::from_argb(204, 28, 28, 32),
            legend_border: skia::Color::from_argb(255, 70, 70, 80),
            palette: TAB10,
        }
    }

    /// Palette colour for the `index`-th series, cycling.
    pub fn series_color(&self, index: usize) -> skia::Color {
        self.palette[index % self.palette.len()]
    }
}

impl Default for Theme {
    fn default() -> Self { Self::light() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}
