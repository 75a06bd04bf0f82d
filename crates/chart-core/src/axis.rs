// File: crates/chart-core/src/axis.rs
// Summary: Axis model with labels, ranges and an optional accent colour.

use skia_safe as skia;

/// Which vertical axis a series is measured against.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AxisSide {
    #[default]
    Left,
    Right,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    /// Colour for the axis label and tick labels; theme default when unset.
    pub color: Option<skia::Color>,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max, color: None }
    }

    pub fn with_color(mut self, color: skia::Color) -> Self {
        self.color = Some(color);
        self
    }
}

/// Unlabelled unit range, used until data or the caller sets one.
impl Default for Axis {
    fn default() -> Self {
        Self::new("", 0.0, 1.0)
    }
}
