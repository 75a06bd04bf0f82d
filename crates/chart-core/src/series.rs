// File: crates/chart-core/src/series.rs
// Summary: Series model for labelled XY line data with optional point markers.

use skia_safe as skia;

use crate::axis::AxisSide;

/// Glyph drawn at every data point of a series.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Marker {
    #[default]
    None,
    /// Filled disc.
    Circle,
    /// Diagonal cross (`x`).
    Cross,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    /// Legend entry; series with an empty label are left out of the legend.
    pub label: String,
    pub data_xy: Vec<(f64, f64)>,
    /// Stroke colour; the theme palette is used when unset.
    pub color: Option<skia::Color>,
    pub marker: Marker,
    pub y_axis: AxisSide,
    pub stroke_width: f32,
}

impl Series {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            data_xy: Vec::new(),
            color: None,
            marker: Marker::None,
            y_axis: AxisSide::Left,
            stroke_width: 2.0,
        }
    }

    pub fn with_data(label: impl Into<String>, data: Vec<(f64, f64)>) -> Self {
        Self { data_xy: data, ..Self::new(label) }
    }

    pub fn with_color(mut self, color: skia::Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.marker = marker;
        self
    }

    pub fn on_axis(mut self, side: AxisSide) -> Self {
        self.y_axis = side;
        self
    }

    pub fn len(&self) -> usize { self.data_xy.len() }

    pub fn is_empty(&self) -> bool { self.data_xy.is_empty() }
}
