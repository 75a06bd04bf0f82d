// File: crates/chart-core/src/view.rs
// Data extents over series points, used to autoscale axis ranges.

/// Bounding box of a set of XY points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extents {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Extents {
    /// Bounds of all finite points; `None` when there are none.
    pub fn of<'a>(data: impl IntoIterator<Item = &'a [(f64, f64)]>) -> Option<Self> {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for points in data {
            for &(x, y) in points {
                if !x.is_finite() || !y.is_finite() { continue; }
                x_min = x_min.min(x);
                x_max = x_max.max(x);
                y_min = y_min.min(y);
                y_max = y_max.max(y);
            }
        }
        if !x_min.is_finite() || !y_min.is_finite() {
            return None;
        }
        Some(Self { x_min, x_max, y_min, y_max })
    }

    /// Widen degenerate spans by one unit, then pad each side by `margin` of the span.
    pub fn padded(self, margin: f64) -> Self {
        let (x_min, x_max) = pad(self.x_min, self.x_max, margin);
        let (y_min, y_max) = pad(self.y_min, self.y_max, margin);
        Self { x_min, x_max, y_min, y_max }
    }
}

fn pad(min: f64, mut max: f64, margin: f64) -> (f64, f64) {
    if (max - min).abs() < 1e-9 { max = min + 1.0; }
    let m = (max - min) * margin.max(0.0);
    (min - m, max + m)
}
