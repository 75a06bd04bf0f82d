// File: crates/chart-core/src/grid.rs
// Summary: Tick layout helpers: "nice" step selection and step-aware label formatting.

/// Tick positions for one axis together with the step that produced them.
#[derive(Clone, Debug, PartialEq)]
pub struct Ticks {
    pub values: Vec<f64>,
    pub step: f64,
}

impl Ticks {
    pub fn empty() -> Self {
        Self { values: Vec::new(), step: 0.0 }
    }

    pub fn labels(&self) -> Vec<String> {
        self.values.iter().map(|&v| format_tick(v, self.step)).collect()
    }
}

/// Pick roughly `target` ticks inside `[min, max]` on a 1/2/2.5/5 x 10^k grid.
pub fn nice_ticks(min: f64, max: f64, target: usize) -> Ticks {
    if !min.is_finite() || !max.is_finite() || target == 0 {
        return Ticks::empty();
    }
    let (lo, hi) = if max < min { (max, min) } else { (min, max) };
    let span = hi - lo;
    if span <= 0.0 {
        return Ticks { values: vec![lo], step: 0.0 };
    }

    let raw = span / target as f64;
    let mag = 10f64.powf(raw.log10().floor());
    let norm = raw / mag;
    let mult = if norm <= 1.0 {
        1.0
    } else if norm <= 2.0 {
        2.0
    } else if norm <= 2.5 {
        2.5
    } else if norm <= 5.0 {
        5.0
    } else {
        10.0
    };
    let step = mult * mag;

    let eps = step * 1e-9;
    let first = (lo / step).ceil();
    let mut values = Vec::new();
    for i in 0.. {
        let v = (first + i as f64) * step;
        if v > hi + eps || i > 1_000 {
            break;
        }
        // snap -0.0 and float dust at the origin
        values.push(if v.abs() < eps { 0.0 } else { v });
    }
    Ticks { values, step }
}

/// Format `value` with just enough decimals to distinguish ticks spaced `step` apart.
pub fn format_tick(value: f64, step: f64) -> String {
    format!("{:.*}", decimals_for(step), value)
}

fn decimals_for(step: f64) -> usize {
    if !step.is_finite() || step <= 0.0 {
        return 0;
    }
    (0..=12)
        .find(|&d| {
            let scaled = step * 10f64.powi(d as i32);
            (scaled - scaled.round()).abs() < 1e-6 * scaled.max(1.0)
        })
        .unwrap_or(12)
}
