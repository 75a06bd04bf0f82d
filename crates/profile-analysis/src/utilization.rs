// File: crates/profile-analysis/src/utilization.rs
// Summary: CPU utilization and finish time per degree of multiprogramming, from CPU time and jiffy intervals.

use std::path::Path;

use tracing::info;

use crate::error::{AnalysisError, Result};

/// Timer ticks per second.
pub const HZ: u32 = 1000;

const NANOS_PER_SEC: f64 = 1e9;

/// One run of `n` concurrent work processes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Measurement {
    /// Degree of multiprogramming.
    pub n: u32,
    /// Total CPU time consumed, in nanoseconds.
    pub cpu_time_ns: u64,
    pub start_jiffy: u64,
    pub end_jiffy: u64,
}

impl Measurement {
    pub const fn new(n: u32, cpu_time_ns: u64, start_jiffy: u64, end_jiffy: u64) -> Self {
        Self { n, cpu_time_ns, start_jiffy, end_jiffy }
    }

    pub fn cpu_time_s(&self) -> f64 {
        self.cpu_time_ns as f64 / NANOS_PER_SEC
    }

    /// Elapsed wall-clock time between the start and end jiffies.
    pub fn wall_time_s(&self) -> f64 {
        let ticks = i128::from(self.end_jiffy) - i128::from(self.start_jiffy);
        ticks as f64 / f64::from(HZ)
    }

    /// CPU seconds per wall second; 0 when no wall time elapsed.
    pub fn cpu_utilization(&self) -> f64 {
        let wall = self.wall_time_s();
        if wall == 0.0 { 0.0 } else { self.cpu_time_s() / wall }
    }
}

/// Measurements taken with 5 to 22 concurrent instances.
pub const DEFAULT_MEASUREMENTS: [Measurement; 5] = [
    Measurement::new(5, 710_921_200, 4_294_755_862, 4_294_776_013),
    Measurement::new(11, 1_594_917_900, 4_294_692_469, 4_294_712_780),
    Measurement::new(16, 3_418_859_400, 4_294_712_220, 4_294_733_212),
    Measurement::new(20, 3_797_369_100, 4_294_679_926, 4_294_700_843),
    Measurement::new(22, 5_376_555_900, 4_294_705_162, 4_294_727_268),
];

/// Derived columns, index-aligned with the measurements they came from.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UtilizationSeries {
    pub n: Vec<u32>,
    pub cpu_utilization: Vec<f64>,
    pub finish_time_s: Vec<f64>,
}

impl UtilizationSeries {
    pub fn len(&self) -> usize { self.n.len() }

    pub fn is_empty(&self) -> bool { self.n.is_empty() }
}

/// Derive utilization and finish time for every measurement, keeping input order.
pub fn compute_utilization(measurements: &[Measurement]) -> UtilizationSeries {
    let mut out = UtilizationSeries {
        n: Vec::with_capacity(measurements.len()),
        cpu_utilization: Vec::with_capacity(measurements.len()),
        finish_time_s: Vec::with_capacity(measurements.len()),
    };
    for m in measurements {
        out.n.push(m.n);
        out.cpu_utilization.push(m.cpu_utilization());
        out.finish_time_s.push(m.wall_time_s());
    }
    out
}

/// Load measurements from a CSV with `N,CPU_time,start_jiffy,end_jiffy` headers
/// (any order, case-insensitive).
pub fn load_measurements_csv(path: impl AsRef<Path>) -> Result<Vec<Measurement>> {
    let path = path.as_ref();
    let table_err = |source: csv::Error| AnalysisError::Table { path: path.to_path_buf(), source };

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(table_err)?;

    let headers = rdr
        .headers()
        .map_err(table_err)?
        .iter()
        .map(|h| h.to_lowercase())
        .collect::<Vec<_>>();
    let idx = |name: &'static str| -> Result<usize> {
        headers
            .iter()
            .position(|h| h == &name.to_lowercase())
            .ok_or(AnalysisError::MissingColumn { path: path.to_path_buf(), column: name })
    };
    let (i_n, i_cpu, i_start, i_end) = (idx("N")?, idx("CPU_time")?, idx("start_jiffy")?, idx("end_jiffy")?);

    let mut out = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec.map_err(table_err)?;
        let field = |i: usize, column: &'static str| -> Result<u64> {
            let value = rec.get(i).unwrap_or("");
            value.parse::<u64>().map_err(|_| AnalysisError::InvalidField {
                path: path.to_path_buf(),
                row: row + 1,
                column,
                value: value.to_string(),
            })
        };
        let n = field(i_n, "N")?;
        let n = u32::try_from(n).map_err(|_| AnalysisError::InvalidField {
            path: path.to_path_buf(),
            row: row + 1,
            column: "N",
            value: n.to_string(),
        })?;
        out.push(Measurement {
            n,
            cpu_time_ns: field(i_cpu, "CPU_time")?,
            start_jiffy: field(i_start, "start_jiffy")?,
            end_jiffy: field(i_end, "end_jiffy")?,
        });
    }
    info!(path = %path.display(), rows = out.len(), "loaded measurement table");
    Ok(out)
}
