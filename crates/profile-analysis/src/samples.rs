// File: crates/profile-analysis/src/samples.rs
// Summary: Reader for profiler sample dumps (`jiffies min_flt maj_flt cpu_use`, one sample per line).

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{AnalysisError, Result};

/// Tokens a sample line must have to be accepted.
pub const SAMPLE_FIELDS: usize = 4;

/// One profiler sample: the jiffy timestamp and the accumulated fault counts at that time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sample {
    pub jiffies: u64,
    pub minor_faults: u64,
    pub major_faults: u64,
}

/// Samples as three index-aligned columns, in file order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SampleSeries {
    pub jiffies: Vec<u64>,
    pub minor_faults: Vec<u64>,
    pub major_faults: Vec<u64>,
}

impl SampleSeries {
    pub fn push(&mut self, s: Sample) {
        self.jiffies.push(s.jiffies);
        self.minor_faults.push(s.minor_faults);
        self.major_faults.push(s.major_faults);
    }

    pub fn len(&self) -> usize { self.jiffies.len() }

    pub fn is_empty(&self) -> bool { self.jiffies.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = Sample> + '_ {
        self.jiffies
            .iter()
            .zip(&self.minor_faults)
            .zip(&self.major_faults)
            .map(|((&jiffies, &minor_faults), &major_faults)| Sample { jiffies, minor_faults, major_faults })
    }
}

impl FromIterator<Sample> for SampleSeries {
    fn from_iter<I: IntoIterator<Item = Sample>>(iter: I) -> Self {
        let mut out = SampleSeries::default();
        for s in iter {
            out.push(s);
        }
        out
    }
}

/// Read a sample file. The file is closed before returning on every path.
pub fn read_samples(path: impl AsRef<Path>) -> Result<SampleSeries> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| AnalysisError::Io { path: path.to_path_buf(), source })?;
    let samples = parse_samples(BufReader::new(file), path)?;
    info!(path = %path.display(), samples = samples.len(), "loaded samples");
    Ok(samples)
}

/// Parse samples from `reader`; `origin` names the source in errors.
///
/// Lines end at `\n`, `\r\n` or a lone `\r`. Lines that do not split into
/// exactly four whitespace-separated tokens are skipped without error. The
/// fourth token (accumulated CPU time) is required but not used.
///
/// The first three tokens must be unsigned decimal integers: a leading `-`
/// (or anything else that does not fit a `u64`) fails with
/// [`AnalysisError::InvalidNumber`] carrying the 1-based line number.
pub fn parse_samples<R: BufRead>(reader: R, origin: impl AsRef<Path>) -> Result<SampleSeries> {
    let origin = origin.as_ref();
    let io_err = |source: std::io::Error| AnalysisError::Io { path: origin.to_path_buf(), source };
    let mut out = SampleSeries::default();
    let mut skipped = 0usize;
    let mut line_no = 0usize;

    for chunk in reader.split(b'\n') {
        let chunk = chunk.map_err(io_err)?;
        let chunk = chunk.strip_suffix(b"\r").unwrap_or(&chunk[..]);
        // old Mac line endings: a lone CR also ends a line
        for raw in chunk.split(|&b| b == b'\r') {
            line_no += 1;
            let line = std::str::from_utf8(raw)
                .map_err(|e| io_err(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))?;
            let tokens: Vec<&str> = line.split_whitespace().collect();
            if tokens.len() != SAMPLE_FIELDS {
                skipped += 1;
                continue;
            }
            let field = |i: usize| parse_field(tokens[i], origin, line_no);
            out.push(Sample {
                jiffies: field(0)?,
                minor_faults: field(1)?,
                major_faults: field(2)?,
            });
        }
    }

    if skipped > 0 {
        debug!(origin = %origin.display(), skipped, "skipped lines without {SAMPLE_FIELDS} fields");
    }
    Ok(out)
}

fn parse_field(token: &str, origin: &Path, line: usize) -> Result<u64> {
    token.parse::<u64>().map_err(|source| AnalysisError::InvalidNumber {
        path: PathBuf::from(origin),
        line,
        token: token.to_string(),
        source,
    })
}
