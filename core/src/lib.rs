//! Recover the constant term of a polynomial from base-encoded sample points.
//!
//! Each test case supplies `k` and a list of `(x, base, value)` triples. The
//! first `k` decodable samples are interpolated exactly at `x = 0`.

pub mod batch;
pub mod case;
pub mod error;
pub mod input;
pub mod params;
pub mod report;
pub mod sample;

use std::path::Path;

pub use batch::{run_batch, BatchSummary};
pub use case::{CaseOutcome, CaseRecord, CaseReport, CaseRunner, CaseStage, TestCase};
pub use error::{CaseError, Error, InputError, RecordError, Result, SampleError};
pub use params::{Method, OutputFormat, RunnerConfig};
pub use sample::{RawSample, Sample, SampleSet};

/// Load `path` and run every case in it.
pub fn solve_file(path: &Path, config: &RunnerConfig) -> Result<Vec<CaseReport>> {
    let records = input::load_cases(path)?;
    Ok(run_batch(&records, config))
}
