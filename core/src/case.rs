//! Single test case orchestration.
//!
//! A case moves through `Pending -> Decoding -> Selecting -> Interpolating`
//! and ends in either `Reported` or `Failed`. Sample-level problems are
//! absorbed during decoding; everything else fails only the current case.

use std::fmt;

use log::{debug, warn};
use math::lagrange::{ExactLagrange, FloatLagrange};
use math::traits::ConstantTerm;
use num_bigint::BigInt;

use crate::error::{CaseError, CaseResult, RecordError};
use crate::params::{Method, RunnerConfig};
use crate::sample::{decode_all, RawSample, Sample, SampleSet, SkippedSample};

/// One independent reconstruction problem.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestCase {
    index: usize,
    k: i64,
    n: Option<i64>,
    samples: Vec<RawSample>,
}

impl TestCase {
    pub fn new(index: usize, k: i64, samples: Vec<RawSample>) -> Self {
        Self {
            index,
            k,
            n: None,
            samples,
        }
    }

    /// Record the declared sample count (`keys.n`).
    #[must_use]
    pub fn with_n(mut self, n: Option<i64>) -> Self {
        self.n = n;
        self
    }

    /// 1-based position of this case in the input.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn k(&self) -> i64 {
        self.k
    }

    pub fn n(&self) -> Option<i64> {
        self.n
    }

    pub fn samples(&self) -> &[RawSample] {
        &self.samples
    }
}

/// Either a well-formed case or the reason its record could not be read.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CaseRecord {
    Case(TestCase),
    Malformed { index: usize, error: RecordError },
}

impl CaseRecord {
    pub fn index(&self) -> usize {
        match self {
            CaseRecord::Case(case) => case.index(),
            CaseRecord::Malformed { index, .. } => *index,
        }
    }
}

impl From<TestCase> for CaseRecord {
    fn from(case: TestCase) -> Self {
        CaseRecord::Case(case)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CaseStage {
    Pending,
    Decoding,
    Selecting,
    Interpolating,
    Reported,
    Failed,
}

impl fmt::Display for CaseStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CaseStage::Pending => "pending",
            CaseStage::Decoding => "decoding",
            CaseStage::Selecting => "selecting",
            CaseStage::Interpolating => "interpolating",
            CaseStage::Reported => "reported",
            CaseStage::Failed => "failed",
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CaseOutcome {
    Solved {
        secret: BigInt,
        /// Result of the counterpart method when cross-checking.
        cross_check: Option<BigInt>,
    },
    Failed {
        /// Stage that was active when the case failed.
        stage: CaseStage,
        error: CaseError,
    },
}

/// Everything the output collaborator needs to render one case.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CaseReport {
    pub index: usize,
    pub k: Option<i64>,
    pub decoded: Vec<Sample>,
    pub skipped: Vec<SkippedSample>,
    pub outcome: CaseOutcome,
}

impl CaseReport {
    /// Report for a record that never became a [`TestCase`].
    pub fn malformed(index: usize, error: RecordError) -> Self {
        Self {
            index,
            k: None,
            decoded: Vec::new(),
            skipped: Vec::new(),
            outcome: CaseOutcome::Failed {
                stage: CaseStage::Pending,
                error: error.into(),
            },
        }
    }

    pub fn secret(&self) -> Option<&BigInt> {
        match &self.outcome {
            CaseOutcome::Solved { secret, .. } => Some(secret),
            CaseOutcome::Failed { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&CaseError> {
        match &self.outcome {
            CaseOutcome::Solved { .. } => None,
            CaseOutcome::Failed { error, .. } => Some(error),
        }
    }

    pub fn is_solved(&self) -> bool {
        self.secret().is_some()
    }

    /// Terminal state of the case.
    pub fn final_stage(&self) -> CaseStage {
        match self.outcome {
            CaseOutcome::Solved { .. } => CaseStage::Reported,
            CaseOutcome::Failed { .. } => CaseStage::Failed,
        }
    }
}

/// Tracks the current stage of one case and logs each transition.
struct Progress {
    index: usize,
    stage: CaseStage,
}

impl Progress {
    fn new(index: usize) -> Self {
        Self {
            index,
            stage: CaseStage::Pending,
        }
    }

    fn advance(&mut self, next: CaseStage) {
        debug!("case {}: {} -> {}", self.index, self.stage, next);
        self.stage = next;
    }
}

/// Runs test cases with a fixed [`RunnerConfig`]. Holds no per-case state,
/// so one runner can be shared across threads.
#[derive(Clone, Copy, Debug, Default)]
pub struct CaseRunner {
    config: RunnerConfig,
}

impl CaseRunner {
    pub fn new(config: RunnerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    pub fn run_record(&self, record: &CaseRecord) -> CaseReport {
        match record {
            CaseRecord::Case(case) => self.run(case),
            CaseRecord::Malformed { index, error } => {
                warn!("case {index}: {error}");
                CaseReport::malformed(*index, error.clone())
            }
        }
    }

    pub fn run(&self, case: &TestCase) -> CaseReport {
        let mut progress = Progress::new(case.index());

        progress.advance(CaseStage::Decoding);
        let decoded = decode_all(case.samples());
        for sample in &decoded.samples {
            debug!("case {}: decoded {sample}", case.index());
        }
        self.check_declared_count(case);

        progress.advance(CaseStage::Selecting);
        let outcome = match SampleSet::select(case.k(), &decoded.samples) {
            Err(error) => Self::fail(&mut progress, error),
            Ok(set) => {
                progress.advance(CaseStage::Interpolating);
                match self.interpolate(case.index(), &set) {
                    Ok((secret, cross_check)) => {
                        progress.advance(CaseStage::Reported);
                        CaseOutcome::Solved {
                            secret,
                            cross_check,
                        }
                    }
                    Err(error) => Self::fail(&mut progress, error),
                }
            }
        };

        CaseReport {
            index: case.index(),
            k: Some(case.k()),
            decoded: decoded.samples,
            skipped: decoded.skipped,
            outcome,
        }
    }

    fn fail(progress: &mut Progress, error: CaseError) -> CaseOutcome {
        let stage = progress.stage;
        warn!("case {} failed while {stage}: {error}", progress.index);
        progress.advance(CaseStage::Failed);
        CaseOutcome::Failed { stage, error }
    }

    fn check_declared_count(&self, case: &TestCase) {
        if let Some(n) = case.n() {
            let supplied = case.samples().len();
            if usize::try_from(n).ok() != Some(supplied) {
                warn!(
                    "case {}: keys.n = {n} but {supplied} samples were supplied",
                    case.index()
                );
            }
        }
    }

    fn interpolate(
        &self,
        index: usize,
        set: &SampleSet,
    ) -> CaseResult<(BigInt, Option<BigInt>)> {
        let secret = constant_term(self.config.method, set.samples())?;
        if !self.config.cross_check {
            return Ok((secret, None));
        }

        let counterpart = self.config.method.counterpart();
        match constant_term(counterpart, set.samples()) {
            Ok(other) => {
                if other != secret {
                    warn!(
                        "case {index}: {} result {secret} disagrees with {counterpart} result {other}",
                        self.config.method
                    );
                }
                Ok((secret, Some(other)))
            }
            Err(error) => {
                warn!("case {index}: {counterpart} cross-check failed: {error}");
                Ok((secret, None))
            }
        }
    }
}

fn constant_term(method: Method, samples: &[Sample]) -> CaseResult<BigInt> {
    let value = match method {
        Method::Exact => ExactLagrange.constant_term(samples)?,
        Method::Float => FloatLagrange.constant_term(samples)?,
    };
    Ok(value)
}
