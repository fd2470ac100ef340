use log::info;
use rayon::prelude::*;

use crate::case::{CaseRecord, CaseReport, CaseRunner};
use crate::params::RunnerConfig;

/// Solved / failed tallies for a finished batch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub solved: usize,
    pub failed: usize,
}

impl BatchSummary {
    pub fn from_reports(reports: &[CaseReport]) -> Self {
        let solved = reports.iter().filter(|r| r.is_solved()).count();
        Self {
            solved,
            failed: reports.len() - solved,
        }
    }

    pub fn total(&self) -> usize {
        self.solved + self.failed
    }
}

/// Run every record and return the reports ordered by case index.
///
/// Cases share nothing mutable, so with `config.parallel` they are spread
/// over the rayon pool; the final ordering never depends on completion order.
pub fn run_batch(records: &[CaseRecord], config: &RunnerConfig) -> Vec<CaseReport> {
    let runner = CaseRunner::new(*config);

    let mut reports: Vec<CaseReport> = if config.parallel {
        records
            .par_iter()
            .map(|record| runner.run_record(record))
            .collect()
    } else {
        records
            .iter()
            .map(|record| runner.run_record(record))
            .collect()
    };
    reports.sort_by_key(|report| report.index);

    let summary = BatchSummary::from_reports(&reports);
    info!(
        "processed {} case(s): {} solved, {} failed",
        summary.total(),
        summary.solved,
        summary.failed
    );
    reports
}

#[cfg(test)]
mod tests {
    use num_bigint::BigInt;

    use super::*;
    use crate::case::TestCase;
    use crate::error::{CaseError, RecordError};
    use crate::sample::RawSample;

    fn case(index: usize, k: i64, points: &[(i64, i64)]) -> CaseRecord {
        let samples = points
            .iter()
            .map(|(x, y)| RawSample::new(x.to_string(), "10", y.to_string()))
            .collect();
        TestCase::new(index, k, samples).into()
    }

    fn batch() -> Vec<CaseRecord> {
        vec![
            case(1, 3, &[(1, 4), (2, 7), (3, 12)]),
            case(2, 4, &[(1, 4), (2, 7)]),
            CaseRecord::Malformed {
                index: 3,
                error: RecordError::MissingKeys,
            },
            case(4, 1, &[(10, 123)]),
        ]
    }

    #[test]
    fn failures_do_not_abort_the_batch() {
        let reports = run_batch(&batch(), &RunnerConfig::default());

        assert_eq!(reports.len(), 4);
        assert_eq!(reports[0].secret(), Some(&BigInt::from(3)));
        assert_eq!(
            reports[1].error(),
            Some(&CaseError::InsufficientSamples { need: 4, got: 2 })
        );
        assert!(matches!(
            reports[2].error(),
            Some(CaseError::MalformedRecord(RecordError::MissingKeys))
        ));
        assert_eq!(reports[3].secret(), Some(&BigInt::from(123)));
    }

    #[test]
    fn parallel_and_sequential_runs_agree() {
        let records = batch();
        let parallel = run_batch(&records, &RunnerConfig::default());
        let sequential =
            run_batch(&records, &RunnerConfig::default().with_parallel(false));
        assert_eq!(parallel, sequential);
    }

    #[test]
    fn reports_follow_case_index_not_input_position() {
        let mut records = batch();
        records.reverse();
        let indices: Vec<usize> = run_batch(&records, &RunnerConfig::default())
            .iter()
            .map(|report| report.index)
            .collect();
        assert_eq!(indices, vec![1, 2, 3, 4]);
    }

    #[test]
    fn summary_counts_outcomes() {
        let reports = run_batch(&batch(), &RunnerConfig::default());
        let summary = BatchSummary::from_reports(&reports);
        assert_eq!(summary, BatchSummary { solved: 2, failed: 2 });
        assert_eq!(summary.total(), 4);
    }

    #[test]
    fn empty_batch_yields_no_reports() {
        assert!(run_batch(&[], &RunnerConfig::default()).is_empty());
    }
}
