use std::io;
use std::path::PathBuf;

use math::error::{DecodeError, InterpolationError};
use thiserror::Error;

/// Result type specialized for per-case operations.
pub type CaseResult<T> = std::result::Result<T, CaseError>;

/// Result type for the top-level solver entry points.
pub type Result<T> = std::result::Result<T, Error>;

/// Reasons a single sample is dropped. These never fail a whole case.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SampleError {
    #[error("key {0:?} is not an integer x-coordinate")]
    MalformedKey(String),
    #[error("missing base")]
    MissingBase,
    #[error("missing value")]
    MissingValue,
    #[error("base {0:?} is not an integer")]
    MalformedBase(String),
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// Errors that end a single test case in the `Failed` state.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CaseError {
    #[error("minimum point count k = {0} must be at least 1")]
    InvalidDegree(i64),
    #[error("insufficient samples: need {need}, got {got}")]
    InsufficientSamples { need: usize, got: usize },
    #[error(transparent)]
    Interpolation(#[from] InterpolationError),
    #[error("malformed record: {0}")]
    MalformedRecord(#[from] RecordError),
}

/// Structural problems with one input record.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("test case is not a JSON object")]
    NotAnObject,
    #[error("`keys` object is missing")]
    MissingKeys,
    #[error("`keys.{0}` is missing")]
    MissingField(&'static str),
    #[error("`keys.{field}` = {value} is not an integer")]
    NotAnInteger { field: &'static str, value: String },
}

/// Failures that leave the batch with no usable input.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("input is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("expected an array of test cases or a single test case object")]
    UnexpectedShape,
    #[error("input contains no test cases")]
    NoCases,
}

/// Top-level error type for the solver binary.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Case(#[from] CaseError),
    #[error("failed to write report: {0}")]
    Output(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insufficient_samples_names_both_counts() {
        let err = CaseError::InsufficientSamples { need: 4, got: 2 };
        assert_eq!(err.to_string(), "insufficient samples: need 4, got 2");
    }

    #[test]
    fn decode_errors_convert_into_sample_errors() {
        let err: SampleError = DecodeError::InvalidBase(99).into();
        assert!(matches!(
            err,
            SampleError::Decode(DecodeError::InvalidBase(99))
        ));
    }

    #[test]
    fn interpolation_errors_are_transparent() {
        let err: CaseError = InterpolationError::DuplicateX(3).into();
        assert_eq!(err.to_string(), "duplicate x-coordinate 3");
    }

    #[test]
    fn record_errors_are_prefixed() {
        let err: CaseError = RecordError::MissingField("k").into();
        assert_eq!(err.to_string(), "malformed record: `keys.k` is missing");
    }

    #[test]
    fn read_error_includes_path() {
        let err = InputError::Read {
            path: PathBuf::from("/no/such/file.json"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.to_string().contains("/no/such/file.json"));
    }
}
