//! JSON input collaborator.
//!
//! Accepts either an array of test-case objects or a single object shaped as
//!
//! ```json
//! {
//!     "keys": { "n": 4, "k": 3 },
//!     "1": { "base": "10", "value": "4" },
//!     "2": { "base": "2", "value": "111" }
//! }
//! ```
//!
//! Sample order follows the document (`serde_json` is built with
//! `preserve_order`).

use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::case::{CaseRecord, TestCase};
use crate::error::{InputError, RecordError};
use crate::sample::RawSample;

const KEYS_FIELD: &str = "keys";

/// A JSON scalar that may be written either quoted or bare.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
enum Scalar {
    Int(i64),
    UInt(u64),
    Text(String),
    Other(Value),
}

impl Scalar {
    fn as_text(&self) -> Option<String> {
        match self {
            Scalar::Int(v) => Some(v.to_string()),
            Scalar::UInt(v) => Some(v.to_string()),
            Scalar::Text(s) => Some(s.clone()),
            Scalar::Other(_) => None,
        }
    }

    fn as_i64(&self) -> Option<i64> {
        match self {
            Scalar::Int(v) => Some(*v),
            Scalar::UInt(v) => i64::try_from(*v).ok(),
            Scalar::Text(s) => s.trim().parse().ok(),
            Scalar::Other(_) => None,
        }
    }

    fn describe(&self) -> String {
        match self {
            Scalar::Int(v) => v.to_string(),
            Scalar::UInt(v) => v.to_string(),
            Scalar::Text(s) => format!("{s:?}"),
            Scalar::Other(v) => v.to_string(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct Keys {
    n: Option<Scalar>,
    k: Option<Scalar>,
}

#[derive(Debug, Default, Deserialize)]
struct Share {
    base: Option<Scalar>,
    value: Option<Scalar>,
}

/// Read and parse the test cases stored at `path`.
pub fn load_cases(path: &Path) -> Result<Vec<CaseRecord>, InputError> {
    let text = fs::read_to_string(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_cases(&text)
}

/// Parse test cases from a JSON document.
///
/// Only document-level problems are errors; a malformed case becomes a
/// [`CaseRecord::Malformed`] so the rest of the batch still runs.
pub fn parse_cases(text: &str) -> Result<Vec<CaseRecord>, InputError> {
    let document: Value = serde_json::from_str(text)?;
    let records = match document {
        Value::Array(items) => items,
        object @ Value::Object(_) => vec![object],
        _ => return Err(InputError::UnexpectedShape),
    };
    if records.is_empty() {
        return Err(InputError::NoCases);
    }

    Ok(records
        .iter()
        .enumerate()
        .map(|(offset, value)| {
            let index = offset + 1;
            match parse_record(index, value) {
                Ok(case) => CaseRecord::Case(case),
                Err(error) => CaseRecord::Malformed { index, error },
            }
        })
        .collect())
}

fn parse_record(index: usize, value: &Value) -> Result<TestCase, RecordError> {
    let object = value.as_object().ok_or(RecordError::NotAnObject)?;
    let keys = object
        .get(KEYS_FIELD)
        .filter(|keys| keys.is_object())
        .ok_or(RecordError::MissingKeys)?;
    let keys = Keys::deserialize(keys).unwrap_or_default();

    let k = integer_field("k", keys.k.as_ref())?
        .ok_or(RecordError::MissingField("k"))?;
    let n = integer_field("n", keys.n.as_ref())?;

    Ok(TestCase::new(index, k, raw_samples(object)).with_n(n))
}

fn integer_field(
    field: &'static str,
    scalar: Option<&Scalar>,
) -> Result<Option<i64>, RecordError> {
    scalar
        .map(|s| {
            s.as_i64().ok_or_else(|| RecordError::NotAnInteger {
                field,
                value: s.describe(),
            })
        })
        .transpose()
}

fn raw_samples(object: &Map<String, Value>) -> Vec<RawSample> {
    object
        .iter()
        .filter(|(key, _)| key.as_str() != KEYS_FIELD)
        .map(|(key, value)| {
            let share = Share::deserialize(value).unwrap_or_default();
            RawSample {
                key: key.clone(),
                base: share.base.as_ref().and_then(Scalar::as_text),
                value: share.value.as_ref().and_then(Scalar::as_text),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_case(records: Vec<CaseRecord>) -> TestCase {
        match records.into_iter().next() {
            Some(CaseRecord::Case(case)) => case,
            other => panic!("expected a well-formed case, got {other:?}"),
        }
    }

    #[test]
    fn parses_array_of_cases_in_order() {
        let text = r#"[
            {"keys": {"n": 2, "k": 2}, "1": {"base": "10", "value": "4"}, "2": {"base": "10", "value": "7"}},
            {"keys": {"n": 1, "k": 1}, "5": {"base": "16", "value": "ff"}}
        ]"#;
        let records = parse_cases(text).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].index(), 1);
        assert_eq!(records[1].index(), 2);
    }

    #[test]
    fn single_object_is_one_case() {
        let text = r#"{"keys": {"n": 1, "k": 1}, "3": {"base": "2", "value": "101"}}"#;
        let case = single_case(parse_cases(text).unwrap());

        assert_eq!(case.index(), 1);
        assert_eq!(case.k(), 1);
        assert_eq!(case.n(), Some(1));
        assert_eq!(case.samples(), &[RawSample::new("3", "2", "101")]);
    }

    #[test]
    fn sample_order_follows_the_document() {
        let text = r#"{
            "keys": {"k": 3},
            "6": {"base": "4", "value": "213"},
            "1": {"base": "10", "value": "4"},
            "3": {"base": "10", "value": "12"}
        }"#;
        let case = single_case(parse_cases(text).unwrap());
        let keys: Vec<&str> =
            case.samples().iter().map(|s| s.key.as_str()).collect();

        assert_eq!(keys, vec!["6", "1", "3"]);
    }

    #[test]
    fn numeric_fields_may_be_bare_or_quoted() {
        let text = r#"{"keys": {"n": "1", "k": "1"}, "2": {"base": 10, "value": 42}}"#;
        let case = single_case(parse_cases(text).unwrap());

        assert_eq!(case.k(), 1);
        assert_eq!(case.samples(), &[RawSample::new("2", "10", "42")]);
    }

    #[test]
    fn missing_share_fields_are_kept_for_the_runner() {
        let text = r#"{"keys": {"k": 1}, "1": {"value": "4"}, "2": 17}"#;
        let case = single_case(parse_cases(text).unwrap());

        assert_eq!(case.samples()[0].base, None);
        assert_eq!(case.samples()[0].value.as_deref(), Some("4"));
        assert_eq!(case.samples()[1].base, None);
        assert_eq!(case.samples()[1].value, None);
    }

    #[test]
    fn malformed_records_do_not_abort_parsing() {
        let text = r#"[
            7,
            {"1": {"base": "10", "value": "4"}},
            {"keys": {"n": 2}},
            {"keys": {"k": "three"}},
            {"keys": {"k": 1}, "1": {"base": "10", "value": "4"}}
        ]"#;
        let records = parse_cases(text).unwrap();

        let errors: Vec<Option<RecordError>> = records
            .iter()
            .map(|record| match record {
                CaseRecord::Malformed { error, .. } => Some(error.clone()),
                CaseRecord::Case(_) => None,
            })
            .collect();
        assert_eq!(
            errors,
            vec![
                Some(RecordError::NotAnObject),
                Some(RecordError::MissingKeys),
                Some(RecordError::MissingField("k")),
                Some(RecordError::NotAnInteger {
                    field: "k",
                    value: "\"three\"".to_string(),
                }),
                None,
            ]
        );
        assert_eq!(records[4].index(), 5);
    }

    #[test]
    fn empty_array_has_no_cases() {
        assert!(matches!(parse_cases("[]"), Err(InputError::NoCases)));
    }

    #[test]
    fn scalars_at_top_level_are_rejected() {
        assert!(matches!(
            parse_cases("42"),
            Err(InputError::UnexpectedShape)
        ));
    }

    #[test]
    fn invalid_json_is_reported() {
        assert!(matches!(
            parse_cases("{\"keys\": "),
            Err(InputError::Json(_))
        ));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = load_cases(Path::new("/definitely/not/here.json"))
            .expect_err("missing file");
        assert!(matches!(err, InputError::Read { .. }));
    }
}
