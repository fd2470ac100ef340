use std::fmt;

use log::warn;
use math::{point::Point, radix::Radix, traits::PointSource};
use num_bigint::BigInt;

use crate::error::{CaseError, CaseResult, SampleError};
use crate::params::validate_k;

/// One `(x, base, value)` triple as handed over by the input collaborator.
///
/// Fields stay textual until [`RawSample::decode`] so that a bad entry can be
/// skipped without losing the rest of the case.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawSample {
    pub key: String,
    pub base: Option<String>,
    pub value: Option<String>,
}

impl RawSample {
    pub fn new(
        key: impl Into<String>,
        base: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            base: Some(base.into()),
            value: Some(value.into()),
        }
    }

    pub fn decode(&self) -> Result<Sample, SampleError> {
        let x = self
            .key
            .parse::<i64>()
            .map_err(|_| SampleError::MalformedKey(self.key.clone()))?;
        let base_text = self.base.as_deref().ok_or(SampleError::MissingBase)?;
        let value = self.value.as_deref().ok_or(SampleError::MissingValue)?;

        let base = base_text
            .trim()
            .parse::<u32>()
            .map_err(|_| SampleError::MalformedBase(base_text.to_string()))?;
        let radix = Radix::new(base)?;
        let y = radix.decode(value)?;

        Ok(Sample { x, y, radix })
    }
}

/// A decoded sample. Immutable once built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sample {
    x: i64,
    y: BigInt,
    radix: Radix,
}

impl Sample {
    pub fn new(x: i64, y: impl Into<BigInt>, radix: Radix) -> Self {
        Self {
            x,
            y: y.into(),
            radix,
        }
    }

    pub fn x(&self) -> i64 {
        self.x
    }

    pub fn y(&self) -> &BigInt {
        &self.y
    }

    /// Radix the value was encoded in.
    pub fn radix(&self) -> Radix {
        self.radix
    }
}

impl PointSource for Sample {
    fn x(&self) -> i64 {
        self.x
    }

    fn y(&self) -> &BigInt {
        &self.y
    }
}

impl From<Sample> for Point {
    fn from(sample: Sample) -> Self {
        Point::new(sample.x, sample.y)
    }
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x = {}, y = {}", self.x, self.y)
    }
}

/// A sample that was dropped during decoding, with the reason.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkippedSample {
    pub key: String,
    pub error: SampleError,
}

/// Outcome of decoding every candidate sample of a case.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DecodedSamples {
    pub samples: Vec<Sample>,
    pub skipped: Vec<SkippedSample>,
}

/// Decode all candidates in source order, dropping the malformed ones.
pub fn decode_all(raw: &[RawSample]) -> DecodedSamples {
    let mut decoded = DecodedSamples::default();
    for candidate in raw {
        match candidate.decode() {
            Ok(sample) => decoded.samples.push(sample),
            Err(error) => {
                warn!("skipping malformed sample {:?}: {error}", candidate.key);
                decoded.skipped.push(SkippedSample {
                    key: candidate.key.clone(),
                    error,
                });
            }
        }
    }
    decoded
}

/// Exactly `k` samples selected for interpolation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SampleSet {
    k: usize,
    samples: Vec<Sample>,
}

impl SampleSet {
    /// Keep the first `k` samples in source order and drop the rest.
    pub fn select(k: i64, candidates: &[Sample]) -> CaseResult<Self> {
        let active = Self::select_active(k, candidates)?;
        Ok(Self {
            k: active.len(),
            samples: active.to_vec(),
        })
    }

    /// Decode `raw` and select from the survivors.
    pub fn from_raw(k: i64, raw: &[RawSample]) -> CaseResult<Self> {
        let decoded = decode_all(raw);
        Self::select(k, &decoded.samples)
    }

    fn select_active(k: i64, candidates: &[Sample]) -> CaseResult<&[Sample]> {
        if !validate_k(k) {
            return Err(CaseError::InvalidDegree(k));
        }
        // k beyond usize cannot be satisfied by any slice
        let need = usize::try_from(k).unwrap_or(usize::MAX);
        if candidates.len() < need {
            return Err(CaseError::InsufficientSamples {
                need,
                got: candidates.len(),
            });
        }
        Ok(&candidates[..need])
    }

    pub fn k(&self) -> usize {
        self.k
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn into_points(self) -> Vec<Point> {
        self.samples.into_iter().map(Point::from).collect()
    }
}
