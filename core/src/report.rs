//! Output collaborators: render [`CaseReport`]s as text blocks or JSON.

use std::io::{self, Write};

use serde::Serialize;

use crate::case::{CaseOutcome, CaseReport};

const RULE: &str = "------------------------------------";

/// Sink for finished case reports.
pub trait Reporter {
    fn report(&mut self, report: &CaseReport) -> io::Result<()>;

    /// Flush anything buffered once every case has been reported.
    fn finish(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Feed `reports` to `reporter` in order, then finish it.
pub fn emit<R: Reporter + ?Sized>(
    reporter: &mut R,
    reports: &[CaseReport],
) -> io::Result<()> {
    for report in reports {
        reporter.report(report)?;
    }
    reporter.finish()
}

/// Human-readable blocks on `out`; skipped samples and failures on `err`.
pub struct TextReporter<W: Write, E: Write> {
    out: W,
    err: E,
}

impl<W: Write, E: Write> TextReporter<W, E> {
    pub fn new(out: W, err: E) -> Self {
        Self { out, err }
    }

    pub fn into_inner(self) -> (W, E) {
        (self.out, self.err)
    }
}

impl<W: Write, E: Write> Reporter for TextReporter<W, E> {
    fn report(&mut self, report: &CaseReport) -> io::Result<()> {
        writeln!(self.out, "--- Processing Test Case {} ---", report.index)?;
        for sample in &report.decoded {
            writeln!(self.out, "Decoded Root: {sample}")?;
        }
        for skipped in &report.skipped {
            writeln!(
                self.err,
                "Skipping malformed root {:?} in test case {}: {}",
                skipped.key, report.index, skipped.error
            )?;
        }

        match &report.outcome {
            CaseOutcome::Solved {
                secret,
                cross_check,
            } => {
                writeln!(self.out, "The calculated secret (c) is: {secret}")?;
                if let Some(other) = cross_check.as_ref().filter(|o| *o != secret) {
                    writeln!(self.out, "Cross-check disagrees: {other}")?;
                }
            }
            CaseOutcome::Failed { stage, error } => {
                writeln!(
                    self.err,
                    "Test case {} failed while {stage}: {error}",
                    report.index
                )?;
            }
        }
        writeln!(self.out, "{RULE}")
    }

    fn finish(&mut self) -> io::Result<()> {
        self.out.flush()?;
        self.err.flush()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodedEntry {
    pub x: i64,
    pub y: String,
    pub base: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedEntry {
    pub key: String,
    pub reason: String,
}

/// Serializable view of one [`CaseReport`]. Big integers are rendered as
/// decimal strings so that no JSON consumer truncates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseSummary {
    pub case: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub k: Option<i64>,
    pub stage: String,
    pub decoded: Vec<DecodedEntry>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<SkippedEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cross_check: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<&CaseReport> for CaseSummary {
    fn from(report: &CaseReport) -> Self {
        let (stage, secret, cross_check, error) = match &report.outcome {
            CaseOutcome::Solved {
                secret,
                cross_check,
            } => (
                report.final_stage(),
                Some(secret.to_string()),
                cross_check.as_ref().map(ToString::to_string),
                None,
            ),
            CaseOutcome::Failed { stage, error } => {
                (*stage, None, None, Some(error.to_string()))
            }
        };

        Self {
            case: report.index,
            k: report.k,
            stage: stage.to_string(),
            decoded: report
                .decoded
                .iter()
                .map(|s| DecodedEntry {
                    x: s.x(),
                    y: s.y().to_string(),
                    base: s.radix().get(),
                })
                .collect(),
            skipped: report
                .skipped
                .iter()
                .map(|s| SkippedEntry {
                    key: s.key.clone(),
                    reason: s.error.to_string(),
                })
                .collect(),
            secret,
            cross_check,
            error,
        }
    }
}

/// Collects summaries and writes them as one pretty-printed JSON array.
pub struct JsonReporter<W: Write> {
    out: W,
    entries: Vec<CaseSummary>,
}

impl<W: Write> JsonReporter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            entries: Vec::new(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for JsonReporter<W> {
    fn report(&mut self, report: &CaseReport) -> io::Result<()> {
        self.entries.push(CaseSummary::from(report));
        Ok(())
    }

    fn finish(&mut self) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut self.out, &self.entries)?;
        writeln!(self.out)?;
        self.out.flush()
    }
}
