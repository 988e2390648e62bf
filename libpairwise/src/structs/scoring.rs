use std::path::Path;

use anyhow::Context;
use serde::Serialize;
use thiserror::Error;

use crate::util::clamp_score;

/// The two alignment regimes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AlignmentMode {
    /// End-to-end alignment with affine gap costs
    Global,
    /// Best-substring alignment with a linear gap cost
    Local,
}

impl AlignmentMode {
    /// The number of leading scoring values this mode reads:
    /// `[match, mismatch, gap-extend, gap-open]`
    pub fn required_arity(&self) -> usize {
        match self {
            AlignmentMode::Global => 4,
            AlignmentMode::Local => 3,
        }
    }
}

#[derive(Error, Debug)]
#[error("{mode} alignment requires {required} scoring values, found {found}")]
pub struct ScoringArityError {
    pub mode: AlignmentMode,
    pub required: usize,
    pub found: usize,
}

#[derive(Error, Debug)]
#[error("failed to parse scoring value: \"{token}\"")]
pub struct ScoringParseError {
    token: String,
}

/// The integer scoring scheme shared by both aligners.
///
/// No sign is assumed for any field: the aligners only add and compare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoringModel {
    pub match_score: i32,
    pub mismatch_score: i32,
    /// Charged for every gap symbol
    pub gap_extend: i32,
    /// Charged once per gap run, global mode only
    pub gap_open: i32,
}

/// Parse a whitespace-separated line of integers.
pub fn parse_scoring_values(line: &str) -> Result<Vec<i32>, ScoringParseError> {
    line.split_whitespace()
        .map(|token| {
            token.parse::<i32>().map_err(|_| ScoringParseError {
                token: token.to_string(),
            })
        })
        .collect()
}

impl ScoringModel {
    pub fn new(match_score: i32, mismatch_score: i32, gap_extend: i32, gap_open: i32) -> Self {
        Self {
            match_score,
            mismatch_score,
            gap_extend,
            gap_open,
        }
    }

    /// Build a model from values ordered `[match, mismatch, gap-extend, gap-open]`.
    ///
    /// Local mode accepts three values and sets the (unused) gap-open cost to 0.
    /// Values past the fourth are ignored.
    pub fn from_values(values: &[i32], mode: AlignmentMode) -> Result<Self, ScoringArityError> {
        if values.len() < mode.required_arity() {
            return Err(ScoringArityError {
                mode,
                required: mode.required_arity(),
                found: values.len(),
            });
        }

        Ok(Self {
            match_score: values[0],
            mismatch_score: values[1],
            gap_extend: values[2],
            gap_open: values.get(3).copied().unwrap_or(0),
        })
    }

    /// Parse scoring text: the first line is a header and is skipped,
    /// the second line holds the values.
    pub fn from_text(text: &str, mode: AlignmentMode) -> anyhow::Result<Self> {
        let value_line = text.lines().nth(1).unwrap_or("");
        let values = parse_scoring_values(value_line)?;
        Ok(Self::from_values(&values, mode)?)
    }

    pub fn from_path<P: AsRef<Path>>(path: P, mode: AlignmentMode) -> anyhow::Result<Self> {
        let path_string = path.as_ref().to_string_lossy().to_string();

        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read scoring file: {path_string}"))?;

        Self::from_text(&text, mode)
            .with_context(|| format!("failed to parse scoring file: {path_string}"))
    }

    /// The score for aligning two residues against each other.
    #[inline]
    pub fn substitution(&self, residue_1: u8, residue_2: u8) -> i32 {
        if residue_1 == residue_2 {
            self.match_score
        } else {
            self.mismatch_score
        }
    }

    /// The cost of opening a gap and spending the first symbol of it.
    #[inline]
    pub fn gap_first(&self) -> i32 {
        self.gap_open.saturating_add(self.gap_extend)
    }

    /// The affine cost of a run of `length` gap symbols: `gap_open + length * gap_extend`.
    pub fn affine_gap_run(&self, length: usize) -> i32 {
        clamp_score(self.gap_open as i64 + (length as i64).saturating_mul(self.gap_extend as i64))
    }
}
