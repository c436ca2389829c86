//! Aggregation kinds a metrics chart can be reduced by, and the selector options for them.

use crate::error::AggregationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a bucket of metric samples is reduced to a single chart point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AggregationKind {
    #[default]
    Avg,
    Max,
}

impl AggregationKind {
    /// Every kind, in display order.
    pub const ALL: [AggregationKind; 2] = [AggregationKind::Avg, AggregationKind::Max];

    /// Wire name used in query strings (`avg`, `max`).
    pub fn as_str(&self) -> &'static str {
        match self {
            AggregationKind::Avg => "avg",
            AggregationKind::Max => "max",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            AggregationKind::Avg => "Average",
            AggregationKind::Max => "Max",
        }
    }

    /// Lenient parse of a raw query value.
    ///
    /// Only `max` (after trimming, any case) selects `Max`; anything else,
    /// including an empty string, falls back to `Avg`.
    pub fn normalize(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "max" => AggregationKind::Max,
            _ => AggregationKind::Avg,
        }
    }

    /// Reduce `samples` with this kind. Returns `None` for an empty slice.
    ///
    /// `Max` skips NaN samples (and returns `None` if nothing else is left);
    /// `Avg` lets NaN propagate.
    pub fn apply(&self, samples: &[f64]) -> Option<f64> {
        if samples.is_empty() {
            return None;
        }
        match self {
            AggregationKind::Avg => {
                let sum: f64 = samples.iter().sum();
                Some(sum / samples.len() as f64)
            }
            AggregationKind::Max => samples
                .iter()
                .copied()
                .filter(|v| !v.is_nan())
                .fold(None, |acc: Option<f64>, v| Some(acc.map_or(v, |a| a.max(v)))),
        }
    }
}

impl fmt::Display for AggregationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AggregationKind {
    type Err = AggregationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "avg" => Ok(AggregationKind::Avg),
            "max" => Ok(AggregationKind::Max),
            _ => Err(AggregationError::UnknownKind(s.to_string())),
        }
    }
}

/// One selectable entry of an aggregation selector.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregationOption {
    pub label: String,
    pub value: AggregationKind,
}

impl AggregationOption {
    pub fn new(label: impl Into<String>, value: AggregationKind) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

impl From<AggregationKind> for AggregationOption {
    fn from(kind: AggregationKind) -> Self {
        AggregationOption::new(kind.label(), kind)
    }
}

/// The standard option list: Average, then Max.
pub fn default_options() -> Vec<AggregationOption> {
    AggregationKind::ALL.iter().copied().map(AggregationOption::from).collect()
}
