use crate::config::LabelConfig;
use serde::{Deserialize, Serialize};

/// Typed reading of a label returned by the endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    Positive,
    Negative,
    /// Empty or unrecognised text.
    Unknown,
}

impl Verdict {
    pub fn is_positive(self) -> bool {
        matches!(self, Verdict::Positive)
    }
}

/// A response body together with its normalized label and verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prediction {
    pub raw: String,
    pub label: String,
    pub verdict: Verdict,
}

/// Strip surrounding whitespace and quotes from a response body.
///
/// A body that is a JSON string literal is decoded first, so escapes inside
/// it survive. Applying this twice gives the same result as applying it once.
pub fn normalize_label(raw: &str) -> String {
    let trimmed = raw.trim();
    let decoded = match serde_json::from_str::<String>(trimmed) {
        Ok(s) => s,
        Err(_) => trimmed.to_string(),
    };
    decoded
        .trim_matches(|c: char| c == '"' || c.is_whitespace())
        .to_string()
}

/// Maps normalized labels onto verdicts. Matching is exact and case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelPolicy {
    positive: String,
    negative: String,
}

impl LabelPolicy {
    pub fn new(positive: impl Into<String>, negative: impl Into<String>) -> Self {
        Self {
            positive: positive.into(),
            negative: negative.into(),
        }
    }

    pub fn positive(&self) -> &str {
        &self.positive
    }

    pub fn verdict_for(&self, label: &str) -> Verdict {
        if label == self.positive {
            Verdict::Positive
        } else if label == self.negative {
            Verdict::Negative
        } else {
            Verdict::Unknown
        }
    }

    pub fn interpret(&self, raw: impl Into<String>) -> Prediction {
        let raw = raw.into();
        let label = normalize_label(&raw);
        let verdict = self.verdict_for(&label);
        Prediction {
            raw,
            label,
            verdict,
        }
    }
}

impl Default for LabelPolicy {
    fn default() -> Self {
        Self::from(&LabelConfig::default())
    }
}

impl From<&LabelConfig> for LabelPolicy {
    fn from(cfg: &LabelConfig) -> Self {
        Self::new(cfg.positive.clone(), cfg.negative.clone())
    }
}
