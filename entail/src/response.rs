use crate::analysis::TruthSeed;
use serde::Serialize;
use std::fmt;

/// How a statement relates to a knowledge base
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Verdict {
    /// The base has no model, so it vacuously entails the statement and its negation
    #[serde(rename = "both true and false")]
    Contradictory,
    /// Every model of the base satisfies the statement
    #[serde(rename = "definitely true")]
    EntailedTrue,
    /// Every model of the base falsifies the statement
    #[serde(rename = "definitely false")]
    EntailedFalse,
    /// Some models satisfy the statement and some falsify it
    #[serde(rename = "possibly true, possibly false")]
    Undetermined,
}

impl Verdict {
    /// Classify from model counts
    pub fn from_counts(counts: &ModelCounts) -> Self {
        let all_true = counts.query_true == counts.models;
        let all_false = counts.query_false == counts.models;
        match (all_true, all_false) {
            (true, true) => Verdict::Contradictory,
            (true, false) => Verdict::EntailedTrue,
            (false, true) => Verdict::EntailedFalse,
            (false, false) => Verdict::Undetermined,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Contradictory => "both true and false",
            Verdict::EntailedTrue => "definitely true",
            Verdict::EntailedFalse => "definitely false",
            Verdict::Undetermined => "possibly true, possibly false",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Model counts gathered over every enumerated assignment
///
/// `models` counts assignments satisfying the base, `query_true` those also
/// satisfying the statement and `query_false` those satisfying its negation.
/// `query_true + query_false == models` always holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ModelCounts {
    pub assignments: u64,
    pub models: u64,
    pub query_true: u64,
    pub query_false: u64,
}

/// Outcome of checking one statement against a knowledge base
#[derive(Debug, Clone, Serialize)]
pub struct Entailment {
    pub verdict: Verdict,
    #[serde(flatten)]
    pub counts: ModelCounts,
    pub free_symbols: Vec<String>,
    pub seeded: TruthSeed,
}
