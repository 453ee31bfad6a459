//! Ranking accumulators created on admission

use serde_json::{json, Value};

use crate::models::ContestType;

use super::AdmissionError;

/// Ranking row to insert alongside a new participation
#[derive(Debug, Clone, PartialEq)]
pub enum NewRanking {
    Acm(NewAcmRanking),
}

/// Initial counters of an ACM ranking row
#[derive(Debug, Clone, PartialEq)]
pub struct NewAcmRanking {
    pub accepted_problem_num: i32,
    pub total_penalty: i32,
    pub submission_info: Value,
}

impl Default for NewAcmRanking {
    fn default() -> Self {
        Self {
            accepted_problem_num: 0,
            total_penalty: 0,
            submission_info: json!({}),
        }
    }
}

impl NewRanking {
    /// Zeroed accumulator for a freshly admitted participant.
    ///
    /// Types without a ranking table are rejected before anything is written.
    pub fn initial(contest_type: ContestType) -> Result<Self, AdmissionError> {
        match contest_type {
            ContestType::Acm => Ok(Self::Acm(NewAcmRanking::default())),
            ContestType::TotalScore => Err(AdmissionError::Unsupported(contest_type)),
        }
    }
}
