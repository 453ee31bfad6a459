//! Contest admission
//!
//! Decides whether a user may join a contest and, when they may, records the
//! participation together with the ranking accumulator for the contest type.
//!
//! Checks run in a fixed order and stop at the first failure:
//!
//! 1. the contest exists
//! 2. the user has not joined it yet
//! 3. the user may see it (restricted contests need a registered membership
//!    in the owning group)
//! 4. the contest is running
//!
//! Membership and timing rejections are reported as the same
//! [`AdmissionError::AccessDenied`] so callers cannot tell them apart.

mod evaluator;
mod ranking;
mod store;

pub use evaluator::AdmissionEvaluator;
pub use ranking::{NewAcmRanking, NewRanking};
pub use store::{ContestStore, PgContestStore};

#[cfg(test)]
pub use store::MockContestStore;

use crate::{error::AppError, models::ContestType};

/// Admission failures
#[derive(Debug, thiserror::Error)]
pub enum AdmissionError {
    #[error("{0} does not exist")]
    NotFound(String),

    #[error("User {user_id} is already participated in Contest {contest_id}")]
    AlreadyRegistered { user_id: i64, contest_id: i64 },

    #[error("Contest {contest_id} is not allowed to User {user_id}")]
    AccessDenied { user_id: i64, contest_id: i64 },

    #[error("Contest type {0} has no ranking record yet")]
    Unsupported(ContestType),

    #[error(transparent)]
    Store(#[from] AppError),
}
