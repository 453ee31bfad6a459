//! Contest response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::{Contest, ContestStatus};

/// Contest with its status at response time
#[derive(Debug, Serialize)]
pub struct ContestResponse {
    #[serde(flatten)]
    pub contest: Contest,
    pub status: ContestStatus,
}

impl ContestResponse {
    pub fn at(contest: Contest, now: DateTime<Utc>) -> Self {
        let status = contest.status_at(now);
        Self { contest, status }
    }
}

/// Contest list response
#[derive(Debug, Serialize)]
pub struct ContestsListResponse {
    pub contests: Vec<ContestResponse>,
}
