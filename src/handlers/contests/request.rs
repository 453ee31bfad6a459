//! Contest request DTOs

use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::Validate;

use crate::{
    constants::{
        MAX_CONTEST_DESCRIPTION_LENGTH, MAX_CONTEST_SUMMARY_LENGTH, MAX_CONTEST_TITLE_LENGTH,
    },
    models::{ContestType, VisibilityKind},
};

/// Create contest request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateContestRequest {
    /// Owning group; the caller must manage it
    pub group_id: i64,

    #[validate(length(min = 1, max = MAX_CONTEST_TITLE_LENGTH))]
    pub title: String,

    #[serde(default)]
    #[validate(length(max = MAX_CONTEST_DESCRIPTION_LENGTH))]
    pub description: String,

    #[serde(default)]
    #[validate(length(max = MAX_CONTEST_SUMMARY_LENGTH))]
    pub description_summary: String,

    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,

    #[serde(rename = "type")]
    pub contest_type: ContestType,

    /// `public` opens the contest to every account
    #[serde(default = "default_visibility")]
    pub visibility: VisibilityKind,

    #[serde(default = "default_rank_visible")]
    pub is_rank_visible: bool,
}

fn default_visibility() -> VisibilityKind {
    VisibilityKind::Restricted
}

fn default_rank_visible() -> bool {
    true
}

/// Update contest request
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateContestRequest {
    #[validate(length(min = 1, max = MAX_CONTEST_TITLE_LENGTH))]
    pub title: Option<String>,

    #[validate(length(max = MAX_CONTEST_DESCRIPTION_LENGTH))]
    pub description: Option<String>,

    #[validate(length(max = MAX_CONTEST_SUMMARY_LENGTH))]
    pub description_summary: Option<String>,

    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,

    #[serde(rename = "type")]
    pub contest_type: Option<ContestType>,

    pub visibility: Option<VisibilityKind>,
    pub is_rank_visible: Option<bool>,
}
