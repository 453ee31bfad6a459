//! Contest model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Contest database model
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Contest {
    pub id: i64,
    pub group_id: i64,
    pub created_by_id: Option<i64>,
    pub title: String,
    pub description: String,
    pub description_summary: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub contest_type: ContestType,
    pub visibility: VisibilityKind,
    pub is_rank_visible: bool,
    pub create_time: DateTime<Utc>,
    pub update_time: DateTime<Utc>,
}

impl Contest {
    /// Get current status of the contest
    pub fn status_at(&self, now: DateTime<Utc>) -> ContestStatus {
        ContestStatus::at(self.start_time, self.end_time, now)
    }
}

/// Scoring type of a contest.
///
/// Every variant must be handled where ranking accumulators are built, so
/// adding a type is a compile error until its ranking is decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "contest_type", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContestType {
    Acm,
    TotalScore,
}

impl std::fmt::Display for ContestType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Acm => write!(f, "ACM"),
            Self::TotalScore => write!(f, "TOTAL_SCORE"),
        }
    }
}

/// Persisted visibility column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "contest_visibility", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum VisibilityKind {
    Public,
    Restricted,
}

impl VisibilityKind {
    pub fn resolve(self, group_id: i64) -> Visibility {
        match self {
            Self::Public => Visibility::Public,
            Self::Restricted => Visibility::Restricted(group_id),
        }
    }
}

/// Who may be admitted to a contest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "group_id", rename_all = "lowercase")]
pub enum Visibility {
    /// Anyone with an account
    Public,
    /// Registered members of the given group only
    Restricted(i64),
}

/// Contest status enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContestStatus {
    Upcoming,
    Ongoing,
    Ended,
}

impl ContestStatus {
    /// The window is half-open: `start_time` is inside, `end_time` is not.
    pub fn at(start_time: DateTime<Utc>, end_time: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        if now < start_time {
            Self::Upcoming
        } else if now < end_time {
            Self::Ongoing
        } else {
            Self::Ended
        }
    }
}

impl std::fmt::Display for ContestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Upcoming => write!(f, "upcoming"),
            Self::Ongoing => write!(f, "ongoing"),
            Self::Ended => write!(f, "ended"),
        }
    }
}

/// The slice of a contest that admission needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContestSchedule {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub contest_type: ContestType,
    pub visibility: Visibility,
}

impl ContestSchedule {
    pub fn is_ongoing_at(&self, now: DateTime<Utc>) -> bool {
        ContestStatus::at(self.start_time, self.end_time, now) == ContestStatus::Ongoing
    }
}

/// Participation of a user in a contest
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ContestRecord {
    pub id: i64,
    pub contest_id: i64,
    pub user_id: i64,
    pub rank: Option<i32>,
    pub create_time: DateTime<Utc>,
    pub update_time: DateTime<Utc>,
}

/// ACM-style ranking accumulator
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ContestRankAcm {
    pub id: i64,
    pub contest_id: i64,
    pub user_id: i64,
    pub accepted_problem_num: i32,
    pub total_penalty: i32,
    pub submission_info: serde_json::Value,
    pub create_time: DateTime<Utc>,
    pub update_time: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_status_window_is_half_open() {
        let start = Utc::now();
        let end = start + Duration::days(7);

        assert_eq!(
            ContestStatus::at(start, end, start - Duration::seconds(1)),
            ContestStatus::Upcoming
        );
        assert_eq!(ContestStatus::at(start, end, start), ContestStatus::Ongoing);
        assert_eq!(
            ContestStatus::at(start, end, end - Duration::seconds(1)),
            ContestStatus::Ongoing
        );
        assert_eq!(ContestStatus::at(start, end, end), ContestStatus::Ended);
    }

    #[test]
    fn test_visibility_resolves_owner_group() {
        assert_eq!(VisibilityKind::Public.resolve(7), Visibility::Public);
        assert_eq!(VisibilityKind::Restricted.resolve(7), Visibility::Restricted(7));
    }

    #[test]
    fn test_contest_type_wire_names() {
        assert_eq!(serde_json::to_string(&ContestType::Acm).unwrap(), "\"ACM\"");
        assert_eq!(
            serde_json::from_str::<ContestType>("\"TOTAL_SCORE\"").unwrap(),
            ContestType::TotalScore
        );
    }
}
