//! Notice response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// Row on a notice board
#[derive(Debug, Serialize, FromRow)]
pub struct NoticeSummary {
    pub id: i64,
    pub title: String,
    pub fixed: bool,
    pub create_time: DateTime<Utc>,
}

/// Neighbouring notice
#[derive(Debug, Serialize, FromRow)]
pub struct NoticeLink {
    pub id: i64,
    pub title: String,
}

#[derive(Debug, Serialize, FromRow)]
pub struct NoticeContent {
    pub title: String,
    pub content: String,
    pub create_time: DateTime<Utc>,
    pub update_time: DateTime<Utc>,
}

/// A notice with links to the previous and next visible notice of its group
#[derive(Debug, Serialize)]
pub struct UserNoticePage {
    pub current: NoticeContent,
    pub prev: Option<NoticeLink>,
    pub next: Option<NoticeLink>,
}

#[derive(Debug, Serialize, FromRow)]
pub struct NoticeGroup {
    #[sqlx(rename = "group_id")]
    pub id: i64,
    pub group_name: String,
}

/// Notice written by the caller
#[derive(Debug, Serialize, FromRow)]
pub struct OwnNoticeSummary {
    pub id: i64,
    #[sqlx(flatten)]
    pub group: NoticeGroup,
    pub title: String,
    pub visible: bool,
    pub create_time: DateTime<Utc>,
}

/// Notice as loaded into the editor
#[derive(Debug, Serialize, FromRow)]
pub struct NoticeDetail {
    #[sqlx(flatten)]
    pub group: NoticeGroup,
    pub title: String,
    pub content: String,
    pub visible: bool,
    pub fixed: bool,
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
}
