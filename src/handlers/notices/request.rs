//! Notice request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::constants::{MAX_NOTICE_CONTENT_LENGTH, MAX_NOTICE_TITLE_LENGTH};

/// Create or update notice request
#[derive(Debug, Deserialize, Validate)]
pub struct NoticeRequest {
    pub group_id: i64,

    #[validate(length(min = 1, max = MAX_NOTICE_TITLE_LENGTH))]
    pub title: String,

    #[validate(length(min = 1, max = MAX_NOTICE_CONTENT_LENGTH))]
    pub content: String,

    #[serde(default = "default_visible")]
    pub visible: bool,

    #[serde(default)]
    pub fixed: bool,
}

fn default_visible() -> bool {
    true
}

/// Board page query; `offset` is 1-based
#[derive(Debug, Deserialize)]
pub struct OffsetQuery {
    #[serde(default = "first_offset")]
    pub offset: i64,
}

fn first_offset() -> i64 {
    1
}
