//! Offset pagination
//!
//! Boards are paged by a 1-based `offset`: page `n` skips `n - 1` rows.

use crate::error::{AppError, AppResult};

/// Rows to skip and take for one page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub skip: i64,
    pub take: i64,
}

impl Page {
    pub fn from_offset(offset: i64, take: i64) -> AppResult<Self> {
        if offset < 1 {
            return Err(AppError::Validation(format!(
                "offset must be at least 1, got {}",
                offset
            )));
        }

        Ok(Self {
            skip: offset - 1,
            take,
        })
    }
}
