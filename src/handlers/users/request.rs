//! User request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::constants::MAX_REAL_NAME_LENGTH;

/// Update real name request
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateRealNameRequest {
    #[validate(length(min = 1, max = MAX_REAL_NAME_LENGTH))]
    pub real_name: String,
}
