//! User response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::UserProfile;

/// Own account with profile
#[derive(Debug, Serialize)]
pub struct UserProfileResponse {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub role: String,
    pub last_login: Option<DateTime<Utc>>,
    pub create_time: DateTime<Utc>,
    pub profile: Option<ProfileResponse>,
}

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub real_name: String,
    pub update_time: DateTime<Utc>,
}

impl From<UserProfile> for ProfileResponse {
    fn from(profile: UserProfile) -> Self {
        Self {
            real_name: profile.real_name,
            update_time: profile.update_time,
        }
    }
}
