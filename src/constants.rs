//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

// =============================================================================
// DATABASE DEFAULTS
// =============================================================================

/// Default maximum database connections in the pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 20;

// =============================================================================
// AUTHENTICATION DEFAULTS
// =============================================================================

/// Issuer expected in every access token
pub const DEFAULT_JWT_ISSUER: &str = "skkuding.dev";

/// Authorization scheme for access tokens
pub const AUTH_TYPE: &str = "Bearer";

// =============================================================================
// GROUPS
// =============================================================================

/// The group every account is registered into at sign-up.
///
/// Public notices are read from this group. Contest admission does not look
/// at this id; it uses the contest's own visibility.
pub const PUBLIC_GROUP_ID: i64 = 1;

// =============================================================================
// PAGINATION
// =============================================================================

/// Notices per page on the public and group boards
pub const NOTICE_PAGE_SIZE: i64 = 10;

/// Notices per page on the "my notices" admin board
pub const OWN_NOTICE_PAGE_SIZE: i64 = 5;

// =============================================================================
// VALIDATION
// =============================================================================

/// Maximum contest title length
pub const MAX_CONTEST_TITLE_LENGTH: u64 = 256;

/// Maximum contest description length
pub const MAX_CONTEST_DESCRIPTION_LENGTH: u64 = 65535;

/// Maximum contest summary length
pub const MAX_CONTEST_SUMMARY_LENGTH: u64 = 1024;

/// Maximum notice title length
pub const MAX_NOTICE_TITLE_LENGTH: u64 = 256;

/// Maximum notice content length
pub const MAX_NOTICE_CONTENT_LENGTH: u64 = 65535;

/// Maximum real name length
pub const MAX_REAL_NAME_LENGTH: u64 = 64;

// =============================================================================
// API VERSIONING
// =============================================================================

/// API base path
pub const API_BASE_PATH: &str = "/api/v1";

// =============================================================================
// REDIS
// =============================================================================

/// Timeout for opening a Redis connection, in milliseconds
pub const REDIS_CONNECT_TIMEOUT_MS: u64 = 500;

/// Timeout for a single Redis command, in milliseconds
pub const REDIS_RESPONSE_TIMEOUT_MS: u64 = 500;

/// Seconds to wait after a failed connect before trying again
pub const REDIS_RECONNECT_COOLDOWN_SECS: u64 = 30;

// =============================================================================
// RATE LIMITING
// =============================================================================

/// Rate limiting configuration
pub mod rate_limits {
    /// Contest participation - max requests
    pub const PARTICIPATION_MAX_REQUESTS: i64 = 10;
    /// Contest participation - window in seconds
    pub const PARTICIPATION_WINDOW_SECS: i64 = 60;

    /// Admin endpoints - max requests
    pub const ADMIN_MAX_REQUESTS: i64 = 30;
    /// Admin endpoints - window in seconds
    pub const ADMIN_WINDOW_SECS: i64 = 60;

    /// General API - max requests
    pub const GENERAL_MAX_REQUESTS: i64 = 100;
    /// General API - window in seconds
    pub const GENERAL_WINDOW_SECS: i64 = 60;
}
