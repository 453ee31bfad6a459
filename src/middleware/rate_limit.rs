//! Rate limiting middleware
//!
//! Fixed window counters in Redis, keyed by client IP and path bucket.
//! Requests pass through when Redis cannot be reached.

use std::net::SocketAddr;

use axum::{
    body::Body,
    extract::{ConnectInfo, Request, State},
    middleware::Next,
    response::Response,
};
use redis::AsyncCommands;
use tracing::warn;

use crate::{
    constants::{rate_limits, API_BASE_PATH},
    error::AppError,
    state::AppState,
};

/// Endpoint families sharing one counter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bucket {
    Participation,
    Admin,
    General,
}

impl Bucket {
    fn for_path(path: &str) -> Self {
        let path = path.strip_prefix(API_BASE_PATH).unwrap_or(path);

        if path.starts_with("/groups/") && path.ends_with("/participation") {
            Self::Participation
        } else if path.split('/').any(|segment| segment == "admin") {
            Self::Admin
        } else {
            Self::General
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Participation => "participation",
            Self::Admin => "admin",
            Self::General => "general",
        }
    }

    /// `(max requests, window seconds)`
    fn limit(self) -> (i64, i64) {
        match self {
            Self::Participation => (
                rate_limits::PARTICIPATION_MAX_REQUESTS,
                rate_limits::PARTICIPATION_WINDOW_SECS,
            ),
            Self::Admin => (
                rate_limits::ADMIN_MAX_REQUESTS,
                rate_limits::ADMIN_WINDOW_SECS,
            ),
            Self::General => (
                rate_limits::GENERAL_MAX_REQUESTS,
                rate_limits::GENERAL_WINDOW_SECS,
            ),
        }
    }
}

fn counter_key(ip: &str, bucket: Bucket) -> String {
    format!("rate_limit:{}:{}", ip, bucket.name())
}

/// Rate limit middleware
pub async fn rate_limit_middleware(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let bucket = Bucket::for_path(request.uri().path());
    let (limit, window) = bucket.limit();
    let key = counter_key(&addr.ip().to_string(), bucket);

    match hit(&state, &key, window).await {
        Ok(count) if count > limit => {
            warn!(ip = %addr.ip(), bucket = bucket.name(), count, "Rate limit exceeded");
            return Err(AppError::TooManyRequests);
        }
        Ok(_) => {}
        Err(e) => warn!(error = %e, "Rate limiter unavailable, letting request through"),
    }

    Ok(next.run(request).await)
}

/// Count one request in the current window.
///
/// The counter and its TTL are read in one transaction; a key left without a
/// TTL gets one on the next hit, so a window always ends.
async fn hit(state: &AppState, key: &str, window: i64) -> redis::RedisResult<i64> {
    let mut redis = state.redis().await?;

    let (count, ttl): (i64, i64) = redis::pipe()
        .atomic()
        .incr(key, 1)
        .ttl(key)
        .query_async(&mut redis)
        .await?;

    if ttl < 0 {
        let _: () = redis.expire(key, window).await?;
    }

    Ok(count)
}
