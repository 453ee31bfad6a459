//! Own account handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{routing::get, Router};

use crate::state::AppState;

/// User routes (authenticated)
pub fn routes() -> Router<AppState> {
    Router::new().route("/user", get(handler::get_profile).patch(handler::update_real_name))
}
