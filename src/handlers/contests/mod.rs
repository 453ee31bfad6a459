//! Contest handlers: participation and group-manager administration

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

/// Contest routes (authenticated)
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/groups/{group_id}/contests/{id}/participation",
            post(handler::participate),
        )
        .route(
            "/contests/admin",
            get(handler::list_admin_contests).post(handler::create_contest),
        )
        .route("/contests/admin/ongoing", get(handler::list_ongoing_contests))
        .route(
            "/contests/admin/{id}",
            get(handler::get_admin_contest)
                .put(handler::update_contest)
                .delete(handler::delete_contest),
        )
}
