//! Notice handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{routing::get, Router};

use crate::state::AppState;

/// Public board, no authentication
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/notices", get(handler::list_public_notices))
        .route("/notices/{id}", get(handler::get_public_notice))
}

/// Group boards and notice administration (authenticated)
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/groups/{group_id}/notices", get(handler::list_group_notices))
        .route("/groups/{group_id}/notices/{id}", get(handler::get_group_notice))
        .route(
            "/notices/admin",
            get(handler::list_own_notices).post(handler::create_notice),
        )
        .route(
            "/notices/admin/{id}",
            get(handler::get_notice_detail)
                .patch(handler::update_notice)
                .delete(handler::delete_notice),
        )
}
