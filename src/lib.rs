//! Codedang - contest and course platform backend
//!
//! Users join groups, groups run contests and publish notices.
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: HTTP request handlers (thin layer)
//! - **Services**: Business logic
//! - **Admission**: Contest participation rules over a [`admission::ContestStore`]
//! - **Repositories**: Database access
//! - **Models**: Domain models

pub mod admission;
pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;
