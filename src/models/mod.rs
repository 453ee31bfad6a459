//! Domain models
//!
//! This module contains all domain models used throughout the application.

pub mod contest;
pub mod group;
pub mod notice;
pub mod user;

pub use contest::*;
pub use group::*;
pub use notice::*;
pub use user::*;
