//! Utility functions

pub mod pagination;
pub mod time;

pub use pagination::Page;
pub use time::now_utc;
