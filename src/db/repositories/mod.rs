//! Database repositories
//!
//! Repositories handle all direct database interactions.

pub mod contest_repo;
pub mod group_repo;
pub mod notice_repo;
pub mod user_repo;

pub use contest_repo::ContestRepository;
pub use group_repo::GroupRepository;
pub use notice_repo::NoticeRepository;
pub use user_repo::UserRepository;
