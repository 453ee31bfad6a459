//! Business logic services

pub mod contest_service;
pub mod group_service;
pub mod notice_service;
pub mod user_service;

pub use contest_service::ContestService;
pub use group_service::GroupService;
pub use notice_service::NoticeService;
pub use user_service::UserService;
