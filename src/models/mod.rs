pub mod auth;
pub mod catalog;
pub mod common;
pub mod ratings;
pub mod users;

pub use common::*;

/// 程序启动时间
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
