pub mod auth;
pub mod catalog;
pub mod ratings;

pub use auth::AuthService;
pub use catalog::CatalogService;
pub use ratings::RatingService;

use actix_web::{HttpRequest, web};
use std::sync::Arc;

use crate::cache::ObjectCache;
use crate::errors::{RatingsError, Result};
use crate::storage::Storage;

// 从应用数据中取存储句柄
pub(crate) fn storage_from_request(request: &HttpRequest) -> Result<Arc<dyn Storage>> {
    request
        .app_data::<web::Data<Arc<dyn Storage>>>()
        .map(|data| data.get_ref().clone())
        .ok_or_else(|| RatingsError::database_connection("Storage not found in app data"))
}

// 从应用数据中取会话缓存
pub(crate) fn cache_from_request(request: &HttpRequest) -> Result<Arc<dyn ObjectCache>> {
    request
        .app_data::<web::Data<Arc<dyn ObjectCache>>>()
        .map(|data| data.get_ref().clone())
        .ok_or_else(|| RatingsError::cache_connection("Cache not found in app data"))
}
