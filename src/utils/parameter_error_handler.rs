use actix_web::error::{QueryPayloadError, UrlencodedError};
use actix_web::{Error, HttpRequest};
use tracing::debug;

use crate::errors::RatingsError;
use crate::models::common::messages::MISSING_FIELDS;

/// 表单解析失败统一按缺少字段处理
pub fn form_error_handler(err: UrlencodedError, req: &HttpRequest) -> Error {
    debug!("Form payload rejected on {}: {}", req.path(), err);
    RatingsError::validation(MISSING_FIELDS).into()
}

/// 查询参数解析失败统一按缺少字段处理
pub fn query_error_handler(err: QueryPayloadError, req: &HttpRequest) -> Error {
    debug!("Query string rejected on {}: {}", req.path(), err);
    RatingsError::validation(MISSING_FIELDS).into()
}
