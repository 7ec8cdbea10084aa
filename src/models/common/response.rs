use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use actix_web::http::header::CONTENT_TYPE;

use super::messages;

// 纯文本响应
pub struct TextResponse;

impl TextResponse {
    pub fn with_status(status: StatusCode, message: impl Into<String>) -> HttpResponse {
        HttpResponse::build(status)
            .insert_header((CONTENT_TYPE, "text/plain; charset=utf-8"))
            .body(message.into())
    }

    pub fn ok(message: impl Into<String>) -> HttpResponse {
        Self::with_status(StatusCode::OK, message)
    }

    pub fn created(message: impl Into<String>) -> HttpResponse {
        Self::with_status(StatusCode::CREATED, message)
    }

    /// 200 `Success`
    pub fn success() -> HttpResponse {
        Self::ok(messages::SUCCESS)
    }
}
