//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码、类型名称和 HTTP 状态码。
//! 客户端错误原样返回错误详情，内部错误只记录日志并返回通用提示。

use std::fmt;

use actix_web::http::StatusCode;
use actix_web::http::header::CONTENT_TYPE;
use actix_web::{HttpResponse, ResponseError};

/// 内部错误对外统一返回的提示
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong";

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - status() 方法 - 返回对应的 HTTP 状态码
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_ratings_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal, $status:ident, $exposed:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum RatingsError {
            $($variant(String),)*
        }

        impl RatingsError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(RatingsError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(RatingsError::$variant(_) => $type_name,)*
                }
            }

            /// 获取 HTTP 状态码
            pub fn status(&self) -> StatusCode {
                match self {
                    $(RatingsError::$variant(_) => StatusCode::$status,)*
                }
            }

            /// 错误详情是否可以返回给客户端
            pub fn is_exposed(&self) -> bool {
                match self {
                    $(RatingsError::$variant(_) => $exposed,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(RatingsError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl RatingsError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        RatingsError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_ratings_errors! {
    CacheConnection("E001", "Cache Connection Error", UNPROCESSABLE_ENTITY, false),
    CachePluginNotFound("E002", "Cache Plugin Not Found", UNPROCESSABLE_ENTITY, false),
    DatabaseConfig("E003", "Database Configuration Error", UNPROCESSABLE_ENTITY, false),
    DatabaseConnection("E004", "Database Connection Error", UNPROCESSABLE_ENTITY, false),
    DatabaseOperation("E005", "Database Operation Error", UNPROCESSABLE_ENTITY, false),
    Validation("E006", "Validation Error", UNPROCESSABLE_ENTITY, true),
    NotFound("E007", "Resource Not Found", NOT_FOUND, true),
    Serialization("E008", "Serialization Error", UNPROCESSABLE_ENTITY, false),
    InvalidNumber("E009", "Invalid Number", BAD_REQUEST, true),
    PasswordHash("E010", "Password Hash Error", UNPROCESSABLE_ENTITY, false),
    Authentication("E011", "Authentication Error", FORBIDDEN, true),
}

impl RatingsError {
    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }

    /// 返回给客户端的纯文本内容
    pub fn client_message(&self) -> &str {
        if self.is_exposed() {
            self.message()
        } else {
            GENERIC_FAILURE_MESSAGE
        }
    }
}

impl fmt::Display for RatingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for RatingsError {}

impl ResponseError for RatingsError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    fn error_response(&self) -> HttpResponse {
        if self.is_exposed() {
            tracing::debug!("Request rejected: {}", self.format_simple());
        } else {
            tracing::error!("[{}] {}", self.code(), self.format_simple());
        }

        HttpResponse::build(self.status())
            .insert_header((CONTENT_TYPE, "text/plain; charset=utf-8"))
            .body(self.client_message().to_string())
    }
}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for RatingsError {
    fn from(err: sea_orm::DbErr) -> Self {
        RatingsError::DatabaseOperation(err.to_string())
    }
}

impl From<serde_json::Error> for RatingsError {
    fn from(err: serde_json::Error) -> Self {
        RatingsError::Serialization(err.to_string())
    }
}

impl From<argon2::password_hash::Error> for RatingsError {
    fn from(err: argon2::password_hash::Error) -> Self {
        RatingsError::PasswordHash(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, RatingsError>;
