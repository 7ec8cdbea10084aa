use actix_web::{HttpRequest, HttpResponse};
use tracing::{debug, info};

use super::AuthService;
use crate::errors::{RatingsError, Result};
use crate::middlewares::LoadSession;
use crate::models::{
    TextResponse,
    auth::requests::LoginRequest,
    common::messages::{INVALID_CREDENTIALS, MISSING_FIELDS},
};
use crate::utils::SessionUtils;
use crate::utils::password::verify_password;
use crate::utils::validate::non_empty;

pub async fn handle_login(
    service: &AuthService,
    login_request: LoginRequest,
    request: &HttpRequest,
) -> Result<HttpResponse> {
    let (Some(username), Some(password)) = (
        non_empty(login_request.username),
        non_empty(login_request.password),
    ) else {
        return Err(RatingsError::validation(MISSING_FIELDS));
    };

    let storage = service.get_storage(request)?;

    // 1. 校验用户名与密码
    let user = match storage.get_user_by_username(&username).await? {
        Some(user) if verify_password(&password, &user.password_hash) => user,
        _ => {
            debug!("Login rejected for username {}", username);
            return Err(RatingsError::not_found(INVALID_CREDENTIALS));
        }
    };

    // 2. 丢弃请求中携带的旧会话
    let cache = service.get_cache(request)?;
    if let Some(old_token) = LoadSession::extract_token(request) {
        SessionUtils::destroy_session(cache.as_ref(), &old_token).await;
    }

    // 3. 创建新会话并写入 cookie
    let (token, _) = SessionUtils::create_session(cache.as_ref(), &user).await?;
    info!("User {} logged in successfully", user.username);

    let mut response = TextResponse::success();
    response
        .add_cookie(&SessionUtils::create_session_cookie(&token))
        .map_err(|e| RatingsError::serialization(format!("无法写入会话 Cookie: {e}")))?;
    Ok(response)
}
