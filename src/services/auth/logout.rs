use actix_web::{HttpRequest, HttpResponse};
use tracing::info;

use super::AuthService;
use crate::errors::{RatingsError, Result};
use crate::middlewares::AuthenticatedSession;
use crate::models::TextResponse;
use crate::utils::SessionUtils;

/// 处理用户登出
/// 删除服务端会话，并通过 max_age=0 的空 cookie 清除客户端状态
pub async fn handle_logout(
    service: &AuthService,
    auth: AuthenticatedSession,
    request: &HttpRequest,
) -> Result<HttpResponse> {
    let cache = service.get_cache(request)?;
    SessionUtils::destroy_session(cache.as_ref(), &auth.token).await;
    info!("User {} logged out", auth.session.username);

    let mut response = TextResponse::success();
    response
        .add_cookie(&SessionUtils::create_empty_session_cookie())
        .map_err(|e| RatingsError::serialization(format!("无法写入会话 Cookie: {e}")))?;
    Ok(response)
}
