/*!
 * 会话加载中间件
 *
 * 读取会话 cookie，在对象缓存中查到会话后放入请求扩展。
 * 本中间件不拒绝任何请求，需要登录的处理程序通过 `AuthenticatedSession` 提取器取得会话。
 *
 * ```rust,ignore
 * web::scope("/api")
 *     .wrap(LoadSession)
 *     .route("/logout", web::post().to(logout))
 *
 * async fn logout(auth: AuthenticatedSession, req: HttpRequest) -> Result<HttpResponse, RatingsError> {
 *     // auth.session.user_id / auth.token
 * }
 * ```
 */

use crate::cache::ObjectCache;
use crate::errors::RatingsError;
use crate::models::auth::entities::Session;
use crate::models::common::messages::NOT_AUTHENTICATED;
use crate::utils::SessionUtils;
use actix_service::{Service, Transform};
use actix_web::{
    Error, FromRequest, HttpMessage, HttpRequest,
    dev::{Payload, ServiceRequest, ServiceResponse},
    web,
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::{rc::Rc, sync::Arc};
use tracing::{debug, warn};

/// 当前请求携带的会话令牌
#[derive(Debug, Clone)]
pub struct SessionToken(pub String);

#[derive(Clone)]
pub struct LoadSession;

// 辅助函数：按 cookie 查找会话
async fn resolve_session(req: &ServiceRequest) -> Option<(String, Session)> {
    let token = SessionUtils::extract_session_token_from_cookie(req.request())?;

    let Some(cache) = req
        .app_data::<web::Data<Arc<dyn ObjectCache>>>()
        .map(|data| data.get_ref().clone())
    else {
        warn!("Session cache is not registered in app data");
        return None;
    };

    match SessionUtils::load_session(cache.as_ref(), &token).await {
        Some(session) => Some((token, session)),
        None => {
            debug!("Session cookie present but no live session for {}", req.path());
            None
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for LoadSession
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = LoadSessionMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(LoadSessionMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct LoadSessionMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for LoadSessionMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        Box::pin(async move {
            if let Some((token, session)) = resolve_session(&req).await {
                debug!("Session resolved for user ID: {}", session.user_id);
                let mut extensions = req.extensions_mut();
                extensions.insert(session);
                extensions.insert(SessionToken(token));
            }
            srv.call(req).await
        })
    }
}

impl LoadSession {
    /// 从请求扩展中提取会话
    pub fn extract_session(req: &HttpRequest) -> Option<Session> {
        req.extensions().get::<Session>().cloned()
    }

    /// 从请求扩展中提取会话令牌
    pub fn extract_token(req: &HttpRequest) -> Option<String> {
        req.extensions().get::<SessionToken>().map(|t| t.0.clone())
    }
}

/// 已登录会话提取器，缺少会话时返回 403
#[derive(Debug, Clone)]
pub struct AuthenticatedSession {
    pub session: Session,
    pub token: String,
}

impl FromRequest for AuthenticatedSession {
    type Error = RatingsError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let resolved = LoadSession::extract_session(req)
            .zip(LoadSession::extract_token(req))
            .map(|(session, token)| AuthenticatedSession { session, token })
            .ok_or_else(|| RatingsError::authentication(NOT_AUTHENTICATED));
        ready(resolved)
    }
}
