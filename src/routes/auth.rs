use actix_web::{HttpRequest, HttpResponse, web};
use once_cell::sync::Lazy;

use crate::errors::RatingsError;
use crate::middlewares::AuthenticatedSession;
use crate::models::auth::requests::{LoginRequest, RegisterRequest};
use crate::services::AuthService;

// 懒加载的全局 AuthService 实例
static AUTH_SERVICE: Lazy<AuthService> = Lazy::new(AuthService::new_lazy);

pub async fn register(
    req: HttpRequest,
    user_data: web::Form<RegisterRequest>,
) -> Result<HttpResponse, RatingsError> {
    AUTH_SERVICE.register(user_data.into_inner(), &req).await
}

pub async fn login(
    req: HttpRequest,
    user_data: web::Form<LoginRequest>,
) -> Result<HttpResponse, RatingsError> {
    AUTH_SERVICE.login(user_data.into_inner(), &req).await
}

pub async fn logout(
    auth: AuthenticatedSession,
    req: HttpRequest,
) -> Result<HttpResponse, RatingsError> {
    AUTH_SERVICE.logout(auth, &req).await
}

// 配置路由
pub fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/register").route(web::post().to(register)))
        .service(web::resource("/login").route(web::post().to(login)))
        .service(web::resource("/logout").route(web::post().to(logout)));
}
