pub mod auth;

pub mod catalog;

pub mod ratings;

use actix_web::web;

use crate::middlewares;

pub use auth::configure_auth_routes;
pub use catalog::configure_catalog_routes;
pub use ratings::configure_ratings_routes;

// 所有接口挂在同一个 /api scope 下，会话中间件对整个 scope 生效
pub fn configure_api_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .wrap(middlewares::LoadSession)
            .configure(configure_auth_routes)
            .configure(configure_catalog_routes)
            .configure(configure_ratings_routes),
    );
}
