use actix_web::{HttpRequest, HttpResponse, web};
use once_cell::sync::Lazy;

use crate::errors::RatingsError;
use crate::middlewares::AuthenticatedSession;
use crate::models::ratings::requests::{AverageQuery, RateRequest};
use crate::services::RatingService;

// 懒加载的全局 RatingService 实例
static RATING_SERVICE: Lazy<RatingService> = Lazy::new(RatingService::new_lazy);

pub async fn view_professors(req: HttpRequest) -> Result<HttpResponse, RatingsError> {
    RATING_SERVICE.view_professors(&req).await
}

pub async fn module_average(
    req: HttpRequest,
    query: web::Query<AverageQuery>,
) -> Result<HttpResponse, RatingsError> {
    RATING_SERVICE.module_average(query.into_inner(), &req).await
}

// 会话提取器放在首位，未登录时不再解析表单
pub async fn rate(
    auth: AuthenticatedSession,
    req: HttpRequest,
    rate_data: web::Form<RateRequest>,
) -> Result<HttpResponse, RatingsError> {
    RATING_SERVICE
        .rate(auth, rate_data.into_inner(), &req)
        .await
}

// 配置路由
pub fn configure_ratings_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/view").route(web::get().to(view_professors)))
        .service(web::resource("/average").route(web::get().to(module_average)))
        .service(web::resource("/rate").route(web::post().to(rate)));
}
