use actix_web::{HttpRequest, HttpResponse, web};
use once_cell::sync::Lazy;

use crate::errors::RatingsError;
use crate::services::CatalogService;

// 懒加载的全局 CatalogService 实例
static CATALOG_SERVICE: Lazy<CatalogService> = Lazy::new(CatalogService::new_lazy);

pub async fn list_module_instances(req: HttpRequest) -> Result<HttpResponse, RatingsError> {
    CATALOG_SERVICE.list_module_instances(&req).await
}

// 配置路由
pub fn configure_catalog_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/list").route(web::get().to(list_module_instances)));
}
