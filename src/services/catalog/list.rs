use actix_web::{HttpRequest, HttpResponse};

use super::CatalogService;
use crate::errors::{RatingsError, Result};
use crate::models::common::messages::NO_MODULE_INSTANCES;

pub async fn list_module_instances(
    service: &CatalogService,
    request: &HttpRequest,
) -> Result<HttpResponse> {
    let storage = service.get_storage(request)?;

    let items = storage.list_module_instances().await?;
    if items.is_empty() {
        return Err(RatingsError::not_found(NO_MODULE_INSTANCES));
    }

    Ok(HttpResponse::Ok().json(items))
}
