pub mod list;

use actix_web::{HttpRequest, HttpResponse};
use std::sync::Arc;

use super::storage_from_request;
use crate::errors::Result;
use crate::storage::Storage;

pub struct CatalogService {
    storage: Option<Arc<dyn Storage>>,
}

impl CatalogService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Result<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => storage_from_request(request),
        }
    }

    // 列出开课实例及授课教授
    pub async fn list_module_instances(&self, request: &HttpRequest) -> Result<HttpResponse> {
        list::list_module_instances(self, request).await
    }
}
