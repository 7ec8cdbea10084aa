pub mod average;
pub mod rate;
pub mod view;

use actix_web::{HttpRequest, HttpResponse};
use std::sync::Arc;

use super::storage_from_request;
use crate::errors::Result;
use crate::middlewares::AuthenticatedSession;
use crate::models::ratings::requests::{AverageQuery, RateRequest};
use crate::storage::Storage;

pub struct RatingService {
    storage: Option<Arc<dyn Storage>>,
}

impl RatingService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Result<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => storage_from_request(request),
        }
    }

    // 所有教授的平均分
    pub async fn view_professors(&self, request: &HttpRequest) -> Result<HttpResponse> {
        view::view_professors(self, request).await
    }

    // 教授在某课程下的平均分
    pub async fn module_average(
        &self,
        query: AverageQuery,
        request: &HttpRequest,
    ) -> Result<HttpResponse> {
        average::module_average(self, query, request).await
    }

    // 提交评分
    pub async fn rate(
        &self,
        auth: AuthenticatedSession,
        rate_request: RateRequest,
        request: &HttpRequest,
    ) -> Result<HttpResponse> {
        rate::rate(self, auth, rate_request, request).await
    }
}
