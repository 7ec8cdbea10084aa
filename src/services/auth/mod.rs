pub mod login;
pub mod logout;
pub mod register;

use actix_web::{HttpRequest, HttpResponse};
use std::sync::Arc;

use super::{cache_from_request, storage_from_request};
use crate::cache::ObjectCache;
use crate::errors::Result;
use crate::middlewares::AuthenticatedSession;
use crate::models::auth::requests::{LoginRequest, RegisterRequest};
use crate::storage::Storage;

pub struct AuthService {
    storage: Option<Arc<dyn Storage>>,
}

impl AuthService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Result<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => storage_from_request(request),
        }
    }

    pub(crate) fn get_cache(&self, request: &HttpRequest) -> Result<Arc<dyn ObjectCache>> {
        cache_from_request(request)
    }

    // 用户注册
    pub async fn register(
        &self,
        register_request: RegisterRequest,
        request: &HttpRequest,
    ) -> Result<HttpResponse> {
        register::handle_register(self, register_request, request).await
    }

    // 登录验证
    pub async fn login(
        &self,
        login_request: LoginRequest,
        request: &HttpRequest,
    ) -> Result<HttpResponse> {
        login::handle_login(self, login_request, request).await
    }

    // 登出
    pub async fn logout(
        &self,
        auth: AuthenticatedSession,
        request: &HttpRequest,
    ) -> Result<HttpResponse> {
        logout::handle_logout(self, auth, request).await
    }
}
