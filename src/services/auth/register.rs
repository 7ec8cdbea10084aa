use actix_web::{HttpRequest, HttpResponse};
use tracing::info;

use super::AuthService;
use crate::errors::{RatingsError, Result};
use crate::models::{
    TextResponse,
    auth::requests::RegisterRequest,
    common::messages::{MISSING_FIELDS, USER_EXISTS},
    users::requests::CreateUserRequest,
};
use crate::utils::password::hash_password;
use crate::utils::validate::{non_empty, validate_email, validate_username};

pub async fn handle_register(
    service: &AuthService,
    register_request: RegisterRequest,
    request: &HttpRequest,
) -> Result<HttpResponse> {
    let (Some(username), Some(email), Some(password)) = (
        non_empty(register_request.username),
        non_empty(register_request.email),
        non_empty(register_request.password),
    ) else {
        return Err(RatingsError::validation(MISSING_FIELDS));
    };

    validate_username(&username).map_err(RatingsError::validation)?;
    validate_email(&email).map_err(RatingsError::validation)?;

    let storage = service.get_storage(request)?;

    // 用户名或邮箱任一已存在即拒绝
    if storage.user_exists(&username, &email).await? {
        return Err(RatingsError::validation(USER_EXISTS));
    }

    let user = storage
        .create_user(CreateUserRequest {
            username,
            email,
            password: hash_password(&password)?,
        })
        .await?;

    info!("User {} registered", user.username);
    Ok(TextResponse::success())
}
