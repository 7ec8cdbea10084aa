use actix_web::{HttpRequest, HttpResponse};
use tracing::info;

use super::RatingService;
use crate::errors::{RatingsError, Result};
use crate::middlewares::AuthenticatedSession;
use crate::models::{
    TextResponse,
    common::messages::{ALREADY_RATED, MISSING_FIELDS, MODULE_INSTANCE_NOT_FOUND, RATING_ADDED},
    ratings::requests::{CreateRatingRequest, RateRequest},
};
use crate::utils::number::{parse_integer, parse_rating};
use crate::utils::validate::non_empty;

pub async fn rate(
    service: &RatingService,
    auth: AuthenticatedSession,
    rate_request: RateRequest,
    request: &HttpRequest,
) -> Result<HttpResponse> {
    let (Some(professor_code), Some(module_code), Some(year), Some(semester), Some(rating)) = (
        non_empty(rate_request.professor_code),
        non_empty(rate_request.module_code),
        non_empty(rate_request.year),
        non_empty(rate_request.semester),
        non_empty(rate_request.rating),
    ) else {
        return Err(RatingsError::validation(MISSING_FIELDS));
    };

    // 先校验评分数值，非法时不触碰数据库
    let rating = parse_rating(&rating)?;

    let (Some(year), Some(semester)) = (parse_integer(&year), parse_integer(&semester)) else {
        return Err(RatingsError::not_found(MODULE_INSTANCE_NOT_FOUND));
    };

    let storage = service.get_storage(request)?;

    let assignment = storage
        .find_module_instance_professor(&module_code, year, semester, &professor_code)
        .await?
        .ok_or_else(|| RatingsError::not_found(MODULE_INSTANCE_NOT_FOUND))?;

    let user_id = auth.session.user_id;
    if storage
        .get_rating_by_user_and_mip(user_id, assignment.id)
        .await?
        .is_some()
    {
        return Err(RatingsError::validation(ALREADY_RATED));
    }

    // 并发重复提交由唯一索引拦截，存储层同样返回 ALREADY_RATED
    storage
        .create_rating(CreateRatingRequest {
            user_id,
            module_instance_professor_id: assignment.id,
            rating,
        })
        .await?;

    info!(
        "User {} rated {} in {} {}/{}: {}",
        auth.session.username, professor_code, module_code, year, semester, rating
    );
    Ok(TextResponse::created(RATING_ADDED))
}
