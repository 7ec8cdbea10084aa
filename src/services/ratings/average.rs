use actix_web::{HttpRequest, HttpResponse};

use super::RatingService;
use crate::errors::{RatingsError, Result};
use crate::models::{
    common::messages::{MISSING_FIELDS, PROFESSOR_OR_MODULE_NOT_FOUND},
    ratings::{requests::AverageQuery, responses::ModuleProfessorRating},
};
use crate::utils::number::round_average;
use crate::utils::validate::non_empty;

pub async fn module_average(
    service: &RatingService,
    query: AverageQuery,
    request: &HttpRequest,
) -> Result<HttpResponse> {
    let (Some(professor_code), Some(module_code)) =
        (non_empty(query.professor_code), non_empty(query.module_code))
    else {
        return Err(RatingsError::validation(MISSING_FIELDS));
    };

    let storage = service.get_storage(request)?;

    let professor = storage.get_professor_by_code(&professor_code).await?;
    let module = storage.get_module_by_code(&module_code).await?;
    let (Some(professor), Some(module)) = (professor, module) else {
        return Err(RatingsError::not_found(PROFESSOR_OR_MODULE_NOT_FOUND));
    };

    // 没有评分时 average_rating 为 null
    let average = storage
        .get_module_professor_average(professor.id, module.id)
        .await?;

    Ok(HttpResponse::Ok().json(ModuleProfessorRating {
        professor_code: professor.code,
        professor_name: professor.name,
        module_code: module.code,
        module_name: module.name,
        average_rating: average.map(round_average),
    }))
}
