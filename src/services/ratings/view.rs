use actix_web::{HttpRequest, HttpResponse};

use super::RatingService;
use crate::errors::{RatingsError, Result};
use crate::models::{common::messages::NO_PROFESSORS, ratings::responses::ProfessorRating};
use crate::utils::number::round_average;

pub async fn view_professors(
    service: &RatingService,
    request: &HttpRequest,
) -> Result<HttpResponse> {
    let storage = service.get_storage(request)?;

    let averages = storage.list_professor_averages().await?;
    if averages.is_empty() {
        return Err(RatingsError::not_found(NO_PROFESSORS));
    }

    let body: Vec<ProfessorRating> = averages
        .into_iter()
        .map(|entry| ProfessorRating {
            professor_code: entry.professor.code,
            professor_name: entry.professor.name,
            average_rating: entry.average.map(round_average),
        })
        .collect();

    Ok(HttpResponse::Ok().json(body))
}
