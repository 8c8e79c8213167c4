use actix_web::{get, post, web, HttpResponse};

use crate::{app_state::AppState, errors::AppError, models::dto::request::ScoreRequestDto};

#[get("/api/diagnostic")]
pub async fn get_diagnostic(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.diagnostic_service.overview())
}

#[post("/api/diagnostic/result")]
pub async fn score_diagnostic(
    state: web::Data<AppState>,
    request: web::Json<ScoreRequestDto>,
) -> Result<HttpResponse, AppError> {
    let response = state.diagnostic_service.score(&request.answers)?;
    Ok(HttpResponse::Ok().json(response))
}
