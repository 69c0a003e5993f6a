use axum::{
    extract::{
        Json, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    response::IntoResponse,
};

use app_api::{CreateWasteRequest, DailyQuery, DeleteWasteQuery, WasteQuery};

use crate::{errors::HttpError, state::HttpState};

pub async fn list_waste(
    State(state): State<HttpState>,
    query: Result<Query<WasteQuery>, QueryRejection>,
) -> Result<impl IntoResponse, HttpError> {
    let Query(req) = query.map_err(|err| HttpError::invalid_input(err.body_text()))?;
    let response = app_api::list_waste(&state.context, req)?;
    Ok(Json(response))
}

pub async fn daily_waste(
    State(state): State<HttpState>,
    query: Result<Query<DailyQuery>, QueryRejection>,
) -> Result<impl IntoResponse, HttpError> {
    let Query(req) = query.map_err(|err| HttpError::invalid_input(err.body_text()))?;
    let response = app_api::daily_waste(&state.context, req)?;
    Ok(Json(response))
}

pub async fn create_waste(
    State(state): State<HttpState>,
    body: Result<Json<CreateWasteRequest>, JsonRejection>,
) -> Result<impl IntoResponse, HttpError> {
    let Json(req) = body.map_err(|err| HttpError::invalid_input(err.body_text()))?;
    let response = app_api::create_waste(&state.context, req)?;
    Ok(Json(response))
}

pub async fn delete_waste(
    State(state): State<HttpState>,
    query: Result<Query<DeleteWasteQuery>, QueryRejection>,
) -> Result<impl IntoResponse, HttpError> {
    let Query(req) = query.map_err(|err| HttpError::invalid_input(err.body_text()))?;
    let response = app_api::delete_waste(&state.context, req)?;
    Ok(Json(response))
}

pub async fn health() -> impl IntoResponse {
    Json(app_api::ok())
}

pub async fn not_found() -> HttpError {
    HttpError::new(StatusCode::NOT_FOUND, "not found", Some("not_found".to_string()))
}
