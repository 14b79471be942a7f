//! Consultorio REST handlers.

use crate::{
    api::headers::{pagination_headers, AlertHeaders},
    models::{Consultorio, PageRequest},
    state::AppState,
    Error,
};
use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

pub const BASE_PATH: &str = "/api/consultorios";

type ApiResult = std::result::Result<Response, Response>;

fn alerts(state: &AppState) -> AlertHeaders {
    AlertHeaders::new(state.config.server.application_name.clone())
}

fn json_body(
    alerts: &AlertHeaders,
    payload: std::result::Result<Json<Consultorio>, JsonRejection>,
) -> std::result::Result<Consultorio, Response> {
    payload
        .map(|Json(consultorio)| consultorio)
        .map_err(|rejection| {
            alerts.failure(Error::Rejected {
                status: rejection.status(),
                detail: rejection.body_text(),
            })
        })
}

/// POST /api/consultorios
pub async fn create_consultorio(
    State(state): State<AppState>,
    payload: std::result::Result<Json<Consultorio>, JsonRejection>,
) -> ApiResult {
    let alerts = alerts(&state);
    let consultorio = json_body(&alerts, payload)?;

    let created = state
        .crud_service
        .create(consultorio)
        .await
        .map_err(|e| alerts.failure(e))?;
    let id = created
        .id
        .ok_or_else(|| alerts.failure(Error::Internal("Store did not assign an id".into())))?;

    let mut headers = alerts.entity_created(id);
    if let Ok(location) = HeaderValue::try_from(format!("{BASE_PATH}/{id}")) {
        headers.insert(header::LOCATION, location);
    }

    Ok((StatusCode::CREATED, headers, Json(created)).into_response())
}

/// PUT /api/consultorios
pub async fn update_consultorio(
    State(state): State<AppState>,
    payload: std::result::Result<Json<Consultorio>, JsonRejection>,
) -> ApiResult {
    let alerts = alerts(&state);
    let consultorio = json_body(&alerts, payload)?;

    let updated = state
        .crud_service
        .update(consultorio)
        .await
        .map_err(|e| alerts.failure(e))?;
    let headers = updated
        .id
        .map(|id| alerts.entity_updated(id))
        .unwrap_or_default();

    Ok((StatusCode::OK, headers, Json(updated)).into_response())
}

/// GET /api/consultorios?page=&size=&sort=
pub async fn list_consultorios(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> ApiResult {
    let alerts = alerts(&state);
    let request = PageRequest::from_query_pairs(
        &params,
        state.config.api.default_page_size,
        state.config.api.max_page_size,
    )
    .map_err(|e| alerts.failure(e))?;

    let page = state
        .crud_service
        .list(&request)
        .await
        .map_err(|e| alerts.failure(e))?;
    let headers = pagination_headers(BASE_PATH, &request, &page);

    Ok((StatusCode::OK, headers, Json(page.content)).into_response())
}

/// GET /api/consultorios/:id
pub async fn get_consultorio(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult {
    let consultorio = state
        .crud_service
        .get(id)
        .await
        .map_err(|e| alerts(&state).failure(e))?;

    Ok((StatusCode::OK, Json(consultorio)).into_response())
}

/// DELETE /api/consultorios/:id
pub async fn delete_consultorio(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult {
    let alerts = alerts(&state);
    state
        .crud_service
        .delete(id)
        .await
        .map_err(|e| alerts.failure(e))?;

    Ok((StatusCode::NO_CONTENT, alerts.entity_deleted(id)).into_response())
}
