//! Phonebook API handlers.
//!
//! Each handler takes the store lock once and holds it for its whole
//! read-then-mutate step.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::Html,
    Json,
};
use chrono::Local;

use crate::http::error::ApiError;
use crate::http::response::render_info;
use crate::http::server::AppState;
use crate::observability::metrics;
use crate::store::{NewPerson, Person, PersonId};

/// `GET /api/persons`
pub async fn list_persons(State(state): State<AppState>) -> Json<Vec<Person>> {
    let store = state.store.read().await;
    Json(store.list().to_vec())
}

/// `GET /api/persons/{id}`
///
/// Ids that are not canonical decimal cannot belong to any entry and are
/// reported as not found.
pub async fn get_person(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Person>, ApiError> {
    let id: PersonId = id.parse().map_err(|_| ApiError::NotFound)?;
    let store = state.store.read().await;
    Ok(Json(store.get(id)?.clone()))
}

/// `POST /api/persons`
pub async fn create_person(
    State(state): State<AppState>,
    payload: Result<Json<NewPerson>, JsonRejection>,
) -> Result<Json<Person>, ApiError> {
    let Json(new) = payload.map_err(|rejection| ApiError::MalformedBody(rejection.body_text()))?;
    tracing::debug!(body = ?new, "Create person payload");

    let person = {
        let mut store = state.store.write().await;
        let person = store.create(&new)?;
        metrics::record_people(store.len());
        person
    };

    tracing::info!(id = %person.id, name = %person.name, "Person added");
    Ok(Json(person))
}

/// `DELETE /api/persons/{id}`
///
/// Always 204, whether or not anything was removed.
pub async fn delete_person(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> StatusCode {
    if let Ok(id) = id.parse::<PersonId>() {
        let mut store = state.store.write().await;
        let removed = store.remove(id);
        metrics::record_people(store.len());
        tracing::info!(id = %id, removed, "Person deleted");
    }
    StatusCode::NO_CONTENT
}

/// `GET /info`
pub async fn info(State(state): State<AppState>) -> Html<String> {
    let count = state.store.read().await.len();
    Html(render_info(count, &Local::now()))
}

/// Unsupported method on a known API path.
pub async fn unknown_endpoint() -> ApiError {
    ApiError::UnknownEndpoint
}
