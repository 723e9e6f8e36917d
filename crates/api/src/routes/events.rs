//! Event and registration endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use common::{Event, EventId, EventRegistration};
use domain::{CreateEvent, RegisterForEvent, Timestamp};
use serde::Deserialize;
use store::Store;

use crate::error::ApiError;
use crate::extract::{ApiJson, ApiPath};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct CreateEventRequest {
    pub title: String,
    pub date: Timestamp,
    pub location: String,
    pub price: Option<f64>,
}

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub tickets: Option<i32>,
}

/// POST /events/create — schedule an event.
#[tracing::instrument(skip(state, req))]
pub async fn create<S: Store + Clone + 'static>(
    State(state): State<Arc<AppState<S>>>,
    ApiJson(req): ApiJson<CreateEventRequest>,
) -> Result<(StatusCode, Json<Event>), ApiError> {
    let cmd = CreateEvent {
        title: req.title,
        date: req.date,
        location: req.location,
        price: req.price,
    };
    let event = state.repository.create_event(cmd).await?;

    Ok((StatusCode::CREATED, Json(event)))
}

/// GET /events — list all events.
#[tracing::instrument(skip(state))]
pub async fn list<S: Store + Clone + 'static>(
    State(state): State<Arc<AppState<S>>>,
) -> Result<Json<Vec<Event>>, ApiError> {
    Ok(Json(state.queries.list_events().await?))
}

/// GET /events/:id — load one event.
#[tracing::instrument(skip(state))]
pub async fn get<S: Store + Clone + 'static>(
    State(state): State<Arc<AppState<S>>>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<Event>, ApiError> {
    Ok(Json(state.queries.get_event(EventId::new(id)).await?))
}

/// POST /events/:id/register — register a guest; 404 if the event is unknown.
#[tracing::instrument(skip(state, req))]
pub async fn register<S: Store + Clone + 'static>(
    State(state): State<Arc<AppState<S>>>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(req): ApiJson<RegisterRequest>,
) -> Result<(StatusCode, Json<EventRegistration>), ApiError> {
    let cmd = RegisterForEvent {
        event_id: EventId::new(id),
        first_name: req.first_name,
        last_name: req.last_name,
        tickets: req.tickets,
    };
    let registration = state.registrations.register_for_event(cmd).await?;

    Ok((StatusCode::CREATED, Json(registration)))
}

/// GET /events/:id/registrations — list registrations for an event.
#[tracing::instrument(skip(state))]
pub async fn registrations<S: Store + Clone + 'static>(
    State(state): State<Arc<AppState<S>>>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<Vec<EventRegistration>>, ApiError> {
    Ok(Json(
        state
            .registrations
            .list_registrations(EventId::new(id))
            .await?,
    ))
}
