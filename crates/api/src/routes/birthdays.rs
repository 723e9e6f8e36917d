//! Birthday hall reservation endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use common::{BirthdayReservation, ReservationId};
use domain::{ReserveBirthday, Timestamp};
use serde::Deserialize;
use store::Store;

use crate::error::ApiError;
use crate::extract::{ApiJson, ApiPath};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ReserveBirthdayRequest {
    pub first_name: String,
    pub last_name: String,
    /// Any offset is dropped; the local time is stored as written.
    pub date: Timestamp,
    pub guests: i32,
    pub hall: Option<String>,
    pub special_requests: Option<String>,
}

/// POST /birthday/reserve — reserve a birthday hall.
#[tracing::instrument(skip(state, req))]
pub async fn reserve<S: Store + Clone + 'static>(
    State(state): State<Arc<AppState<S>>>,
    ApiJson(req): ApiJson<ReserveBirthdayRequest>,
) -> Result<(StatusCode, Json<BirthdayReservation>), ApiError> {
    let cmd = ReserveBirthday {
        first_name: req.first_name,
        last_name: req.last_name,
        date: req.date,
        guests: req.guests,
        hall: req.hall,
        special_requests: req.special_requests,
    };
    let reservation = state.repository.create_reservation(cmd).await?;

    Ok((StatusCode::CREATED, Json(reservation)))
}

/// GET /birthday/list — list all reservations.
#[tracing::instrument(skip(state))]
pub async fn list<S: Store + Clone + 'static>(
    State(state): State<Arc<AppState<S>>>,
) -> Result<Json<Vec<BirthdayReservation>>, ApiError> {
    Ok(Json(state.queries.list_reservations().await?))
}

/// GET /birthday/:id — load one reservation.
#[tracing::instrument(skip(state))]
pub async fn get<S: Store + Clone + 'static>(
    State(state): State<Arc<AppState<S>>>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<BirthdayReservation>, ApiError> {
    Ok(Json(
        state.queries.get_reservation(ReservationId::new(id)).await?,
    ))
}
