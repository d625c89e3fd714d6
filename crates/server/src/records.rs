use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

use models::{Booking, Message, Newsletter, RecordKind};
use service::store::insert_record;

use crate::errors::ApiError;
use crate::extract::ValidatedJson;
use crate::routes::ServerState;

/// Listing window applied when the caller does not pass `limit`.
pub const DEFAULT_LIST_LIMIT: i64 = 50;

#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct ListQuery {
    pub limit: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: String,
    pub message: &'static str,
}

#[utoipa::path(
    post,
    path = "/api/bookings",
    tag = "bookings",
    request_body = crate::openapi::BookingDoc,
    responses(
        (status = 201, description = "Booking created"),
        (status = 422, description = "Validation failed"),
        (status = 500, description = "Persistence failure")
    )
)]
pub async fn create_booking(
    State(state): State<ServerState>,
    ValidatedJson(payload): ValidatedJson<Booking>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let id = insert_record(state.store.as_ref(), RecordKind::Booking, &payload).await?;
    info!(%id, service = %payload.service, category = %payload.category, "booking created");
    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse { id, message: "Booking created" }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/bookings",
    tag = "bookings",
    params(ListQuery),
    responses(
        (status = 200, description = "Stored bookings"),
        (status = 500, description = "Persistence failure")
    )
)]
pub async fn list_bookings(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<serde_json::Value>>, ApiError> {
    let limit = query.limit.unwrap_or(DEFAULT_LIST_LIMIT);
    let bookings = state.store.list(RecordKind::Booking, limit).await?;
    info!(count = bookings.len(), limit, "list bookings");
    Ok(Json(bookings))
}

#[utoipa::path(
    post,
    path = "/api/messages",
    tag = "messages",
    request_body = crate::openapi::MessageDoc,
    responses(
        (status = 201, description = "Message received"),
        (status = 422, description = "Validation failed"),
        (status = 500, description = "Persistence failure")
    )
)]
pub async fn create_message(
    State(state): State<ServerState>,
    ValidatedJson(payload): ValidatedJson<Message>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let id = insert_record(state.store.as_ref(), RecordKind::Message, &payload).await?;
    info!(%id, subject = %payload.subject, "contact message received");
    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse { id, message: "Message received" }),
    ))
}

#[utoipa::path(
    post,
    path = "/api/newsletter",
    tag = "newsletter",
    request_body = crate::openapi::NewsletterDoc,
    responses(
        (status = 201, description = "Subscribed"),
        (status = 422, description = "Validation failed"),
        (status = 500, description = "Persistence failure")
    )
)]
pub async fn subscribe_newsletter(
    State(state): State<ServerState>,
    ValidatedJson(payload): ValidatedJson<Newsletter>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let id = insert_record(state.store.as_ref(), RecordKind::Newsletter, &payload).await?;
    info!(%id, "newsletter subscription created");
    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse { id, message: "Subscribed" }),
    ))
}
