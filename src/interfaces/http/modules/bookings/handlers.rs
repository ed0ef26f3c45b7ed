//! Booking HTTP handlers
//!
//! Thin translation layer: extract the acting user, call the service,
//! wrap the outcome in [`ApiResponse`]. All decisions live in the service
//! and the state engine.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use crate::application::{BookingDraft, BookingService};
use crate::interfaces::http::common::{reject, ApiResponse, EmptyData, ValidatedJson, XUserId};
use crate::shared::Pagination;

use super::dto::*;

/// Application state for booking handlers.
#[derive(Clone)]
pub struct BookingAppState {
    pub service: Arc<BookingService>,
}

type Reply<T> = Result<Json<ApiResponse<T>>, (StatusCode, Json<ApiResponse<T>>)>;

#[utoipa::path(
    get,
    path = "/bookings/{booking_id}",
    tag = "Bookings",
    params(
        ("booking_id" = i64, Path, description = "Booking ID"),
        ("X-User-Id" = i64, Header, description = "Acting user ID")
    ),
    responses(
        (status = 200, description = "Booking details", body = ApiResponse<BookingInfoDto>),
        (status = 404, description = "Not found or not visible to this user")
    )
)]
pub async fn get_booking(
    State(state): State<BookingAppState>,
    XUserId(user_id): XUserId,
    Path(booking_id): Path<i64>,
) -> Reply<BookingInfoDto> {
    let info = state
        .service
        .find_by_id(user_id, booking_id)
        .await
        .map_err(reject)?;
    Ok(Json(ApiResponse::success(info.into())))
}

#[utoipa::path(
    get,
    path = "/bookings",
    tag = "Bookings",
    params(
        ListBookingsParams,
        ("X-User-Id" = i64, Header, description = "Acting user ID")
    ),
    responses(
        (status = 200, description = "Bookings made by the user, newest start first", body = ApiResponse<Vec<BookingInfoDto>>),
        (status = 400, description = "Unknown state filter"),
        (status = 404, description = "User not found")
    )
)]
pub async fn list_bookings(
    State(state): State<BookingAppState>,
    XUserId(user_id): XUserId,
    Query(params): Query<ListBookingsParams>,
) -> Reply<Vec<BookingInfoDto>> {
    let page = Pagination::new(params.from, params.size);
    let infos = state
        .service
        .find_all_by_booker(user_id, &params.state, page)
        .await
        .map_err(reject)?;
    Ok(Json(ApiResponse::success(
        infos.into_iter().map(Into::into).collect(),
    )))
}

#[utoipa::path(
    get,
    path = "/bookings/owner",
    tag = "Bookings",
    params(
        ListBookingsParams,
        ("X-User-Id" = i64, Header, description = "Acting user ID")
    ),
    responses(
        (status = 200, description = "Bookings against the user's items, newest start first", body = ApiResponse<Vec<BookingInfoDto>>),
        (status = 400, description = "Unknown state filter"),
        (status = 404, description = "User not found")
    )
)]
pub async fn list_owner_bookings(
    State(state): State<BookingAppState>,
    XUserId(user_id): XUserId,
    Query(params): Query<ListBookingsParams>,
) -> Reply<Vec<BookingInfoDto>> {
    let page = Pagination::new(params.from, params.size);
    let infos = state
        .service
        .find_all_by_item_owner(user_id, &params.state, page)
        .await
        .map_err(reject)?;
    Ok(Json(ApiResponse::success(
        infos.into_iter().map(Into::into).collect(),
    )))
}

#[utoipa::path(
    post,
    path = "/bookings",
    tag = "Bookings",
    params(("X-User-Id" = i64, Header, description = "Acting user ID")),
    request_body = CreateBookingRequest,
    responses(
        (status = 200, description = "Booking created in WAITING status", body = ApiResponse<BookingInfoDto>),
        (status = 400, description = "Invalid window or unavailable item"),
        (status = 403, description = "Requester owns the item"),
        (status = 404, description = "User or item not found"),
        (status = 422, description = "Request body failed validation")
    )
)]
pub async fn create_booking(
    State(state): State<BookingAppState>,
    XUserId(user_id): XUserId,
    ValidatedJson(request): ValidatedJson<CreateBookingRequest>,
) -> Reply<BookingInfoDto> {
    let draft = BookingDraft {
        start: request.start,
        end: request.end,
        item_id: request.item_id,
    };
    let info = state.service.save(draft, user_id).await.map_err(reject)?;
    Ok(Json(ApiResponse::success(info.into())))
}

#[utoipa::path(
    patch,
    path = "/bookings/{booking_id}",
    tag = "Bookings",
    params(
        ("booking_id" = i64, Path, description = "Booking ID"),
        DecisionParams,
        ("X-User-Id" = i64, Header, description = "Acting user ID")
    ),
    responses(
        (status = 200, description = "Updated booking", body = ApiResponse<BookingInfoDto>),
        (status = 400, description = "Booking already decided"),
        (status = 403, description = "Acting user does not own the item"),
        (status = 404, description = "Booking not found")
    )
)]
pub async fn decide_booking(
    State(state): State<BookingAppState>,
    XUserId(user_id): XUserId,
    Path(booking_id): Path<i64>,
    Query(params): Query<DecisionParams>,
) -> Reply<BookingInfoDto> {
    let info = state
        .service
        .update(user_id, booking_id, params.approved)
        .await
        .map_err(reject)?;
    Ok(Json(ApiResponse::success(info.into())))
}

#[utoipa::path(
    delete,
    path = "/bookings/{booking_id}",
    tag = "Bookings",
    params(
        ("booking_id" = i64, Path, description = "Booking ID"),
        ("X-User-Id" = i64, Header, description = "Acting user ID")
    ),
    responses(
        (status = 200, description = "Booking deleted", body = ApiResponse<EmptyData>),
        (status = 404, description = "Not found or not visible to this user")
    )
)]
pub async fn delete_booking(
    State(state): State<BookingAppState>,
    XUserId(user_id): XUserId,
    Path(booking_id): Path<i64>,
) -> Reply<EmptyData> {
    state
        .service
        .delete_by_id(user_id, booking_id)
        .await
        .map_err(reject)?;
    Ok(Json(ApiResponse::success(EmptyData {})))
}
