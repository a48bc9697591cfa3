use crate::api::RequestContext;
use crate::common::error::{ServiceResponse, ServiceResult};
use crate::common::state::AppState;
use crate::models::bookings::{Booking, BookingDetail, CreateBookingRequest};
use crate::models::users::Actor;
use crate::usecases::bookings;
use axum::extract::Path;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(fetch_all).post(create))
        .route("/{booking_id}", axum::routing::delete(delete))
}

pub async fn create(
    ctx: RequestContext,
    actor: Actor,
    Json(request): Json<CreateBookingRequest>,
) -> ServiceResult<(StatusCode, Json<Booking>)> {
    let booking = bookings::create(&ctx, &actor, request).await?;
    Ok((StatusCode::CREATED, Json(booking)))
}

pub async fn fetch_all(ctx: RequestContext, actor: Actor) -> ServiceResponse<Vec<BookingDetail>> {
    actor.require_admin()?;
    let all_bookings = bookings::fetch_all(&ctx).await?;
    Ok(Json(all_bookings))
}

#[derive(Serialize)]
pub struct BookingDeletedResponse {
    pub message: &'static str,
}

pub async fn delete(
    ctx: RequestContext,
    actor: Actor,
    Path(booking_id): Path<i64>,
) -> ServiceResponse<BookingDeletedResponse> {
    actor.require_admin()?;
    bookings::delete(&ctx, booking_id).await?;
    Ok(Json(BookingDeletedResponse {
        message: "Booking deleted successfully",
    }))
}
