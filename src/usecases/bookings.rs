use crate::common::context::Context;
use crate::common::error::{AppError, ServiceResult, unexpected};
use crate::models::bookings::{Booking, BookingDetail, CreateBookingRequest};
use crate::models::matches::parse_date;
use crate::models::users::Actor;
use crate::repositories::{bookings, grounds};

pub async fn create<C: Context>(
    ctx: &C,
    actor: &Actor,
    request: CreateBookingRequest,
) -> ServiceResult<Booking> {
    let ground_id = request.ground_id.ok_or(AppError::BookingsMissingFields)?;
    let date_raw = request
        .date
        .filter(|s| !s.trim().is_empty())
        .ok_or(AppError::BookingsMissingFields)?;
    let time = request
        .time
        .filter(|s| !s.trim().is_empty())
        .ok_or(AppError::BookingsMissingFields)?;
    let date = parse_date(&date_raw).ok_or(AppError::BookingsMissingFields)?;

    let ground = match grounds::fetch_one(ctx, ground_id).await {
        Ok(ground) => ground,
        Err(sqlx::Error::RowNotFound) => return Err(AppError::GroundsNotFound),
        Err(e) => return unexpected(e),
    };

    let entity = bookings::create(
        ctx,
        bookings::CreateBookingArgs {
            user_id: actor.user_id,
            ground_id,
            date,
            time,
            status: "confirmed".to_string(),
            total_amount: ground.price_per_hour,
        },
    )
    .await?;
    Ok(Booking::from(entity))
}

pub async fn fetch_all<C: Context>(ctx: &C) -> ServiceResult<Vec<BookingDetail>> {
    let entities = bookings::fetch_all_with_refs(ctx).await?;
    Ok(entities.into_iter().map(BookingDetail::from).collect())
}

pub async fn delete<C: Context>(ctx: &C, booking_id: i64) -> ServiceResult<()> {
    let deleted = bookings::delete(ctx, booking_id).await?;
    if !deleted {
        return Err(AppError::BookingsNotFound);
    }
    Ok(())
}
