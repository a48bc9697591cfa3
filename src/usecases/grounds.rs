use crate::common::context::Context;
use crate::common::error::{AppError, ServiceResult, unexpected};
use crate::entities::grounds::CreateGroundArgs;
use crate::models::grounds::{CreateGroundRequest, Ground, parse_price};
use crate::models::reviews::{CreateReviewRequest, Review};
use crate::models::users::Actor;
use crate::repositories::{grounds, reviews};

pub async fn fetch_all<C: Context>(ctx: &C) -> ServiceResult<Vec<Ground>> {
    let entities = grounds::fetch_all(ctx).await?;
    Ok(entities.into_iter().map(Ground::from).collect())
}

pub async fn create<C: Context>(ctx: &C, request: CreateGroundRequest) -> ServiceResult<Ground> {
    let name = required(request.name).ok_or(AppError::GroundsMissingFields)?;
    let location = required(request.location).ok_or(AppError::GroundsMissingFields)?;
    let size = required(request.size).ok_or(AppError::GroundsMissingFields)?;
    let price_raw = request.price_per_hour.ok_or(AppError::GroundsMissingFields)?;
    let price_per_hour = parse_price(&price_raw)?;

    let entity = grounds::create(
        ctx,
        CreateGroundArgs {
            name,
            location,
            size,
            price_per_hour,
            image: request.image,
            features: request.features.map(|f| f.join()).unwrap_or_default(),
            is_available: request.is_available.unwrap_or(true),
        },
    )
    .await?;
    Ok(Ground::from(entity))
}

pub async fn fetch_reviews<C: Context>(ctx: &C, ground_id: i64) -> ServiceResult<Vec<Review>> {
    fetch_ground(ctx, ground_id).await?;
    let entities = reviews::fetch_for_ground(ctx, ground_id).await?;
    Ok(entities.into_iter().map(Review::from).collect())
}

pub async fn create_review<C: Context>(
    ctx: &C,
    actor: &Actor,
    ground_id: i64,
    request: CreateReviewRequest,
) -> ServiceResult<Vec<Review>> {
    let rating = match request.rating {
        Some(rating @ 1..=5) => rating as i32,
        _ => return Err(AppError::ReviewsInvalidRating),
    };
    fetch_ground(ctx, ground_id).await?;

    reviews::create(
        ctx,
        reviews::CreateReviewArgs {
            user_id: actor.user_id,
            ground_id,
            rating,
            comment: request.comment.unwrap_or_default(),
        },
    )
    .await?;

    // The stored aggregate keeps list responses cheap.
    let aggregate = reviews::aggregate_for_ground(ctx, ground_id).await?;
    grounds::update_rating(ctx, ground_id, aggregate.average, aggregate.count as i32).await?;

    let entities = reviews::fetch_for_ground(ctx, ground_id).await?;
    Ok(entities.into_iter().map(Review::from).collect())
}

async fn fetch_ground<C: Context>(ctx: &C, ground_id: i64) -> ServiceResult<()> {
    match grounds::fetch_one(ctx, ground_id).await {
        Ok(_) => Ok(()),
        Err(sqlx::Error::RowNotFound) => Err(AppError::GroundsNotFound),
        Err(e) => unexpected(e),
    }
}

fn required(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
