use crate::api::RequestContext;
use crate::common::error::{ServiceResponse, ServiceResult};
use crate::common::state::AppState;
use crate::models::grounds::{CreateGroundRequest, Ground};
use crate::models::reviews::{CreateReviewRequest, Review};
use crate::models::users::Actor;
use crate::usecases::grounds;
use axum::extract::Path;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(fetch_all).post(create))
        .route(
            "/{ground_id}/reviews",
            get(fetch_reviews).post(create_review),
        )
}

pub async fn fetch_all(ctx: RequestContext) -> ServiceResponse<Vec<Ground>> {
    let all_grounds = grounds::fetch_all(&ctx).await?;
    Ok(Json(all_grounds))
}

pub async fn create(
    ctx: RequestContext,
    _actor: Actor,
    Json(request): Json<CreateGroundRequest>,
) -> ServiceResult<(StatusCode, Json<Ground>)> {
    let ground = grounds::create(&ctx, request).await?;
    Ok((StatusCode::CREATED, Json(ground)))
}

pub async fn fetch_reviews(
    ctx: RequestContext,
    Path(ground_id): Path<i64>,
) -> ServiceResponse<Vec<Review>> {
    let ground_reviews = grounds::fetch_reviews(&ctx, ground_id).await?;
    Ok(Json(ground_reviews))
}

pub async fn create_review(
    ctx: RequestContext,
    actor: Actor,
    Path(ground_id): Path<i64>,
    Json(request): Json<CreateReviewRequest>,
) -> ServiceResult<(StatusCode, Json<Vec<Review>>)> {
    let ground_reviews = grounds::create_review(&ctx, &actor, ground_id, request).await?;
    Ok((StatusCode::CREATED, Json(ground_reviews)))
}
