use crate::api::RequestContext;
use crate::common::error::{ServiceResponse, ServiceResult};
use crate::common::state::AppState;
use crate::models::news::{NewsItem, NewsItemRequest};
use crate::models::users::Actor;
use crate::usecases::news;
use axum::extract::Path;
use axum::http::StatusCode;
use axum::routing::{get, put};
use axum::{Json, Router};
use serde::Serialize;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(fetch_all).post(create))
        .route("/{news_id}", put(update).delete(delete))
}

pub async fn fetch_all(ctx: RequestContext) -> ServiceResponse<Vec<NewsItem>> {
    let items = news::fetch_all(&ctx).await?;
    Ok(Json(items))
}

pub async fn create(
    ctx: RequestContext,
    actor: Actor,
    Json(request): Json<NewsItemRequest>,
) -> ServiceResult<(StatusCode, Json<NewsItem>)> {
    actor.require_admin()?;
    let item = news::create(&ctx, request).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

pub async fn update(
    ctx: RequestContext,
    actor: Actor,
    Path(news_id): Path<i64>,
    Json(request): Json<NewsItemRequest>,
) -> ServiceResponse<NewsItem> {
    actor.require_admin()?;
    let item = news::update(&ctx, news_id, request).await?;
    Ok(Json(item))
}

#[derive(Serialize)]
pub struct NewsDeletedResponse {
    pub message: &'static str,
}

pub async fn delete(
    ctx: RequestContext,
    actor: Actor,
    Path(news_id): Path<i64>,
) -> ServiceResponse<NewsDeletedResponse> {
    actor.require_admin()?;
    news::delete(&ctx, news_id).await?;
    Ok(Json(NewsDeletedResponse {
        message: "News item deleted successfully",
    }))
}
