use crate::api::RequestContext;
use crate::common::error::{ServiceResponse, ServiceResult};
use crate::common::state::AppState;
use crate::models::matches::{
    CreateMatchRequest, JoinMatchRequest, Match, MatchDeletedResponse, MatchResponse,
    UpdateMatchRequest,
};
use crate::models::users::Actor;
use crate::usecases::matches;
use axum::extract::Path;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(fetch_all).post(create))
        .route("/{match_id}", axum::routing::put(update).delete(delete))
        .route("/{match_id}/join", post(join))
}

pub async fn fetch_all(ctx: RequestContext) -> ServiceResponse<Vec<Match>> {
    let all_matches = matches::fetch_all(&ctx).await?;
    Ok(Json(all_matches))
}

pub async fn create(
    ctx: RequestContext,
    actor: Actor,
    Json(request): Json<CreateMatchRequest>,
) -> ServiceResult<(StatusCode, Json<MatchResponse>)> {
    let created = matches::create(&ctx, &actor, request).await?;
    Ok((
        StatusCode::CREATED,
        Json(MatchResponse {
            message: "Match created successfully",
            match_: created,
        }),
    ))
}

pub async fn join(
    ctx: RequestContext,
    actor: Actor,
    Path(match_id): Path<i64>,
    Json(request): Json<JoinMatchRequest>,
) -> ServiceResponse<MatchResponse> {
    let updated = matches::join(&ctx, &actor, match_id, request).await?;
    Ok(Json(MatchResponse {
        message: "Joined match successfully",
        match_: updated,
    }))
}

pub async fn update(
    ctx: RequestContext,
    actor: Actor,
    Path(match_id): Path<i64>,
    Json(request): Json<UpdateMatchRequest>,
) -> ServiceResponse<MatchResponse> {
    let updated = matches::update(&ctx, &actor, match_id, request).await?;
    Ok(Json(MatchResponse {
        message: "Match updated successfully",
        match_: updated,
    }))
}

pub async fn delete(
    ctx: RequestContext,
    actor: Actor,
    Path(match_id): Path<i64>,
) -> ServiceResponse<MatchDeletedResponse> {
    matches::delete(&ctx, &actor, match_id).await?;
    Ok(Json(MatchDeletedResponse {
        message: "Match deleted successfully",
    }))
}
