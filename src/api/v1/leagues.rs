use crate::api::RequestContext;
use crate::common::error::{ServiceResponse, ServiceResult};
use crate::common::state::AppState;
use crate::models::leagues::{CreateLeagueRequest, League};
use crate::models::users::Actor;
use crate::usecases::leagues;
use axum::extract::Path;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(fetch_all).post(create))
        .route("/{league_id}/join", post(join))
}

pub async fn fetch_all(ctx: RequestContext) -> ServiceResponse<Vec<League>> {
    let all_leagues = leagues::fetch_all(&ctx).await?;
    Ok(Json(all_leagues))
}

pub async fn create(
    ctx: RequestContext,
    _actor: Actor,
    Json(request): Json<CreateLeagueRequest>,
) -> ServiceResult<(StatusCode, Json<League>)> {
    let league = leagues::create(&ctx, request).await?;
    Ok((StatusCode::CREATED, Json(league)))
}

pub async fn join(
    ctx: RequestContext,
    actor: Actor,
    Path(league_id): Path<i64>,
) -> ServiceResponse<League> {
    let league = leagues::join(&ctx, &actor, league_id).await?;
    Ok(Json(league))
}
