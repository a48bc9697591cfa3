use crate::api::RequestContext;
use crate::common::error::{ServiceResponse, ServiceResult};
use crate::common::state::AppState;
use crate::models::teams::{CreateTeamRequest, Team, UpdateTeamRequest};
use crate::models::users::Actor;
use crate::usecases::teams;
use axum::extract::Path;
use axum::http::StatusCode;
use axum::routing::{get, put};
use axum::{Json, Router};
use serde::Serialize;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(fetch_all).post(create))
        .route("/{team_id}", put(update).delete(delete))
}

pub async fn fetch_all(ctx: RequestContext) -> ServiceResponse<Vec<Team>> {
    let all_teams = teams::fetch_all(&ctx).await?;
    Ok(Json(all_teams))
}

pub async fn create(
    ctx: RequestContext,
    _actor: Actor,
    Json(request): Json<CreateTeamRequest>,
) -> ServiceResult<(StatusCode, Json<Team>)> {
    let team = teams::create(&ctx, request).await?;
    Ok((StatusCode::CREATED, Json(team)))
}

pub async fn update(
    ctx: RequestContext,
    actor: Actor,
    Path(team_id): Path<i64>,
    Json(request): Json<UpdateTeamRequest>,
) -> ServiceResponse<Team> {
    actor.require_admin()?;
    let team = teams::update(&ctx, team_id, request).await?;
    Ok(Json(team))
}

#[derive(Serialize)]
pub struct TeamDeletedResponse {
    pub message: &'static str,
}

pub async fn delete(
    ctx: RequestContext,
    actor: Actor,
    Path(team_id): Path<i64>,
) -> ServiceResponse<TeamDeletedResponse> {
    actor.require_admin()?;
    teams::delete(&ctx, team_id).await?;
    Ok(Json(TeamDeletedResponse {
        message: "Team deleted successfully",
    }))
}
