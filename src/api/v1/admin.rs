use crate::api::RequestContext;
use crate::common::error::ServiceResponse;
use crate::common::state::AppState;
use crate::models::users::Actor;
use crate::usecases::admin;
use axum::routing::get;
use axum::{Json, Router};

pub fn router() -> Router<AppState> {
    Router::new().route("/stats", get(fetch_stats))
}

pub async fn fetch_stats(
    ctx: RequestContext,
    actor: Actor,
) -> ServiceResponse<admin::PlatformStats> {
    actor.require_admin()?;
    let stats = admin::fetch_stats(&ctx).await?;
    Ok(Json(stats))
}
