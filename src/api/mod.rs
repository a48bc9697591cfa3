use crate::common::context::Context;
use crate::common::error::AppError;
use crate::common::init;
use crate::common::redis_pool::{PoolResult, RedisPool};
use crate::common::state::AppState;
use crate::models::users::Actor;
use crate::settings::AppSettings;
use crate::usecases::sessions;
use async_trait::async_trait;
use axum::Router;
use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use sqlx::{MySql, Pool};
use tracing::info;
use uuid::Uuid;

pub mod v1;

pub struct RequestContext {
    pub db: Pool<MySql>,
    pub redis: RedisPool,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .nest("/auth", v1::auth::router())
        .nest("/matches", v1::matches::router())
        .nest("/teams", v1::teams::router())
        .nest("/grounds", v1::grounds::router())
        .nest("/leagues", v1::leagues::router())
        .nest("/news", v1::news::router())
        .nest("/bookings", v1::bookings::router())
        .nest("/admin", v1::admin::router())
}

pub async fn serve(settings: &AppSettings) -> anyhow::Result<()> {
    let state = init::initialize_state(settings).await?;
    let app = router().with_state(state);
    let addr = (settings.app_host, settings.app_port);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Serving on {}:{}", settings.app_host, settings.app_port);
    axum::serve(listener, app).await?;
    Ok(())
}

impl FromRequestParts<AppState> for RequestContext {
    type Rejection = AppError;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(Self {
            db: state.db.clone(),
            redis: state.redis.clone(),
        })
    }
}

#[async_trait]
impl Context for RequestContext {
    fn db(&self) -> &Pool<MySql> {
        &self.db
    }

    async fn redis(&self) -> PoolResult {
        self.redis.get().await
    }
}

/// Bearer tokens are session ids; anything else is a 401.
fn bearer_token(parts: &Parts) -> Result<Uuid, AppError> {
    let header = parts
        .headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or(AppError::Unauthorized)?;
    let token = header
        .strip_prefix("Bearer ")
        .ok_or(AppError::Unauthorized)?;
    Uuid::parse_str(token.trim()).map_err(|_| AppError::Unauthorized)
}

/// The raw session token, for endpoints that act on the session itself.
pub struct SessionToken(pub Uuid);

impl FromRequestParts<AppState> for SessionToken {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(SessionToken(bearer_token(parts)?))
    }
}

impl FromRequestParts<AppState> for Actor {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)?;
        let ctx = RequestContext::from_request_parts(parts, state).await?;
        let session = sessions::authenticate(&ctx, token).await?;
        Ok(session.actor())
    }
}
