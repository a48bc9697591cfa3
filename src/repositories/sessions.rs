use crate::common::context::Context;
use crate::common::redis_json::Json;
use crate::entities::sessions::{CreateSessionArgs, Session};
use redis::AsyncCommands;
use std::ops::DerefMut;
use uuid::Uuid;

const SESSIONS_KEY: &str = "arena:sessions";

pub async fn create<C: Context>(ctx: &C, args: CreateSessionArgs) -> anyhow::Result<Session> {
    let mut redis = ctx.redis().await?;
    let now = chrono::Utc::now();
    let session = Session {
        token: Uuid::new_v4(),
        user_id: args.user_id,
        name: args.name,
        email: args.email,
        role: args.role,
        created_at: now,
        updated_at: now,
    };
    let _: () = redis
        .hset(SESSIONS_KEY, session.token, Json(&session))
        .await?;
    Ok(session)
}

pub async fn fetch_one<C: Context>(ctx: &C, token: Uuid) -> anyhow::Result<Option<Session>> {
    let mut redis = ctx.redis().await?;
    let session: Option<Json<Session>> = redis.hget(SESSIONS_KEY, token).await?;
    Ok(session.map(Json::into_inner))
}

pub async fn fetch_all<C: Context>(ctx: &C) -> anyhow::Result<impl Iterator<Item = Session>> {
    let mut redis = ctx.redis().await?;
    let sessions: Vec<Json<Session>> = redis.hvals(SESSIONS_KEY).await?;
    Ok(sessions.into_iter().map(Json::into_inner))
}

/// Slides the expiry window forward on authenticated activity.
pub async fn touch<C: Context>(ctx: &C, session: &Session) -> anyhow::Result<Session> {
    let mut redis = ctx.redis().await?;
    let refreshed = Session {
        updated_at: chrono::Utc::now(),
        ..session.clone()
    };
    let _: () = redis
        .hset(SESSIONS_KEY, refreshed.token, Json(&refreshed))
        .await?;
    Ok(refreshed)
}

pub async fn delete<C: Context>(ctx: &C, token: Uuid) -> anyhow::Result<()> {
    let mut redis = ctx.redis().await?;
    let _: () = redis.hdel(SESSIONS_KEY, token).await?;
    Ok(())
}

pub async fn delete_many<C: Context>(ctx: &C, tokens: &[Uuid]) -> anyhow::Result<()> {
    if tokens.is_empty() {
        return Ok(());
    }
    let mut redis = ctx.redis().await?;
    redis::cmd("HDEL")
        .arg(SESSIONS_KEY)
        .arg(tokens)
        .exec_async(redis.deref_mut())
        .await?;
    Ok(())
}
