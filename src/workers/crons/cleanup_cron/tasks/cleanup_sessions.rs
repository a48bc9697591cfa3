use crate::common::context::Context;
use crate::common::error::ServiceResult;
use crate::models::sessions::Session;
use crate::repositories::sessions;
use chrono::Utc;
use tracing::info;

/// Reaps sessions past their expiry window. Authentication also deletes
/// expired sessions on sight; this sweep catches the ones nobody presents
/// again.
pub async fn cleanup_sessions<C: Context>(ctx: &C) -> ServiceResult<usize> {
    let now = Utc::now();
    let mut expired_tokens = vec![];
    for entity in sessions::fetch_all(ctx).await? {
        let session = Session::try_from(entity)?;
        if session.is_expired(now) {
            info!(
                token = session.token.to_string(),
                user_id = session.user_id,
                "Session expired..."
            );
            expired_tokens.push(session.token);
        }
    }
    let reaped = expired_tokens.len();
    sessions::delete_many(ctx, &expired_tokens).await?;
    Ok(reaped)
}
