use crate::common::context::Context;
use crate::common::error::{AppError, ServiceResult};
use crate::entities::sessions::CreateSessionArgs;
use crate::models::sessions::{LoginRequest, Session};
use crate::models::users::User;
use crate::repositories::sessions;
use crate::repositories::users;
use chrono::Utc;
use uuid::Uuid;

pub async fn login<C: Context>(ctx: &C, request: LoginRequest) -> ServiceResult<(Session, User)> {
    let email = request.email.ok_or(AppError::UsersInvalidCredentials)?;
    let password = request.password.ok_or(AppError::UsersInvalidCredentials)?;

    let user = users::fetch_one_by_email(ctx, &email)
        .await?
        .ok_or(AppError::UsersInvalidCredentials)?;
    let password_valid = bcrypt::verify(&password, &user.password_hash)?;
    if !password_valid {
        return Err(AppError::UsersInvalidCredentials);
    }

    let session = sessions::create(
        ctx,
        CreateSessionArgs {
            user_id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role.clone(),
        },
    )
    .await?;
    let user = User::try_from(users::fetch_one_with_team(ctx, user.id).await?)?;
    Ok((Session::try_from(session)?, user))
}

pub async fn logout<C: Context>(ctx: &C, token: Uuid) -> ServiceResult<()> {
    sessions::delete(ctx, token).await?;
    Ok(())
}

/// Resolves a bearer token to a live session, sliding its expiry window.
/// Expired sessions are reaped on sight rather than waiting for the cron.
pub async fn authenticate<C: Context>(ctx: &C, token: Uuid) -> ServiceResult<Session> {
    let entity = sessions::fetch_one(ctx, token)
        .await?
        .ok_or(AppError::Unauthorized)?;
    let session = Session::try_from(entity.clone())?;
    if session.is_expired(Utc::now()) {
        sessions::delete(ctx, token).await?;
        return Err(AppError::Unauthorized);
    }
    sessions::touch(ctx, &entity).await?;
    Ok(session)
}
