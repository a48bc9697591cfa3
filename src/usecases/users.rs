use crate::adapters::mailer;
use crate::common::context::Context;
use crate::common::error::{AppError, ServiceResult, unexpected};
use crate::entities::users::CreateUserArgs;
use crate::models::users::{
    Actor, AdminUpdateUserRequest, RegisterRequest, RegisteredUser, Role, UpdateProfileRequest,
    User,
};
use crate::repositories::{bookings, matches, teams, users};

const MIN_PASSWORD_LENGTH: usize = 6;

pub async fn register<C: Context>(
    ctx: &C,
    request: RegisterRequest,
) -> ServiceResult<RegisteredUser> {
    let name = required(request.name).ok_or(AppError::UsersMissingFields)?;
    let email = required(request.email).ok_or(AppError::UsersMissingFields)?;
    let password = request.password.ok_or(AppError::UsersMissingFields)?;
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(AppError::UsersPasswordTooShort);
    }
    if users::fetch_one_by_email(ctx, &email).await?.is_some() {
        return Err(AppError::UsersEmailTaken);
    }

    let team_id = match request.team_id {
        Some(team_id) => {
            let team_password = request.team_password.ok_or(AppError::TeamsInvalidPassword)?;
            let team = match teams::fetch_one(ctx, team_id).await {
                Ok(team) => team,
                Err(sqlx::Error::RowNotFound) => return Err(AppError::TeamsNotFound),
                Err(e) => return unexpected(e),
            };
            if !bcrypt::verify(&team_password, &team.password_hash)? {
                return Err(AppError::TeamsInvalidPassword);
            }
            Some(team.id)
        }
        None => None,
    };

    let password_hash = bcrypt::hash(&password, bcrypt::DEFAULT_COST)?;
    let user = users::create(
        ctx,
        CreateUserArgs {
            name,
            email,
            password_hash,
            height: request.height,
            position: request.position,
            team_id,
            profile_image: request.profile_image,
        },
    )
    .await?;

    // Best effort; the account exists whether or not the mail goes out.
    let (mail_to, mail_name) = (user.email.clone(), user.name.clone());
    tokio::spawn(async move {
        if let Err(e) = mailer::send_welcome(&mail_to, &mail_name).await {
            tracing::warn!("Failed to send welcome mail: {e:?}");
        }
    });

    Ok(RegisteredUser {
        name: user.name,
        email: user.email,
    })
}

pub async fn fetch_all<C: Context>(ctx: &C) -> ServiceResult<Vec<User>> {
    let entities = users::fetch_all_with_teams(ctx).await?;
    entities.into_iter().map(User::try_from).collect()
}

pub async fn admin_update<C: Context>(
    ctx: &C,
    user_id: i64,
    request: AdminUpdateUserRequest,
) -> ServiceResult<User> {
    let current = match users::fetch_one(ctx, user_id).await {
        Ok(user) => user,
        Err(sqlx::Error::RowNotFound) => return Err(AppError::UsersNotFound),
        Err(e) => return unexpected(e),
    };

    let role = match request.role {
        Some(role) => Role::parse(&role).ok_or(AppError::UsersInvalidRole)?,
        None => Role::try_from(current.role.as_str())?,
    };
    let args = users::UpdateUserArgs {
        name: required(request.name).unwrap_or(current.name),
        email: required(request.email).unwrap_or(current.email),
        role: role.as_str().to_string(),
        height: request.height.or(current.height),
        position: request.position.or(current.position),
        team_id: request.team_id.or(current.team_id),
    };
    users::update(ctx, user_id, args).await?;

    let updated = users::fetch_one_with_team(ctx, user_id).await?;
    User::try_from(updated)
}

pub async fn admin_delete<C: Context>(ctx: &C, user_id: i64) -> ServiceResult<()> {
    if let Err(e) = users::fetch_one(ctx, user_id).await {
        return match e {
            sqlx::Error::RowNotFound => Err(AppError::UsersNotFound),
            e => unexpected(e),
        };
    }
    bookings::delete_for_user(ctx, user_id).await?;
    matches::remove_player_memberships(ctx, user_id).await?;
    users::delete(ctx, user_id).await?;
    Ok(())
}

pub async fn update_profile<C: Context>(
    ctx: &C,
    actor: &Actor,
    request: UpdateProfileRequest,
) -> ServiceResult<User> {
    users::update_profile_image(ctx, actor.user_id, request.profile_image.as_deref()).await?;
    let updated = users::fetch_one_with_team(ctx, actor.user_id).await?;
    User::try_from(updated)
}

fn required(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
