use crate::api::{RequestContext, SessionToken};
use crate::common::error::{ServiceResponse, ServiceResult};
use crate::common::state::AppState;
use crate::models::sessions::{LoginRequest, LoginResponse};
use crate::models::users::{
    Actor, AdminUpdateUserRequest, RegisterRequest, RegisterResponse, UpdateProfileRequest, User,
};
use crate::usecases::{sessions, users};
use axum::extract::Path;
use axum::http::StatusCode;
use axum::routing::{get, post, put};
use axum::{Json, Router};
use serde::Serialize;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/users", get(fetch_users))
        .route("/users/{user_id}", put(update_user).delete(delete_user))
        .route("/profile", put(update_profile))
}

pub async fn register(
    ctx: RequestContext,
    Json(request): Json<RegisterRequest>,
) -> ServiceResult<(StatusCode, Json<RegisterResponse>)> {
    let user = users::register(&ctx, request).await?;
    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            success: true,
            message: "User registered successfully",
            user,
        }),
    ))
}

pub async fn login(
    ctx: RequestContext,
    Json(request): Json<LoginRequest>,
) -> ServiceResponse<LoginResponse> {
    let (session, user) = sessions::login(&ctx, request).await?;
    Ok(Json(LoginResponse {
        token: session.token,
        user,
    }))
}

#[derive(Serialize)]
pub struct LogoutResponse {
    pub message: &'static str,
}

pub async fn logout(ctx: RequestContext, token: SessionToken) -> ServiceResponse<LogoutResponse> {
    sessions::logout(&ctx, token.0).await?;
    Ok(Json(LogoutResponse {
        message: "Logged out successfully",
    }))
}

pub async fn fetch_users(ctx: RequestContext, actor: Actor) -> ServiceResponse<Vec<User>> {
    actor.require_admin()?;
    let all_users = users::fetch_all(&ctx).await?;
    Ok(Json(all_users))
}

pub async fn update_user(
    ctx: RequestContext,
    actor: Actor,
    Path(user_id): Path<i64>,
    Json(request): Json<AdminUpdateUserRequest>,
) -> ServiceResponse<User> {
    actor.require_admin()?;
    let updated = users::admin_update(&ctx, user_id, request).await?;
    Ok(Json(updated))
}

#[derive(Serialize)]
pub struct UserDeletedResponse {
    pub message: &'static str,
}

pub async fn delete_user(
    ctx: RequestContext,
    actor: Actor,
    Path(user_id): Path<i64>,
) -> ServiceResponse<UserDeletedResponse> {
    actor.require_admin()?;
    users::admin_delete(&ctx, user_id).await?;
    Ok(Json(UserDeletedResponse {
        message: "User deleted successfully",
    }))
}

pub async fn update_profile(
    ctx: RequestContext,
    actor: Actor,
    Json(request): Json<UpdateProfileRequest>,
) -> ServiceResponse<User> {
    let updated = users::update_profile(&ctx, &actor, request).await?;
    Ok(Json(updated))
}
