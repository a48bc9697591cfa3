use crate::common::error::AppError;
use crate::entities::users::{User as UserEntity, UserWithTeam};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Customer,
    Team,
    Admin,
}

impl Role {
    pub fn parse(value: &str) -> Option<Role> {
        match value {
            "customer" => Some(Role::Customer),
            "team" => Some(Role::Team),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Role::Customer => "customer",
            Role::Team => "team",
            Role::Admin => "admin",
        }
    }
}

impl TryFrom<&str> for Role {
    type Error = AppError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Role::parse(value).ok_or(AppError::InternalServerError("invalid role value"))
    }
}

/// The authenticated caller, resolved from the bearer token.
#[derive(Debug, Clone)]
pub struct Actor {
    pub user_id: i64,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl Actor {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    pub fn require_admin(&self) -> Result<(), AppError> {
        match self.is_admin() {
            true => Ok(()),
            false => Err(AppError::Forbidden),
        }
    }
}

/// Single source of truth for match mutation rights: the creator owns the
/// match, admins retain override rights.
pub fn can_mutate_match(actor: &Actor, creator_id: i64) -> bool {
    actor.is_admin() || actor.user_id == creator_id
}

/// Display identity attached to resolved references (creators, rosters).
#[derive(Debug, Clone, Serialize)]
pub struct UserDisplay {
    pub id: i64,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TeamRef {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub height: Option<String>,
    pub position: Option<String>,
    pub team: Option<TeamRef>,
    pub profile_image: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<UserWithTeam> for User {
    type Error = AppError;

    fn try_from(value: UserWithTeam) -> Result<Self, Self::Error> {
        let team = match (value.team_id, value.team_name) {
            (Some(id), Some(name)) => Some(TeamRef { id, name }),
            _ => None,
        };
        Ok(User {
            id: value.id,
            name: value.name,
            email: value.email,
            role: Role::try_from(value.role.as_str())?,
            height: value.height,
            position: value.position,
            team,
            profile_image: value.profile_image,
            created_at: value.created_at.and_utc(),
        })
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegisterRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub height: Option<String>,
    pub position: Option<String>,
    pub profile_image: Option<String>,
    pub team_id: Option<i64>,
    pub team_password: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RegisteredUser {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub success: bool,
    pub message: &'static str,
    pub user: RegisteredUser,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdminUpdateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub height: Option<String>,
    pub position: Option<String>,
    pub role: Option<String>,
    pub team_id: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateProfileRequest {
    pub profile_image: Option<String>,
}

impl UserEntity {
    pub fn display(&self) -> UserDisplay {
        UserDisplay {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn actor(user_id: i64, role: Role) -> Actor {
        Actor {
            user_id,
            name: "Test".to_string(),
            email: "test@example.com".to_string(),
            role,
        }
    }

    #[test]
    fn creator_can_mutate_own_match() {
        assert!(can_mutate_match(&actor(7, Role::Customer), 7));
    }

    #[test]
    fn admin_can_mutate_any_match() {
        assert!(can_mutate_match(&actor(1, Role::Admin), 7));
    }

    #[test]
    fn other_users_cannot_mutate() {
        assert!(!can_mutate_match(&actor(2, Role::Customer), 7));
        assert!(!can_mutate_match(&actor(2, Role::Team), 7));
    }

    #[test]
    fn role_round_trips() {
        for role in [Role::Customer, Role::Team, Role::Admin] {
            assert_eq!(Role::parse(role.as_str()), Some(role));
        }
        assert_eq!(Role::parse("superuser"), None);
    }
}
