use crate::common::error::AppError;
use crate::entities::sessions::Session as SessionEntity;
use crate::models::users::{Actor, Role};
use crate::settings::settings;
use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct Session {
    pub token: Uuid,
    pub user_id: i64,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Session {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        let expiry = TimeDelta::from_std(settings().session_expiry)
            .unwrap_or(TimeDelta::hours(24));
        now - self.updated_at > expiry
    }

    pub fn actor(&self) -> Actor {
        Actor {
            user_id: self.user_id,
            name: self.name.clone(),
            email: self.email.clone(),
            role: self.role,
        }
    }
}

impl TryFrom<SessionEntity> for Session {
    type Error = AppError;

    fn try_from(value: SessionEntity) -> Result<Self, Self::Error> {
        Ok(Session {
            token: value.token,
            user_id: value.user_id,
            name: value.name,
            email: value.email,
            role: Role::try_from(value.role.as_str())?,
            created_at: value.created_at,
            updated_at: value.updated_at,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: Uuid,
    pub user: crate::models::users::User,
}
