use chrono::NaiveDateTime;
use sqlx::FromRow;

#[derive(Debug, FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub height: Option<String>,
    pub position: Option<String>,
    pub team_id: Option<i64>,
    pub profile_image: Option<String>,
    pub created_at: NaiveDateTime,
}

/// User row joined with the name of its team, for admin listings.
#[derive(Debug, FromRow)]
pub struct UserWithTeam {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: String,
    pub height: Option<String>,
    pub position: Option<String>,
    pub team_id: Option<i64>,
    pub team_name: Option<String>,
    pub profile_image: Option<String>,
    pub created_at: NaiveDateTime,
}

pub struct CreateUserArgs {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub height: Option<String>,
    pub position: Option<String>,
    pub team_id: Option<i64>,
    pub profile_image: Option<String>,
}
