use chrono::{NaiveDate, NaiveDateTime};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct Match {
    pub id: i64,
    pub name: String,
    pub date: NaiveDate,
    pub time: String,
    pub location: String,
    pub match_type: String,
    pub max_players: i32,
    pub max_teams: Option<i32>,
    pub creator_id: i64,
    pub status: String,
    pub description: String,
    pub created_at: NaiveDateTime,
}

/// Join record joined with the player's display identity.
#[derive(Debug, FromRow)]
pub struct MatchPlayer {
    pub user_id: i64,
    pub user_name: String,
    pub user_email: String,
    pub player_name: String,
    pub team_name: String,
    pub contact_info: String,
    pub joined_at: NaiveDateTime,
}

pub struct CreateMatchArgs {
    pub name: String,
    pub date: NaiveDate,
    pub time: String,
    pub location: String,
    pub match_type: String,
    pub max_players: i32,
    pub max_teams: Option<i32>,
    pub creator_id: i64,
    pub description: String,
}

pub struct AddPlayerArgs {
    pub match_id: i64,
    pub user_id: i64,
    pub player_name: String,
    pub team_name: String,
    pub contact_info: String,
}

/// Outcome of the conditional roster append.
#[derive(Debug, PartialEq, Eq)]
pub enum JoinOutcome {
    Joined,
    Full,
    AlreadyJoined,
}
