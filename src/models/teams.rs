use crate::entities::teams::TeamWithLeague;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct LeagueRef {
    pub id: i64,
    pub name: String,
}

/// Team as served to clients. The password hash never leaves the
/// repository layer.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: i64,
    pub name: String,
    pub captain: String,
    pub logo: Option<String>,
    pub current_league: Option<LeagueRef>,
    pub players: Vec<String>,
    pub matches_played: i32,
    pub wins: i32,
    pub created_at: DateTime<Utc>,
}

impl Team {
    pub fn from_entity(entity: TeamWithLeague, players: Vec<String>) -> Team {
        let current_league = match (entity.current_league_id, entity.league_name) {
            (Some(id), Some(name)) => Some(LeagueRef { id, name }),
            _ => None,
        };
        Team {
            id: entity.id,
            name: entity.name,
            captain: entity.captain,
            logo: entity.logo,
            current_league,
            players,
            matches_played: entity.matches_played,
            wins: entity.wins,
            created_at: entity.created_at.and_utc(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateTeamRequest {
    pub name: Option<String>,
    pub captain: Option<String>,
    pub password: Option<String>,
    pub logo: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateTeamRequest {
    pub name: Option<String>,
    pub captain: Option<String>,
    pub logo: Option<String>,
}
