use crate::common::error::AppError;
use crate::entities::leagues::League as LeagueEntity;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LeagueStatus {
    Upcoming,
    Active,
    Completed,
}

impl LeagueStatus {
    pub fn parse(value: &str) -> Option<LeagueStatus> {
        match value {
            "upcoming" => Some(LeagueStatus::Upcoming),
            "active" => Some(LeagueStatus::Active),
            "completed" => Some(LeagueStatus::Completed),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            LeagueStatus::Upcoming => "upcoming",
            LeagueStatus::Active => "active",
            LeagueStatus::Completed => "completed",
        }
    }

    /// A new league is active if it has already started, upcoming otherwise.
    pub fn for_new(start_date: NaiveDate, today: NaiveDate) -> LeagueStatus {
        if start_date <= today {
            LeagueStatus::Active
        } else {
            LeagueStatus::Upcoming
        }
    }
}

impl TryFrom<&str> for LeagueStatus {
    type Error = AppError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        LeagueStatus::parse(value).ok_or(AppError::InternalServerError("invalid league status"))
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct League {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: LeagueStatus,
    pub teams: Vec<MemberTeam>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct MemberTeam {
    pub id: i64,
    pub name: String,
}

impl League {
    pub fn from_entity(
        entity: LeagueEntity,
        teams: Vec<MemberTeam>,
    ) -> Result<League, AppError> {
        Ok(League {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            start_date: entity.start_date,
            end_date: entity.end_date,
            status: LeagueStatus::try_from(entity.status.as_str())?,
            teams,
            created_at: entity.created_at.and_utc(),
        })
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateLeagueRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_league_status_follows_start_date() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 29).unwrap();
        let tomorrow = NaiveDate::from_ymd_opt(2026, 8, 30).unwrap();
        let yesterday = NaiveDate::from_ymd_opt(2026, 8, 28).unwrap();
        assert_eq!(LeagueStatus::for_new(today, today), LeagueStatus::Active);
        assert_eq!(LeagueStatus::for_new(yesterday, today), LeagueStatus::Active);
        assert_eq!(LeagueStatus::for_new(tomorrow, today), LeagueStatus::Upcoming);
    }
}
