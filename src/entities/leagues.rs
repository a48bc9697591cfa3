use chrono::{NaiveDate, NaiveDateTime};
use sqlx::FromRow;

#[derive(Debug, FromRow)]
pub struct League {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: String,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, FromRow)]
pub struct LeagueTeam {
    pub league_id: i64,
    pub team_id: i64,
    pub team_name: String,
}
