use crate::common::context::Context;
use crate::entities::leagues::{League, LeagueTeam};
use chrono::NaiveDate;

const TABLE_NAME: &str = "leagues";
const READ_FIELDS: &str = r#"
id, name, description, start_date, end_date, status, created_at"#;

const MEMBERS_TABLE: &str = "league_teams";

pub struct CreateLeagueArgs {
    pub name: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: String,
}

pub async fn create<C: Context>(ctx: &C, args: CreateLeagueArgs) -> sqlx::Result<League> {
    const QUERY: &str = const_str::concat!(
        "INSERT INTO ",
        TABLE_NAME,
        " (name, description, start_date, end_date, status) VALUES (?, ?, ?, ?, ?)"
    );
    let result = sqlx::query(QUERY)
        .bind(&args.name)
        .bind(&args.description)
        .bind(args.start_date)
        .bind(args.end_date)
        .bind(&args.status)
        .execute(ctx.db())
        .await?;
    fetch_one(ctx, result.last_insert_id() as i64).await
}

pub async fn fetch_one<C: Context>(ctx: &C, league_id: i64) -> sqlx::Result<League> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        READ_FIELDS,
        " FROM ",
        TABLE_NAME,
        " WHERE id = ?"
    );
    sqlx::query_as(QUERY)
        .bind(league_id)
        .fetch_one(ctx.db())
        .await
}

pub async fn fetch_all<C: Context>(ctx: &C) -> sqlx::Result<Vec<League>> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        READ_FIELDS,
        " FROM ",
        TABLE_NAME,
        " ORDER BY start_date ASC, id ASC"
    );
    sqlx::query_as(QUERY).fetch_all(ctx.db()).await
}

pub async fn fetch_members<C: Context>(ctx: &C, league_id: i64) -> sqlx::Result<Vec<LeagueTeam>> {
    const QUERY: &str = const_str::concat!(
        "SELECT lt.league_id, lt.team_id, t.name AS team_name FROM ",
        MEMBERS_TABLE,
        " lt INNER JOIN teams t ON lt.team_id = t.id",
        " WHERE lt.league_id = ? ORDER BY t.name"
    );
    sqlx::query_as(QUERY)
        .bind(league_id)
        .fetch_all(ctx.db())
        .await
}

pub async fn is_member<C: Context>(ctx: &C, league_id: i64, team_id: i64) -> sqlx::Result<bool> {
    const QUERY: &str = const_str::concat!(
        "SELECT COUNT(*) FROM ",
        MEMBERS_TABLE,
        " WHERE league_id = ? AND team_id = ?"
    );
    let count: i64 = sqlx::query_scalar(QUERY)
        .bind(league_id)
        .bind(team_id)
        .fetch_one(ctx.db())
        .await?;
    Ok(count > 0)
}

pub async fn add_member<C: Context>(ctx: &C, league_id: i64, team_id: i64) -> sqlx::Result<()> {
    const QUERY: &str = const_str::concat!(
        "INSERT INTO ",
        MEMBERS_TABLE,
        " (league_id, team_id) VALUES (?, ?)"
    );
    sqlx::query(QUERY)
        .bind(league_id)
        .bind(team_id)
        .execute(ctx.db())
        .await?;
    Ok(())
}
