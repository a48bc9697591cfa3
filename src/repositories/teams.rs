use crate::common::context::Context;
use crate::entities::teams::{Team, TeamWithLeague};

const TABLE_NAME: &str = "teams";
const READ_FIELDS: &str = r#"
id, name, captain, password_hash, logo, current_league_id,
matches_played, wins, created_at"#;

const JOINED_FIELDS: &str = r#"
t.id, t.name, t.captain, t.logo, t.current_league_id,
l.name AS league_name, t.matches_played, t.wins, t.created_at"#;

pub struct CreateTeamArgs {
    pub name: String,
    pub captain: String,
    pub password_hash: String,
    pub logo: Option<String>,
}

pub async fn create<C: Context>(ctx: &C, args: CreateTeamArgs) -> sqlx::Result<Team> {
    const QUERY: &str = const_str::concat!(
        "INSERT INTO ",
        TABLE_NAME,
        " (name, captain, password_hash, logo) VALUES (?, ?, ?, ?)"
    );
    let result = sqlx::query(QUERY)
        .bind(&args.name)
        .bind(&args.captain)
        .bind(&args.password_hash)
        .bind(&args.logo)
        .execute(ctx.db())
        .await?;
    fetch_one(ctx, result.last_insert_id() as i64).await
}

pub async fn fetch_one<C: Context>(ctx: &C, team_id: i64) -> sqlx::Result<Team> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        READ_FIELDS,
        " FROM ",
        TABLE_NAME,
        " WHERE id = ?"
    );
    sqlx::query_as(QUERY)
        .bind(team_id)
        .fetch_one(ctx.db())
        .await
}

pub async fn fetch_one_with_league<C: Context>(
    ctx: &C,
    team_id: i64,
) -> sqlx::Result<TeamWithLeague> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        JOINED_FIELDS,
        " FROM ",
        TABLE_NAME,
        " t LEFT JOIN leagues l ON t.current_league_id = l.id WHERE t.id = ?"
    );
    sqlx::query_as(QUERY)
        .bind(team_id)
        .fetch_one(ctx.db())
        .await
}

pub async fn fetch_all_with_leagues<C: Context>(ctx: &C) -> sqlx::Result<Vec<TeamWithLeague>> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        JOINED_FIELDS,
        " FROM ",
        TABLE_NAME,
        " t LEFT JOIN leagues l ON t.current_league_id = l.id ORDER BY t.id"
    );
    sqlx::query_as(QUERY).fetch_all(ctx.db()).await
}

pub struct UpdateTeamArgs {
    pub name: String,
    pub captain: String,
    pub logo: Option<String>,
}

pub async fn update<C: Context>(ctx: &C, team_id: i64, args: UpdateTeamArgs) -> sqlx::Result<()> {
    const QUERY: &str = const_str::concat!(
        "UPDATE ",
        TABLE_NAME,
        " SET name = ?, captain = ?, logo = ? WHERE id = ?"
    );
    sqlx::query(QUERY)
        .bind(&args.name)
        .bind(&args.captain)
        .bind(&args.logo)
        .bind(team_id)
        .execute(ctx.db())
        .await?;
    Ok(())
}

pub async fn set_current_league<C: Context>(
    ctx: &C,
    team_id: i64,
    league_id: i64,
) -> sqlx::Result<()> {
    const QUERY: &str = const_str::concat!(
        "UPDATE ",
        TABLE_NAME,
        " SET current_league_id = ? WHERE id = ?"
    );
    sqlx::query(QUERY)
        .bind(league_id)
        .bind(team_id)
        .execute(ctx.db())
        .await?;
    Ok(())
}

pub async fn delete<C: Context>(ctx: &C, team_id: i64) -> sqlx::Result<bool> {
    const QUERY: &str = const_str::concat!("DELETE FROM ", TABLE_NAME, " WHERE id = ?");
    let result = sqlx::query(QUERY).bind(team_id).execute(ctx.db()).await?;
    Ok(result.rows_affected() > 0)
}

pub async fn count<C: Context>(ctx: &C) -> sqlx::Result<i64> {
    const QUERY: &str = const_str::concat!("SELECT COUNT(*) FROM ", TABLE_NAME);
    sqlx::query_scalar(QUERY).fetch_one(ctx.db()).await
}
