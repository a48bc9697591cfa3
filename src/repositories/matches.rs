use crate::common::context::Context;
use crate::entities::matches::{
    AddPlayerArgs, CreateMatchArgs, JoinOutcome, Match, MatchPlayer,
};

const TABLE_NAME: &str = "matches";
const READ_FIELDS: &str = r#"
id, name, date, time, location, match_type, max_players,
max_teams, creator_id, status, description, created_at"#;

const PLAYERS_TABLE: &str = "match_players";
const PLAYER_FIELDS: &str = r#"
mp.user_id, u.name AS user_name, u.email AS user_email,
mp.player_name, mp.team_name, mp.contact_info, mp.joined_at"#;

pub async fn create<C: Context>(ctx: &C, args: CreateMatchArgs) -> sqlx::Result<Match> {
    const QUERY: &str = const_str::concat!(
        "INSERT INTO ",
        TABLE_NAME,
        " (name, date, time, location, match_type, max_players, max_teams,",
        " creator_id, description)",
        " VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)"
    );
    let result = sqlx::query(QUERY)
        .bind(&args.name)
        .bind(args.date)
        .bind(&args.time)
        .bind(&args.location)
        .bind(&args.match_type)
        .bind(args.max_players)
        .bind(args.max_teams)
        .bind(args.creator_id)
        .bind(&args.description)
        .execute(ctx.db())
        .await?;
    fetch_one(ctx, result.last_insert_id() as i64).await
}

pub async fn fetch_one<C: Context>(ctx: &C, match_id: i64) -> sqlx::Result<Match> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        READ_FIELDS,
        " FROM ",
        TABLE_NAME,
        " WHERE id = ?"
    );
    sqlx::query_as(QUERY)
        .bind(match_id)
        .fetch_one(ctx.db())
        .await
}

/// Stored times are zero-padded, so the string sort is chronological.
pub async fn fetch_all<C: Context>(ctx: &C) -> sqlx::Result<Vec<Match>> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        READ_FIELDS,
        " FROM ",
        TABLE_NAME,
        " ORDER BY date ASC, time ASC"
    );
    sqlx::query_as(QUERY).fetch_all(ctx.db()).await
}

pub struct UpdateMatchArgs {
    pub name: String,
    pub date: chrono::NaiveDate,
    pub time: String,
    pub location: String,
    pub match_type: String,
    pub max_players: i32,
    pub status: String,
    pub description: String,
}

pub async fn update<C: Context>(
    ctx: &C,
    match_id: i64,
    args: UpdateMatchArgs,
) -> sqlx::Result<Match> {
    const QUERY: &str = const_str::concat!(
        "UPDATE ",
        TABLE_NAME,
        " SET name = ?, date = ?, time = ?, location = ?, match_type = ?,",
        " max_players = ?, status = ?, description = ? WHERE id = ?"
    );
    sqlx::query(QUERY)
        .bind(&args.name)
        .bind(args.date)
        .bind(&args.time)
        .bind(&args.location)
        .bind(&args.match_type)
        .bind(args.max_players)
        .bind(&args.status)
        .bind(&args.description)
        .bind(match_id)
        .execute(ctx.db())
        .await?;
    fetch_one(ctx, match_id).await
}

pub async fn delete<C: Context>(ctx: &C, match_id: i64) -> anyhow::Result<bool> {
    const DELETE_PLAYERS: &str = const_str::concat!(
        "DELETE FROM ",
        PLAYERS_TABLE,
        " WHERE match_id = ?"
    );
    const DELETE_MATCH: &str = const_str::concat!("DELETE FROM ", TABLE_NAME, " WHERE id = ?");
    let mut tx = ctx.db().begin().await?;
    sqlx::query(DELETE_PLAYERS)
        .bind(match_id)
        .execute(&mut *tx)
        .await?;
    let result = sqlx::query(DELETE_MATCH)
        .bind(match_id)
        .execute(&mut *tx)
        .await?;
    tx.commit().await?;
    Ok(result.rows_affected() > 0)
}

/// Join order is insertion order, exposed by the auto-increment key.
pub async fn fetch_players<C: Context>(ctx: &C, match_id: i64) -> sqlx::Result<Vec<MatchPlayer>> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        PLAYER_FIELDS,
        " FROM ",
        PLAYERS_TABLE,
        " mp INNER JOIN users u ON mp.user_id = u.id",
        " WHERE mp.match_id = ? ORDER BY mp.id ASC"
    );
    sqlx::query_as(QUERY)
        .bind(match_id)
        .fetch_all(ctx.db())
        .await
}

pub async fn has_player<C: Context>(ctx: &C, match_id: i64, user_id: i64) -> sqlx::Result<bool> {
    const QUERY: &str = const_str::concat!(
        "SELECT COUNT(*) FROM ",
        PLAYERS_TABLE,
        " WHERE match_id = ? AND user_id = ?"
    );
    let count: i64 = sqlx::query_scalar(QUERY)
        .bind(match_id)
        .bind(user_id)
        .fetch_one(ctx.db())
        .await?;
    Ok(count > 0)
}

/// Conditionally appends a join record. The capacity and duplicate checks
/// run inside a transaction holding a row lock on the match, so concurrent
/// joins for the same match serialize and the roster can never exceed the
/// capacity committed at lock time. The UNIQUE(match_id, user_id) index
/// backstops the duplicate check.
pub async fn add_player<C: Context>(ctx: &C, args: AddPlayerArgs) -> anyhow::Result<JoinOutcome> {
    const LOCK_QUERY: &str = const_str::concat!(
        "SELECT max_players FROM ",
        TABLE_NAME,
        " WHERE id = ? FOR UPDATE"
    );
    const COUNT_QUERY: &str = const_str::concat!(
        "SELECT COUNT(*) FROM ",
        PLAYERS_TABLE,
        " WHERE match_id = ?"
    );
    const MEMBER_QUERY: &str = const_str::concat!(
        "SELECT COUNT(*) FROM ",
        PLAYERS_TABLE,
        " WHERE match_id = ? AND user_id = ?"
    );
    const INSERT_QUERY: &str = const_str::concat!(
        "INSERT INTO ",
        PLAYERS_TABLE,
        " (match_id, user_id, player_name, team_name, contact_info)",
        " VALUES (?, ?, ?, ?, ?)"
    );

    let mut tx = ctx.db().begin().await?;
    // Re-read the capacity under the lock; an update shrinking it may have
    // committed after the caller's pre-flight read.
    let max_players: i32 = sqlx::query_scalar(LOCK_QUERY)
        .bind(args.match_id)
        .fetch_one(&mut *tx)
        .await?;
    let joined: i64 = sqlx::query_scalar(COUNT_QUERY)
        .bind(args.match_id)
        .fetch_one(&mut *tx)
        .await?;
    if joined >= max_players.max(0) as i64 {
        return Ok(JoinOutcome::Full);
    }
    let member: i64 = sqlx::query_scalar(MEMBER_QUERY)
        .bind(args.match_id)
        .bind(args.user_id)
        .fetch_one(&mut *tx)
        .await?;
    if member > 0 {
        return Ok(JoinOutcome::AlreadyJoined);
    }
    sqlx::query(INSERT_QUERY)
        .bind(args.match_id)
        .bind(args.user_id)
        .bind(&args.player_name)
        .bind(&args.team_name)
        .bind(&args.contact_info)
        .execute(&mut *tx)
        .await?;
    tx.commit().await?;
    Ok(JoinOutcome::Joined)
}

/// Removes every join record a user holds, across all matches. Run when
/// the account is deleted so rosters and capacity counts stay in step.
pub async fn remove_player_memberships<C: Context>(ctx: &C, user_id: i64) -> sqlx::Result<()> {
    const QUERY: &str = const_str::concat!(
        "DELETE FROM ",
        PLAYERS_TABLE,
        " WHERE user_id = ?"
    );
    sqlx::query(QUERY).bind(user_id).execute(ctx.db()).await?;
    Ok(())
}

pub async fn player_count<C: Context>(ctx: &C, match_id: i64) -> sqlx::Result<i64> {
    const QUERY: &str = const_str::concat!(
        "SELECT COUNT(*) FROM ",
        PLAYERS_TABLE,
        " WHERE match_id = ?"
    );
    sqlx::query_scalar(QUERY)
        .bind(match_id)
        .fetch_one(ctx.db())
        .await
}
