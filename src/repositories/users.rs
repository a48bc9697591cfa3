use crate::common::context::Context;
use crate::entities::users::{CreateUserArgs, User, UserWithTeam};

const TABLE_NAME: &str = "users";
const READ_FIELDS: &str = r#"
id, name, email, password_hash, role, height, position,
team_id, profile_image, created_at"#;

const JOINED_FIELDS: &str = r#"
u.id, u.name, u.email, u.role, u.height, u.position,
u.team_id, t.name AS team_name, u.profile_image, u.created_at"#;

pub async fn create<C: Context>(ctx: &C, args: CreateUserArgs) -> sqlx::Result<User> {
    const QUERY: &str = const_str::concat!(
        "INSERT INTO ",
        TABLE_NAME,
        " (name, email, password_hash, height, position, team_id, profile_image)",
        " VALUES (?, ?, ?, ?, ?, ?, ?)"
    );
    let result = sqlx::query(QUERY)
        .bind(&args.name)
        .bind(&args.email)
        .bind(&args.password_hash)
        .bind(&args.height)
        .bind(&args.position)
        .bind(args.team_id)
        .bind(&args.profile_image)
        .execute(ctx.db())
        .await?;
    fetch_one(ctx, result.last_insert_id() as i64).await
}

pub async fn fetch_one<C: Context>(ctx: &C, user_id: i64) -> sqlx::Result<User> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        READ_FIELDS,
        " FROM ",
        TABLE_NAME,
        " WHERE id = ?"
    );
    sqlx::query_as(QUERY)
        .bind(user_id)
        .fetch_one(ctx.db())
        .await
}

pub async fn fetch_optional<C: Context>(ctx: &C, user_id: i64) -> sqlx::Result<Option<User>> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        READ_FIELDS,
        " FROM ",
        TABLE_NAME,
        " WHERE id = ?"
    );
    sqlx::query_as(QUERY)
        .bind(user_id)
        .fetch_optional(ctx.db())
        .await
}

pub async fn fetch_one_by_email<C: Context>(ctx: &C, email: &str) -> sqlx::Result<Option<User>> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        READ_FIELDS,
        " FROM ",
        TABLE_NAME,
        " WHERE email = ?"
    );
    sqlx::query_as(QUERY)
        .bind(email)
        .fetch_optional(ctx.db())
        .await
}

pub async fn fetch_one_with_team<C: Context>(ctx: &C, user_id: i64) -> sqlx::Result<UserWithTeam> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        JOINED_FIELDS,
        " FROM ",
        TABLE_NAME,
        " u LEFT JOIN teams t ON u.team_id = t.id WHERE u.id = ?"
    );
    sqlx::query_as(QUERY)
        .bind(user_id)
        .fetch_one(ctx.db())
        .await
}

pub async fn fetch_all_with_teams<C: Context>(ctx: &C) -> sqlx::Result<Vec<UserWithTeam>> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        JOINED_FIELDS,
        " FROM ",
        TABLE_NAME,
        " u LEFT JOIN teams t ON u.team_id = t.id ORDER BY u.id"
    );
    sqlx::query_as(QUERY).fetch_all(ctx.db()).await
}

pub struct UpdateUserArgs {
    pub name: String,
    pub email: String,
    pub role: String,
    pub height: Option<String>,
    pub position: Option<String>,
    pub team_id: Option<i64>,
}

pub async fn update<C: Context>(ctx: &C, user_id: i64, args: UpdateUserArgs) -> sqlx::Result<()> {
    const QUERY: &str = const_str::concat!(
        "UPDATE ",
        TABLE_NAME,
        " SET name = ?, email = ?, role = ?, height = ?, position = ?, team_id = ?",
        " WHERE id = ?"
    );
    sqlx::query(QUERY)
        .bind(&args.name)
        .bind(&args.email)
        .bind(&args.role)
        .bind(&args.height)
        .bind(&args.position)
        .bind(args.team_id)
        .bind(user_id)
        .execute(ctx.db())
        .await?;
    Ok(())
}

pub async fn update_profile_image<C: Context>(
    ctx: &C,
    user_id: i64,
    profile_image: Option<&str>,
) -> sqlx::Result<()> {
    const QUERY: &str = const_str::concat!(
        "UPDATE ",
        TABLE_NAME,
        " SET profile_image = ? WHERE id = ?"
    );
    sqlx::query(QUERY)
        .bind(profile_image)
        .bind(user_id)
        .execute(ctx.db())
        .await?;
    Ok(())
}

pub async fn clear_team_members<C: Context>(ctx: &C, team_id: i64) -> sqlx::Result<()> {
    const QUERY: &str = const_str::concat!(
        "UPDATE ",
        TABLE_NAME,
        " SET team_id = NULL WHERE team_id = ?"
    );
    sqlx::query(QUERY)
        .bind(team_id)
        .execute(ctx.db())
        .await?;
    Ok(())
}

pub async fn fetch_team_member_names<C: Context>(
    ctx: &C,
    team_id: i64,
) -> sqlx::Result<Vec<String>> {
    const QUERY: &str = const_str::concat!(
        "SELECT name FROM ",
        TABLE_NAME,
        " WHERE team_id = ? ORDER BY id"
    );
    sqlx::query_scalar(QUERY)
        .bind(team_id)
        .fetch_all(ctx.db())
        .await
}

pub async fn delete<C: Context>(ctx: &C, user_id: i64) -> sqlx::Result<bool> {
    const QUERY: &str = const_str::concat!("DELETE FROM ", TABLE_NAME, " WHERE id = ?");
    let result = sqlx::query(QUERY).bind(user_id).execute(ctx.db()).await?;
    Ok(result.rows_affected() > 0)
}

pub async fn count_non_admins<C: Context>(ctx: &C) -> sqlx::Result<i64> {
    const QUERY: &str = const_str::concat!(
        "SELECT COUNT(*) FROM ",
        TABLE_NAME,
        " WHERE role != 'admin'"
    );
    sqlx::query_scalar(QUERY).fetch_one(ctx.db()).await
}
