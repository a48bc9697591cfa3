use crate::common::context::Context;
use crate::entities::grounds::{CreateGroundArgs, Ground};

const TABLE_NAME: &str = "grounds";
const READ_FIELDS: &str = r#"
id, name, location, size, price_per_hour, image, features,
is_available, average_rating, review_count, created_at"#;

pub async fn create<C: Context>(ctx: &C, args: CreateGroundArgs) -> sqlx::Result<Ground> {
    const QUERY: &str = const_str::concat!(
        "INSERT INTO ",
        TABLE_NAME,
        " (name, location, size, price_per_hour, image, features, is_available)",
        " VALUES (?, ?, ?, ?, ?, ?, ?)"
    );
    let result = sqlx::query(QUERY)
        .bind(&args.name)
        .bind(&args.location)
        .bind(&args.size)
        .bind(args.price_per_hour)
        .bind(&args.image)
        .bind(&args.features)
        .bind(args.is_available)
        .execute(ctx.db())
        .await?;
    fetch_one(ctx, result.last_insert_id() as i64).await
}

pub async fn fetch_one<C: Context>(ctx: &C, ground_id: i64) -> sqlx::Result<Ground> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        READ_FIELDS,
        " FROM ",
        TABLE_NAME,
        " WHERE id = ?"
    );
    sqlx::query_as(QUERY)
        .bind(ground_id)
        .fetch_one(ctx.db())
        .await
}

pub async fn fetch_all<C: Context>(ctx: &C) -> sqlx::Result<Vec<Ground>> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        READ_FIELDS,
        " FROM ",
        TABLE_NAME,
        " ORDER BY id"
    );
    sqlx::query_as(QUERY).fetch_all(ctx.db()).await
}

pub async fn update_rating<C: Context>(
    ctx: &C,
    ground_id: i64,
    average_rating: f64,
    review_count: i32,
) -> sqlx::Result<()> {
    const QUERY: &str = const_str::concat!(
        "UPDATE ",
        TABLE_NAME,
        " SET average_rating = ?, review_count = ? WHERE id = ?"
    );
    sqlx::query(QUERY)
        .bind(average_rating)
        .bind(review_count)
        .bind(ground_id)
        .execute(ctx.db())
        .await?;
    Ok(())
}

pub async fn count<C: Context>(ctx: &C) -> sqlx::Result<i64> {
    const QUERY: &str = const_str::concat!("SELECT COUNT(*) FROM ", TABLE_NAME);
    sqlx::query_scalar(QUERY).fetch_one(ctx.db()).await
}
