use crate::common::context::Context;
use crate::entities::reviews::{Review, ReviewWithUser};

const TABLE_NAME: &str = "reviews";
const READ_FIELDS: &str = r#"
id, user_id, ground_id, rating, comment, created_at"#;

const JOINED_FIELDS: &str = r#"
r.id, r.user_id, u.name AS user_name, r.ground_id,
r.rating, r.comment, r.created_at"#;

pub struct CreateReviewArgs {
    pub user_id: i64,
    pub ground_id: i64,
    pub rating: i32,
    pub comment: String,
}

pub async fn create<C: Context>(ctx: &C, args: CreateReviewArgs) -> sqlx::Result<Review> {
    const QUERY: &str = const_str::concat!(
        "INSERT INTO ",
        TABLE_NAME,
        " (user_id, ground_id, rating, comment) VALUES (?, ?, ?, ?)"
    );
    const FETCH: &str = const_str::concat!(
        "SELECT ",
        READ_FIELDS,
        " FROM ",
        TABLE_NAME,
        " WHERE id = ?"
    );
    let result = sqlx::query(QUERY)
        .bind(args.user_id)
        .bind(args.ground_id)
        .bind(args.rating)
        .bind(&args.comment)
        .execute(ctx.db())
        .await?;
    sqlx::query_as(FETCH)
        .bind(result.last_insert_id() as i64)
        .fetch_one(ctx.db())
        .await
}

pub async fn fetch_for_ground<C: Context>(
    ctx: &C,
    ground_id: i64,
) -> sqlx::Result<Vec<ReviewWithUser>> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        JOINED_FIELDS,
        " FROM ",
        TABLE_NAME,
        " r INNER JOIN users u ON r.user_id = u.id",
        " WHERE r.ground_id = ? ORDER BY r.created_at DESC, r.id DESC"
    );
    sqlx::query_as(QUERY)
        .bind(ground_id)
        .fetch_all(ctx.db())
        .await
}

pub struct RatingAggregate {
    pub average: f64,
    pub count: i64,
}

pub async fn aggregate_for_ground<C: Context>(
    ctx: &C,
    ground_id: i64,
) -> sqlx::Result<RatingAggregate> {
    // AVG over an INT column yields DECIMAL; cast so it decodes as f64.
    const QUERY: &str = const_str::concat!(
        "SELECT CAST(COALESCE(AVG(rating), 0) AS DOUBLE), COUNT(*) FROM ",
        TABLE_NAME,
        " WHERE ground_id = ?"
    );
    let (average, count): (f64, i64) = sqlx::query_as(QUERY)
        .bind(ground_id)
        .fetch_one(ctx.db())
        .await?;
    Ok(RatingAggregate { average, count })
}
