use crate::common::context::Context;
use crate::entities::bookings::{Booking, BookingWithRefs};
use chrono::NaiveDate;
use rust_decimal::Decimal;

const TABLE_NAME: &str = "bookings";
const READ_FIELDS: &str = r#"
id, user_id, ground_id, date, time, status, total_amount, created_at"#;

const JOINED_FIELDS: &str = r#"
b.id, b.user_id, u.name AS user_name, u.email AS user_email,
b.ground_id, g.name AS ground_name, g.location AS ground_location,
b.date, b.time, b.status, b.total_amount, b.created_at"#;

pub struct CreateBookingArgs {
    pub user_id: i64,
    pub ground_id: i64,
    pub date: NaiveDate,
    pub time: String,
    pub status: String,
    pub total_amount: Decimal,
}

pub async fn create<C: Context>(ctx: &C, args: CreateBookingArgs) -> sqlx::Result<Booking> {
    const QUERY: &str = const_str::concat!(
        "INSERT INTO ",
        TABLE_NAME,
        " (user_id, ground_id, date, time, status, total_amount)",
        " VALUES (?, ?, ?, ?, ?, ?)"
    );
    let result = sqlx::query(QUERY)
        .bind(args.user_id)
        .bind(args.ground_id)
        .bind(args.date)
        .bind(&args.time)
        .bind(&args.status)
        .bind(args.total_amount)
        .execute(ctx.db())
        .await?;
    fetch_one(ctx, result.last_insert_id() as i64).await
}

pub async fn fetch_one<C: Context>(ctx: &C, booking_id: i64) -> sqlx::Result<Booking> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        READ_FIELDS,
        " FROM ",
        TABLE_NAME,
        " WHERE id = ?"
    );
    sqlx::query_as(QUERY)
        .bind(booking_id)
        .fetch_one(ctx.db())
        .await
}

pub async fn fetch_all_with_refs<C: Context>(ctx: &C) -> sqlx::Result<Vec<BookingWithRefs>> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        JOINED_FIELDS,
        " FROM ",
        TABLE_NAME,
        " b INNER JOIN users u ON b.user_id = u.id",
        " INNER JOIN grounds g ON b.ground_id = g.id",
        " ORDER BY b.created_at DESC, b.id DESC"
    );
    sqlx::query_as(QUERY).fetch_all(ctx.db()).await
}

pub async fn delete<C: Context>(ctx: &C, booking_id: i64) -> sqlx::Result<bool> {
    const QUERY: &str = const_str::concat!("DELETE FROM ", TABLE_NAME, " WHERE id = ?");
    let result = sqlx::query(QUERY)
        .bind(booking_id)
        .execute(ctx.db())
        .await?;
    Ok(result.rows_affected() > 0)
}

pub async fn delete_for_user<C: Context>(ctx: &C, user_id: i64) -> sqlx::Result<()> {
    const QUERY: &str = const_str::concat!("DELETE FROM ", TABLE_NAME, " WHERE user_id = ?");
    sqlx::query(QUERY).bind(user_id).execute(ctx.db()).await?;
    Ok(())
}

pub async fn count<C: Context>(ctx: &C) -> sqlx::Result<i64> {
    const QUERY: &str = const_str::concat!("SELECT COUNT(*) FROM ", TABLE_NAME);
    sqlx::query_scalar(QUERY).fetch_one(ctx.db()).await
}
