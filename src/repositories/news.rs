use crate::common::context::Context;
use crate::entities::news::NewsItem;

const TABLE_NAME: &str = "news";
const READ_FIELDS: &str = "id, kind, content, created_at";

pub async fn create<C: Context>(ctx: &C, kind: &str, content: &str) -> sqlx::Result<NewsItem> {
    const QUERY: &str = const_str::concat!(
        "INSERT INTO ",
        TABLE_NAME,
        " (kind, content) VALUES (?, ?)"
    );
    let result = sqlx::query(QUERY)
        .bind(kind)
        .bind(content)
        .execute(ctx.db())
        .await?;
    fetch_one(ctx, result.last_insert_id() as i64).await
}

pub async fn fetch_one<C: Context>(ctx: &C, news_id: i64) -> sqlx::Result<NewsItem> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        READ_FIELDS,
        " FROM ",
        TABLE_NAME,
        " WHERE id = ?"
    );
    sqlx::query_as(QUERY)
        .bind(news_id)
        .fetch_one(ctx.db())
        .await
}

pub async fn fetch_all<C: Context>(ctx: &C) -> sqlx::Result<Vec<NewsItem>> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        READ_FIELDS,
        " FROM ",
        TABLE_NAME,
        " ORDER BY created_at DESC, id DESC"
    );
    sqlx::query_as(QUERY).fetch_all(ctx.db()).await
}

pub async fn update<C: Context>(
    ctx: &C,
    news_id: i64,
    kind: &str,
    content: &str,
) -> sqlx::Result<NewsItem> {
    const QUERY: &str = const_str::concat!(
        "UPDATE ",
        TABLE_NAME,
        " SET kind = ?, content = ? WHERE id = ?"
    );
    sqlx::query(QUERY)
        .bind(kind)
        .bind(content)
        .bind(news_id)
        .execute(ctx.db())
        .await?;
    fetch_one(ctx, news_id).await
}

pub async fn delete<C: Context>(ctx: &C, news_id: i64) -> sqlx::Result<bool> {
    const QUERY: &str = const_str::concat!("DELETE FROM ", TABLE_NAME, " WHERE id = ?");
    let result = sqlx::query(QUERY).bind(news_id).execute(ctx.db()).await?;
    Ok(result.rows_affected() > 0)
}
