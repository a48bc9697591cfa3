use crate::common::context::Context;
use crate::common::error::{AppError, ServiceResult, unexpected};
use crate::models::news::{NewsItem, NewsItemRequest, NewsKind};
use crate::repositories::news;

pub async fn fetch_all<C: Context>(ctx: &C) -> ServiceResult<Vec<NewsItem>> {
    let entities = news::fetch_all(ctx).await?;
    entities.into_iter().map(NewsItem::try_from).collect()
}

pub async fn create<C: Context>(ctx: &C, request: NewsItemRequest) -> ServiceResult<NewsItem> {
    let (kind, content) = validate(request)?;
    let entity = news::create(ctx, kind.as_str(), &content).await?;
    NewsItem::try_from(entity)
}

pub async fn update<C: Context>(
    ctx: &C,
    news_id: i64,
    request: NewsItemRequest,
) -> ServiceResult<NewsItem> {
    let (kind, content) = validate(request)?;
    match news::fetch_one(ctx, news_id).await {
        Ok(_) => {}
        Err(sqlx::Error::RowNotFound) => return Err(AppError::NewsNotFound),
        Err(e) => return unexpected(e),
    }
    let entity = news::update(ctx, news_id, kind.as_str(), &content).await?;
    NewsItem::try_from(entity)
}

pub async fn delete<C: Context>(ctx: &C, news_id: i64) -> ServiceResult<()> {
    let deleted = news::delete(ctx, news_id).await?;
    if !deleted {
        return Err(AppError::NewsNotFound);
    }
    Ok(())
}

fn validate(request: NewsItemRequest) -> ServiceResult<(NewsKind, String)> {
    let kind_raw = request.kind.ok_or(AppError::NewsMissingFields)?;
    let content = request
        .content
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .ok_or(AppError::NewsMissingFields)?;
    let kind = NewsKind::parse(&kind_raw).ok_or(AppError::NewsInvalidKind)?;
    Ok((kind, content))
}
