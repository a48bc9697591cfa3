use crate::common::error::AppError;
use crate::entities::news::NewsItem as NewsEntity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NewsKind {
    Text,
    Image,
    Video,
}

impl NewsKind {
    pub fn parse(value: &str) -> Option<NewsKind> {
        match value {
            "text" => Some(NewsKind::Text),
            "image" => Some(NewsKind::Image),
            "video" => Some(NewsKind::Video),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            NewsKind::Text => "text",
            NewsKind::Image => "image",
            NewsKind::Video => "video",
        }
    }
}

impl TryFrom<&str> for NewsKind {
    type Error = AppError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        NewsKind::parse(value).ok_or(AppError::InternalServerError("invalid news kind"))
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsItem {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: NewsKind,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<NewsEntity> for NewsItem {
    type Error = AppError;

    fn try_from(entity: NewsEntity) -> Result<Self, Self::Error> {
        Ok(NewsItem {
            id: entity.id,
            kind: NewsKind::try_from(entity.kind.as_str())?,
            content: entity.content,
            created_at: entity.created_at.and_utc(),
        })
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct NewsItemRequest {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub content: Option<String>,
}
