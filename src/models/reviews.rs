use crate::entities::reviews::ReviewWithUser;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: i64,
    pub user: ReviewerRef,
    pub rating: i32,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ReviewerRef {
    pub id: i64,
    pub name: String,
}

impl From<ReviewWithUser> for Review {
    fn from(entity: ReviewWithUser) -> Self {
        Review {
            id: entity.id,
            user: ReviewerRef {
                id: entity.user_id,
                name: entity.user_name,
            },
            rating: entity.rating,
            comment: entity.comment,
            created_at: entity.created_at.and_utc(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateReviewRequest {
    pub rating: Option<i64>,
    pub comment: Option<String>,
}
