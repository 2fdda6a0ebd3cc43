use crate::domain::article::{Article, ArticleCategory, ArticleStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Wire representation of an article. Field names follow the public JSON
/// contract, hence camelCase.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDto {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: String,
    pub publish_date: DateTime<Utc>,
    pub status: ArticleStatus,
    pub category: ArticleCategory,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            title: article.title.into(),
            content: article.content.into(),
            author: article.author.into(),
            publish_date: article.publish_date,
            status: article.status,
            category: article.category,
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}
