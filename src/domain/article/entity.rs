use crate::domain::article::value_objects::{
    ArticleAuthor, ArticleCategory, ArticleContent, ArticleId, ArticleStatus, ArticleTitle,
};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub content: ArticleContent,
    pub author: ArticleAuthor,
    pub publish_date: DateTime<Utc>,
    pub status: ArticleStatus,
    pub category: ArticleCategory,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fully validated payload ready for insertion; the service has already
/// assigned `id` and both timestamps.
#[derive(Debug, Clone)]
pub struct NewArticle {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub content: ArticleContent,
    pub author: ArticleAuthor,
    pub publish_date: DateTime<Utc>,
    pub status: ArticleStatus,
    pub category: ArticleCategory,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial update: only present fields reach storage. `updated_at` is always
/// set by the service.
#[derive(Debug, Clone)]
pub struct ArticleChangeSet {
    pub id: ArticleId,
    pub title: Option<ArticleTitle>,
    pub content: Option<ArticleContent>,
    pub author: Option<ArticleAuthor>,
    pub publish_date: Option<DateTime<Utc>>,
    pub status: Option<ArticleStatus>,
    pub category: Option<ArticleCategory>,
    pub updated_at: DateTime<Utc>,
}

impl ArticleChangeSet {
    pub fn new(id: ArticleId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: None,
            content: None,
            author: None,
            publish_date: None,
            status: None,
            category: None,
            updated_at,
        }
    }

    pub fn with_title(mut self, title: ArticleTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_content(mut self, content: ArticleContent) -> Self {
        self.content = Some(content);
        self
    }

    pub fn with_author(mut self, author: ArticleAuthor) -> Self {
        self.author = Some(author);
        self
    }

    pub fn with_publish_date(mut self, publish_date: DateTime<Utc>) -> Self {
        self.publish_date = Some(publish_date);
        self
    }

    pub fn with_status(mut self, status: ArticleStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_category(mut self, category: ArticleCategory) -> Self {
        self.category = Some(category);
        self
    }

    /// True when no mutable field is present. Such a changeset must be
    /// rejected before any storage call.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.content.is_none()
            && self.author.is_none()
            && self.publish_date.is_none()
            && self.status.is_none()
            && self.category.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn changeset_without_fields_is_empty() {
        let changes = ArticleChangeSet::new(ArticleId::new("a-1").unwrap(), Utc::now());
        assert!(changes.is_empty());
    }

    #[test]
    fn changeset_with_any_field_is_not_empty() {
        let changes = ArticleChangeSet::new(ArticleId::new("a-1").unwrap(), Utc::now())
            .with_status(ArticleStatus::Published);
        assert!(!changes.is_empty());

        let changes = ArticleChangeSet::new(ArticleId::new("a-1").unwrap(), Utc::now())
            .with_title(ArticleTitle::new("revised").unwrap());
        assert!(!changes.is_empty());
    }
}
