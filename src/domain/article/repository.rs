use crate::domain::article::entity::{Article, ArticleChangeSet, NewArticle};
use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    /// Insert a fully populated article. The backing store enforces
    /// uniqueness of the service-assigned id; a collision surfaces as
    /// `DomainError::Conflict`.
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;

    /// Apply the present fields of the changeset. Returns whether a record
    /// matched; the caller decides what a miss means.
    async fn apply(&self, changes: ArticleChangeSet) -> DomainResult<bool>;

    /// Hard delete. Returns whether a record was removed.
    async fn delete(&self, id: &ArticleId) -> DomainResult<bool>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: &ArticleId) -> DomainResult<Option<Article>>;

    /// Page of articles ordered by creation time ascending (insertion
    /// order, ties broken by store identity). `limit` is caller-controlled
    /// with no upper bound.
    async fn list(&self, skip: u64, limit: u32) -> DomainResult<Vec<Article>>;
}
