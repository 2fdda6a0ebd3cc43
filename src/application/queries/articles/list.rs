use super::ArticleQueryService;
use crate::application::{dto::ArticleDto, error::ApplicationResult};

pub struct ListArticlesQuery {
    pub skip: u64,
    pub limit: u32,
}

impl ArticleQueryService {
    /// Page through articles in creation order. The page size is
    /// caller-controlled; no maximum is enforced.
    pub async fn list_articles(
        &self,
        query: ListArticlesQuery,
    ) -> ApplicationResult<Vec<ArticleDto>> {
        let records = self
            .read_repo
            .list(query.skip, query.limit)
            .await
            .map_err(|err| {
                tracing::error!(error = %err, "failed to list articles");
                err
            })?;
        Ok(records.into_iter().map(Into::into).collect())
    }
}
