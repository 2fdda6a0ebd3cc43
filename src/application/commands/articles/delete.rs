// src/application/commands/articles/delete.rs
use super::ArticleCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::article::ArticleId,
};

impl ArticleCommandService {
    pub async fn delete_article(&self, id: String) -> ApplicationResult<()> {
        let id = ArticleId::new(id)?;

        let deleted = self.write_repo.delete(&id).await.map_err(|err| {
            tracing::error!(error = %err, article_id = %id, "failed to delete article");
            err
        })?;
        if !deleted {
            return Err(ApplicationError::not_found("article not found"));
        }

        Ok(())
    }
}
