// src/application/commands/articles/update.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{
        ArticleAuthor, ArticleChangeSet, ArticleContent, ArticleId, ArticleTitle,
    },
};
use chrono::{DateTime, Utc};

#[derive(Debug, Default)]
pub struct UpdateArticleCommand {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    pub publish_date: Option<DateTime<Utc>>,
    pub status: Option<String>,
    pub category: Option<String>,
}

impl ArticleCommandService {
    pub async fn update_article(
        &self,
        id: String,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(id)?;
        let mut changes = ArticleChangeSet::new(id.clone(), self.clock.now());

        if let Some(title) = command.title {
            changes = changes.with_title(ArticleTitle::new(title)?);
        }
        if let Some(content) = command.content {
            changes = changes.with_content(ArticleContent::new(content)?);
        }
        if let Some(author) = command.author {
            changes = changes.with_author(ArticleAuthor::new(author)?);
        }
        if let Some(publish_date) = command.publish_date {
            changes = changes.with_publish_date(publish_date);
        }
        if let Some(status) = command.status {
            changes = changes.with_status(status.parse()?);
        }
        if let Some(category) = command.category {
            changes = changes.with_category(category.parse()?);
        }

        // Rejected before any storage call.
        if changes.is_empty() {
            return Err(ApplicationError::validation(
                "no valid update data provided",
            ));
        }

        let matched = self.write_repo.apply(changes).await.map_err(|err| {
            tracing::error!(error = %err, article_id = %id, "failed to update article");
            err
        })?;
        if !matched {
            return Err(ApplicationError::not_found("article not found"));
        }

        // The update matched, so a missing record here is an internal
        // consistency fault, not a 404.
        let updated = self
            .read_repo
            .find_by_id(&id)
            .await?
            .ok_or_else(|| {
                tracing::error!(article_id = %id, "article missing after update");
                ApplicationError::infrastructure("article missing after update")
            })?;

        Ok(updated.into())
    }
}
