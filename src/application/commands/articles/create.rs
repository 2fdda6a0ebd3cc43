// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::{
        article::{ArticleAuthor, ArticleContent, ArticleId, ArticleTitle, NewArticle},
        errors::DomainError,
    },
};
use chrono::{DateTime, Utc};

pub struct CreateArticleCommand {
    pub title: String,
    pub content: String,
    pub author: String,
    pub publish_date: DateTime<Utc>,
    pub status: String,
    pub category: String,
}

impl ArticleCommandService {
    pub async fn create_article(
        &self,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let title = ArticleTitle::new(command.title)?;
        let content = ArticleContent::new(command.content)?;
        let author = ArticleAuthor::new(command.author)?;
        let status = command.status.parse()?;
        let category = command.category.parse()?;

        let id = ArticleId::new(self.ids.generate())?;
        let now = self.clock.now();

        let new_article = NewArticle {
            id,
            title,
            content,
            author,
            publish_date: command.publish_date,
            status,
            category,
            created_at: now,
            updated_at: now,
        };

        let created = self.write_repo.insert(new_article).await.map_err(|err| {
            if matches!(err, DomainError::Persistence(_)) {
                tracing::error!(error = %err, "failed to insert article");
            }
            err
        })?;

        Ok(created.into())
    }
}
