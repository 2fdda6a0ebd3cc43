// src/infrastructure/repositories/postgres_article.rs
use super::map_sqlx;
use crate::domain::article::{
    Article, ArticleAuthor, ArticleChangeSet, ArticleContent, ArticleId, ArticleReadRepository,
    ArticleTitle, ArticleWriteRepository, NewArticle,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

#[derive(Clone)]
pub struct PostgresArticleWriteRepository {
    pool: PgPool,
}

impl PostgresArticleWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresArticleReadRepository {
    pool: PgPool,
}

impl PostgresArticleReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// `pk` is the store-native identity; `article_id` is the service-assigned
/// one every lookup goes through.
#[derive(Debug, FromRow)]
struct ArticleRow {
    article_id: String,
    title: String,
    content: String,
    author: String,
    publish_date: DateTime<Utc>,
    status: String,
    category: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            id: ArticleId::new(row.article_id)?,
            title: ArticleTitle::new(row.title)?,
            content: ArticleContent::new(row.content)?,
            author: ArticleAuthor::new(row.author)?,
            publish_date: row.publish_date,
            status: row.status.parse()?,
            category: row.category.parse()?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

const ARTICLE_COLUMNS: &str =
    "article_id, title, content, author, publish_date, status, category, created_at, updated_at";

#[async_trait]
impl ArticleWriteRepository for PostgresArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            id,
            title,
            content,
            author,
            publish_date,
            status,
            category,
            created_at,
            updated_at,
        } = article;

        let row = sqlx::query_as::<_, ArticleRow>(
            "INSERT INTO articles (article_id, title, content, author, publish_date, status, category, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING article_id, title, content, author, publish_date, status, category, created_at, updated_at",
        )
        .bind(id.as_str())
        .bind(title.as_str())
        .bind(content.as_str())
        .bind(author.as_str())
        .bind(publish_date)
        .bind(status.as_str())
        .bind(category.as_str())
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Article::try_from(row)
    }

    async fn apply(&self, changes: ArticleChangeSet) -> DomainResult<bool> {
        let ArticleChangeSet {
            id,
            title,
            content,
            author,
            publish_date,
            status,
            category,
            updated_at,
        } = changes;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE articles SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(title) = title {
            builder.push(", title = ");
            builder.push_bind(String::from(title));
        }
        if let Some(content) = content {
            builder.push(", content = ");
            builder.push_bind(String::from(content));
        }
        if let Some(author) = author {
            builder.push(", author = ");
            builder.push_bind(String::from(author));
        }
        if let Some(publish_date) = publish_date {
            builder.push(", publish_date = ");
            builder.push_bind(publish_date);
        }
        if let Some(status) = status {
            builder.push(", status = ");
            builder.push_bind(status.as_str());
        }
        if let Some(category) = category {
            builder.push(", category = ");
            builder.push_bind(category.as_str());
        }

        builder.push(" WHERE article_id = ");
        builder.push_bind(String::from(id));

        let result = builder
            .build()
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: &ArticleId) -> DomainResult<bool> {
        let result = sqlx::query("DELETE FROM articles WHERE article_id = $1")
            .bind(id.as_str())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleReadRepository {
    async fn find_by_id(&self, id: &ArticleId) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE article_id = $1"
        ))
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn list(&self, skip: u64, limit: u32) -> DomainResult<Vec<Article>> {
        // Creation order with the serial pk as tiebreak keeps paging stable
        // when timestamps collide. Offsets beyond i64 saturate rather than
        // wrap into a negative OFFSET.
        let rows = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles ORDER BY created_at ASC, pk ASC OFFSET $1 LIMIT $2"
        ))
        .bind(i64::try_from(skip).unwrap_or(i64::MAX))
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Article::try_from).collect()
    }
}
