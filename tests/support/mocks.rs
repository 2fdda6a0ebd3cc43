// tests/support/mocks.rs
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use newsdesk::application::ports::{time::Clock, util::IdGenerator};
use newsdesk::domain::article::{
    Article, ArticleChangeSet, ArticleId, ArticleReadRepository, ArticleWriteRepository,
    NewArticle,
};
use newsdesk::domain::errors::{DomainError, DomainResult};

/// In-memory article store standing in for PostgreSQL. Keeps insertion
/// order, enforces id uniqueness, and implements both repository traits so
/// the whole router can run without a database.
#[derive(Default)]
pub struct InMemoryArticleStore {
    articles: Mutex<Vec<Article>>,
}

impl InMemoryArticleStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.articles.lock().unwrap().len()
    }

    pub fn snapshot(&self) -> Vec<Article> {
        self.articles.lock().unwrap().clone()
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticleStore {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let mut articles = self.articles.lock().unwrap();
        if articles.iter().any(|existing| existing.id == article.id) {
            return Err(DomainError::Conflict("article id already exists".into()));
        }

        let stored = Article {
            id: article.id,
            title: article.title,
            content: article.content,
            author: article.author,
            publish_date: article.publish_date,
            status: article.status,
            category: article.category,
            created_at: article.created_at,
            updated_at: article.updated_at,
        };
        articles.push(stored.clone());
        Ok(stored)
    }

    async fn apply(&self, changes: ArticleChangeSet) -> DomainResult<bool> {
        let mut articles = self.articles.lock().unwrap();
        let Some(article) = articles.iter_mut().find(|a| a.id == changes.id) else {
            return Ok(false);
        };

        if let Some(title) = changes.title {
            article.title = title;
        }
        if let Some(content) = changes.content {
            article.content = content;
        }
        if let Some(author) = changes.author {
            article.author = author;
        }
        if let Some(publish_date) = changes.publish_date {
            article.publish_date = publish_date;
        }
        if let Some(status) = changes.status {
            article.status = status;
        }
        if let Some(category) = changes.category {
            article.category = category;
        }
        article.updated_at = changes.updated_at;

        Ok(true)
    }

    async fn delete(&self, id: &ArticleId) -> DomainResult<bool> {
        let mut articles = self.articles.lock().unwrap();
        let before = articles.len();
        articles.retain(|a| a.id != *id);
        Ok(articles.len() < before)
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticleStore {
    async fn find_by_id(&self, id: &ArticleId) -> DomainResult<Option<Article>> {
        let articles = self.articles.lock().unwrap();
        Ok(articles.iter().find(|a| a.id == *id).cloned())
    }

    async fn list(&self, skip: u64, limit: u32) -> DomainResult<Vec<Article>> {
        let articles = self.articles.lock().unwrap();
        Ok(articles
            .iter()
            .skip(skip as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }
}

/// Clock that advances one second per observation, so refreshed timestamps
/// are strictly ordered in tests.
pub struct TickingClock {
    now: Mutex<DateTime<Utc>>,
}

impl TickingClock {
    pub fn starting_at(start: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(start),
        }
    }
}

impl Default for TickingClock {
    fn default() -> Self {
        Self::starting_at(Utc::now())
    }
}

impl Clock for TickingClock {
    fn now(&self) -> DateTime<Utc> {
        let mut now = self.now.lock().unwrap();
        let current = *now;
        *now = current + Duration::seconds(1);
        current
    }
}

pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn generate(&self) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

/// Always yields the same identifier; drives the create-collision path.
pub struct FixedIds(pub &'static str);

impl IdGenerator for FixedIds {
    fn generate(&self) -> String {
        self.0.to_string()
    }
}

/// Write repository that claims an update matched while the read side holds
/// nothing, reproducing the matched-but-gone consistency fault.
pub struct PhantomWriteRepo;

#[async_trait]
impl ArticleWriteRepository for PhantomWriteRepo {
    async fn insert(&self, _article: NewArticle) -> DomainResult<Article> {
        Err(DomainError::Persistence("not implemented".into()))
    }

    async fn apply(&self, _changes: ArticleChangeSet) -> DomainResult<bool> {
        Ok(true)
    }

    async fn delete(&self, _id: &ArticleId) -> DomainResult<bool> {
        Ok(false)
    }
}

pub struct EmptyReadRepo;

#[async_trait]
impl ArticleReadRepository for EmptyReadRepo {
    async fn find_by_id(&self, _id: &ArticleId) -> DomainResult<Option<Article>> {
        Ok(None)
    }

    async fn list(&self, _skip: u64, _limit: u32) -> DomainResult<Vec<Article>> {
        Ok(vec![])
    }
}
