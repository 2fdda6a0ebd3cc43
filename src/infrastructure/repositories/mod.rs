// src/infrastructure/repositories/mod.rs
mod postgres_article;

pub use postgres_article::{PostgresArticleReadRepository, PostgresArticleWriteRepository};

use crate::domain::errors::DomainError;

const CNT_ARTICLE_ID: &str = "articles_article_id_key";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_ARTICLE_ID => DomainError::Conflict("article id already exists".into()),
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
