pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{Article, ArticleChangeSet, NewArticle};
pub use repository::{ArticleReadRepository, ArticleWriteRepository};
pub use value_objects::{
    ArticleAuthor, ArticleCategory, ArticleContent, ArticleId, ArticleStatus, ArticleTitle,
};
