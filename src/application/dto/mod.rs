mod articles;

pub use articles::ArticleDto;
