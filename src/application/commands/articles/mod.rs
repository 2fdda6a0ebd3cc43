mod create;
mod delete;
mod service;
mod update;

pub use create::CreateArticleCommand;
pub use service::ArticleCommandService;
pub use update::UpdateArticleCommand;
