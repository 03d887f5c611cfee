// src/application/commands/articles/mod.rs
mod approve;
mod create;
mod service;

pub use approve::ApproveArticleCommand;
pub use create::CreateArticleCommand;
pub use service::ArticleCommandService;
