mod get_by_id;
mod list_approved;
mod service;

pub use get_by_id::GetArticleByIdQuery;
pub use service::ArticleQueryService;
