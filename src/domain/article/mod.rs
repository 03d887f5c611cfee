pub mod entity;
pub mod repository;
pub mod specifications;
pub mod value_objects;

pub use entity::{ApprovalOutcome, Article, NewArticle};
pub use repository::{ArticleReadRepository, ArticleWriteRepository};
pub use specifications::CanViewArticleSpec;
pub use value_objects::{ArticleContent, ArticleId, ArticleTitle};
