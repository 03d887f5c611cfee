mod create;
mod delete;
mod service;

pub use create::CreatePublisherCommand;
pub use delete::DeletePublisherCommand;
pub use service::PublisherCommandService;
