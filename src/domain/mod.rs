pub mod article;
pub mod errors;
pub mod publisher;
pub mod subscription;
pub mod user;
