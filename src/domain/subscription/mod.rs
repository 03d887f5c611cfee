pub mod audience;
pub mod entity;
pub mod repository;

pub use audience::NotificationAudience;
pub use entity::{ReaderSubscriptions, Subscriber};
pub use repository::SubscriptionRepository;
