mod journalists;
mod publishers;
mod service;

pub use service::SubscriptionCommandService;
