pub mod articles;
pub mod auth;
pub mod dashboard;
pub mod publishers;
pub mod serde_time;
pub mod subscriptions;
pub mod users;

pub use articles::{ApprovalResultDto, ArticleDto};
pub use auth::{AuthTokenDto, AuthenticatedUser, TokenSubject};
pub use dashboard::{EditorDashboardDto, JournalistDashboardDto, ReaderDashboardDto};
pub use publishers::PublisherDto;
pub use subscriptions::SubscriptionStateDto;
pub use users::{CapabilityView, JournalistDto, UserDto, UserProfileDto};
