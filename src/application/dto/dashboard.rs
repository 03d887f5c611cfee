use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{ArticleDto, JournalistDto, PublisherDto, SubscriptionStateDto};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReaderDashboardDto {
    pub articles: Vec<ArticleDto>,
    pub publishers: Vec<PublisherDto>,
    pub journalists: Vec<JournalistDto>,
    pub subscriptions: SubscriptionStateDto,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct JournalistDashboardDto {
    pub articles: Vec<ArticleDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EditorDashboardDto {
    pub articles: Vec<ArticleDto>,
}
