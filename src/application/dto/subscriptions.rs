use crate::domain::subscription::ReaderSubscriptions;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A reader's current edge sets, ids ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SubscriptionStateDto {
    pub publisher_ids: Vec<i64>,
    pub journalist_ids: Vec<i64>,
}

impl From<ReaderSubscriptions> for SubscriptionStateDto {
    fn from(value: ReaderSubscriptions) -> Self {
        Self {
            publisher_ids: value.publishers.into_iter().map(Into::into).collect(),
            journalist_ids: value.journalists.into_iter().map(Into::into).collect(),
        }
    }
}
