use crate::domain::subscription::entity::Subscriber;
use crate::domain::user::UserId;
use std::collections::BTreeMap;

/// Readers to notify about one article: publisher subscribers united with the
/// journalist's followers, one entry per user.
#[derive(Debug, Clone, Default)]
pub struct NotificationAudience {
    members: BTreeMap<UserId, Subscriber>,
}

impl NotificationAudience {
    pub fn union(
        publisher_subscribers: impl IntoIterator<Item = Subscriber>,
        journalist_followers: impl IntoIterator<Item = Subscriber>,
    ) -> Self {
        let members = publisher_subscribers
            .into_iter()
            .chain(journalist_followers)
            .map(|subscriber| (subscriber.user_id, subscriber))
            .collect();
        Self { members }
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Members in ascending user id order.
    pub fn iter(&self) -> impl Iterator<Item = &Subscriber> {
        self.members.values()
    }
}
