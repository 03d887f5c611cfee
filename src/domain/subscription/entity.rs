use crate::domain::publisher::PublisherId;
use crate::domain::user::{EmailAddress, UserId, Username};
use std::collections::BTreeSet;

/// A reader reachable by notifications.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subscriber {
    pub user_id: UserId,
    pub username: Username,
    pub email: EmailAddress,
}

/// Both outgoing edge sets of one reader.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReaderSubscriptions {
    pub publishers: BTreeSet<PublisherId>,
    pub journalists: BTreeSet<UserId>,
}

impl ReaderSubscriptions {
    pub fn is_empty(&self) -> bool {
        self.publishers.is_empty() && self.journalists.is_empty()
    }
}
