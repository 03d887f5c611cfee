use crate::domain::publisher::value_objects::{PublisherId, PublisherName};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Publisher {
    pub id: PublisherId,
    pub name: PublisherName,
    pub description: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewPublisher {
    pub name: PublisherName,
    pub description: Option<String>,
}

impl NewPublisher {
    pub fn new(name: PublisherName, description: Option<String>) -> Self {
        let description = description
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty());
        Self { name, description }
    }
}
