// tests/support/mocks.rs
use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use once_cell::sync::Lazy;

use newsroom_core::application::ApplicationResult;
use newsroom_core::application::dto::{AuthTokenDto, AuthenticatedUser, TokenSubject};
use newsroom_core::application::error::ApplicationError;
use newsroom_core::application::ports::mailer::{Mailer, OutgoingMail};
use newsroom_core::application::ports::security::{PasswordHasher, TokenManager};
use newsroom_core::application::ports::time::Clock;
use newsroom_core::domain::article::{
    Article, ArticleId, ArticleReadRepository, ArticleWriteRepository, NewArticle,
};
use newsroom_core::domain::errors::{DomainError, DomainResult};
use newsroom_core::domain::publisher::{NewPublisher, Publisher, PublisherId, PublisherRepository};
use newsroom_core::domain::subscription::{
    ReaderSubscriptions, Subscriber, SubscriptionRepository,
};
use newsroom_core::domain::user::{NewUser, Role, User, UserId, UserRepository, Username};

pub static FIXED_NOW: Lazy<DateTime<Utc>> = Lazy::new(|| {
    DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z")
        .unwrap()
        .with_timezone(&Utc)
});

#[derive(Default)]
struct StoreState {
    next_id: i64,
    users: BTreeMap<i64, User>,
    groups: BTreeMap<i64, BTreeSet<String>>,
    publishers: BTreeMap<i64, Publisher>,
    articles: BTreeMap<i64, Article>,
    publisher_subs: BTreeSet<(i64, i64)>,
    journalist_follows: BTreeSet<(i64, i64)>,
}

impl StoreState {
    fn allocate(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn newest_first(&self, keep: impl Fn(&Article) -> bool) -> Vec<Article> {
        let mut out: Vec<Article> = self.articles.values().filter(|a| keep(a)).cloned().collect();
        out.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| i64::from(b.id).cmp(&i64::from(a.id)))
        });
        out
    }

    fn add_user(&mut self, new_user: NewUser) -> DomainResult<User> {
        if self
            .users
            .values()
            .any(|u| u.username.as_str() == new_user.username.as_str())
        {
            return Err(DomainError::Conflict("username already exists".into()));
        }
        let id = self.allocate();
        let user = User {
            id: UserId::new(id)?,
            username: new_user.username,
            email: new_user.email,
            password_hash: new_user.password_hash,
            role: new_user.role,
            bio: new_user.bio,
            is_active: new_user.is_active,
            created_at: new_user.created_at,
        };
        self.groups
            .entry(id)
            .or_default()
            .insert(user.role.as_str().to_string());
        self.users.insert(id, user.clone());
        Ok(user)
    }

    fn subscriber(&self, id: i64) -> Option<Subscriber> {
        self.users.get(&id).filter(|u| u.is_active).map(|u| Subscriber {
            user_id: u.id,
            username: u.username.clone(),
            email: u.email.clone(),
        })
    }
}

/// One in-memory backend implementing every repository port, with the same
/// cascade and ordering rules as the SQL schema.
#[derive(Default)]
pub struct InMemoryStore {
    state: Mutex<StoreState>,
}

impl InMemoryStore {
    pub fn article(&self, id: ArticleId) -> Option<Article> {
        self.state.lock().unwrap().articles.get(&i64::from(id)).cloned()
    }

    pub fn user_count(&self) -> usize {
        self.state.lock().unwrap().users.len()
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn count(&self) -> DomainResult<u64> {
        Ok(self.state.lock().unwrap().users.len() as u64)
    }

    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        self.state.lock().unwrap().add_user(new_user)
    }

    async fn insert_first(&self, new_user: NewUser) -> DomainResult<Option<User>> {
        let mut state = self.state.lock().unwrap();
        if !state.users.is_empty() {
            return Ok(None);
        }
        state.add_user(new_user).map(Some)
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .users
            .values()
            .find(|u| u.username.as_str() == username.as_str())
            .cloned())
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        Ok(self.state.lock().unwrap().users.get(&i64::from(id)).cloned())
    }

    async fn find_journalist(&self, id: UserId) -> DomainResult<Option<User>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .users
            .get(&i64::from(id))
            .filter(|u| u.role == Role::Journalist)
            .cloned())
    }

    async fn list_by_role(&self, role: Role) -> DomainResult<Vec<User>> {
        let state = self.state.lock().unwrap();
        let mut users: Vec<User> = state.users.values().filter(|u| u.role == role).cloned().collect();
        users.sort_by(|a, b| a.username.as_str().cmp(b.username.as_str()));
        Ok(users)
    }

    async fn group_names(&self, id: UserId) -> DomainResult<Vec<String>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .groups
            .get(&i64::from(id))
            .map(|g| g.iter().cloned().collect())
            .unwrap_or_default())
    }
}

#[async_trait]
impl PublisherRepository for InMemoryStore {
    async fn insert(&self, publisher: NewPublisher) -> DomainResult<Publisher> {
        let mut state = self.state.lock().unwrap();
        let id = state.allocate();
        let created = Publisher {
            id: PublisherId::new(id)?,
            name: publisher.name,
            description: publisher.description,
        };
        state.publishers.insert(id, created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: PublisherId) -> DomainResult<Option<Publisher>> {
        Ok(self.state.lock().unwrap().publishers.get(&i64::from(id)).cloned())
    }

    async fn list(&self) -> DomainResult<Vec<Publisher>> {
        let state = self.state.lock().unwrap();
        let mut out: Vec<Publisher> = state.publishers.values().cloned().collect();
        out.sort_by(|a, b| a.name.as_str().cmp(b.name.as_str()));
        Ok(out)
    }

    async fn delete(&self, id: PublisherId) -> DomainResult<bool> {
        let mut state = self.state.lock().unwrap();
        let raw = i64::from(id);
        if state.publishers.remove(&raw).is_none() {
            return Ok(false);
        }
        state.articles.retain(|_, a| a.publisher_id != id);
        state.publisher_subs.retain(|(_, p)| *p != raw);
        Ok(true)
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryStore {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let mut state = self.state.lock().unwrap();
        if !state.publishers.contains_key(&i64::from(article.publisher_id)) {
            return Err(DomainError::NotFound("referenced record not found".into()));
        }
        let id = state.allocate();
        let created = Article {
            id: ArticleId::new(id)?,
            title: article.title,
            content: article.content,
            publisher_id: article.publisher_id,
            journalist_id: article.journalist_id,
            is_approved: article.is_approved,
            created_at: article.created_at,
        };
        state.articles.insert(id, created.clone());
        Ok(created)
    }

    async fn mark_approved(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let mut state = self.state.lock().unwrap();
        match state.articles.get_mut(&i64::from(id)) {
            Some(article) if !article.is_approved => {
                article.is_approved = true;
                Ok(Some(article.clone()))
            }
            _ => Ok(None),
        }
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryStore {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        Ok(self.state.lock().unwrap().articles.get(&i64::from(id)).cloned())
    }

    async fn list_for_reader(&self, reader_id: UserId) -> DomainResult<Vec<Article>> {
        let state = self.state.lock().unwrap();
        let reader = i64::from(reader_id);
        let pubs: HashSet<i64> = state
            .publisher_subs
            .iter()
            .filter(|(r, _)| *r == reader)
            .map(|(_, p)| *p)
            .collect();
        let follows: HashSet<i64> = state
            .journalist_follows
            .iter()
            .filter(|(r, _)| *r == reader)
            .map(|(_, j)| *j)
            .collect();
        Ok(state.newest_first(|a| {
            a.is_approved
                && (pubs.contains(&i64::from(a.publisher_id))
                    || a.journalist_id.is_some_and(|j| follows.contains(&i64::from(j))))
        }))
    }

    async fn list_by_journalist(&self, journalist_id: UserId) -> DomainResult<Vec<Article>> {
        let state = self.state.lock().unwrap();
        Ok(state.newest_first(|a| a.journalist_id == Some(journalist_id)))
    }

    async fn list_pending(&self) -> DomainResult<Vec<Article>> {
        Ok(self.state.lock().unwrap().newest_first(|a| !a.is_approved))
    }

    async fn list_approved(&self) -> DomainResult<Vec<Article>> {
        Ok(self.state.lock().unwrap().newest_first(|a| a.is_approved))
    }
}

#[async_trait]
impl SubscriptionRepository for InMemoryStore {
    async fn add_publisher(&self, reader: UserId, publisher: PublisherId) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        state
            .publisher_subs
            .insert((i64::from(reader), i64::from(publisher)));
        Ok(())
    }

    async fn remove_publisher(&self, reader: UserId, publisher: PublisherId) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        state
            .publisher_subs
            .remove(&(i64::from(reader), i64::from(publisher)));
        Ok(())
    }

    async fn add_journalist(&self, reader: UserId, journalist: UserId) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        state
            .journalist_follows
            .insert((i64::from(reader), i64::from(journalist)));
        Ok(())
    }

    async fn remove_journalist(&self, reader: UserId, journalist: UserId) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        state
            .journalist_follows
            .remove(&(i64::from(reader), i64::from(journalist)));
        Ok(())
    }

    async fn for_reader(&self, reader: UserId) -> DomainResult<ReaderSubscriptions> {
        let state = self.state.lock().unwrap();
        let reader = i64::from(reader);
        Ok(ReaderSubscriptions {
            publishers: state
                .publisher_subs
                .iter()
                .filter(|(r, _)| *r == reader)
                .map(|(_, p)| PublisherId::new(*p).unwrap())
                .collect(),
            journalists: state
                .journalist_follows
                .iter()
                .filter(|(r, _)| *r == reader)
                .map(|(_, j)| UserId::new(*j).unwrap())
                .collect(),
        })
    }

    async fn publisher_subscribers(&self, publisher: PublisherId) -> DomainResult<Vec<Subscriber>> {
        let state = self.state.lock().unwrap();
        let raw = i64::from(publisher);
        Ok(state
            .publisher_subs
            .iter()
            .filter(|(_, p)| *p == raw)
            .filter_map(|(r, _)| state.subscriber(*r))
            .collect())
    }

    async fn journalist_followers(&self, journalist: UserId) -> DomainResult<Vec<Subscriber>> {
        let state = self.state.lock().unwrap();
        let raw = i64::from(journalist);
        Ok(state
            .journalist_follows
            .iter()
            .filter(|(_, j)| *j == raw)
            .filter_map(|(r, _)| state.subscriber(*r))
            .collect())
    }
}

/// Captures outgoing mail. Sends addressed to any of `fail_for` are rejected.
#[derive(Default)]
pub struct RecordingMailer {
    sent: Mutex<Vec<OutgoingMail>>,
    fail_for: HashSet<String>,
}

impl RecordingMailer {
    pub fn failing_for(addresses: &[&str]) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail_for: addresses.iter().map(|a| a.to_string()).collect(),
        }
    }

    pub fn sent(&self) -> Vec<OutgoingMail> {
        self.sent.lock().unwrap().clone()
    }

    pub fn recipients(&self) -> Vec<String> {
        let mut out: Vec<String> = self.sent().into_iter().flat_map(|m| m.to).collect();
        out.sort();
        out
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, mail: OutgoingMail) -> ApplicationResult<()> {
        if mail.to.iter().any(|to| self.fail_for.contains(to)) {
            return Err(ApplicationError::infrastructure("smtp refused recipient"));
        }
        self.sent.lock().unwrap().push(mail);
        Ok(())
    }
}

/// Stores `hashed:<password>`.
pub struct DummyPasswordHasher;

#[async_trait]
impl PasswordHasher for DummyPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("hashed:{password}"))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        if expected_hash == format!("hashed:{password}") {
            Ok(())
        } else {
            Err(ApplicationError::unauthorized("invalid credentials"))
        }
    }
}

/// Tokens are plain `test:<user id>:<role>:<session>` strings.
pub struct DummyTokenManager;

pub fn encode_test_token(user_id: i64, role: Role, session_id: Option<&str>) -> String {
    format!("test:{user_id}:{role}:{}", session_id.unwrap_or("-"))
}

#[async_trait]
impl TokenManager for DummyTokenManager {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        let token = encode_test_token(
            i64::from(subject.user_id),
            subject.role,
            subject.session_id.as_deref(),
        );
        Ok(AuthTokenDto {
            token,
            issued_at: *FIXED_NOW,
            expires_at: *FIXED_NOW + Duration::hours(1),
            expires_in: 3600,
            session_id: subject.session_id,
        })
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let parts: Vec<&str> = token.split(':').collect();
        let [prefix, id, role, session] = parts.as_slice() else {
            return Err(ApplicationError::unauthorized("invalid token"));
        };
        if *prefix != "test" {
            return Err(ApplicationError::unauthorized("invalid token"));
        }
        let id: i64 = id
            .parse()
            .map_err(|_| ApplicationError::unauthorized("invalid token"))?;
        let role: Role = role
            .parse()
            .map_err(|_| ApplicationError::unauthorized("invalid token"))?;
        let now = Utc::now();
        Ok(AuthenticatedUser {
            id: UserId::new(id).map_err(|_| ApplicationError::unauthorized("invalid token"))?,
            username: format!("user{id}"),
            role,
            capabilities: role.default_capabilities(),
            issued_at: now,
            expires_at: now + Duration::hours(1),
            session_id: (*session != "-").then(|| session.to_string()),
        })
    }
}

/// Starts at [`FIXED_NOW`] and moves one second forward per reading, so
/// records created later always sort as newer.
#[derive(Default)]
pub struct DummyClock {
    ticks: AtomicI64,
}

impl Clock for DummyClock {
    fn now(&self) -> DateTime<Utc> {
        let tick = self.ticks.fetch_add(1, Ordering::SeqCst);
        *FIXED_NOW + Duration::seconds(tick)
    }
}
