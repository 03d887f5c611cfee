use crate::application::ports::session_revocation::SessionRevocationStore;
use crate::application::{ApplicationResult, error::ApplicationError};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Mutex;

/// Process-local map of logged-out session ids to their token expiry.
/// Revocations do not survive a restart; tokens issued before it keep working
/// until they expire.
#[derive(Default)]
pub struct InMemorySessionRevocationStore {
    revoked: Mutex<HashMap<String, DateTime<Utc>>>,
}

impl InMemorySessionRevocationStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn revoke_at(
        &self,
        session_id: &str,
        expires_at: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> ApplicationResult<()> {
        let mut guard = self.revoked.lock().map_err(|_| poisoned())?;
        // Expired tokens fail verification on their own.
        guard.retain(|_, expiry| *expiry > now);
        if expires_at > now {
            guard.insert(session_id.to_string(), expires_at);
        }
        Ok(())
    }
}

fn poisoned() -> ApplicationError {
    ApplicationError::infrastructure("session store lock poisoned")
}

#[async_trait]
impl SessionRevocationStore for InMemorySessionRevocationStore {
    async fn is_revoked(&self, session_id: &str) -> ApplicationResult<bool> {
        let guard = self.revoked.lock().map_err(|_| poisoned())?;
        Ok(guard.contains_key(session_id))
    }

    async fn revoke(&self, session_id: &str, expires_at: DateTime<Utc>) -> ApplicationResult<()> {
        self.revoke_at(session_id, expires_at, Utc::now())
    }
}
