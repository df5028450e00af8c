//! In-memory session store with idle expiry
//!
//! Every access to a key re-arms a one-shot timer; a key untouched for the
//! configured TTL is removed. There is no persistence and no other eviction.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::llm::ChatMessage;
use crate::session::{Session, SessionKey};

struct Entry {
    session: Session,
    expiry: JoinHandle<()>,
}

impl Drop for Entry {
    fn drop(&mut self) {
        self.expiry.abort();
    }
}

struct Inner {
    sessions: RwLock<HashMap<SessionKey, Entry>>,
    ttl: Duration,
    max_messages: usize,
}

/// Session store handle; clones share the same map
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<Inner>,
}

impl SessionStore {
    /// Create a store with the given idle TTL and per-session message cap
    pub fn new(ttl: Duration, max_messages: usize) -> Self {
        Self {
            inner: Arc::new(Inner {
                sessions: RwLock::new(HashMap::new()),
                ttl,
                max_messages,
            }),
        }
    }

    /// Get the conversation history for a key, creating the session if needed.
    ///
    /// Counts as an access: the expiry timer for the key is re-armed.
    pub async fn history(&self, key: &SessionKey) -> Vec<ChatMessage> {
        let mut sessions = self.inner.sessions.write().await;
        let entry = self.touch(&mut sessions, key);
        entry.session.messages.clone()
    }

    /// Append a message to a session, creating it if needed.
    ///
    /// The session is trimmed to the configured message cap afterwards.
    pub async fn append(&self, key: &SessionKey, message: ChatMessage) {
        let mut sessions = self.inner.sessions.write().await;
        let max = self.inner.max_messages;
        let entry = self.touch(&mut sessions, key);
        entry.session.add_message(message);
        entry.session.trim_to(max);
    }

    /// Remove a session
    pub async fn remove(&self, key: &SessionKey) {
        let mut sessions = self.inner.sessions.write().await;
        if sessions.remove(key).is_some() {
            info!("Removed session {}", key);
        }
    }

    /// Check whether a key has a live session (does not re-arm the timer)
    pub async fn contains(&self, key: &SessionKey) -> bool {
        self.inner.sessions.read().await.contains_key(key)
    }

    /// Number of live sessions
    pub async fn len(&self) -> usize {
        self.inner.sessions.read().await.len()
    }

    /// Whether the store holds no sessions
    pub async fn is_empty(&self) -> bool {
        self.inner.sessions.read().await.is_empty()
    }

    /// Get or create the entry for a key and re-arm its expiry timer.
    fn touch<'a>(
        &self,
        sessions: &'a mut HashMap<SessionKey, Entry>,
        key: &SessionKey,
    ) -> &'a mut Entry {
        let entry = sessions.entry(key.clone()).or_insert_with(|| {
            info!("Creating session for {}", key);
            Entry {
                session: Session::new(),
                expiry: self.arm_expiry(key.clone()),
            }
        });

        entry.expiry.abort();
        entry.expiry = self.arm_expiry(key.clone());
        entry
    }

    fn arm_expiry(&self, key: SessionKey) -> JoinHandle<()> {
        let inner = Arc::clone(&self.inner);
        tokio::spawn(async move {
            tokio::time::sleep(inner.ttl).await;
            let mut sessions = inner.sessions.write().await;
            if sessions.remove(&key).is_some() {
                debug!("Session {} expired", key);
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TTL: Duration = Duration::from_secs(300);

    fn store() -> SessionStore {
        SessionStore::new(TTL, 5)
    }

    #[tokio::test]
    async fn test_history_creates_session() {
        let store = store();
        let key = SessionKey::new(1, "hanoi");

        assert!(store.history(&key).await.is_empty());
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_append_and_history() {
        let store = store();
        let key = SessionKey::new(1, "hanoi");

        store.append(&key, ChatMessage::user("hi")).await;
        store.append(&key, ChatMessage::assistant("hello")).await;

        let history = store.history(&key).await;
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].content, "hi");
    }

    #[tokio::test]
    async fn test_append_enforces_cap() {
        let store = store();
        let key = SessionKey::new(1, "hanoi");

        for i in 0..9 {
            store.append(&key, ChatMessage::user(format!("msg {}", i))).await;
        }

        let history = store.history(&key).await;
        assert_eq!(history.len(), 5);
        assert_eq!(history[0].content, "msg 4");
    }

    #[tokio::test]
    async fn test_sessions_isolated_per_key() {
        let store = store();
        let a = SessionKey::new(1, "hanoi");
        let b = SessionKey::new(1, "tokyo");

        store.append(&a, ChatMessage::user("a")).await;
        store.append(&b, ChatMessage::user("b")).await;

        assert_eq!(store.history(&a).await.len(), 1);
        assert_eq!(store.history(&b).await.len(), 1);
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_idle_expiry() {
        let store = store();
        let key = SessionKey::new(1, "hanoi");

        store.append(&key, ChatMessage::user("hi")).await;
        assert!(store.contains(&key).await);

        tokio::time::sleep(TTL + Duration::from_secs(1)).await;
        assert!(!store.contains(&key).await);
    }

    #[tokio::test(start_paused = true)]
    async fn test_access_resets_expiry() {
        let store = store();
        let key = SessionKey::new(1, "hanoi");

        store.append(&key, ChatMessage::user("hi")).await;

        // Touch just before the deadline; session must survive past the
        // original deadline.
        tokio::time::sleep(TTL - Duration::from_secs(1)).await;
        store.history(&key).await;
        tokio::time::sleep(TTL - Duration::from_secs(1)).await;
        assert!(store.contains(&key).await);

        // Left alone it expires.
        tokio::time::sleep(TTL + Duration::from_secs(1)).await;
        assert!(!store.contains(&key).await);
    }

    #[tokio::test]
    async fn test_remove() {
        let store = store();
        let key = SessionKey::new(1, "hanoi");

        store.append(&key, ChatMessage::user("hi")).await;
        store.remove(&key).await;
        assert!(store.is_empty().await);
    }
}
