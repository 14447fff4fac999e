//! Concurrent session storage.

use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use base64::Engine;
use dashmap::DashMap;
use rand::RngCore;
use uuid::Uuid;

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

/// Mint a CSRF token: 32 random bytes, base64url without padding.
fn generate_token() -> String {
    let mut buf = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut buf);
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buf)
}

/// Request extension carrying the resolved session id, attached by the
/// CSRF gate so handlers (logout) can address the session.
#[derive(Debug, Clone)]
pub struct SessionId(pub String);

/// Per-session record. The store key carries the session id.
#[derive(Debug, Clone)]
pub struct Session {
    /// Anti-forgery token, minted on first safe-method touch.
    pub csrf_token: Option<String>,
    /// Creation timestamp (seconds since epoch).
    pub created_at: u64,
    /// Last request timestamp, drives idle eviction.
    pub last_seen: u64,
}

impl Session {
    fn new() -> Self {
        let now = now_secs();
        Self {
            csrf_token: None,
            created_at: now,
            last_seen: now,
        }
    }

    /// Seconds since the session was created.
    pub fn age_secs(&self) -> u64 {
        now_secs().saturating_sub(self.created_at)
    }
}

/// A thread-safe store of sessions keyed by session id.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<DashMap<String, Session>>,
}

impl SessionStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(DashMap::new()),
        }
    }

    /// Mint a fresh session id.
    pub fn new_session_id() -> String {
        Uuid::new_v4().to_string()
    }

    /// Fetch a session, refreshing its idle clock.
    pub fn touch(&self, id: &str) -> Option<Session> {
        self.inner.get_mut(id).map(|mut entry| {
            entry.last_seen = now_secs();
            entry.clone()
        })
    }

    /// Look up the CSRF token for a session, if one was minted.
    pub fn csrf_token(&self, id: &str) -> Option<String> {
        self.inner.get(id).and_then(|s| s.csrf_token.clone())
    }

    /// Return the session's CSRF token, creating the session and minting
    /// the token as needed.
    ///
    /// Both steps run under the entry's shard lock: concurrent calls for
    /// the same id always resolve to the same token.
    pub fn ensure_csrf_token(&self, id: &str) -> String {
        let mut entry = self
            .inner
            .entry(id.to_string())
            .or_insert_with(Session::new);
        entry.last_seen = now_secs();
        match &entry.csrf_token {
            Some(token) => token.clone(),
            None => {
                let token = generate_token();
                entry.csrf_token = Some(token.clone());
                token
            }
        }
    }

    /// Destroy a session outright (logout). The CSRF token dies with it.
    /// Returns the removed record so callers can log its lifetime.
    pub fn remove(&self, id: &str) -> Option<Session> {
        self.inner.remove(id).map(|(_, session)| session)
    }

    /// Number of live sessions.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Whether the store holds no sessions.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Drop sessions idle longer than the timeout. Returns the eviction count.
    ///
    /// Removals are counted inside the retain closure: `retain` sweeps one
    /// shard at a time, so concurrent inserts can land in already-swept
    /// shards and a before/after length diff would be wrong.
    pub fn evict_idle(&self, idle_timeout: Duration) -> usize {
        let cutoff = now_secs().saturating_sub(idle_timeout.as_secs());
        let mut evicted = 0;
        self.inner.retain(|_, s| {
            let keep = s.last_seen >= cutoff;
            if !keep {
                evicted += 1;
            }
            keep
        });
        evicted
    }

    /// Spawn the periodic eviction sweeper.
    pub fn spawn_sweeper(
        &self,
        idle_timeout: Duration,
        interval: Duration,
        mut shutdown: tokio::sync::broadcast::Receiver<()>,
    ) {
        let store = self.clone();
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.tick().await; // first tick fires immediately
            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        let evicted = store.evict_idle(idle_timeout);
                        if evicted > 0 {
                            tracing::debug!(evicted, remaining = store.len(), "Evicted idle sessions");
                        }
                    }
                    _ = shutdown.recv() => {
                        tracing::debug!("Session sweeper stopping");
                        break;
                    }
                }
            }
        });
    }
}
