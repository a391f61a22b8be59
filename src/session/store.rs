use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Mutex, RwLock};
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use uuid::Uuid;

use super::Session;
use crate::error::{AppError, AppResult};
use crate::plan::Planner;
use crate::telemetry::metrics::{SESSIONS_ACTIVE, SESSIONS_CREATED, SESSIONS_EXPIRED};

pub type SessionHandle = Arc<Mutex<Session>>;

struct Entry {
    handle: SessionHandle,
    last_accessed: Instant,
}

/// In-memory sessions keyed by id. Each session has its own lock, so work
/// on one session is serialized while other sessions proceed independently.
/// Sessions nobody has touched for the idle TTL are dropped by the sweeper.
#[derive(Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, Entry>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[tracing::instrument(name = "session.create", skip(self, planner), fields(session.id))]
    pub async fn create(&self, planner: &dyn Planner) -> SessionHandle {
        let id = Uuid::new_v4();
        let handle = Arc::new(Mutex::new(Session::new(id, planner)));

        self.sessions.write().await.insert(
            id,
            Entry {
                handle: handle.clone(),
                last_accessed: Instant::now(),
            },
        );

        SESSIONS_CREATED.add(1, &[]);
        SESSIONS_ACTIVE.add(1, &[]);
        tracing::Span::current().record("session.id", id.to_string());
        tracing::info!(session.id = %id, "Session created");

        handle
    }

    /// Looks up a session and marks it as accessed.
    pub async fn get(&self, id: Uuid) -> AppResult<SessionHandle> {
        let mut sessions = self.sessions.write().await;
        let entry = sessions
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))?;
        entry.last_accessed = Instant::now();

        Ok(entry.handle.clone())
    }

    #[tracing::instrument(name = "session.remove", skip(self))]
    pub async fn remove(&self, id: Uuid) -> AppResult<()> {
        match self.sessions.write().await.remove(&id) {
            Some(_) => {
                SESSIONS_ACTIVE.add(-1, &[]);
                tracing::info!(session.id = %id, "Session ended");
                Ok(())
            }
            None => Err(AppError::NotFound(format!("Session {id} not found"))),
        }
    }

    /// Drops sessions idle for longer than `ttl`. A session still held by a
    /// request is kept regardless of its timestamp.
    #[tracing::instrument(name = "session.evict_idle", skip(self), fields(sessions.evicted))]
    pub async fn evict_idle(&self, ttl: Duration) -> usize {
        let now = Instant::now();
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();

        sessions.retain(|id, entry| {
            let idle = now.duration_since(entry.last_accessed);
            let keep = idle <= ttl || Arc::strong_count(&entry.handle) > 1;
            if !keep {
                tracing::info!(session.id = %id, idle_secs = idle.as_secs(), "Session expired");
            }
            keep
        });

        let evicted = before - sessions.len();
        if evicted > 0 {
            SESSIONS_ACTIVE.add(-(evicted as i64), &[]);
            SESSIONS_EXPIRED.add(evicted as u64, &[]);
        }
        tracing::Span::current().record("sessions.evicted", evicted);

        evicted
    }

    /// Runs `evict_idle` every `period` (at least one second) until the
    /// returned task is aborted.
    pub fn spawn_sweeper(&self, ttl: Duration, period: Duration) -> JoinHandle<()> {
        let store = self.clone();
        let period = period.max(Duration::from_secs(1));
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                store.evict_idle(ttl).await;
            }
        })
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}
