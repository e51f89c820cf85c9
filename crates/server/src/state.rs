use std::{collections::HashMap, sync::Arc};

use tokio::sync::RwLock;
use tracing::debug;
use tripwise::schedule::{FailurePolicy, Generations};

use crate::oracle::{Backend, CachedOracle};

pub const DEFAULT_SESSION_CAPACITY: usize = 1024;

pub struct AppState {
    pub oracle: CachedOracle<Backend>,
    pub failure_policy: FailurePolicy,
    /// Validation generations per client session, newest request wins.
    sessions: RwLock<HashMap<String, Arc<Generations>>>,
    session_capacity: usize,
}

impl AppState {
    pub fn new(oracle: CachedOracle<Backend>, failure_policy: FailurePolicy) -> Self {
        Self {
            oracle,
            failure_policy,
            sessions: RwLock::new(HashMap::new()),
            session_capacity: DEFAULT_SESSION_CAPACITY,
        }
    }

    /// At most `capacity` sessions are tracked, the map starts over when full.
    /// A pass still holding a dropped session keeps its own counter.
    pub fn with_session_capacity(mut self, capacity: usize) -> Self {
        self.session_capacity = capacity.max(1);
        self
    }

    pub async fn generations(&self, session: &str) -> Arc<Generations> {
        if let Some(generations) = self.sessions.read().await.get(session) {
            return generations.clone();
        }

        let mut sessions = self.sessions.write().await;
        if !sessions.contains_key(session) && sessions.len() >= self.session_capacity {
            debug!("Session map full, clearing {} sessions", sessions.len());
            sessions.clear();
        }
        sessions.entry(session.to_string()).or_default().clone()
    }

    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}
