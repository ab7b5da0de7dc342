use std::sync::Arc;

use tokio::sync::RwLock;

use crate::booking::session::Session;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// The single in-memory session: top-level estimator state plus the
    /// booking dialog draft. Nothing is persisted — by design.
    pub session: Arc<RwLock<Session>>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        AppState {
            config,
            session: Arc::new(RwLock::new(Session::default())),
        }
    }
}
