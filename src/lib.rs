pub mod config;
pub mod rest;
pub mod store;

use std::sync::Arc;

use config::DaemonConfig;
use store::{SharedTaskStore, TaskStore};

/// Shared application state passed to every REST handler.
///
/// Each API generation owns its own store; tasks are never shared between
/// generations.
#[derive(Clone)]
pub struct AppContext {
    pub config: Arc<DaemonConfig>,
    /// Store behind the legacy `/tasks` routes.
    pub legacy_tasks: SharedTaskStore,
    /// Store behind the ungated `/apiv1` routes.
    pub v1_tasks: SharedTaskStore,
    /// Store behind the API-key-gated `/apiv2` routes.
    pub v2_tasks: SharedTaskStore,
    pub started_at: std::time::Instant,
}

impl AppContext {
    /// Production context: every generation starts from the seeded store.
    pub fn new(config: Arc<DaemonConfig>) -> Self {
        Self::with_stores(
            config,
            Arc::new(TaskStore::seeded()),
            Arc::new(TaskStore::seeded()),
            Arc::new(TaskStore::seeded()),
        )
    }

    /// Context over caller-supplied stores. Test seam: lets a test start
    /// from an empty or pre-shaped store without touching the others.
    pub fn with_stores(
        config: Arc<DaemonConfig>,
        legacy_tasks: SharedTaskStore,
        v1_tasks: SharedTaskStore,
        v2_tasks: SharedTaskStore,
    ) -> Self {
        Self {
            config,
            legacy_tasks,
            v1_tasks,
            v2_tasks,
            started_at: std::time::Instant::now(),
        }
    }
}
