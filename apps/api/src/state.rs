use std::sync::Arc;

use sqlx::PgPool;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::roadmap::progress::ProgressPolicy;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// Reference catalogue: loaded once at startup, read-only afterwards,
    /// shared across all request handlers.
    pub catalog: Arc<Catalog>,
    /// Pluggable course progress source. Default: PositionalPolicy.
    pub progress_policy: Arc<dyn ProgressPolicy>,
    /// Startup configuration, retained for handlers that grow runtime knobs.
    #[allow(dead_code)]
    pub config: Config,
}
