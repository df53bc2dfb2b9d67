//! Loader trait for session data sources

use std::sync::Arc;

use crate::types::{Session, SessionKind};

/// Trait for timing-data sources.
///
/// A loader resolves a `(season, circuit, kind)` triple to a fully populated
/// [`Session`], or `None` when resolution fails for any reason (unknown
/// circuit or season, data not published yet, malformed upstream payload).
/// Loaders must not error past this boundary; callers treat `None` uniformly
/// as unavailable data.
///
/// Caching, on-disk storage, and serialization of concurrent first-time loads
/// are the loader's concern. The analysis components only read the returned
/// session within one call.
#[async_trait::async_trait]
pub trait SessionLoader: Send + Sync {
    /// Resolve one session's laps, telemetry, and classification.
    async fn load(&self, season: u16, circuit: &str, kind: SessionKind) -> Option<Session>;
}

// Shared loaders back both the estimator and the comparator.
#[async_trait::async_trait]
impl<L: SessionLoader + ?Sized> SessionLoader for Arc<L> {
    async fn load(&self, season: u16, circuit: &str, kind: SessionKind) -> Option<Session> {
        (**self).load(season, circuit, kind).await
    }
}
