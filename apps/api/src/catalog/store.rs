use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::catalog::loader::{load_catalog, CatalogError, CatalogSource};
use crate::catalog::models::Catalog;
use crate::errors::AppError;

/// Holds the current catalog snapshot.
///
/// Readers clone the `Arc` and drop the lock immediately, so a reload only ever
/// replaces the pointer. Requests already holding the old snapshot keep using it.
pub struct CatalogStore {
    source: CatalogSource,
    current: RwLock<Option<Arc<Catalog>>>,
}

impl CatalogStore {
    /// An empty store. Requests fail with `CatalogUnavailable` until the first load.
    pub fn new(source: CatalogSource) -> Self {
        Self {
            source,
            current: RwLock::new(None),
        }
    }

    pub fn snapshot(&self) -> Result<Arc<Catalog>, AppError> {
        self.current
            .read()
            .as_ref()
            .map(Arc::clone)
            .ok_or(AppError::CatalogUnavailable)
    }

    pub fn is_loaded(&self) -> bool {
        self.current.read().is_some()
    }

    /// Installs `catalog` as the current snapshot and returns the previous one.
    pub fn swap(&self, catalog: Arc<Catalog>) -> Option<Arc<Catalog>> {
        self.current.write().replace(catalog)
    }

    /// Re-reads the configured source and swaps it in. On failure the current
    /// snapshot is left untouched.
    pub async fn reload(&self) -> Result<Arc<Catalog>, CatalogError> {
        let catalog = Arc::new(load_catalog(&self.source).await?);
        if catalog.is_empty() {
            warn!("Catalog from {} has no tools", self.source.label());
        }
        self.swap(Arc::clone(&catalog));
        info!(
            "Catalog loaded: {} tools from {}",
            catalog.len(),
            self.source.label()
        );
        Ok(catalog)
    }
}

/// Reloads the catalog every `period`. Failures are logged and the old snapshot kept.
pub fn spawn_periodic_reload(store: Arc<CatalogStore>, period: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        // First tick completes immediately; the startup load already covers it.
        ticker.tick().await;
        loop {
            ticker.tick().await;
            if let Err(e) = store.reload().await {
                warn!("Periodic catalog reload failed, keeping previous snapshot: {e}");
            }
        }
    })
}
