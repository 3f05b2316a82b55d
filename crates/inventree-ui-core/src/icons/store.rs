//! Published icon package snapshots
//!
//! Readers always see a complete `IconPackageMap`; the loader builds a new map
//! and publishes it in one step. Subscribers are woken on every publish.

use super::package::{IconPackage, IconPackageMap};
use crate::api::{api_url, ApiClient, ApiEndpoint};
use crate::error::Result;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::{watch, Mutex};
use tracing::{debug, info};

pub struct IconStore {
    tx: watch::Sender<Arc<IconPackageMap>>,
    loaded: AtomicBool,
    load_lock: Mutex<()>,
}

impl IconStore {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(Arc::new(IconPackageMap::new()));
        Self {
            tx,
            loaded: AtomicBool::new(false),
            load_lock: Mutex::new(()),
        }
    }

    /// Current package map
    pub fn snapshot(&self) -> Arc<IconPackageMap> {
        self.tx.borrow().clone()
    }

    /// Observe future snapshots
    pub fn subscribe(&self) -> watch::Receiver<Arc<IconPackageMap>> {
        self.tx.subscribe()
    }

    /// Replace the current snapshot
    pub fn publish(&self, packages: IconPackageMap) {
        debug!("Publishing {} icon packages", packages.len());
        self.tx.send_replace(Arc::new(packages));
    }

    pub fn has_loaded(&self) -> bool {
        self.loaded.load(Ordering::Acquire)
    }

    /// Fetch the installed packages from the server once.
    ///
    /// Later calls return the current snapshot without another request. A
    /// failed fetch leaves the store unloaded so it can be retried.
    pub async fn load(&self, api: &dyn ApiClient) -> Result<Arc<IconPackageMap>> {
        let _guard = self.load_lock.lock().await;
        if self.has_loaded() {
            return Ok(self.snapshot());
        }

        let body = api.get(&api_url(ApiEndpoint::Icons, None)).await?;
        let packages: Vec<IconPackage> = serde_json::from_value(body)?;
        let map = IconPackageMap::from_packages(packages);
        info!("Loaded {} icon packages", map.len());

        self.publish(map);
        self.loaded.store(true, Ordering::Release);

        Ok(self.snapshot())
    }
}

impl Default for IconStore {
    fn default() -> Self {
        Self::new()
    }
}
