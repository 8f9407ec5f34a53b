//! Session-scoped content cache with in-flight request deduplication.
//!
//! Every URL maps to one slot. The first placeholder that needs a URL fetches
//! it; placeholders asking for the same URL while that fetch is running wait
//! on the slot instead of issuing a second GET, and everyone after that is
//! served from memory. Nothing is evicted: the cache lives exactly as long as
//! the session that owns it.
//!
//! Failures are not stored. When the in-flight fetch fails, its caller gets
//! the error and one of the waiters takes over with its own GET; a later
//! request for the URL starts from scratch.

mod stats;

pub use stats::CacheStats;

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use tokio::sync::OnceCell;

use crate::error::FetchError;
use crate::fetch::{fetch_blocking, Fetch};

/// Whether content is shared between placeholders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CachePolicy {
    #[default]
    Enabled,
    /// Every request fetches; nothing is stored or tracked.
    Disabled,
}

type Slot = Arc<OnceCell<Arc<str>>>;

#[derive(Debug, Default)]
pub struct ContentCache {
    policy: CachePolicy,
    slots: Mutex<HashMap<String, Slot>>,
    fetches: AtomicU64,
    hits: AtomicU64,
    joined: AtomicU64,
}

impl ContentCache {
    pub fn new(policy: CachePolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// Returns the body for `url`, fetching it at most once per session.
    pub async fn get_or_fetch(
        &self,
        url: &str,
        fetcher: Arc<dyn Fetch>,
    ) -> Result<Arc<str>, FetchError> {
        if self.policy == CachePolicy::Disabled {
            return self.fetch(url, fetcher).await;
        }

        let slot = self.slot(url);
        if let Some(body) = slot.get() {
            self.hits.fetch_add(1, Ordering::Relaxed);
            tracing::debug!(url, "cache hit");
            return Ok(Arc::clone(body));
        }

        let mut fetched_here = false;
        let body = slot
            .get_or_try_init(|| {
                fetched_here = true;
                self.fetch(url, fetcher)
            })
            .await?;
        if !fetched_here {
            self.joined.fetch_add(1, Ordering::Relaxed);
            tracing::debug!(url, "joined in-flight fetch");
        }
        Ok(Arc::clone(body))
    }

    /// True once a body for `url` is stored.
    pub fn contains(&self, url: &str) -> bool {
        self.lock_slots()
            .get(url)
            .is_some_and(|slot| slot.initialized())
    }

    /// Number of stored bodies.
    pub fn len(&self) -> usize {
        self.lock_slots()
            .values()
            .filter(|slot| slot.initialized())
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            fetches: self.fetches.load(Ordering::Relaxed),
            hits: self.hits.load(Ordering::Relaxed),
            joined: self.joined.load(Ordering::Relaxed),
        }
    }

    fn slot(&self, url: &str) -> Slot {
        Arc::clone(self.lock_slots().entry(url.to_string()).or_default())
    }

    fn lock_slots(&self) -> std::sync::MutexGuard<'_, HashMap<String, Slot>> {
        self.slots.lock().unwrap_or_else(|e| e.into_inner())
    }

    async fn fetch(&self, url: &str, fetcher: Arc<dyn Fetch>) -> Result<Arc<str>, FetchError> {
        self.fetches.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(url, "fetching");
        match fetch_blocking(fetcher, url).await {
            Ok(body) => Ok(Arc::from(body)),
            Err(e) => {
                tracing::warn!(url, error = %e, "fetch failed");
                Err(e)
            }
        }
    }
}
