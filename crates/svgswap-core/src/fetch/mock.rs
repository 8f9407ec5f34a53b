//! In-memory fetchers for unit tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use super::Fetch;
use crate::error::FetchError;

/// Serves fixed bodies keyed by URL, optionally after a delay. Counts calls per URL.
#[derive(Default)]
pub(crate) struct MapFetcher {
    bodies: HashMap<String, String>,
    delay: Option<Duration>,
    /// Number of leading calls that fail before bodies are served.
    fail_first: usize,
    calls: AtomicUsize,
    per_url: Mutex<HashMap<String, usize>>,
}

impl MapFetcher {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with(mut self, url: &str, body: &str) -> Self {
        self.bodies.insert(url.to_string(), body.to_string());
        self
    }

    pub(crate) fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub(crate) fn failing_first(mut self, n: usize) -> Self {
        self.fail_first = n;
        self
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub(crate) fn calls_for(&self, url: &str) -> usize {
        self.per_url
            .lock()
            .unwrap()
            .get(url)
            .copied()
            .unwrap_or(0)
    }
}

impl Fetch for MapFetcher {
    fn get_text(&self, url: &str) -> Result<String, FetchError> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst);
        *self
            .per_url
            .lock()
            .unwrap()
            .entry(url.to_string())
            .or_insert(0) += 1;
        if let Some(d) = self.delay {
            std::thread::sleep(d);
        }
        if n < self.fail_first {
            return Err(FetchError::Http {
                url: url.to_string(),
                code: 503,
            });
        }
        self.bodies.get(url).cloned().ok_or_else(|| FetchError::Http {
            url: url.to_string(),
            code: 404,
        })
    }
}
