//! Fetching SVG source text.
//!
//! The transport is a blocking seam ([`Fetch`]); the cache runs it on tokio's
//! blocking pool. [`DefaultFetcher`] picks libcurl for `http`/`https` and the
//! filesystem for `file` URLs.

mod file;
mod http;
#[cfg(test)]
pub(crate) mod mock;

pub use self::file::FileFetcher;
pub use self::http::CurlFetcher;

use std::sync::Arc;

use crate::config::HttpConfig;
use crate::error::FetchError;

/// GET a URL and return its body as text.
///
/// Implementations block the current thread.
pub trait Fetch: Send + Sync {
    fn get_text(&self, url: &str) -> Result<String, FetchError>;
}

/// Dispatches by URL scheme.
#[derive(Debug, Clone, Default)]
pub struct DefaultFetcher {
    http: CurlFetcher,
    file: FileFetcher,
}

impl DefaultFetcher {
    pub fn new(http: &HttpConfig) -> Self {
        Self {
            http: CurlFetcher::new(http),
            file: FileFetcher,
        }
    }
}

impl Fetch for DefaultFetcher {
    fn get_text(&self, url: &str) -> Result<String, FetchError> {
        let scheme = url.split_once(':').map(|(s, _)| s).unwrap_or_default();
        if scheme.eq_ignore_ascii_case("http") || scheme.eq_ignore_ascii_case("https") {
            self.http.get_text(url)
        } else if scheme.eq_ignore_ascii_case("file") {
            self.file.get_text(url)
        } else {
            Err(FetchError::UnsupportedScheme {
                scheme: scheme.to_string(),
                url: url.to_string(),
            })
        }
    }
}

/// Runs a blocking fetch on the blocking pool.
pub(crate) async fn fetch_blocking(
    fetcher: Arc<dyn Fetch>,
    url: &str,
) -> Result<String, FetchError> {
    let url = url.to_string();
    tokio::task::spawn_blocking(move || fetcher.get_text(&url))
        .await
        .map_err(|e| FetchError::Task(e.to_string()))?
}
