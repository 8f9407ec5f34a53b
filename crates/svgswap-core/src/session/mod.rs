//! A page session: one content cache shared by every placeholder it inlines.
//!
//! [`SwapSession::swap_html`] collects a page's placeholders, resolves them
//! concurrently (so repeated URLs meet in the cache while the first GET is
//! still running), and replaces every placeholder that rendered. Failed
//! placeholders stay in the page and are reported.

mod report;
mod rewrite;

pub use report::{Failure, SwapReport};

use std::sync::Arc;

use url::Url;

use crate::cache::{CachePolicy, ContentCache};
use crate::config::SwapConfig;
use crate::error::SwapError;
use crate::fetch::{DefaultFetcher, Fetch};
use crate::placeholder::Placeholder;
use crate::render;

/// Per-session behavior, usually derived from [`SwapConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapOptions {
    /// CSS selector matching placeholder elements.
    pub selector: String,
    pub cache: CachePolicy,
    /// Placeholders resolved at once; at least 1.
    pub max_concurrent_fetches: usize,
}

impl Default for SwapOptions {
    fn default() -> Self {
        SwapOptions::from(&SwapConfig::default())
    }
}

impl From<&SwapConfig> for SwapOptions {
    fn from(cfg: &SwapConfig) -> Self {
        Self {
            selector: cfg.selector.clone(),
            cache: if cfg.disable_cache {
                CachePolicy::Disabled
            } else {
                CachePolicy::Enabled
            },
            max_concurrent_fetches: cfg.max_concurrent_fetches.max(1),
        }
    }
}

/// Cheap to clone; clones share the cache.
#[derive(Clone)]
pub struct SwapSession {
    options: Arc<SwapOptions>,
    cache: Arc<ContentCache>,
    fetcher: Arc<dyn Fetch>,
}

impl SwapSession {
    pub fn new(options: SwapOptions, fetcher: Arc<dyn Fetch>) -> Result<Self, SwapError> {
        rewrite::validate_selector(&options.selector)?;
        Ok(Self {
            cache: Arc::new(ContentCache::new(options.cache)),
            options: Arc::new(options),
            fetcher,
        })
    }

    /// Session with the default transport (curl + filesystem) configured from `cfg`.
    pub fn from_config(cfg: &SwapConfig) -> Result<Self, SwapError> {
        let fetcher = DefaultFetcher::new(&cfg.http_or_default());
        Self::new(SwapOptions::from(cfg), Arc::new(fetcher))
    }

    pub fn cache(&self) -> &ContentCache {
        &self.cache
    }

    /// Produce the inline SVG for one placeholder. A relative `src` is resolved
    /// against `base`.
    pub async fn inline(
        &self,
        base: Option<&Url>,
        placeholder: &Placeholder,
    ) -> Result<String, SwapError> {
        let src = placeholder.require_src()?;
        let url = resolve(base, src)?;
        let content = self
            .cache
            .get_or_fetch(url.as_str(), Arc::clone(&self.fetcher))
            .await
            .map_err(|source| SwapError::Fetch {
                url: url.to_string(),
                source,
            })?;
        render::render(
            url.as_str(),
            &content,
            placeholder.symbol.as_deref(),
            &placeholder.attributes,
        )
    }

    /// Replace every placeholder in `html` that can be inlined.
    ///
    /// Errors only when the page itself cannot be rewritten; per-placeholder
    /// problems end up in [`SwapReport::failures`].
    pub async fn swap_html(
        &self,
        html: &str,
        base: Option<&Url>,
    ) -> Result<SwapReport, SwapError> {
        let placeholders = rewrite::collect_placeholders(html, &self.options.selector)?;
        if placeholders.is_empty() {
            tracing::debug!(selector = %self.options.selector, "no placeholders");
            return Ok(SwapReport {
                html: html.to_string(),
                placeholders: 0,
                replaced: 0,
                failures: Vec::new(),
            });
        }

        let mut results = self.resolve_all(&placeholders, base).await?;

        let mut replacements = Vec::with_capacity(placeholders.len());
        let mut failures = Vec::new();
        for (index, placeholder) in placeholders.iter().enumerate() {
            let result = results[index]
                .take()
                .unwrap_or_else(|| Err(SwapError::Task("placeholder was not resolved".into())));
            match result {
                Ok(svg) => replacements.push(Some(svg)),
                Err(error) => {
                    tracing::error!(
                        index,
                        src = placeholder.src.as_deref().unwrap_or(""),
                        "placeholder not replaced: {}",
                        error
                    );
                    failures.push(Failure {
                        index,
                        src: placeholder.src.clone(),
                        error,
                    });
                    replacements.push(None);
                }
            }
        }

        let replaced = replacements.iter().filter(|r| r.is_some()).count();
        let html = if replaced > 0 {
            rewrite::replace_placeholders(html, &self.options.selector, &replacements)?
        } else {
            html.to_string()
        };

        let stats = self.cache.stats();
        tracing::info!(
            placeholders = placeholders.len(),
            replaced,
            failed = failures.len(),
            fetches = stats.fetches,
            reused = stats.reused(),
            "page swapped"
        );

        Ok(SwapReport {
            html,
            placeholders: placeholders.len(),
            replaced,
            failures,
        })
    }

    /// Runs up to `max_concurrent_fetches` placeholders at once; results are in
    /// placeholder order.
    async fn resolve_all(
        &self,
        placeholders: &[Placeholder],
        base: Option<&Url>,
    ) -> Result<Vec<Option<Result<String, SwapError>>>, SwapError> {
        let max_concurrent = self.options.max_concurrent_fetches.max(1);
        let mut results: Vec<Option<Result<String, SwapError>>> =
            (0..placeholders.len()).map(|_| None).collect();
        let mut queue = placeholders.iter().cloned().enumerate();
        let mut join_set = tokio::task::JoinSet::new();

        loop {
            while join_set.len() < max_concurrent {
                let Some((index, placeholder)) = queue.next() else {
                    break;
                };
                let session = self.clone();
                let base = base.cloned();
                join_set.spawn(async move {
                    let result = session.inline(base.as_ref(), &placeholder).await;
                    (index, result)
                });
            }

            let Some(res) = join_set.join_next().await else {
                break;
            };
            let (index, result) = res.map_err(|e| SwapError::Task(e.to_string()))?;
            results[index] = Some(result);
        }

        Ok(results)
    }
}

fn resolve(base: Option<&Url>, src: &str) -> Result<Url, SwapError> {
    match base {
        Some(base) => base.join(src),
        None => Url::parse(src),
    }
    .map_err(|source| SwapError::InvalidUrl {
        src: src.to_string(),
        source,
    })
}
