//! Error types for fetching and inlining.

use thiserror::Error;

/// Failure of a single GET of SVG source text.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("curl: {0}")]
    Curl(#[from] curl::Error),
    #[error("GET {url} returned HTTP {code}")]
    Http { url: String, code: u32 },
    #[error("read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("body of {url} is not valid UTF-8")]
    Encoding { url: String },
    #[error("unsupported URL scheme `{scheme}` in {url}")]
    UnsupportedScheme { scheme: String, url: String },
    #[error("fetch task: {0}")]
    Task(String),
}

/// Why a placeholder could not be replaced with inline SVG.
#[derive(Debug, Error)]
pub enum SwapError {
    #[error("'src' attribute is missing")]
    MissingSrc,
    #[error("invalid src {src:?}: {source}")]
    InvalidUrl {
        src: String,
        #[source]
        source: url::ParseError,
    },
    #[error("fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: FetchError,
    },
    #[error("no SVG content was retrieved from source file at: {url}")]
    EmptyContent { url: String },
    #[error("parse SVG from {url}: {source}")]
    Parse {
        url: String,
        #[source]
        source: roxmltree::Error,
    },
    #[error("root element of {url} is <{root}>, expected <svg>")]
    NotSvg { url: String, root: String },
    #[error("'sprite-symbol' identifier {symbol:?} was not found in source SVG at: {url}")]
    SymbolNotFound { url: String, symbol: String },
    #[error("write SVG from {url}: {source}")]
    Xml {
        url: String,
        #[source]
        source: quick_xml::Error,
    },
    #[error("invalid placeholder selector {selector:?}: {reason}")]
    InvalidSelector { selector: String, reason: String },
    #[error("rewrite HTML: {0}")]
    Rewrite(String),
    #[error("placeholder task: {0}")]
    Task(String),
}
