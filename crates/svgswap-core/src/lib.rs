pub mod config;
pub mod logging;

pub mod cache;
pub mod error;
pub mod fetch;
pub mod placeholder;
pub mod render;
pub mod session;

pub use cache::{CachePolicy, CacheStats, ContentCache};
pub use error::{FetchError, SwapError};
pub use fetch::{CurlFetcher, DefaultFetcher, Fetch, FileFetcher};
pub use placeholder::{Attribute, Placeholder, COPIED_ATTRIBUTES};
pub use session::{Failure, SwapOptions, SwapReport, SwapSession};
