//! CLI command handlers, one per file.

mod config;
mod inline;
mod render;

pub use config::run_config;
pub use inline::run_inline;
pub use render::{run_render, RenderArgs};
