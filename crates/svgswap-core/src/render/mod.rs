//! Turn fetched SVG text into the markup that replaces a placeholder.
//!
//! A placeholder either inlines a whole SVG document ([`render_single`]) or one
//! `<symbol>` of a sprite ([`render_symbol`]). Both copy the placeholder's
//! allowlisted attributes onto the produced `<svg>`.

mod single;
mod sprite;

pub use single::render_single;
pub use sprite::render_symbol;

use crate::error::SwapError;
use crate::placeholder::Attribute;

pub const SVG_NS: &str = "http://www.w3.org/2000/svg";
pub const XLINK_NS: &str = "http://www.w3.org/1999/xlink";

/// Render `content` fetched from `url`, as a sprite symbol when `symbol` is set.
pub fn render(
    url: &str,
    content: &str,
    symbol: Option<&str>,
    attributes: &[Attribute],
) -> Result<String, SwapError> {
    if content.trim().is_empty() {
        return Err(SwapError::EmptyContent {
            url: url.to_string(),
        });
    }
    match symbol {
        Some(symbol) => render_symbol(url, content, symbol, attributes),
        None => render_single(url, content, attributes),
    }
}

/// Parse SVG text. Sprites commonly carry a doctype, so DTDs are allowed.
pub(crate) fn parse<'a>(
    url: &str,
    content: &'a str,
) -> Result<roxmltree::Document<'a>, SwapError> {
    let opts = roxmltree::ParsingOptions {
        allow_dtd: true,
        ..roxmltree::ParsingOptions::default()
    };
    roxmltree::Document::parse_with_options(content, opts).map_err(|source| SwapError::Parse {
        url: url.to_string(),
        source,
    })
}
