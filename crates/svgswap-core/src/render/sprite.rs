//! Inline one symbol of an SVG sprite.

use quick_xml::events::{BytesEnd, BytesStart, Event};
use quick_xml::Writer;

use super::{SVG_NS, XLINK_NS};
use crate::error::SwapError;
use crate::placeholder::Attribute;

/// Builds a standalone `<svg>` around the content of the element whose `id` is
/// `symbol`. The symbol's `viewBox` is carried over; its other attributes are not.
pub fn render_symbol(
    url: &str,
    content: &str,
    symbol: &str,
    attributes: &[Attribute],
) -> Result<String, SwapError> {
    let doc = super::parse(url, content)?;
    let node = doc
        .descendants()
        .find(|n| n.is_element() && n.attribute("id") == Some(symbol))
        .ok_or_else(|| SwapError::SymbolNotFound {
            url: url.to_string(),
            symbol: symbol.to_string(),
        })?;

    let mut start = BytesStart::new("svg");
    start.push_attribute(("xmlns", SVG_NS));
    start.push_attribute(("xmlns:xlink", XLINK_NS));
    start.push_attribute(("version", "1.1"));
    if let Some(view_box) = node.attribute("viewBox") {
        start.push_attribute(("viewBox", view_box));
    }
    for a in attributes {
        start.push_attribute((a.name.as_str(), a.value.as_str()));
    }

    let xml_err = |source: quick_xml::Error| SwapError::Xml {
        url: url.to_string(),
        source,
    };
    let mut writer = Writer::new(Vec::new());
    writer.write_event(Event::Start(start)).map_err(xml_err)?;
    writer
        .get_mut()
        .extend_from_slice(inner_markup(content, node).as_bytes());
    writer
        .write_event(Event::End(BytesEnd::new("svg")))
        .map_err(xml_err)?;

    Ok(String::from_utf8_lossy(&writer.into_inner()).into_owned())
}

/// Source text between the element's start and end tags, verbatim.
fn inner_markup<'a>(content: &'a str, node: roxmltree::Node<'_, '_>) -> &'a str {
    let Some(first) = node.first_child() else {
        return "";
    };
    let range = node.range();
    let start = first.range().start;
    match content[range.clone()].rfind("</") {
        Some(close) if range.start + close >= start => &content[start..range.start + close],
        _ => "",
    }
}
