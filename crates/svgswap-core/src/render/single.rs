//! Inline a whole SVG document.

use quick_xml::events::{BytesStart, Event};
use quick_xml::{Reader, Writer};

use crate::error::SwapError;
use crate::placeholder::Attribute;

/// Attribute some editors emit that is not valid on inline SVG.
const DROPPED_ATTRIBUTE: &[u8] = b"xmlns:a";

/// Returns the document's root `<svg>` element with the placeholder's
/// attributes applied. Anything before the root (XML declaration, doctype,
/// comments) is dropped.
pub fn render_single(
    url: &str,
    content: &str,
    attributes: &[Attribute],
) -> Result<String, SwapError> {
    let doc = super::parse(url, content)?;
    let root = doc.root_element();
    if root.tag_name().name() != "svg" {
        return Err(SwapError::NotSvg {
            url: url.to_string(),
            root: root.tag_name().name().to_string(),
        });
    }

    rewrite_root(&content[root.range()], attributes).map_err(|source| SwapError::Xml {
        url: url.to_string(),
        source,
    })
}

/// Stream `markup` through unchanged except for the first start tag.
fn rewrite_root(markup: &str, attributes: &[Attribute]) -> Result<String, quick_xml::Error> {
    let mut reader = Reader::from_str(markup);
    let mut writer = Writer::new(Vec::new());
    let mut root_seen = false;

    loop {
        match reader.read_event()? {
            Event::Eof => break,
            Event::Start(start) if !root_seen => {
                root_seen = true;
                writer.write_event(Event::Start(rewrite_start(&start, attributes)?))?;
            }
            Event::Empty(start) if !root_seen => {
                root_seen = true;
                writer.write_event(Event::Empty(rewrite_start(&start, attributes)?))?;
            }
            event => writer.write_event(event)?,
        }
    }

    Ok(String::from_utf8_lossy(&writer.into_inner()).into_owned())
}

/// Existing attributes keep their position; placeholder values replace them in
/// place or are appended. Adds a `viewBox` from width/height when missing so the
/// graphic scales.
fn rewrite_start(
    start: &BytesStart<'_>,
    attributes: &[Attribute],
) -> Result<BytesStart<'static>, quick_xml::Error> {
    let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
    let mut out = BytesStart::new(name);
    let mut pending: Vec<&Attribute> = attributes.iter().collect();
    let mut has_view_box = false;
    let mut width: Option<String> = None;
    let mut height: Option<String> = None;

    for attr in start.attributes() {
        let attr = attr?;
        let key = attr.key.as_ref();
        if key == DROPPED_ATTRIBUTE {
            continue;
        }
        if key == b"viewBox" {
            // An empty viewBox counts as missing and gets the width/height fallback.
            if attr.value.iter().all(u8::is_ascii_whitespace) {
                continue;
            }
            has_view_box = true;
        }
        if let Some(pos) = pending.iter().position(|a| a.name.as_bytes() == key) {
            let replacement = pending.remove(pos);
            track_size(&replacement.name, &replacement.value, &mut width, &mut height);
            out.push_attribute((replacement.name.as_str(), replacement.value.as_str()));
        } else {
            let value = attr.unescape_value()?;
            let key_str = String::from_utf8_lossy(key);
            track_size(&key_str, &value, &mut width, &mut height);
            out.push_attribute((key_str.as_ref(), value.as_ref()));
        }
    }
    for a in pending {
        track_size(&a.name, &a.value, &mut width, &mut height);
        out.push_attribute((a.name.as_str(), a.value.as_str()));
    }

    if !has_view_box {
        if let (Some(w), Some(h)) = (width, height) {
            out.push_attribute(("viewBox", format!("0 0 {} {}", w, h).as_str()));
        }
    }
    Ok(out)
}

fn track_size(name: &str, value: &str, width: &mut Option<String>, height: &mut Option<String>) {
    match name {
        "width" => *width = Some(value.to_string()),
        "height" => *height = Some(value.to_string()),
        _ => {}
    }
}
