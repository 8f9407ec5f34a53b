//! HTML passes over placeholder elements (lol_html).
//!
//! Placeholders are matched twice with the same selector: once to collect
//! them, once to replace them. Both passes see the same elements in the same
//! document order, so the n-th match of the second pass is the n-th placeholder.

use lol_html::html_content::ContentType;
use lol_html::{element, rewrite_str, RewriteStrSettings, Selector};

use crate::error::SwapError;
use crate::placeholder::Placeholder;

pub(crate) fn validate_selector(selector: &str) -> Result<(), SwapError> {
    selector
        .parse::<Selector>()
        .map(|_| ())
        .map_err(|e| SwapError::InvalidSelector {
            selector: selector.to_string(),
            reason: e.to_string(),
        })
}

/// Placeholders matching `selector`, in document order.
pub(crate) fn collect_placeholders(
    html: &str,
    selector: &str,
) -> Result<Vec<Placeholder>, SwapError> {
    let mut found = Vec::new();
    let collected = rewrite_str(
        html,
        RewriteStrSettings {
            element_content_handlers: vec![element!(selector, |el| {
                // lol_html hands back attribute text with entities still encoded.
                found.push(Placeholder::from_lookup(|name| {
                    el.get_attribute(name)
                        .map(|value| htmlize::unescape_attribute(value).into_owned())
                }));
                Ok(())
            })],
            ..RewriteStrSettings::new()
        },
    );
    collected.map_err(|e| SwapError::Rewrite(e.to_string()))?;
    Ok(found)
}

/// Replace the n-th match with `replacements[n]`; `None` leaves it untouched.
pub(crate) fn replace_placeholders(
    html: &str,
    selector: &str,
    replacements: &[Option<String>],
) -> Result<String, SwapError> {
    let mut index = 0usize;
    let rewritten = rewrite_str(
        html,
        RewriteStrSettings {
            element_content_handlers: vec![element!(selector, |el| {
                if let Some(Some(svg)) = replacements.get(index) {
                    el.replace(svg, ContentType::Html);
                }
                index += 1;
                Ok(())
            })],
            ..RewriteStrSettings::new()
        },
    );
    match rewritten {
        Ok(out) => Ok(out),
        Err(e) => Err(SwapError::Rewrite(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<p><img src="a.svg" class="x"><img alt="no src"><img src="b.svg" sprite-symbol="s1" width="8"></p>"#;

    #[test]
    fn collects_in_document_order() {
        let found = collect_placeholders(PAGE, "img").unwrap();
        assert_eq!(found.len(), 3);
        assert_eq!(found[0].src.as_deref(), Some("a.svg"));
        assert_eq!(found[0].attribute("class"), Some("x"));
        assert!(found[1].src.is_none());
        assert_eq!(found[2].symbol.as_deref(), Some("s1"));
        assert_eq!(found[2].attribute("width"), Some("8"));
    }

    #[test]
    fn replaces_only_resolved_matches() {
        let out = replace_placeholders(
            PAGE,
            "img",
            &[
                Some("<svg>A</svg>".to_string()),
                None,
                Some("<svg>B</svg>".to_string()),
            ],
        )
        .unwrap();
        assert_eq!(
            out,
            r#"<p><svg>A</svg><img alt="no src"><svg>B</svg></p>"#
        );
    }

    #[test]
    fn attribute_entities_are_decoded() {
        let page = r#"<img src="/icons/a.svg?x=1&amp;y=2" class="a&amp;b" id="&quot;q&quot;">"#;
        let found = collect_placeholders(page, "img").unwrap();
        assert_eq!(found[0].src.as_deref(), Some("/icons/a.svg?x=1&y=2"));
        assert_eq!(found[0].attribute("class"), Some("a&b"));
        assert_eq!(found[0].attribute("id"), Some("\"q\""));
    }

    #[test]
    fn selector_is_validated() {
        assert!(validate_selector(r#"img[src$=".svg"]"#).is_ok());
        assert!(matches!(
            validate_selector("img[[["),
            Err(SwapError::InvalidSelector { .. })
        ));
    }
}
