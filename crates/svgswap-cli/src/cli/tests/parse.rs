use super::*;
use std::path::PathBuf;

#[test]
fn cli_parse_inline_single() {
    match parse(&["svgswap", "inline", "index.html"]) {
        CliCommand::Inline {
            inputs,
            out_dir,
            base,
            selector,
            no_cache,
            strict,
        } => {
            assert_eq!(inputs, vec![PathBuf::from("index.html")]);
            assert!(out_dir.is_none());
            assert!(base.is_none());
            assert!(selector.is_none());
            assert!(!no_cache);
            assert!(!strict);
        }
        _ => panic!("expected Inline"),
    }
}

#[test]
fn cli_parse_inline_with_flags() {
    match parse(&[
        "svgswap",
        "inline",
        "a.html",
        "b.html",
        "--out-dir",
        "dist",
        "--base",
        "https://example.com/",
        "--selector",
        "img.svg",
        "--no-cache",
        "--strict",
    ]) {
        CliCommand::Inline {
            inputs,
            out_dir,
            base,
            selector,
            no_cache,
            strict,
        } => {
            assert_eq!(inputs.len(), 2);
            assert_eq!(out_dir, Some(PathBuf::from("dist")));
            assert_eq!(base.as_deref(), Some("https://example.com/"));
            assert_eq!(selector.as_deref(), Some("img.svg"));
            assert!(no_cache);
            assert!(strict);
        }
        _ => panic!("expected Inline"),
    }
}

#[test]
fn cli_parse_inline_requires_input() {
    assert!(Cli::try_parse_from(["svgswap", "inline"]).is_err());
}

#[test]
fn cli_parse_render() {
    match parse(&[
        "svgswap",
        "render",
        "sprite.svg",
        "--symbol",
        "icon-home",
        "--class",
        "icon",
        "--width",
        "16",
    ]) {
        CliCommand::Render {
            src,
            symbol,
            id,
            class,
            width,
            height,
        } => {
            assert_eq!(src, "sprite.svg");
            assert_eq!(symbol.as_deref(), Some("icon-home"));
            assert!(id.is_none());
            assert_eq!(class.as_deref(), Some("icon"));
            assert_eq!(width.as_deref(), Some("16"));
            assert!(height.is_none());
        }
        _ => panic!("expected Render"),
    }
}

#[test]
fn cli_parse_config() {
    match parse(&["svgswap", "config"]) {
        CliCommand::Config => {}
        _ => panic!("expected Config"),
    }
}

#[test]
fn overrides_win_over_config() {
    let cfg = super::super::apply_overrides(
        svgswap_core::config::SwapConfig::default(),
        Some("img.icon".to_string()),
        true,
    );
    assert_eq!(cfg.selector, "img.icon");
    assert!(cfg.disable_cache);

    let cfg = super::super::apply_overrides(svgswap_core::config::SwapConfig::default(), None, false);
    assert_eq!(cfg.selector, svgswap_core::config::SwapConfig::default().selector);
    assert!(!cfg.disable_cache);
}
