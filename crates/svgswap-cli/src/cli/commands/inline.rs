//! `svgswap inline` – rewrite HTML files, sharing one session across them.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use svgswap_core::config::SwapConfig;
use svgswap_core::SwapSession;
use url::Url;

pub async fn run_inline(
    cfg: &SwapConfig,
    inputs: &[PathBuf],
    out_dir: Option<&Path>,
    base: Option<&str>,
    strict: bool,
) -> Result<()> {
    if inputs.len() > 1 && out_dir.is_none() {
        anyhow::bail!("--out-dir is required with more than one input");
    }
    let fixed_base = base
        .map(Url::parse)
        .transpose()
        .context("invalid --base URL")?;
    let session = SwapSession::from_config(cfg)?;

    let mut failed = 0usize;
    for input in inputs {
        let html =
            fs::read_to_string(input).with_context(|| format!("read {}", input.display()))?;
        let base = match &fixed_base {
            Some(base) => base.clone(),
            None => file_base(input)?,
        };

        let report = session
            .swap_html(&html, Some(&base))
            .await
            .with_context(|| format!("rewrite {}", input.display()))?;
        for f in &report.failures {
            eprintln!(
                "warning: {}: placeholder #{} ({}): {}",
                input.display(),
                f.index,
                f.src.as_deref().unwrap_or("no src"),
                f.error
            );
        }
        failed += report.failures.len();
        tracing::info!(
            "{}: replaced {}/{} placeholder(s)",
            input.display(),
            report.replaced,
            report.placeholders
        );

        match out_dir {
            Some(dir) => {
                fs::create_dir_all(dir)?;
                let name = input
                    .file_name()
                    .ok_or_else(|| anyhow::anyhow!("input has no file name: {}", input.display()))?;
                let out = dir.join(name);
                fs::write(&out, &report.html)
                    .with_context(|| format!("write {}", out.display()))?;
            }
            None => print!("{}", report.html),
        }
    }

    let stats = session.cache().stats();
    tracing::info!(
        "fetched {} source(s), reused {} time(s)",
        stats.fetches,
        stats.reused()
    );

    if strict && failed > 0 {
        anyhow::bail!("{} placeholder(s) could not be replaced", failed);
    }
    Ok(())
}

/// `file://` URL of the input, so relative `src` values resolve beside it.
fn file_base(input: &Path) -> Result<Url> {
    let abs = fs::canonicalize(input).with_context(|| format!("resolve {}", input.display()))?;
    Url::from_file_path(&abs)
        .map_err(|_| anyhow::anyhow!("cannot build file URL for {}", abs.display()))
}
