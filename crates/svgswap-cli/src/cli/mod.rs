//! CLI for svgswap.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use svgswap_core::config::{self, SwapConfig};

use commands::{run_config, run_inline, run_render, RenderArgs};

/// Top-level CLI for svgswap.
#[derive(Debug, Parser)]
#[command(name = "svgswap")]
#[command(about = "svgswap: inline external SVG files and sprite symbols into HTML", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Replace SVG placeholders in HTML files with inline SVG.
    Inline {
        /// HTML files to rewrite. All files share one content cache.
        #[arg(required = true)]
        inputs: Vec<PathBuf>,
        /// Write rewritten files into DIR (same file names). Required for more than one input.
        #[arg(long, value_name = "DIR")]
        out_dir: Option<PathBuf>,
        /// Base URL for relative `src` values (default: each input file's location).
        #[arg(long, value_name = "URL")]
        base: Option<String>,
        /// CSS selector for placeholder elements (overrides config).
        #[arg(long)]
        selector: Option<String>,
        /// Fetch every placeholder independently instead of sharing content.
        #[arg(long)]
        no_cache: bool,
        /// Fail if any placeholder could not be replaced.
        #[arg(long)]
        strict: bool,
    },

    /// Print one SVG file (or sprite symbol) as it would be inlined.
    Render {
        /// URL or local path of the SVG file.
        src: String,
        /// Symbol id inside an SVG sprite.
        #[arg(long)]
        symbol: Option<String>,
        /// `id` to set on the produced <svg>.
        #[arg(long)]
        id: Option<String>,
        /// `class` to set on the produced <svg>.
        #[arg(long)]
        class: Option<String>,
        /// `width` to set on the produced <svg>.
        #[arg(long)]
        width: Option<String>,
        /// `height` to set on the produced <svg>.
        #[arg(long)]
        height: Option<String>,
    },

    /// Show the config file path and effective settings.
    Config,
}

/// Command-line flags win over config.toml.
fn apply_overrides(mut cfg: SwapConfig, selector: Option<String>, no_cache: bool) -> SwapConfig {
    if let Some(selector) = selector {
        cfg.selector = selector;
    }
    if no_cache {
        cfg.disable_cache = true;
    }
    cfg
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Inline {
                inputs,
                out_dir,
                base,
                selector,
                no_cache,
                strict,
            } => {
                let cfg = apply_overrides(cfg, selector, no_cache);
                run_inline(&cfg, &inputs, out_dir.as_deref(), base.as_deref(), strict).await?;
            }
            CliCommand::Render {
                src,
                symbol,
                id,
                class,
                width,
                height,
            } => {
                let args = RenderArgs {
                    src,
                    symbol,
                    id,
                    class,
                    width,
                    height,
                };
                let svg = run_render(&cfg, &args).await?;
                println!("{}", svg);
            }
            CliCommand::Config => run_config(&cfg)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
