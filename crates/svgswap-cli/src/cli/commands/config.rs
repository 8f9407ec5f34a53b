//! `svgswap config` – show where settings live and what is in effect.

use anyhow::Result;
use svgswap_core::config::{self, SwapConfig};

pub fn run_config(cfg: &SwapConfig) -> Result<()> {
    println!("# {}", config::config_path()?.display());
    print!("{}", toml::to_string_pretty(cfg)?);
    Ok(())
}
