//! `svgswap render` – inline a single SVG and print it.

use anyhow::{Context, Result};
use svgswap_core::config::SwapConfig;
use svgswap_core::{Placeholder, SwapSession};
use url::Url;

/// Placeholder attributes given on the command line.
#[derive(Debug, Clone, Default)]
pub struct RenderArgs {
    pub src: String,
    pub symbol: Option<String>,
    pub id: Option<String>,
    pub class: Option<String>,
    pub width: Option<String>,
    pub height: Option<String>,
}

impl RenderArgs {
    fn placeholder(&self) -> Placeholder {
        Placeholder::from_lookup(|name| match name {
            "src" => Some(self.src.clone()),
            "sprite-symbol" => self.symbol.clone(),
            "id" => self.id.clone(),
            "class" => self.class.clone(),
            "width" => self.width.clone(),
            "height" => self.height.clone(),
            _ => None,
        })
    }
}

/// Returns the inline SVG. Relative paths resolve against the working directory.
pub async fn run_render(cfg: &SwapConfig, args: &RenderArgs) -> Result<String> {
    let session = SwapSession::from_config(cfg)?;
    let cwd = std::env::current_dir()?;
    let base = Url::from_directory_path(&cwd)
        .map_err(|_| anyhow::anyhow!("cannot use {} as base URL", cwd.display()))?;
    session
        .inline(Some(&base), &args.placeholder())
        .await
        .with_context(|| format!("render {}", args.src))
}
