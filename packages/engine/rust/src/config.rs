/* packages/engine/rust/src/config.rs */

use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::assets::Dependencies;
use crate::page::PageData;

/// Attribute that tags placeholder elements with a component name.
pub const DEFAULT_MARKER: &str = "data-component";

fn default_marker() -> String {
  DEFAULT_MARKER.to_string()
}

/// Everything needed for one composition pass.
///
/// Page fields sit at the top level; assets live under `[assets]` with one
/// table per class. All three classes must be present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
  #[serde(flatten)]
  pub page: PageData,
  #[serde(alias = "dependencies")]
  pub assets: Dependencies,
  #[serde(default = "default_marker")]
  pub marker: String,
}

impl SiteConfig {
  pub fn from_json_str(content: &str) -> Result<Self> {
    let config: Self = serde_json::from_str(content).context("invalid site config JSON")?;
    config.validate()?;
    Ok(config)
  }

  pub fn from_toml_str(content: &str) -> Result<Self> {
    let config: Self = toml::from_str(content).context("invalid site config TOML")?;
    config.validate()?;
    Ok(config)
  }

  pub fn validate(&self) -> Result<()> {
    if self.marker.trim().is_empty() {
      bail!("marker attribute must not be empty");
    }
    if self.marker.chars().any(|c| c.is_whitespace() || matches!(c, '"' | '\'' | '=' | '>')) {
      bail!("marker attribute \"{}\" is not a valid attribute name", self.marker);
    }
    Ok(())
  }
}

/// Load a site config from `path`; `.toml` files are read as TOML,
/// anything else as JSON.
pub fn load_site_config(path: &Path) -> Result<SiteConfig> {
  let content =
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
  let is_toml = path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));
  let parsed =
    if is_toml { SiteConfig::from_toml_str(&content) } else { SiteConfig::from_json_str(&content) };
  parsed.with_context(|| format!("failed to parse {}", path.display()))
}
