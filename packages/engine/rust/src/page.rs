/* packages/engine/rust/src/page.rs */

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One entry of the site language switcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
  pub slug: String,
  pub name: String,
}

/// Root page description consumed by the composer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageData {
  /// Origin every relative link and asset path is resolved against.
  pub domain: String,
  /// Per-component data keyed by component name.
  #[serde(default)]
  pub components: Map<String, Value>,
  /// Page stylesheet. Pushed last onto the inline styles, so it ends up
  /// first in `<head>`.
  #[serde(default)]
  pub css: String,
  #[serde(default)]
  pub languages: Vec<Language>,
  /// Free-form data for renderers (copyright text and the like).
  #[serde(default)]
  pub resource: Value,
}

impl PageData {
  pub fn new(domain: impl Into<String>) -> Self {
    Self {
      domain: domain.into(),
      components: Map::new(),
      css: String::new(),
      languages: Vec::new(),
      resource: Value::Null,
    }
  }

  /// Look up a dotted path inside `resource`, e.g. `"footer.copyright"`.
  pub fn resource_path(&self, path: &str) -> Option<&Value> {
    let mut current = &self.resource;
    for key in path.split('.') {
      current = current.get(key)?;
    }
    Some(current)
  }
}
