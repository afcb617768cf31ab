/* packages/engine/rust/src/assets.rs */

use serde::{Deserialize, Serialize};

use crate::host::{Host, Placement, Target};
use crate::url::resolve;

/// Inline contents and remote URLs for one asset class.
///
/// `inline` may be omitted; `global` may not. A manifest without `global`
/// fails to deserialize.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetManifest {
  #[serde(default)]
  pub inline: Vec<String>,
  pub global: Vec<String>,
}

/// The three asset classes injected at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependencies {
  pub styles: AssetManifest,
  #[serde(alias = "headScripts")]
  pub head_scripts: AssetManifest,
  #[serde(alias = "bodyScripts")]
  pub body_scripts: AssetManifest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
  Style,
  HeadScript,
  BodyScript,
}

impl AssetKind {
  pub fn target(self) -> Target {
    match self {
      AssetKind::Style | AssetKind::HeadScript => Target::Head,
      AssetKind::BodyScript => Target::Body,
    }
  }

  /// Styles are prepended one at a time, which reverses manifest order.
  /// Scripts are appended and keep it.
  pub fn placement(self) -> Placement {
    match self {
      AssetKind::Style => Placement::Prepend,
      AssetKind::HeadScript | AssetKind::BodyScript => Placement::Append,
    }
  }

  pub fn label(self) -> &'static str {
    match self {
      AssetKind::Style => "style",
      AssetKind::HeadScript => "head script",
      AssetKind::BodyScript => "body script",
    }
  }
}

/// A host-independent description of one element to insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetElement {
  /// `<style>` with literal CSS.
  Style(String),
  /// `<link rel="stylesheet">` with a resolved href.
  Stylesheet(String),
  /// `<script>` with literal source.
  InlineScript(String),
  /// `<script>` with a resolved src.
  Script(String),
}

/// Elements for `manifest`, in insertion order: every inline entry first,
/// then every global entry.
pub fn asset_elements(
  kind: AssetKind,
  manifest: &AssetManifest,
  domain: &str,
) -> Vec<AssetElement> {
  let inline = manifest.inline.iter().map(|content| match kind {
    AssetKind::Style => AssetElement::Style(content.clone()),
    AssetKind::HeadScript | AssetKind::BodyScript => AssetElement::InlineScript(content.clone()),
  });
  let global = manifest.global.iter().map(|url| {
    let url = resolve(domain, Some(url));
    match kind {
      AssetKind::Style => AssetElement::Stylesheet(url),
      AssetKind::HeadScript | AssetKind::BodyScript => AssetElement::Script(url),
    }
  });
  inline.chain(global).collect()
}

/// Insert every element of `manifest` into the host. Returns how many
/// elements were actually inserted.
pub fn inject<H: Host>(
  host: &mut H,
  kind: AssetKind,
  manifest: &AssetManifest,
  domain: &str,
) -> usize {
  let (target, placement) = (kind.target(), kind.placement());
  let mut inserted = 0;
  for element in asset_elements(kind, manifest, domain) {
    if host.insert(target, placement, element) {
      inserted += 1;
    }
  }
  log::debug!("injected {inserted} {} element(s)", kind.label());
  inserted
}

#[cfg(test)]
mod tests {
  use super::*;
  use patchwork_dom::Document;
  use serde_json::json;

  const DOMAIN: &str = "http://localhost:3000";

  fn manifest(inline: &[&str], global: &[&str]) -> AssetManifest {
    AssetManifest {
      inline: inline.iter().map(|s| (*s).to_string()).collect(),
      global: global.iter().map(|s| (*s).to_string()).collect(),
    }
  }

  fn doc() -> Document {
    Document::parse("<html><head><title>T</title></head><body><p>x</p></body></html>")
  }

  #[test]
  fn inline_is_optional_global_is_not() {
    let m: AssetManifest = serde_json::from_value(json!({"global": ["/a.js"]})).unwrap();
    assert!(m.inline.is_empty());
    let err = serde_json::from_value::<AssetManifest>(json!({"inline": ["x"]})).unwrap_err();
    assert!(err.to_string().contains("global"));
  }

  #[test]
  fn dependencies_accept_camel_case_keys() {
    let deps: Dependencies = serde_json::from_value(json!({
      "styles": {"global": []},
      "headScripts": {"global": ["https://code.jquery.com/jquery-3.7.1.min.js"]},
      "bodyScripts": {"inline": ["console.log('hi')"], "global": []}
    }))
    .unwrap();
    assert_eq!(deps.head_scripts.global.len(), 1);
    assert_eq!(deps.body_scripts.inline, vec!["console.log('hi')"]);
  }

  #[test]
  fn elements_inline_before_global() {
    let elements = asset_elements(AssetKind::HeadScript, &manifest(&["s1"], &["/u1.js"]), DOMAIN);
    assert_eq!(elements, vec![
      AssetElement::InlineScript("s1".into()),
      AssetElement::Script("http://localhost:3000/u1.js".into()),
    ]);
  }

  #[test]
  fn head_scripts_keep_manifest_order() {
    let mut doc = doc();
    let n = inject(&mut doc, AssetKind::HeadScript, &manifest(&["s1", "s2"], &["/u1.js"]), DOMAIN);
    assert_eq!(n, 3);
    assert!(doc.to_html().contains(concat!(
      "<title>T</title><script>s1</script><script>s2</script>",
      "<script src=\"http://localhost:3000/u1.js\"></script></head>"
    )));
  }

  #[test]
  fn body_scripts_append_to_body() {
    let mut doc = doc();
    inject(&mut doc, AssetKind::BodyScript, &manifest(&["run()"], &["https://cdn/x.js"]), DOMAIN);
    assert!(doc.to_html().ends_with(concat!(
      "<p>x</p><script>run()</script><script src=\"https://cdn/x.js\"></script></body></html>"
    )));
  }

  #[test]
  fn styles_prepend_reverses_order() {
    let mut doc = doc();
    inject(&mut doc, AssetKind::Style, &manifest(&["c1", "c2"], &["/u1.css", "/u2.css"]), DOMAIN);
    assert!(doc.to_html().contains(concat!(
      "<head>",
      "<link rel=\"stylesheet\" href=\"http://localhost:3000/u2.css\">",
      "<link rel=\"stylesheet\" href=\"http://localhost:3000/u1.css\">",
      "<style>c2</style><style>c1</style>",
      "<title>T</title></head>"
    )));
  }

  #[test]
  fn empty_manifest_inserts_nothing() {
    let mut doc = doc();
    let before = doc.to_html();
    assert_eq!(inject(&mut doc, AssetKind::Style, &AssetManifest::default(), DOMAIN), 0);
    assert_eq!(doc.to_html(), before);
  }

  #[test]
  fn missing_body_drops_body_scripts() {
    let mut doc = Document::parse("<head></head>");
    assert_eq!(inject(&mut doc, AssetKind::BodyScript, &manifest(&["x"], &[]), DOMAIN), 0);
    assert_eq!(doc.to_html(), "<head></head>");
  }
}
