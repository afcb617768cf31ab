/* packages/engine/wasm/src/lib.rs */

use patchwork_engine::{Registry, SiteConfig};
use serde_json::json;
use wasm_bindgen::prelude::*;

/// Run one composition pass over `html` with the built-in components.
/// Returns `html` unchanged when `site_json` is not a valid site config.
#[wasm_bindgen]
pub fn compose(html: &str, site_json: &str) -> String {
  patchwork_engine::compose_html(html, site_json)
}

/// Like `compose`, but returns `{"html": ..., "rendered": [...], "skipped": [...]}`
/// so the caller can surface diagnostics.
#[wasm_bindgen]
pub fn compose_with_report(html: &str, site_json: &str) -> String {
  let config = match SiteConfig::from_json_str(site_json) {
    Ok(c) => c,
    Err(e) => return json!({ "error": format!("{e:#}") }).to_string(),
  };
  let (out, report) = patchwork_engine::compose_document(html, config, Registry::builtin());
  let rendered: Vec<&str> = report.rendered().collect();
  let skipped: Vec<String> = report.skipped().map(ToString::to_string).collect();
  json!({ "html": out, "rendered": rendered, "skipped": skipped }).to_string()
}

/// Resolve `path` against `domain`. An empty path yields the no-op href.
#[wasm_bindgen]
pub fn resolve_url(domain: &str, path: &str) -> String {
  patchwork_engine::resolve(domain, Some(path))
}

#[cfg(test)]
mod tests {
  use super::*;

  const SITE: &str = r#"{
    "domain": "http://localhost:3000",
    "components": {"footer": {"slogan": "s"}, "header": {"menu_items": []}},
    "assets": {"styles": {"global": []}, "head_scripts": {"global": []}, "body_scripts": {"global": []}}
  }"#;

  #[test]
  fn resolve_url_empty_is_noop() {
    assert_eq!(resolve_url("http://x", ""), "javascript:;");
    assert_eq!(resolve_url("http://x", "/a"), "http://x/a");
  }

  #[test]
  fn report_json_shape() {
    let out = compose_with_report(r#"<body><div data-component="footer"></div></body>"#, SITE);
    let v: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(v["rendered"], json!(["footer"]));
    assert_eq!(v["skipped"], json!(["header element is missing"]));
    assert!(v["html"].as_str().unwrap().contains("<footer>"));
  }

  #[test]
  fn report_json_error() {
    let out = compose_with_report("<p></p>", "{}");
    let v: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert!(v["error"].as_str().unwrap().contains("invalid site config"));
  }
}
