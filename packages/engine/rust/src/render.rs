/* packages/engine/rust/src/render.rs */

use patchwork_dom::Document;

use crate::compose::{Composer, CompositionReport};
use crate::config::SiteConfig;
use crate::registry::Registry;

/// Compose a full HTML document: parse it, run one composition pass with
/// `registry`, and serialize the result.
pub fn compose_document(
  html: &str,
  config: SiteConfig,
  registry: Registry,
) -> (String, CompositionReport) {
  let mut doc = Document::parse(html);
  let report = Composer::from_config(config, registry).init(&mut doc);
  (doc.to_html(), report)
}

/// String-in, string-out entry point using the built-in components.
///
/// `site_json` is a serialized `SiteConfig`. When it does not parse, the
/// document is returned untouched.
pub fn compose_html(html: &str, site_json: &str) -> String {
  let config = match SiteConfig::from_json_str(site_json) {
    Ok(c) => c,
    Err(e) => {
      log::warn!("skipping composition: {e:#}");
      return html.to_string();
    }
  };
  compose_document(html, config, Registry::builtin()).0
}
