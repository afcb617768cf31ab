/* packages/engine/rust/src/tests/mod.rs */

use super::*;
use patchwork_dom::Document;
use serde_json::json;

mod scenario;

const DOMAIN: &str = "http://localhost:3000";

fn site_config() -> SiteConfig {
  serde_json::from_value(json!({
    "domain": DOMAIN,
    "components": {
      "header": {
        "logo": "http://localhost:3000/logo.png",
        "menu_items": [
          {"slug": "home", "name": "Home", "url": "/"},
          {"slug": "about", "name": "About", "url": "/about"},
          {"slug": "contact", "name": "Contact", "url": "/contact"}
        ]
      },
      "footer": {"slogan": "This is the footer slogan"}
    },
    "css": "body { background-color: #f0f0f0; }",
    "languages": [
      {"slug": "fr", "name": "Français"},
      {"slug": "en", "name": "English"}
    ],
    "resource": {"copyright": "Copyright 2024"},
    "assets": {
      "styles": {
        "inline": [],
        "global": [
          "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css",
          "https://cdnjs.cloudflare.com/ajax/libs/bootstrap/5.3.3/css/bootstrap.min.css"
        ]
      },
      "head_scripts": {"inline": [], "global": ["https://code.jquery.com/jquery-3.7.1.min.js"]},
      "body_scripts": {"inline": ["console.log('Hello from inline script')"], "global": []}
    }
  }))
  .unwrap()
}

fn page_html() -> &'static str {
  concat!(
    "<!DOCTYPE html><html><head><meta charset=\"utf-8\"><title>Site</title></head><body>",
    "<div data-component=\"header\"></div>",
    "<main><h1>Content</h1></main>",
    "<div data-component=\"footer\"></div>",
    "</body></html>"
  )
}

/// Tags and identifying attribute/text of an element list, for order checks.
fn describe(elements: &[&patchwork_dom::Element]) -> Vec<String> {
  elements
    .iter()
    .map(|el| match el.tag.as_str() {
      "link" => format!("link:{}", el.attr("href").unwrap_or_default()),
      "script" => match el.attr("src") {
        Some(src) => format!("script:{src}"),
        None => format!("script:{}", el.text_content()),
      },
      _ => format!("{}:{}", el.tag, el.text_content()),
    })
    .collect()
}
