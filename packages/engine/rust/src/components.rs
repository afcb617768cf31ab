/* packages/engine/rust/src/components.rs */

//! Stock renderers for the `header` and `footer` regions.

use patchwork_dom::{escape_attr, escape_html};
use serde_json::Value;

use crate::context::RenderContext;

fn link_item(href: &str, label: &str) -> String {
  format!(
    r#"<li><a href="{}" target="_blank" rel="noreferrer">{}</a></li>"#,
    escape_attr(href),
    escape_html(label)
  )
}

/// Navigation bar: menu items from `data.menu_items` (`{name, url}`) on the
/// left, the page language switcher on the right.
pub fn header(data: &Value, ctx: &RenderContext<'_>) -> Option<String> {
  let items = data.get("menu_items")?.as_array()?;

  let mut menu = String::new();
  for item in items {
    let name = item.get("name")?.as_str()?;
    menu.push_str(&link_item(&ctx.resolve_value(item.get("url")), name));
  }

  let mut languages = String::new();
  for language in ctx.languages() {
    let href = ctx.resolve(&format!("/{}", language.slug));
    languages.push_str(&link_item(&href, &language.name));
  }

  Some(format!(
    concat!(
      r#"<header class="p-3"><nav class="container d-flex justify-content-between">"#,
      r#"<ul class="list-unstyled d-flex gap-3">{}</ul>"#,
      r#"<ul class="list-unstyled d-flex gap-3">{}</ul>"#,
      "</nav></header>"
    ),
    menu, languages
  ))
}

/// Footer with `data.slogan` and the site-wide `resource.copyright`.
pub fn footer(data: &Value, ctx: &RenderContext<'_>) -> Option<String> {
  let slogan = data.get("slogan")?.as_str()?;
  let copyright = ctx.page().resource_path("copyright").and_then(Value::as_str).unwrap_or_default();
  Some(format!(
    r#"<footer><div class="container"><p>{}</p><p class="small text-center">{}</p></div></footer>"#,
    escape_html(slogan),
    escape_html(copyright)
  ))
}
