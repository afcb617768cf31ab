/* packages/engine/rust/src/tests/scenario.rs */

use super::*;

#[test]
fn full_page_composition() {
  let composer = Composer::from_config(site_config(), Registry::builtin());
  let mut doc = Document::parse(page_html());
  let report = composer.init(&mut doc);

  let rendered: Vec<&str> = report.rendered().collect();
  assert_eq!(rendered, vec!["footer", "header"]);
  assert_eq!(report.skipped().count(), 0);
  assert_eq!((report.styles, report.head_scripts, report.body_scripts), (3, 1, 1));

  assert_eq!(doc.count_with_attr("data-component", "header"), 0);
  assert_eq!(doc.count_with_attr("data-component", "footer"), 0);
  assert_eq!(doc.elements_by_tag("header").len(), 1);
  assert_eq!(doc.elements_by_tag("footer").len(), 1);
  // Untouched content survives
  assert!(doc.to_html().contains("<main><h1>Content</h1></main>"));
}

#[test]
fn home_link_resolves_against_domain() {
  let composer = Composer::from_config(site_config(), Registry::builtin());
  let mut doc = Document::parse(page_html());
  composer.init(&mut doc);

  let header = doc.elements_by_tag("header")[0];
  let home = header
    .descendants_by_tag("a")
    .into_iter()
    .find(|a| a.text_content() == "Home")
    .expect("home link");
  assert_eq!(home.attr("href"), Some("http://localhost:3000/"));

  let hrefs: Vec<&str> =
    header.descendants_by_tag("a").into_iter().filter_map(|a| a.attr("href")).collect();
  assert_eq!(hrefs, vec![
    "http://localhost:3000/",
    "http://localhost:3000/about",
    "http://localhost:3000/contact",
    "http://localhost:3000/fr",
    "http://localhost:3000/en",
  ]);
}

#[test]
fn footer_reads_shared_resource() {
  let composer = Composer::from_config(site_config(), Registry::builtin());
  let mut doc = Document::parse(page_html());
  composer.init(&mut doc);
  let footer = doc.elements_by_tag("footer")[0];
  assert!(footer.text_content().contains("This is the footer slogan"));
  assert!(footer.text_content().contains("Copyright 2024"));
}

#[test]
fn missing_placeholder_isolated() {
  let composer = Composer::from_config(site_config(), Registry::builtin());
  let mut doc =
    Document::parse(r#"<html><head></head><body><div data-component="footer"></div></body></html>"#);
  let report = composer.init(&mut doc);
  assert_eq!(report.outcome("header"), Some(RenderOutcome::MissingPlaceholderElement));
  assert_eq!(report.outcome("footer"), Some(RenderOutcome::Rendered));
  assert_eq!(doc.elements_by_tag("footer").len(), 1);
}

#[test]
fn unregistered_components_are_skipped() {
  let composer = Composer::from_config(site_config(), Registry::default());
  let mut doc = Document::parse(page_html());
  let report = composer.init(&mut doc);
  assert!(report
    .components
    .iter()
    .all(|r| r.outcome == RenderOutcome::MissingComponentDescriptor));
  assert_eq!(doc.count_with_attr("data-component", "header"), 1);
  // Assets are injected regardless
  assert_eq!(report.head_scripts, 1);
}

#[test]
fn renderer_sees_context_not_sibling_output() {
  let registry = Registry::new(vec![
    ComponentDescriptor::new("a", |_, ctx| {
      Some(format!(r#"<p id="a">{}</p>"#, ctx.languages().len()))
    }),
    ComponentDescriptor::new("b", |_, ctx| Some(format!(r#"<p id="b">{}</p>"#, ctx.domain()))),
  ]);
  let mut page = PageData::new(DOMAIN);
  page.components = json!({"a": {}, "b": {}}).as_object().cloned().unwrap_or_default();
  let composer = Composer::new(page, Dependencies::default(), registry);
  let mut doc = Document::parse(r#"<div data-component="a"></div><div data-component="b"></div>"#);
  composer.render_all(&mut doc, &composer.page().components);
  assert_eq!(doc.to_html(), r#"<p id="a">0</p><p id="b">http://localhost:3000</p>"#);
}
