/* packages/engine/rust/src/compose.rs */

use std::fmt;

use serde_json::{Map, Value};

use crate::assets::{inject, AssetKind, Dependencies};
use crate::config::{SiteConfig, DEFAULT_MARKER};
use crate::context::RenderContext;
use crate::host::Host;
use crate::page::PageData;
use crate::registry::Registry;

/// What happened to one entry of the component map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
  /// The placeholder was replaced with the rendered markup.
  Rendered,
  /// No registered component carries this name.
  MissingComponentDescriptor,
  /// The component exists but the document has no placeholder for it.
  MissingPlaceholderElement,
  /// The renderer returned nothing; the placeholder is left as is.
  EmptyRenderResult,
}

impl RenderOutcome {
  pub fn is_rendered(self) -> bool {
    self == RenderOutcome::Rendered
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentReport {
  pub name: String,
  pub outcome: RenderOutcome,
}

impl fmt::Display for ComponentReport {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let name = &self.name;
    match self.outcome {
      RenderOutcome::Rendered => write!(f, "{name} rendered"),
      RenderOutcome::MissingComponentDescriptor => write!(f, "{name} component HTML is missing"),
      RenderOutcome::MissingPlaceholderElement => write!(f, "{name} element is missing"),
      RenderOutcome::EmptyRenderResult => {
        write!(f, "there is a {name} element but no HTML")
      }
    }
  }
}

/// Result of one `Composer::init` pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompositionReport {
  pub components: Vec<ComponentReport>,
  pub styles: usize,
  pub head_scripts: usize,
  pub body_scripts: usize,
}

impl CompositionReport {
  pub fn rendered(&self) -> impl Iterator<Item = &str> {
    self.components.iter().filter(|r| r.outcome.is_rendered()).map(|r| r.name.as_str())
  }

  /// Entries that were skipped, with the reason.
  pub fn skipped(&self) -> impl Iterator<Item = &ComponentReport> {
    self.components.iter().filter(|r| !r.outcome.is_rendered())
  }

  pub fn outcome(&self, name: &str) -> Option<RenderOutcome> {
    self.components.iter().find(|r| r.name == name).map(|r| r.outcome)
  }
}

/// Replaces component placeholders and injects page assets.
///
/// Page data and registry are fixed at construction; the only thing a pass
/// mutates is the host document.
#[derive(Debug)]
pub struct Composer {
  page: PageData,
  assets: Dependencies,
  registry: Registry,
  marker: String,
}

impl Composer {
  pub fn new(page: PageData, assets: Dependencies, registry: Registry) -> Self {
    Self { page, assets, registry, marker: DEFAULT_MARKER.to_string() }
  }

  pub fn from_config(config: SiteConfig, registry: Registry) -> Self {
    Self { page: config.page, assets: config.assets, registry, marker: config.marker }
  }

  /// Use `marker` instead of `data-component` to find placeholders.
  pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
    self.marker = marker.into();
    self
  }

  pub fn page(&self) -> &PageData {
    &self.page
  }

  pub fn context(&self) -> RenderContext<'_> {
    RenderContext::new(&self.page)
  }

  /// Render the page's components, then inject styles, head scripts and
  /// body scripts, in that order. Never fails: problems are logged and
  /// reported.
  pub fn init<H: Host>(&self, host: &mut H) -> CompositionReport {
    let components = self.render_all(host, &self.page.components);
    let (styles, head_scripts, body_scripts) = self.inject_assets(host);
    let report = CompositionReport { components, styles, head_scripts, body_scripts };
    log::debug!(
      "composition done: {} rendered, {} skipped",
      report.rendered().count(),
      report.skipped().count()
    );
    report
  }

  /// Render every entry of `components` into its placeholder.
  pub fn render_all<H: Host>(
    &self,
    host: &mut H,
    components: &Map<String, Value>,
  ) -> Vec<ComponentReport> {
    components
      .iter()
      .map(|(name, data)| {
        let outcome = self.render_component(host, name, data);
        let report = ComponentReport { name: name.clone(), outcome };
        if !report.outcome.is_rendered() {
          log::info!("{report}");
        }
        report
      })
      .collect()
  }

  /// Render one component and substitute it for its placeholder.
  pub fn render_component<H: Host>(
    &self,
    host: &mut H,
    name: &str,
    data: &Value,
  ) -> RenderOutcome {
    let Some(component) = self.registry.find(name) else {
      return RenderOutcome::MissingComponentDescriptor;
    };
    let Some(placeholder) = host.locate(&self.marker, &component.name) else {
      return RenderOutcome::MissingPlaceholderElement;
    };
    let html = match component.render(data, &self.context()) {
      Some(html) if !html.is_empty() => html,
      _ => return RenderOutcome::EmptyRenderResult,
    };
    if !host.replace(placeholder, &html) {
      return RenderOutcome::MissingPlaceholderElement;
    }
    log::debug!("rendered component {name}");
    RenderOutcome::Rendered
  }

  /// Inject the three manifests. The page's own `css` is pushed last onto
  /// the inline styles, so the prepend puts it first in `<head>`. Returns
  /// the inserted counts per class.
  pub fn inject_assets<H: Host>(&self, host: &mut H) -> (usize, usize, usize) {
    let domain = &self.page.domain;
    let mut styles = self.assets.styles.clone();
    styles.inline.push(self.page.css.clone());
    (
      inject(host, AssetKind::Style, &styles, domain),
      inject(host, AssetKind::HeadScript, &self.assets.head_scripts, domain),
      inject(host, AssetKind::BodyScript, &self.assets.body_scripts, domain),
    )
  }
}
