/* packages/engine/rust/src/host.rs */

use patchwork_dom::{parse_html, Document, Element, NodePath};

use crate::assets::AssetElement;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
  Head,
  Body,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
  Prepend,
  Append,
}

/// The live document the composer mutates.
///
/// A placeholder handle is consumed by `replace`, so a replaced element can
/// never be addressed again.
pub trait Host {
  type Placeholder;

  /// First element whose `marker` attribute equals `name`.
  fn locate(&self, marker: &str, name: &str) -> Option<Self::Placeholder>;

  /// Replace the placeholder, tag included, with the parsed `html`.
  fn replace(&mut self, placeholder: Self::Placeholder, html: &str) -> bool;

  /// Insert one asset element. Returns false when the target container
  /// does not exist.
  fn insert(&mut self, target: Target, placement: Placement, element: AssetElement) -> bool;
}

impl From<AssetElement> for Element {
  fn from(asset: AssetElement) -> Self {
    match asset {
      AssetElement::Style(css) => Element::new("style").with_raw_text(&css),
      AssetElement::Stylesheet(href) => {
        Element::new("link").with_attr("rel", "stylesheet").with_attr("href", &href)
      }
      AssetElement::InlineScript(source) => Element::new("script").with_raw_text(&source),
      AssetElement::Script(src) => Element::new("script").with_attr("src", &src),
    }
  }
}

impl Host for Document {
  type Placeholder = NodePath;

  fn locate(&self, marker: &str, name: &str) -> Option<NodePath> {
    Document::locate(self, marker, name)
  }

  fn replace(&mut self, placeholder: NodePath, html: &str) -> bool {
    Document::replace(self, placeholder, parse_html(html))
  }

  fn insert(&mut self, target: Target, placement: Placement, element: AssetElement) -> bool {
    let container = match target {
      Target::Head => self.head_mut(),
      Target::Body => self.body_mut(),
    };
    let Some(container) = container else {
      log::warn!("document has no <{}>; dropping {element:?}", target.tag());
      return false;
    };
    let node = Element::from(element).into();
    match placement {
      Placement::Prepend => container.prepend(node),
      Placement::Append => container.append(node),
    }
    true
  }
}

impl Target {
  pub fn tag(self) -> &'static str {
    match self {
      Target::Head => "head",
      Target::Body => "body",
    }
  }
}
