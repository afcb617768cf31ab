/* packages/dom/rust/src/node.rs */

use crate::escape::escape_html;

/// Elements that never have children or a closing tag.
pub(crate) const VOID_ELEMENTS: &[&str] = &[
  "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
  "track", "wbr",
];

/// Elements whose content is kept verbatim until the matching closing tag.
pub(crate) const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style", "textarea", "title"];

pub(crate) fn is_void(tag: &str) -> bool {
  VOID_ELEMENTS.contains(&tag)
}

pub(crate) fn is_raw_text(tag: &str) -> bool {
  RAW_TEXT_ELEMENTS.contains(&tag)
}

/// A single attribute. `value` holds the decoded DOM value and is escaped
/// only when serialized; `None` means a bare attribute such as `defer`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
  pub name: String,
  pub value: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
  pub tag: String,
  pub attrs: Vec<Attribute>,
  pub children: Vec<Node>,
  pub self_closing: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
  Element(Element),
  Text(String),
  Comment(String),
  Doctype(String),
}

impl Element {
  pub fn new(tag: impl Into<String>) -> Self {
    Self {
      tag: tag.into().to_ascii_lowercase(),
      attrs: Vec::new(),
      children: Vec::new(),
      self_closing: false,
    }
  }

  pub fn with_attr(mut self, name: &str, value: &str) -> Self {
    self.attrs.push(Attribute { name: name.to_ascii_lowercase(), value: Some(value.to_string()) });
    self
  }

  /// Append an escaped text child.
  pub fn with_text(mut self, text: &str) -> Self {
    self.children.push(Node::Text(escape_html(text)));
    self
  }

  /// Append a verbatim text child. Used for `<script>` and `<style>` bodies,
  /// which the HTML parser never decodes.
  pub fn with_raw_text(mut self, text: &str) -> Self {
    self.children.push(Node::Text(text.to_string()));
    self
  }

  /// Value of the first attribute named `name`. Bare attributes report an
  /// empty string.
  pub fn attr(&self, name: &str) -> Option<&str> {
    self
      .attrs
      .iter()
      .find(|a| a.name.eq_ignore_ascii_case(name))
      .map(|a| a.value.as_deref().unwrap_or(""))
  }

  /// Concatenated text of all descendant text nodes.
  pub fn text_content(&self) -> String {
    let mut out = String::new();
    collect_text(&self.children, &mut out);
    out
  }

  /// Direct element children, skipping text and comments.
  pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
    self.children.iter().filter_map(Node::as_element)
  }

  /// All descendant elements with the given tag, in document order.
  pub fn descendants_by_tag<'a>(&'a self, tag: &str) -> Vec<&'a Element> {
    let mut out = Vec::new();
    collect_by_tag(&self.children, tag, &mut out);
    out
  }

  pub fn prepend(&mut self, node: Node) {
    self.children.insert(0, node);
  }

  pub fn append(&mut self, node: Node) {
    self.children.push(node);
  }
}

impl Node {
  pub fn as_element(&self) -> Option<&Element> {
    match self {
      Node::Element(el) => Some(el),
      _ => None,
    }
  }

  pub fn as_element_mut(&mut self) -> Option<&mut Element> {
    match self {
      Node::Element(el) => Some(el),
      _ => None,
    }
  }
}

impl From<Element> for Node {
  fn from(el: Element) -> Self {
    Node::Element(el)
  }
}

fn collect_text(nodes: &[Node], out: &mut String) {
  for node in nodes {
    match node {
      Node::Text(t) => out.push_str(t),
      Node::Element(el) => collect_text(&el.children, out),
      Node::Comment(_) | Node::Doctype(_) => {}
    }
  }
}

pub(crate) fn collect_by_tag<'a>(nodes: &'a [Node], tag: &str, out: &mut Vec<&'a Element>) {
  for node in nodes {
    if let Node::Element(el) = node {
      if el.tag == tag {
        out.push(el);
      }
      collect_by_tag(&el.children, tag, out);
    }
  }
}
