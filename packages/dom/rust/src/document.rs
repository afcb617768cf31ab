/* packages/dom/rust/src/document.rs */

use crate::node::{collect_by_tag, Element, Node};
use crate::parser::parse_html;
use crate::serialize::serialize;

/// Location of a node as child indices from the document root.
///
/// A path is only valid for the document state it was computed from, so it
/// is deliberately not `Clone`: `Document::replace` consumes it.
#[derive(Debug, PartialEq, Eq)]
pub struct NodePath(Vec<usize>);

impl NodePath {
  pub fn indices(&self) -> &[usize] {
    &self.0
  }
}

/// A parsed, mutable HTML document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
  nodes: Vec<Node>,
}

impl Document {
  pub fn parse(html: &str) -> Self {
    Self { nodes: parse_html(html) }
  }

  pub fn to_html(&self) -> String {
    serialize(&self.nodes)
  }

  pub fn head(&self) -> Option<&Element> {
    self.first_by_tag("head")
  }

  pub fn body(&self) -> Option<&Element> {
    self.first_by_tag("body")
  }

  pub fn head_mut(&mut self) -> Option<&mut Element> {
    self.first_by_tag_mut("head")
  }

  pub fn body_mut(&mut self) -> Option<&mut Element> {
    self.first_by_tag_mut("body")
  }

  /// All elements with `tag`, in document order.
  pub fn elements_by_tag(&self, tag: &str) -> Vec<&Element> {
    let mut out = Vec::new();
    collect_by_tag(&self.nodes, tag, &mut out);
    out
  }

  /// First element (document order) whose attribute `attr` equals `value`,
  /// the equivalent of `querySelector('[attr="value"]')`. Values compare in
  /// decoded form, so `a&amp;b` in markup matches `a&b`.
  pub fn locate(&self, attr: &str, value: &str) -> Option<NodePath> {
    let mut path = Vec::new();
    find_path(&self.nodes, &|el| el.attr(attr) == Some(value), &mut path).then_some(NodePath(path))
  }

  pub fn count_with_attr(&self, attr: &str, value: &str) -> usize {
    count_matching(&self.nodes, &|el| el.attr(attr) == Some(value))
  }

  /// Replace the node at `path` (tag and all) with `replacement`.
  /// Returns false when the path no longer points at a node.
  pub fn replace(&mut self, path: NodePath, replacement: Vec<Node>) -> bool {
    let Some((&last, parent)) = path.0.split_last() else {
      return false;
    };
    let Some(siblings) = children_at_mut(&mut self.nodes, parent) else {
      return false;
    };
    if last >= siblings.len() {
      return false;
    }
    siblings.splice(last..=last, replacement);
    true
  }

  fn first_by_tag(&self, tag: &str) -> Option<&Element> {
    self.elements_by_tag(tag).into_iter().next()
  }

  fn first_by_tag_mut(&mut self, tag: &str) -> Option<&mut Element> {
    let mut path = Vec::new();
    if !find_path(&self.nodes, &|el| el.tag == tag, &mut path) {
      return None;
    }
    let (&last, parent) = path.split_last()?;
    children_at_mut(&mut self.nodes, parent)?.get_mut(last)?.as_element_mut()
  }
}

fn find_path(nodes: &[Node], pred: &dyn Fn(&Element) -> bool, path: &mut Vec<usize>) -> bool {
  for (i, node) in nodes.iter().enumerate() {
    let Node::Element(el) = node else { continue };
    path.push(i);
    if pred(el) || find_path(&el.children, pred, path) {
      return true;
    }
    path.pop();
  }
  false
}

fn count_matching(nodes: &[Node], pred: &dyn Fn(&Element) -> bool) -> usize {
  nodes
    .iter()
    .filter_map(Node::as_element)
    .map(|el| usize::from(pred(el)) + count_matching(&el.children, pred))
    .sum()
}

fn children_at_mut<'a>(
  mut nodes: &'a mut Vec<Node>,
  path: &[usize],
) -> Option<&'a mut Vec<Node>> {
  for &index in path {
    nodes = match nodes.get_mut(index)? {
      Node::Element(el) => &mut el.children,
      _ => return None,
    };
  }
  Some(nodes)
}
