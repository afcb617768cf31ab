/* packages/dom/rust/src/serialize.rs */

use crate::escape::escape_attr;
use crate::node::{is_void, Element, Node};

/// Serialize nodes back to HTML.
pub fn serialize(nodes: &[Node]) -> String {
  let mut out = String::new();
  for node in nodes {
    serialize_node(node, &mut out);
  }
  out
}

fn serialize_node(node: &Node, out: &mut String) {
  match node {
    Node::Element(el) => serialize_element(el, out),
    Node::Text(text) => out.push_str(text),
    Node::Comment(content) => {
      out.push_str("<!--");
      out.push_str(content);
      out.push_str("-->");
    }
    Node::Doctype(content) => {
      out.push_str("<!");
      out.push_str(content);
      out.push('>');
    }
  }
}

fn serialize_element(el: &Element, out: &mut String) {
  out.push('<');
  out.push_str(&el.tag);
  for attr in &el.attrs {
    out.push(' ');
    out.push_str(&attr.name);
    if let Some(ref value) = attr.value {
      out.push_str("=\"");
      out.push_str(&escape_attr(value));
      out.push('"');
    }
  }
  if el.self_closing {
    out.push_str("/>");
    return;
  }
  out.push('>');
  if is_void(&el.tag) {
    return;
  }
  for child in &el.children {
    serialize_node(child, out);
  }
  out.push_str("</");
  out.push_str(&el.tag);
  out.push('>');
}
