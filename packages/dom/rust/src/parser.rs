/* packages/dom/rust/src/parser.rs */

use crate::escape::decode_entities;
use crate::node::{is_raw_text, is_void, Attribute, Element, Node};

/// Nesting depth past which new elements are attached as siblings instead
/// of children, the way browsers flatten pathological markup.
pub(crate) const MAX_DEPTH: usize = 512;

/// Parse an HTML document or fragment into a list of nodes.
///
/// The parser is tolerant rather than conforming: it never fails, drops
/// closing tags that match nothing open, and lets a closing tag for an
/// ancestor implicitly close everything opened after it. Tag and attribute
/// names are lower-cased and attribute values are entity-decoded; text is
/// kept as written.
pub fn parse_html(html: &str) -> Vec<Node> {
  let mut parser = Parser { src: html, pos: 0, open: Vec::new(), roots: Vec::new() };
  parser.run();
  parser.roots
}

struct OpenElement {
  el: Element,
  /// Opened beyond `MAX_DEPTH`: already emitted into its parent, so its
  /// content lands in the nearest ancestor below the cap.
  emitted: bool,
}

struct Parser<'a> {
  src: &'a str,
  pos: usize,
  open: Vec<OpenElement>,
  roots: Vec<Node>,
}

impl Parser<'_> {
  fn run(&mut self) {
    let src = self.src;
    let bytes = src.as_bytes();
    while self.pos < bytes.len() {
      if !starts_markup(bytes, self.pos) {
        let start = self.pos;
        self.pos += 1;
        while self.pos < bytes.len() && !starts_markup(bytes, self.pos) {
          self.pos += 1;
        }
        let text = &src[start..self.pos];
        push_text(self.container(), text);
        continue;
      }

      if bytes[self.pos + 1] == b'/' {
        let name = read_closing_tag(src, &mut self.pos);
        match self.open.iter().rposition(|o| o.el.tag == name) {
          Some(depth) => self.close_to(depth),
          None => log::debug!("dropping stray closing tag </{name}>"),
        }
        continue;
      }

      let node = if bytes[self.pos..].starts_with(b"<!--") {
        parse_comment(src, &mut self.pos)
      } else if bytes[self.pos + 1] == b'!' {
        parse_doctype(src, &mut self.pos)
      } else {
        self.open_element();
        continue;
      };
      self.container().push(node);
    }
    self.close_to(0);
  }

  /// Children list new nodes are appended to. Only frames past the cap are
  /// ever `emitted`, so the innermost real frame sits at `MAX_DEPTH - 1`.
  fn container(&mut self) -> &mut Vec<Node> {
    let real = self.open.len().min(MAX_DEPTH);
    match real.checked_sub(1).and_then(|i| self.open.get_mut(i)) {
      Some(o) => &mut o.el.children,
      None => &mut self.roots,
    }
  }

  /// Close the open element at `depth` and everything opened after it.
  fn close_to(&mut self, depth: usize) {
    while self.open.len() > depth {
      let Some(closed) = self.open.pop() else { break };
      if !closed.emitted {
        self.container().push(Node::Element(closed.el));
      }
    }
  }

  fn open_element(&mut self) {
    let mut el = parse_start_tag(self.src, &mut self.pos);
    if el.self_closing || is_void(&el.tag) {
      self.container().push(Node::Element(el));
      return;
    }
    if is_raw_text(&el.tag) {
      read_raw_text(self.src, &mut self.pos, &mut el);
      self.container().push(Node::Element(el));
      return;
    }
    if self.open.len() >= MAX_DEPTH {
      let tag = el.tag.clone();
      self.container().push(Node::Element(el));
      self.open.push(OpenElement { el: Element::new(tag), emitted: true });
      return;
    }
    self.open.push(OpenElement { el, emitted: false });
  }
}

/// `<` only opens markup when followed by a tag name, `/` + name, or `!`.
/// Anything else (e.g. `a < b`) is literal text.
fn starts_markup(bytes: &[u8], pos: usize) -> bool {
  if bytes[pos] != b'<' || pos + 1 >= bytes.len() {
    return false;
  }
  match bytes[pos + 1] {
    b'!' => true,
    b'/' => bytes.get(pos + 2).is_some_and(u8::is_ascii_alphabetic),
    c => c.is_ascii_alphabetic(),
  }
}

fn push_text(nodes: &mut Vec<Node>, text: &str) {
  if text.is_empty() {
    return;
  }
  if let Some(Node::Text(prev)) = nodes.last_mut() {
    prev.push_str(text);
  } else {
    nodes.push(Node::Text(text.to_string()));
  }
}

fn read_closing_tag(src: &str, pos: &mut usize) -> String {
  let bytes = src.as_bytes();
  // Skip "</"
  *pos += 2;
  let start = *pos;
  while *pos < bytes.len() && !bytes[*pos].is_ascii_whitespace() && bytes[*pos] != b'>' {
    *pos += 1;
  }
  let name = src[start..*pos].to_ascii_lowercase();
  while *pos < bytes.len() && bytes[*pos] != b'>' {
    *pos += 1;
  }
  if *pos < bytes.len() {
    *pos += 1;
  }
  name
}

fn parse_comment(src: &str, pos: &mut usize) -> Node {
  // Skip "<!--"
  *pos += 4;
  let start = *pos;
  if let Some(end) = src[start..].find("-->") {
    *pos = start + end + 3;
    return Node::Comment(src[start..start + end].to_string());
  }
  // Unterminated comment: consume the rest
  *pos = src.len();
  Node::Comment(src[start..].to_string())
}

fn parse_doctype(src: &str, pos: &mut usize) -> Node {
  // Skip "<!"
  *pos += 2;
  let start = *pos;
  let end = src[start..].find('>').map_or(src.len(), |i| start + i);
  *pos = (end + 1).min(src.len());
  Node::Doctype(src[start..end].to_string())
}

/// Tag name and attributes, up to and including the closing `>` or `/>`.
fn parse_start_tag(src: &str, pos: &mut usize) -> Element {
  let bytes = src.as_bytes();
  // Skip '<'
  *pos += 1;
  let tag_start = *pos;
  while *pos < bytes.len()
    && !bytes[*pos].is_ascii_whitespace()
    && bytes[*pos] != b'>'
    && bytes[*pos] != b'/'
  {
    *pos += 1;
  }
  let tag = src[tag_start..*pos].to_ascii_lowercase();
  let (attrs, self_closing) = parse_attrs(src, pos);
  Element { tag, attrs, children: Vec::new(), self_closing }
}

/// Content of `script`, `style` and friends, kept verbatim up to the
/// matching closing tag.
fn read_raw_text(src: &str, pos: &mut usize, el: &mut Element) {
  let closing = format!("</{}", el.tag);
  let rest = &src[*pos..];
  // ASCII lower-casing keeps byte offsets stable.
  match rest.to_ascii_lowercase().find(&closing) {
    Some(idx) => {
      push_text(&mut el.children, &rest[..idx]);
      *pos += idx;
      read_closing_tag(src, pos);
    }
    None => {
      push_text(&mut el.children, rest);
      *pos = src.len();
    }
  }
}

/// Parse attributes up to and including the closing `>` or `/>`.
fn parse_attrs(src: &str, pos: &mut usize) -> (Vec<Attribute>, bool) {
  let bytes = src.as_bytes();
  let mut attrs = Vec::new();
  loop {
    skip_whitespace(bytes, pos);
    if *pos >= bytes.len() {
      // Unterminated tag
      return (attrs, false);
    }
    match bytes[*pos] {
      b'>' => {
        *pos += 1;
        return (attrs, false);
      }
      b'/' if bytes.get(*pos + 1) == Some(&b'>') => {
        *pos += 2;
        return (attrs, true);
      }
      b'/' => {
        *pos += 1;
        continue;
      }
      _ => {}
    }

    let name_start = *pos;
    while *pos < bytes.len()
      && !bytes[*pos].is_ascii_whitespace()
      && !matches!(bytes[*pos], b'=' | b'>' | b'/')
    {
      *pos += 1;
    }
    if *pos == name_start {
      // Stray '=' or similar: skip it so the loop always advances.
      *pos += 1;
      continue;
    }
    let name = src[name_start..*pos].to_ascii_lowercase();

    skip_whitespace(bytes, pos);
    if bytes.get(*pos) != Some(&b'=') {
      attrs.push(Attribute { name, value: None });
      continue;
    }
    *pos += 1;
    skip_whitespace(bytes, pos);
    let value = read_attr_value(src, pos);
    attrs.push(Attribute { name, value: Some(value) });
  }
}

fn read_attr_value(src: &str, pos: &mut usize) -> String {
  let bytes = src.as_bytes();
  match bytes.get(*pos) {
    Some(&q) if q == b'"' || q == b'\'' => {
      *pos += 1;
      let start = *pos;
      while *pos < bytes.len() && bytes[*pos] != q {
        *pos += 1;
      }
      let raw = &src[start..*pos];
      if *pos < bytes.len() {
        *pos += 1;
      }
      decode_entities(raw)
    }
    _ => {
      let start = *pos;
      while *pos < bytes.len() && !bytes[*pos].is_ascii_whitespace() && bytes[*pos] != b'>' {
        *pos += 1;
      }
      decode_entities(&src[start..*pos])
    }
  }
}

fn skip_whitespace(bytes: &[u8], pos: &mut usize) {
  while *pos < bytes.len() && bytes[*pos].is_ascii_whitespace() {
    *pos += 1;
  }
}
