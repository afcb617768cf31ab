/* packages/dom/rust/src/escape.rs */

/// Escape text for use between tags.
pub fn escape_html(s: &str) -> String {
  let mut out = String::with_capacity(s.len());
  for ch in s.chars() {
    match ch {
      '&' => out.push_str("&amp;"),
      '<' => out.push_str("&lt;"),
      '>' => out.push_str("&gt;"),
      '"' => out.push_str("&quot;"),
      '\'' => out.push_str("&#x27;"),
      c => out.push(c),
    }
  }
  out
}

/// Escape a value for a double-quoted attribute. Only `&` and `"` matter
/// there, so URLs keep their readable form.
pub fn escape_attr(s: &str) -> String {
  let mut out = String::with_capacity(s.len());
  for ch in s.chars() {
    match ch {
      '&' => out.push_str("&amp;"),
      '"' => out.push_str("&quot;"),
      c => out.push(c),
    }
  }
  out
}

/// Named references the decoder understands. Anything else is left as
/// literal text.
const NAMED_ENTITIES: &[(&str, char)] = &[
  ("amp", '&'),
  ("lt", '<'),
  ("gt", '>'),
  ("quot", '"'),
  ("apos", '\''),
  ("nbsp", '\u{a0}'),
  ("copy", '©'),
  ("reg", '®'),
  ("trade", '™'),
  ("hellip", '…'),
  ("mdash", '—'),
  ("ndash", '–'),
  ("laquo", '«'),
  ("raquo", '»'),
  ("lsquo", '‘'),
  ("rsquo", '’'),
  ("ldquo", '“'),
  ("rdquo", '”'),
  ("middot", '·'),
  ("euro", '€'),
];

/// Decode character references in an attribute value: `&name;`, `&#123;`
/// and `&#x7b;`. Unknown or malformed references stay as written.
pub fn decode_entities(s: &str) -> String {
  if !s.contains('&') {
    return s.to_string();
  }
  let mut out = String::with_capacity(s.len());
  let mut rest = s;
  while let Some(amp) = rest.find('&') {
    out.push_str(&rest[..amp]);
    rest = &rest[amp..];
    match decode_reference(rest) {
      Some((ch, len)) => {
        out.push(ch);
        rest = &rest[len..];
      }
      None => {
        out.push('&');
        rest = &rest[1..];
      }
    }
  }
  out.push_str(rest);
  out
}

/// Decode the reference at the start of `s` (which begins with `&`).
/// Returns the character and how many bytes it spans.
fn decode_reference(s: &str) -> Option<(char, usize)> {
  let body = &s[1..];
  if let Some(num) = body.strip_prefix('#') {
    let (digits, radix, prefix) = match num.strip_prefix(['x', 'X']) {
      Some(hex) => (hex, 16, 2),
      None => (num, 10, 1),
    };
    let end = digits.find(|c: char| !c.is_digit(radix)).unwrap_or(digits.len());
    if end == 0 {
      return None;
    }
    let code = u32::from_str_radix(&digits[..end], radix).ok();
    let ch = code.and_then(char::from_u32).filter(|&c| c != '\0').unwrap_or('\u{fffd}');
    let semi = usize::from(digits[end..].starts_with(';'));
    return Some((ch, 1 + prefix + end + semi));
  }
  let end = body.find(';')?;
  let name = &body[..end];
  NAMED_ENTITIES.iter().find(|(n, _)| *n == name).map(|&(_, ch)| (ch, end + 2))
}
