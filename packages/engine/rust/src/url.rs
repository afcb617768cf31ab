/* packages/engine/rust/src/url.rs */

/// Link target that performs no navigation.
pub const NOOP_HREF: &str = "javascript:;";

/// Resolve `path` against `domain`.
///
/// - empty or absent paths become [`NOOP_HREF`];
/// - anything containing `://` is already absolute and passes through;
/// - everything else is appended to `domain` verbatim.
///
/// No well-formedness checks are made on either side.
pub fn resolve(domain: &str, path: Option<&str>) -> String {
  match path {
    None | Some("") => NOOP_HREF.to_string(),
    Some(p) if p.contains("://") => p.to_string(),
    Some(p) => format!("{domain}{p}"),
  }
}
