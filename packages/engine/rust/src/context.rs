/* packages/engine/rust/src/context.rs */

use serde_json::Value;

use crate::page::{Language, PageData};
use crate::url::resolve;

/// Read-only view of the page handed to every renderer call.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
  page: &'a PageData,
}

impl<'a> RenderContext<'a> {
  pub fn new(page: &'a PageData) -> Self {
    Self { page }
  }

  pub fn domain(&self) -> &'a str {
    &self.page.domain
  }

  pub fn languages(&self) -> &'a [Language] {
    &self.page.languages
  }

  pub fn resource(&self) -> &'a Value {
    &self.page.resource
  }

  pub fn page(&self) -> &'a PageData {
    self.page
  }

  /// Resolve a path against the page origin.
  pub fn resolve(&self, path: &str) -> String {
    resolve(&self.page.domain, Some(path))
  }

  /// Resolve a JSON field. Missing, null and non-string values count as absent.
  pub fn resolve_value(&self, value: Option<&Value>) -> String {
    resolve(&self.page.domain, value.and_then(Value::as_str))
  }
}
