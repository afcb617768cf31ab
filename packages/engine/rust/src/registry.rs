/* packages/engine/rust/src/registry.rs */

use std::fmt;

use serde_json::Value;

use crate::components;
use crate::context::RenderContext;

/// Render function: component data plus page context in, HTML out.
/// `None` or an empty string means "nothing to render".
pub type RenderFn = Box<dyn Fn(&Value, &RenderContext<'_>) -> Option<String> + Send + Sync>;

/// Named markup producers of a component. Only `main` is used for
/// placeholder substitution.
pub struct Htmls {
  pub main: RenderFn,
}

pub struct ComponentDescriptor {
  pub name: String,
  pub htmls: Htmls,
}

impl ComponentDescriptor {
  pub fn new(
    name: impl Into<String>,
    main: impl Fn(&Value, &RenderContext<'_>) -> Option<String> + Send + Sync + 'static,
  ) -> Self {
    Self { name: name.into(), htmls: Htmls { main: Box::new(main) } }
  }

  pub fn render(&self, data: &Value, ctx: &RenderContext<'_>) -> Option<String> {
    (self.htmls.main)(data, ctx)
  }
}

impl fmt::Debug for ComponentDescriptor {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("ComponentDescriptor").field("name", &self.name).finish_non_exhaustive()
  }
}

/// Fixed set of components, looked up by exact name.
#[derive(Debug, Default)]
pub struct Registry {
  components: Vec<ComponentDescriptor>,
}

impl Registry {
  pub fn new(components: Vec<ComponentDescriptor>) -> Self {
    Self { components }
  }

  /// Registry holding the stock `header` and `footer` components.
  pub fn builtin() -> Self {
    Self::new(vec![
      ComponentDescriptor::new("header", components::header),
      ComponentDescriptor::new("footer", components::footer),
    ])
  }

  /// Case-sensitive lookup. With duplicate names the first one registered wins.
  pub fn find(&self, name: &str) -> Option<&ComponentDescriptor> {
    self.components.iter().find(|c| c.name == name)
  }

  pub fn names(&self) -> impl Iterator<Item = &str> {
    self.components.iter().map(|c| c.name.as_str())
  }
}

impl FromIterator<ComponentDescriptor> for Registry {
  fn from_iter<I: IntoIterator<Item = ComponentDescriptor>>(iter: I) -> Self {
    Self::new(iter.into_iter().collect())
  }
}
