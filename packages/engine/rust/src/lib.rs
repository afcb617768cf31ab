/* packages/engine/rust/src/lib.rs */

pub mod assets;
pub mod components;
pub mod compose;
pub mod config;
pub mod context;
pub mod host;
pub mod page;
pub mod registry;
pub mod render;
pub mod url;

// Re-exports for ergonomic use
pub use assets::{inject, AssetElement, AssetKind, AssetManifest, Dependencies};
pub use compose::{ComponentReport, Composer, CompositionReport, RenderOutcome};
pub use config::{load_site_config, SiteConfig, DEFAULT_MARKER};
pub use context::RenderContext;
pub use host::{Host, Placement, Target};
pub use page::{Language, PageData};
pub use registry::{ComponentDescriptor, Htmls, Registry, RenderFn};
pub use render::{compose_document, compose_html};
pub use url::{resolve, NOOP_HREF};

#[cfg(test)]
mod tests;
