/* packages/dom/rust/src/lib.rs */

mod document;
mod escape;
mod node;
mod parser;
mod serialize;

pub use document::{Document, NodePath};
pub use escape::{escape_attr, escape_html};
pub use node::{Attribute, Element, Node};
pub use parser::parse_html;
pub use serialize::serialize;
