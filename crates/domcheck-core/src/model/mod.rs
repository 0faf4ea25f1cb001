pub mod node;
pub mod source;

pub use node::{comment, doctype, document, element, text, Attributes, Element, Node, NodeKind};
pub use source::TreeSource;
