//! domcheck Core - semantic comparison, diffing and inspection of DOM trees
//!
//! This crate provides:
//! - A closed node model (document, doctype, element, text, comment) and a
//!   [`TreeSource`](model::TreeSource) seam for importing parsed trees
//! - Attribute comparison with token-set `class` and declaration-map `style`
//!   semantics, in subset and exact modes
//! - Depth-bounded, deterministic inspection output
//! - Deep equality and an annotated structural diff with child alignment
//! - Query and parser collaborator traits for host assertion frameworks
//!
//! ```
//! use domcheck_core::{diff, equals, inspect};
//! use domcheck_core::model::{element, text};
//!
//! let actual = element("p", &[("class", "a b")], vec![text("foo")]);
//! let expected = element("p", &[("class", "b a")], vec![text("bar")]);
//! assert!(!equals(&actual, &expected));
//! assert_eq!(inspect(&actual), r#"<p class="a b">foo</p>"#);
//! assert_eq!(diff(&actual, &expected).render(), "<p class=\"a b\">\n  -foo\n  +bar\n</p>");
//! ```

pub mod attributes;
pub mod checks;
pub mod diff;
pub mod equality;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod options;
pub mod parser;
pub mod query;
pub mod render;

// Logging macros resolve schema constants through this path
pub use domcheck_core_types;

// Re-export commonly used types
pub use attributes::{compare_attributes, AttributeExpectation, AttributeMismatch, MatchMode};
pub use checks::{has_attributes, has_no_children, has_text, TextExpectation, TextMismatch};
pub use diff::{diff, diff_with, DiffNode, DiffTree};
pub use equality::equals;
pub use errors::{DcError, DcErrorKind, DomError, Result};
pub use model::{Element, Node, NodeKind, TreeSource};
pub use options::{DiffOptions, InspectOptions};
pub use parser::{parse_html, HtmlParser};
pub use query::{query_all, query_first, NodeList, SelectorQuery};
pub use render::{inspect, inspect_with};
