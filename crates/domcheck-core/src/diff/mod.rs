//! Structural diff between two node trees.
//!
//! Compares an `actual` tree with an `expected` one and produces an
//! annotated [`DiffTree`] whose rendering is meant to be embedded verbatim in
//! assertion output.
//!
//! ## Entry point
//!
//! ```
//! use domcheck_core::diff::diff;
//! use domcheck_core::model::{element, text};
//!
//! let actual = element("div", &[], vec![text("foo")]);
//! let expected = element("div", &[], vec![text("bar")]);
//! assert_eq!(diff(&actual, &expected).render(), "<div>\n  -foo\n  +bar\n</div>");
//! ```
//!
//! ## Guarantees
//!
//! - **Determinism**: identical inputs render byte-identical output.
//! - **Stable positions**: output follows the actual tree's order; missing
//!   expected nodes are spliced in where the alignment places them.
//! - **No change markers for equal trees**: `diff(t, t).render()` is the
//!   plain inspection of `t`.

pub mod align;
pub mod engine;
pub mod model;
mod render;

pub use engine::{diff, diff_with};
pub use model::{ContainerDiff, DiffNode, DiffSummary, DiffTree, ReplaceKind};
