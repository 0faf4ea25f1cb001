//! Semantics-aware attribute comparison.
//!
//! Ordinary attributes compare as strings. `class` compares as a token set
//! and `style` as a set of declarations, so neither token order nor
//! declaration order is significant.

pub mod compare;
pub mod tokens;

pub use compare::{
    attributes_equal, compare_attributes, AttributeExpectation, AttributeMismatch, ExpectedValue,
    MatchMode, ValueMismatch,
};
pub use tokens::{class_tokens, parse_declarations, Declarations};

/// Attribute compared as a whitespace-separated token set
pub const CLASS_ATTRIBUTE: &str = "class";

/// Attribute compared as a set of `prop: value` declarations
pub const STYLE_ATTRIBUTE: &str = "style";
