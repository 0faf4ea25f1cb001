//! Node-level checks a host assertion framework can register.
//!
//! Each check returns a structured result; composing the failure wording is
//! left to the caller. [`assert_dom_eq!`](crate::assert_dom_eq) is the one
//! exception, for plain `#[test]` use.

use std::fmt;

use regex::Regex;

use crate::attributes::{compare_attributes, AttributeExpectation, AttributeMismatch, MatchMode};
use crate::model::{Attributes, Node};

/// What [`has_text`] compares a node's text content against
#[derive(Debug, Clone)]
pub enum TextExpectation {
    /// The whole text content, compared exactly
    Exact(String),
    /// A pattern that must match somewhere in the text content
    Matches(Regex),
}

impl TextExpectation {
    pub fn is_satisfied_by(&self, actual: &str) -> bool {
        match self {
            TextExpectation::Exact(expected) => actual == expected,
            TextExpectation::Matches(pattern) => pattern.is_match(actual),
        }
    }
}

impl From<&str> for TextExpectation {
    fn from(expected: &str) -> Self {
        TextExpectation::Exact(expected.to_string())
    }
}

impl From<String> for TextExpectation {
    fn from(expected: String) -> Self {
        TextExpectation::Exact(expected)
    }
}

impl From<Regex> for TextExpectation {
    fn from(pattern: Regex) -> Self {
        TextExpectation::Matches(pattern)
    }
}

/// Text content of a node differs from what was expected
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextMismatch {
    pub actual: String,
    /// The exact text, or the pattern source when `pattern` is set
    pub expected: String,
    pub pattern: bool,
}

impl TextMismatch {
    /// Leaf-replacement rendering: `-actual` then `+expected`, with a
    /// pattern shown between slashes
    pub fn render(&self) -> String {
        if self.pattern {
            format!("-{}\n+/{}/", self.actual, self.expected)
        } else {
            format!("-{}\n+{}", self.actual, self.expected)
        }
    }
}

impl fmt::Display for TextMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.pattern {
            write!(f, "expected text matching /{}/, found {:?}", self.expected, self.actual)
        } else {
            write!(f, "expected text {:?}, found {:?}", self.expected, self.actual)
        }
    }
}

impl std::error::Error for TextMismatch {}

/// Whether a node has no children of any kind.
pub fn has_no_children(node: &Node) -> bool {
    !node.has_children()
}

/// Compare a node's [`text_content`](Node::text_content) with a string, or
/// search it with a [`Regex`].
///
/// ```
/// use domcheck_core::checks::has_text;
/// use domcheck_core::model::{element, text};
/// use regex::Regex;
///
/// let node = element("p", &[], vec![text("foo")]);
/// assert!(has_text(&node, "foo").is_ok());
/// assert!(has_text(&node, Regex::new("fo").unwrap()).is_ok());
/// ```
///
/// # Errors
///
/// Returns a [`TextMismatch`] carrying the text content and the expectation.
pub fn has_text(node: &Node, expected: impl Into<TextExpectation>) -> Result<(), TextMismatch> {
    let expected = expected.into();
    let actual = node.text_content();
    if expected.is_satisfied_by(&actual) {
        return Ok(());
    }
    let (expected, pattern) = match expected {
        TextExpectation::Exact(text) => (text, false),
        TextExpectation::Matches(regex) => (regex.as_str().to_string(), true),
    };
    Err(TextMismatch {
        actual,
        expected,
        pattern,
    })
}

/// Compare a node's attributes against an expectation. Nodes other than
/// elements have no attributes.
///
/// # Errors
///
/// Returns an [`AttributeMismatch`] as [`compare_attributes`] does.
pub fn has_attributes(
    node: &Node,
    expectation: &AttributeExpectation,
    mode: MatchMode,
) -> Result<(), AttributeMismatch> {
    let empty = Attributes::new();
    compare_attributes(node.attributes().unwrap_or(&empty), expectation, mode)
}

/// Asserts that two node trees are equal, panicking with the rendered diff
/// when they are not.
///
/// # Examples
///
/// ```
/// use domcheck_core::assert_dom_eq;
/// use domcheck_core::model::element;
///
/// let a = element("p", &[("class", "x y")], vec![]);
/// let b = element("p", &[("class", "y x")], vec![]);
/// assert_dom_eq!(a, b);
/// ```
#[macro_export]
macro_rules! assert_dom_eq {
    ($actual:expr, $expected:expr $(,)?) => {
        $crate::assert_dom_eq!($actual, $expected, $crate::options::DiffOptions::default())
    };
    ($actual:expr, $expected:expr, $options:expr $(,)?) => {{
        match (&$actual, &$expected, &$options) {
            (actual_val, expected_val, options) => {
                if !$crate::equality::equals(actual_val, expected_val) {
                    let tree = $crate::diff::diff_with(actual_val, expected_val, options);
                    panic!(
                        "\n\
                        DOM trees differ:\n\
                        {}\n",
                        tree.render()
                    );
                }
            }
        }
    }};
}

/// Asserts that two node trees are not equal.
#[macro_export]
macro_rules! assert_dom_ne {
    ($actual:expr, $expected:expr $(,)?) => {{
        match (&$actual, &$expected) {
            (actual_val, expected_val) => {
                if $crate::equality::equals(actual_val, expected_val) {
                    panic!(
                        "\n\
                        DOM trees were equal but expected to differ:\n\
                        {}\n",
                        $crate::render::inspect(actual_val)
                    );
                }
            }
        }
    }};
}
