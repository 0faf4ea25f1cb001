use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::tokens::{class_tokens, parse_declarations, Declarations};
use super::{CLASS_ATTRIBUTE, STYLE_ATTRIBUTE};
use crate::model::Attributes;
use crate::render::is_boolean_attribute;

/// How strictly the actual attribute set must follow the expectation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// The expected attributes must be present and match; extras are ignored
    Subset,
    /// The actual attribute names must be exactly the expected names
    Exact,
}

/// What an expected attribute value may be
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExpectedValue {
    /// `true`: present with any value; `false`: absent
    Present(bool),
    /// A string, compared per attribute semantics
    Text(String),
    /// An explicit `class` token list
    Tokens(Vec<String>),
    /// An explicit `style` property → value mapping
    Declarations(BTreeMap<String, String>),
}

impl fmt::Display for ExpectedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpectedValue::Present(flag) => write!(f, "{}", flag),
            ExpectedValue::Text(s) => write!(f, "'{}'", s),
            ExpectedValue::Tokens(tokens) => write!(f, "[ {} ]", tokens.join(", ")),
            ExpectedValue::Declarations(decls) => {
                let parts: Vec<String> = decls.iter().map(|(k, v)| format!("{}: {}", k, v)).collect();
                write!(f, "{{ {} }}", parts.join("; "))
            }
        }
    }
}

impl From<&str> for ExpectedValue {
    fn from(s: &str) -> Self {
        ExpectedValue::Text(s.to_string())
    }
}

impl From<String> for ExpectedValue {
    fn from(s: String) -> Self {
        ExpectedValue::Text(s)
    }
}

impl From<bool> for ExpectedValue {
    fn from(flag: bool) -> Self {
        ExpectedValue::Present(flag)
    }
}

impl From<Vec<&str>> for ExpectedValue {
    fn from(tokens: Vec<&str>) -> Self {
        ExpectedValue::Tokens(tokens.into_iter().map(str::to_string).collect())
    }
}

impl From<Vec<(&str, &str)>> for ExpectedValue {
    fn from(decls: Vec<(&str, &str)>) -> Self {
        ExpectedValue::Declarations(
            decls
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }
}

/// The attributes a caller expects on an element.
///
/// Each entry is a name with an optional value; a name without a value only
/// requires presence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeExpectation {
    entries: BTreeMap<String, Option<ExpectedValue>>,
}

impl AttributeExpectation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Presence-only expectation for a list of names
    pub fn names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: names.into_iter().map(|n| (n.into(), None)).collect(),
        }
    }

    /// Expectation from name/value pairs
    pub fn values<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<ExpectedValue>,
    {
        Self {
            entries: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), Some(v.into())))
                .collect(),
        }
    }

    /// Builder-style: require `name` with `value`
    pub fn with(mut self, name: impl Into<String>, value: impl Into<ExpectedValue>) -> Self {
        self.entries.insert(name.into(), Some(value.into()));
        self
    }

    /// Builder-style: require `name` to be present
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.entries.insert(name.into(), None);
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&ExpectedValue>)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_ref()))
    }
}

/// One attribute whose value did not satisfy the expectation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValueMismatch {
    pub name: String,
    pub actual: String,
    pub expected: ExpectedValue,
}

/// Structured result of a failed attribute comparison.
///
/// Callers build their own failure wording from these lists; all three are
/// sorted by attribute name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error(
    "attribute mismatch ({mode:?}): missing {missing:?}, unexpected {unexpected:?}, differing {}",
    differing_names(.values)
)]
pub struct AttributeMismatch {
    pub mode: MatchMode,
    /// Expected attributes absent from the element
    pub missing: Vec<String>,
    /// Attributes on the element that the expectation does not declare
    /// (exact mode only)
    pub unexpected: Vec<String>,
    /// Attributes present on both sides whose values disagree
    pub values: Vec<ValueMismatch>,
}

fn differing_names(values: &[ValueMismatch]) -> String {
    let names: Vec<&str> = values.iter().map(|v| v.name.as_str()).collect();
    format!("{:?}", names)
}

impl AttributeMismatch {
    /// Every offending attribute name, sorted and deduplicated
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .missing
            .iter()
            .chain(self.unexpected.iter())
            .map(String::as_str)
            .chain(self.values.iter().map(|v| v.name.as_str()))
            .collect();
        names.sort_unstable();
        names.dedup();
        names
    }
}

/// Compare an element's attributes against an expectation.
///
/// # Errors
///
/// Returns an [`AttributeMismatch`] listing missing, unexpected (exact mode)
/// and differing attributes.
pub fn compare_attributes(
    actual: &Attributes,
    expectation: &AttributeExpectation,
    mode: MatchMode,
) -> Result<(), AttributeMismatch> {
    let mut missing = Vec::new();
    let mut values = Vec::new();

    for (name, want) in expectation.iter() {
        match (actual.get(name), want) {
            (None, Some(ExpectedValue::Present(false))) => {}
            (None, _) => missing.push(name.to_string()),
            (Some(_), None) => {}
            (Some(have), Some(want)) => {
                if !value_matches(name, have, want, mode) {
                    values.push(ValueMismatch {
                        name: name.to_string(),
                        actual: have.clone(),
                        expected: want.clone(),
                    });
                }
            }
        }
    }

    let unexpected: Vec<String> = match mode {
        MatchMode::Subset => Vec::new(),
        MatchMode::Exact => actual
            .keys()
            .filter(|name| !expectation.contains(name))
            .cloned()
            .collect(),
    };

    if missing.is_empty() && unexpected.is_empty() && values.is_empty() {
        Ok(())
    } else {
        Err(AttributeMismatch {
            mode,
            missing,
            unexpected,
            values,
        })
    }
}

/// Exact-mode equality of two attribute maps, as used by node equality
pub fn attributes_equal(a: &Attributes, b: &Attributes) -> bool {
    a.len() == b.len()
        && a.iter().all(|(name, va)| match b.get(name) {
            Some(vb) => values_equal(name, va, vb),
            None => false,
        })
}

/// Boolean attributes render bare, so their values never take part in equality.
fn values_equal(name: &str, a: &str, b: &str) -> bool {
    match name {
        CLASS_ATTRIBUTE => class_tokens(a) == class_tokens(b),
        STYLE_ATTRIBUTE => parse_declarations(a) == parse_declarations(b),
        _ if is_boolean_attribute(name) => true,
        _ => a == b,
    }
}

fn value_matches(name: &str, actual: &str, want: &ExpectedValue, mode: MatchMode) -> bool {
    match want {
        ExpectedValue::Present(flag) => *flag,
        ExpectedValue::Text(s) => match name {
            CLASS_ATTRIBUTE => tokens_match(actual, s.split_whitespace(), mode),
            STYLE_ATTRIBUTE => declarations_match(actual, &parse_declarations(s), mode),
            _ => actual == s,
        },
        ExpectedValue::Tokens(tokens) => match name {
            CLASS_ATTRIBUTE => tokens_match(actual, tokens.iter().map(String::as_str), mode),
            _ => actual == tokens.join(" "),
        },
        ExpectedValue::Declarations(decls) => match name {
            STYLE_ATTRIBUTE => declarations_match(actual, decls, mode),
            _ => false,
        },
    }
}

fn tokens_match<'w>(actual: &str, want: impl Iterator<Item = &'w str>, mode: MatchMode) -> bool {
    let have = class_tokens(actual);
    let want: std::collections::BTreeSet<&str> = want.collect();
    match mode {
        MatchMode::Subset => want.is_subset(&have),
        MatchMode::Exact => want == have,
    }
}

fn declarations_match(actual: &str, want: &Declarations, mode: MatchMode) -> bool {
    let have = parse_declarations(actual);
    match mode {
        MatchMode::Subset => want.iter().all(|(k, v)| have.get(k) == Some(v)),
        MatchMode::Exact => &have == want,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs(pairs: &[(&str, &str)]) -> Attributes {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn present_false_requires_absence() {
        let actual = attrs(&[("id", "x")]);
        let want = AttributeExpectation::new().with("disabled", false);
        assert!(compare_attributes(&actual, &want, MatchMode::Subset).is_ok());

        let actual = attrs(&[("disabled", "")]);
        let err = compare_attributes(&actual, &want, MatchMode::Subset).unwrap_err();
        assert_eq!(err.values[0].name, "disabled");
    }

    #[test]
    fn exact_equality_ignores_class_order() {
        let a = attrs(&[("class", "a b"), ("style", "color: red; top: 0")]);
        let b = attrs(&[("class", "b  a"), ("style", "top:0;color:red")]);
        assert!(attributes_equal(&a, &b));
        assert!(attributes_equal(&b, &a));
        assert!(!attributes_equal(&a, &attrs(&[("class", "a b")])));
    }

    #[test]
    fn boolean_attributes_compare_by_presence() {
        let bare = attrs(&[("disabled", "")]);
        let valued = attrs(&[("disabled", "disabled")]);
        assert!(attributes_equal(&bare, &valued));
        assert!(!attributes_equal(&bare, &attrs(&[])));
        assert!(!attributes_equal(&attrs(&[("value", "")]), &attrs(&[("value", "x")])));
    }

    #[test]
    fn tokens_on_ordinary_attribute_join_with_space() {
        let actual = attrs(&[("rel", "noopener noreferrer")]);
        let want = AttributeExpectation::new().with("rel", vec!["noopener", "noreferrer"]);
        assert!(compare_attributes(&actual, &want, MatchMode::Exact).is_ok());
    }

    #[test]
    fn names_are_sorted_and_deduplicated() {
        let mismatch = AttributeMismatch {
            mode: MatchMode::Exact,
            missing: vec!["foo".to_string()],
            unexpected: vec!["class".to_string(), "disabled".to_string()],
            values: vec![ValueMismatch {
                name: "class".to_string(),
                actual: "a".to_string(),
                expected: "b".into(),
            }],
        };
        assert_eq!(mismatch.names(), vec!["class", "disabled", "foo"]);
    }
}
