use std::collections::{BTreeMap, BTreeSet};

/// Parsed `style` value: property → value, both trimmed.
pub type Declarations = BTreeMap<String, String>;

/// Split a `class` value into its set of tokens.
pub fn class_tokens(value: &str) -> BTreeSet<&str> {
    value.split_whitespace().collect()
}

/// Parse a `style` value such as `color: red; background: blue`.
///
/// Declarations split on `;`, then on the first `:`; both sides are
/// trimmed and empty declarations skipped. A declaration without a colon is
/// kept with an empty value. Values are not normalized, so `red` and
/// `#f00` stay different.
pub fn parse_declarations(value: &str) -> Declarations {
    value
        .split(';')
        .map(str::trim)
        .filter(|decl| !decl.is_empty())
        .map(|decl| match decl.split_once(':') {
            Some((prop, val)) => (prop.trim().to_string(), val.trim().to_string()),
            None => (decl.to_string(), String::new()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_tokens_ignore_order_and_spacing() {
        assert_eq!(class_tokens("foo  bar\tbaz"), class_tokens("baz foo bar"));
        assert!(class_tokens("   ").is_empty());
    }

    #[test]
    fn declarations_are_trimmed() {
        let decls = parse_declarations(" color : red ;background:blue; ");
        assert_eq!(decls.len(), 2);
        assert_eq!(decls.get("color").map(String::as_str), Some("red"));
        assert_eq!(decls.get("background").map(String::as_str), Some("blue"));
    }

    #[test]
    fn value_keeps_later_colons() {
        let decls = parse_declarations("background: url(http://x/y.png)");
        assert_eq!(
            decls.get("background").map(String::as_str),
            Some("url(http://x/y.png)")
        );
    }
}
