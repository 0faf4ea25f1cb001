//! Start/end tag rendering for elements.

use crate::model::Element;

/// Elements that never have an end tag
pub const VOID_ELEMENTS: [&str; 15] = [
    "area", "base", "br", "col", "embed", "hr", "img", "input", "keygen", "link", "meta", "param",
    "source", "track", "wbr",
];

/// Attributes whose presence alone carries the meaning; rendered bare
pub const BOOLEAN_ATTRIBUTES: [&str; 25] = [
    "allowfullscreen",
    "async",
    "autofocus",
    "autoplay",
    "checked",
    "controls",
    "default",
    "defer",
    "disabled",
    "formnovalidate",
    "hidden",
    "inert",
    "ismap",
    "itemscope",
    "loop",
    "multiple",
    "muted",
    "nomodule",
    "novalidate",
    "open",
    "playsinline",
    "readonly",
    "required",
    "reversed",
    "selected",
];

pub fn is_void_element(tag_name: &str) -> bool {
    VOID_ELEMENTS
        .iter()
        .any(|v| v.eq_ignore_ascii_case(tag_name))
}

pub fn is_boolean_attribute(name: &str) -> bool {
    BOOLEAN_ATTRIBUTES
        .iter()
        .any(|b| b.eq_ignore_ascii_case(name))
}

fn escape_attribute_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// `<tag a="1" b>` with attributes in alphabetical order.
pub fn start_tag(element: &Element) -> String {
    let mut out = format!("<{}", element.tag_name);
    for (name, value) in &element.attributes {
        out.push(' ');
        out.push_str(name);
        if !is_boolean_attribute(name) {
            out.push_str("=\"");
            out.push_str(&escape_attribute_value(value));
            out.push('"');
        }
    }
    out.push('>');
    out
}

/// `</tag>`, or nothing for void elements.
pub fn end_tag(element: &Element) -> String {
    if is_void_element(&element.tag_name) {
        String::new()
    } else {
        format!("</{}>", element.tag_name)
    }
}
