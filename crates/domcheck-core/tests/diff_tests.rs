mod common;

use common::{div, foo_bar_div, span};
use domcheck_core::diff::{diff, diff_with, DiffNode};
use domcheck_core::model::{comment, doctype, document, element, text};
use domcheck_core::options::{DiffOptions, InspectOptions};

#[test]
fn test_sibling_attribute_change() {
    let actual = div(vec![
        element("div", &[("id", "foo")], vec![]),
        element("div", &[("id", "bar")], vec![]),
    ]);
    let expected = div(vec![
        element("div", &[("id", "foo")], vec![]),
        element("div", &[("id", "quux")], vec![]),
    ]);
    assert_eq!(
        diff(&actual, &expected).render(),
        "<div>\n\
         \x20 <div id=\"foo\"></div>\n\
         \x20 -<div id=\"bar\"></div>\n\
         \x20 +<div id=\"quux\"></div>\n\
         </div>"
    );
}

#[test]
fn test_text_and_comment_replacements() {
    let actual = foo_bar_div();
    let expected = div(vec![text("quux"), comment("baz")]);
    assert_eq!(
        diff(&actual, &expected).render(),
        "<div>\n  -foo\n  +quux\n  -<!--bar-->\n  +<!--baz-->\n</div>"
    );
}

#[test]
fn test_missing_child() {
    let actual = foo_bar_div();
    let expected = div(vec![text("foo"), span(vec![]), comment("bar")]);
    assert_eq!(
        diff(&actual, &expected).render(),
        "<div>\n  foo\n  // missing <span></span>\n  <!--bar-->\n</div>"
    );
}

#[test]
fn test_extraneous_child() {
    let actual = div(vec![text("foo"), span(vec![]), comment("bar")]);
    let expected = foo_bar_div();
    assert_eq!(
        diff(&actual, &expected).render(),
        "<div>\n  foo\n  <span></span> // should be removed\n  <!--bar-->\n</div>"
    );
}

#[test]
fn test_nested_diff_with_identical_outer_elements() {
    let actual = div(vec![
        text("foo"),
        span(vec![span(vec![text("foo")])]),
        comment("bar"),
    ]);
    let expected = div(vec![
        text("foo"),
        span(vec![span(vec![text("bar")])]),
        comment("bar"),
    ]);
    assert_eq!(
        diff(&actual, &expected).render(),
        "<div>\n\
         \x20 foo\n\
         \x20 <span>\n\
         \x20   <span>\n\
         \x20     -foo\n\
         \x20     +bar\n\
         \x20   </span>\n\
         \x20 </span>\n\
         \x20 <!--bar-->\n\
         </div>"
    );
}

#[test]
fn test_nested_diff_with_differing_outer_attributes() {
    let actual = div(vec![
        text("foo"),
        element(
            "span",
            &[("id", "foo"), ("class", "bar")],
            vec![span(vec![text("foo")])],
        ),
        comment("bar"),
    ]);
    let expected = div(vec![
        text("foo"),
        span(vec![span(vec![text("bar")])]),
        comment("bar"),
    ]);
    assert_eq!(
        diff(&actual, &expected).render(),
        "<div>\n\
         \x20 foo\n\
         \x20 -<span class=\"bar\" id=\"foo\">\n\
         \x20 +<span>\n\
         \x20   <span>\n\
         \x20     -foo\n\
         \x20     +bar\n\
         \x20   </span>\n\
         \x20 </span>\n\
         \x20 <!--bar-->\n\
         </div>"
    );
}

#[test]
fn test_document_with_nodes_around_document_element() {
    let html = || element("html", &[], vec![element("body", &[], vec![])]);
    let actual = document(vec![doctype("html"), comment("foo"), html(), comment("bar")]);
    let expected = document(vec![doctype("html"), html()]);
    assert_eq!(
        diff(&actual, &expected).render(),
        "<!DOCTYPE html>\n\
         <!--foo--> // should be removed\n\
         <html><body></body></html>\n\
         <!--bar--> // should be removed"
    );
}

#[test]
fn test_identical_trees_render_as_inspection() {
    let node = div(vec![text("foo"), span(vec![span(vec![text("x")])])]);
    let tree = diff(&node, &node);
    assert!(!tree.has_changes());
    assert_eq!(tree.render(), domcheck_core::inspect(&node));
    assert!(!tree.render().contains("//"));
}

#[test]
fn test_categorical_replacement_of_root() {
    let actual = element("p", &[], vec![text("x")]);
    let expected = element("div", &[], vec![text("x")]);
    let tree = diff(&actual, &expected);
    assert!(tree.has_changes());
    assert_eq!(tree.render(), "-<p>x</p>\n+<div>x</div>");
}

#[test]
fn test_kind_change_inside_container() {
    let actual = div(vec![comment("note")]);
    let expected = div(vec![span(vec![])]);
    assert_eq!(
        diff(&actual, &expected).render(),
        "<div>\n  -<!--note-->\n  +<span></span>\n</div>"
    );
}

#[test]
fn test_replaced_subtrees_are_depth_truncated() {
    let deep = |leaf: &str| span(vec![span(vec![span(vec![text(leaf)])])]);
    let actual = div(vec![deep("a")]);
    let expected = div(vec![element("p", &[], vec![])]);
    assert_eq!(
        diff(&actual, &expected).render(),
        "<div>\n  -<span><span><span>...</span></span></span>\n  +<p></p>\n</div>"
    );
}

#[test]
fn test_diff_options_control_subtree_depth() {
    let actual = div(vec![span(vec![span(vec![text("deep")])]), text("a")]);
    let expected = div(vec![span(vec![span(vec![text("deep")])]), text("b")]);
    let options = DiffOptions {
        inspect: InspectOptions::default().with_max_depth(1),
    };
    assert_eq!(
        diff_with(&actual, &expected, &options).render(),
        "<div>\n  <span>...</span>\n  -a\n  +b\n</div>"
    );
}

#[test]
fn test_output_follows_actual_order() {
    let actual = div(vec![text("a"), span(vec![]), comment("c")]);
    let expected = div(vec![comment("c"), text("a")]);
    let tree = diff(&actual, &expected);
    let kinds: Vec<&str> = tree
        .root()
        .children()
        .iter()
        .map(|c| match c {
            DiffNode::Unchanged(_) => "unchanged",
            DiffNode::Replaced { .. } => "replaced",
            DiffNode::Changed(_) => "changed",
            DiffNode::Missing(_) => "missing",
            DiffNode::Extraneous(_) => "extraneous",
        })
        .collect();
    assert_eq!(kinds, vec!["extraneous", "extraneous", "unchanged", "missing"]);
    assert_eq!(
        tree.render(),
        "<div>\n\
         \x20 a // should be removed\n\
         \x20 <span></span> // should be removed\n\
         \x20 <!--c-->\n\
         \x20 // missing a\n\
         </div>"
    );
}

#[test]
fn test_display_matches_render() {
    let (a, b) = (text("foo"), text("bar"));
    let tree = diff(&a, &b);
    assert_eq!(tree.to_string(), "-foo\n+bar");
    assert_eq!(format!("{}", tree), tree.render());
}

#[test]
fn test_boolean_attribute_value_does_not_produce_identical_lines() {
    let actual = element("input", &[("disabled", "")], vec![]);
    let expected = element("input", &[("disabled", "disabled")], vec![]);
    let tree = diff(&actual, &expected);
    assert!(!tree.has_changes());
    assert_eq!(tree.render(), "<input disabled>");

    let enabled = element("input", &[], vec![]);
    assert_eq!(diff(&actual, &enabled).render(), "-<input disabled>\n+<input>");
}
