use domcheck_core::attributes::{compare_attributes, AttributeExpectation, ExpectedValue, MatchMode};
use domcheck_core::checks::has_attributes;
use domcheck_core::model::{element, text, Node};

fn button() -> Node {
    element(
        "button",
        &[
            ("id", "foo"),
            ("class", "bar"),
            ("data-info", "baz"),
            ("disabled", ""),
        ],
        vec![text("Press me")],
    )
}

fn italic(attrs: &[(&str, &str)]) -> Node {
    element("i", attrs, vec![])
}

#[test]
fn test_exact_names_match() {
    let want = AttributeExpectation::names(["id", "class", "data-info", "disabled"]);
    assert!(has_attributes(&button(), &want, MatchMode::Exact).is_ok());
}

#[test]
fn test_exact_names_list_undeclared_attributes() {
    let want = AttributeExpectation::names(["id"]);
    let err = has_attributes(&button(), &want, MatchMode::Exact).unwrap_err();
    assert!(err.missing.is_empty());
    assert_eq!(err.unexpected, vec!["class", "data-info", "disabled"]);
}

#[test]
fn test_subset_names_match() {
    let want = AttributeExpectation::names(["id", "class"]);
    assert!(has_attributes(&button(), &want, MatchMode::Subset).is_ok());
}

#[test]
fn test_subset_names_list_missing() {
    let want = AttributeExpectation::names(["id", "foo"]);
    let err = has_attributes(&button(), &want, MatchMode::Subset).unwrap_err();
    assert_eq!(err.missing, vec!["foo"]);
    assert!(err.unexpected.is_empty());
}

#[test]
fn test_exact_object_with_presence_flag() {
    let want = AttributeExpectation::new()
        .with("id", "foo")
        .with("class", "bar")
        .with("data-info", "baz")
        .with("disabled", true);
    assert!(has_attributes(&button(), &want, MatchMode::Exact).is_ok());
}

#[test]
fn test_exact_object_not_satisfied() {
    let want = AttributeExpectation::new().with("id", "foo");
    let err = has_attributes(&button(), &want, MatchMode::Exact).unwrap_err();
    assert_eq!(err.unexpected.len(), 3);
}

#[test]
fn test_partial_object_not_satisfied() {
    let want = AttributeExpectation::new().with("id", "foo").with("foo", "bar");
    let err = has_attributes(&button(), &want, MatchMode::Subset).unwrap_err();
    assert_eq!(err.missing, vec!["foo"]);
    assert_eq!(err.names(), vec!["foo"]);
}

#[test]
fn test_value_mismatch_reports_both_sides() {
    let want = AttributeExpectation::new().with("id", "quux");
    let err = has_attributes(&button(), &want, MatchMode::Subset).unwrap_err();
    assert_eq!(err.values.len(), 1);
    assert_eq!(err.values[0].actual, "foo");
    assert_eq!(err.values[0].expected, ExpectedValue::Text("quux".to_string()));
}

#[test]
fn test_class_full_and_partial_sets() {
    let el = italic(&[("class", "foo bar baz")]);
    for wanted in ["foo bar baz", "foo bar", "baz foo"] {
        let want = AttributeExpectation::new().with("class", wanted);
        assert!(
            has_attributes(&el, &want, MatchMode::Subset).is_ok(),
            "class subset {:?}",
            wanted
        );
    }
}

#[test]
fn test_class_unmatched_set() {
    let el = italic(&[("class", "bar")]);
    let want = AttributeExpectation::new().with("class", "foo bar baz");
    let err = has_attributes(&el, &want, MatchMode::Subset).unwrap_err();
    assert_eq!(err.values[0].name, "class");
}

#[test]
fn test_class_exact_sets() {
    let el = italic(&[("class", "foo bar baz")]);
    let same = AttributeExpectation::new().with("class", "foo baz bar");
    assert!(has_attributes(&el, &same, MatchMode::Exact).is_ok());

    let fewer = AttributeExpectation::new().with("class", "foo baz");
    assert!(has_attributes(&el, &fewer, MatchMode::Exact).is_err());

    let el = italic(&[("class", "foo baz")]);
    let more = AttributeExpectation::new().with("class", "foo bar baz");
    assert!(has_attributes(&el, &more, MatchMode::Exact).is_err());
}

#[test]
fn test_class_token_list() {
    let el = italic(&[("class", "foo bar baz")]);
    let want = AttributeExpectation::new().with("class", vec!["baz", "foo"]);
    assert!(has_attributes(&el, &want, MatchMode::Subset).is_ok());
    assert!(has_attributes(&el, &want, MatchMode::Exact).is_err());
}

#[test]
fn test_style_string_comparisons() {
    let el = italic(&[("style", "color: red; background: blue")]);
    for wanted in ["color: red; background: blue", "background: blue; color: red"] {
        let want = AttributeExpectation::new().with("style", wanted);
        assert!(has_attributes(&el, &want, MatchMode::Subset).is_ok());
        assert!(has_attributes(&el, &want, MatchMode::Exact).is_ok());
    }
}

#[test]
fn test_style_object_comparison() {
    let el = italic(&[("style", "color: red; background: blue")]);
    let want = AttributeExpectation::new()
        .with("style", vec![("color", "red"), ("background", "blue")]);
    assert!(has_attributes(&el, &want, MatchMode::Subset).is_ok());

    let partial = AttributeExpectation::new().with("style", vec![("color", "red")]);
    assert!(has_attributes(&el, &partial, MatchMode::Subset).is_ok());
    assert!(has_attributes(&el, &partial, MatchMode::Exact).is_err());
}

#[test]
fn test_expectation_deserializes_from_json() {
    let want: AttributeExpectation = serde_json::from_value(serde_json::json!({
        "entries": {
            "id": "foo",
            "disabled": true,
            "class": ["bar"],
            "data-info": null
        }
    }))
    .unwrap();
    let el = button();
    let attrs = el.attributes().unwrap();
    assert!(compare_attributes(attrs, &want, MatchMode::Exact).is_ok());
}
