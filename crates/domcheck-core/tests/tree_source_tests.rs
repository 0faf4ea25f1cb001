use domcheck_core::errors::DomError;
use domcheck_core::model::{comment, doctype, document, element, text, Node, NodeKind, TreeSource};
use domcheck_core::{equals, inspect};
use serde_json::json;

#[test]
fn test_serialized_dom_document() {
    let src = json!({
        "nodeType": 9,
        "childNodes": [
            {"nodeType": 10, "name": "html"},
            {"nodeType": 8, "data": "foo"},
            {"nodeType": 1, "tagName": "html", "childNodes": [
                {"nodeType": 1, "tagName": "head"},
                {"nodeType": 1, "tagName": "body", "attributes": {"class": "bar"}, "childNodes": [
                    {"nodeType": 3, "data": "foo"}
                ]}
            ]}
        ]
    });
    let node = Node::from_source(&src).unwrap();
    let expected = document(vec![
        doctype("html"),
        comment("foo"),
        element(
            "html",
            &[],
            vec![
                element("head", &[], vec![]),
                element("body", &[("class", "bar")], vec![text("foo")]),
            ],
        ),
    ]);
    assert!(equals(&node, &expected));
    assert_eq!(
        inspect(&node),
        r#"<!DOCTYPE html><!--foo--><html><head></head><body class="bar">...</body></html>"#
    );
}

#[test]
fn test_node_name_fallback_and_node_value() {
    let src = json!({
        "nodeType": 1,
        "nodeName": "p",
        "childNodes": [{"nodeType": 3, "nodeValue": "hi"}]
    });
    let node = Node::from_source(&src).unwrap();
    assert_eq!(node.tag_name(), Some("p"));
    assert_eq!(node.text_content(), "hi");
}

#[test]
fn test_element_without_tag_is_rejected() {
    let src = json!({"nodeType": 1, "tagName": ""});
    let err = Node::from_source(&src).unwrap_err();
    assert!(matches!(err, DomError::UnsupportedNodeKind { ref path, .. } if path == "/"));
}

#[test]
fn test_missing_node_type_is_rejected() {
    let src = json!({"nodeType": 1, "tagName": "ul", "childNodes": [{"tagName": "li"}]});
    let err = Node::from_source(&src).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Unsupported node kind: value without nodeType at /0"
    );
}

/// A hand-built source, standing in for a third-party DOM
enum Fake {
    Leaf(&'static str),
    Section(Vec<Fake>),
    ProcessingInstruction,
}

impl TreeSource for Fake {
    fn classify(&self) -> Option<NodeKind> {
        match self {
            Fake::Leaf(_) => Some(NodeKind::Text),
            Fake::Section(_) => Some(NodeKind::Element),
            Fake::ProcessingInstruction => None,
        }
    }

    fn kind_label(&self) -> String {
        "processing instruction".to_string()
    }

    fn tag_name(&self) -> Option<String> {
        Some("section".to_string())
    }

    fn attributes(&self) -> Vec<(String, String)> {
        Vec::new()
    }

    fn text(&self) -> Option<String> {
        match self {
            Fake::Leaf(s) => Some(s.to_string()),
            _ => None,
        }
    }

    fn doctype_name(&self) -> Option<String> {
        None
    }

    fn children(&self) -> Vec<&Self> {
        match self {
            Fake::Section(children) => children.iter().collect(),
            _ => Vec::new(),
        }
    }
}

#[test]
fn test_custom_source() {
    let src = Fake::Section(vec![Fake::Leaf("a"), Fake::Section(vec![Fake::Leaf("b")])]);
    let node = Node::from_source(&src).unwrap();
    assert_eq!(inspect(&node), "<section>a<section>b</section></section>");
}

#[test]
fn test_custom_source_error_path() {
    let src = Fake::Section(vec![
        Fake::Leaf("a"),
        Fake::Section(vec![Fake::Leaf("b"), Fake::ProcessingInstruction]),
    ]);
    let err = Node::from_source(&src).unwrap_err();
    assert_eq!(
        err,
        DomError::UnsupportedNodeKind {
            kind: "processing instruction".to_string(),
            path: "/1/1".to_string(),
        }
    );
}

#[test]
fn test_deep_source_converts_iteratively() {
    let mut src = json!({"nodeType": 3, "data": "leaf"});
    for _ in 0..1_000 {
        src = json!({"nodeType": 1, "tagName": "div", "childNodes": [src]});
    }
    let node = Node::from_source(&src).unwrap();
    assert_eq!(node.text_content(), "leaf");
}
