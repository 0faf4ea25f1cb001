//! Adapter seam between externally parsed trees and [`Node`].
//!
//! Any handle that can answer the [`TreeSource`] questions can be converted
//! into the canonical model once, after which every component works on the
//! immutable [`Node`] snapshot.

use std::time::Instant;

use serde_json::Value;

use super::node::{Attributes, Element, Node, NodeKind};
use crate::errors::{DomError, Result};
use crate::{log_op_end, log_op_error, log_op_start};

/// A node handle produced by an upstream parser or DOM implementation.
pub trait TreeSource {
    /// Which of the five kinds this node is; `None` when it is none of them.
    fn classify(&self) -> Option<NodeKind>;

    /// Human-readable description of the node's kind, used in errors for
    /// nodes that [`classify`](TreeSource::classify) rejects.
    fn kind_label(&self) -> String;

    /// Tag name (elements only)
    fn tag_name(&self) -> Option<String>;

    /// Attribute name/value pairs (elements only)
    fn attributes(&self) -> Vec<(String, String)>;

    /// Character data (text and comment nodes only)
    fn text(&self) -> Option<String>;

    /// Declared name (doctype nodes only)
    fn doctype_name(&self) -> Option<String>;

    /// Ordered children (documents and elements only)
    fn children(&self) -> Vec<&Self>;
}

/// A container under construction: the node without its children yet, plus
/// the source children still to convert.
struct Frame<'s, S: ?Sized> {
    node: Node,
    pending: std::vec::IntoIter<&'s S>,
    visited: usize,
}

impl<'s, S: TreeSource + ?Sized> Frame<'s, S> {
    fn push_child(&mut self, child: Node) {
        match &mut self.node {
            Node::Document { children } => children.push(child),
            Node::Element(e) => e.children.push(child),
            Node::DocumentType { .. } | Node::Text { .. } | Node::Comment { .. } => {}
        }
    }
}

/// Convert one source node, without children. Containers also return their
/// source children so the caller can schedule them.
fn shell_of<'s, S: TreeSource + ?Sized>(
    source: &'s S,
    path: &[usize],
) -> Result<(Node, Vec<&'s S>)> {
    let kind = source
        .classify()
        .ok_or_else(|| DomError::unsupported(source.kind_label(), path))?;

    let shell = match kind {
        NodeKind::Document => {
            return Ok((Node::Document { children: Vec::new() }, source.children()));
        }
        NodeKind::Element => {
            let tag_name = source
                .tag_name()
                .filter(|t| !t.is_empty())
                .ok_or_else(|| DomError::unsupported("element without a tag name", path))?;
            let attributes: Attributes = source.attributes().into_iter().collect();
            let element = Element {
                tag_name,
                attributes,
                children: Vec::new(),
            };
            return Ok((Node::Element(element), source.children()));
        }
        NodeKind::DocumentType => Node::DocumentType {
            name: source.doctype_name().unwrap_or_default(),
        },
        NodeKind::Text => Node::Text {
            text: source.text().unwrap_or_default(),
        },
        NodeKind::Comment => Node::Comment {
            text: source.text().unwrap_or_default(),
        },
    };
    Ok((shell, Vec::new()))
}

impl Node {
    /// Build the canonical model from an external tree.
    ///
    /// Uses an explicit work-list, so arbitrarily deep inputs do not grow the
    /// call stack.
    ///
    /// # Errors
    ///
    /// - `UnsupportedNodeKind` when some node (reported with its child-index
    ///   path) is not one of the five kinds, or is an element without a tag
    pub fn from_source<S: TreeSource + ?Sized>(source: &S) -> Result<Node> {
        let start = Instant::now();
        log_op_start!("from_source");

        match convert(source) {
            Ok(node) => {
                log_op_end!(
                    "from_source",
                    duration_ms = start.elapsed().as_millis() as u64,
                    node_kind = node.kind().label()
                );
                Ok(node)
            }
            Err(err) => {
                let node_path = match &err {
                    DomError::UnsupportedNodeKind { path, .. } => path.clone(),
                    _ => String::new(),
                };
                log_op_error!(
                    "from_source",
                    err.clone(),
                    duration_ms = start.elapsed().as_millis() as u64,
                    node_path = node_path.as_str()
                );
                Err(err)
            }
        }
    }
}

fn convert<S: TreeSource + ?Sized>(source: &S) -> Result<Node> {
    let (root, children) = shell_of(source, &[])?;
    if children.is_empty() {
        return Ok(root);
    }

    let mut stack: Vec<Frame<'_, S>> = vec![Frame {
        node: root,
        pending: children.into_iter(),
        visited: 0,
    }];

    loop {
        let next = match stack.last_mut() {
            Some(frame) => {
                let next = frame.pending.next();
                if next.is_some() {
                    frame.visited += 1;
                }
                next
            }
            None => return Err(DomError::unsupported("empty conversion stack", &[])),
        };

        match next {
            Some(child) => {
                let path: Vec<usize> = stack.iter().map(|f| f.visited - 1).collect();
                let (node, grandchildren) = shell_of(child, &path)?;
                if grandchildren.is_empty() {
                    if let Some(frame) = stack.last_mut() {
                        frame.push_child(node);
                    }
                } else {
                    stack.push(Frame {
                        node,
                        pending: grandchildren.into_iter(),
                        visited: 0,
                    });
                }
            }
            None => {
                let Some(done) = stack.pop() else {
                    return Err(DomError::unsupported("empty conversion stack", &[]));
                };
                match stack.last_mut() {
                    Some(parent) => parent.push_child(done.node),
                    None => return Ok(done.node),
                }
            }
        }
    }
}

/// DOM `nodeType` codes for the supported kinds
const ELEMENT_NODE: u64 = 1;
const TEXT_NODE: u64 = 3;
const COMMENT_NODE: u64 = 8;
const DOCUMENT_NODE: u64 = 9;
const DOCUMENT_TYPE_NODE: u64 = 10;

fn str_field(value: &Value, keys: &[&str]) -> Option<String> {
    keys.iter()
        .find_map(|k| value.get(*k).and_then(Value::as_str))
        .map(str::to_string)
}

fn attribute_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        // `disabled: true` style presence flags; `false` means absent
        Value::Bool(true) => Some(String::new()),
        Value::Bool(false) | Value::Null => None,
        other => Some(other.to_string()),
    }
}

/// JSON in the shape of a serialized DOM:
///
/// ```json
/// { "nodeType": 1, "tagName": "div",
///   "attributes": { "id": "foo" },
///   "childNodes": [ { "nodeType": 3, "data": "hi" } ] }
/// ```
///
/// `attributes` may also be an array of `{ "name", "value" }` objects.
impl TreeSource for Value {
    fn classify(&self) -> Option<NodeKind> {
        match self.get("nodeType").and_then(Value::as_u64)? {
            ELEMENT_NODE => Some(NodeKind::Element),
            TEXT_NODE => Some(NodeKind::Text),
            COMMENT_NODE => Some(NodeKind::Comment),
            DOCUMENT_NODE => Some(NodeKind::Document),
            DOCUMENT_TYPE_NODE => Some(NodeKind::DocumentType),
            _ => None,
        }
    }

    fn kind_label(&self) -> String {
        match self.get("nodeType") {
            Some(code) => format!("nodeType {}", code),
            None => "value without nodeType".to_string(),
        }
    }

    fn tag_name(&self) -> Option<String> {
        str_field(self, &["tagName", "nodeName"])
    }

    fn attributes(&self) -> Vec<(String, String)> {
        match self.get("attributes") {
            Some(Value::Object(map)) => map
                .iter()
                .filter_map(|(k, v)| attribute_value(v).map(|v| (k.clone(), v)))
                .collect(),
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(|item| {
                    let name = item.get("name").and_then(Value::as_str)?;
                    let value = item.get("value").map_or(Some(String::new()), attribute_value)?;
                    Some((name.to_string(), value))
                })
                .collect(),
            _ => Vec::new(),
        }
    }

    fn text(&self) -> Option<String> {
        str_field(self, &["data", "nodeValue", "textContent"])
    }

    fn doctype_name(&self) -> Option<String> {
        str_field(self, &["name"])
    }

    fn children(&self) -> Vec<&Self> {
        self.get("childNodes")
            .and_then(Value::as_array)
            .map(|items| items.iter().collect())
            .unwrap_or_default()
    }
}
