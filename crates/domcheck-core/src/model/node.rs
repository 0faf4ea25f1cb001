use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Attribute storage: name → value, iterated in alphabetical order.
pub type Attributes = BTreeMap<String, String>;

/// The five node kinds every tree is made of
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Document,
    DocumentType,
    Element,
    Text,
    Comment,
}

impl NodeKind {
    /// Stable lowercase label used in log fields and error context
    pub fn label(&self) -> &'static str {
        match self {
            NodeKind::Document => "document",
            NodeKind::DocumentType => "document_type",
            NodeKind::Element => "element",
            NodeKind::Text => "text",
            NodeKind::Comment => "comment",
        }
    }

    /// Kinds without children or a tag: text, comment and doctype
    pub fn is_leaf(&self) -> bool {
        matches!(
            self,
            NodeKind::Text | NodeKind::Comment | NodeKind::DocumentType
        )
    }
}

/// An element: tag name, attributes and ordered children
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    /// Tag name, case preserved
    pub tag_name: String,

    /// Attribute mapping; presentation order is not significant
    #[serde(default)]
    pub attributes: Attributes,

    /// Child nodes in document order
    #[serde(default)]
    pub children: Vec<Node>,
}

impl Element {
    /// Create an element with no attributes and no children
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            attributes: Attributes::new(),
            children: Vec::new(),
        }
    }

    /// Builder-style attribute setter
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Builder-style child append
    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// Value of one attribute, if present
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

/// One node of a parsed markup tree.
///
/// `PartialEq` is plain structural identity. Semantic equality, where
/// `class` token order and `style` declaration order do not matter, is
/// [`equals`](crate::equality::equals).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    Document {
        #[serde(default)]
        children: Vec<Node>,
    },
    DocumentType {
        name: String,
    },
    Element(Element),
    Text {
        text: String,
    },
    Comment {
        text: String,
    },
}

impl Node {
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Document { .. } => NodeKind::Document,
            Node::DocumentType { .. } => NodeKind::DocumentType,
            Node::Element(_) => NodeKind::Element,
            Node::Text { .. } => NodeKind::Text,
            Node::Comment { .. } => NodeKind::Comment,
        }
    }

    /// Tag name for elements
    pub fn tag_name(&self) -> Option<&str> {
        self.as_element().map(|e| e.tag_name.as_str())
    }

    /// Attributes for elements
    pub fn attributes(&self) -> Option<&Attributes> {
        self.as_element().map(|e| &e.attributes)
    }

    /// Ordered children; empty for leaf kinds
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Document { children } => children.as_slice(),
            Node::Element(e) => e.children.as_slice(),
            Node::DocumentType { .. } | Node::Text { .. } | Node::Comment { .. } => &[],
        }
    }

    /// Content of text and comment nodes
    pub fn text(&self) -> Option<&str> {
        match self {
            Node::Text { text } | Node::Comment { text } => Some(text.as_str()),
            _ => None,
        }
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(e) => Some(e),
            _ => None,
        }
    }

    pub fn is_element(&self) -> bool {
        matches!(self, Node::Element(_))
    }

    pub fn has_children(&self) -> bool {
        !self.children().is_empty()
    }

    /// Concatenated content of all descendant text nodes, in document order.
    ///
    /// Comments and the doctype contribute nothing.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            match node {
                Node::Text { text } => out.push_str(text),
                Node::Document { children } => stack.extend(children.iter().rev()),
                Node::Element(e) => stack.extend(e.children.iter().rev()),
                Node::DocumentType { .. } | Node::Comment { .. } => {}
            }
        }
        out
    }

    /// The root element of a document: its first element child.
    pub fn document_element(&self) -> Option<&Element> {
        match self {
            Node::Document { children } => children.iter().find_map(Node::as_element),
            _ => None,
        }
    }
}

/// Children are detached onto a work-list before the node itself goes, so
/// dropping a tree never recurses.
impl Drop for Node {
    fn drop(&mut self) {
        let mut pending = match self {
            Node::Document { children } => std::mem::take(children),
            Node::Element(e) => std::mem::take(&mut e.children),
            Node::DocumentType { .. } | Node::Text { .. } | Node::Comment { .. } => return,
        };
        while let Some(mut node) = pending.pop() {
            match &mut node {
                Node::Document { children } => pending.append(children),
                Node::Element(e) => pending.append(&mut e.children),
                Node::DocumentType { .. } | Node::Text { .. } | Node::Comment { .. } => {}
            }
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

/// Build an element node.
///
/// ```
/// use domcheck_core::model::{element, text};
///
/// let node = element("div", &[("id", "foo")], vec![text("hello")]);
/// assert_eq!(node.tag_name(), Some("div"));
/// ```
pub fn element(tag_name: &str, attributes: &[(&str, &str)], children: Vec<Node>) -> Node {
    Node::Element(Element {
        tag_name: tag_name.to_string(),
        attributes: attributes
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
        children,
    })
}

pub fn text(content: impl Into<String>) -> Node {
    Node::Text {
        text: content.into(),
    }
}

pub fn comment(content: impl Into<String>) -> Node {
    Node::Comment {
        text: content.into(),
    }
}

pub fn doctype(name: impl Into<String>) -> Node {
    Node::DocumentType { name: name.into() }
}

pub fn document(children: Vec<Node>) -> Node {
    Node::Document { children }
}
