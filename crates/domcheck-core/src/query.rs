//! Selector queries over a node tree.
//!
//! Selector matching belongs to the caller: anything implementing
//! [`SelectorQuery`] can be plugged in. This module wraps the matches in a
//! [`NodeList`] and turns an empty result into an error.

use std::fmt;
use std::ops::Index;
use std::time::Instant;

use crate::errors::{DomError, Result};
use crate::model::Node;
use crate::options::InspectOptions;
use crate::render::inspect_with;
use crate::{log_op_end, log_op_error, log_op_start};

/// A selector engine supplied by the caller.
pub trait SelectorQuery {
    /// All nodes under `root` (root included) matching `selector`, in
    /// document order.
    fn select<'a>(&self, root: &'a Node, selector: &str) -> Vec<&'a Node>;
}

/// Ordered, array-like view over query results.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NodeList<'a> {
    nodes: Vec<&'a Node>,
}

impl<'a> NodeList<'a> {
    pub fn from_nodes(nodes: Vec<&'a Node>) -> Self {
        Self { nodes }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&'a Node> {
        self.nodes.get(index).copied()
    }

    pub fn first(&self) -> Option<&'a Node> {
        self.get(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Node> + '_ {
        self.nodes.iter().copied()
    }

    /// `NodeList[ <div></div>, <div></div> ]`, each item rendered with `options`
    pub fn inspect_with(&self, options: &InspectOptions) -> String {
        if self.nodes.is_empty() {
            return "NodeList[]".to_string();
        }
        let items: Vec<String> = self.nodes.iter().map(|n| inspect_with(n, options)).collect();
        format!("NodeList[ {} ]", items.join(", "))
    }
}

impl Index<usize> for NodeList<'_> {
    type Output = Node;

    fn index(&self, index: usize) -> &Node {
        self.nodes[index]
    }
}

impl<'a> IntoIterator for NodeList<'a> {
    type Item = &'a Node;
    type IntoIter = std::vec::IntoIter<&'a Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.into_iter()
    }
}

impl fmt::Display for NodeList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inspect_with(&InspectOptions::default()))
    }
}

/// Run `selector` against `root` and collect every match.
///
/// # Errors
///
/// - `SelectorYieldedNoResults` when nothing matches
pub fn query_all<'a, Q: SelectorQuery + ?Sized>(
    engine: &Q,
    root: &'a Node,
    selector: &str,
) -> Result<NodeList<'a>> {
    let start = Instant::now();
    log_op_start!("query_all", selector = selector);

    let matches = engine.select(root, selector);
    if matches.is_empty() {
        let err = DomError::SelectorYieldedNoResults {
            selector: selector.to_string(),
        };
        log_op_error!(
            "query_all",
            err.clone(),
            duration_ms = start.elapsed().as_millis() as u64,
            selector = selector
        );
        return Err(err);
    }

    log_op_end!(
        "query_all",
        duration_ms = start.elapsed().as_millis() as u64,
        match_count = matches.len()
    );
    Ok(NodeList::from_nodes(matches))
}

/// First match of `selector` under `root`.
///
/// # Errors
///
/// - `SelectorYieldedNoResults` when nothing matches
pub fn query_first<'a, Q: SelectorQuery + ?Sized>(
    engine: &Q,
    root: &'a Node,
    selector: &str,
) -> Result<&'a Node> {
    let list = query_all(engine, root, selector)?;
    list.first().ok_or_else(|| DomError::SelectorYieldedNoResults {
        selector: selector.to_string(),
    })
}
