//! Structural equality over node trees.
//!
//! Two trees are equal when they have the same shape and every pair of
//! corresponding nodes is [`node_equal`]. Attribute comparison follows exact
//! mode, so `class` token order and `style` declaration order do not matter.

use std::collections::HashMap;

use crate::attributes::attributes_equal;
use crate::model::Node;

/// Deep equality of two trees.
///
/// Walks both trees with an explicit work-list; tree depth does not affect
/// call-stack usage.
///
/// ```
/// use domcheck_core::equality::equals;
/// use domcheck_core::model::element;
///
/// let a = element("i", &[("class", "foo bar")], vec![]);
/// let b = element("i", &[("class", "bar foo")], vec![]);
/// assert!(equals(&a, &b));
/// ```
pub fn equals(actual: &Node, expected: &Node) -> bool {
    let mut work: Vec<(&Node, &Node)> = vec![(actual, expected)];
    while let Some((a, b)) = work.pop() {
        if !node_equal(a, b) {
            return false;
        }
        let (ac, bc) = (a.children(), b.children());
        if ac.len() != bc.len() {
            return false;
        }
        work.extend(ac.iter().zip(bc.iter()));
    }
    true
}

/// Memoized subtree equality for the lifetime of one diff.
///
/// Results are keyed by node address, so a pair is compared once however many
/// ancestor alignments ask about it. The borrowed trees must outlive the table.
#[derive(Debug, Default)]
pub(crate) struct EqualityTable<'a> {
    memo: HashMap<(*const Node, *const Node), bool>,
    trees: std::marker::PhantomData<&'a Node>,
}

impl<'a> EqualityTable<'a> {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Same answer as [`equals`], settled bottom-up from an explicit stack.
    pub(crate) fn equal(&mut self, actual: &'a Node, expected: &'a Node) -> bool {
        enum Task<'n> {
            Enter(&'n Node, &'n Node),
            Exit(&'n Node, &'n Node),
        }

        let root = key(actual, expected);
        if let Some(&known) = self.memo.get(&root) {
            return known;
        }

        let mut tasks = vec![Task::Enter(actual, expected)];
        while let Some(task) = tasks.pop() {
            match task {
                Task::Enter(a, b) => {
                    if self.memo.contains_key(&key(a, b)) {
                        continue;
                    }
                    let (ac, bc) = (a.children(), b.children());
                    if !node_equal(a, b) || ac.len() != bc.len() {
                        self.memo.insert(key(a, b), false);
                        continue;
                    }
                    tasks.push(Task::Exit(a, b));
                    tasks.extend(ac.iter().zip(bc.iter()).map(|(x, y)| Task::Enter(x, y)));
                }
                Task::Exit(a, b) => {
                    let all = a
                        .children()
                        .iter()
                        .zip(b.children().iter())
                        .all(|(x, y)| self.memo.get(&key(x, y)) == Some(&true));
                    self.memo.insert(key(a, b), all);
                }
            }
        }
        self.memo.get(&root).copied().unwrap_or(false)
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.memo.len()
    }
}

fn key(a: &Node, b: &Node) -> (*const Node, *const Node) {
    (a as *const Node, b as *const Node)
}

/// Equality of the nodes themselves, ignoring their children.
pub fn node_equal(a: &Node, b: &Node) -> bool {
    match (a, b) {
        (Node::Element(ea), Node::Element(eb)) => {
            ea.tag_name == eb.tag_name && attributes_equal(&ea.attributes, &eb.attributes)
        }
        (Node::Text { text: ta }, Node::Text { text: tb }) => ta == tb,
        (Node::Comment { text: ta }, Node::Comment { text: tb }) => ta == tb,
        (Node::DocumentType { name: na }, Node::DocumentType { name: nb }) => na == nb,
        (Node::Document { .. }, Node::Document { .. }) => true,
        _ => false,
    }
}

/// Whether two nodes are the same sort of thing: same kind, and for
/// elements the same tag name. Compatible pairs diff in place; incompatible
/// pairs are replaced wholesale.
pub fn compatible(a: &Node, b: &Node) -> bool {
    match (a, b) {
        (Node::Element(ea), Node::Element(eb)) => ea.tag_name == eb.tag_name,
        _ => a.kind() == b.kind(),
    }
}
