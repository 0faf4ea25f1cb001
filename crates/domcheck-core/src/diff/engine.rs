//! Diff tree construction.
//!
//! The entry point is [`diff`], which pairs the two roots and then walks
//! compatible containers with an explicit frame stack, aligning each pair of
//! child sequences with [`align`](super::align::align). Subtree equality is
//! memoized for the whole call, so each node pair is compared once.

use std::time::Instant;

use super::align::{align_with, Step};
use super::model::{ContainerDiff, DiffNode, DiffTree, ReplaceKind};
use crate::attributes::attributes_equal;
use crate::equality::{compatible, EqualityTable};
use crate::model::Node;
use crate::options::DiffOptions;
use crate::{log_op_end, log_op_start};

/// Diff `actual` against `expected` with default options.
pub fn diff<'a>(actual: &'a Node, expected: &'a Node) -> DiffTree<'a> {
    diff_with(actual, expected, &DiffOptions::default())
}

/// Diff `actual` against `expected`.
///
/// Never fails: any two trees have a diff. Trees that are
/// [`equals`](crate::equality::equals) produce an unchanged root.
pub fn diff_with<'a>(actual: &'a Node, expected: &'a Node, options: &DiffOptions) -> DiffTree<'a> {
    let start = Instant::now();
    log_op_start!(
        "diff",
        node_kind = actual.kind().label(),
        actual_len = actual.children().len(),
        expected_len = expected.children().len()
    );

    let root = build(actual, expected);
    let tree = DiffTree::new(root, *options);

    log_op_end!(
        "diff",
        duration_ms = start.elapsed().as_millis() as u64,
        changed = tree.has_changes()
    );
    tree
}

/// Outcome of pairing two nodes: either settled, or a container whose
/// children still need aligning.
enum Resolution<'a> {
    Done(DiffNode<'a>),
    Open(Frame<'a>),
}

struct Frame<'a> {
    container: ContainerDiff<'a>,
    steps: std::vec::IntoIter<Step>,
}

fn resolve<'a>(
    actual: &'a Node,
    expected: &'a Node,
    identical: bool,
    table: &mut EqualityTable<'a>,
) -> Resolution<'a> {
    if identical {
        return Resolution::Done(DiffNode::Unchanged(actual));
    }

    let leaves = actual.kind().is_leaf() && expected.kind().is_leaf();
    if leaves || !compatible(actual, expected) {
        let kind = if leaves {
            ReplaceKind::Leaf
        } else {
            ReplaceKind::Categorical
        };
        return Resolution::Done(DiffNode::Replaced {
            kind,
            actual,
            expected,
        });
    }

    let attributes_differ = match (actual, expected) {
        (Node::Element(a), Node::Element(b)) => !attributes_equal(&a.attributes, &b.attributes),
        _ => false,
    };
    let steps = align_with(actual.children(), expected.children(), table);
    Resolution::Open(Frame {
        container: ContainerDiff {
            actual,
            expected,
            attributes_differ,
            children: Vec::with_capacity(steps.len()),
        },
        steps: steps.into_iter(),
    })
}

fn build<'a>(actual: &'a Node, expected: &'a Node) -> DiffNode<'a> {
    let mut table = EqualityTable::new();
    let identical = table.equal(actual, expected);
    let frame = match resolve(actual, expected, identical, &mut table) {
        Resolution::Done(node) => return node,
        Resolution::Open(frame) => frame,
    };

    let mut stack = vec![frame];
    loop {
        let Some(top) = stack.last_mut() else {
            // The root frame returns before the stack empties.
            return DiffNode::Unchanged(actual);
        };

        let Some(step) = top.steps.next() else {
            let Some(done) = stack.pop() else {
                return DiffNode::Unchanged(actual);
            };
            let node = DiffNode::Changed(done.container);
            match stack.last_mut() {
                Some(parent) => parent.container.children.push(node),
                None => return node,
            }
            continue;
        };

        let (parent_actual, parent_expected): (&'a Node, &'a Node) =
            (top.container.actual, top.container.expected);
        let a_children = parent_actual.children();
        let e_children = parent_expected.children();
        let resolution = match step {
            Step::Delete(i) => Resolution::Done(DiffNode::Extraneous(&a_children[i])),
            Step::Insert(j) => Resolution::Done(DiffNode::Missing(&e_children[j])),
            Step::Pair { i, j, identical } => {
                resolve(&a_children[i], &e_children[j], identical, &mut table)
            }
        };
        match resolution {
            Resolution::Done(node) => top.container.children.push(node),
            Resolution::Open(frame) => stack.push(frame),
        }
    }
}
