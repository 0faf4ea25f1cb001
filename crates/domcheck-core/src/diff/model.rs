//! Diff output types.
//!
//! A [`DiffTree`] borrows both input trees; it is a view, not a copy.

use std::fmt;

use crate::model::Node;
use crate::options::DiffOptions;

/// Why a node pair was rendered as a `-`/`+` replacement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplaceKind {
    /// Two text, comment or doctype nodes with different content
    Leaf,
    /// Different kinds, or elements with different tag names
    Categorical,
}

/// One position in the annotated difference tree
#[derive(Debug, Clone, PartialEq)]
pub enum DiffNode<'a> {
    /// Equal subtrees; rendered as plain inspection
    Unchanged(&'a Node),
    /// Rendered as a `-` block for `actual` followed by a `+` block for `expected`
    Replaced {
        kind: ReplaceKind,
        actual: &'a Node,
        expected: &'a Node,
    },
    /// Same element (or both documents) with differing attributes or children
    Changed(ContainerDiff<'a>),
    /// Present only in the expected tree
    Missing(&'a Node),
    /// Present only in the actual tree
    Extraneous(&'a Node),
}

/// A compatible container pair whose children were aligned
#[derive(Debug, Clone, PartialEq)]
pub struct ContainerDiff<'a> {
    pub actual: &'a Node,
    pub expected: &'a Node,
    /// Whether the opening tags differ (always false for documents)
    pub attributes_differ: bool,
    /// Aligned children in output order
    pub children: Vec<DiffNode<'a>>,
}

/// Nested containers are detached onto a work-list, so dropping a deep
/// diff never recurses.
impl Drop for ContainerDiff<'_> {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(node) = pending.pop() {
            if let DiffNode::Changed(mut container) = node {
                pending.append(&mut container.children);
            }
        }
    }
}

impl<'a> DiffNode<'a> {
    pub fn is_unchanged(&self) -> bool {
        matches!(self, DiffNode::Unchanged(_))
    }

    /// Direct children of a `Changed` node; empty otherwise
    pub fn children(&self) -> &[DiffNode<'a>] {
        match self {
            DiffNode::Changed(c) => &c.children,
            _ => &[],
        }
    }
}

/// Result of [`diff`](crate::diff::diff)
#[derive(Debug, Clone, PartialEq)]
pub struct DiffTree<'a> {
    root: DiffNode<'a>,
    options: DiffOptions,
}

impl<'a> DiffTree<'a> {
    pub(crate) fn new(root: DiffNode<'a>, options: DiffOptions) -> Self {
        Self { root, options }
    }

    pub fn root(&self) -> &DiffNode<'a> {
        &self.root
    }

    pub fn options(&self) -> &DiffOptions {
        &self.options
    }

    /// Whether any position is something other than unchanged
    pub fn has_changes(&self) -> bool {
        !self.root.is_unchanged()
    }

    /// Count of each outcome over the whole tree, for logging and tests
    pub fn summary(&self) -> DiffSummary {
        let mut summary = DiffSummary::default();
        let mut stack = vec![&self.root];
        while let Some(node) = stack.pop() {
            match node {
                DiffNode::Unchanged(_) => summary.unchanged += 1,
                DiffNode::Replaced { .. } => summary.replaced += 1,
                DiffNode::Changed(c) => {
                    summary.changed += 1;
                    stack.extend(c.children.iter());
                }
                DiffNode::Missing(_) => summary.missing += 1,
                DiffNode::Extraneous(_) => summary.extraneous += 1,
            }
        }
        summary
    }

    /// Render with `-`/`+` markers and `//` annotations
    pub fn render(&self) -> String {
        super::render::render(&self.root, &self.options.inspect)
    }
}

impl fmt::Display for DiffTree<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Outcome counts over a diff tree
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffSummary {
    pub unchanged: usize,
    pub replaced: usize,
    pub changed: usize,
    pub missing: usize,
    pub extraneous: usize,
}
