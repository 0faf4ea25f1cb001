//! Text rendering of a diff tree.
//!
//! Markers:
//! - `-` / `+` prefix the actual and expected side of a replacement. Further
//!   lines of a multi-line block are shifted one column to stay aligned.
//! - `// missing <node>` marks an expected node with no actual counterpart.
//! - `<node> // should be removed` marks an actual node with no expected
//!   counterpart.

use super::model::DiffNode;
use crate::model::Node;
use crate::options::InspectOptions;
use crate::render::inspect::indent_line;
use crate::render::{end_tag, inspect_lines, start_tag};

pub(crate) const MISSING_PREFIX: &str = "// missing ";
pub(crate) const REMOVE_SUFFIX: &str = " // should be removed";

enum Work<'t, 'a> {
    Visit(&'t DiffNode<'a>, usize),
    Line(String),
}

pub(crate) fn render(root: &DiffNode<'_>, options: &InspectOptions) -> String {
    let mut out: Vec<String> = Vec::new();
    let mut stack = vec![Work::Visit(root, 0)];

    while let Some(work) = stack.pop() {
        let (node, depth) = match work {
            Work::Line(line) => {
                out.push(line);
                continue;
            }
            Work::Visit(node, depth) => (node, depth),
        };
        let pad = options.indent().repeat(depth);

        match node {
            DiffNode::Unchanged(n) => {
                out.extend(inspect_lines(n, options).iter().map(|l| indent_line(&pad, l)));
            }
            DiffNode::Replaced { actual, expected, .. } => {
                for (marker, n) in [('-', *actual), ('+', *expected)] {
                    let block = marked(marker, inspect_lines(n, options));
                    out.extend(block.iter().map(|l| indent_line(&pad, l)));
                }
            }
            DiffNode::Missing(n) => {
                let mut lines = inspect_lines(n, options);
                if let Some(first) = lines.first_mut() {
                    first.insert_str(0, MISSING_PREFIX);
                }
                out.extend(lines.iter().map(|l| indent_line(&pad, l)));
            }
            DiffNode::Extraneous(n) => {
                let mut lines = inspect_lines(n, options);
                if let Some(last) = lines.last_mut() {
                    last.push_str(REMOVE_SUFFIX);
                }
                out.extend(lines.iter().map(|l| indent_line(&pad, l)));
            }
            DiffNode::Changed(c) => {
                let (Node::Element(actual), Node::Element(expected)) = (c.actual, c.expected)
                else {
                    // Documents have no tags of their own.
                    stack.extend(c.children.iter().rev().map(|child| Work::Visit(child, depth)));
                    continue;
                };

                let end = end_tag(actual);
                if c.attributes_differ && c.children.is_empty() {
                    out.push(format!("{}-{}{}", pad, start_tag(actual), end));
                    out.push(format!("{}+{}{}", pad, start_tag(expected), end_tag(expected)));
                    continue;
                }

                if c.attributes_differ {
                    out.push(format!("{}-{}", pad, start_tag(actual)));
                    out.push(format!("{}+{}", pad, start_tag(expected)));
                } else {
                    out.push(format!("{}{}", pad, start_tag(actual)));
                }
                if !end.is_empty() {
                    stack.push(Work::Line(format!("{}{}", pad, end)));
                }
                stack.extend(
                    c.children
                        .iter()
                        .rev()
                        .map(|child| Work::Visit(child, depth + 1)),
                );
            }
        }
    }

    out.join("\n")
}

/// Prefix the first line with `marker` and shift the rest by one column.
fn marked(marker: char, lines: Vec<String>) -> Vec<String> {
    lines
        .into_iter()
        .enumerate()
        .map(|(idx, line)| {
            if idx == 0 {
                format!("{}{}", marker, line)
            } else {
                indent_line(" ", &line)
            }
        })
        .collect()
}
