use super::tags::{end_tag, start_tag};
use crate::model::Node;
use crate::options::InspectOptions;

/// Placeholder for a child below the depth limit
pub const ELLIPSIS: &str = "...";

/// Render a node with the default options (depth 3).
///
/// ```
/// use domcheck_core::model::element;
/// use domcheck_core::render::inspect;
///
/// let nested = element("div", &[], vec![element("div", &[], vec![
///     element("div", &[], vec![element("div", &[], vec![])]),
/// ])]);
/// assert_eq!(inspect(&nested), "<div><div><div>...</div></div></div>");
/// ```
pub fn inspect(node: &Node) -> String {
    inspect_with(node, &InspectOptions::default())
}

pub fn inspect_with(node: &Node, options: &InspectOptions) -> String {
    inspect_lines(node, options).join("\n")
}

/// Render a node as lines without trailing newlines.
///
/// The call root is level 1. A node at `max_depth` renders each of its
/// children as `...`. Nodes are laid out bottom-up from an explicit stack, so
/// a large `max_depth` on a deep tree does not grow the call stack.
pub fn inspect_lines(node: &Node, options: &InspectOptions) -> Vec<String> {
    enum Task<'n> {
        Enter(&'n Node, usize),
        Exit(&'n Node),
    }

    let mut tasks = vec![Task::Enter(node, 1)];
    let mut done: Vec<Vec<Line>> = Vec::new();

    while let Some(task) = tasks.pop() {
        match task {
            Task::Enter(n, level) => {
                let children = n.children();
                if children.is_empty() || level >= options.max_depth {
                    let blocks = children
                        .iter()
                        .map(|_| vec![Line::flat(ELLIPSIS.to_string())])
                        .collect();
                    done.push(layout(n, blocks, options));
                } else {
                    tasks.push(Task::Exit(n));
                    tasks.extend(children.iter().rev().map(|c| Task::Enter(c, level + 1)));
                }
            }
            Task::Exit(n) => {
                let at = done.len().saturating_sub(n.children().len());
                let blocks = done.split_off(at);
                done.push(layout(n, blocks, options));
            }
        }
    }

    let pad = options.indent();
    done.pop()
        .unwrap_or_default()
        .into_iter()
        .map(|line| indent_line(&pad.repeat(line.depth), &line.text))
        .collect()
}

/// A rendered line and its nesting below the inspected root. Padding is
/// applied once at the end rather than at every level.
struct Line {
    depth: usize,
    text: String,
}

impl Line {
    fn flat(text: String) -> Self {
        Line { depth: 0, text }
    }
}

fn flat_lines(s: &str) -> Vec<Line> {
    s.split('\n').map(|l| Line::flat(l.to_string())).collect()
}

fn single_line(blocks: &[Vec<Line>]) -> bool {
    blocks.iter().all(|b| b.len() == 1)
}

fn joined(blocks: Vec<Vec<Line>>) -> String {
    blocks.into_iter().flatten().map(|l| l.text).collect()
}

/// Lay out one node given the already rendered blocks of its children.
fn layout(node: &Node, blocks: Vec<Vec<Line>>, options: &InspectOptions) -> Vec<Line> {
    match node {
        Node::Text { text } => flat_lines(text),
        Node::Comment { text } => flat_lines(&format!("<!--{}-->", text)),
        Node::DocumentType { name } => vec![Line::flat(format!("<!DOCTYPE {}>", name))],
        Node::Document { .. } => {
            if single_line(&blocks) {
                vec![Line::flat(joined(blocks))]
            } else {
                blocks.into_iter().flatten().collect()
            }
        }
        Node::Element(element) => {
            let start = start_tag(element);
            let end = end_tag(element);
            if blocks.is_empty() {
                return vec![Line::flat(format!("{}{}", start, end))];
            }

            let width: usize = blocks.iter().flatten().map(|l| l.text.chars().count()).sum();
            if single_line(&blocks) && width <= options.inline_width {
                return vec![Line::flat(format!("{}{}{}", start, joined(blocks), end))];
            }

            let mut lines = vec![Line::flat(start)];
            lines.extend(blocks.into_iter().flatten().map(|mut line| {
                line.depth += 1;
                line
            }));
            if !end.is_empty() {
                lines.push(Line::flat(end));
            }
            lines
        }
    }
}

pub(crate) fn indent_line(pad: &str, line: &str) -> String {
    if line.is_empty() {
        String::new()
    } else {
        format!("{}{}", pad, line)
    }
}
