//! HTML parsing through a caller-supplied strategy.
//!
//! The core never parses markup itself and never probes its environment for
//! a parser; hosts hand one in.

use std::time::Instant;

use crate::errors::{DomError, Result};
use crate::model::{Node, NodeKind};
use crate::{log_op_end, log_op_error, log_op_start};

/// Parses markup text into a document tree.
pub trait HtmlParser {
    /// Parse a complete HTML document.
    ///
    /// # Errors
    ///
    /// Implementations report their own failures as [`DomError::Parse`].
    fn parse_document(&self, source: &str) -> Result<Node>;
}

impl<F> HtmlParser for F
where
    F: Fn(&str) -> Result<Node>,
{
    fn parse_document(&self, source: &str) -> Result<Node> {
        self(source)
    }
}

/// Parse `source` with `parser` and check that the result is a document.
///
/// # Errors
///
/// - `Parse` when the parser fails or returns anything but a document
pub fn parse_html(parser: &dyn HtmlParser, source: &str) -> Result<Node> {
    let start = Instant::now();
    log_op_start!("parse_html", actual_len = source.len());

    let result = parser.parse_document(source).and_then(|node| match node.kind() {
        NodeKind::Document => Ok(node),
        other => Err(DomError::Parse {
            message: format!("parser returned {} node instead of a document", other.label()),
        }),
    });

    match &result {
        Ok(node) => {
            log_op_end!(
                "parse_html",
                duration_ms = start.elapsed().as_millis() as u64,
                node_kind = node.kind().label()
            );
        }
        Err(err) => {
            log_op_error!(
                "parse_html",
                err.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
        }
    }
    result
}
