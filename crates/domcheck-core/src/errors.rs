use crate::attributes::AttributeMismatch;
use thiserror::Error;

/// Result type alias using DomError
pub type Result<T> = std::result::Result<T, DomError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that callers can match on when
/// building assertion output or asserting in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DcErrorKind {
    // Tree input
    UnsupportedNodeKind,

    // Comparison
    AttributeMismatch,
    TextMismatch,

    // Collaborators
    SelectorYieldedNoResults,
    Parse,
}

impl DcErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            DcErrorKind::UnsupportedNodeKind => "ERR_UNSUPPORTED_NODE_KIND",
            DcErrorKind::AttributeMismatch => "ERR_ATTRIBUTE_MISMATCH",
            DcErrorKind::TextMismatch => "ERR_TEXT_MISMATCH",
            DcErrorKind::SelectorYieldedNoResults => "ERR_SELECTOR_YIELDED_NO_RESULTS",
            DcErrorKind::Parse => "ERR_PARSE",
        }
    }

    /// Whether the condition means the input could not be processed at all.
    ///
    /// Comparison mismatches are ordinary results that a caller turns into
    /// assertion output; they are never fatal.
    pub fn is_fatal(&self) -> bool {
        matches!(self, DcErrorKind::UnsupportedNodeKind | DcErrorKind::Parse)
    }
}

/// Canonical structured error type
///
/// Carries a classification plus optional operation and node-path context.
#[derive(Debug, Clone)]
pub struct DcError {
    kind: DcErrorKind,
    op: Option<String>,
    node_path: Option<String>,
    selector: Option<String>,
    attributes: Option<Vec<String>>,
    message: String,
}

impl DcError {
    /// Create a new error with the specified kind
    pub fn new(kind: DcErrorKind) -> Self {
        Self {
            kind,
            op: None,
            node_path: None,
            selector: None,
            attributes: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add the child-index path of the offending node
    pub fn with_node_path(mut self, path: impl Into<String>) -> Self {
        self.node_path = Some(path.into());
        self
    }

    /// Add the selector that was queried
    pub fn with_selector(mut self, selector: impl Into<String>) -> Self {
        self.selector = Some(selector.into());
        self
    }

    /// Add the offending attribute names
    pub fn with_attributes(mut self, names: Vec<String>) -> Self {
        self.attributes = Some(names);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> DcErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the node path context, if any
    pub fn node_path(&self) -> Option<&str> {
        self.node_path.as_deref()
    }

    /// Get the selector context, if any
    pub fn selector(&self) -> Option<&str> {
        self.selector.as_deref()
    }

    /// Get the offending attribute names, if any
    pub fn attributes(&self) -> Option<&[String]> {
        self.attributes.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for DcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(path) = &self.node_path {
            write!(f, " (node_path: {})", path)?;
        }
        Ok(())
    }
}

impl std::error::Error for DcError {}

// ========== End Error Facility ==========

/// Errors raised while building or querying node trees
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomError {
    /// A tree-source node could not be classified as one of the five kinds
    #[error("Unsupported node kind: {kind} at {path}")]
    UnsupportedNodeKind { kind: String, path: String },

    /// The selector query collaborator matched nothing
    #[error("The selector {selector} yielded no results")]
    SelectorYieldedNoResults { selector: String },

    /// The caller-supplied HTML parser failed or returned a non-document
    #[error("HTML parsing failed: {message}")]
    Parse { message: String },
}

impl DomError {
    /// Build an `UnsupportedNodeKind` error for a node at the given child path.
    pub fn unsupported(kind: impl Into<String>, path: &[usize]) -> Self {
        DomError::UnsupportedNodeKind {
            kind: kind.into(),
            path: format_path(path),
        }
    }
}

/// Render a child-index path as `/0/2/1`; the root is `/`.
pub(crate) fn format_path(path: &[usize]) -> String {
    if path.is_empty() {
        return "/".to_string();
    }
    path.iter().map(|i| format!("/{}", i)).collect()
}

/// Conversion from DomError to DcError
impl From<DomError> for DcError {
    fn from(err: DomError) -> Self {
        let message = err.to_string();
        match err {
            DomError::UnsupportedNodeKind { path, .. } => {
                DcError::new(DcErrorKind::UnsupportedNodeKind)
                    .with_node_path(path)
                    .with_message(message)
            }
            DomError::SelectorYieldedNoResults { selector } => {
                DcError::new(DcErrorKind::SelectorYieldedNoResults)
                    .with_selector(selector)
                    .with_message(message)
            }
            DomError::Parse { .. } => DcError::new(DcErrorKind::Parse).with_message(message),
        }
    }
}

impl From<AttributeMismatch> for DcError {
    fn from(mismatch: AttributeMismatch) -> Self {
        DcError::new(DcErrorKind::AttributeMismatch)
            .with_attributes(mismatch.names().into_iter().map(str::to_string).collect())
            .with_message(mismatch.to_string())
    }
}

impl From<crate::checks::TextMismatch> for DcError {
    fn from(mismatch: crate::checks::TextMismatch) -> Self {
        DcError::new(DcErrorKind::TextMismatch).with_message(mismatch.to_string())
    }
}
