//! Rendering configuration for inspection and diff output.
//!
//! Both option sets deserialize with `#[serde(default)]`, so a host can load a
//! partial JSON object and get the defaults for everything it leaves out.

use serde::{Deserialize, Serialize};

/// Element levels rendered before children are dotted out.
pub const DEFAULT_MAX_DEPTH: usize = 3;

/// Combined width of inline children before an element breaks into lines.
pub const DEFAULT_INLINE_WIDTH: usize = 50;

/// Spaces per nesting level in multi-line output.
pub const DEFAULT_INDENT_WIDTH: usize = 2;

/// Options controlling [`inspect_with`](crate::render::inspect_with).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InspectOptions {
    /// Levels rendered from the call root (the root is level 1). Children of
    /// a node at this level are replaced by `...`.
    pub max_depth: usize,
    /// Children render on the parent's line while their combined width stays
    /// within this budget and none of them spans several lines.
    pub inline_width: usize,
    /// Spaces per nesting level when rendering multi-line.
    pub indent_width: usize,
}

impl Default for InspectOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            inline_width: DEFAULT_INLINE_WIDTH,
            indent_width: DEFAULT_INDENT_WIDTH,
        }
    }
}

impl InspectOptions {
    /// Same options with a different depth limit
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Same options with a different inline budget
    pub fn with_inline_width(mut self, inline_width: usize) -> Self {
        self.inline_width = inline_width;
        self
    }

    pub(crate) fn indent(&self) -> String {
        " ".repeat(self.indent_width)
    }
}

/// Options controlling [`diff_with`](crate::diff::diff_with).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffOptions {
    /// Used for unchanged, replaced, missing and extraneous subtrees. The
    /// depth limit applies per subtree, measured from that subtree's root.
    pub inspect: InspectOptions,
}
