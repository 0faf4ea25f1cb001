//! Canonical schema constants for structured logging and events
//!
//! These constants ensure consistency across all logging and error reporting.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Tree identifiers
pub const FIELD_NODE_KIND: &str = "node_kind";
pub const FIELD_NODE_PATH: &str = "node_path";
pub const FIELD_SELECTOR: &str = "selector";

// Collection sizes
pub const FIELD_ACTUAL_LEN: &str = "actual_len";
pub const FIELD_EXPECTED_LEN: &str = "expected_len";
pub const FIELD_MATCH_COUNT: &str = "match_count";

// Diff outcome
pub const FIELD_CHANGED: &str = "changed";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
