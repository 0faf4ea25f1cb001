//! Structured logging facility for domcheck
//!
//! - Single initialization point via `init(profile)`
//! - Structured logging macros (`log_op_start!`, `log_op_end!`, `log_op_error!`)
//! - Test capture mode for deterministic assertions
//!
//! # Usage
//!
//! ```rust
//! use domcheck_core::logging_facility::{init, Profile};
//!
//! init(Profile::Development);
//! ```
//!
//! Library operations only emit events; nothing is printed unless the host
//! installs a subscriber, either through `init` or its own.

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
