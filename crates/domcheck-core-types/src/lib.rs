//! Core types shared across domcheck facilities
//!
//! This crate holds the canonical schema constants used by the logging
//! facility and by error reporting, so that every component emits the same
//! field keys and event names.

pub mod schema;
