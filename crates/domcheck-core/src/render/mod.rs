//! Text rendering of node trees.
//!
//! [`inspect`] is the bounded, deterministic single-node rendering used in
//! assertion output; the diff renderer reuses its line layout for every
//! subtree it prints unchanged.

pub mod inspect;
pub mod tags;

pub use inspect::{inspect, inspect_lines, inspect_with};
pub use tags::{end_tag, is_boolean_attribute, is_void_element, start_tag};
