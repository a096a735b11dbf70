//! Composition Engine Tests
//!
//! Registry combination rules, resolution semantics, context lifecycle and
//! context hierarchies.

mod capability_tests;
mod resolution_tests;
