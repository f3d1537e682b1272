//! End-to-end tests for gridkit.
//!
//! Each test builds its own grid through the public API, writes through the
//! proxies and asserts on what the other proxies observe.

mod common;
mod history;
mod masks;
mod tags;
mod values;

// Re-export common utilities for submodules
pub use common::*;
