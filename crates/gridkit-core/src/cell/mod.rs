//! Cell-related types
//!
//! This module contains:
//! - [`Cell`] - The storage unit: current object, previous object, tags
//! - [`Content`] and [`Handle`] - Stored objects and the empty placeholder
//! - [`Tags`] and [`AttrValue`] - Per-cell metadata
//! - [`Attributes`] - Attribute lookup used by mask filters

mod content;
mod data;
mod tags;
mod value;

pub use content::{Content, Handle};
pub use data::Cell;
pub use tags::Tags;
pub use value::{AttrValue, Attributes};
