//! # gridkit-core
//!
//! Core data structures for the gridkit cell grid.
//!
//! This crate provides:
//! - [`Grid`] - A fixed arrangement of cells with row and column labels
//! - [`Cell`] - Current object, previous object and [`Tags`] of one cell
//! - [`Index`] and [`resolve`] - Index expressions and their resolution to cells
//! - [`Mask`] and [`MaskBuilder`] - Composable boolean cell selections
//! - The proxies returned by [`Grid::mobs`], [`Grid::olds`] and [`Grid::tags`], with
//!   their `_mut` counterparts
//!
//! ## Example
//!
//! ```rust
//! use gridkit_core::{Content, Grid, GridOptions, Handle};
//!
//! let mut grid = Grid::new(GridOptions::new(vec![1.0; 2], vec![1.0; 3])).unwrap();
//!
//! // Fill the first row, then replace its middle object
//! let (x, y, z) = (Handle::new("x"), Handle::new("y"), Handle::new("z"));
//! grid.mobs_mut().set("1", vec![x.clone(), y.clone(), z]).unwrap();
//! grid.mobs_mut().set(("1", "2"), Handle::new("w")).unwrap();
//!
//! // The replaced object is kept as history
//! let old = grid.olds().get((0, 1)).unwrap().into_scalar();
//! assert_eq!(old, Some(Content::from(&y)));
//!
//! // Tag the first column and select it with a mask
//! grid.tags_mut().set((.., 0), [("edge", true)]).unwrap();
//! let edge = grid.tags().mask().filter("edge", true).build();
//! assert_eq!(grid.mobs().get(edge).unwrap().into_vec()[0], Content::from(&x));
//! ```

pub mod cell;
pub mod error;
pub mod grid;
pub mod index;
pub mod label;
pub mod layout;
pub mod mask;
pub mod options;
pub mod position;
pub mod proxy;

// Re-exports for convenience
pub use cell::{AttrValue, Attributes, Cell, Content, Handle, Tags};
pub use error::{Error, ErrorKind, Result};
pub use grid::Grid;
pub use index::{resolve, Dims, Index, Key, Selection, Single, Slice, Target};
pub use label::{Axis, LabelIndex};
pub use layout::{Alignment, Layout, NoLayout, Placement, Spacing};
pub use mask::{Filterable, Mask, MaskBuilder};
pub use options::{GridOptions, DEFAULT_BUFF, DEFAULT_MARGIN};
pub use position::{Position, ProductIter};
pub use proxy::{
    Assign, BulkTagSelection, Fetched, HistoryProxy, ScalarTagSelection, TagArray, TagSelection,
    TagsProxy, TagsView, ValueProxy, ValueProxyMut,
};
