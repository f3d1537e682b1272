//! # gridkit
//!
//! A fixed two-dimensional grid of cells holding shared objects.
//!
//! Every cell stores its current object, the object it held before, and a map of
//! tags. Cells are addressed through proxies that accept integers, labels,
//! slices, lists, boolean masks and coordinate pairs, optionally with an
//! alignment hint that is forwarded to a layout collaborator.
//!
//! ## Features
//!
//! - Row and column labels, defaulting to `"1"`, `"2"`, ...
//! - Strided slices with negative indices, clamping and label bounds
//! - Scalar reads for two bare keys, ordered bulk reads otherwise
//! - Broadcast and positional writes that keep each cell's previous object
//! - Masks built from predicates and attribute filters, combined with `&`, `|`, `!`
//! - Optional `serde` support for options, masks and tags
//!
//! ## Example
//!
//! ```rust
//! use gridkit::prelude::*;
//!
//! let options = GridOptions::new(vec![1.0; 2], vec![2.0; 3])
//!     .row_labels(["header", "body"])
//!     .margin(0.2);
//! let mut grid = Grid::new(options).unwrap();
//!
//! let title = Handle::new(String::from("title"));
//! grid.mobs_mut().set(("header", 1, Alignment::UP), &title).unwrap();
//!
//! // Objects are shared, not copied
//! if let Some(Content::Object(handle)) = grid.mobs().get(("header", 1)).unwrap().into_scalar() {
//!     handle.borrow_mut().push('!');
//! }
//! assert_eq!(*title.borrow(), "title!");
//!
//! // Bulk reads keep row-major order
//! let header = grid.mobs().get("header").unwrap();
//! assert!(!header.is_scalar());
//! assert_eq!(header.len(), 3);
//! ```

pub mod prelude;

// Re-export core types
pub use gridkit_core::{
    // Cell types
    AttrValue,
    Attributes,
    Cell,
    Content,
    Handle,
    Tags,

    // Error types
    Error,
    ErrorKind,
    Result,

    // Main types
    Grid,
    GridOptions,
    LabelIndex,
    Axis,

    // Indexing
    resolve,
    Dims,
    Index,
    Key,
    Position,
    ProductIter,
    Selection,
    Single,
    Slice,
    Target,

    // Masks
    Filterable,
    Mask,
    MaskBuilder,

    // Layout collaborator
    Alignment,
    Layout,
    NoLayout,
    Placement,
    Spacing,

    // Proxies
    Assign,
    BulkTagSelection,
    Fetched,
    HistoryProxy,
    ScalarTagSelection,
    TagArray,
    TagSelection,
    TagsProxy,
    TagsView,
    ValueProxy,
    ValueProxyMut,

    // Constants
    DEFAULT_BUFF,
    DEFAULT_MARGIN,
};

pub use gridkit_core::{cell, error, index, label, layout, mask, options, position, proxy};
