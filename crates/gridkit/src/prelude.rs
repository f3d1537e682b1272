//! Prelude module - common imports for gridkit users
//!
//! ```rust
//! use gridkit::prelude::*;
//! ```

pub use crate::{
    // Layout types
    Alignment,
    // Cell types
    AttrValue,
    Attributes,
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

    // Indexing
    Index,
    Key,
    Slice,

    // Masks
    Mask,

    // Layout collaborator
    Layout,
    Placement,
    Spacing,

    // Proxy results
    Assign,
    Fetched,
    TagSelection,
};
