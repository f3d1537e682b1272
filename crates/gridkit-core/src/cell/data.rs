//! The grid's storage unit

use super::{Content, Tags};

/// A single grid cell: current object, previous object, and tags
///
/// `previous` has no setter. It only changes when [`Cell::insert`] displaces
/// the current object.
#[derive(Debug)]
pub struct Cell<T> {
    value: Content<T>,
    previous: Content<T>,
    tags: Tags,
}

impl<T> Cell<T> {
    /// Create an empty cell
    pub fn new() -> Self {
        Self {
            value: Content::Empty,
            previous: Content::Empty,
            tags: Tags::new(),
        }
    }

    /// The object currently held
    pub fn value(&self) -> &Content<T> {
        &self.value
    }

    /// The object held before the latest insertion
    pub fn previous(&self) -> &Content<T> {
        &self.previous
    }

    /// The cell's tags
    pub fn tags(&self) -> &Tags {
        &self.tags
    }

    /// Mutable access to the cell's tags
    pub fn tags_mut(&mut self) -> &mut Tags {
        &mut self.tags
    }

    /// Store a new object
    ///
    /// The current object moves into `previous`; whatever `previous` held
    /// before is returned.
    pub fn insert(&mut self, value: Content<T>) -> Content<T> {
        let current = std::mem::replace(&mut self.value, value);
        std::mem::replace(&mut self.previous, current)
    }

    /// Replace the tags wholesale
    pub fn replace_tags(&mut self, tags: Tags) -> Tags {
        std::mem::replace(&mut self.tags, tags)
    }
}

impl<T> Default for Cell<T> {
    fn default() -> Self {
        Self::new()
    }
}
