//! Index-based views over one facet of every cell
//!
//! - [`ValueProxy`] / [`ValueProxyMut`] - current objects (`mobs`)
//! - [`HistoryProxy`] - previously held objects (`olds`), read-only
//! - [`TagsView`] / [`TagsProxy`] - per-cell metadata (`tags`)
//!
//! Every proxy resolves its index with [`resolve`](crate::index::resolve), so the
//! same expression selects the same cells whichever facet is addressed.

mod history;
mod tags;
mod value;

use std::fmt;

use crate::cell::{Cell, Content};
use crate::error::Result;
use crate::grid::Grid;
use crate::index::Index;

pub use history::HistoryProxy;
pub use tags::{
    BulkTagSelection, ScalarTagSelection, TagArray, TagSelection, TagsProxy, TagsView,
};
pub use value::{Assign, ValueProxy, ValueProxyMut};

/// Result of a read: one item for a scalar selection, a sequence otherwise
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fetched<V> {
    /// Both keys were bare positions or labels
    Scalar(V),
    /// Anything else, in row-major selection order
    Bulk(Vec<V>),
}

impl<V> Fetched<V> {
    /// Whether a single item was addressed
    pub fn is_scalar(&self) -> bool {
        matches!(self, Fetched::Scalar(_))
    }

    /// The single item of a scalar read
    pub fn into_scalar(self) -> Option<V> {
        match self {
            Fetched::Scalar(v) => Some(v),
            Fetched::Bulk(_) => None,
        }
    }

    /// All items, whatever the selection
    pub fn into_vec(self) -> Vec<V> {
        match self {
            Fetched::Scalar(v) => vec![v],
            Fetched::Bulk(values) => values,
        }
    }

    /// Number of items
    pub fn len(&self) -> usize {
        match self {
            Fetched::Scalar(_) => 1,
            Fetched::Bulk(values) => values.len(),
        }
    }

    /// Whether a bulk read selected nothing
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<V> IntoIterator for Fetched<V> {
    type Item = V;
    type IntoIter = std::vec::IntoIter<V>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

/// Read one content facet at every selected position
fn fetch<T, I: Into<Index>>(
    grid: &Grid<T>,
    index: I,
    facet: fn(&Cell<T>) -> &Content<T>,
) -> Result<Fetched<Content<T>>> {
    let selection = grid.select(index)?;
    let cells = grid.cell_slice();
    let mut values: Vec<Content<T>> = selection
        .positions
        .iter()
        .map(|&pos| facet(&cells[grid.offset(pos)]).clone())
        .collect();

    if selection.is_scalar() && values.len() == 1 {
        if let Some(value) = values.pop() {
            return Ok(Fetched::Scalar(value));
        }
    }
    Ok(Fetched::Bulk(values))
}

/// Render one facet of the whole grid, one bracketed row per line
fn render<T, F>(f: &mut fmt::Formatter<'_>, grid: &Grid<T>, mut item: F) -> fmt::Result
where
    F: FnMut(&Cell<T>, &mut fmt::Formatter<'_>) -> fmt::Result,
{
    let cols = grid.col_count();
    write!(f, "[")?;
    for (row, chunk) in grid.cell_slice().chunks(cols).enumerate() {
        if row > 0 {
            write!(f, ",\n ")?;
        }
        write!(f, "[")?;
        for (col, cell) in chunk.iter().enumerate() {
            if col > 0 {
                write!(f, ", ")?;
            }
            item(cell, f)?;
        }
        write!(f, "]")?;
    }
    write!(f, "]")
}

/// `<Name of size (rows, cols)>`
fn summary<T>(f: &mut fmt::Formatter<'_>, name: &str, grid: &Grid<T>) -> fmt::Result {
    write!(f, "<{name} of size {:?}>", grid.shape())
}
