//! Previous-object proxy (`olds`)

use std::fmt;

use crate::cell::{Cell, Content};
use crate::error::Result;
use crate::grid::Grid;
use crate::index::Index;
use crate::mask::MaskBuilder;

use super::{fetch, render, summary, Fetched};

/// Read-only view of the objects each cell held before its latest write
///
/// History only changes as a side effect of writes through
/// [`ValueProxyMut`](super::ValueProxyMut).
pub struct HistoryProxy<'a, T> {
    grid: &'a Grid<T>,
}

impl<'a, T> HistoryProxy<'a, T> {
    pub(crate) fn new(grid: &'a Grid<T>) -> Self {
        Self { grid }
    }

    /// Previous objects at `index`
    pub fn get<I: Into<Index>>(&self, index: I) -> Result<Fetched<Content<T>>> {
        fetch(self.grid, index, Cell::previous)
    }

    /// Start building a mask over the previous objects
    pub fn mask(&self) -> MaskBuilder<'a, T, Content<T>> {
        MaskBuilder::new(self.grid.cell_slice(), self.grid.shape(), Cell::previous)
    }
}

impl<T: fmt::Display> fmt::Display for HistoryProxy<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(f, self.grid, |cell, f| write!(f, "{}", cell.previous()))
    }
}

impl<T> fmt::Debug for HistoryProxy<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        summary(f, "HistoryProxy", self.grid)
    }
}
