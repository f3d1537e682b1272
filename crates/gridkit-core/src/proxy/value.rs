//! Current-object proxies (`mobs`)

use std::fmt;

use crate::cell::{Cell, Content, Handle};
use crate::error::{Error, Result};
use crate::grid::Grid;
use crate::index::Index;
use crate::mask::MaskBuilder;

use super::{fetch, render, summary, Fetched};

/// Values written through [`ValueProxyMut::set`]
#[derive(Debug, Clone, PartialEq)]
pub enum Assign<T> {
    /// One object, stored in every selected cell
    One(Content<T>),
    /// One object per selected cell, in row-major selection order
    Many(Vec<Content<T>>),
}

impl<T> Assign<T> {
    /// Number of objects provided
    pub fn len(&self) -> usize {
        match self {
            Assign::One(_) => 1,
            Assign::Many(values) => values.len(),
        }
    }

    /// Whether no object was provided
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Expand into exactly one value per selected cell
    fn spread(self, cells: usize, scalar: bool) -> Result<Vec<Content<T>>> {
        match self {
            Assign::One(value) => Ok(vec![value; cells]),
            Assign::Many(values) if scalar && values.len() != 1 => {
                Err(Error::ScalarAssignment(values.len()))
            }
            Assign::Many(values) if values.len() != cells => Err(Error::LengthMismatch {
                cells,
                values: values.len(),
            }),
            Assign::Many(values) => Ok(values),
        }
    }
}

impl<T> From<Content<T>> for Assign<T> {
    fn from(value: Content<T>) -> Self {
        Assign::One(value)
    }
}

impl<T> From<Handle<T>> for Assign<T> {
    fn from(value: Handle<T>) -> Self {
        Assign::One(value.into())
    }
}

impl<T> From<&Handle<T>> for Assign<T> {
    fn from(value: &Handle<T>) -> Self {
        Assign::One(value.into())
    }
}

impl<T> From<Vec<Content<T>>> for Assign<T> {
    fn from(values: Vec<Content<T>>) -> Self {
        Assign::Many(values)
    }
}

impl<T> From<Vec<Handle<T>>> for Assign<T> {
    fn from(values: Vec<Handle<T>>) -> Self {
        Assign::Many(values.into_iter().map(Content::from).collect())
    }
}

impl<T> From<&[Handle<T>]> for Assign<T> {
    fn from(values: &[Handle<T>]) -> Self {
        Assign::Many(values.iter().map(Content::from).collect())
    }
}

impl<T, const N: usize> From<[Handle<T>; N]> for Assign<T> {
    fn from(values: [Handle<T>; N]) -> Self {
        Assign::Many(values.into_iter().map(Content::from).collect())
    }
}

/// Read-only view of the objects currently held by the grid
pub struct ValueProxy<'a, T> {
    grid: &'a Grid<T>,
}

impl<'a, T> ValueProxy<'a, T> {
    pub(crate) fn new(grid: &'a Grid<T>) -> Self {
        Self { grid }
    }

    /// Objects at `index`
    ///
    /// The returned handles share their objects with the grid.
    pub fn get<I: Into<Index>>(&self, index: I) -> Result<Fetched<Content<T>>> {
        fetch(self.grid, index, Cell::value)
    }

    /// Start building a mask over the current objects
    pub fn mask(&self) -> MaskBuilder<'a, T, Content<T>> {
        MaskBuilder::new(self.grid.cell_slice(), self.grid.shape(), Cell::value)
    }
}

/// Read-write view of the objects held by the grid
pub struct ValueProxyMut<'a, T> {
    grid: &'a mut Grid<T>,
}

impl<'a, T> ValueProxyMut<'a, T> {
    pub(crate) fn new(grid: &'a mut Grid<T>) -> Self {
        Self { grid }
    }

    /// Objects at `index`
    pub fn get<I: Into<Index>>(&self, index: I) -> Result<Fetched<Content<T>>> {
        fetch(self.grid, index, Cell::value)
    }

    /// Start building a mask over the current objects
    pub fn mask(&self) -> MaskBuilder<'_, T, Content<T>> {
        MaskBuilder::new(self.grid.cell_slice(), self.grid.shape(), Cell::value)
    }

    /// Store objects at `index`
    ///
    /// A single object is stored in every selected cell; a sequence must hold one
    /// object per selected cell. Each cell's current object moves to its history
    /// before the new one is stored, and the new object is handed to the layout.
    ///
    /// # Errors
    ///
    /// - Any resolution error of `index`
    /// - [`Error::ScalarAssignment`] for a sequence of length other than 1 on a
    ///   scalar selection
    /// - [`Error::LengthMismatch`] for a sequence whose length differs from the
    ///   number of selected cells
    ///
    /// Nothing is modified when an error is returned.
    pub fn set<I, V>(&mut self, index: I, values: V) -> Result<()>
    where
        I: Into<Index>,
        V: Into<Assign<T>>,
    {
        let selection = self.grid.select(index)?;
        let values = values
            .into()
            .spread(selection.len(), selection.is_scalar())?;
        let alignment = selection.alignment.unwrap_or_default();

        log::debug!(
            "writing {} object(s) with alignment {}",
            values.len(),
            alignment
        );

        for (pos, value) in selection.positions.into_iter().zip(values) {
            let placed = value.handle().cloned();
            let offset = self.grid.offset(pos);
            self.grid.cell_slice_mut()[offset].insert(value);
            if let Some(handle) = placed {
                self.grid.place(&handle, pos, alignment);
            }
        }
        Ok(())
    }

    /// Empty the cells at `index`, moving their objects to history
    pub fn clear<I: Into<Index>>(&mut self, index: I) -> Result<()> {
        self.set(index, Content::Empty)
    }
}

impl<T: fmt::Display> fmt::Display for ValueProxy<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(f, self.grid, |cell, f| write!(f, "{}", cell.value()))
    }
}

impl<T: fmt::Display> fmt::Display for ValueProxyMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(f, self.grid, |cell, f| write!(f, "{}", cell.value()))
    }
}

impl<T> fmt::Debug for ValueProxy<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        summary(f, "ValueProxy", self.grid)
    }
}

impl<T> fmt::Debug for ValueProxyMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        summary(f, "ValueProxyMut", self.grid)
    }
}
