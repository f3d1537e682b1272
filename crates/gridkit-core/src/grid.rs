//! The grid container

use std::fmt;

use crate::cell::{Cell, Handle};
use crate::error::Result;
use crate::index::{self, Index, Selection};
use crate::label::{Axis, LabelIndex};
use crate::layout::{Alignment, Layout, NoLayout, Placement};
use crate::options::GridOptions;
use crate::position::Position;
use crate::proxy::{HistoryProxy, TagsProxy, TagsView, ValueProxy, ValueProxyMut};

/// A fixed rows × cols arrangement of cells
///
/// The grid only stores cells and labels. Reading and writing by index goes
/// through the proxies:
///
/// - [`Grid::mobs`] / [`Grid::mobs_mut`]: current objects
/// - [`Grid::olds`]: previously held objects (read-only)
/// - [`Grid::tags`] / [`Grid::tags_mut`]: per-cell metadata
pub struct Grid<T> {
    /// Row-major storage
    cells: Vec<Cell<T>>,
    rows: LabelIndex,
    cols: LabelIndex,
    options: GridOptions,
    layout: Box<dyn Layout<T>>,
}

impl<T> Grid<T> {
    /// Create a grid whose writes are not positioned by any layout
    ///
    /// # Errors
    ///
    /// Returns an error if the sizes, spacings or labels in `options` are invalid.
    pub fn new(options: GridOptions) -> Result<Self> {
        Self::with_layout(options, NoLayout)
    }

    /// Create a grid that hands every written object to `layout`
    pub fn with_layout<L: Layout<T> + 'static>(options: GridOptions, layout: L) -> Result<Self> {
        options.validate()?;
        let rows = LabelIndex::new(Axis::Row, options.row_count(), options.row_labels.clone())?;
        let cols = LabelIndex::new(
            Axis::Column,
            options.col_count(),
            options.col_labels.clone(),
        )?;

        let cells = (0..rows.len() * cols.len()).map(|_| Cell::new()).collect();
        log::debug!("created {}x{} grid", rows.len(), cols.len());

        Ok(Self {
            cells,
            rows,
            cols,
            options,
            layout: Box::new(layout),
        })
    }

    /// Replace the layout collaborator
    pub fn set_layout<L: Layout<T> + 'static>(&mut self, layout: L) {
        self.layout = Box::new(layout);
    }

    /// `(rows, cols)`
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.cols.len())
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns
    pub fn col_count(&self) -> usize {
        self.cols.len()
    }

    /// Cell at a zero-based position
    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell<T>> {
        if row < self.rows.len() && col < self.cols.len() {
            self.cells.get(Position::new(row, col).offset(self.cols.len()))
        } else {
            None
        }
    }

    /// Iterate over all cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (Position, &Cell<T>)> + '_ {
        let cols = self.cols.len();
        self.cells
            .iter()
            .enumerate()
            .map(move |(offset, cell)| (Position::from_offset(offset, cols), cell))
    }

    /// Row label index
    pub fn row_labels(&self) -> &LabelIndex {
        &self.rows
    }

    /// Column label index
    pub fn col_labels(&self) -> &LabelIndex {
        &self.cols
    }

    /// Options the grid was built with
    pub fn options(&self) -> &GridOptions {
        &self.options
    }

    /// Resolve an index expression against this grid's labels
    pub fn select<I: Into<Index>>(&self, index: I) -> Result<Selection> {
        index::resolve(&index.into(), &self.rows, &self.cols)
    }

    /// Read-only view of the current objects
    pub fn mobs(&self) -> ValueProxy<'_, T> {
        ValueProxy::new(self)
    }

    /// Read-write view of the current objects
    pub fn mobs_mut(&mut self) -> ValueProxyMut<'_, T> {
        ValueProxyMut::new(self)
    }

    /// Read-only view of the previously held objects
    pub fn olds(&self) -> HistoryProxy<'_, T> {
        HistoryProxy::new(self)
    }

    /// Read-only view of the per-cell tags
    pub fn tags(&self) -> TagsView<'_, T> {
        TagsView::new(self)
    }

    /// Read-write view of the per-cell tags
    pub fn tags_mut(&mut self) -> TagsProxy<'_, T> {
        TagsProxy::new(self)
    }

    pub(crate) fn cell_slice(&self) -> &[Cell<T>] {
        &self.cells
    }

    pub(crate) fn cell_slice_mut(&mut self) -> &mut [Cell<T>] {
        &mut self.cells
    }

    pub(crate) fn offset(&self, pos: Position) -> usize {
        pos.offset(self.cols.len())
    }

    /// Hand a freshly written object to the layout
    pub(crate) fn place(&mut self, object: &Handle<T>, position: Position, alignment: Alignment) {
        let placement = Placement {
            position,
            row_height: self.options.row_heights[position.row],
            col_width: self.options.col_widths[position.col],
            alignment,
            margin: self.options.margin,
        };
        self.layout.place(object, &placement);
    }
}

impl<T> fmt::Debug for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grid")
            .field("shape", &self.shape())
            .field("row_labels", &self.rows.labels())
            .field("col_labels", &self.cols.labels())
            .finish()
    }
}
