//! Cell positions

use std::fmt;

/// Zero-based (row, column) position of a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Row index (0-based)
    pub row: usize,
    /// Column index (0-based)
    pub col: usize,
}

impl Position {
    /// Create a new position
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Row-major offset of this position in a grid with `cols` columns
    pub fn offset(&self, cols: usize) -> usize {
        self.row * cols + self.col
    }

    /// Inverse of [`Position::offset`]
    pub fn from_offset(offset: usize, cols: usize) -> Self {
        Self {
            row: offset / cols,
            col: offset % cols,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

/// Iterator over the Cartesian product of row and column positions
///
/// Rows vary slowest. Positions may repeat if the inputs contain duplicates.
pub struct ProductIter<'a> {
    rows: &'a [usize],
    cols: &'a [usize],
    current_row: usize,
    current_col: usize,
}

impl<'a> ProductIter<'a> {
    /// Iterate over `rows × cols`
    pub fn new(rows: &'a [usize], cols: &'a [usize]) -> Self {
        Self {
            rows,
            cols,
            current_row: 0,
            current_col: 0,
        }
    }

    fn remaining(&self) -> usize {
        if self.cols.is_empty() || self.current_row >= self.rows.len() {
            return 0;
        }
        (self.rows.len() - self.current_row) * self.cols.len() - self.current_col
    }
}

impl Iterator for ProductIter<'_> {
    type Item = Position;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cols.is_empty() || self.current_row >= self.rows.len() {
            return None;
        }

        let pos = Position::new(self.rows[self.current_row], self.cols[self.current_col]);

        // Move to next cell
        self.current_col += 1;
        if self.current_col >= self.cols.len() {
            self.current_col = 0;
            self.current_row += 1;
        }

        Some(pos)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ProductIter<'_> {}
