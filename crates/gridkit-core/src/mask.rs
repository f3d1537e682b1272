//! Boolean cell masks
//!
//! A [`Mask`] is a plain value with the grid's shape. It can be built by hand,
//! obtained from a proxy's `mask()` builder, combined with `&`, `|`, `^`, `!`, and
//! used as an index on any proxy:
//!
//! ```rust
//! use gridkit_core::{Grid, GridOptions, Mask};
//!
//! let grid: Grid<&str> = Grid::new(GridOptions::new(vec![1.0; 2], vec![1.0; 3])).unwrap();
//! let first_row = Mask::from_fn(2, 3, |pos| pos.row == 0);
//! let first_col = Mask::from_fn(2, 3, |pos| pos.col == 0);
//!
//! let corner = &first_row & &first_col;
//! assert_eq!(corner.count(), 1);
//! assert_eq!(grid.mobs().get(corner).unwrap().len(), 1);
//! ```

use std::fmt;
use std::ops::{BitAnd, BitOr, BitXor, Not};

use crate::cell::{AttrValue, Attributes, Cell, Content, Tags};
use crate::error::{Error, Result};
use crate::position::Position;

/// Boolean array over the grid; `true` marks a selected cell
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mask {
    rows: usize,
    cols: usize,
    /// Row-major bits
    bits: Vec<bool>,
}

impl Mask {
    /// Create a mask with every cell unselected
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            bits: vec![false; rows * cols],
        }
    }

    /// Create a mask with every cell selected
    pub fn full(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            bits: vec![true; rows * cols],
        }
    }

    /// Create a mask by evaluating `f` at every position
    pub fn from_fn<F: FnMut(Position) -> bool>(rows: usize, cols: usize, mut f: F) -> Self {
        let bits = (0..rows * cols)
            .map(|offset| f(Position::from_offset(offset, cols)))
            .collect();
        Self { rows, cols, bits }
    }

    /// Create a mask from row-major bits
    ///
    /// # Errors
    ///
    /// [`Error::MaskShape`] if `bits` does not hold exactly `rows * cols` values.
    pub fn from_vec(rows: usize, cols: usize, bits: Vec<bool>) -> Result<Self> {
        if bits.len() != rows * cols {
            return Err(Error::MaskShape {
                expected: (rows, cols),
                actual: (1, bits.len()),
            });
        }
        Ok(Self { rows, cols, bits })
    }

    /// Create a mask from nested rows
    ///
    /// # Errors
    ///
    /// [`Error::MaskShape`] if the rows are ragged.
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        let row_count = rows.len();
        let mut bits = Vec::with_capacity(row_count * cols);
        for row in rows {
            if row.len() != cols {
                return Err(Error::MaskShape {
                    expected: (row_count, cols),
                    actual: (row_count, row.len()),
                });
            }
            bits.extend(row);
        }
        Ok(Self {
            rows: row_count,
            cols,
            bits,
        })
    }

    /// `(rows, cols)`
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Whether the cell at `(row, col)` is selected; out of range is `false`
    pub fn get(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols && self.bits[row * self.cols + col]
    }

    /// Select or unselect a cell
    ///
    /// # Panics
    ///
    /// Panics if `(row, col)` is outside the mask.
    pub fn set(&mut self, row: usize, col: usize, selected: bool) {
        assert!(
            row < self.rows && col < self.cols,
            "position ({}, {}) outside mask of shape ({}, {})",
            row,
            col,
            self.rows,
            self.cols
        );
        self.bits[row * self.cols + col] = selected;
    }

    /// Number of selected cells
    pub fn count(&self) -> usize {
        self.bits.iter().filter(|b| **b).count()
    }

    /// Whether any cell is selected
    pub fn any(&self) -> bool {
        self.bits.iter().any(|b| *b)
    }

    /// Whether every cell is selected
    pub fn all(&self) -> bool {
        self.bits.iter().all(|b| *b)
    }

    /// Selected positions in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        let cols = self.cols;
        self.bits
            .iter()
            .enumerate()
            .filter(|(_, b)| **b)
            .map(move |(offset, _)| Position::from_offset(offset, cols))
    }

    /// Row-major bits
    pub fn as_slice(&self) -> &[bool] {
        &self.bits
    }

    fn zip_with(&self, other: &Mask, op: fn(bool, bool) -> bool) -> Mask {
        assert_eq!(
            self.shape(),
            other.shape(),
            "cannot combine masks of different shapes"
        );
        Mask {
            rows: self.rows,
            cols: self.cols,
            bits: self
                .bits
                .iter()
                .zip(&other.bits)
                .map(|(a, b)| op(*a, *b))
                .collect(),
        }
    }
}

macro_rules! mask_binop {
    ($trait:ident, $method:ident, $op:tt) => {
        /// # Panics
        ///
        /// Panics if the masks have different shapes.
        impl $trait for &Mask {
            type Output = Mask;

            fn $method(self, rhs: &Mask) -> Mask {
                self.zip_with(rhs, |a, b| a $op b)
            }
        }

        impl $trait for Mask {
            type Output = Mask;

            fn $method(self, rhs: Mask) -> Mask {
                (&self).$method(&rhs)
            }
        }
    };
}

mask_binop!(BitAnd, bitand, &);
mask_binop!(BitOr, bitor, |);
mask_binop!(BitXor, bitxor, ^);

impl Not for &Mask {
    type Output = Mask;

    fn not(self) -> Mask {
        Mask {
            rows: self.rows,
            cols: self.cols,
            bits: self.bits.iter().map(|b| !b).collect(),
        }
    }
}

impl Not for Mask {
    type Output = Mask;

    fn not(mut self) -> Mask {
        self.bits.iter_mut().for_each(|b| *b = !*b);
        self
    }
}

impl fmt::Display for Mask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.bits.chunks(self.cols.max(1)).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let line: String = row.iter().map(|b| if *b { '1' } else { '0' }).collect();
            f.write_str(&line)?;
        }
        Ok(())
    }
}

/// A facet whose items can be filtered by named attribute
pub trait Filterable {
    /// Value stored under `key`, if any
    fn lookup(&self, key: &str) -> Option<AttrValue>;
}

impl Filterable for Tags {
    fn lookup(&self, key: &str) -> Option<AttrValue> {
        self.get(key).cloned()
    }
}

impl<T: Attributes> Filterable for Content<T> {
    fn lookup(&self, key: &str) -> Option<AttrValue> {
        self.attribute(key)
    }
}

type Condition<'a, I> = Box<dyn Fn(&I) -> bool + 'a>;

/// Builds a [`Mask`] by testing one facet of every cell
///
/// A cell is selected when the predicate holds and every filter matches.
/// Without a predicate or filters, every cell is selected.
pub struct MaskBuilder<'a, T, I> {
    cells: &'a [Cell<T>],
    rows: usize,
    cols: usize,
    facet: fn(&Cell<T>) -> &I,
    predicate: Option<Condition<'a, I>>,
    filters: Vec<(String, AttrValue)>,
    lookup: Option<fn(&I, &str) -> Option<AttrValue>>,
}

impl<'a, T, I> MaskBuilder<'a, T, I> {
    pub(crate) fn new(
        cells: &'a [Cell<T>],
        (rows, cols): (usize, usize),
        facet: fn(&Cell<T>) -> &I,
    ) -> Self {
        Self {
            cells,
            rows,
            cols,
            facet,
            predicate: None,
            filters: Vec::new(),
            lookup: None,
        }
    }

    /// Only select cells for which `predicate` returns true
    ///
    /// A second call replaces the first predicate.
    pub fn predicate<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&I) -> bool + 'a,
    {
        self.predicate = Some(Box::new(predicate));
        self
    }

    /// Evaluate the conditions over every cell
    pub fn build(self) -> Mask {
        let bits: Vec<bool> = self
            .cells
            .iter()
            .map(|cell| {
                let item = (self.facet)(cell);
                self.predicate.as_ref().map_or(true, |p| p(item)) && self.matches(item)
            })
            .collect();

        let mask = Mask {
            rows: self.rows,
            cols: self.cols,
            bits,
        };
        log::trace!("mask selected {} of {} cells", mask.count(), self.cells.len());
        mask
    }

    fn matches(&self, item: &I) -> bool {
        match self.lookup {
            Some(lookup) => self.filters.iter().all(|(key, value)| {
                lookup(item, key).is_some_and(|found| found.matches(value))
            }),
            None => true,
        }
    }
}

impl<'a, T, I: Filterable> MaskBuilder<'a, T, I> {
    /// Only select cells whose item has `key` equal to `value`
    ///
    /// Cells lacking `key` are never selected. Integers and floats match by
    /// numeric value, so `filter("w", 1)` selects a `w` of `1.0`.
    pub fn filter<K: Into<String>, V: Into<AttrValue>>(mut self, key: K, value: V) -> Self {
        self.filters.push((key.into(), value.into()));
        self.lookup = Some(<I as Filterable>::lookup);
        self
    }
}

impl<T, I> fmt::Debug for MaskBuilder<'_, T, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MaskBuilder")
            .field("shape", &(self.rows, self.cols))
            .field("predicate", &self.predicate.is_some())
            .field("filters", &self.filters.len())
            .finish()
    }
}
