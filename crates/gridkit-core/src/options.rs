//! Grid construction options

use crate::error::{Error, Result};
use crate::label::Axis;
use crate::layout::Spacing;

/// Default inset of objects from their cell edges
pub const DEFAULT_MARGIN: f64 = 0.1;

/// Default gap between neighbouring cells
pub const DEFAULT_BUFF: f64 = 0.0;

/// Options for building a [`Grid`](crate::Grid)
///
/// Geometry is validated here and forwarded to the layout, never interpreted.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridOptions {
    /// Height of every row; its length is the row count
    pub row_heights: Vec<f64>,
    /// Width of every column; its length is the column count
    pub col_widths: Vec<f64>,
    /// Gap between cells (default: 0.0)
    pub buff: Spacing,
    /// Inset of objects from the aligned cell edge (default: 0.1)
    pub margin: Spacing,
    /// Row labels (default: "1", "2", ...)
    pub row_labels: Option<Vec<String>>,
    /// Column labels (default: "1", "2", ...)
    pub col_labels: Option<Vec<String>>,
}

impl GridOptions {
    /// Options for a grid with the given row heights and column widths
    pub fn new(row_heights: Vec<f64>, col_widths: Vec<f64>) -> Self {
        Self {
            row_heights,
            col_widths,
            buff: Spacing::uniform(DEFAULT_BUFF),
            margin: Spacing::uniform(DEFAULT_MARGIN),
            row_labels: None,
            col_labels: None,
        }
    }

    /// Set the gap between cells
    pub fn buff<S: Into<Spacing>>(mut self, buff: S) -> Self {
        self.buff = buff.into();
        self
    }

    /// Set the inset of objects inside their cells
    pub fn margin<S: Into<Spacing>>(mut self, margin: S) -> Self {
        self.margin = margin.into();
        self
    }

    /// Name the rows
    pub fn row_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.row_labels = Some(labels.into_iter().map(Into::into).collect());
        self
    }

    /// Name the columns
    pub fn col_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.col_labels = Some(labels.into_iter().map(Into::into).collect());
        self
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.row_heights.len()
    }

    /// Number of columns
    pub fn col_count(&self) -> usize {
        self.col_widths.len()
    }

    /// Check sizes and spacings
    ///
    /// Labels are checked when the label indexes are built.
    pub fn validate(&self) -> Result<()> {
        validate_sizes(Axis::Row, &self.row_heights)?;
        validate_sizes(Axis::Column, &self.col_widths)?;
        self.buff.validate("buff")?;
        self.margin.validate("margin")?;
        Ok(())
    }
}

fn validate_sizes(axis: Axis, sizes: &[f64]) -> Result<()> {
    if sizes.is_empty() {
        return Err(Error::EmptyDimension(axis));
    }
    match sizes
        .iter()
        .position(|&size| !(size.is_finite() && size > 0.0))
    {
        Some(position) => Err(Error::InvalidSize {
            axis,
            position,
            size: sizes[position],
        }),
        None => Ok(()),
    }
}
