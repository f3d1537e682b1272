//! Resolution of index expressions into concrete cell positions

use crate::error::{Error, Result};
use crate::label::LabelIndex;
use crate::layout::Alignment;
use crate::position::{Position, ProductIter};

use super::{Index, Key, Single, Slice, Target};

/// Shape of a resolved selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dims {
    /// Exactly one cell addressed by two bare keys
    Scalar,
    /// An ordered sequence of cells
    Flat(usize),
    /// A rows × cols block (both keys were bulk)
    Rect(usize, usize),
}

impl Dims {
    /// Number of cells
    pub fn len(&self) -> usize {
        match *self {
            Dims::Scalar => 1,
            Dims::Flat(n) => n,
            Dims::Rect(rows, cols) => rows * cols,
        }
    }

    /// Whether no cell is selected
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Resolved selection: positions in row-major order, shape and alignment
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    /// Selected cells; may contain duplicates
    pub positions: Vec<Position>,
    /// Shape of the selection
    pub dims: Dims,
    /// Alignment hint carried from the index
    pub alignment: Option<Alignment>,
}

impl Selection {
    /// Whether the selection addresses a single cell through two bare keys
    pub fn is_scalar(&self) -> bool {
        self.dims == Dims::Scalar
    }

    /// Number of selected cells, duplicates included
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether no cell is selected
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Resolve `index` against the row and column label indexes of a grid
///
/// # Errors
///
/// - [`Error::UnknownLabel`] / [`Error::IndexOutOfBounds`] for keys that do not resolve
/// - [`Error::MaskShape`] for a 2D mask that does not match the grid
/// - [`Error::MaskLength`] for a 1D mask that does not match its dimension
/// - [`Error::ZeroStep`] for a slice with a step of zero
pub fn resolve(index: &Index, rows: &LabelIndex, cols: &LabelIndex) -> Result<Selection> {
    let (positions, dims) = match &index.target {
        Target::Rows(key) => product(key, &Key::All, rows, cols)?,
        Target::Cells(row_key, col_key) => product(row_key, col_key, rows, cols)?,
        Target::Mask(mask) => {
            let expected = (rows.len(), cols.len());
            if mask.shape() != expected {
                return Err(Error::MaskShape {
                    expected,
                    actual: mask.shape(),
                });
            }
            let positions: Vec<_> = mask.positions().collect();
            let dims = Dims::Flat(positions.len());
            (positions, dims)
        }
        Target::Pairs(pairs) => {
            let positions = pairs
                .iter()
                .map(|(row, col)| Ok(Position::new(rows.resolve(row)?, cols.resolve(col)?)))
                .collect::<Result<Vec<_>>>()?;
            let dims = Dims::Flat(positions.len());
            (positions, dims)
        }
    };

    log::trace!(
        "resolved {:?} to {} cell(s) with dims {:?}",
        index.target,
        positions.len(),
        dims
    );

    Ok(Selection {
        positions,
        dims,
        alignment: index.alignment,
    })
}

fn product(
    row_key: &Key,
    col_key: &Key,
    rows: &LabelIndex,
    cols: &LabelIndex,
) -> Result<(Vec<Position>, Dims)> {
    let row_positions = resolve_key(row_key, rows)?;
    let col_positions = resolve_key(col_key, cols)?;

    let dims = match (row_key.is_single(), col_key.is_single()) {
        (true, true) => Dims::Scalar,
        (false, false) => Dims::Rect(row_positions.len(), col_positions.len()),
        (true, false) => Dims::Flat(col_positions.len()),
        (false, true) => Dims::Flat(row_positions.len()),
    };

    let positions = ProductIter::new(&row_positions, &col_positions).collect();
    Ok((positions, dims))
}

/// Resolve one dimension's key to positions, in selection order
pub(crate) fn resolve_key(key: &Key, labels: &LabelIndex) -> Result<Vec<usize>> {
    match key {
        Key::All => Ok((0..labels.len()).collect()),
        Key::One(single) => Ok(vec![labels.resolve(single)?]),
        Key::Slice(slice) => slice_positions(slice, labels),
        Key::List(list) => list.iter().map(|single| labels.resolve(single)).collect(),
        Key::Mask(bits) => {
            if bits.len() != labels.len() {
                return Err(Error::MaskLength {
                    axis: labels.axis(),
                    expected: labels.len(),
                    actual: bits.len(),
                });
            }
            Ok(bits
                .iter()
                .enumerate()
                .filter_map(|(pos, &selected)| selected.then_some(pos))
                .collect())
        }
    }
}

fn slice_positions(slice: &Slice, labels: &LabelIndex) -> Result<Vec<usize>> {
    let step = slice.step.unwrap_or(1);
    if step == 0 {
        return Err(Error::ZeroStep);
    }

    let len = labels.len() as isize;
    let (lower, upper) = if step > 0 { (0, len) } else { (-1, len - 1) };

    let clamp = |bound: &Option<Single>, default: isize| -> Result<isize> {
        let Some(bound) = bound else {
            return Ok(default);
        };
        let index = labels.resolve_bound(bound)?;
        Ok(if index < 0 {
            (index + len).max(lower)
        } else {
            index.min(upper)
        })
    };

    let start = clamp(&slice.start, if step > 0 { lower } else { upper })?;
    let stop = clamp(&slice.stop, if step > 0 { upper } else { lower })?;

    let mut positions = Vec::new();
    let mut i = start;
    while (step > 0 && i < stop) || (step < 0 && i > stop) {
        positions.push(i as usize);
        match i.checked_add(step) {
            Some(next) => i = next,
            None => break,
        }
    }
    Ok(positions)
}
