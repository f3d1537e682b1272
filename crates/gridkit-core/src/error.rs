//! Error types for gridkit-core

use thiserror::Error;

use crate::label::Axis;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in gridkit-core
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// String label not present in the dimension's label index
    #[error("{axis} label {label:?} not defined")]
    UnknownLabel { axis: Axis, label: String },

    /// Numeric index outside `[-len, len)`
    #[error("{axis} index {index} out of bounds for size {len}")]
    IndexOutOfBounds { axis: Axis, index: isize, len: usize },

    /// Boolean mask whose shape does not match the addressed grid or dimension
    #[error("Mask of shape {actual:?} does not match expected shape {expected:?}")]
    MaskShape {
        expected: (usize, usize),
        actual: (usize, usize),
    },

    /// One-dimensional boolean mask whose length differs from the dimension size
    #[error("{axis} mask of length {actual} does not match dimension size {expected}")]
    MaskLength {
        axis: Axis,
        expected: usize,
        actual: usize,
    },

    /// Explicit labels whose count differs from the dimension size
    #[error(
        "The number of {} labels should match the number of {}s ({actual} != {expected})",
        .axis.name(),
        .axis.name()
    )]
    LabelCount {
        axis: Axis,
        expected: usize,
        actual: usize,
    },

    /// The same label given twice for one dimension
    #[error("{axis} label {label:?} is not unique")]
    DuplicateLabel { axis: Axis, label: String },

    /// A grid dimension with no rows or columns
    #[error("A grid needs at least one {}", .0.name())]
    EmptyDimension(Axis),

    /// Row height or column width that is not a positive finite number
    #[error("{axis} size at position {position} must be positive, got {size}")]
    InvalidSize {
        axis: Axis,
        position: usize,
        size: f64,
    },

    /// Buffer or margin component that is negative or not finite
    #[error("Grid {name} should be non-negative, got ({horizontal}, {vertical})")]
    InvalidSpacing {
        name: &'static str,
        horizontal: f64,
        vertical: f64,
    },

    /// Bulk assignment with a number of values different from the selected cells
    #[error("Length mismatch between the selected cells ({cells}) and the provided values ({values})")]
    LengthMismatch { cells: usize, values: usize },

    /// Several values assigned to a single cell
    #[error("Only a single value can be assigned to a single cell, got {0}")]
    ScalarAssignment(usize),

    /// Slice with a step of zero
    #[error("Slice step cannot be zero")]
    ZeroStep,
}

/// Coarse classification of [`Error`] variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A label could not be found
    Lookup,
    /// A position or mask falls outside the grid
    Index,
    /// An argument has the wrong value, length, or arity
    Value,
}

impl Error {
    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::UnknownLabel { .. } => ErrorKind::Lookup,
            Error::IndexOutOfBounds { .. } | Error::MaskShape { .. } | Error::MaskLength { .. } => {
                ErrorKind::Index
            }
            Error::LabelCount { .. }
            | Error::DuplicateLabel { .. }
            | Error::EmptyDimension(_)
            | Error::InvalidSize { .. }
            | Error::InvalidSpacing { .. }
            | Error::LengthMismatch { .. }
            | Error::ScalarAssignment(_)
            | Error::ZeroStep => ErrorKind::Value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        let err = Error::UnknownLabel {
            axis: Axis::Row,
            label: "Z".into(),
        };
        assert_eq!(err.kind(), ErrorKind::Lookup);
        assert_eq!(err.to_string(), "Row label \"Z\" not defined");

        let err = Error::IndexOutOfBounds {
            axis: Axis::Column,
            index: 3,
            len: 3,
        };
        assert_eq!(err.kind(), ErrorKind::Index);
        assert_eq!(err.to_string(), "Column index 3 out of bounds for size 3");

        assert_eq!(Error::ZeroStep.kind(), ErrorKind::Value);
        assert_eq!(
            Error::LengthMismatch { cells: 3, values: 1 }.to_string(),
            "Length mismatch between the selected cells (3) and the provided values (1)"
        );
    }

    #[test]
    fn test_label_count_message() {
        let err = Error::LabelCount {
            axis: Axis::Row,
            expected: 3,
            actual: 2,
        };
        assert_eq!(
            err.to_string(),
            "The number of row labels should match the number of rows (2 != 3)"
        );
    }
}
