//! Row and column labels
//!
//! Every grid dimension carries a [`LabelIndex`]: an ordered list of unique string
//! labels, one per position. Labels default to the 1-based position (`"1"`, `"2"`, ...)
//! so that `grid.mobs().get(("1", "1"))` and `grid.mobs().get((0, 0))` address the
//! same cell.

use std::fmt;

use ahash::AHashMap;

use crate::error::{Error, Result};
use crate::index::Single;

/// A grid dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Rows (first index component)
    Row,
    /// Columns (second index component)
    Column,
}

impl Axis {
    /// Lowercase name used in messages
    pub fn name(&self) -> &'static str {
        match self {
            Axis::Row => "row",
            Axis::Column => "column",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Row => f.write_str("Row"),
            Axis::Column => f.write_str("Column"),
        }
    }
}

/// Bidirectional mapping between positions and labels of one dimension
#[derive(Debug, Clone)]
pub struct LabelIndex {
    axis: Axis,
    /// Labels in position order
    labels: Vec<String>,
    /// Fast label -> position lookup
    lookup: AHashMap<String, usize>,
}

impl LabelIndex {
    /// Create a label index for a dimension of `len` positions
    ///
    /// When `labels` is `None`, the labels `"1"..="len"` are generated.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyDimension`] if `len` is zero
    /// - [`Error::LabelCount`] if explicit labels do not number exactly `len`
    /// - [`Error::DuplicateLabel`] if a label appears twice
    pub fn new(axis: Axis, len: usize, labels: Option<Vec<String>>) -> Result<Self> {
        if len == 0 {
            return Err(Error::EmptyDimension(axis));
        }

        let labels = match labels {
            Some(labels) => {
                if labels.len() != len {
                    return Err(Error::LabelCount {
                        axis,
                        expected: len,
                        actual: labels.len(),
                    });
                }
                labels
            }
            None => (1..=len).map(|n| n.to_string()).collect(),
        };

        let mut lookup = AHashMap::with_capacity(len);
        for (pos, label) in labels.iter().enumerate() {
            if lookup.insert(label.clone(), pos).is_some() {
                return Err(Error::DuplicateLabel {
                    axis,
                    label: label.clone(),
                });
            }
        }

        Ok(Self {
            axis,
            labels,
            lookup,
        })
    }

    /// The dimension this index describes
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Number of positions
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Always false: a dimension has at least one position
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// All labels in position order
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Label at `pos`
    pub fn label(&self, pos: usize) -> Option<&str> {
        self.labels.get(pos).map(String::as_str)
    }

    /// Position of `label`
    pub fn position(&self, label: &str) -> Option<usize> {
        self.lookup.get(label).copied()
    }

    /// Iterate over `(position, label)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> + '_ {
        self.labels.iter().map(String::as_str).enumerate()
    }

    /// Resolve a label or a (possibly negative) integer to a position
    ///
    /// # Errors
    ///
    /// - [`Error::UnknownLabel`] for a label that is not defined
    /// - [`Error::IndexOutOfBounds`] for an integer outside `[-len, len)`
    pub fn resolve(&self, key: &Single) -> Result<usize> {
        match key {
            Single::Pos(index) => self.wrap(*index),
            Single::Label(label) => self.position(label).ok_or_else(|| Error::UnknownLabel {
                axis: self.axis,
                label: label.clone(),
            }),
        }
    }

    /// Resolve a slice bound: labels must exist, integers are returned unchanged
    /// so that the slice can clamp them
    pub(crate) fn resolve_bound(&self, key: &Single) -> Result<isize> {
        match key {
            Single::Pos(index) => Ok(*index),
            Single::Label(_) => self.resolve(key).map(|pos| pos as isize),
        }
    }

    fn wrap(&self, index: isize) -> Result<usize> {
        let len = self.labels.len() as isize;
        let pos = if index < 0 { index + len } else { index };
        if (0..len).contains(&pos) {
            Ok(pos as usize)
        } else {
            Err(Error::IndexOutOfBounds {
                axis: self.axis,
                index,
                len: self.labels.len(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn abc() -> LabelIndex {
        LabelIndex::new(
            Axis::Row,
            3,
            Some(vec!["A".into(), "B".into(), "C".into()]),
        )
        .unwrap()
    }

    #[test]
    fn test_default_labels() {
        let index = LabelIndex::new(Axis::Column, 3, None).unwrap();
        assert_eq!(index.labels(), &["1", "2", "3"]);
        assert_eq!(index.position("2"), Some(1));
        assert_eq!(index.label(2), Some("3"));
        assert_eq!(index.label(3), None);
    }

    #[test]
    fn test_resolve_labels_and_integers() {
        let index = abc();
        assert_eq!(index.resolve(&Single::from("B")).unwrap(), 1);
        assert_eq!(index.resolve(&Single::Pos(2)).unwrap(), 2);
        assert_eq!(index.resolve(&Single::Pos(-1)).unwrap(), 2);
        assert_eq!(index.resolve(&Single::Pos(-3)).unwrap(), 0);
    }

    #[test]
    fn test_resolve_errors() {
        let index = abc();

        let err = index.resolve(&Single::from("UNKNOWN")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Lookup);

        let err = index.resolve(&Single::Pos(3)).unwrap_err();
        assert_eq!(
            err,
            Error::IndexOutOfBounds {
                axis: Axis::Row,
                index: 3,
                len: 3
            }
        );
        assert!(index.resolve(&Single::Pos(-4)).is_err());
    }

    #[test]
    fn test_wrong_label_count() {
        let err = LabelIndex::new(Axis::Row, 3, Some(vec!["one".into(), "two".into()]))
            .unwrap_err();
        assert_eq!(
            err,
            Error::LabelCount {
                axis: Axis::Row,
                expected: 3,
                actual: 2
            }
        );
    }

    #[test]
    fn test_duplicate_labels() {
        let err = LabelIndex::new(Axis::Column, 2, Some(vec!["x".into(), "x".into()]))
            .unwrap_err();
        assert_eq!(
            err,
            Error::DuplicateLabel {
                axis: Axis::Column,
                label: "x".into()
            }
        );
    }

    #[test]
    fn test_empty_dimension() {
        assert_eq!(
            LabelIndex::new(Axis::Row, 0, None).unwrap_err(),
            Error::EmptyDimension(Axis::Row)
        );
    }
}
