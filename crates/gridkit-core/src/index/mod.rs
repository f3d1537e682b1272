//! Index expressions
//!
//! An [`Index`] describes which cells a proxy operation targets. It is built from
//! ordinary Rust values through `From` conversions:
//!
//! | Expression                   | Meaning                                  |
//! |------------------------------|------------------------------------------|
//! | `0`, `-1`, `"top"`           | one row, every column                    |
//! | `(0, 2)`, `("1", "3")`       | one cell (scalar selection)              |
//! | `(1.., ..)`, `(.., 0..2)`    | strided slices, bounds clamped           |
//! | `("1".."3", ..)`             | label slice, stop exclusive              |
//! | `(vec![0, 0, 1], 2)`         | listed rows in order, duplicates kept    |
//! | `(Key::mask(bits), ..)`      | rows where `bits` is true                |
//! | `mask`                       | every cell selected by a 2D [`Mask`]     |
//! | `Index::pairs(...)`          | listed (row, col) coordinates            |
//! | `(0, 1, Alignment::UP)`      | any of the above plus an alignment hint  |
//!
//! Combining a 2D mask with per-dimension keys cannot be expressed.

mod resolve;

use std::ops::{Range, RangeFrom, RangeFull, RangeInclusive, RangeTo, RangeToInclusive};

use crate::layout::Alignment;
use crate::mask::Mask;

pub use resolve::{resolve, Dims, Selection};

/// A single row or column: a (possibly negative) position or a label
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Single {
    /// Position; negative values count from the end
    Pos(isize),
    /// Label
    Label(String),
}

/// A strided, half-open slice over one dimension
///
/// Label bounds are looked up first; integer bounds follow the usual rules
/// (negative values count from the end and out-of-range values are clamped).
/// The stop bound is exclusive for labels too.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Slice {
    /// First position (inclusive)
    pub start: Option<Single>,
    /// Last position (exclusive)
    pub stop: Option<Single>,
    /// Stride; `None` means 1
    pub step: Option<isize>,
}

impl Slice {
    /// The whole dimension
    pub fn all() -> Self {
        Self::default()
    }

    /// Positions from `start` up to, not including, `stop`
    pub fn new<A: Into<Single>, B: Into<Single>>(start: A, stop: B) -> Self {
        Self {
            start: Some(start.into()),
            stop: Some(stop.into()),
            step: None,
        }
    }

    /// Positions from `start` to the end
    pub fn starting_at<A: Into<Single>>(start: A) -> Self {
        Self {
            start: Some(start.into()),
            ..Self::default()
        }
    }

    /// Positions from the beginning up to, not including, `stop`
    pub fn until<B: Into<Single>>(stop: B) -> Self {
        Self {
            stop: Some(stop.into()),
            ..Self::default()
        }
    }

    /// Set the stride
    pub fn step(mut self, step: isize) -> Self {
        self.step = Some(step);
        self
    }
}

/// Selection along one dimension
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    /// Every position (`:` / `..`)
    All,
    /// One position or label
    One(Single),
    /// A slice
    Slice(Slice),
    /// Listed positions or labels, in order, duplicates allowed
    List(Vec<Single>),
    /// A boolean mask sized to the dimension
    Mask(Vec<bool>),
}

impl Key {
    /// A one-dimensional boolean mask
    pub fn mask<I: IntoIterator<Item = bool>>(bits: I) -> Self {
        Key::Mask(bits.into_iter().collect())
    }

    /// A list of positions or labels
    pub fn list<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Single>,
    {
        Key::List(keys.into_iter().map(Into::into).collect())
    }

    /// Whether this key addresses exactly one position by itself
    pub fn is_single(&self) -> bool {
        matches!(self, Key::One(_))
    }
}

/// What an index addresses, before resolution
#[derive(Debug, Clone, PartialEq)]
pub enum Target {
    /// Rows only; every column
    Rows(Key),
    /// Rows and columns, combined as a Cartesian product
    Cells(Key, Key),
    /// Cells selected by a grid-shaped mask
    Mask(Mask),
    /// Explicit (row, col) coordinates
    Pairs(Vec<(Single, Single)>),
}

/// A complete index expression: a target plus an optional alignment hint
#[derive(Debug, Clone, PartialEq)]
pub struct Index {
    /// Cells addressed
    pub target: Target,
    /// Alignment forwarded to the layout on value writes
    pub alignment: Option<Alignment>,
}

impl Index {
    /// Index a target without alignment
    pub fn new(target: Target) -> Self {
        Self {
            target,
            alignment: None,
        }
    }

    /// Every cell of the grid
    pub fn all() -> Self {
        Self::new(Target::Rows(Key::All))
    }

    /// Explicit (row, col) coordinates, visited in the given order
    pub fn pairs<I, A, B>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (A, B)>,
        A: Into<Single>,
        B: Into<Single>,
    {
        Self::new(Target::Pairs(
            pairs
                .into_iter()
                .map(|(row, col)| (row.into(), col.into()))
                .collect(),
        ))
    }

    /// Attach an alignment hint
    pub fn aligned(mut self, alignment: Alignment) -> Self {
        self.alignment = Some(alignment);
        self
    }
}

// === Conversions ===

macro_rules! single_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Single {
                fn from(n: $t) -> Self {
                    // past isize::MAX is out of bounds for every grid
                    Single::Pos(isize::try_from(n).unwrap_or(isize::MAX))
                }
            }
        )*
    };
}

single_from_int!(i32, isize, usize);

impl From<&str> for Single {
    fn from(label: &str) -> Self {
        Single::Label(label.to_string())
    }
}

impl From<String> for Single {
    fn from(label: String) -> Self {
        Single::Label(label)
    }
}

impl From<&String> for Single {
    fn from(label: &String) -> Self {
        Single::Label(label.clone())
    }
}

macro_rules! slice_from_ranges {
    ($($t:ty),*) => {
        $(
            impl From<Range<$t>> for Slice {
                fn from(r: Range<$t>) -> Self {
                    Slice::new(r.start, r.end)
                }
            }

            impl From<RangeFrom<$t>> for Slice {
                fn from(r: RangeFrom<$t>) -> Self {
                    Slice::starting_at(r.start)
                }
            }

            impl From<RangeTo<$t>> for Slice {
                fn from(r: RangeTo<$t>) -> Self {
                    Slice::until(r.end)
                }
            }

            impl From<RangeInclusive<$t>> for Slice {
                fn from(r: RangeInclusive<$t>) -> Self {
                    let (start, end) = r.into_inner();
                    Slice {
                        start: Some(start.into()),
                        stop: inclusive_stop(end.into()),
                        step: None,
                    }
                }
            }

            impl From<RangeToInclusive<$t>> for Slice {
                fn from(r: RangeToInclusive<$t>) -> Self {
                    Slice {
                        stop: inclusive_stop(r.end.into()),
                        ..Slice::default()
                    }
                }
            }

            impl From<Range<$t>> for Key {
                fn from(r: Range<$t>) -> Self {
                    Key::Slice(r.into())
                }
            }

            impl From<RangeFrom<$t>> for Key {
                fn from(r: RangeFrom<$t>) -> Self {
                    Key::Slice(r.into())
                }
            }

            impl From<RangeTo<$t>> for Key {
                fn from(r: RangeTo<$t>) -> Self {
                    Key::Slice(r.into())
                }
            }

            impl From<RangeInclusive<$t>> for Key {
                fn from(r: RangeInclusive<$t>) -> Self {
                    Key::Slice(r.into())
                }
            }

            impl From<RangeToInclusive<$t>> for Key {
                fn from(r: RangeToInclusive<$t>) -> Self {
                    Key::Slice(r.into())
                }
            }

            impl From<$t> for Key {
                fn from(n: $t) -> Self {
                    Key::One(n.into())
                }
            }

            impl From<Vec<$t>> for Key {
                fn from(list: Vec<$t>) -> Self {
                    Key::list(list)
                }
            }

            impl<const N: usize> From<[$t; N]> for Key {
                fn from(list: [$t; N]) -> Self {
                    Key::list(list)
                }
            }
        )*
    };
}

slice_from_ranges!(i32, isize, usize);

/// Exclusive stop for an inclusive end; `-1` (the last position) and
/// `isize::MAX` have no exclusive counterpart other than "up to the end"
fn inclusive_stop(end: Single) -> Option<Single> {
    match end {
        Single::Pos(-1) => None,
        Single::Pos(end) => end.checked_add(1).map(Single::Pos),
        label => Some(label),
    }
}

impl<'a> From<Range<&'a str>> for Slice {
    fn from(r: Range<&'a str>) -> Self {
        Slice::new(r.start, r.end)
    }
}

impl<'a> From<RangeFrom<&'a str>> for Slice {
    fn from(r: RangeFrom<&'a str>) -> Self {
        Slice::starting_at(r.start)
    }
}

impl<'a> From<RangeTo<&'a str>> for Slice {
    fn from(r: RangeTo<&'a str>) -> Self {
        Slice::until(r.end)
    }
}

impl<'a> From<Range<&'a str>> for Key {
    fn from(r: Range<&'a str>) -> Self {
        Key::Slice(r.into())
    }
}

impl<'a> From<RangeFrom<&'a str>> for Key {
    fn from(r: RangeFrom<&'a str>) -> Self {
        Key::Slice(r.into())
    }
}

impl<'a> From<RangeTo<&'a str>> for Key {
    fn from(r: RangeTo<&'a str>) -> Self {
        Key::Slice(r.into())
    }
}

impl From<RangeFull> for Key {
    fn from(_: RangeFull) -> Self {
        Key::All
    }
}

impl From<Single> for Key {
    fn from(single: Single) -> Self {
        Key::One(single)
    }
}

impl From<Slice> for Key {
    fn from(slice: Slice) -> Self {
        Key::Slice(slice)
    }
}

impl From<&str> for Key {
    fn from(label: &str) -> Self {
        Key::One(label.into())
    }
}

impl From<String> for Key {
    fn from(label: String) -> Self {
        Key::One(label.into())
    }
}

impl From<Vec<Single>> for Key {
    fn from(list: Vec<Single>) -> Self {
        Key::List(list)
    }
}

impl From<Vec<&str>> for Key {
    fn from(list: Vec<&str>) -> Self {
        Key::list(list)
    }
}

impl From<Vec<String>> for Key {
    fn from(list: Vec<String>) -> Self {
        Key::list(list)
    }
}

impl<const N: usize> From<[&str; N]> for Key {
    fn from(list: [&str; N]) -> Self {
        Key::list(list)
    }
}

/// A bare key indexes rows and keeps every column
macro_rules! index_from_key {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Index {
                fn from(key: $t) -> Self {
                    Index::new(Target::Rows(key.into()))
                }
            }
        )*
    };
}

index_from_key!(
    Key,
    Single,
    Slice,
    RangeFull,
    i32,
    isize,
    usize,
    &str,
    String,
    Range<i32>,
    Range<isize>,
    Range<usize>,
    RangeFrom<i32>,
    RangeFrom<isize>,
    RangeFrom<usize>,
    RangeTo<i32>,
    RangeTo<isize>,
    RangeTo<usize>,
    RangeInclusive<i32>,
    RangeInclusive<isize>,
    RangeInclusive<usize>,
    Range<&str>,
    Vec<i32>,
    Vec<usize>,
    Vec<&str>
);

impl<A: Into<Key>, B: Into<Key>> From<(A, B)> for Index {
    fn from((rows, cols): (A, B)) -> Self {
        Index::new(Target::Cells(rows.into(), cols.into()))
    }
}

impl<A: Into<Key>, B: Into<Key>> From<(A, B, Alignment)> for Index {
    fn from((rows, cols, alignment): (A, B, Alignment)) -> Self {
        Index::new(Target::Cells(rows.into(), cols.into())).aligned(alignment)
    }
}

impl<A: Into<Single>, B: Into<Single>> From<Vec<(A, B)>> for Index {
    fn from(pairs: Vec<(A, B)>) -> Self {
        Index::pairs(pairs)
    }
}

impl From<Mask> for Index {
    fn from(mask: Mask) -> Self {
        Index::new(Target::Mask(mask))
    }
}

impl From<&Mask> for Index {
    fn from(mask: &Mask) -> Self {
        Index::new(Target::Mask(mask.clone()))
    }
}

impl From<Target> for Index {
    fn from(target: Target) -> Self {
        Index::new(target)
    }
}

impl From<&Index> for Index {
    fn from(index: &Index) -> Self {
        index.clone()
    }
}
