//! Interface to the layout collaborator
//!
//! The grid never computes geometry. When an object is written through
//! [`ValueProxyMut`](crate::proxy::ValueProxyMut), the grid hands it to a
//! [`Layout`] together with a [`Placement`] describing the target cell, and the
//! layout decides where the object ends up on screen.

use std::fmt;

use crate::cell::Handle;
use crate::error::{Error, Result};
use crate::position::Position;

/// Direction hint for positioning an object inside its cell
///
/// Components are in `[-1, 1]`: `x` points right, `y` points up.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Alignment {
    /// Horizontal component
    pub x: f64,
    /// Vertical component
    pub y: f64,
}

impl Alignment {
    /// Centered in the cell
    pub const CENTER: Alignment = Alignment::new(0.0, 0.0);
    /// Against the top edge
    pub const UP: Alignment = Alignment::new(0.0, 1.0);
    /// Against the bottom edge
    pub const DOWN: Alignment = Alignment::new(0.0, -1.0);
    /// Against the left edge
    pub const LEFT: Alignment = Alignment::new(-1.0, 0.0);
    /// Against the right edge
    pub const RIGHT: Alignment = Alignment::new(1.0, 0.0);
    /// Top-left corner
    pub const UP_LEFT: Alignment = Alignment::new(-1.0, 1.0);
    /// Top-right corner
    pub const UP_RIGHT: Alignment = Alignment::new(1.0, 1.0);
    /// Bottom-left corner
    pub const DOWN_LEFT: Alignment = Alignment::new(-1.0, -1.0);
    /// Bottom-right corner
    pub const DOWN_RIGHT: Alignment = Alignment::new(1.0, -1.0);

    /// Create an alignment vector
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Default for Alignment {
    fn default() -> Self {
        Alignment::CENTER
    }
}

impl From<(f64, f64)> for Alignment {
    fn from((x, y): (f64, f64)) -> Self {
        Alignment::new(x, y)
    }
}

/// Horizontal and vertical spacing, used for the grid buffer and cell margin
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Spacing {
    /// Spacing along the x axis
    pub horizontal: f64,
    /// Spacing along the y axis
    pub vertical: f64,
}

impl Spacing {
    /// Create a spacing
    pub const fn new(horizontal: f64, vertical: f64) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    /// Same spacing on both axes
    pub const fn uniform(value: f64) -> Self {
        Self::new(value, value)
    }

    /// Check both components are finite and non-negative
    pub(crate) fn validate(&self, name: &'static str) -> Result<()> {
        let ok = |v: f64| v.is_finite() && v >= 0.0;
        if ok(self.horizontal) && ok(self.vertical) {
            Ok(())
        } else {
            Err(Error::InvalidSpacing {
                name,
                horizontal: self.horizontal,
                vertical: self.vertical,
            })
        }
    }
}

impl From<f64> for Spacing {
    fn from(value: f64) -> Self {
        Spacing::uniform(value)
    }
}

impl From<(f64, f64)> for Spacing {
    fn from((horizontal, vertical): (f64, f64)) -> Self {
        Spacing::new(horizontal, vertical)
    }
}

/// Everything the layout needs to position one object in one cell
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    /// Target cell
    pub position: Position,
    /// Height of the target row
    pub row_height: f64,
    /// Width of the target column
    pub col_width: f64,
    /// Where in the cell the object should sit
    pub alignment: Alignment,
    /// Inset from the aligned edge
    pub margin: Spacing,
}

/// External layout collaborator
pub trait Layout<T> {
    /// Position `object` according to `placement`
    fn place(&mut self, object: &Handle<T>, placement: &Placement);
}

/// Layout that leaves objects where they are
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLayout;

impl<T> Layout<T> for NoLayout {
    fn place(&mut self, _object: &Handle<T>, _placement: &Placement) {}
}

impl<T, F> Layout<T> for F
where
    F: FnMut(&Handle<T>, &Placement),
{
    fn place(&mut self, object: &Handle<T>, placement: &Placement) {
        self(object, placement)
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
