//! Common utilities for E2E tests.

use std::cell::RefCell;
use std::rc::Rc;

use gridkit::prelude::*;

/// A minimal visual object: a name and a colour
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    pub name: String,
    pub color: String,
}

impl Shape {
    pub fn handle(name: &str, color: &str) -> Handle<Shape> {
        Handle::new(Shape {
            name: name.to_string(),
            color: color.to_string(),
        })
    }
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

impl Attributes for Shape {
    fn attribute(&self, name: &str) -> Option<AttrValue> {
        match name {
            "name" => Some(self.name.as_str().into()),
            "color" => Some(self.color.as_str().into()),
            _ => None,
        }
    }
}

/// A 2×3 grid with default labels
pub fn grid_2x3() -> Grid<Shape> {
    Grid::new(GridOptions::new(vec![1.0, 1.0], vec![1.0, 2.0, 3.0])).unwrap()
}

/// A 3×3 grid with letter rows and lowercase columns
pub fn labelled_3x3() -> Grid<Shape> {
    let options = GridOptions::new(vec![1.0; 3], vec![1.0; 3])
        .row_labels(["A", "B", "C"])
        .col_labels(["x", "y", "z"]);
    Grid::new(options).unwrap()
}

/// Every placement the layout received, in order
pub type Placements = Rc<RefCell<Vec<Placement>>>;

/// Install a layout on `grid` that records every placement
pub fn record_placements(grid: &mut Grid<Shape>) -> Placements {
    let seen: Placements = Rc::default();
    let sink = Rc::clone(&seen);
    grid.set_layout(move |_: &Handle<Shape>, placement: &Placement| {
        sink.borrow_mut().push(placement.clone())
    });
    seen
}

/// Names of the objects in a read, `"-"` for empty cells
pub fn names(fetched: Fetched<Content<Shape>>) -> Vec<String> {
    fetched
        .into_iter()
        .map(|content| match content.handle() {
            Some(handle) => handle.borrow().name.clone(),
            None => "-".to_string(),
        })
        .collect()
}
