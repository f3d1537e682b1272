//! Previous objects are only changed by writes.

use crate::{grid_2x3, names, Shape};
use gridkit::prelude::*;
use pretty_assertions::assert_eq;

#[test]
fn test_history_chain() {
    let mut grid = grid_2x3();
    let (a, b, c) = (
        Shape::handle("a", "red"),
        Shape::handle("b", "red"),
        Shape::handle("c", "red"),
    );

    grid.mobs_mut().set((0, 0), &a).unwrap();
    assert!(grid.olds().get((0, 0)).unwrap().into_scalar().is_some_and(|c| c.is_empty()));

    grid.mobs_mut().set((0, 0), &b).unwrap();
    assert_eq!(names(grid.olds().get((0, 0)).unwrap()), vec!["a"]);

    grid.mobs_mut().set((0, 0), &c).unwrap();
    assert_eq!(names(grid.olds().get((0, 0)).unwrap()), vec!["b"]);
    assert_eq!(names(grid.mobs().get((0, 0)).unwrap()), vec!["c"]);
}

#[test]
fn test_bulk_history() {
    let mut grid = grid_2x3();
    let first: Vec<_> = ["a", "b", "c"].iter().map(|n| Shape::handle(n, "red")).collect();
    grid.mobs_mut().set(0, first).unwrap();
    grid.mobs_mut().set(0, Shape::handle("z", "blue")).unwrap();

    assert_eq!(names(grid.olds().get(0).unwrap()), vec!["a", "b", "c"]);
    assert_eq!(names(grid.olds().get(1).unwrap()), vec!["-", "-", "-"]);
    assert_eq!(format!("{:?}", grid.olds()), "<HistoryProxy of size (2, 3)>");
}
