//! Masks built from each facet and used as indexes on any proxy.

use crate::{grid_2x3, names, Shape};
use gridkit::prelude::*;
use pretty_assertions::assert_eq;

fn painted() -> Grid<Shape> {
    let mut grid = grid_2x3();
    let shapes = vec![
        Shape::handle("a", "red"),
        Shape::handle("b", "blue"),
        Shape::handle("c", "red"),
    ];
    grid.mobs_mut().set(0, shapes).unwrap();
    grid
}

#[test]
fn test_filter_by_object_attribute() {
    let grid = painted();
    let red = grid.mobs().mask().filter("color", "red").build();
    assert_eq!(red.to_string(), "101\n000");
    assert_eq!(names(grid.mobs().get(&red).unwrap()), vec!["a", "c"]);
}

#[test]
fn test_empty_cells_have_no_attributes() {
    let grid = painted();
    let unnamed = grid.mobs().mask().filter("name", "-").build();
    assert!(!unnamed.any());

    let empty = grid.mobs().mask().predicate(|c| c.is_empty()).build();
    assert_eq!(empty.count(), 3);
}

#[test]
fn test_predicate_and_filter_combine() {
    let grid = painted();
    let mask = grid
        .mobs()
        .mask()
        .predicate(|c: &Content<Shape>| c.handle().is_some_and(|h| h.borrow().name != "a"))
        .filter("color", "red")
        .build();
    assert_eq!(mask.positions().collect::<Vec<_>>().len(), 1);
    assert!(mask.get(0, 2));
}

#[test]
fn test_no_conditions_selects_everything() {
    let grid = painted();
    assert!(grid.mobs().mask().build().all());
}

#[test]
fn test_mask_algebra_across_facets() {
    let mut grid = painted();
    grid.tags_mut().set((.., 1..), [("locked", true)]).unwrap();

    let red = grid.mobs().mask().filter("color", "red").build();
    let locked = grid.tags().mask().filter("locked", true).build();

    assert_eq!((&red & &locked).count(), 1);
    assert_eq!((&red | &locked).count(), 5);
    assert_eq!((!&locked).count(), 2);

    // a mask from one facet indexes every proxy
    grid.mobs_mut()
        .set(&red & &locked, Shape::handle("new", "green"))
        .unwrap();
    assert_eq!(names(grid.olds().get(&red & &locked).unwrap()), vec!["c"]);
}

#[test]
fn test_mask_shape_must_match() {
    let grid = painted();
    let err = grid.mobs().get(Mask::full(3, 2)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Index);
}

#[test]
fn test_history_mask() {
    let mut grid = painted();
    grid.mobs_mut().set(0, Shape::handle("d", "green")).unwrap();
    let was_blue = grid.olds().mask().filter("color", "blue").build();
    assert_eq!(names(grid.mobs().get(was_blue).unwrap()), vec!["d"]);
}
