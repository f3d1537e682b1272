//! Reading and writing current objects.

use crate::{grid_2x3, labelled_3x3, names, record_placements, Shape};
use gridkit::prelude::*;
use gridkit::Position;
use pretty_assertions::assert_eq;

#[test]
fn test_first_row_then_overwrite() {
    let mut grid = grid_2x3();
    let (x, y, z) = (
        Shape::handle("X", "red"),
        Shape::handle("Y", "red"),
        Shape::handle("Z", "blue"),
    );

    grid.mobs_mut().set(("1", ..), vec![x.clone(), y, z]).unwrap();
    assert_eq!(
        names(grid.mobs().get(..).unwrap()),
        vec!["X", "Y", "Z", "-", "-", "-"]
    );
    assert!(grid.olds().get(..).unwrap().into_iter().all(|c| c.is_empty()));

    let w = Shape::handle("W", "green");
    grid.mobs_mut().set(("1", "1"), &w).unwrap();
    assert_eq!(grid.olds().get(("1", "1")).unwrap().into_scalar(), Some(Content::from(&x)));
    assert_eq!(grid.mobs().get(("1", "1")).unwrap().into_scalar(), Some(Content::from(&w)));
}

#[test]
fn test_labels_and_positions_are_equivalent() {
    let mut grid = labelled_3x3();
    let shape = Shape::handle("s", "red");
    grid.mobs_mut().set(("B", "z"), &shape).unwrap();

    for index in [Index::from(("B", "z")), Index::from((1, 2)), Index::from((-2, -1))] {
        assert_eq!(
            grid.mobs().get(index).unwrap().into_scalar(),
            Some(Content::from(&shape))
        );
    }
}

#[test]
fn test_reads_alias_grid_objects() {
    let mut grid = grid_2x3();
    grid.mobs_mut().set((0, 0), Shape::handle("a", "red")).unwrap();

    let read = grid.mobs().get((0, 0)).unwrap().into_scalar().unwrap();
    if let Some(handle) = read.handle() {
        handle.borrow_mut().color = "blue".to_string();
    }

    let cell = grid.cell(0, 0).unwrap();
    let color = cell.value().handle().map(|h| h.borrow().color.clone());
    assert_eq!(color.as_deref(), Some("blue"));
}

#[test]
fn test_shape_of_reads() {
    let grid = labelled_3x3();
    let mobs = grid.mobs();

    assert!(mobs.get(("A", "x")).unwrap().is_scalar());
    assert_eq!(mobs.get("A").unwrap().len(), 3);
    assert_eq!(mobs.get(..).unwrap().len(), 9);
    assert_eq!(mobs.get((1.., ..2)).unwrap().len(), 4);
    assert_eq!(mobs.get((vec![0, 0, 2], "y")).unwrap().len(), 3);
    assert_eq!(mobs.get(("A".."C", ..)).unwrap().len(), 6);
    assert_eq!(mobs.get((Slice::all().step(-2), 0)).unwrap().len(), 2);

    // a single-cell slice is still a bulk read
    let one = mobs.get((0..1, 0..1)).unwrap();
    assert!(!one.is_scalar());
    assert_eq!(one.len(), 1);
}

#[test]
fn test_coordinate_pairs() {
    let mut grid = labelled_3x3();
    let shapes: Vec<_> = ["p", "q"].iter().map(|n| Shape::handle(n, "red")).collect();
    grid.mobs_mut()
        .set(vec![("C", "x"), ("A", "z")], shapes)
        .unwrap();

    assert_eq!(names(grid.mobs().get((2, 0)).unwrap()), vec!["p"]);
    assert_eq!(names(grid.mobs().get((0, 2)).unwrap()), vec!["q"]);
    assert_eq!(names(grid.mobs().get(Index::pairs([(0, 2), (2, 0)])).unwrap()), vec!["q", "p"]);
}

#[test]
fn test_errors() {
    let mut grid = grid_2x3();
    let two = vec![Shape::handle("a", "red"), Shape::handle("b", "red")];

    assert_eq!(grid.mobs().get(("9", 0)).unwrap_err().kind(), ErrorKind::Lookup);
    assert_eq!(grid.mobs().get((2, 0)).unwrap_err().kind(), ErrorKind::Index);
    assert_eq!(
        grid.mobs_mut().set(.., two.clone()).unwrap_err(),
        Error::LengthMismatch { cells: 6, values: 2 }
    );
    assert_eq!(
        grid.mobs_mut().set((0, 0), two).unwrap_err().kind(),
        ErrorKind::Value
    );
    assert!(grid.cells().all(|(_, cell)| cell.value().is_empty()));
}

#[test]
fn test_layout_receives_cell_geometry() {
    let mut grid = grid_2x3();
    let placements = record_placements(&mut grid);

    grid.mobs_mut()
        .set((1, 2, Alignment::UP_RIGHT), Shape::handle("a", "red"))
        .unwrap();
    grid.mobs_mut().set((0, 1), Shape::handle("b", "red")).unwrap();

    let placements = placements.borrow();
    assert_eq!(placements.len(), 2);
    assert_eq!(placements[0].position, Position::new(1, 2));
    assert_eq!(placements[0].col_width, 3.0);
    assert_eq!(placements[0].alignment, Alignment::UP_RIGHT);
    assert_eq!(placements[0].margin, Spacing::uniform(0.1));
    assert_eq!(placements[1].alignment, Alignment::CENTER);
}

#[test]
fn test_display() {
    let mut grid = grid_2x3();
    grid.mobs_mut().set(1, Shape::handle("o", "red")).unwrap();
    assert_eq!(
        grid.mobs().to_string(),
        "[[Empty, Empty, Empty],\n [o, o, o]]"
    );
}
