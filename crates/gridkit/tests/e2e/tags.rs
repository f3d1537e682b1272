//! Tag reads, in-place edits and wholesale replacement.

use crate::labelled_3x3;
use gridkit::prelude::*;
use gridkit::Dims;
use pretty_assertions::assert_eq;

#[test]
fn test_replace_versus_merge() {
    let mut grid = labelled_3x3();
    grid.tags_mut().set(("A", "x"), [("a", 1), ("b", 2)]).unwrap();

    // merging keeps existing keys
    grid.tags_mut().get(("A", "x")).unwrap().update([("c", 3)]);
    assert_eq!(
        grid.cell(0, 0).unwrap().tags(),
        &Tags::from([("a", 1), ("b", 2), ("c", 3)])
    );

    // assignment replaces the whole map
    grid.tags_mut().set(("A", "x"), [("c", 3)]).unwrap();
    assert_eq!(grid.cell(0, 0).unwrap().tags(), &Tags::from([("c", 3)]));
}

#[test]
fn test_scalar_and_bulk_selections() {
    let mut grid = labelled_3x3();
    let mut tags = grid.tags_mut();

    assert!(tags.get(("B", "y")).unwrap().is_scalar());
    assert!(!tags.get("B").unwrap().is_scalar());

    // a mask with a single selected cell still reads as bulk
    let mut single = Mask::new(3, 3);
    single.set(1, 1, true);
    let selection = tags.get(single).unwrap();
    assert!(!selection.is_scalar());
    assert_eq!(selection.into_bulk().map(|b| b.len()), Some(1));
}

#[test]
fn test_bulk_get_shapes() {
    let mut grid = labelled_3x3();
    grid.tags_mut().set(.., [("level", 0)]).unwrap();
    grid.tags_mut().get(("C", ..)).unwrap().set("level", 2);
    grid.tags_mut().get(("A", "z")).unwrap().remove("level");

    let mut tags = grid.tags_mut();
    let all = tags.get(..).unwrap().into_bulk().unwrap().get("level");
    assert_eq!(all.dims(), Dims::Rect(3, 3));
    assert_eq!(all.at(2, 1), Some(&AttrValue::Int(2)));
    assert_eq!(all.at(0, 2), None);
    assert_eq!(all.at(1, 1), Some(&AttrValue::Int(0)));

    let row = tags.get("A").unwrap().into_bulk().unwrap().get("level");
    assert_eq!(row.dims(), Dims::Flat(3));
    assert_eq!(
        row.into_vec(),
        vec![Some(AttrValue::Int(0)), Some(AttrValue::Int(0)), None]
    );
}

#[test]
fn test_bulk_clear() {
    let mut grid = labelled_3x3();
    grid.tags_mut().set(.., [("k", "v")]).unwrap();
    grid.tags_mut().get((.., "x")).unwrap().clear();

    assert!(grid.cell(2, 0).unwrap().tags().is_empty());
    assert_eq!(grid.cell(2, 1).unwrap().tags().len(), 1);
}

#[test]
fn test_failed_tag_write_leaves_cells() {
    let mut grid = labelled_3x3();
    grid.tags_mut().set(.., [("k", 1)]).unwrap();
    assert!(grid.tags_mut().set(("A", "w"), [("k", 2)]).is_err());
    assert!(grid
        .cells()
        .all(|(_, cell)| cell.tags().get("k") == Some(&AttrValue::Int(1))));
}
