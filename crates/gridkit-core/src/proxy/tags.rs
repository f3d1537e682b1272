//! Tag proxies (`tags`) and tag selections

use std::fmt;

use crate::cell::{AttrValue, Cell, Tags};
use crate::error::Result;
use crate::grid::Grid;
use crate::index::{Dims, Index};
use crate::mask::MaskBuilder;
use crate::position::Position;

use super::{render, summary, Fetched};

/// Read-only view of the per-cell tags
pub struct TagsView<'a, T> {
    grid: &'a Grid<T>,
}

impl<'a, T> TagsView<'a, T> {
    pub(crate) fn new(grid: &'a Grid<T>) -> Self {
        Self { grid }
    }

    /// Copies of the tags at `index`
    pub fn get<I: Into<Index>>(&self, index: I) -> Result<Fetched<Tags>> {
        let selection = self.grid.select(index)?;
        let cells = self.grid.cell_slice();
        let mut values: Vec<Tags> = selection
            .positions
            .iter()
            .map(|&pos| cells[self.grid.offset(pos)].tags().clone())
            .collect();

        if selection.is_scalar() && values.len() == 1 {
            if let Some(tags) = values.pop() {
                return Ok(Fetched::Scalar(tags));
            }
        }
        Ok(Fetched::Bulk(values))
    }

    /// Start building a mask over the tags
    pub fn mask(&self) -> MaskBuilder<'a, T, Tags> {
        MaskBuilder::new(self.grid.cell_slice(), self.grid.shape(), Cell::tags)
    }
}

impl<T> fmt::Display for TagsView<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(f, self.grid, |cell, f| write!(f, "{}", cell.tags()))
    }
}

impl<T> fmt::Debug for TagsView<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        summary(f, "TagsView", self.grid)
    }
}

/// Read-write view of the per-cell tags
///
/// Reads return a [`TagSelection`] that edits tags in place; [`TagsProxy::set`]
/// replaces them.
pub struct TagsProxy<'a, T> {
    grid: &'a mut Grid<T>,
}

impl<'a, T> TagsProxy<'a, T> {
    pub(crate) fn new(grid: &'a mut Grid<T>) -> Self {
        Self { grid }
    }

    /// Tags of the cells at `index`
    pub fn get<I: Into<Index>>(&mut self, index: I) -> Result<TagSelection<'_>> {
        let selection = self.grid.select(index)?;
        let offsets: Vec<usize> = selection
            .positions
            .iter()
            .map(|&pos| self.grid.offset(pos))
            .collect();
        let cells = self.grid.cell_slice_mut();

        match (selection.is_scalar(), offsets.as_slice()) {
            (true, &[offset]) => Ok(TagSelection::Scalar(ScalarTagSelection {
                position: selection.positions[0],
                tags: cells[offset].tags_mut(),
            })),
            _ => Ok(TagSelection::Bulk(BulkTagSelection::new(
                cells,
                &offsets,
                selection.dims,
            ))),
        }
    }

    /// Replace the tags of every cell at `index` with a copy of `tags`
    pub fn set<I, V>(&mut self, index: I, tags: V) -> Result<()>
    where
        I: Into<Index>,
        V: Into<Tags>,
    {
        let selection = self.grid.select(index)?;
        let tags = tags.into();
        log::debug!("replacing tags of {} cell(s) with {}", selection.len(), tags);

        for pos in selection.positions {
            let offset = self.grid.offset(pos);
            self.grid.cell_slice_mut()[offset].replace_tags(tags.clone());
        }
        Ok(())
    }

    /// Start building a mask over the tags
    pub fn mask(&self) -> MaskBuilder<'_, T, Tags> {
        MaskBuilder::new(self.grid.cell_slice(), self.grid.shape(), Cell::tags)
    }
}

impl<T> fmt::Display for TagsProxy<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(f, self.grid, |cell, f| write!(f, "{}", cell.tags()))
    }
}

impl<T> fmt::Debug for TagsProxy<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        summary(f, "TagsProxy", self.grid)
    }
}

/// Tags of the cells selected by a [`TagsProxy`] read
#[derive(Debug)]
pub enum TagSelection<'a> {
    /// One cell addressed by two bare keys
    Scalar(ScalarTagSelection<'a>),
    /// Any other selection
    Bulk(BulkTagSelection<'a>),
}

impl<'a> TagSelection<'a> {
    /// Whether a single cell was addressed
    pub fn is_scalar(&self) -> bool {
        matches!(self, TagSelection::Scalar(_))
    }

    /// The scalar selection, if any
    pub fn into_scalar(self) -> Option<ScalarTagSelection<'a>> {
        match self {
            TagSelection::Scalar(s) => Some(s),
            TagSelection::Bulk(_) => None,
        }
    }

    /// The bulk selection, if any
    pub fn into_bulk(self) -> Option<BulkTagSelection<'a>> {
        match self {
            TagSelection::Scalar(_) => None,
            TagSelection::Bulk(b) => Some(b),
        }
    }

    /// Set `key` on every selected cell
    pub fn set<K: Into<String>, V: Into<AttrValue>>(&mut self, key: K, value: V) -> &mut Self {
        match self {
            TagSelection::Scalar(s) => {
                s.set(key, value);
            }
            TagSelection::Bulk(b) => {
                b.set(key, value);
            }
        }
        self
    }

    /// Merge `entries` into every selected cell's tags
    pub fn update<I, K, V>(&mut self, entries: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<AttrValue>,
    {
        match self {
            TagSelection::Scalar(s) => {
                s.update(entries);
            }
            TagSelection::Bulk(b) => {
                b.update(entries);
            }
        }
        self
    }

    /// Remove `key` from every selected cell
    pub fn remove(&mut self, key: &str) -> &mut Self {
        match self {
            TagSelection::Scalar(s) => {
                s.remove(key);
            }
            TagSelection::Bulk(b) => {
                b.remove(key);
            }
        }
        self
    }

    /// Remove every tag of every selected cell
    pub fn clear(&mut self) -> &mut Self {
        match self {
            TagSelection::Scalar(s) => {
                s.clear();
            }
            TagSelection::Bulk(b) => {
                b.clear();
            }
        }
        self
    }
}

/// Tags of one cell, edited in place
pub struct ScalarTagSelection<'a> {
    position: Position,
    tags: &'a mut Tags,
}

impl ScalarTagSelection<'_> {
    /// Position of the cell
    pub fn position(&self) -> Position {
        self.position
    }

    /// The cell's tags
    pub fn tags(&self) -> &Tags {
        self.tags
    }

    /// Value of `key`, or `None` if the cell has no such tag
    pub fn get(&self, key: &str) -> Option<&AttrValue> {
        self.tags.get(key)
    }

    /// Set one tag
    pub fn set<K: Into<String>, V: Into<AttrValue>>(&mut self, key: K, value: V) -> &mut Self {
        self.tags.set(key, value);
        self
    }

    /// Merge `entries`, overwriting existing keys
    pub fn update<I, K, V>(&mut self, entries: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<AttrValue>,
    {
        self.tags.update(entries);
        self
    }

    /// Remove `key`; missing keys are ignored
    pub fn remove(&mut self, key: &str) -> &mut Self {
        self.tags.remove(key);
        self
    }

    /// Remove every tag
    pub fn clear(&mut self) -> &mut Self {
        self.tags.clear();
        self
    }
}

impl fmt::Display for ScalarTagSelection<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.tags, f)
    }
}

impl fmt::Debug for ScalarTagSelection<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScalarTagSelection")
            .field("position", &self.position)
            .field("tags", &self.tags)
            .finish()
    }
}

/// Tags of several cells, edited in place
///
/// A cell selected more than once is visited once per occurrence.
pub struct BulkTagSelection<'a> {
    /// Distinct selected cells, in grid order
    slots: Vec<&'a mut Tags>,
    /// Index into `slots` for every selected position, in selection order
    order: Vec<usize>,
    dims: Dims,
}

impl<'a> BulkTagSelection<'a> {
    fn new<T>(cells: &'a mut [Cell<T>], offsets: &[usize], dims: Dims) -> Self {
        let mut unique = offsets.to_vec();
        unique.sort_unstable();
        unique.dedup();

        let mut wanted = unique.iter().peekable();
        let mut slots = Vec::with_capacity(unique.len());
        for (offset, cell) in cells.iter_mut().enumerate() {
            if wanted.peek() == Some(&&offset) {
                slots.push(cell.tags_mut());
                wanted.next();
            }
        }

        let order = offsets
            .iter()
            .map(|offset| unique.binary_search(offset).unwrap_or_else(|slot| slot))
            .collect();

        Self { slots, order, dims }
    }

    /// Number of selected positions, duplicates included
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether nothing was selected
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Shape of the selection
    pub fn dims(&self) -> Dims {
        self.dims
    }

    /// Tags of every selected cell, in selection order
    pub fn iter(&self) -> impl Iterator<Item = &Tags> + '_ {
        self.order.iter().map(move |&slot| &*self.slots[slot])
    }

    /// Value of `key` for every selected cell, `None` where the tag is missing
    pub fn get(&self, key: &str) -> TagArray {
        TagArray {
            dims: self.dims,
            values: self.iter().map(|tags| tags.get(key).cloned()).collect(),
        }
    }

    /// Set one tag on every selected cell
    pub fn set<K: Into<String>, V: Into<AttrValue>>(&mut self, key: K, value: V) -> &mut Self {
        let (key, value) = (key.into(), value.into());
        self.for_each(|tags| {
            tags.set(key.clone(), value.clone());
        })
    }

    /// Merge `entries` into every selected cell's tags
    pub fn update<I, K, V>(&mut self, entries: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<AttrValue>,
    {
        let entries: Vec<(String, AttrValue)> = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self.for_each(|tags| tags.update(entries.iter().cloned()))
    }

    /// Remove `key` from every selected cell; missing keys are ignored
    pub fn remove(&mut self, key: &str) -> &mut Self {
        self.for_each(|tags| {
            tags.remove(key);
        })
    }

    /// Remove every tag of every selected cell
    pub fn clear(&mut self) -> &mut Self {
        self.for_each(Tags::clear)
    }

    fn for_each<F: FnMut(&mut Tags)>(&mut self, mut f: F) -> &mut Self {
        for &slot in &self.order {
            f(&mut *self.slots[slot]);
        }
        self
    }
}

impl fmt::Display for BulkTagSelection<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, tags) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{tags}")?;
        }
        write!(f, "]")
    }
}

impl fmt::Debug for BulkTagSelection<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BulkTagSelection")
            .field("dims", &self.dims)
            .field("cells", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}

/// Values of one tag across a bulk selection
#[derive(Debug, Clone, PartialEq)]
pub struct TagArray {
    dims: Dims,
    values: Vec<Option<AttrValue>>,
}

impl TagArray {
    /// Shape of the selection the values come from
    pub fn dims(&self) -> Dims {
        self.dims
    }

    /// Number of values
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether there are no values
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value at flat index `i`
    pub fn get(&self, i: usize) -> Option<&AttrValue> {
        self.values.get(i).and_then(Option::as_ref)
    }

    /// Value at `(row, col)` of a rectangular selection
    pub fn at(&self, row: usize, col: usize) -> Option<&AttrValue> {
        match self.dims {
            Dims::Rect(rows, cols) if row < rows && col < cols => self.get(row * cols + col),
            _ => None,
        }
    }

    /// Iterate over the values in selection order
    pub fn iter(&self) -> impl Iterator<Item = Option<&AttrValue>> + '_ {
        self.values.iter().map(Option::as_ref)
    }

    /// The values in selection order
    pub fn into_vec(self) -> Vec<Option<AttrValue>> {
        self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::GridOptions;
    use pretty_assertions::assert_eq;

    fn grid() -> Grid<()> {
        Grid::new(GridOptions::new(vec![1.0; 2], vec![1.0; 3])).unwrap()
    }

    #[test]
    fn test_scalar_selection() {
        let mut grid = grid();
        let mut tags = grid.tags_mut();
        let mut sel = tags.get((0, 1)).unwrap().into_scalar().unwrap();
        sel.set("name", "x").set("priority", 5);
        assert_eq!(sel.position(), Position::new(0, 1));
        assert_eq!(sel.get("name"), Some(&AttrValue::from("x")));
        assert_eq!(sel.to_string(), r#"{name: "x", priority: 5}"#);

        sel.remove("name").remove("missing");
        assert_eq!(sel.tags().len(), 1);
        sel.clear();
        assert!(sel.tags().is_empty());
    }

    #[test]
    fn test_bulk_get() {
        let mut grid = grid();
        grid.tags_mut().set((0, 0), [("n", 1)]).unwrap();
        grid.tags_mut().set((1, 2), [("n", 2)]).unwrap();

        let mut tags = grid.tags_mut();
        let sel = tags.get(..).unwrap().into_bulk().unwrap();
        let values = sel.get("n");
        assert_eq!(values.dims(), Dims::Rect(2, 3));
        assert_eq!(values.at(0, 0), Some(&AttrValue::Int(1)));
        assert_eq!(values.at(1, 2), Some(&AttrValue::Int(2)));
        assert_eq!(values.at(0, 1), None);
        assert_eq!(values.iter().flatten().count(), 2);
    }

    #[test]
    fn test_bulk_mutation_with_duplicates() {
        let mut grid = grid();
        {
            let mut tags = grid.tags_mut();
            let mut sel = tags.get((vec![1, 1], 0)).unwrap();
            assert!(!sel.is_scalar());
            sel.update([("seen", true)]).set("k", "v");
        }
        let cell = grid.cell(1, 0).unwrap();
        assert_eq!(cell.tags().len(), 2);
        assert!(grid.cell(0, 0).unwrap().tags().is_empty());

        let mut tags = grid.tags_mut();
        let mut sel = tags.get((1, ..)).unwrap().into_bulk().unwrap();
        assert_eq!(sel.len(), 3);
        assert_eq!(
            sel.get("k").into_vec(),
            vec![Some(AttrValue::from("v")), None, None]
        );
        sel.remove("k").clear();
        assert!(sel.iter().all(Tags::is_empty));
    }

    #[test]
    fn test_set_replaces_update_merges() {
        let mut grid = grid();
        grid.tags_mut().set(0, [("a", 1), ("b", 2)]).unwrap();
        grid.tags_mut().set((0, 0), [("c", 3)]).unwrap();
        assert_eq!(grid.cell(0, 0).unwrap().tags(), &Tags::from([("c", 3)]));

        grid.tags_mut().get((0, 1)).unwrap().update([("c", 3)]);
        assert_eq!(
            grid.cell(0, 1).unwrap().tags(),
            &Tags::from([("a", 1), ("b", 2), ("c", 3)])
        );
    }

    #[test]
    fn test_set_stores_independent_copies() {
        let mut grid = grid();
        grid.tags_mut().set(.., [("shared", 1)]).unwrap();
        grid.tags_mut().get((0, 0)).unwrap().set("shared", 2);
        assert_eq!(grid.cell(1, 1).unwrap().tags().get("shared"), Some(&AttrValue::Int(1)));
    }

    #[test]
    fn test_tags_mask() {
        let mut grid = grid();
        grid.tags_mut().set(.., [("kind", "a")]).unwrap();
        grid.tags_mut().get((1, ..)).unwrap().set("kind", "b");
        grid.tags_mut().get((0, 2)).unwrap().remove("kind");

        let tags = grid.tags();
        let mask = tags.mask().filter("kind", "a").build();
        assert_eq!(mask.count(), 2);
        assert!(!mask.get(0, 2));

        let mask = tags.mask().predicate(|t| t.is_empty()).build();
        assert_eq!(mask.count(), 1);
    }

    #[test]
    fn test_display_and_debug() {
        let mut grid: Grid<()> = Grid::new(GridOptions::new(vec![1.0], vec![1.0; 2])).unwrap();
        grid.tags_mut().set((0, 0), [("a", 1)]).unwrap();
        assert_eq!(grid.tags().to_string(), "[[{a: 1}, {}]]");
        assert_eq!(format!("{:?}", grid.tags()), "<TagsView of size (1, 2)>");

        let tags = grid.tags_mut();
        assert_eq!(tags.to_string(), "[[{a: 1}, {}]]");
        assert_eq!(format!("{tags:?}"), "<TagsProxy of size (1, 2)>");
    }

    #[test]
    fn test_shared_view_reads_copies() {
        let mut grid = grid();
        grid.tags_mut().set(0, [("row", 0)]).unwrap();
        grid.tags_mut().set((1, 2), [("row", 1)]).unwrap();

        let view = grid.tags();
        let scalar = view.get((1, 2)).unwrap();
        assert_eq!(scalar, Fetched::Scalar(Tags::from([("row", 1)])));

        let column = view.get((.., 2)).unwrap();
        assert!(!column.is_scalar());
        assert_eq!(
            column.into_vec(),
            vec![Tags::from([("row", 0)]), Tags::from([("row", 1)])]
        );
        assert!(view.get((2, 0)).is_err());
    }

    #[test]
    fn test_shared_view_composes_with_value_reads() {
        let mut grid = grid();
        grid.tags_mut().set((.., 0), [("edge", true)]).unwrap();

        let mobs = grid.mobs();
        let tags = grid.tags();
        let edge = tags.mask().filter("edge", true).build();
        assert_eq!(mobs.get(&edge).unwrap().len(), 2);
        assert_eq!(tags.get(&edge).unwrap().len(), 2);
    }
}
