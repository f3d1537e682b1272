//! Stored objects and the empty placeholder

use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

use super::value::{AttrValue, Attributes};

/// Shared handle to an object stored in a grid
///
/// Cloning a handle never clones the object: every clone refers to the same
/// instance, so a handle returned by a read aliases the object held by the grid.
/// Mutating through [`Handle::borrow_mut`] mutates grid state.
///
/// Equality is identity.
pub struct Handle<T>(Rc<RefCell<T>>);

impl<T> Handle<T> {
    /// Wrap a new object
    pub fn new(object: T) -> Self {
        Handle(Rc::new(RefCell::new(object)))
    }

    /// Immutably borrow the object
    ///
    /// # Panics
    ///
    /// Panics if the object is currently mutably borrowed.
    pub fn borrow(&self) -> Ref<'_, T> {
        self.0.borrow()
    }

    /// Mutably borrow the object
    ///
    /// # Panics
    ///
    /// Panics if the object is currently borrowed.
    pub fn borrow_mut(&self) -> RefMut<'_, T> {
        self.0.borrow_mut()
    }

    /// Whether both handles refer to the same object
    pub fn ptr_eq(&self, other: &Handle<T>) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Number of handles sharing this object
    pub fn share_count(&self) -> usize {
        Rc::strong_count(&self.0)
    }
}

impl<T> Clone for Handle<T> {
    fn clone(&self) -> Self {
        Handle(Rc::clone(&self.0))
    }
}

impl<T> PartialEq for Handle<T> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl<T> Eq for Handle<T> {}

impl<T: fmt::Debug> fmt::Debug for Handle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.try_borrow() {
            Ok(object) => f.debug_tuple("Handle").field(&*object).finish(),
            Err(_) => f.write_str("Handle(<borrowed>)"),
        }
    }
}

impl<T> From<T> for Handle<T> {
    fn from(object: T) -> Self {
        Handle::new(object)
    }
}

/// Content of a cell facet: either the empty placeholder or a stored object
pub enum Content<T> {
    /// Placeholder held by every cell that was never written
    Empty,
    /// A caller supplied object
    Object(Handle<T>),
}

impl<T> Content<T> {
    /// Check if this is the empty placeholder
    pub fn is_empty(&self) -> bool {
        matches!(self, Content::Empty)
    }

    /// Get the stored object's handle
    pub fn handle(&self) -> Option<&Handle<T>> {
        match self {
            Content::Empty => None,
            Content::Object(handle) => Some(handle),
        }
    }

    /// Convert into the stored object's handle
    pub fn into_handle(self) -> Option<Handle<T>> {
        match self {
            Content::Empty => None,
            Content::Object(handle) => Some(handle),
        }
    }
}

impl<T> Default for Content<T> {
    fn default() -> Self {
        Content::Empty
    }
}

impl<T> Clone for Content<T> {
    fn clone(&self) -> Self {
        match self {
            Content::Empty => Content::Empty,
            Content::Object(handle) => Content::Object(handle.clone()),
        }
    }
}

impl<T> PartialEq for Content<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Content::Empty, Content::Empty) => true,
            (Content::Object(a), Content::Object(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

impl<T> Eq for Content<T> {}

impl<T> PartialEq<Handle<T>> for Content<T> {
    fn eq(&self, other: &Handle<T>) -> bool {
        self.handle().is_some_and(|h| h.ptr_eq(other))
    }
}

impl<T: fmt::Debug> fmt::Debug for Content<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Content::Empty => f.write_str("Empty"),
            Content::Object(handle) => fmt::Debug::fmt(handle, f),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Content<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Content::Empty => f.write_str("Empty"),
            Content::Object(handle) => match handle.0.try_borrow() {
                Ok(object) => write!(f, "{}", object),
                Err(_) => f.write_str("<borrowed>"),
            },
        }
    }
}

impl<T> From<Handle<T>> for Content<T> {
    fn from(handle: Handle<T>) -> Self {
        Content::Object(handle)
    }
}

impl<T> From<&Handle<T>> for Content<T> {
    fn from(handle: &Handle<T>) -> Self {
        Content::Object(handle.clone())
    }
}

impl<T: Attributes> Content<T> {
    /// Attribute of the stored object; the placeholder has none
    pub fn attribute(&self, name: &str) -> Option<AttrValue> {
        self.handle().and_then(|h| h.borrow().attribute(name))
    }
}
