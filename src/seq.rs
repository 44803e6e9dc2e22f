use crate::error::Result;

/// An ordered collection addressed by 0-based index.
///
/// `get`, `set` and `remove` accept indices in `0..size()`; `add` also accepts
/// `size()`, which appends. Any other index fails with
/// `ListError::IndexOutOfRange` and leaves the collection untouched.
pub trait List<T> {
    fn size(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    fn get(&self, i: usize) -> Result<&T>;

    /// Replaces the element at `i`, returning the old one.
    fn set(&mut self, i: usize, x: T) -> Result<T>;

    fn add(&mut self, i: usize, x: T) -> Result<()>;

    fn remove(&mut self, i: usize) -> Result<T>;
}

impl<T> List<T> for crate::LinkedList<T> {
    fn size(&self) -> usize {
        crate::LinkedList::size(self)
    }

    fn get(&self, i: usize) -> Result<&T> {
        crate::LinkedList::get(self, i)
    }

    fn set(&mut self, i: usize, x: T) -> Result<T> {
        crate::LinkedList::set(self, i, x)
    }

    fn add(&mut self, i: usize, x: T) -> Result<()> {
        crate::LinkedList::add(self, i, x)
    }

    fn remove(&mut self, i: usize) -> Result<T> {
        crate::LinkedList::remove(self, i)
    }
}
