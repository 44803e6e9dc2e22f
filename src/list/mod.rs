//! Circular doubly-linked list with index addressing.
//!
//! Cells live in one arena and refer to each other by slot. Slot `DUMMY`
//! holds the sentinel, which closes the chain into a ring and stands for the
//! position one past the last element.

use std::fmt::{self, Debug};
use std::iter::FromIterator;
use std::mem;

use log::{debug, trace};

use crate::cell::{Cell, DATA_VAR_MESSAGE, DUMMY, FREE_SLOT_MESSAGE, FREE_VAR_MESSAGE};
use crate::error::{ListError, Op, Result};

mod cursor;
mod iter;

pub use cursor::{Cursor, CursorMut};
pub use iter::{IntoIter, Iter};

pub struct LinkedList<T> {
    cells: Vec<Cell<T>>,
    free: Option<usize>,
    num_items: usize,
}

impl<T> LinkedList<T> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty list with room for `capacity` elements before the
    /// arena has to grow.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut cells = Vec::with_capacity(capacity + 1);
        cells.push(Cell::dummy());
        LinkedList {
            cells,
            free: None,
            num_items: 0,
        }
    }

    pub fn size(&self) -> usize {
        self.num_items
    }

    pub fn len(&self) -> usize {
        self.num_items
    }

    pub fn is_empty(&self) -> bool {
        self.num_items == 0
    }

    pub fn get(&self, i: usize) -> Result<&T> {
        let slot = self.locate_data(i, Op::Get)?;
        Ok(self.data(slot))
    }

    pub fn get_mut(&mut self, i: usize) -> Result<&mut T> {
        let slot = self.locate_data(i, Op::Get)?;
        Ok(self.data_mut(slot))
    }

    /// Overwrites the element at `i`, returning the value it replaced.
    pub fn set(&mut self, i: usize, x: T) -> Result<T> {
        let slot = self.locate_data(i, Op::Set)?;
        Ok(mem::replace(self.data_mut(slot), x))
    }

    /// Inserts `x` so that it ends up at index `i`. Everything at `i` or
    /// later moves up by one; `i == size()` appends.
    pub fn add(&mut self, i: usize, x: T) -> Result<()> {
        let at = self.locate(i, Op::Add)?;
        self.link_before(at, x);
        Ok(())
    }

    /// Removes and returns the element at `i`. Everything after it moves down
    /// by one.
    pub fn remove(&mut self, i: usize) -> Result<T> {
        let slot = self.locate_data(i, Op::Remove)?;
        Ok(self.unlink(slot))
    }

    pub fn push_front(&mut self, x: T) {
        let head = self.next_of(DUMMY);
        self.link_before(head, x);
    }

    pub fn push_back(&mut self, x: T) {
        self.link_before(DUMMY, x);
    }

    pub fn pop_front(&mut self) -> Option<T> {
        match self.next_of(DUMMY) {
            DUMMY => None,
            head => Some(self.unlink(head)),
        }
    }

    pub fn pop_back(&mut self) -> Option<T> {
        match self.prev_of(DUMMY) {
            DUMMY => None,
            tail => Some(self.unlink(tail)),
        }
    }

    pub fn front(&self) -> Option<&T> {
        self.cells[self.next_of(DUMMY)].val()
    }

    pub fn back(&self) -> Option<&T> {
        self.cells[self.prev_of(DUMMY)].val()
    }

    pub fn clear(&mut self) {
        while self.num_items > 0 {
            self.pop_front();
        }
    }

    /// Moves every element of `src` onto the end of `self`, keeping their
    /// order, and leaves `src` empty.
    ///
    /// Each list owns its own arena, so this is only O(1) when `self` is
    /// empty; otherwise the elements are relinked one by one.
    pub fn take_all(&mut self, src: &mut LinkedList<T>) {
        if self.is_empty() {
            mem::swap(self, src);
            return;
        }
        self.cells.reserve(src.size());
        while let Some(x) = src.pop_front() {
            self.push_back(x);
        }
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// A cursor on index `i`, or on the sentinel when `i == size()`.
    pub fn cursor(&self, i: usize) -> Result<Cursor<'_, T>> {
        let slot = self.locate(i, Op::Cursor)?;
        Ok(Cursor::new(self, slot, i))
    }

    pub fn cursor_mut(&mut self, i: usize) -> Result<CursorMut<'_, T>> {
        let slot = self.locate(i, Op::Cursor)?;
        Ok(CursorMut::new(self, slot, i))
    }

    pub fn cursor_front(&self) -> Cursor<'_, T> {
        let head = self.next_of(DUMMY);
        Cursor::new(self, head, 0)
    }

    pub fn cursor_front_mut(&mut self) -> CursorMut<'_, T> {
        let head = self.next_of(DUMMY);
        CursorMut::new(self, head, 0)
    }

    /// Resolves `i` to the slot holding that element, or to the sentinel when
    /// `i == size()`. Walks from whichever end of the ring is closer.
    fn locate(&self, i: usize, op: Op) -> Result<usize> {
        if i > self.num_items {
            return Err(self.out_of_range(op, i));
        }
        let mut slot = DUMMY;
        if i < self.num_items / 2 {
            for _ in 0..=i {
                slot = self.next_of(slot);
            }
        } else {
            for _ in i..self.num_items {
                slot = self.prev_of(slot);
            }
        }
        Ok(slot)
    }

    fn locate_data(&self, i: usize, op: Op) -> Result<usize> {
        if i >= self.num_items {
            return Err(self.out_of_range(op, i));
        }
        self.locate(i, op)
    }

    fn out_of_range(&self, op: Op, i: usize) -> ListError {
        let err = ListError::out_of_range(op, i, self.num_items);
        debug!("{}", err);
        err
    }

    fn next_of(&self, slot: usize) -> usize {
        self.cells[slot].next().expect(FREE_VAR_MESSAGE)
    }

    fn prev_of(&self, slot: usize) -> usize {
        self.cells[slot].prev().expect(FREE_VAR_MESSAGE)
    }

    fn data(&self, slot: usize) -> &T {
        self.cells[slot].val().expect(DATA_VAR_MESSAGE)
    }

    fn data_mut(&mut self, slot: usize) -> &mut T {
        self.cells[slot].val_mut().expect(DATA_VAR_MESSAGE)
    }

    fn alloc(&mut self, cell: Cell<T>) -> usize {
        match self.free {
            Some(slot) => {
                debug_assert!(self.cells[slot].is_free(), "{}", FREE_SLOT_MESSAGE);
                self.free = self.cells[slot].next_free();
                self.cells[slot] = cell;
                slot
            }
            None => {
                self.cells.push(cell);
                self.cells.len() - 1
            }
        }
    }

    /// Splices a new cell holding `x` in front of `at` and returns its slot.
    /// On an empty list `at` is the sentinel, which is then its own
    /// predecessor, so the new cell closes a two-cell ring.
    fn link_before(&mut self, at: usize, x: T) -> usize {
        let prev = self.prev_of(at);
        let slot = self.alloc(Cell::data(x, prev, at));
        let linked = self.cells[prev].set_next(slot) & self.cells[at].set_prev(slot);
        debug_assert!(linked, "{}", FREE_VAR_MESSAGE);
        self.num_items += 1;

        trace!("linked slot {} between {} and {}", slot, prev, at);
        debug_assert!(self.ring_is_consistent());
        slot
    }

    /// Takes the cell at `slot` out of the ring and returns its element. The
    /// slot goes to the head of the free chain.
    fn unlink(&mut self, slot: usize) -> T {
        debug_assert_ne!(slot, DUMMY, "the sentinel is never unlinked");
        let (links, x) = self.cells[slot]
            .vacate(self.free)
            .expect(DATA_VAR_MESSAGE);
        self.free = Some(slot);
        let unlinked = self.cells[links.prev].set_next(links.next)
            & self.cells[links.next].set_prev(links.prev);
        debug_assert!(unlinked, "{}", FREE_VAR_MESSAGE);
        self.num_items -= 1;

        trace!(
            "unlinked slot {} from between {} and {}",
            slot,
            links.prev,
            links.next
        );
        debug_assert!(self.ring_is_consistent());
        x
    }

    /// Walks the ring both ways and checks that every hop is mirrored and
    /// that exactly `num_items` data cells are passed.
    pub(crate) fn ring_is_consistent(&self) -> bool {
        if !self.cells[DUMMY].is_dummy() {
            return false;
        }
        let forward = self.count_ring(|cell| cell.next(), |cell| cell.prev());
        let backward = self.count_ring(|cell| cell.prev(), |cell| cell.next());
        forward == Some(self.num_items) && backward == Some(self.num_items)
    }

    fn count_ring<F, B>(&self, step: F, back: B) -> Option<usize>
    where
        F: Fn(&Cell<T>) -> Option<usize>,
        B: Fn(&Cell<T>) -> Option<usize>,
    {
        let mut count = 0;
        let mut slot = DUMMY;
        loop {
            let next = step(self.cells.get(slot)?)?;
            if back(self.cells.get(next)?)? != slot {
                return None;
            }
            if next == DUMMY {
                return Some(count);
            }
            if !self.cells[next].is_data_cell() || count == self.num_items {
                return None;
            }
            count += 1;
            slot = next;
        }
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        trace!("dropping list of {} items", self.num_items);
        self.clear();
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug> Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        let mut list = LinkedList::with_capacity(self.num_items);
        list.extend(self.iter().cloned());
        list
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.num_items == other.num_items && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for x in iter {
            self.push_back(x);
        }
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
