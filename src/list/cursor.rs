use crate::cell::DUMMY;

use super::LinkedList;

/// A read-only position on the ring.
///
/// Besides the elements, a cursor can rest on the sentinel, which sits between
/// the last element and the first and has index `size()`. Moving past either
/// end wraps through it.
pub struct Cursor<'a, T> {
    list: &'a LinkedList<T>,
    target: usize,
    index: usize,
}

impl<'a, T> Cursor<'a, T> {
    pub(super) fn new(list: &'a LinkedList<T>, target: usize, index: usize) -> Self {
        Cursor {
            list,
            target,
            index,
        }
    }

    /// Logical index of the current element, `None` on the sentinel.
    pub fn index(&self) -> Option<usize> {
        if self.target == DUMMY {
            None
        } else {
            Some(self.index)
        }
    }

    pub fn current(&self) -> Option<&'a T> {
        self.list.cells[self.target].val()
    }

    pub fn peek_next(&self) -> Option<&'a T> {
        self.list.cells[self.list.next_of(self.target)].val()
    }

    pub fn peek_prev(&self) -> Option<&'a T> {
        self.list.cells[self.list.prev_of(self.target)].val()
    }

    pub fn move_next(&mut self) {
        self.target = self.list.next_of(self.target);
        self.index = (self.index + 1) % (self.list.num_items + 1);
    }

    pub fn move_prev(&mut self) {
        self.target = self.list.prev_of(self.target);
        self.index = (self.index + self.list.num_items) % (self.list.num_items + 1);
    }
}

/// A position on the ring that can splice cells in and out in O(1).
pub struct CursorMut<'a, T> {
    list: &'a mut LinkedList<T>,
    target: usize,
    index: usize,
}

impl<'a, T> CursorMut<'a, T> {
    pub(super) fn new(list: &'a mut LinkedList<T>, target: usize, index: usize) -> Self {
        CursorMut {
            list,
            target,
            index,
        }
    }

    pub fn index(&self) -> Option<usize> {
        if self.target == DUMMY {
            None
        } else {
            Some(self.index)
        }
    }

    pub fn current(&self) -> Option<&T> {
        self.list.cells[self.target].val()
    }

    pub fn current_mut(&mut self) -> Option<&mut T> {
        self.list.cells[self.target].val_mut()
    }

    pub fn peek_next(&self) -> Option<&T> {
        self.list.cells[self.list.next_of(self.target)].val()
    }

    pub fn peek_prev(&self) -> Option<&T> {
        self.list.cells[self.list.prev_of(self.target)].val()
    }

    pub fn move_next(&mut self) {
        self.target = self.list.next_of(self.target);
        self.index = (self.index + 1) % (self.list.num_items + 1);
    }

    pub fn move_prev(&mut self) {
        self.target = self.list.prev_of(self.target);
        self.index = (self.index + self.list.num_items) % (self.list.num_items + 1);
    }

    /// Inserts `x` in front of the current position. The cursor keeps pointing
    /// at the same cell; on the sentinel this appends.
    pub fn insert_before(&mut self, x: T) {
        self.list.link_before(self.target, x);
        self.index += 1;
    }

    /// Inserts `x` behind the current position; on the sentinel this
    /// prepends.
    pub fn insert_after(&mut self, x: T) {
        let next = self.list.next_of(self.target);
        self.list.link_before(next, x);
        if self.target == DUMMY {
            self.index += 1;
        }
    }

    /// Unlinks the current element and moves on to its successor. Does
    /// nothing on the sentinel.
    pub fn remove_current(&mut self) -> Option<T> {
        if self.target == DUMMY {
            return None;
        }
        let next = self.list.next_of(self.target);
        let x = self.list.unlink(self.target);
        self.target = next;
        Some(x)
    }

    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor::new(&*self.list, self.target, self.index)
    }
}
