//! An index-addressed, doubly-linked list.
//!
//! `LinkedList<T>` gives array-like `get`/`set`/`add`/`remove` by position over
//! a circular chain of cells closed by a permanent sentinel. Cells are kept in
//! an arena and refer to each other by slot, so the list needs no `unsafe`.
//!
//! ```
//! use indexed_list::LinkedList;
//!
//! let mut list = LinkedList::new();
//! list.add(0, 4)?;
//! list.add(1, 1)?;
//! list.add(2, 2)?;
//! assert_eq!(list.remove(0)?, 4);
//! assert_eq!(*list.get(1)?, 2);
//! assert!(list.get(2).is_err());
//! # Ok::<(), indexed_list::ListError>(())
//! ```
//!
//! Code written against the `List` trait works unchanged on `ArrayList<T>`,
//! the vector-backed alternative.

#![deny(unsafe_code)]

mod array;
mod cell;
pub mod error;
pub mod list;
mod seq;

pub use array::ArrayList;
pub use error::{ListError, Op, Result};
pub use list::{Cursor, CursorMut, IntoIter, Iter, LinkedList};
pub use seq::List;

#[cfg(test)]
mod props;
