use log::debug;

use crate::error::{ListError, Op, Result};
use crate::seq::List;

/// `List` backed by a contiguous vector. Same bounds and errors as
/// `LinkedList`, different costs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArrayList<T> {
    items: Vec<T>,
}

impl<T> ArrayList<T> {
    pub fn new() -> Self {
        ArrayList { items: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        ArrayList {
            items: Vec::with_capacity(capacity),
        }
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    fn check(&self, op: Op, i: usize, bound: usize) -> Result<()> {
        if i < bound {
            return Ok(());
        }
        let err = ListError::out_of_range(op, i, self.items.len());
        debug!("{}", err);
        Err(err)
    }
}

impl<T> List<T> for ArrayList<T> {
    fn size(&self) -> usize {
        self.items.len()
    }

    fn get(&self, i: usize) -> Result<&T> {
        self.check(Op::Get, i, self.items.len())?;
        Ok(&self.items[i])
    }

    fn set(&mut self, i: usize, x: T) -> Result<T> {
        self.check(Op::Set, i, self.items.len())?;
        Ok(std::mem::replace(&mut self.items[i], x))
    }

    fn add(&mut self, i: usize, x: T) -> Result<()> {
        self.check(Op::Add, i, self.items.len() + 1)?;
        self.items.insert(i, x);
        Ok(())
    }

    fn remove(&mut self, i: usize) -> Result<T> {
        self.check(Op::Remove, i, self.items.len())?;
        Ok(self.items.remove(i))
    }
}

impl<T> From<Vec<T>> for ArrayList<T> {
    fn from(items: Vec<T>) -> Self {
        ArrayList { items }
    }
}

#[cfg(test)]
mod tests {
    use super::ArrayList;
    use crate::error::{ListError, Op};
    use crate::seq::List;

    #[test]
    fn test_bounds() {
        let mut list = ArrayList::from(vec![1, 2]);
        assert_eq!(list.add(2, 3), Ok(()));
        assert_eq!(list.as_slice(), &[1, 2, 3]);
        assert_eq!(
            list.remove(3),
            Err(ListError::out_of_range(Op::Remove, 3, 3))
        );
        assert_eq!(list.set(0, 7), Ok(1));
        assert_eq!(list.get(0), Ok(&7));
        assert_eq!(list.size(), 3);
    }
}
