use std::fmt::{self, Display, Formatter};

use thiserror::Error as ThisError;

/// The list operation that was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    Get,
    Set,
    Add,
    Remove,
    Cursor,
}

impl Display for Op {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        use self::Op::*;
        let name = match self {
            Get => "get",
            Set => "set",
            Add => "add",
            Remove => "remove",
            Cursor => "cursor",
        };
        write!(f, "{name}", name = name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum ListError {
    #[error("index {index} out of range for {op} on list of size {size}")]
    IndexOutOfRange { op: Op, index: usize, size: usize },
}

impl ListError {
    pub fn out_of_range(op: Op, index: usize, size: usize) -> Self {
        ListError::IndexOutOfRange { op, index, size }
    }

    pub fn index(&self) -> usize {
        match self {
            ListError::IndexOutOfRange { index, .. } => *index,
        }
    }

    pub fn size(&self) -> usize {
        match self {
            ListError::IndexOutOfRange { size, .. } => *size,
        }
    }

    pub fn op(&self) -> Op {
        match self {
            ListError::IndexOutOfRange { op, .. } => *op,
        }
    }
}

pub type Result<T> = std::result::Result<T, ListError>;
