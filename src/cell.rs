pub static FREE_VAR_MESSAGE: &str = "not expecting free cell variant here";
pub static DATA_VAR_MESSAGE: &str = "expecting data cell variant here";
pub static FREE_SLOT_MESSAGE: &str = "free chain points at a live cell";

/// Slot of the sentinel cell. It is allocated by `LinkedList::new` and never
/// handed to the free chain.
pub const DUMMY: usize = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Links {
    pub next: usize,
    pub prev: usize,
}

impl Links {
    pub fn looped(slot: usize) -> Self {
        Links {
            next: slot,
            prev: slot,
        }
    }
}

#[derive(Debug)]
pub enum Cell<T> {
    Data { links: Links, data: T },
    Dummy(Links),
    Free { next_free: Option<usize> },
}

impl<T> Cell<T> {
    pub fn dummy() -> Cell<T> {
        Cell::Dummy(Links::looped(DUMMY))
    }

    pub fn data(data: T, prev: usize, next: usize) -> Cell<T> {
        Cell::Data {
            data,
            links: Links { next, prev },
        }
    }

    pub fn links(&self) -> Option<&Links> {
        use self::Cell::*;
        match self {
            Data { ref links, .. } | Dummy(ref links) => Some(links),
            Free { .. } => None,
        }
    }

    pub fn links_mut(&mut self) -> Option<&mut Links> {
        use self::Cell::*;
        match self {
            Data { ref mut links, .. } | Dummy(ref mut links) => Some(links),
            Free { .. } => None,
        }
    }

    pub fn next(&self) -> Option<usize> {
        self.links().map(|links| links.next)
    }

    pub fn prev(&self) -> Option<usize> {
        self.links().map(|links| links.prev)
    }

    pub fn set_next(&mut self, next: usize) -> bool {
        match self.links_mut() {
            Some(links) => {
                links.next = next;
                true
            }
            None => false,
        }
    }

    pub fn set_prev(&mut self, prev: usize) -> bool {
        match self.links_mut() {
            Some(links) => {
                links.prev = prev;
                true
            }
            None => false,
        }
    }

    pub fn val(&self) -> Option<&T> {
        use self::Cell::*;
        match self {
            Data { data, .. } => Some(data),
            Dummy(..) | Free { .. } => None,
        }
    }

    pub fn val_mut(&mut self) -> Option<&mut T> {
        use self::Cell::*;
        match self {
            Data { data, .. } => Some(data),
            Dummy(..) | Free { .. } => None,
        }
    }

    /// Turns a data cell into a free one and hands back what it held.
    pub fn vacate(&mut self, next_free: Option<usize>) -> Option<(Links, T)> {
        if !self.is_data_cell() {
            return None;
        }
        match std::mem::replace(self, Cell::Free { next_free }) {
            Cell::Data { links, data } => Some((links, data)),
            Cell::Dummy(..) | Cell::Free { .. } => None,
        }
    }

    pub fn next_free(&self) -> Option<usize> {
        match self {
            Cell::Free { next_free } => *next_free,
            Cell::Data { .. } | Cell::Dummy(..) => None,
        }
    }

    pub fn is_data_cell(&self) -> bool {
        use self::Cell::*;
        match self {
            Data { .. } => true,
            Dummy(..) => false,
            Free { .. } => false,
        }
    }

    pub fn is_dummy(&self) -> bool {
        use self::Cell::*;
        match self {
            Data { .. } => false,
            Dummy(..) => true,
            Free { .. } => false,
        }
    }

    pub fn is_free(&self) -> bool {
        use self::Cell::*;
        match self {
            Data { .. } => false,
            Dummy(..) => false,
            Free { .. } => true,
        }
    }
}
