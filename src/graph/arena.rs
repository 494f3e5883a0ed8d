//! Slot storage for graph rows.
//!
//! Vacated slots are chained into a free list and reused by later inserts, so
//! a slot number stays valid for as long as its value lives. Occupied slots
//! are additionally linked in insertion order, which is the order iteration
//! reports them in.

#[derive(Debug, Clone)]
enum Entry<V> {
    Occupied {
        value: V,
        prev: Option<usize>,
        next: Option<usize>,
    },
    Vacant {
        next_free: Option<usize>,
    },
}

#[derive(Debug, Clone)]
pub(crate) struct Arena<V> {
    entries: Vec<Entry<V>>,
    free_head: Option<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl<V> Arena<V> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            free_head: None,
            head: None,
            tail: None,
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Store a value at the back of the insertion order, returning its slot.
    pub fn insert(&mut self, value: V) -> usize {
        let entry = Entry::Occupied {
            value,
            prev: self.tail,
            next: None,
        };

        let reusable = match self.free_head {
            Some(slot) => match self.entries.get(slot) {
                Some(Entry::Vacant { next_free }) => Some((slot, *next_free)),
                _ => None,
            },
            None => None,
        };
        let slot = match reusable {
            Some((slot, next_free)) => {
                self.free_head = next_free;
                self.entries[slot] = entry;
                slot
            }
            None => {
                self.entries.push(entry);
                self.entries.len() - 1
            }
        };

        match self.tail {
            Some(tail) => self.set_next(tail, Some(slot)),
            None => self.head = Some(slot),
        }
        self.tail = Some(slot);
        self.len += 1;
        slot
    }

    /// Vacate a slot, returning its value.
    pub fn remove(&mut self, slot: usize) -> Option<V> {
        if !matches!(self.entries.get(slot), Some(Entry::Occupied { .. })) {
            return None;
        }
        let vacant = Entry::Vacant {
            next_free: self.free_head,
        };
        let Entry::Occupied { value, prev, next } =
            std::mem::replace(&mut self.entries[slot], vacant)
        else {
            return None;
        };

        match prev {
            Some(prev) => self.set_next(prev, next),
            None => self.head = next,
        }
        match next {
            Some(next) => self.set_prev(next, prev),
            None => self.tail = prev,
        }
        self.free_head = Some(slot);
        self.len -= 1;
        Some(value)
    }

    pub fn get(&self, slot: usize) -> Option<&V> {
        match self.entries.get(slot) {
            Some(Entry::Occupied { value, .. }) => Some(value),
            _ => None,
        }
    }

    pub fn get_mut(&mut self, slot: usize) -> Option<&mut V> {
        match self.entries.get_mut(slot) {
            Some(Entry::Occupied { value, .. }) => Some(value),
            _ => None,
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.free_head = None;
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// Occupied slots and their values, in insertion order.
    pub fn iter(&self) -> ArenaIter<'_, V> {
        ArenaIter {
            entries: &self.entries,
            cursor: self.head,
            remaining: self.len,
        }
    }

    fn set_next(&mut self, slot: usize, link: Option<usize>) {
        if let Some(Entry::Occupied { next, .. }) = self.entries.get_mut(slot) {
            *next = link;
        }
    }

    fn set_prev(&mut self, slot: usize, link: Option<usize>) {
        if let Some(Entry::Occupied { prev, .. }) = self.entries.get_mut(slot) {
            *prev = link;
        }
    }
}

pub(crate) struct ArenaIter<'a, V> {
    entries: &'a [Entry<V>],
    cursor: Option<usize>,
    remaining: usize,
}

impl<'a, V> Clone for ArenaIter<'a, V> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries,
            cursor: self.cursor,
            remaining: self.remaining,
        }
    }
}

impl<'a, V> Iterator for ArenaIter<'a, V> {
    type Item = (usize, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let slot = self.cursor?;
        match self.entries.get(slot) {
            Some(Entry::Occupied { value, next, .. }) => {
                self.cursor = *next;
                self.remaining = self.remaining.saturating_sub(1);
                Some((slot, value))
            }
            _ => {
                self.cursor = None;
                self.remaining = 0;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> ExactSizeIterator for ArenaIter<'_, V> {}
