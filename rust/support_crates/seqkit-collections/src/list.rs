//! A doubly linked list whose elements are addressed by copyable handles.
//!
//! Nodes live in a slab owned by the [`List`]; an [`Element`] names a slot in
//! that slab together with the list it came from and the slot generation at
//! the time it was issued. Removing a node bumps the slot generation, so a
//! handle to a removed node (or a handle issued by a different list) is
//! simply not recognized: lookups return `None` and mutations leave the list
//! untouched.

use std::sync::atomic::{AtomicU64, Ordering};

use seqkit_iter::source::{IterSeq, from_iter};

static NEXT_LIST_ID: AtomicU64 = AtomicU64::new(1);

fn next_list_id() -> u64 {
    NEXT_LIST_ID.fetch_add(1, Ordering::Relaxed)
}

/// A handle to a node of a [`List`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Element {
    list: u64,
    index: usize,
    generation: u64,
}

#[derive(Debug, Clone)]
struct Slot<T> {
    value: Option<T>,
    prev: Option<usize>,
    next: Option<usize>,
    generation: u64,
}

pub struct List<T> {
    id: u64,
    slots: Vec<Slot<T>>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl<T> List<T> {
    pub fn new() -> List<T> {
        List {
            id: next_list_id(),
            slots: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn front(&self) -> Option<Element> {
        self.head.map(|i| self.handle(i))
    }

    pub fn back(&self) -> Option<Element> {
        self.tail.map(|i| self.handle(i))
    }

    /// Returns the node following `e`, or `None` at the back of the list.
    pub fn next(&self, e: Element) -> Option<Element> {
        let i = self.slot_of(e)?;
        self.slots[i].next.map(|n| self.handle(n))
    }

    /// Returns the node preceding `e`, or `None` at the front of the list.
    pub fn prev(&self, e: Element) -> Option<Element> {
        let i = self.slot_of(e)?;
        self.slots[i].prev.map(|p| self.handle(p))
    }

    pub fn get(&self, e: Element) -> Option<&T> {
        let i = self.slot_of(e)?;
        self.slots[i].value.as_ref()
    }

    pub fn get_mut(&mut self, e: Element) -> Option<&mut T> {
        let i = self.slot_of(e)?;
        self.slots[i].value.as_mut()
    }

    pub fn push_back(&mut self, value: T) -> Element {
        let i = self.alloc(value);
        self.link(i, self.tail, None);
        self.handle(i)
    }

    pub fn push_front(&mut self, value: T) -> Element {
        let i = self.alloc(value);
        self.link(i, None, self.head);
        self.handle(i)
    }

    /// Inserts `value` right after `mark`. Returns `None`, leaving the list
    /// unchanged, if `mark` is not a node of this list.
    pub fn insert_after(&mut self, value: T, mark: Element) -> Option<Element> {
        let m = self.slot_of(mark)?;
        let i = self.alloc(value);
        self.link(i, Some(m), self.slots[m].next);
        Some(self.handle(i))
    }

    /// Inserts `value` right before `mark`. Returns `None`, leaving the list
    /// unchanged, if `mark` is not a node of this list.
    pub fn insert_before(&mut self, value: T, mark: Element) -> Option<Element> {
        let m = self.slot_of(mark)?;
        let i = self.alloc(value);
        self.link(i, self.slots[m].prev, Some(m));
        Some(self.handle(i))
    }

    /// Removes `e` and returns its value. `None` if `e` is not a node of this
    /// list.
    pub fn remove(&mut self, e: Element) -> Option<T> {
        let i = self.slot_of(e)?;
        self.unlink(i);
        self.release(i)
    }

    pub fn move_to_front(&mut self, e: Element) {
        let Some(i) = self.slot_of(e) else {
            return;
        };
        if self.head == Some(i) {
            return;
        }
        self.unlink(i);
        self.link(i, None, self.head);
    }

    pub fn move_to_back(&mut self, e: Element) {
        let Some(i) = self.slot_of(e) else {
            return;
        };
        if self.tail == Some(i) {
            return;
        }
        self.unlink(i);
        self.link(i, self.tail, None);
    }

    /// Moves `e` right after `mark`. No-op if either handle is not a node of
    /// this list, or if they are the same node.
    pub fn move_after(&mut self, e: Element, mark: Element) {
        let (Some(i), Some(m)) = (self.slot_of(e), self.slot_of(mark)) else {
            return;
        };
        if i == m {
            return;
        }
        self.unlink(i);
        self.link(i, Some(m), self.slots[m].next);
    }

    /// Moves `e` right before `mark`. No-op if either handle is not a node of
    /// this list, or if they are the same node.
    pub fn move_before(&mut self, e: Element, mark: Element) {
        let (Some(i), Some(m)) = (self.slot_of(e), self.slot_of(mark)) else {
            return;
        };
        if i == m {
            return;
        }
        self.unlink(i);
        self.link(i, self.slots[m].prev, Some(m));
    }

    /// Appends clones of the values of `other`, in order.
    pub fn push_back_list(&mut self, other: &List<T>)
    where
        T: Clone,
    {
        for value in other.iter() {
            self.push_back(value.clone());
        }
    }

    /// Prepends clones of the values of `other`, keeping their order.
    pub fn push_front_list(&mut self, other: &List<T>)
    where
        T: Clone,
    {
        for value in other.iter().rev() {
            self.push_front(value.clone());
        }
    }

    /// Removes every node. Handles issued before the call are no longer
    /// recognized.
    pub fn clear(&mut self) {
        self.id = next_list_id();
        self.slots.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// Iterates over the values front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            front: self.head,
            back: self.tail,
            remaining: self.len,
        }
    }

    /// The values front to back, as a sequence.
    pub fn seq(&self) -> IterSeq<Iter<'_, T>> {
        from_iter(self.iter())
    }

    fn handle(&self, i: usize) -> Element {
        Element {
            list: self.id,
            index: i,
            generation: self.slots[i].generation,
        }
    }

    fn slot_of(&self, e: Element) -> Option<usize> {
        if e.list != self.id {
            return None;
        }
        let slot = self.slots.get(e.index)?;
        (slot.generation == e.generation && slot.value.is_some()).then_some(e.index)
    }

    fn alloc(&mut self, value: T) -> usize {
        match self.free.pop() {
            Some(i) => {
                self.slots[i].value = Some(value);
                i
            }
            None => {
                self.slots.push(Slot {
                    value: Some(value),
                    prev: None,
                    next: None,
                    generation: 0,
                });
                self.slots.len() - 1
            }
        }
    }

    fn release(&mut self, i: usize) -> Option<T> {
        let slot = &mut self.slots[i];
        slot.generation += 1;
        self.free.push(i);
        slot.value.take()
    }

    fn link(&mut self, i: usize, prev: Option<usize>, next: Option<usize>) {
        self.slots[i].prev = prev;
        self.slots[i].next = next;
        match prev {
            Some(p) => self.slots[p].next = Some(i),
            None => self.head = Some(i),
        }
        match next {
            Some(n) => self.slots[n].prev = Some(i),
            None => self.tail = Some(i),
        }
        self.len += 1;
    }

    fn unlink(&mut self, i: usize) {
        let (prev, next) = (self.slots[i].prev, self.slots[i].next);
        match prev {
            Some(p) => self.slots[p].next = next,
            None => self.head = next,
        }
        match next {
            Some(n) => self.slots[n].prev = prev,
            None => self.tail = prev,
        }
        self.slots[i].prev = None;
        self.slots[i].next = None;
        self.len -= 1;
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        List::new()
    }
}

impl<T: Clone> Clone for List<T> {
    /// The clone is a distinct list: handles of `self` are not valid on it.
    fn clone(&self) -> Self {
        List {
            id: next_list_id(),
            slots: self.slots.clone(),
            free: self.free.clone(),
            head: self.head,
            tail: self.tail,
            len: self.len,
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for List<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = List::new();
        for value in iter {
            list.push_back(value);
        }
        list
    }
}

/// Front-to-back iterator over the values of a [`List`].
pub struct Iter<'a, T> {
    list: &'a List<T>,
    front: Option<usize>,
    back: Option<usize>,
    remaining: usize,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            list: self.list,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let list = self.list;
        let slot = &list.slots[self.front?];
        self.front = slot.next;
        self.remaining -= 1;
        slot.value.as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let list = self.list;
        let slot = &list.slots[self.back?];
        self.back = slot.prev;
        self.remaining -= 1;
        slot.value.as_ref()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
