use alloc::boxed::Box;

use core::{
    fmt::{self, Debug, Formatter},
    hash::{Hash, Hasher},
    iter::{Extend, FromIterator},
};

mod cursor;
mod iters;

use cursor::Position;
pub use cursor::{Cursor, CursorMut};
pub use iters::{IntoIter, Iter, IterMut};

pub(crate) type Link<T> = Option<Box<SinglyLinkedListNode<T>>>;

/// An owning, forward-only, singly linked sequence.
///
/// The list is the only owner of its first node and every node owns its successor, so dropping
/// (or reassigning) a list frees the whole chain exactly once. Cloning performs a full deep copy
/// that preserves element order.
///
/// Positions into the list are handed out as [`Cursor`] (read-only) and [`CursorMut`]
/// (read-write). Both borrow the list, so a position can never outlive the node it refers to.
///
/// The list does no internal locking; sharing one instance between threads is governed by the
/// usual `Send`/`Sync` rules on `T`.
pub struct SinglyLinkedList<T> {
    head: Link<T>,
}

impl<T> SinglyLinkedList<T> {
    pub const fn new() -> Self {
        Self { head: None }
    }

    /// Inserts an element at the beginning of the list
    pub fn push_front(&mut self, item: T) {
        let node = SinglyLinkedListNode {
            value: item,
            next: self.head.take(),
        };
        self.head = Some(Box::new(node));
    }

    /// Position of the first element, or [`end`](Self::end) if the list is empty.
    pub fn begin(&self) -> Cursor<'_, T> {
        Cursor::new(Position::from_link(&self.head))
    }

    pub fn begin_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::new(Position::from_link_mut(&mut self.head))
    }

    /// The past-the-end position. It is never dereferenceable.
    pub fn end(&self) -> Cursor<'_, T> {
        Cursor::new(Position::END)
    }

    pub fn end_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::new(Position::END)
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Number of elements. There is no stored length, so this walks the chain.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn front(&self) -> Option<&T> {
        self.head.as_deref().map(|node| &node.value)
    }

    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.head.as_deref_mut().map(|node| &mut node.value)
    }

    /// Releases every node, head to tail.
    ///
    /// Nodes are unlinked one at a time so that dropping a long chain never recurses.
    pub fn clear(&mut self) {
        let mut released = 0usize;
        let mut head = self.head.take();
        while let Some(mut node) = head {
            head = node.next.take();
            released += 1;
        }
        if released > 0 {
            log::trace!("released {released} list nodes");
        }
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            cursor: self.begin(),
        }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            cursor: self.begin_mut(),
        }
    }

    /// Unlinks the first node. Only the owning iterator uses this.
    pub(crate) fn take_front(&mut self) -> Option<T> {
        self.head.take().map(|node| {
            let SinglyLinkedListNode { value, next } = *node;
            self.head = next;
            value
        })
    }
}

impl<T: Clone> SinglyLinkedList<T> {
    /// Element-wise copy in traversal order.
    ///
    /// Each copied node is attached at the current tail slot of the destination, so element `i`
    /// of `self` becomes element `i` of the copy. If `T::clone` panics the partial copy is
    /// dropped and `self` is untouched.
    fn deep_copy(&self) -> Self {
        let mut copy = Self::new();
        let mut tail = &mut copy.head;
        let mut copied = 0usize;
        for value in self.iter() {
            let node = tail.insert(Box::new(SinglyLinkedListNode {
                value: value.clone(),
                next: None,
            }));
            tail = &mut node.next;
            copied += 1;
        }
        log::trace!("deep copied {copied} list nodes");
        copy
    }
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for SinglyLinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for SinglyLinkedList<T> {
    fn clone(&self) -> Self {
        self.deep_copy()
    }

    /// Copy assignment.
    ///
    /// The replacement chain is fully built before the old one is released, so a panic while
    /// cloning an element leaves `self` as it was.
    fn clone_from(&mut self, source: &Self) {
        let copy = source.deep_copy();
        log::debug!("replacing list contents with a copy of another list");
        *self = copy;
    }
}

impl<T: Debug> Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let len = self.len();
        write!(f, "SinglyLinkedList {{ length: {len}, items: {{")?;
        let mut iter = self.iter();
        if let Some(elem) = iter.next() {
            write!(f, "{elem:?}")?
        }
        for elem in iter {
            write!(f, ", {elem:?}")?;
        }
        write!(f, "}} }}")
    }
}

impl<T: PartialEq> PartialEq for SinglyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for SinglyLinkedList<T> {}

impl<T: Hash> Hash for SinglyLinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut len = 0usize;
        for elem in self.iter() {
            elem.hash(state);
            len += 1;
        }
        state.write_usize(len);
    }
}

/// Collecting prepends each item, so the list ends up in reverse iteration order.
impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for SinglyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for i in iter.into_iter() {
            self.push_front(i);
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for SinglyLinkedList<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

pub(crate) struct SinglyLinkedListNode<T> {
    pub(crate) value: T,
    pub(crate) next: Link<T>,
}
