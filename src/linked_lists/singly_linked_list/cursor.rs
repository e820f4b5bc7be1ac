use super::{Link, SinglyLinkedListNode};
use crate::error::Error;

use core::{
    fmt::{self, Debug, Formatter},
    marker::PhantomData,
    ops::{Deref, DerefMut},
    ptr::NonNull,
};

type NodePtr<T> = NonNull<SinglyLinkedListNode<T>>;

/// A node address, or `None` for the past-the-end position.
///
/// This is the single representation shared by [`Cursor`] and [`CursorMut`]. Two positions are
/// equal iff they name the same node; every end position is equal to every other.
pub(crate) struct Position<T> {
    node: Option<NodePtr<T>>,
}

impl<T> Position<T> {
    pub(crate) const END: Self = Self { node: None };

    pub(crate) fn from_link(link: &Link<T>) -> Self {
        Self {
            node: link.as_deref().map(NonNull::from),
        }
    }

    pub(crate) fn from_link_mut(link: &mut Link<T>) -> Self {
        Self {
            node: link.as_deref_mut().map(NonNull::from),
        }
    }

    pub(crate) fn is_end(self) -> bool {
        self.node.is_none()
    }

    /// # Safety
    /// the node must be alive and not mutably borrowed for the duration of `'a`
    unsafe fn value<'a>(self) -> Option<&'a T> {
        self.node.map(|n| &(*n.as_ptr()).value)
    }

    /// # Safety
    /// the node must be alive, derived from a unique borrow, and not otherwise borrowed for `'a`
    unsafe fn value_mut<'a>(self) -> Option<&'a mut T> {
        self.node.map(|n| &mut (*n.as_ptr()).value)
    }

    /// # Safety
    /// the node must be alive and not mutably borrowed
    unsafe fn next(self) -> Option<Self> {
        self.node.map(|n| Self::from_link(&(*n.as_ptr()).next))
    }

    /// Like `next`, but keeps write provenance for the successor.
    ///
    /// # Safety
    /// the node must be alive and derived from a unique borrow
    unsafe fn next_mut(self) -> Option<Self> {
        self.node.map(|n| Self::from_link_mut(&mut (*n.as_ptr()).next))
    }
}

impl<T> Clone for Position<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Position<T> {}

impl<T> PartialEq for Position<T> {
    fn eq(&self, other: &Self) -> bool {
        self.node == other.node
    }
}

impl<T> Eq for Position<T> {}

impl<T> Debug for Position<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.node {
            Some(n) => write!(f, "{:p}", n.as_ptr()),
            None => write!(f, "end"),
        }
    }
}

const PAST_END: &str = "cursor advanced or dereferenced past the end of the list";

/// Read-only position in a [`SinglyLinkedList`](super::SinglyLinkedList).
///
/// A `Cursor` is `Copy`; any number of them may point into the same list. Dereferencing or
/// advancing the end position panics; use [`get`](Self::get) or
/// [`try_move_next`](Self::try_move_next) for the checked variants.
pub struct Cursor<'a, T> {
    pos: Position<T>,
    marker: PhantomData<&'a SinglyLinkedListNode<T>>,
}

impl<'a, T> Cursor<'a, T> {
    pub(crate) fn new(pos: Position<T>) -> Self {
        Self {
            pos,
            marker: PhantomData,
        }
    }

    pub fn is_end(&self) -> bool {
        self.pos.is_end()
    }

    /// The referenced element, or `None` at the end position.
    pub fn get(&self) -> Option<&'a T> {
        // the list is shared-borrowed for 'a
        unsafe { self.pos.value() }
    }

    /// Pre-increment.
    ///
    /// # Panics
    /// if the cursor is at the end position
    pub fn move_next(&mut self) -> &mut Self {
        match self.try_move_next() {
            Ok(()) => self,
            Err(_) => panic!("{PAST_END}"),
        }
    }

    pub fn try_move_next(&mut self) -> Result<(), Error> {
        let next = unsafe { self.pos.next() }.ok_or(Error::EndOfList)?;
        self.pos = next;
        Ok(())
    }

    /// Post-increment: returns the position before the move.
    ///
    /// # Panics
    /// if the cursor is at the end position
    pub fn post_increment(&mut self) -> Self {
        let prev = *self;
        self.move_next();
        prev
    }
}

impl<'a, T> Default for Cursor<'a, T> {
    fn default() -> Self {
        Self::new(Position::END)
    }
}

impl<'a, T> Clone for Cursor<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for Cursor<'a, T> {}

// a Cursor only ever hands out `&'a T`, exactly like `&'a SinglyLinkedList<T>`
unsafe impl<'a, T: Sync> Send for Cursor<'a, T> {}
unsafe impl<'a, T: Sync> Sync for Cursor<'a, T> {}

impl<'a, T> Deref for Cursor<'a, T> {
    type Target = T;
    fn deref(&self) -> &T {
        match self.get() {
            Some(value) => value,
            None => panic!("{PAST_END}"),
        }
    }
}

impl<'a, T> From<CursorMut<'a, T>> for Cursor<'a, T> {
    fn from(cursor: CursorMut<'a, T>) -> Self {
        Self::new(cursor.pos)
    }
}

impl<'a, T> Debug for Cursor<'a, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Cursor").field(&self.pos).finish()
    }
}

/// Read-write position in a [`SinglyLinkedList`](super::SinglyLinkedList).
///
/// A `CursorMut` holds the list's unique borrow, so it cannot be copied. It converts into a
/// [`Cursor`] (by value with `From`, or temporarily with [`as_cursor`](Self::as_cursor)); there
/// is no way back from a read-only position.
pub struct CursorMut<'a, T> {
    pos: Position<T>,
    marker: PhantomData<&'a mut SinglyLinkedListNode<T>>,
}

impl<'a, T> CursorMut<'a, T> {
    pub(crate) fn new(pos: Position<T>) -> Self {
        Self {
            pos,
            marker: PhantomData,
        }
    }

    pub fn is_end(&self) -> bool {
        self.pos.is_end()
    }

    pub fn get(&self) -> Option<&T> {
        unsafe { self.pos.value() }
    }

    pub fn get_mut(&mut self) -> Option<&mut T> {
        // unique borrow of the list, reborrowed through &mut self
        unsafe { self.pos.value_mut() }
    }

    /// Gives up the cursor for a reference that lives as long as the list borrow.
    pub fn into_mut(self) -> Option<&'a mut T> {
        unsafe { self.pos.value_mut() }
    }

    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor::new(self.pos)
    }

    /// Pre-increment.
    ///
    /// # Panics
    /// if the cursor is at the end position
    pub fn move_next(&mut self) -> &mut Self {
        match self.try_move_next() {
            Ok(()) => self,
            Err(_) => panic!("{PAST_END}"),
        }
    }

    pub fn try_move_next(&mut self) -> Result<(), Error> {
        let next = unsafe { self.pos.next_mut() }.ok_or(Error::EndOfList)?;
        self.pos = next;
        Ok(())
    }

    /// Post-increment: advances, and hands back the element the cursor was on.
    ///
    /// Returning the old position itself would leave two read-write positions into one list,
    /// so the element reference stands in for it. The cursor never revisits that node.
    ///
    /// # Panics
    /// if the cursor is at the end position
    pub fn post_increment(&mut self) -> &'a mut T {
        let prev = self.pos;
        self.move_next();
        match unsafe { prev.value_mut() } {
            Some(value) => value,
            None => unreachable!(),
        }
    }
}

// same rules as `&'a mut T`
unsafe impl<'a, T: Send> Send for CursorMut<'a, T> {}
unsafe impl<'a, T: Sync> Sync for CursorMut<'a, T> {}

impl<'a, T> Default for CursorMut<'a, T> {
    fn default() -> Self {
        Self::new(Position::END)
    }
}

impl<'a, T> Deref for CursorMut<'a, T> {
    type Target = T;
    fn deref(&self) -> &T {
        match self.get() {
            Some(value) => value,
            None => panic!("{PAST_END}"),
        }
    }
}

impl<'a, T> DerefMut for CursorMut<'a, T> {
    fn deref_mut(&mut self) -> &mut T {
        match self.get_mut() {
            Some(value) => value,
            None => panic!("{PAST_END}"),
        }
    }
}

impl<'a, T> Debug for CursorMut<'a, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CursorMut").field(&self.pos).finish()
    }
}

impl<'a, 'b, T> PartialEq<Cursor<'b, T>> for Cursor<'a, T> {
    fn eq(&self, other: &Cursor<'b, T>) -> bool {
        self.pos == other.pos
    }
}

impl<'a, T> Eq for Cursor<'a, T> {}

impl<'a, 'b, T> PartialEq<CursorMut<'b, T>> for CursorMut<'a, T> {
    fn eq(&self, other: &CursorMut<'b, T>) -> bool {
        self.pos == other.pos
    }
}

impl<'a, T> Eq for CursorMut<'a, T> {}

impl<'a, 'b, T> PartialEq<CursorMut<'b, T>> for Cursor<'a, T> {
    fn eq(&self, other: &CursorMut<'b, T>) -> bool {
        self.pos == other.pos
    }
}

impl<'a, 'b, T> PartialEq<Cursor<'b, T>> for CursorMut<'a, T> {
    fn eq(&self, other: &Cursor<'b, T>) -> bool {
        self.pos == other.pos
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SinglyLinkedList;

    fn names() -> SinglyLinkedList<String> {
        let mut lst = SinglyLinkedList::new();
        lst.push_front("Copernicus".to_string());
        lst.push_front("Bob".to_string());
        lst.push_front("Alice".to_string());
        lst
    }

    #[test]
    fn walk_with_cursor() {
        let lst = names();
        let mut out = vec![];
        let mut it = lst.begin();
        while it != lst.end() {
            out.push(it.get().unwrap().as_str());
            it.move_next();
        }
        assert_eq!(out, ["Alice", "Bob", "Copernicus"]);
    }

    #[test]
    fn post_increment_returns_previous() {
        let lst = names();
        let mut it = lst.begin();
        let prev = it.post_increment();
        assert_eq!(*prev, "Alice");
        assert_eq!(*it, "Bob");
        assert!(prev == lst.begin());
    }

    #[test]
    fn default_equals_end() {
        let lst = names();
        assert!(Cursor::default() == lst.end());
        assert!(Cursor::<i32>::default().is_end());
        assert!(CursorMut::<i32>::default() == Cursor::<i32>::default());
    }

    #[test]
    fn end_positions_of_distinct_lists_are_equal() {
        let a = names();
        let b = names();
        assert!(a.end() == b.end());
        assert!(a.begin() != b.begin());
    }

    #[test]
    fn checked_access_at_end() {
        let lst: SinglyLinkedList<i32> = SinglyLinkedList::new();
        let mut it = lst.begin();
        assert!(it.get().is_none());
        assert_eq!(it.try_move_next(), Err(Error::EndOfList));
        assert!(it == lst.end());
    }

    #[test]
    #[should_panic]
    fn deref_end_panics() {
        let lst: SinglyLinkedList<i32> = SinglyLinkedList::new();
        let _value: i32 = *lst.end();
    }

    #[test]
    #[should_panic]
    fn advance_end_panics() {
        let mut lst: SinglyLinkedList<i32> = SinglyLinkedList::new();
        lst.end_mut().move_next();
    }

    #[test]
    fn write_through_cursor_mut() {
        let mut lst = names();
        let mut it = lst.begin_mut();
        while !it.is_end() {
            it.push('!');
            it.move_next();
        }
        assert_eq!(
            lst.iter().map(String::as_str).collect::<Vec<_>>(),
            ["Alice!", "Bob!", "Copernicus!"]
        );
    }

    #[test]
    fn cursor_mut_post_increment() {
        let mut lst: SinglyLinkedList<i32> = (0..3).collect();
        let mut it = lst.begin_mut();
        let first = it.post_increment();
        let second = it.post_increment();
        *first += 10;
        *second += 20;
        assert!(!it.is_end());
        assert_eq!(*it, 0);
        assert_eq!(lst.iter().copied().collect::<Vec<_>>(), vec![12, 21, 0]);
    }

    #[test]
    fn converted_cursor_references_same_element() {
        let mut lst = names();
        let mut direct = lst.begin();
        direct.move_next();
        let direct_elem: *const String = direct.get().unwrap();

        let mut it = lst.begin_mut();
        it.move_next();
        {
            let view = it.as_cursor();
            assert!(view == it);
            assert!(core::ptr::eq(view.get().unwrap(), direct_elem));
        }
        let converted: Cursor<'_, String> = it.into();
        assert_eq!(*converted, "Bob");
        assert!(core::ptr::eq(converted.get().unwrap(), direct_elem));
    }

    #[test]
    fn cursors_cross_threads() {
        fn assert_send_sync<S: Send + Sync>() {}
        assert_send_sync::<Cursor<'_, String>>();
        assert_send_sync::<CursorMut<'_, String>>();
        assert_send_sync::<crate::linked_lists::singly_linked_list::Iter<'_, String>>();

        let lst = names();
        let joined = std::thread::scope(|s| {
            s.spawn(|| lst.iter().map(String::as_str).collect::<Vec<_>>().join(","))
                .join()
                .unwrap()
        });
        assert_eq!(joined, "Alice,Bob,Copernicus");

        let mut lst = lst;
        std::thread::scope(|s| {
            let mut it = lst.begin_mut();
            s.spawn(move || {
                while !it.is_end() {
                    it.post_increment().push('?');
                }
            });
        });
        assert_eq!(lst.front().map(String::as_str), Some("Alice?"));
    }

    #[test]
    fn into_mut_outlives_cursor() {
        let mut lst: SinglyLinkedList<i32> = (0..2).collect();
        let front = lst.begin_mut().into_mut().unwrap();
        *front = 9;
        assert_eq!(lst.front(), Some(&9));
    }
}
