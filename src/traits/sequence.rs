//! Forward traversal as seen by generic algorithms: a position that can be
//! compared, advanced, and read, and a sequence that hands out a begin/end pair.

use crate::linked_lists::{Cursor, CursorMut, SinglyLinkedList};

pub trait ForwardCursor: PartialEq {
    type Item;

    fn is_end(&self) -> bool;

    /// Advances one node. Must not be called at the end position.
    fn move_next(&mut self);

    fn get(&self) -> Option<&Self::Item>;
}

pub trait ForwardSequence {
    type Item;
    type Cursor<'a>: ForwardCursor<Item = Self::Item> + Clone + 'a
    where
        Self: 'a;

    fn begin(&self) -> Self::Cursor<'_>;
    fn end(&self) -> Self::Cursor<'_>;
}

impl<'a, T> ForwardCursor for Cursor<'a, T> {
    type Item = T;

    fn is_end(&self) -> bool {
        Cursor::is_end(self)
    }

    fn move_next(&mut self) {
        Cursor::move_next(self);
    }

    fn get(&self) -> Option<&T> {
        Cursor::get(self)
    }
}

impl<'a, T> ForwardCursor for CursorMut<'a, T> {
    type Item = T;

    fn is_end(&self) -> bool {
        CursorMut::is_end(self)
    }

    fn move_next(&mut self) {
        CursorMut::move_next(self);
    }

    fn get(&self) -> Option<&T> {
        CursorMut::get(self)
    }
}

impl<T> ForwardSequence for SinglyLinkedList<T> {
    type Item = T;
    type Cursor<'a> = Cursor<'a, T> where T: 'a;

    fn begin(&self) -> Cursor<'_, T> {
        SinglyLinkedList::begin(self)
    }

    fn end(&self) -> Cursor<'_, T> {
        SinglyLinkedList::end(self)
    }
}

/// Number of `move_next` calls needed to get from `first` to `last`.
///
/// `last` must be reachable from `first`.
pub fn distance<C: ForwardCursor>(mut first: C, last: &C) -> usize {
    let mut n = 0;
    while first != *last {
        first.move_next();
        n += 1;
    }
    n
}

pub fn for_each<C, F>(mut first: C, last: &C, mut f: F)
where
    C: ForwardCursor,
    F: FnMut(&C::Item),
{
    while first != *last {
        if let Some(item) = first.get() {
            f(item);
        }
        first.move_next();
    }
}

/// Clones every item in `[first, last)` into `sink`, in traversal order.
pub fn copy_into<C, E>(first: C, last: &C, sink: &mut E)
where
    C: ForwardCursor,
    C::Item: Clone,
    E: Extend<C::Item>,
{
    for_each(first, last, |item| sink.extend(Some(item.clone())));
}
