pub use crate::error::Error;
pub use crate::linked_lists::{Cursor, CursorMut, SinglyLinkedList};
pub use crate::traits::{
    iter::{Iterable, IterableMut},
    sequence::{ForwardCursor, ForwardSequence},
};
