extern crate alloc;

pub mod error;
pub mod linked_lists;
pub mod prelude;
pub mod traits;

pub use error::Error;
pub use linked_lists::{Cursor, CursorMut, SinglyLinkedList};
