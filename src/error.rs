use thiserror::Error;

/// Errors returned by the checked cursor operations.
///
/// The unchecked counterparts (`move_next`, `*cursor`) panic instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    #[error("the cursor is at the end of the list")]
    EndOfList,
}
