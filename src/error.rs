use thiserror::Error;

/// Result type used by all fallible `SlotVec` operations
pub type SlotResult<T> = Result<T, SlotError>;

/// Errors returned by `SlotVec`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SlotError {
    #[error("Invalid capacity: {0}")]
    InvalidArgument(isize),

    #[error("Index {index} out of range with capacity of {capacity}")]
    IndexOutOfRange { index: usize, capacity: usize },
}
