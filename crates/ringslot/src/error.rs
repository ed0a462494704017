//! Error types for queue operations.

use thiserror::Error;

/// Errors that can occur in queue operations.
///
/// Every fallible operation returns one of these synchronously; the queue is
/// left in a well-defined, unchanged state after any failed call. Retry
/// policy (e.g. for [`Full`](QueueError::Full)) belongs to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QueueError {
    /// An argument failed validation: empty input, an element larger than
    /// the configured slot size, or an undersized caller-supplied region.
    #[error("invalid argument")]
    InvalidArgument,

    /// The backing buffer could not be allocated.
    #[error("buffer allocation failed")]
    OutOfMemory,

    /// The queue has not been created, or has already been destroyed.
    #[error("queue is not created")]
    NotCreated,

    /// The queue is already created; destroy it before creating again.
    #[error("queue is already created")]
    AlreadyCreated,

    /// The queue holds no elements.
    #[error("queue is empty")]
    Empty,

    /// The queue is at capacity and the overflow policy rejects new elements.
    #[error("queue is full")]
    Full,
}

impl QueueError {
    /// Returns `true` if the condition clears on its own as the queue is
    /// used (e.g. `Full` after a pop, `Empty` after a push).
    #[inline]
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Full | Self::Empty)
    }

    /// Returns `true` if this error indicates caller misuse rather than a
    /// runtime condition.
    #[inline]
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidArgument | Self::NotCreated | Self::AlreadyCreated
        )
    }
}
