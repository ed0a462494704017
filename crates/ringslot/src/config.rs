//! Configuration for RingQueue.

use crate::QueueError;

/// Policy describing how `push` behaves on a full queue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OverflowMode {
    /// Reject the incoming element, leaving the queue untouched.
    #[default]
    Abandon,
    /// Evict the oldest element to make room for the incoming one.
    Overwrite,
}

/// Configuration for a [`RingQueue`](crate::RingQueue).
///
/// Fixed at creation: the queue never resizes. One extra slot beyond
/// `capacity` is allocated internally so full and empty states stay
/// distinguishable without a separate counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueConfig {
    /// Logical capacity in elements (must be > 0).
    pub capacity: usize,
    /// Size in bytes of each stored element (must be > 0).
    pub elem_size: usize,
    /// Policy applied when pushing into a full queue.
    pub mode: OverflowMode,
}

impl QueueConfig {
    /// Creates a new configuration with custom settings.
    pub const fn new(capacity: usize, elem_size: usize, mode: OverflowMode) -> Self {
        Self {
            capacity,
            elem_size,
            mode,
        }
    }

    /// Returns the internal slot count (`capacity + 1`).
    #[inline]
    pub const fn slot_count(&self) -> usize {
        self.capacity + 1
    }

    /// Returns the byte size of the backing region this configuration
    /// needs: `(capacity + 1) * elem_size`.
    ///
    /// Callers of [`RingQueue::create_in`](crate::RingQueue::create_in) size
    /// their region with this.
    #[inline]
    pub const fn storage_bytes(&self) -> usize {
        self.slot_count() * self.elem_size
    }

    /// Validates the configuration and returns the required storage size.
    ///
    /// Rejects zero capacity, zero element size, and configurations whose
    /// byte size does not fit in `usize`.
    pub(crate) fn validate(&self) -> Result<usize, QueueError> {
        if self.capacity == 0 || self.elem_size == 0 {
            return Err(QueueError::InvalidArgument);
        }
        self.capacity
            .checked_add(1)
            .and_then(|slots| slots.checked_mul(self.elem_size))
            .ok_or(QueueError::InvalidArgument)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_bytes() {
        let config = QueueConfig::new(3, 4, OverflowMode::Abandon);
        assert_eq!(config.slot_count(), 4);
        assert_eq!(config.storage_bytes(), 16);
    }

    #[test]
    fn test_validate_rejects_zero_fields() {
        let zero_cap = QueueConfig::new(0, 4, OverflowMode::Abandon);
        assert_eq!(zero_cap.validate(), Err(QueueError::InvalidArgument));

        let zero_elem = QueueConfig::new(4, 0, OverflowMode::Abandon);
        assert_eq!(zero_elem.validate(), Err(QueueError::InvalidArgument));
    }

    #[test]
    fn test_validate_rejects_byte_overflow() {
        let huge = QueueConfig::new(usize::MAX, 2, OverflowMode::Abandon);
        assert_eq!(huge.validate(), Err(QueueError::InvalidArgument));
    }
}
