//! Debug assertion macros for queue structural invariants.
//!
//! Only active in debug builds (`debug_assert!`), so there is zero overhead
//! in release builds. These stand in for a logging layer: when an invariant
//! breaks in development, the failure names the broken property directly.

// =============================================================================
// Cursor Range
// =============================================================================

/// Assert that a cursor index lies inside the slot array.
///
/// **Invariant**: `head, tail ∈ [0, slot_count)`
///
/// Used in: `advance()` before wrapping
macro_rules! debug_assert_cursor_in_range {
    ($idx:expr, $slots:expr) => {
        debug_assert!(
            $idx < $slots,
            "cursor {} outside slot range [0, {})",
            $idx,
            $slots
        )
    };
}

// =============================================================================
// Bounded Count
// =============================================================================

/// Assert that the element count never exceeds the logical capacity.
///
/// **Invariant**: `(tail + slots - head) % slots ≤ capacity`
///
/// Used in: `push()` after advancing tail
macro_rules! debug_assert_bounded_len {
    ($len:expr, $capacity:expr) => {
        debug_assert!(
            $len <= $capacity,
            "element count {} exceeds capacity {}",
            $len,
            $capacity
        )
    };
}

// =============================================================================
// Slot Hygiene
// =============================================================================

/// Assert that a slot about to receive an element holds only zeroes.
///
/// **Invariant**: every slot outside the live window `[head, tail)` is
/// zero-filled — established at create and maintained by pop/evict/clear.
/// A short write relies on this to leave zero padding, not stale bytes.
///
/// Used in: `push()` before copying into the slot at tail
macro_rules! debug_assert_slot_cleared {
    ($slot:expr) => {
        debug_assert!(
            $slot.iter().all(|&b| b == 0),
            "reusing a slot that was not cleared"
        )
    };
}

// =============================================================================
// Re-exports for crate-internal use
// =============================================================================

pub(crate) use debug_assert_bounded_len;
pub(crate) use debug_assert_cursor_in_range;
pub(crate) use debug_assert_slot_cleared;
