//! The ring queue itself.

use crate::invariants::{
    debug_assert_bounded_len, debug_assert_cursor_in_range, debug_assert_slot_cleared,
};
use crate::storage::Storage;
use crate::{OverflowMode, QueueConfig, QueueError};

// =============================================================================
// INDEXING & SLOT-CLEARING STRATEGY
// =============================================================================
//
// The buffer holds `capacity + 1` fixed-size slots, with `head` (read
// cursor) and `tail` (write cursor) advanced modulo the slot count. The
// spare slot disambiguates full from empty without a separate counter:
//
// - `head == tail`                 ⟺ empty
// - `(tail + 1) % slots == head`   ⟺ full
// - `len = (tail + slots - head) % slots`, always in `[0, capacity]`
//
// Every slot outside the live window `[head, tail)` is kept zero-filled:
// create and clear zero the whole region, pop and overwrite-eviction zero
// the slot they retire. A push may therefore write fewer bytes than the
// configured element size and the remainder of the slot is guaranteed to
// read back as zeroes, never as a previous element's bytes.
//
// =============================================================================

/// Lifecycle state of a queue handle.
///
/// Transitioned only by [`RingQueue::create`]/[`RingQueue::create_in`]
/// (→ `Created`) and [`RingQueue::destroy`] (→ `Uninitialized`). Every
/// other operation requires `Created` and fails with
/// [`QueueError::NotCreated`] otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// No buffer bound; only `create`/`create_in` are legal.
    Uninitialized,
    /// Buffer bound and cursors valid; all operations are legal.
    Created,
}

/// Fixed-capacity circular queue over fixed-size byte slots.
///
/// A handle starts `Uninitialized` and is activated with [`create`] (owned
/// heap storage) or [`create_in`] (caller-supplied storage), used, then
/// retired with [`destroy`] — after which it can be created again. The
/// handle itself is `const`-constructible so it can live in a `static` for
/// targets without dynamic memory.
///
/// Not safe for concurrent access: all mutating operations take `&mut self`
/// and there is no internal locking. Sharing a queue across threads is the
/// caller's job, behind an external mutex.
///
/// [`create`]: RingQueue::create
/// [`create_in`]: RingQueue::create_in
/// [`destroy`]: RingQueue::destroy
pub struct RingQueue<'a> {
    /// Internal slot count (`capacity + 1`); zero while uninitialized.
    slots: usize,
    /// Byte size of each slot.
    elem_size: usize,
    /// Overflow policy for `push` on a full queue.
    mode: OverflowMode,
    /// The slot region and its ownership.
    storage: Storage<'a>,
    /// Read cursor.
    head: usize,
    /// Write cursor.
    tail: usize,
    /// Lifecycle guard checked at the top of every operation.
    status: Status,
}

impl<'a> RingQueue<'a> {
    /// Creates an uninitialized handle.
    ///
    /// `const` so handles can be placed in statics and created later.
    pub const fn new() -> Self {
        Self {
            slots: 0,
            elem_size: 0,
            mode: OverflowMode::Abandon,
            storage: Storage::Unbound,
            head: 0,
            tail: 0,
            status: Status::Uninitialized,
        }
    }

    // ---------------------------------------------------------------------
    // LIFECYCLE
    // ---------------------------------------------------------------------

    /// Creates the queue with internally allocated storage.
    ///
    /// Fails with `InvalidArgument` if capacity or element size is zero (or
    /// the byte size overflows), `AlreadyCreated` if the handle is already
    /// live (the existing state is untouched), and `OutOfMemory` if the
    /// allocation fails.
    pub fn create(&mut self, config: &QueueConfig) -> Result<(), QueueError> {
        let bytes = config.validate()?;
        if self.status == Status::Created {
            return Err(QueueError::AlreadyCreated);
        }
        let storage = Storage::allocate(bytes)?;
        self.bind(config, storage);
        Ok(())
    }

    /// Creates the queue over a caller-supplied region.
    ///
    /// The region must be at least [`QueueConfig::storage_bytes`] long or
    /// the call fails with `InvalidArgument`. The queue zeroes the prefix it
    /// uses and never frees the region; `destroy` merely relinquishes it.
    ///
    /// The region stays mutably borrowed for the handle's lifetime, so
    /// rebinding the *same* region after `destroy` requires dropping the
    /// handle first. Destroy-then-create cycles on one handle work with
    /// owned storage or a different region.
    pub fn create_in(
        &mut self,
        config: &QueueConfig,
        region: &'a mut [u8],
    ) -> Result<(), QueueError> {
        let bytes = config.validate()?;
        if self.status == Status::Created {
            return Err(QueueError::AlreadyCreated);
        }
        let storage = Storage::bind(region, bytes)?;
        self.bind(config, storage);
        Ok(())
    }

    /// Destroys the queue, releasing owned storage and resetting the handle
    /// to its uninitialized defaults.
    ///
    /// Fails with `NotCreated` if the handle is not live — a second call
    /// reports the error rather than crashing. Dropping the handle without
    /// calling this also releases owned storage.
    pub fn destroy(&mut self) -> Result<(), QueueError> {
        self.ensure_created()?;
        self.slots = 0;
        self.elem_size = 0;
        self.mode = OverflowMode::Abandon;
        self.storage = Storage::Unbound;
        self.head = 0;
        self.tail = 0;
        self.status = Status::Uninitialized;
        Ok(())
    }

    /// Internal: bind storage and reset cursors. Storage arrives zero-filled.
    fn bind(&mut self, config: &QueueConfig, storage: Storage<'a>) {
        self.slots = config.slot_count();
        self.elem_size = config.elem_size;
        self.mode = config.mode;
        self.storage = storage;
        self.head = 0;
        self.tail = 0;
        self.status = Status::Created;
    }

    // ---------------------------------------------------------------------
    // MUTATION
    // ---------------------------------------------------------------------

    /// Appends an element to the back of the queue.
    ///
    /// `elem` may be shorter than the configured element size; the unused
    /// remainder of the slot reads back as zeroes. A longer `elem` is a
    /// configuration mismatch and fails with `InvalidArgument` — elements
    /// are never truncated.
    ///
    /// On a full queue the overflow policy decides: `Abandon` fails with
    /// `Full` and mutates nothing; `Overwrite` silently discards the oldest
    /// element and then inserts. The evict-and-insert pair completes as a
    /// unit — the eviction step cannot fail.
    pub fn push(&mut self, elem: &[u8]) -> Result<(), QueueError> {
        self.ensure_created()?;
        if elem.is_empty() || elem.len() > self.elem_size {
            return Err(QueueError::InvalidArgument);
        }

        if self.raw_full() {
            match self.mode {
                OverflowMode::Abandon => return Err(QueueError::Full),
                OverflowMode::Overwrite => self.retire_front(),
            }
        }

        let tail = self.tail;
        let slot = self.slot_mut(tail);
        debug_assert_slot_cleared!(slot);
        slot[..elem.len()].copy_from_slice(elem);
        self.tail = self.advance(tail);
        debug_assert_bounded_len!(self.raw_len(), self.capacity());
        Ok(())
    }

    /// Removes the oldest element without returning it.
    ///
    /// Read it with [`front`](RingQueue::front) first if you need the bytes.
    /// Fails with `Empty` when the queue holds no elements.
    pub fn pop(&mut self) -> Result<(), QueueError> {
        self.ensure_created()?;
        if self.raw_empty() {
            return Err(QueueError::Empty);
        }
        self.retire_front();
        Ok(())
    }

    /// Discards all elements and re-zeroes the slot region.
    ///
    /// Capacity, element size, mode, and status are unchanged; afterwards
    /// the queue behaves as freshly created. O(capacity).
    pub fn clear(&mut self) -> Result<(), QueueError> {
        self.ensure_created()?;
        self.head = 0;
        self.tail = 0;
        let bytes = self.slots * self.elem_size;
        self.storage.bytes_mut()[..bytes].fill(0);
        Ok(())
    }

    /// Internal: zero the slot at head and advance the read cursor.
    fn retire_front(&mut self) {
        let head = self.head;
        self.slot_mut(head).fill(0);
        self.head = self.advance(head);
    }

    // ---------------------------------------------------------------------
    // INSPECTION
    // ---------------------------------------------------------------------

    /// Copies the oldest element into `out` without removing it.
    ///
    /// Copies `min(out.len(), elem_size)` bytes and returns the count. An
    /// empty `out` fails with `InvalidArgument`; an empty queue with
    /// `Empty`. Queue state is not mutated.
    pub fn front(&self, out: &mut [u8]) -> Result<usize, QueueError> {
        self.ensure_created()?;
        if out.is_empty() {
            return Err(QueueError::InvalidArgument);
        }
        if self.raw_empty() {
            return Err(QueueError::Empty);
        }
        let n = out.len().min(self.elem_size);
        out[..n].copy_from_slice(&self.slot(self.head)[..n]);
        Ok(n)
    }

    /// Returns whether the queue is full.
    ///
    /// `NotCreated` is reported as an error so callers can tell it apart
    /// from a valid `false`.
    pub fn is_full(&self) -> Result<bool, QueueError> {
        self.ensure_created()?;
        Ok(self.raw_full())
    }

    /// Returns whether the queue is empty.
    ///
    /// `NotCreated` is reported as an error so callers can tell it apart
    /// from a valid `false`.
    pub fn is_empty(&self) -> Result<bool, QueueError> {
        self.ensure_created()?;
        Ok(self.raw_empty())
    }

    /// Returns the number of stored elements, always ≤ capacity.
    pub fn len(&self) -> Result<usize, QueueError> {
        self.ensure_created()?;
        Ok(self.raw_len())
    }

    // ---------------------------------------------------------------------
    // ACCESSORS
    // ---------------------------------------------------------------------

    /// Logical capacity in elements; zero while uninitialized.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.saturating_sub(1)
    }

    /// Configured element size in bytes; zero while uninitialized.
    #[inline]
    pub fn elem_size(&self) -> usize {
        self.elem_size
    }

    /// Configured overflow policy.
    #[inline]
    pub fn mode(&self) -> OverflowMode {
        self.mode
    }

    /// Current lifecycle state.
    #[inline]
    pub fn status(&self) -> Status {
        self.status
    }

    /// Returns `true` once `create`/`create_in` has succeeded and `destroy`
    /// has not.
    #[inline]
    pub fn is_created(&self) -> bool {
        self.status == Status::Created
    }

    // ---------------------------------------------------------------------
    // INTERNALS
    // ---------------------------------------------------------------------

    #[inline]
    fn ensure_created(&self) -> Result<(), QueueError> {
        if self.status == Status::Created {
            Ok(())
        } else {
            Err(QueueError::NotCreated)
        }
    }

    #[inline]
    fn raw_empty(&self) -> bool {
        self.head == self.tail
    }

    #[inline]
    fn raw_full(&self) -> bool {
        (self.tail + 1) % self.slots == self.head
    }

    #[inline]
    fn raw_len(&self) -> usize {
        (self.tail + self.slots - self.head) % self.slots
    }

    /// Advance a cursor by one slot, wrapping at the slot count.
    #[inline]
    fn advance(&self, idx: usize) -> usize {
        debug_assert_cursor_in_range!(idx, self.slots);
        (idx + 1) % self.slots
    }

    #[inline]
    fn slot(&self, idx: usize) -> &[u8] {
        let start = idx * self.elem_size;
        &self.storage.bytes()[start..start + self.elem_size]
    }

    #[inline]
    fn slot_mut(&mut self, idx: usize) -> &mut [u8] {
        let start = idx * self.elem_size;
        let end = start + self.elem_size;
        &mut self.storage.bytes_mut()[start..end]
    }
}

impl Default for RingQueue<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RingQueue<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RingQueue")
            .field("status", &self.status)
            .field("capacity", &self.capacity())
            .field("elem_size", &self.elem_size)
            .field("mode", &self.mode)
            .field("head", &self.head)
            .field("tail", &self.tail)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn created(capacity: usize, elem_size: usize, mode: OverflowMode) -> RingQueue<'static> {
        let mut queue = RingQueue::new();
        queue
            .create(&QueueConfig::new(capacity, elem_size, mode))
            .unwrap();
        queue
    }

    #[test]
    fn test_push_front_pop_round_trip() {
        let mut queue = created(4, 4, OverflowMode::Abandon);

        queue.push(b"abcd").unwrap();
        let mut out = [0u8; 4];
        assert_eq!(queue.front(&mut out).unwrap(), 4);
        assert_eq!(&out, b"abcd");

        queue.pop().unwrap();
        assert!(queue.is_empty().unwrap());
    }

    #[test]
    fn test_full_and_empty_are_distinct() {
        let mut queue = created(1, 2, OverflowMode::Abandon);
        assert!(queue.is_empty().unwrap());
        assert!(!queue.is_full().unwrap());

        queue.push(b"xy").unwrap();
        assert!(!queue.is_empty().unwrap());
        assert!(queue.is_full().unwrap());
    }

    #[test]
    fn test_abandon_mode_rejects_on_full() {
        let mut queue = created(2, 1, OverflowMode::Abandon);
        queue.push(b"a").unwrap();
        queue.push(b"b").unwrap();
        assert_eq!(queue.push(b"c"), Err(QueueError::Full));
        assert_eq!(queue.len().unwrap(), 2);
    }

    #[test]
    fn test_overwrite_mode_evicts_oldest() {
        let mut queue = created(2, 1, OverflowMode::Overwrite);
        queue.push(b"a").unwrap();
        queue.push(b"b").unwrap();
        queue.push(b"c").unwrap();

        let mut out = [0u8; 1];
        queue.front(&mut out).unwrap();
        assert_eq!(&out, b"b");
        assert_eq!(queue.len().unwrap(), 2);
    }

    #[test]
    fn test_operations_require_create() {
        let mut queue = RingQueue::new();
        assert_eq!(queue.push(b"a"), Err(QueueError::NotCreated));
        assert_eq!(queue.pop(), Err(QueueError::NotCreated));
        assert_eq!(queue.clear(), Err(QueueError::NotCreated));
        assert_eq!(queue.len(), Err(QueueError::NotCreated));
        assert_eq!(queue.is_full(), Err(QueueError::NotCreated));
        assert_eq!(queue.is_empty(), Err(QueueError::NotCreated));
        assert_eq!(queue.destroy(), Err(QueueError::NotCreated));

        let mut out = [0u8; 1];
        assert_eq!(queue.front(&mut out), Err(QueueError::NotCreated));
    }

    #[test]
    fn test_oversized_element_is_rejected() {
        let mut queue = created(2, 2, OverflowMode::Abandon);
        assert_eq!(queue.push(b"abc"), Err(QueueError::InvalidArgument));
        assert!(queue.is_empty().unwrap());
    }

    #[test]
    fn test_short_write_is_zero_padded() {
        let mut queue = created(2, 4, OverflowMode::Abandon);
        queue.push(b"ab").unwrap();

        let mut out = [0xFFu8; 4];
        assert_eq!(queue.front(&mut out).unwrap(), 4);
        assert_eq!(&out, b"ab\0\0");
    }
}
