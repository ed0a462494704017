//! Backing storage for the slot buffer.
//!
//! The queue has exactly one buffer owner: itself (heap allocation released
//! on destroy) or the caller (borrowed region the queue never frees). The
//! variant is picked at create time and the rest of the queue is oblivious
//! to it.

use crate::QueueError;

/// Ownership of the contiguous slot region.
pub(crate) enum Storage<'a> {
    /// No region bound; the queue is not created.
    Unbound,
    /// Heap region owned by the queue.
    ///
    /// `Box<[u8]>` rather than `Vec<u8>`: the size is fixed at creation and
    /// never grows, so no capacity field is needed.
    Owned(Box<[u8]>),
    /// Caller-supplied region. The caller guarantees it stays valid for the
    /// queue handle's lifetime; the queue only ever zeroes and copies within
    /// the prefix it was sized for.
    Borrowed(&'a mut [u8]),
}

impl<'a> Storage<'a> {
    /// Allocates a zero-filled owned region of `bytes` bytes.
    ///
    /// Allocation failure is reported as `OutOfMemory` instead of aborting
    /// the process.
    pub(crate) fn allocate(bytes: usize) -> Result<Self, QueueError> {
        let mut buf = Vec::new();
        buf.try_reserve_exact(bytes)
            .map_err(|_| QueueError::OutOfMemory)?;
        buf.resize(bytes, 0u8);
        Ok(Self::Owned(buf.into_boxed_slice()))
    }

    /// Binds a caller-supplied region, zeroing the `bytes`-long prefix the
    /// queue will use. The region may be larger than required; the excess is
    /// left untouched.
    pub(crate) fn bind(region: &'a mut [u8], bytes: usize) -> Result<Self, QueueError> {
        if region.len() < bytes {
            return Err(QueueError::InvalidArgument);
        }
        region[..bytes].fill(0);
        Ok(Self::Borrowed(region))
    }

    /// The bound region, empty while unbound.
    #[inline]
    pub(crate) fn bytes(&self) -> &[u8] {
        match self {
            Self::Unbound => &[],
            Self::Owned(buf) => buf,
            Self::Borrowed(region) => region,
        }
    }

    /// Mutable view of the bound region, empty while unbound.
    #[inline]
    pub(crate) fn bytes_mut(&mut self) -> &mut [u8] {
        match self {
            Self::Unbound => &mut [],
            Self::Owned(buf) => buf,
            Self::Borrowed(region) => region,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocate_zero_fills() {
        let storage = Storage::allocate(16).unwrap();
        assert_eq!(storage.bytes().len(), 16);
        assert!(storage.bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_bind_rejects_undersized_region() {
        let mut region = [0xFFu8; 8];
        assert!(matches!(
            Storage::bind(&mut region, 16),
            Err(QueueError::InvalidArgument)
        ));
    }

    #[test]
    fn test_bind_zeroes_only_used_prefix() {
        let mut region = [0xFFu8; 24];
        let storage = Storage::bind(&mut region, 16).unwrap();
        assert!(storage.bytes()[..16].iter().all(|&b| b == 0));
        assert!(storage.bytes()[16..].iter().all(|&b| b == 0xFF));
    }
}
