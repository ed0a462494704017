//! RingSlot - Fixed-Capacity Slotted Ring Queue
//!
//! A bounded circular queue over fixed-size byte slots, built for embedded
//! and resource-constrained use: no resizing, no blocking, and an explicit
//! create/use/destroy lifecycle so a single pre-allocated handle can be
//! cycled without dynamic memory churn.
//!
//! # Key Features
//!
//! - Two overflow policies: reject-on-full ([`OverflowMode::Abandon`]) or
//!   evict-oldest ([`OverflowMode::Overwrite`])
//! - Optional caller-supplied backing storage (the queue never frees memory
//!   it did not allocate)
//! - `const` handle construction for `static` placement
//! - Lifecycle misuse (use-before-create, double-create, double-destroy)
//!   surfaces as typed errors, never undefined behavior
//!
//! All operations are synchronous and O(1) except `clear` and `destroy`,
//! which are O(capacity). The queue is single-threaded by design: sharing
//! one across threads requires an external mutual-exclusion wrapper.
//!
//! # Example
//!
//! ```
//! use ringslot_rs::{OverflowMode, QueueConfig, RingQueue};
//!
//! let mut queue = RingQueue::new();
//! queue.create(&QueueConfig::new(3, 4, OverflowMode::Abandon)).unwrap();
//!
//! queue.push(b"aaaa").unwrap();
//! queue.push(b"bbbb").unwrap();
//!
//! let mut out = [0u8; 4];
//! queue.front(&mut out).unwrap();
//! assert_eq!(&out, b"aaaa");
//!
//! queue.pop().unwrap();
//! assert_eq!(queue.len().unwrap(), 1);
//!
//! queue.destroy().unwrap();
//! ```

mod config;
mod error;
mod invariants;
mod queue;
mod storage;

pub use config::{OverflowMode, QueueConfig};
pub use error::QueueError;
pub use queue::{RingQueue, Status};
