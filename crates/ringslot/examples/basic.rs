//! Basic RingQueue walkthrough.
//!
//! Demonstrates the create/use/destroy lifecycle, both overflow policies,
//! and caller-supplied backing storage.
//!
//! Run with: cargo run --example basic

use ringslot_rs::{OverflowMode, QueueConfig, RingQueue};

fn main() {
    println!("=== RingQueue Examples ===\n");

    example_abandon_mode();
    example_overwrite_mode();
    example_external_storage();
}

/// Reject-on-full: the queue refuses new elements at capacity.
fn example_abandon_mode() {
    println!("1. Abandon mode");
    println!("   ------------");

    let mut queue = RingQueue::new();
    queue
        .create(&QueueConfig::new(3, 4, OverflowMode::Abandon))
        .unwrap();

    for elem in [b"aaaa", b"bbbb", b"cccc"] {
        queue.push(elem).unwrap();
    }
    println!("   Pushed 3 elements, len = {}", queue.len().unwrap());

    match queue.push(b"dddd") {
        Err(err) => println!("   Fourth push rejected: {err}"),
        Ok(()) => unreachable!(),
    }

    queue.destroy().unwrap();
    println!();
}

/// Evict-oldest: the queue always admits new elements, dropping from the
/// front when full.
fn example_overwrite_mode() {
    println!("2. Overwrite mode");
    println!("   --------------");

    let mut queue = RingQueue::new();
    queue
        .create(&QueueConfig::new(3, 4, OverflowMode::Overwrite))
        .unwrap();

    for elem in [b"aaaa", b"bbbb", b"cccc", b"dddd"] {
        queue.push(elem).unwrap();
    }

    let mut out = [0u8; 4];
    queue.front(&mut out).unwrap();
    println!(
        "   Pushed 4 elements into capacity 3; oldest survivor = {:?}",
        std::str::from_utf8(&out).unwrap()
    );

    queue.destroy().unwrap();
    println!();
}

/// Caller-supplied storage: no allocation inside the queue, suitable for
/// static or pre-carved regions.
fn example_external_storage() {
    println!("3. Caller-supplied storage");
    println!("   -----------------------");

    let config = QueueConfig::new(4, 8, OverflowMode::Abandon);
    let mut region = vec![0u8; config.storage_bytes()];
    println!("   Region size: {} bytes", region.len());

    let mut queue = RingQueue::new();
    queue.create_in(&config, &mut region).unwrap();

    for i in 0..4u64 {
        queue.push(&i.to_le_bytes()).unwrap();
    }

    let mut drained = Vec::new();
    while !queue.is_empty().unwrap() {
        let mut out = [0u8; 8];
        queue.front(&mut out).unwrap();
        drained.push(u64::from_le_bytes(out));
        queue.pop().unwrap();
    }
    println!("   Drained: {drained:?}");

    queue.destroy().unwrap();
    println!();
}
