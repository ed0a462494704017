use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ringslot_rs::{OverflowMode, QueueConfig, RingQueue};

const OPS: u64 = 100_000;

fn bench_push_front_pop(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_front_pop");
    group.throughput(Throughput::Elements(OPS));

    for elem_size in [8usize, 64, 256] {
        group.bench_with_input(
            BenchmarkId::from_parameter(elem_size),
            &elem_size,
            |b, &elem_size| {
                let mut queue = RingQueue::new();
                queue
                    .create(&QueueConfig::new(1024, elem_size, OverflowMode::Abandon))
                    .unwrap();
                let elem = vec![0xABu8; elem_size];
                let mut out = vec![0u8; elem_size];

                b.iter(|| {
                    for _ in 0..OPS {
                        queue.push(black_box(&elem)).unwrap();
                        queue.front(&mut out).unwrap();
                        queue.pop().unwrap();
                    }
                    black_box(&out);
                });
            },
        );
    }

    group.finish();
}

fn bench_overwrite_saturated(c: &mut Criterion) {
    let mut group = c.benchmark_group("overwrite");
    group.throughput(Throughput::Elements(OPS));

    // Every push takes the evict-then-insert path.
    group.bench_function("saturated_push", |b| {
        let mut queue = RingQueue::new();
        queue
            .create(&QueueConfig::new(1024, 64, OverflowMode::Overwrite))
            .unwrap();
        let elem = [0xCDu8; 64];
        while !queue.is_full().unwrap() {
            queue.push(&elem).unwrap();
        }

        b.iter(|| {
            for _ in 0..OPS {
                queue.push(black_box(&elem)).unwrap();
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_push_front_pop, bench_overwrite_saturated);
criterion_main!(benches);
