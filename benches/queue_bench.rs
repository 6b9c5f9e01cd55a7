use circular_queue::{CircularQueue, Mask, MaskedQueue};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const CAP: usize = 65536;

fn exact_queue(c: &mut Criterion) {
    c.bench_function("exact queue", |b| {
        let mut queue = CircularQueue::<i64>::new(CAP);
        b.iter(|| {
            for i in 0..CAP as i64 {
                black_box(queue.push(i));
            }
            while let Some(v) = queue.pop() {
                black_box(v);
            }
        })
    });
}

fn masked_queue(c: &mut Criterion) {
    c.bench_function("masked queue", |b| {
        let mut queue = MaskedQueue::<i64>::with_indexer(Mask::new(CAP).unwrap());
        b.iter(|| {
            for i in 0..CAP as i64 {
                black_box(queue.push(i));
            }
            while let Some(v) = queue.pop() {
                black_box(v);
            }
        })
    });
}

criterion_group!(queue_bench, exact_queue, masked_queue);
criterion_main!(queue_bench);
