use crate::common::configure_criterion;
use criterion::{criterion_group, Criterion};
use may_rail::types::Cancelled;
use may_rail::{invoke, invoke_with, CallOptions, Signal};
use std::hint::black_box;
use std::time::Duration;

pub fn bench_invoke_completes(c: &mut Criterion) {
    let background = Signal::background();

    c.bench_function("invoke/background", |b| {
        b.iter(|| {
            let result: Result<u64, Cancelled> = invoke(&background, || Ok(black_box(21) * 2));
            black_box(result)
        })
    });

    c.bench_function("invoke/direct_call_baseline", |b| {
        b.iter(|| {
            let result: Result<u64, Cancelled> = (|| Ok(black_box(21) * 2))();
            black_box(result)
        })
    });
}

pub fn bench_invoke_with_deadline(c: &mut Criterion) {
    c.bench_function("invoke/with_timeout", |b| {
        b.iter(|| {
            let (signal, _guard) =
                Signal::with_timeout(&Signal::background(), Duration::from_secs(5));
            let result: Result<u64, Cancelled> = invoke(&signal, || Ok(black_box(21) * 2));
            black_box(result)
        })
    });

    let options = CallOptions::new()
        .with_timeout(Duration::from_secs(5))
        .with_timeout(Duration::from_secs(1));

    c.bench_function("invoke/with_options", |b| {
        b.iter(|| {
            let result: Result<u64, Cancelled> = invoke_with(|| Ok(black_box(21) * 2), &options);
            black_box(result)
        })
    });
}

pub fn bench_signal_tree(c: &mut Criterion) {
    c.bench_function("invoke/signal_child_cancel", |b| {
        b.iter(|| {
            let (parent, handle) = Signal::with_cancel(&Signal::background());
            let (child, _guard) = Signal::with_timeout(&parent, Duration::from_secs(5));
            handle.cancel();
            black_box(child.err())
        })
    });
}

criterion_group! {
    name = invoke_benches;
    config = configure_criterion();
    targets = bench_invoke_completes, bench_invoke_with_deadline, bench_signal_tree
}
