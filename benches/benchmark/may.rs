use crate::common::{configure_criterion, simulate_connect, simulate_query, Connection, DomainError};
use criterion::{criterion_group, BenchmarkId, Criterion};
use may_rail::{handler, msg, May, May2, MayError};
use std::hint::black_box;

pub fn bench_invoke_success(c: &mut Criterion) {
    let may = May2::<&str, u16>::new();

    c.bench_function("may/invoke_success", |b| {
        b.iter(|| black_box(may.invoke(black_box(("localhost", 5432)), true, &msg!())))
    });

    c.bench_function("may/result_baseline_success", |b| {
        b.iter(|| {
            let result: Result<(&str, u16), DomainError> = Ok(black_box(("localhost", 5432)));
            black_box(result.unwrap_or_default())
        })
    });
}

pub fn bench_invoke_failure(c: &mut Criterion) {
    c.bench_function("may/invoke_failure_no_context", |b| {
        b.iter(|| {
            let may = May::<u16>::new();
            black_box(may.invoke(0, Some(DomainError::Network("timeout".to_string())), &msg!()));
            black_box(may)
        })
    });

    c.bench_function("may/invoke_failure_templated", |b| {
        b.iter(|| {
            let may = May::<u16>::new();
            let host = "db-primary-01.company.local";
            black_box(may.invoke(
                0,
                Some(DomainError::Network("timeout".to_string())),
                &msg!("connecting to %s:%d", host, 5432),
            ));
            black_box(may)
        })
    });
}

pub fn bench_handler_fanout(c: &mut Criterion) {
    let mut group = c.benchmark_group("may/handler_fanout");

    for count in [0usize, 1, 4, 16] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            let handlers = (0..count).map(|_| {
                handler(|error: &MayError, _| {
                    black_box(error);
                })
            });
            let may = May::<u16>::new().with_handlers(handlers);
            b.iter(|| black_box(may.invoke(0, false, &msg!("check failed"))))
        });
    }
    group.finish();
}

pub fn bench_mixed_service(c: &mut Criterion) {
    c.bench_function("may/mixed_95percent_success", |b| {
        b.iter(|| {
            let may = May::<Connection>::new();
            for id in 0..100u16 {
                let conn = may.invoke_result(simulate_connect(id), &msg!("connecting to node %d", id));
                black_box(simulate_query(&conn).is_ok());
            }
            black_box(may.collect_as_error())
        })
    });
}

criterion_group! {
    name = may_benches;
    config = configure_criterion();
    targets =
        bench_invoke_success,
        bench_invoke_failure,
        bench_handler_fanout,
        bench_mixed_service
}
