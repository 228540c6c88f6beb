use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use serde_json::{json, Value};
use tallykit_filters::{average_order_value, average_valid_measurements, count_valid_emails};

fn sample_orders(n: usize) -> Vec<Value> {
    (0..n)
        .map(|i| match i % 4 {
            0 => json!({"status": "cancelled", "amount": i}),
            1 => json!({"status": "paid", "amount": format!("{}.25", i)}),
            2 => json!({"status": "shipped"}),
            _ => json!({"amount": i as f64 * 1.5}),
        })
        .collect()
}

fn sample_emails(n: usize) -> Vec<Value> {
    (0..n)
        .map(|i| match i % 5 {
            0 => json!(format!("user{}@example.com", i)),
            1 => json!(format!("  first.last+{}@sub.domain.org ", i)),
            2 => json!("not-an-email"),
            3 => json!(i),
            _ => json!(format!("broken{}@domain.c", i)),
        })
        .collect()
}

fn sample_measurements(n: usize) -> Vec<Value> {
    (0..n)
        .map(|i| match i % 3 {
            0 => Value::Null,
            1 => json!(i as f64 / 10.0),
            _ => json!(format!("{}", i)),
        })
        .collect()
}

fn bench_filters(c: &mut Criterion) {
    let mut group = c.benchmark_group("filters");

    for size in [100, 10_000] {
        let orders = sample_orders(size);
        let emails = sample_emails(size);
        let measurements = sample_measurements(size);

        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("average_order_value/{}", size), |b| {
            b.iter(|| black_box(average_order_value(black_box(&orders))))
        });

        group.bench_function(format!("count_valid_emails/{}", size), |b| {
            b.iter(|| black_box(count_valid_emails(black_box(&emails))))
        });

        group.bench_function(format!("average_valid_measurements/{}", size), |b| {
            b.iter(|| black_box(average_valid_measurements(black_box(&measurements))))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_filters);
criterion_main!(benches);
