use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use limelight_roster::{RawEntry, Record, filter_by_name, normalize_all};

const FIRST_NAMES: [&str; 8] = [
    "Alice", "Bob", "Carol", "Dan", "Erin", "Frank", "Grace", "Heidi",
];
const LAST_NAMES: [&str; 8] = [
    "Smith", "Jones", "Moore", "Brown", "Stone", "Young", "Lang", "Andersen",
];

fn synthetic_roster(n: usize) -> Vec<Record> {
    normalize_all((0..n).map(|i| RawEntry {
        id: i as i64,
        first: FIRST_NAMES[i % FIRST_NAMES.len()].to_string(),
        last: LAST_NAMES[(i / FIRST_NAMES.len()) % LAST_NAMES.len()].to_string(),
        gender: "other".to_string(),
        dob: "1980-01-01".to_string(),
        country: "France".to_string(),
        picture: String::new(),
        description: String::new(),
    }))
}

fn bench_filter_by_name(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_by_name");

    for size in [100usize, 1_000, 10_000] {
        let records = synthetic_roster(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(size),
            &records,
            |b, records| {
                b.iter(|| filter_by_name(black_box(records), black_box("an")));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_filter_by_name);
criterion_main!(benches);
