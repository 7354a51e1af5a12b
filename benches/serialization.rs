use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use json2text::{serialize, serialize_with_config, to_value, JsonValue, SerializeConfig};
use serde::Serialize;

#[derive(Serialize, Clone)]
struct User {
    id: u32,
    name: String,
    email: String,
    active: bool,
}

#[derive(Serialize, Clone)]
struct NestedData {
    id: u32,
    metadata: Metadata,
    tags: Vec<String>,
}

#[derive(Serialize, Clone)]
struct Metadata {
    created: String,
    updated: String,
    version: u32,
}

fn benchmark_serialize_flat(c: &mut Criterion) {
    let user = User {
        id: 123,
        name: "Alice".to_string(),
        email: "alice@example.com".to_string(),
        active: true,
    };
    let tree = to_value(&user).unwrap();

    c.bench_function("serialize_flat_object", |b| {
        b.iter(|| serialize(black_box(&tree)))
    });
}

fn benchmark_serialize_nested(c: &mut Criterion) {
    let data = NestedData {
        id: 1,
        metadata: Metadata {
            created: "2024-01-01".to_string(),
            updated: "2024-06-15".to_string(),
            version: 3,
        },
        tags: vec!["alpha".to_string(), "beta".to_string(), "gamma".to_string()],
    };
    let tree = to_value(&data).unwrap();

    c.bench_function("serialize_nested_tree", |b| {
        b.iter(|| serialize(black_box(&tree)))
    });
}

fn benchmark_serialize_wide_array(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialize_wide_array");

    for size in [10, 50, 100, 500].iter() {
        let users: Vec<User> = (0..*size)
            .map(|i| User {
                id: i,
                name: format!("User {}", i),
                email: format!("user{}@example.com", i),
                active: i % 2 == 0,
            })
            .collect();
        let tree = to_value(&users).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| serialize(black_box(&tree)))
        });
    }
    group.finish();
}

fn benchmark_serialize_bounded(c: &mut Criterion) {
    let items: Vec<JsonValue> = (0..1000).map(JsonValue::from).collect();
    let tree = JsonValue::from(items);
    let config = SerializeConfig::new()
        .with_max_array_items(100)
        .with_max_chars(2000);

    c.bench_function("serialize_bounded_array", |b| {
        b.iter(|| serialize_with_config(black_box(&tree), black_box(&config)))
    });
}

criterion_group!(
    benches,
    benchmark_serialize_flat,
    benchmark_serialize_nested,
    benchmark_serialize_wide_array,
    benchmark_serialize_bounded
);
criterion_main!(benches);
