//! Performance benchmarks for the contact book.
//!
//! These benchmarks measure the hot paths of the data model:
//! - Phone validation throughput
//! - Paginated iteration (snapshot cost included) at different book sizes
//! - Reverse phone lookup

use contact_book::{ContactBook, ContactRecord, PhoneNumber};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

/// Build a book with `count` records, each holding two phones.
fn seeded_book(count: usize) -> ContactBook {
    let mut book = ContactBook::new();
    for i in 0..count {
        let mut record = ContactRecord::new(format!("Contact {}", i));
        record.add_phone(format!("{:010}", i)).unwrap();
        record.add_phone(format!("{:010}", i + 5_000_000)).unwrap();
        book.add_record(record);
    }
    book
}

/// Benchmark phone number validation on accept and reject paths.
fn bench_phone_validation(c: &mut Criterion) {
    c.bench_function("phone_validation_accept", |b| {
        b.iter(|| PhoneNumber::new(black_box("5551234567")));
    });

    c.bench_function("phone_validation_reject", |b| {
        b.iter(|| PhoneNumber::new(black_box("555-123-4567")));
    });
}

/// Benchmark paging through books of different sizes.
fn bench_paging(c: &mut Criterion) {
    let mut group = c.benchmark_group("paging");

    for size in [100, 1_000, 10_000] {
        let book = seeded_book(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &book, |b, book| {
            b.iter(|| book.pages_of(black_box(5)).count());
        });
    }

    group.finish();
}

/// Benchmark reverse phone lookup in a mid-sized book (worst case: no match).
fn bench_find_by_phone(c: &mut Criterion) {
    let book = seeded_book(1_000);

    c.bench_function("find_by_phone_miss", |b| {
        b.iter(|| book.find_by_phone(black_box("9999999999")));
    });
}

criterion_group!(
    benches,
    bench_phone_validation,
    bench_paging,
    bench_find_by_phone
);
criterion_main!(benches);
