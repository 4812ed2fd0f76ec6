//! Performance benchmarks for the Per-Diem Engine.
//!
//! This benchmark suite covers the engine at several trip lengths:
//! - Single-chunk per-diem breakdown
//! - Multi-day and month-long breakdowns
//! - Trip totals resolved against the bundled rate table
//! - Settlements over many confirmed trips
//! - The `/per-diem` endpoint end to end
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use chrono::{Duration, NaiveDate, NaiveDateTime};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use per_diem_engine::api::{AppState, create_router};
use per_diem_engine::calculation::{compute_per_diem, compute_trip_total, settle_confirmed_trips};
use per_diem_engine::config::{ConfigLoader, RateTable};
use per_diem_engine::models::Trip;

use axum::{body::Body, http::Request};
use tower::ServiceExt;

/// Loads the bundled rate table.
fn load_rates() -> RateTable {
    ConfigLoader::load("./config/rates")
        .expect("Failed to load config")
        .into_rate_table()
}

fn trip_start() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 3, 2)
        .unwrap()
        .and_hms_opt(8, 0, 0)
        .unwrap()
}

/// Creates a confirmed trip of the given length in hours.
fn create_trip(index: usize, hours: i64) -> Trip {
    let start = trip_start() + Duration::days(index as i64);
    let end = start + Duration::hours(hours);
    let (country, variant) = match index % 4 {
        0 => ("AT", None),
        1 => ("DE", Some("Grenzort".to_string())),
        2 => ("SK", Some("Bratislava".to_string())),
        _ => ("CH", None),
    };

    Trip {
        id: format!("trip_{:04}", index),
        user_id: "user_bench_001".to_string(),
        start: start.format("%Y-%m-%dT%H:%M").to_string(),
        end: end.format("%Y-%m-%dT%H:%M").to_string(),
        country: country.to_string(),
        variant,
        purpose: "Benchmark".to_string(),
        lodging_amount: Decimal::new(4500, 2),
        apply_diff: index % 2 == 0,
        is_ok: true,
        created_at: chrono::Utc::now(),
    }
}

/// Benchmark: per-diem breakdown by trip length.
fn bench_per_diem_scaling(c: &mut Criterion) {
    let rate = Decimal::new(3000, 2);
    let start = trip_start();

    let mut group = c.benchmark_group("per_diem");

    for hours in [5_i64, 30, 72, 24 * 7, 24 * 30].iter() {
        let end = start + Duration::hours(*hours);

        group.bench_with_input(BenchmarkId::new("hours", hours), hours, |b, _| {
            b.iter(|| black_box(compute_per_diem(black_box(start), black_box(end), rate)))
        });
    }

    group.finish();
}

/// Benchmark: trip total with rate resolution.
fn bench_trip_total(c: &mut Criterion) {
    let rates = load_rates();
    let trip = create_trip(2, 30);

    c.bench_function("trip_total", |b| {
        b.iter(|| black_box(compute_trip_total(black_box(&trip), &rates)))
    });
}

/// Benchmark: settlement over batches of confirmed trips.
fn bench_settlement(c: &mut Criterion) {
    let rates = load_rates();

    let mut group = c.benchmark_group("settlement");

    for trip_count in [1_usize, 10, 100].iter() {
        let trips: Vec<Trip> = (0..*trip_count).map(|i| create_trip(i, 30)).collect();

        group.throughput(Throughput::Elements(*trip_count as u64));
        group.bench_with_input(BenchmarkId::new("trips", trip_count), trip_count, |b, _| {
            b.iter(|| black_box(settle_confirmed_trips(&trips, "user_bench_001", &rates)))
        });
    }

    group.finish();
}

/// Benchmark: the `/per-diem` endpoint through the router.
fn bench_per_diem_endpoint(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(AppState::new(load_rates()));
    let body = serde_json::json!({
        "start": "2026-03-02T08:00",
        "end": "2026-03-05T14:00",
        "country": "SK",
        "variant": "Bratislava"
    })
    .to_string();

    c.bench_function("per_diem_endpoint", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/per-diem")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

criterion_group!(
    benches,
    bench_per_diem_scaling,
    bench_trip_total,
    bench_settlement,
    bench_per_diem_endpoint,
);
criterion_main!(benches);
