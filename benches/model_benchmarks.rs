//! Performance benchmarks for the shift roster engine.
//!
//! Covers the two halves of a run that this crate owns:
//! - Building the model for the reference scenario and for larger staffs
//! - Evaluating and decoding a sample
//! - The `POST /roster` round trip through the router
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use shift_roster::api::{create_router, AppState};
use shift_roster::config::{ConfigLoader, EmployeePair};
use shift_roster::decoding::decode;
use shift_roster::formulation::{build_scenario_model, ModelBuilder};
use shift_roster::models::{Assignment, PreferenceTable, Sample, SampleSet, ShiftVar};

use axum::{body::Body, http::Request};
use tower::ServiceExt;

fn load_reference() -> ConfigLoader {
    ConfigLoader::load("./config/reference").expect("Failed to load config")
}

/// Feasible reference roster: Anna+Bill, Diane+Frank, Erica+Harriet, Chris+George.
fn reference_assignment() -> Assignment {
    [
        ("Anna", 0),
        ("Bill", 0),
        ("Chris", 3),
        ("Diane", 1),
        ("Erica", 2),
        ("Frank", 1),
        ("George", 3),
        ("Harriet", 2),
    ]
    .iter()
    .flat_map(|(name, pick)| (0..4).map(move |shift| (ShiftVar::new(*name, shift), shift == *pick)))
    .collect()
}

/// Synthetic staff of `count` employees with rotating preferences.
fn synthetic_staff(count: usize, num_shifts: usize) -> PreferenceTable {
    (0..count)
        .map(|i| {
            let prefs = (0..num_shifts)
                .map(|s| ((i + s) % num_shifts) as i64 + 1)
                .collect();
            (format!("emp_{:04}", i), prefs)
        })
        .collect()
}

fn bench_build_reference(c: &mut Criterion) {
    let config = load_reference();

    c.bench_function("build_reference_model", |b| {
        b.iter(|| black_box(build_scenario_model(black_box(config.scenario())).unwrap()))
    });
}

fn bench_evaluate_and_decode(c: &mut Criterion) {
    let model = load_reference().build_model().unwrap();
    let assignment = reference_assignment();
    let sample = Sample::from_assignment(&assignment, true);

    c.bench_function("evaluate_reference", |b| {
        b.iter(|| black_box(model.evaluate(black_box(&assignment))))
    });

    c.bench_function("decode_reference_sample", |b| {
        b.iter(|| {
            let assignment = Assignment::from_sample(black_box(&sample)).unwrap();
            black_box(decode(&assignment, 4).unwrap())
        })
    });
}

/// Builder scaling over staff size with 7 shifts and one pair rule each.
fn bench_build_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_scaling");

    for count in [8usize, 32, 128, 512] {
        let staff = synthetic_staff(count, 7);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("employees", count), &staff, |b, staff| {
            b.iter(|| {
                let model = ModelBuilder::new(staff, 7)
                    .with_headcount(count / 7)
                    .with_exclusion(EmployeePair::new("emp_0000", "emp_0001"))
                    .with_lockstep(EmployeePair::new("emp_0002", "emp_0003"))
                    .build()
                    .unwrap();
                black_box(model)
            })
        });
    }

    group.finish();
}

fn bench_roster_endpoint(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(AppState::new(load_reference()));
    let samples = SampleSet::new(vec![Sample::from_assignment(&reference_assignment(), true)]);
    let body = serde_json::to_string(&samples).unwrap();

    c.bench_function("roster_endpoint", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/roster")
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
    bench_build_reference,
    bench_evaluate_and_decode,
    bench_build_scaling,
    bench_roster_endpoint
);
criterion_main!(benches);
