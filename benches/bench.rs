// Criterion benchmarks for BidFit

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use bidfit::core::{distance::resolve_distance, filters::category_match, Matcher};
use bidfit::models::{BudgetRange, CapabilityProfile, Opportunity};
use chrono::{Duration, Utc};

const CATEGORIES: &[&str] = &[
    "medical supplies",
    "medical equipment",
    "emergency response kits",
    "office furniture",
    "it equipment",
];

const LOCATIONS: &[&str] = &["Antipolo", "Manila", "Makati", "Cebu City", "Laguna", "Baguio"];

fn create_opportunity(id: usize) -> Opportunity {
    Opportunity {
        reference_number: format!("PB-{:05}", id),
        title: format!("Procurement {}", id),
        category: CATEGORIES[id % CATEGORIES.len()].to_string(),
        budget: 50_000.0 + (id % 40) as f64 * 50_000.0,
        delivery_location: LOCATIONS[id % LOCATIONS.len()].to_string(),
        procuring_entity: if id % 3 == 0 {
            "Department of Health"
        } else {
            "Bureau of Fire Protection"
        }
        .to_string(),
        procurement_mode: if id % 2 == 0 { "Small Value Procurement" } else { "Public Bidding" }
            .to_string(),
        closing_date: Utc::now() + Duration::days((id % 90) as i64),
        delivery_days: 15 + (id % 60) as i32,
    }
}

fn create_profile() -> CapabilityProfile {
    CapabilityProfile {
        profile_id: "northstar".to_string(),
        company_name: "Northstar Medical Trading".to_string(),
        expertise: vec!["medical supplies".to_string(), "laboratory reagents".to_string()],
        warehouse_location: "Quezon City".to_string(),
        geographic_reach: vec![
            "Metro Manila".to_string(),
            "Antipolo".to_string(),
            "Laguna".to_string(),
        ],
        budget_range: BudgetRange { min: 100_000.0, max: 1_000_000.0 },
        preferred_agencies: vec!["Department of Health".to_string()],
        preferred_procurement_modes: vec!["Small Value Procurement".to_string()],
    }
}

fn bench_resolve_distance(c: &mut Criterion) {
    c.bench_function("resolve_distance", |b| {
        b.iter(|| resolve_distance(black_box("Quezon City"), black_box("Antipolo")));
    });
}

fn bench_category_match(c: &mut Criterion) {
    let expertise = create_profile().expertise;

    c.bench_function("category_match", |b| {
        b.iter(|| category_match(black_box("emergency response kits"), black_box(&expertise)));
    });
}

fn bench_score(c: &mut Criterion) {
    let matcher = Matcher::new();
    let profile = create_profile();
    let opportunity = create_opportunity(0);

    c.bench_function("score_single", |b| {
        b.iter(|| matcher.score(black_box(&opportunity), black_box(&profile)));
    });
}

fn bench_score_all(c: &mut Criterion) {
    let matcher = Matcher::new();
    let profile = create_profile();

    let mut group = c.benchmark_group("scoring");

    for count in [10usize, 100, 1000, 5000].iter() {
        let opportunities: Vec<Opportunity> = (0..*count).map(create_opportunity).collect();

        group.bench_with_input(BenchmarkId::new("score_all", count), count, |b, _| {
            b.iter(|| matcher.score_all(black_box(&opportunities), black_box(&profile)));
        });

        group.bench_with_input(BenchmarkId::new("ranked_priority", count), count, |b, _| {
            b.iter(|| matcher.ranked_priority(black_box(&opportunities), black_box(&profile)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_resolve_distance,
    bench_category_match,
    bench_score,
    bench_score_all
);

criterion_main!(benches);
