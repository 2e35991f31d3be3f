// Integration tests for BidFit

use bidfit::core::{Matcher, ValidationError};
use bidfit::models::{BudgetRange, CapabilityProfile, Opportunity, Tier};
use chrono::{DateTime, Duration, TimeZone, Utc};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 6, 8, 0, 0).unwrap()
}

fn create_test_profile() -> CapabilityProfile {
    CapabilityProfile {
        profile_id: "northstar".to_string(),
        company_name: "Northstar Medical Trading".to_string(),
        expertise: vec!["medical supplies".to_string()],
        warehouse_location: "Quezon City".to_string(),
        geographic_reach: vec!["Metro Manila".to_string(), "Antipolo".to_string()],
        budget_range: BudgetRange { min: 100_000.0, max: 1_000_000.0 },
        preferred_agencies: vec!["Department of Health".to_string()],
        preferred_procurement_modes: vec!["Small Value Procurement".to_string()],
    }
}

fn create_test_opportunity(reference: &str, closes_in: Duration) -> Opportunity {
    Opportunity {
        reference_number: reference.to_string(),
        title: format!("Supply and delivery {}", reference),
        category: "medical supplies".to_string(),
        budget: 500_000.0,
        delivery_location: "Antipolo".to_string(),
        procuring_entity: "Department of Health".to_string(),
        procurement_mode: "Small Value Procurement".to_string(),
        closing_date: now() + closes_in,
        delivery_days: 25,
    }
}

#[test]
fn test_integration_worked_example() {
    let matcher = Matcher::new();
    let scored = matcher
        .score_at(
            &create_test_opportunity("PB-2025-001", Duration::days(7)),
            &create_test_profile(),
            now(),
        )
        .unwrap();

    assert_eq!(scored.total_score, 96);
    assert_eq!(scored.tier, Tier::Priority);
    assert_eq!(
        scored.recommendation,
        "Strong match - 100% category alignment. Recommended for immediate bid preparation."
    );
    assert!(scored.concerns.is_empty());
    assert_eq!(scored.opportunity.reference_number, "PB-2025-001");
}

#[test]
fn test_integration_review_tier_with_urgency() {
    let mut opportunity = create_test_opportunity("PB-2025-002", Duration::hours(100));
    opportunity.category = "medical equipment".to_string();
    opportunity.delivery_location = "Cebu City".to_string();
    opportunity.budget = 150_000.0;
    opportunity.procurement_mode = "Public Bidding".to_string();

    let scored = Matcher::new()
        .score_at(&opportunity, &create_test_profile(), now())
        .unwrap();

    assert_eq!(scored.match_factors.category_match, 75);
    assert_eq!(scored.match_factors.geographic_feasibility, 10);
    assert_eq!(scored.match_factors.budget_alignment, 75);
    assert_eq!(scored.match_factors.procurement_fit, 60);
    assert_eq!(scored.match_factors.timeline, 60);
    assert_eq!(scored.total_score, 59);
    assert_eq!(scored.tier, Tier::Review);
    assert_eq!(
        scored.concerns,
        vec!["Closing in 5 days".to_string(), "Distant delivery location".to_string()]
    );
}

#[test]
fn test_integration_low_tier_concerns() {
    let mut opportunity = create_test_opportunity("PB-2025-003", Duration::days(90));
    opportunity.category = "office furniture".to_string();
    opportunity.delivery_location = "Cebu City".to_string();
    opportunity.budget = 2_000_000.0;
    opportunity.procuring_entity = "Acme Foundation".to_string();
    opportunity.procurement_mode = "Direct Contracting".to_string();

    let scored = Matcher::new()
        .score_at(&opportunity, &create_test_profile(), now())
        .unwrap();

    assert_eq!(scored.total_score, 16);
    assert_eq!(scored.tier, Tier::Low);
    assert_eq!(scored.recommendation, "Weak match - pursue only if strategically important.");
    assert_eq!(
        scored.concerns,
        vec![
            "Unrelated category".to_string(),
            "Outside service area".to_string(),
            "Budget mismatch".to_string(),
        ]
    );
}

#[test]
fn test_integration_closed_bid_is_still_scored() {
    let scored = Matcher::new()
        .score_at(
            &create_test_opportunity("PB-2024-999", Duration::days(-2)),
            &create_test_profile(),
            now(),
        )
        .unwrap();

    assert_eq!(scored.days_until_closing, -2.0);
    assert_eq!(scored.match_factors.timeline, 30);
    assert!(scored.concerns.iter().all(|c| !c.starts_with("Closing in")));
}

#[test]
fn test_integration_scoring_is_idempotent() {
    let matcher = Matcher::new();
    let profile = create_test_profile();
    let opportunity = create_test_opportunity("PB-2025-004", Duration::hours(30));

    let first = matcher.score_at(&opportunity, &profile, now()).unwrap();
    let second = matcher.score_at(&opportunity, &profile, now()).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_integration_ranked_priority() {
    let matcher = Matcher::new();
    let profile = create_test_profile();

    let mut weaker = create_test_opportunity("B", Duration::days(30));
    weaker.procurement_mode = "Public Bidding".to_string();

    let mut unrelated = create_test_opportunity("C", Duration::days(10));
    unrelated.category = "office furniture".to_string();
    unrelated.delivery_location = "Cebu City".to_string();

    let opportunities = vec![
        weaker,
        unrelated,
        create_test_opportunity("A", Duration::days(10)),
    ];

    let ranked = matcher
        .ranked_priority_at(&opportunities, &profile, now())
        .unwrap();

    let references: Vec<&str> = ranked
        .iter()
        .map(|s| s.opportunity.reference_number.as_str())
        .collect();
    assert_eq!(references, vec!["A", "B"]);
    assert!(ranked.windows(2).all(|w| w[0].total_score >= w[1].total_score));
}

#[test]
fn test_integration_batch_fails_on_invalid_record() {
    let mut broken = create_test_opportunity("BAD", Duration::days(10));
    broken.delivery_days = -1;

    let opportunities = vec![create_test_opportunity("OK", Duration::days(10)), broken];

    let err = Matcher::new()
        .score_all_at(&opportunities, &create_test_profile(), now())
        .unwrap_err();

    assert_eq!(err, ValidationError::NonPositiveDeliveryDays(-1));
}

#[test]
fn test_integration_empty_batch() {
    let scored = Matcher::new()
        .score_all_at(&[], &create_test_profile(), now())
        .unwrap();

    assert!(scored.is_empty());
}
