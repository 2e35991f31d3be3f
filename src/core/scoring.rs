use chrono::{DateTime, Utc};
use crate::models::{BudgetRange, CapabilityProfile, MatchFactors, Opportunity, ScoringWeights, Tier};
use crate::core::{
    distance::resolve_distance,
    filters::{agency_relationship, category_match, in_service_area, procurement_fit},
};

/// Lowest total score that lands in the priority tier
pub const PRIORITY_THRESHOLD: u8 = 75;

/// Lowest total score that lands in the review tier
pub const REVIEW_THRESHOLD: u8 = 50;

/// Geographic score for a delivery outside the declared reach
const OUTSIDE_REACH_SCORE: u8 = 10;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Calculate the six factor scores for one bid against one profile
///
/// `now` is the single clock reading for the whole scoring call.
pub fn calculate_match_factors(
    opportunity: &Opportunity,
    profile: &CapabilityProfile,
    now: DateTime<Utc>,
) -> MatchFactors {
    let days = days_until_closing(opportunity.closing_date, now);

    MatchFactors {
        category_match: category_match(&opportunity.category, &profile.expertise),
        geographic_feasibility: geographic_feasibility(
            &opportunity.delivery_location,
            &profile.warehouse_location,
            &profile.geographic_reach,
        ),
        budget_alignment: budget_alignment(opportunity.budget, &profile.budget_range),
        agency_relationship: agency_relationship(
            &opportunity.procuring_entity,
            &profile.preferred_agencies,
        ),
        procurement_fit: procurement_fit(
            &opportunity.procurement_mode,
            &profile.preferred_procurement_modes,
        ),
        timeline: timeline_score(days, opportunity.delivery_days),
    }
}

/// Score logistics feasibility (10, 30, 50, 70, 85 or 100)
///
/// Distance is only resolved once the delivery location passes the reach gate.
pub fn geographic_feasibility(
    delivery_location: &str,
    warehouse_location: &str,
    geographic_reach: &[String],
) -> u8 {
    if !in_service_area(delivery_location, geographic_reach) {
        return OUTSIDE_REACH_SCORE;
    }

    let distance_km = resolve_distance(warehouse_location, delivery_location);
    distance_band(distance_km)
}

#[inline]
fn distance_band(distance_km: f64) -> u8 {
    if distance_km <= 20.0 {
        100
    } else if distance_km <= 50.0 {
        85
    } else if distance_km <= 100.0 {
        70
    } else if distance_km <= 200.0 {
        50
    } else {
        30
    }
}

/// Score a bid budget against the supplier's budget range (20 to 100)
///
/// The optimal window is `[2 x min, 0.7 x max]`. When that window is empty
/// every in-range budget scores 75.
pub fn budget_alignment(budget: f64, range: &BudgetRange) -> u8 {
    if budget < range.min {
        return if budget >= range.min * 0.5 { 40 } else { 20 };
    }

    if budget > range.max {
        return if budget <= range.max * 1.5 { 50 } else { 20 };
    }

    let optimal_min = range.min * 2.0;
    let optimal_max = range.max * 0.7;
    if budget >= optimal_min && budget <= optimal_max {
        100
    } else {
        75
    }
}

/// Fractional days from `now` until the closing date, negative once closed
#[inline]
pub fn days_until_closing(closing_date: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    (closing_date - now).num_milliseconds() as f64 / MILLIS_PER_DAY
}

/// Score urgency and delivery feasibility
///
/// Bids closing 7 to 21 days out are graded by the delivery window; the
/// 21 to 60 day stretch has no band of its own and falls back to 75.
pub fn timeline_score(days_until_closing: f64, delivery_days: i32) -> u8 {
    if days_until_closing < 3.0 {
        30
    } else if days_until_closing < 7.0 {
        60
    } else if days_until_closing <= 21.0 {
        if delivery_days <= 30 {
            100
        } else if delivery_days <= 60 {
            85
        } else {
            70
        }
    } else if days_until_closing > 60.0 {
        50
    } else {
        75
    }
}

/// Weighted sum of the factors, before rounding
pub fn weighted_total(factors: &MatchFactors, weights: &ScoringWeights) -> f64 {
    let hundredths = factors.category_match as u32 * weights.category_match
        + factors.geographic_feasibility as u32 * weights.geographic_feasibility
        + factors.budget_alignment as u32 * weights.budget_alignment
        + factors.agency_relationship as u32 * weights.agency_relationship
        + factors.procurement_fit as u32 * weights.procurement_fit
        + factors.timeline as u32 * weights.timeline;

    hundredths as f64 / 100.0
}

/// Round half up to an integer total in 0..=100
#[inline]
pub fn round_score(raw: f64) -> u8 {
    raw.round().clamp(0.0, 100.0) as u8
}

/// Map a total score onto its tier; lower bounds are inclusive
#[inline]
pub fn classify_tier(total_score: u8) -> Tier {
    if total_score >= PRIORITY_THRESHOLD {
        Tier::Priority
    } else if total_score >= REVIEW_THRESHOLD {
        Tier::Review
    } else {
        Tier::Low
    }
}
