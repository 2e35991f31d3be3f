// Core algorithm exports
pub mod distance;
pub mod filters;
pub mod matcher;
pub mod recommendation;
pub mod scoring;
pub mod validation;

pub use distance::{resolve_distance, DEFAULT_DISTANCE_KM};
pub use filters::{agency_relationship, category_match, in_service_area, procurement_fit};
pub use matcher::Matcher;
pub use recommendation::{concerns_for, recommendation_for, urgency_concern};
pub use scoring::{
    budget_alignment, calculate_match_factors, classify_tier, days_until_closing,
    geographic_feasibility, round_score, timeline_score, weighted_total,
};
pub use validation::{parse_closing_date, ValidationError};

/// Trimmed, lowercased form used for every name comparison
#[inline]
pub(crate) fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Case-folded containment in either direction; blank values never match
#[inline]
pub(crate) fn contains_either_way(a: &str, b: &str) -> bool {
    !a.is_empty() && !b.is_empty() && (a.contains(b) || b.contains(a))
}

/// Alphanumeric words of a normalized value
pub(crate) fn words(value: &str) -> impl Iterator<Item = &str> {
    value
        .split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
}

/// Whether `phrase` occurs in `text` as a run of whole words
pub(crate) fn contains_phrase(text: &str, phrase: &str) -> bool {
    let text: Vec<&str> = words(text).collect();
    let phrase: Vec<&str> = words(phrase).collect();

    !phrase.is_empty() && text.windows(phrase.len()).any(|window| window == phrase.as_slice())
}
