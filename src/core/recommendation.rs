use crate::models::{MatchFactors, Tier};

/// Factor threshold below which a review-tier bid gets an itemized concern
const REVIEW_CONCERN_THRESHOLD: u8 = 50;

/// Factor threshold below which a low-tier bid gets an itemized concern
const LOW_CONCERN_THRESHOLD: u8 = 30;

/// Closing windows shorter than this many days get an urgency warning
const URGENT_WITHIN_DAYS: f64 = 7.0;

/// Human-readable recommendation for a tier
pub fn recommendation_for(tier: Tier, factors: &MatchFactors) -> String {
    match tier {
        Tier::Priority => format!(
            "Strong match - {}% category alignment. Recommended for immediate bid preparation.",
            factors.category_match
        ),
        Tier::Review => {
            "Moderate match - review requirements and logistics before committing.".to_string()
        }
        Tier::Low => "Weak match - pursue only if strategically important.".to_string(),
    }
}

/// Urgency warning for bids that close within a week
///
/// Already-closed bids (zero or negative days) get no warning.
pub fn urgency_concern(days_until_closing: f64) -> Option<String> {
    if days_until_closing > 0.0 && days_until_closing < URGENT_WITHIN_DAYS {
        Some(format!("Closing in {} days", days_until_closing.ceil() as i64))
    } else {
        None
    }
}

/// Ordered concerns: urgency first, then tier-specific factor checks
pub fn concerns_for(tier: Tier, factors: &MatchFactors, days_until_closing: f64) -> Vec<String> {
    let mut concerns: Vec<String> = urgency_concern(days_until_closing).into_iter().collect();

    let checks: [(u8, &str); 3] = match tier {
        Tier::Priority => return concerns,
        Tier::Review => [
            (factors.category_match, "Category outside core expertise"),
            (factors.geographic_feasibility, "Distant delivery location"),
            (factors.budget_alignment, "Budget outside optimal range"),
        ],
        Tier::Low => [
            (factors.category_match, "Unrelated category"),
            (factors.geographic_feasibility, "Outside service area"),
            (factors.budget_alignment, "Budget mismatch"),
        ],
    };

    let threshold = match tier {
        Tier::Low => LOW_CONCERN_THRESHOLD,
        _ => REVIEW_CONCERN_THRESHOLD,
    };

    concerns.extend(
        checks
            .iter()
            .filter(|(score, _)| *score < threshold)
            .map(|(_, message)| message.to_string()),
    );

    concerns
}

#[cfg(test)]
mod tests {
    use super::*;

    fn factors(category: u8, geographic: u8, budget: u8) -> MatchFactors {
        MatchFactors {
            category_match: category,
            geographic_feasibility: geographic,
            budget_alignment: budget,
            agency_relationship: 50,
            procurement_fit: 40,
            timeline: 75,
        }
    }

    #[test]
    fn test_priority_recommendation_quotes_category_score() {
        let text = recommendation_for(Tier::Priority, &factors(75, 100, 100));
        assert!(text.contains("75% category alignment"));
    }

    #[test]
    fn test_priority_has_no_itemized_concerns() {
        assert!(concerns_for(Tier::Priority, &factors(0, 10, 20), 30.0).is_empty());
        assert_eq!(
            concerns_for(Tier::Priority, &factors(100, 100, 100), 2.2),
            vec!["Closing in 3 days"]
        );
    }

    #[test]
    fn test_review_concerns() {
        let concerns = concerns_for(Tier::Review, &factors(0, 30, 75), 30.0);
        assert_eq!(
            concerns,
            vec!["Category outside core expertise", "Distant delivery location"]
        );
    }

    #[test]
    fn test_low_concerns_use_lower_threshold() {
        let concerns = concerns_for(Tier::Low, &factors(0, 10, 40), 30.0);
        assert_eq!(concerns, vec!["Unrelated category", "Outside service area"]);

        let concerns = concerns_for(Tier::Low, &factors(50, 30, 20), 30.0);
        assert_eq!(concerns, vec!["Budget mismatch"]);
    }

    #[test]
    fn test_urgency_goes_first() {
        let concerns = concerns_for(Tier::Review, &factors(0, 100, 100), 5.0);
        assert_eq!(concerns[0], "Closing in 5 days");
        assert_eq!(concerns[1], "Category outside core expertise");
    }

    #[test]
    fn test_urgency_window() {
        assert_eq!(urgency_concern(0.2), Some("Closing in 1 days".to_string()));
        assert_eq!(urgency_concern(6.5), Some("Closing in 7 days".to_string()));
        assert_eq!(urgency_concern(7.0), None);
        assert_eq!(urgency_concern(0.0), None);
        assert_eq!(urgency_concern(-1.0), None);
    }
}
