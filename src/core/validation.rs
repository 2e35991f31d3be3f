use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use thiserror::Error;
use crate::models::{CapabilityProfile, Opportunity};

/// The only input conditions the engine rejects
///
/// Everything else (unknown places, agencies, modes, past closing dates)
/// degrades to a default score instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("budget range is inverted: max {max} is below min {min}")]
    InvertedBudgetRange { min: f64, max: f64 },

    #[error("delivery days must be positive, got {0}")]
    NonPositiveDeliveryDays(i32),

    #[error("unparseable closing date: {0:?}")]
    UnparseableClosingDate(String),
}

/// Naive date-time layouts accepted for closing dates, read as UTC
const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    // Slash dates are month first; day first only when that fails
    "%m/%d/%Y %I:%M %p",
    "%m/%d/%Y %H:%M",
    "%d/%m/%Y %I:%M %p",
    "%d/%m/%Y %H:%M",
    "%B %d, %Y %I:%M %p",
    "%b %d, %Y %I:%M %p",
];

/// Date-only layouts; the deadline is taken as midnight UTC of that day
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%m/%d/%Y",
    "%d/%m/%Y",
    "%B %d, %Y",
    "%b %d, %Y",
];

/// Parse a closing date from the formats our collaborators emit
pub fn parse_closing_date(raw: &str) -> Result<DateTime<Utc>, ValidationError> {
    let trimmed = raw.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(parsed.with_timezone(&Utc));
    }

    for format in DATE_TIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(naive.and_utc());
        }
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
                return Ok(midnight.and_utc());
            }
        }
    }

    Err(ValidationError::UnparseableClosingDate(raw.to_string()))
}

/// Reject a profile whose budget range is inverted
pub fn validate_profile(profile: &CapabilityProfile) -> Result<(), ValidationError> {
    let range = profile.budget_range;
    if range.max < range.min {
        return Err(ValidationError::InvertedBudgetRange {
            min: range.min,
            max: range.max,
        });
    }
    Ok(())
}

/// Reject an opportunity with zero or negative delivery days
pub fn validate_opportunity(opportunity: &Opportunity) -> Result<(), ValidationError> {
    if opportunity.delivery_days <= 0 {
        return Err(ValidationError::NonPositiveDeliveryDays(opportunity.delivery_days));
    }
    Ok(())
}
