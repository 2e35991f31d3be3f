use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::core::validation::{parse_closing_date, ValidationError};
use crate::models::domain::{CapabilityProfile, Opportunity};

/// Opportunity as it arrives over the wire
///
/// The closing date stays a string until `Opportunity::try_from` so an
/// unparseable date surfaces as a `ValidationError` instead of a JSON error.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct OpportunityPayload {
    #[validate(length(min = 1))]
    #[serde(alias = "reference_number", rename = "referenceNumber")]
    pub reference_number: String,
    #[serde(default)]
    pub title: String,
    #[validate(length(min = 1))]
    pub category: String,
    #[validate(range(min = 0.0))]
    pub budget: f64,
    #[serde(alias = "delivery_location", rename = "deliveryLocation")]
    pub delivery_location: String,
    #[serde(alias = "procuring_entity", rename = "procuringEntity")]
    pub procuring_entity: String,
    #[serde(alias = "procurement_mode", rename = "procurementMode")]
    pub procurement_mode: String,
    #[serde(alias = "closing_date", rename = "closingDate")]
    pub closing_date: String,
    #[serde(alias = "delivery_days", rename = "deliveryDays")]
    pub delivery_days: i32,
}

impl TryFrom<OpportunityPayload> for Opportunity {
    type Error = ValidationError;

    fn try_from(payload: OpportunityPayload) -> Result<Self, Self::Error> {
        let closing_date = parse_closing_date(&payload.closing_date)?;

        Ok(Opportunity {
            reference_number: payload.reference_number,
            title: payload.title,
            category: payload.category,
            budget: payload.budget,
            delivery_location: payload.delivery_location,
            procuring_entity: payload.procuring_entity,
            procurement_mode: payload.procurement_mode,
            closing_date,
            delivery_days: payload.delivery_days,
        })
    }
}

/// Convert a list of payloads, stopping at the first bad closing date
pub fn into_opportunities(
    payloads: Vec<OpportunityPayload>,
) -> Result<Vec<Opportunity>, ValidationError> {
    payloads.into_iter().map(Opportunity::try_from).collect()
}

/// Request to score a single opportunity
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ScoreRequest {
    #[validate(nested)]
    pub opportunity: OpportunityPayload,
    pub profile: CapabilityProfile,
}

/// Request to score several opportunities against one profile
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BatchScoreRequest {
    #[validate(length(max = 5000), nested)]
    pub opportunities: Vec<OpportunityPayload>,
    pub profile: CapabilityProfile,
}

/// Opportunities pushed by the ingestion pipeline
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct IngestOpportunitiesRequest {
    #[validate(length(min = 1, max = 5000), nested)]
    pub opportunities: Vec<OpportunityPayload>,
}

/// Request to record a pursue/pass decision
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecordDecisionRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "profile_id", rename = "profileId")]
    pub profile_id: String,
    #[validate(length(min = 1))]
    #[serde(alias = "reference_number", rename = "referenceNumber")]
    pub reference_number: String,
    pub decision: String,
    #[validate(length(max = 2000))]
    #[serde(default)]
    pub notes: Option<String>,
}

/// Query parameters for a stored-profile ranking
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RankingQuery {
    #[serde(default)]
    pub tier: Option<String>,
    #[serde(default)]
    pub limit: Option<u16>,
}

/// Query parameters for listing decisions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionsQuery {
    #[serde(alias = "profile_id", rename = "profileId")]
    pub profile_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn payload(closing_date: &str) -> OpportunityPayload {
        OpportunityPayload {
            reference_number: "11223344".to_string(),
            title: "Supply of PPE".to_string(),
            category: "Medical Supplies".to_string(),
            budget: 250_000.0,
            delivery_location: "Quezon City".to_string(),
            procuring_entity: "Department of Health".to_string(),
            procurement_mode: "Small Value Procurement".to_string(),
            closing_date: closing_date.to_string(),
            delivery_days: 15,
        }
    }

    #[test]
    fn test_payload_converts_with_parsed_date() {
        let opportunity = Opportunity::try_from(payload("2025-03-01T09:00:00Z")).unwrap();
        assert_eq!(
            opportunity.closing_date,
            Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap()
        );
        assert_eq!(opportunity.reference_number, "11223344");
    }

    #[test]
    fn test_payload_rejects_bad_date() {
        let err = Opportunity::try_from(payload("next tuesday")).unwrap_err();
        assert!(matches!(err, ValidationError::UnparseableClosingDate(_)));
    }

    #[test]
    fn test_payload_validation() {
        let mut bad = payload("2025-03-01");
        bad.category = String::new();
        bad.budget = -5.0;
        let errors = bad.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("category"));
        assert!(fields.contains_key("budget"));
    }

    #[test]
    fn test_camel_case_payload() {
        let json = r#"{
            "referenceNumber": "R-1",
            "category": "Office Supplies",
            "budget": 1000.0,
            "deliveryLocation": "Manila",
            "procuringEntity": "Bureau of Customs",
            "procurementMode": "Shopping",
            "closingDate": "2025-05-05",
            "deliveryDays": 7
        }"#;
        let payload: OpportunityPayload = serde_json::from_str(json).unwrap();
        assert_eq!(payload.title, "");
        assert_eq!(payload.delivery_days, 7);
    }
}
