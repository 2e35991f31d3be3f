use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Procurement opportunity (bid notice) being evaluated
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Opportunity {
    #[serde(rename = "referenceNumber")]
    pub reference_number: String,
    #[serde(default)]
    pub title: String,
    pub category: String,
    pub budget: f64,
    #[serde(rename = "deliveryLocation")]
    pub delivery_location: String,
    #[serde(rename = "procuringEntity")]
    pub procuring_entity: String,
    #[serde(rename = "procurementMode")]
    pub procurement_mode: String,
    #[serde(rename = "closingDate")]
    pub closing_date: DateTime<Utc>,
    #[serde(rename = "deliveryDays")]
    pub delivery_days: i32,
}

/// Budget appetite of a supplier, in the same currency as bid budgets
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BudgetRange {
    pub min: f64,
    pub max: f64,
}

/// Supplier capability profile that bids are scored against
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapabilityProfile {
    #[serde(rename = "profileId", default)]
    pub profile_id: String,
    #[serde(rename = "companyName", default)]
    pub company_name: String,
    #[serde(default)]
    pub expertise: Vec<String>,
    #[serde(rename = "warehouseLocation")]
    pub warehouse_location: String,
    #[serde(rename = "geographicReach", default)]
    pub geographic_reach: Vec<String>,
    #[serde(rename = "budgetRange")]
    pub budget_range: BudgetRange,
    #[serde(rename = "preferredAgencies", default)]
    pub preferred_agencies: Vec<String>,
    #[serde(rename = "preferredProcurementModes", default)]
    pub preferred_procurement_modes: Vec<String>,
}

/// The six factor scores, each in 0..=100
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchFactors {
    #[serde(rename = "categoryMatch")]
    pub category_match: u8,
    #[serde(rename = "geographicFeasibility")]
    pub geographic_feasibility: u8,
    #[serde(rename = "budgetAlignment")]
    pub budget_alignment: u8,
    #[serde(rename = "agencyRelationship")]
    pub agency_relationship: u8,
    #[serde(rename = "procurementFit")]
    pub procurement_fit: u8,
    pub timeline: u8,
}

/// Outcome bucket derived from the total score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Priority,
    Review,
    Low,
}

impl Tier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Priority => "priority",
            Tier::Review => "review",
            Tier::Low => "low",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "priority" => Ok(Tier::Priority),
            "review" => Ok(Tier::Review),
            "low" => Ok(Tier::Low),
            other => Err(format!("unknown tier '{}', expected priority, review or low", other)),
        }
    }
}

/// Scored opportunity returned by the engine
///
/// Created fresh on every scoring call and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredOpportunity {
    #[serde(flatten)]
    pub opportunity: Opportunity,
    #[serde(rename = "totalScore")]
    pub total_score: u8,
    pub tier: Tier,
    #[serde(rename = "matchFactors")]
    pub match_factors: MatchFactors,
    pub recommendation: String,
    pub concerns: Vec<String>,
    #[serde(rename = "daysUntilClosing")]
    pub days_until_closing: f64,
    #[serde(rename = "scoredAt")]
    pub scored_at: DateTime<Utc>,
}

/// Fixed factor weights, expressed in hundredths
///
/// Integer hundredths keep the weighted sum exact, so `x.5` totals round
/// the same way on every platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringWeights {
    pub category_match: u32,
    pub geographic_feasibility: u32,
    pub budget_alignment: u32,
    pub agency_relationship: u32,
    pub procurement_fit: u32,
    pub timeline: u32,
}

impl ScoringWeights {
    /// The only weight set the engine uses
    pub const STANDARD: ScoringWeights = ScoringWeights {
        category_match: 30,
        geographic_feasibility: 25,
        budget_alignment: 20,
        agency_relationship: 10,
        procurement_fit: 10,
        timeline: 5,
    };

    /// Sum of all weights in hundredths (100 for a valid set)
    pub fn sum(&self) -> u32 {
        self.category_match
            + self.geographic_feasibility
            + self.budget_alignment
            + self.agency_relationship
            + self.procurement_fit
            + self.timeline
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Supplier verdict on a scored opportunity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecisionKind {
    Pursue,
    Pass,
}

impl DecisionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DecisionKind::Pursue => "pursue",
            DecisionKind::Pass => "pass",
        }
    }
}

impl FromStr for DecisionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pursue" => Ok(DecisionKind::Pursue),
            "pass" => Ok(DecisionKind::Pass),
            other => Err(format!("unknown decision '{}', expected pursue or pass", other)),
        }
    }
}

/// Recorded pursue/pass decision
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BidDecision {
    pub id: uuid::Uuid,
    #[serde(rename = "profileId")]
    pub profile_id: String,
    #[serde(rename = "referenceNumber")]
    pub reference_number: String,
    pub decision: DecisionKind,
    pub notes: Option<String>,
    #[serde(rename = "decidedAt")]
    pub decided_at: DateTime<Utc>,
}
