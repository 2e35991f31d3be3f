//! BidFit - bid opportunity scoring service for government procurement
//!
//! This library scores procurement opportunities against a supplier's
//! capability profile. Six factor scores are combined with fixed weights
//! into a 0-100 total, which is bucketed into priority, review or low tiers
//! and annotated with a recommendation and a list of concerns.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;
pub mod telemetry;

// Re-export commonly used types
pub use crate::core::{Matcher, ValidationError};
pub use models::{
    BudgetRange, CapabilityProfile, MatchFactors, Opportunity, ScoredOpportunity, ScoringWeights,
    Tier,
};
