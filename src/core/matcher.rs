use chrono::{DateTime, Utc};
use crate::models::{CapabilityProfile, Opportunity, ScoredOpportunity, ScoringWeights, Tier};
use crate::core::{
    recommendation::{concerns_for, recommendation_for},
    scoring::{calculate_match_factors, classify_tier, days_until_closing, round_score, weighted_total},
    validation::{validate_opportunity, validate_profile, ValidationError},
};

/// Bid-compatibility scoring orchestrator
///
/// # Pipeline
/// 1. Input validation
/// 2. Six independent factor scores
/// 3. Weighted sum, rounding and tier classification
/// 4. Recommendation and concerns
///
/// Holds nothing but the fixed weights, so it is cheap to clone and safe to
/// share across threads.
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
}

impl Matcher {
    pub fn new() -> Self {
        Self {
            weights: ScoringWeights::STANDARD,
        }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Score one opportunity against a profile, reading the clock once
    pub fn score(
        &self,
        opportunity: &Opportunity,
        profile: &CapabilityProfile,
    ) -> Result<ScoredOpportunity, ValidationError> {
        self.score_at(opportunity, profile, Utc::now())
    }

    /// Score one opportunity as of `now`
    ///
    /// Identical inputs and `now` always produce identical results.
    pub fn score_at(
        &self,
        opportunity: &Opportunity,
        profile: &CapabilityProfile,
        now: DateTime<Utc>,
    ) -> Result<ScoredOpportunity, ValidationError> {
        validate_profile(profile)?;
        validate_opportunity(opportunity)?;

        let days = days_until_closing(opportunity.closing_date, now);
        let match_factors = calculate_match_factors(opportunity, profile, now);
        let total_score = round_score(weighted_total(&match_factors, &self.weights));
        let tier = classify_tier(total_score);

        tracing::trace!(
            reference = %opportunity.reference_number,
            total_score,
            %tier,
            "scored opportunity"
        );

        Ok(ScoredOpportunity {
            opportunity: opportunity.clone(),
            total_score,
            tier,
            recommendation: recommendation_for(tier, &match_factors),
            concerns: concerns_for(tier, &match_factors, days),
            match_factors,
            days_until_closing: days,
            scored_at: now,
        })
    }

    /// Score every opportunity independently against one profile
    ///
    /// The clock is read once for the whole batch. Fails on the first
    /// invalid record.
    pub fn score_all(
        &self,
        opportunities: &[Opportunity],
        profile: &CapabilityProfile,
    ) -> Result<Vec<ScoredOpportunity>, ValidationError> {
        self.score_all_at(opportunities, profile, Utc::now())
    }

    pub fn score_all_at(
        &self,
        opportunities: &[Opportunity],
        profile: &CapabilityProfile,
        now: DateTime<Utc>,
    ) -> Result<Vec<ScoredOpportunity>, ValidationError> {
        opportunities
            .iter()
            .map(|opportunity| self.score_at(opportunity, profile, now))
            .collect()
    }

    /// Priority-tier opportunities only, highest total score first
    pub fn ranked_priority(
        &self,
        opportunities: &[Opportunity],
        profile: &CapabilityProfile,
    ) -> Result<Vec<ScoredOpportunity>, ValidationError> {
        self.ranked_priority_at(opportunities, profile, Utc::now())
    }

    pub fn ranked_priority_at(
        &self,
        opportunities: &[Opportunity],
        profile: &CapabilityProfile,
        now: DateTime<Utc>,
    ) -> Result<Vec<ScoredOpportunity>, ValidationError> {
        let mut ranked: Vec<ScoredOpportunity> = self
            .score_all_at(opportunities, profile, now)?
            .into_iter()
            .filter(|scored| scored.tier == Tier::Priority)
            .collect();

        ranked.sort_by(|a, b| b.total_score.cmp(&a.total_score));

        Ok(ranked)
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::new()
    }
}
