// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    BidDecision, BudgetRange, CapabilityProfile, DecisionKind, MatchFactors, Opportunity,
    ScoredOpportunity, ScoringWeights, Tier,
};
pub use requests::{
    into_opportunities, BatchScoreRequest, DecisionsQuery, IngestOpportunitiesRequest,
    OpportunityPayload, RankingQuery, RecordDecisionRequest, ScoreRequest,
};
pub use responses::{
    BatchScoreResponse, DecisionResponse, ErrorResponse, HealthResponse, IngestResponse,
    RankingResponse,
};
