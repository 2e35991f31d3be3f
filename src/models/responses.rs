use serde::{Deserialize, Serialize};
use crate::models::domain::{BidDecision, ScoredOpportunity};

/// Response for batch and priority scoring endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchScoreResponse {
    pub scores: Vec<ScoredOpportunity>,
    #[serde(rename = "totalResults")]
    pub total_results: usize,
}

/// Response for a stored-profile ranking
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingResponse {
    #[serde(rename = "profileId")]
    pub profile_id: String,
    pub scores: Vec<ScoredOpportunity>,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
    pub skipped: usize,
    pub cached: bool,
}

/// Response for opportunity ingestion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestResponse {
    pub received: usize,
    pub stored: u64,
}

/// Response for a recorded decision
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionResponse {
    pub success: bool,
    pub decision: BidDecision,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub database: bool,
    #[serde(rename = "cachedRankings")]
    pub cached_rankings: u64,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>, status_code: u16) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            status_code,
        }
    }
}
