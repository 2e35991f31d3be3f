use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;
use crate::config::RankingSettings;
use crate::core::Matcher;
use crate::models::{
    into_opportunities, BatchScoreRequest, BatchScoreResponse, ErrorResponse, HealthResponse,
    Opportunity, ScoreRequest,
};
use crate::services::{PostgresClient, ScoreCache};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub postgres: Arc<PostgresClient>,
    pub cache: Arc<ScoreCache>,
    pub matcher: Matcher,
    pub ranking: RankingSettings,
}

/// Configure scoring and health routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/scores/evaluate", web::post().to(evaluate))
        .route("/scores/batch", web::post().to(score_batch))
        .route("/scores/priority", web::post().to(score_priority));
}

/// 400 response for anything the caller has to fix
pub(crate) fn bad_request(error: &str, message: impl ToString) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse::new(error, message.to_string(), 400))
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let database = state.postgres.health_check().await.unwrap_or(false);

    let status = if database { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database,
        cached_rankings: state.cache.stats().entries,
        timestamp: chrono::Utc::now(),
    })
}

/// Score one opportunity against one profile
///
/// POST /api/v1/scores/evaluate
///
/// Request body:
/// ```json
/// {
///   "opportunity": { "referenceNumber": "string", "category": "string", ... },
///   "profile": { "expertise": ["string"], "budgetRange": { "min": 0, "max": 0 }, ... }
/// }
/// ```
async fn evaluate(
    state: web::Data<AppState>,
    req: web::Json<ScoreRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for evaluate request: {:?}", errors);
        return bad_request("Validation failed", errors);
    }

    let ScoreRequest { opportunity, profile } = req.into_inner();

    let opportunity = match Opportunity::try_from(opportunity) {
        Ok(opportunity) => opportunity,
        Err(e) => return bad_request("Invalid opportunity", e),
    };

    match state.matcher.score(&opportunity, &profile) {
        Ok(scored) => {
            tracing::debug!(
                "Scored {} at {} ({})",
                scored.opportunity.reference_number,
                scored.total_score,
                scored.tier
            );
            HttpResponse::Ok().json(scored)
        }
        Err(e) => bad_request("Invalid input", e),
    }
}

/// Score every opportunity in the request against one profile
///
/// POST /api/v1/scores/batch
async fn score_batch(
    state: web::Data<AppState>,
    req: web::Json<BatchScoreRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return bad_request("Validation failed", errors);
    }

    let BatchScoreRequest { opportunities, profile } = req.into_inner();

    let opportunities = match into_opportunities(opportunities) {
        Ok(opportunities) => opportunities,
        Err(e) => return bad_request("Invalid opportunity", e),
    };

    match state.matcher.score_all(&opportunities, &profile) {
        Ok(scores) => {
            tracing::info!("Scored batch of {} opportunities", scores.len());
            HttpResponse::Ok().json(BatchScoreResponse {
                total_results: scores.len(),
                scores,
            })
        }
        Err(e) => bad_request("Invalid input", e),
    }
}

/// Priority-tier opportunities only, best first
///
/// POST /api/v1/scores/priority
async fn score_priority(
    state: web::Data<AppState>,
    req: web::Json<BatchScoreRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return bad_request("Validation failed", errors);
    }

    let BatchScoreRequest { opportunities, profile } = req.into_inner();

    let opportunities = match into_opportunities(opportunities) {
        Ok(opportunities) => opportunities,
        Err(e) => return bad_request("Invalid opportunity", e),
    };

    match state.matcher.ranked_priority(&opportunities, &profile) {
        Ok(scores) => {
            tracing::info!(
                "{} of {} opportunities ranked as priority",
                scores.len(),
                opportunities.len()
            );
            HttpResponse::Ok().json(BatchScoreResponse {
                total_results: scores.len(),
                scores,
            })
        }
        Err(e) => bad_request("Invalid input", e),
    }
}
