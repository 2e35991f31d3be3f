use actix_web::{web, HttpResponse, Responder};
use chrono::Utc;
use std::str::FromStr;
use validator::Validate;
use crate::core::validation::validate_profile;
use crate::models::{
    into_opportunities, CapabilityProfile, DecisionKind, DecisionResponse, DecisionsQuery,
    ErrorResponse, IngestOpportunitiesRequest, IngestResponse, RankingQuery, RankingResponse,
    RecordDecisionRequest, ScoredOpportunity, Tier,
};
use crate::routes::scores::{bad_request, AppState};
use crate::services::CacheKey;

/// Configure routes backed by stored records
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/opportunities", web::post().to(ingest_opportunities))
        .route("/profiles/{profile_id}", web::put().to(upsert_profile))
        .route("/profiles/{profile_id}/ranking", web::get().to(profile_ranking))
        .route("/decisions", web::post().to(record_decision))
        .route("/decisions", web::get().to(list_decisions));
}

fn storage_failure(message: &str) -> HttpResponse {
    HttpResponse::InternalServerError().json(ErrorResponse::new(
        "Internal server error",
        message,
        500,
    ))
}

/// Store opportunities pushed by the ingestion pipeline
///
/// POST /api/v1/opportunities
async fn ingest_opportunities(
    state: web::Data<AppState>,
    req: web::Json<IngestOpportunitiesRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return bad_request("Validation failed", errors);
    }

    let received = req.opportunities.len();

    let opportunities = match into_opportunities(req.into_inner().opportunities) {
        Ok(opportunities) => opportunities,
        Err(e) => return bad_request("Invalid opportunity", e),
    };

    match state.postgres.upsert_opportunities(&opportunities).await {
        Ok(stored) => {
            // Every cached ranking may now be missing a candidate
            state.cache.invalidate_all();
            tracing::info!("Ingested {} opportunities ({} stored)", received, stored);
            HttpResponse::Ok().json(IngestResponse { received, stored })
        }
        Err(e) => {
            tracing::error!("Failed to store opportunities: {}", e);
            storage_failure("Failed to store opportunities")
        }
    }
}

/// Create or replace a capability profile
///
/// PUT /api/v1/profiles/{profileId}
async fn upsert_profile(
    state: web::Data<AppState>,
    path: web::Path<String>,
    req: web::Json<CapabilityProfile>,
) -> impl Responder {
    let mut profile = req.into_inner();
    profile.profile_id = path.into_inner();

    if profile.profile_id.trim().is_empty() {
        return bad_request("Validation failed", "profile id must not be blank");
    }

    if let Err(e) = validate_profile(&profile) {
        return bad_request("Invalid profile", e);
    }

    if let Err(e) = state.postgres.upsert_profile(&profile).await {
        tracing::error!("Failed to store profile {}: {}", profile.profile_id, e);
        return storage_failure("Failed to store profile");
    }

    if let Err(e) = state.cache.invalidate_profile(&profile.profile_id) {
        tracing::warn!("Failed to invalidate cache: {}", e);
    }

    tracing::info!("Stored capability profile {}", profile.profile_id);

    HttpResponse::Ok().json(profile)
}

/// Score every open stored opportunity against a stored profile
///
/// GET /api/v1/profiles/{profileId}/ranking?tier=priority&limit=20
///
/// Results are ordered by total score, then by soonest closing date.
async fn profile_ranking(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<RankingQuery>,
) -> impl Responder {
    let profile_id = path.into_inner();

    let tier = match query.tier.as_deref().map(Tier::from_str).transpose() {
        Ok(tier) => tier,
        Err(e) => return bad_request("Invalid query", e),
    };

    let limit = query
        .limit
        .unwrap_or(state.ranking.default_limit)
        .min(state.ranking.max_limit) as usize;

    let cache_key = CacheKey::ranking(&profile_id, tier.map(|t| t.as_str()), limit);
    if let Some(cached) = state.cache.get(&cache_key).await {
        let mut response = (*cached).clone();
        response.cached = true;
        return HttpResponse::Ok().json(response);
    }

    let profile = match state.postgres.get_profile(&profile_id).await {
        Ok(Some(profile)) => profile,
        Ok(None) => {
            return HttpResponse::NotFound().json(ErrorResponse::new(
                "Not found",
                format!("Capability profile {} not found", profile_id),
                404,
            ));
        }
        Err(e) => {
            tracing::error!("Failed to fetch profile for {}: {}", profile_id, e);
            return storage_failure("Failed to fetch capability profile");
        }
    };

    let now = Utc::now();

    let candidates = match state
        .postgres
        .get_open_opportunities(now, state.ranking.max_candidates)
        .await
    {
        Ok(candidates) => candidates,
        Err(e) => {
            tracing::error!("Failed to query opportunities for {}: {}", profile_id, e);
            return storage_failure("Failed to query opportunities");
        }
    };

    let total_candidates = candidates.len();
    let mut skipped = 0;
    let mut scores: Vec<ScoredOpportunity> = Vec::with_capacity(total_candidates);

    for opportunity in &candidates {
        match state.matcher.score_at(opportunity, &profile, now) {
            Ok(scored) => scores.push(scored),
            Err(e) => {
                skipped += 1;
                tracing::warn!(
                    "Skipping stored opportunity {}: {}",
                    opportunity.reference_number,
                    e
                );
            }
        }
    }

    if let Err(e) = state.postgres.save_scores(&profile_id, &scores).await {
        tracing::warn!("Failed to persist scores for {}: {}", profile_id, e);
    }

    if let Some(tier) = tier {
        scores.retain(|scored| scored.tier == tier);
    }

    scores.sort_by(|a, b| {
        b.total_score
            .cmp(&a.total_score)
            .then_with(|| a.opportunity.closing_date.cmp(&b.opportunity.closing_date))
    });
    scores.truncate(limit);

    tracing::info!(
        "Ranked {} of {} open opportunities for {} ({} skipped)",
        scores.len(),
        total_candidates,
        profile_id,
        skipped
    );

    let response = RankingResponse {
        profile_id,
        scores,
        total_candidates,
        skipped,
        cached: false,
    };

    state.cache.insert(cache_key, response.clone()).await;

    HttpResponse::Ok().json(response)
}

/// Record a pursue/pass decision on an opportunity
///
/// POST /api/v1/decisions
async fn record_decision(
    state: web::Data<AppState>,
    req: web::Json<RecordDecisionRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return bad_request("Validation failed", errors);
    }

    let decision = match DecisionKind::from_str(&req.decision) {
        Ok(decision) => decision,
        Err(e) => return bad_request("Invalid decision", e),
    };

    let result = state
        .postgres
        .record_decision(
            &req.profile_id,
            &req.reference_number,
            decision,
            req.notes.as_deref(),
        )
        .await;

    match result {
        Ok(recorded) => {
            if let Err(e) = state.cache.invalidate_profile(&req.profile_id) {
                tracing::warn!("Failed to invalidate cache: {}", e);
            }

            HttpResponse::Ok().json(DecisionResponse {
                success: true,
                decision: recorded,
            })
        }
        Err(e) => {
            tracing::error!("Failed to record decision: {}", e);
            storage_failure("Failed to record decision")
        }
    }
}

/// Decisions a profile has made, newest first
///
/// GET /api/v1/decisions?profileId=acme
async fn list_decisions(
    state: web::Data<AppState>,
    query: web::Query<DecisionsQuery>,
) -> impl Responder {
    match state.postgres.get_decisions(&query.profile_id).await {
        Ok(decisions) => HttpResponse::Ok().json(serde_json::json!({
            "profileId": query.profile_id,
            "count": decisions.len(),
            "decisions": decisions,
        })),
        Err(e) => {
            tracing::error!("Failed to fetch decisions for {}: {}", query.profile_id, e);
            storage_failure("Failed to fetch decisions")
        }
    }
}
