use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::core::Matcher;
use crate::error::ApiError;
use crate::models::{
    ApprenticeMatchesRequest, HealthResponse, MatchesResponse, RecommendJobsRequest, ScoreRequest,
    ShopMatchesRequest,
};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub matcher: Matcher,
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/matches/shops", web::post().to(find_shop_matches))
        .route("/matches/apprentices", web::post().to(find_apprentice_matches))
        .route("/matches/score", web::post().to(score_pair))
        .route("/jobs/recommend", web::post().to(recommend_jobs));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Rank shops for an apprentice
///
/// POST /api/v1/matches/shops
///
/// Request body:
/// ```json
/// {
///   "apprentice": { "id": "a1", "city": "Oakland", "state": "CA", ... },
///   "shops": [{ "id": "s1", "city": "Oakland", "state": "CA" }]
/// }
/// ```
async fn find_shop_matches(
    state: web::Data<AppState>,
    req: web::Json<ShopMatchesRequest>,
) -> Result<HttpResponse, ApiError> {
    req.validate()?;

    let req = req.into_inner();
    tracing::info!("Finding shop matches for apprentice: {} ({} shops)", req.apprentice.id, req.shops.len());

    let result = state.matcher.find_shop_matches(&req.apprentice, &req.shops);

    Ok(HttpResponse::Ok().json(MatchesResponse {
        matches: result.matches,
        total_candidates: result.total_candidates,
    }))
}

/// Rank apprentices for a shop
///
/// POST /api/v1/matches/apprentices
async fn find_apprentice_matches(
    state: web::Data<AppState>,
    req: web::Json<ApprenticeMatchesRequest>,
) -> Result<HttpResponse, ApiError> {
    req.validate()?;

    let req = req.into_inner();
    tracing::info!("Finding apprentice matches for shop: {} ({} apprentices)", req.shop.id, req.apprentices.len());

    let result = state.matcher.find_apprentice_matches(&req.shop, &req.apprentices);

    Ok(HttpResponse::Ok().json(MatchesResponse {
        matches: result.matches,
        total_candidates: result.total_candidates,
    }))
}

/// Explain one apprentice/shop score factor by factor
///
/// POST /api/v1/matches/score
async fn score_pair(
    state: web::Data<AppState>,
    req: web::Json<ScoreRequest>,
) -> Result<HttpResponse, ApiError> {
    req.validate()?;

    let breakdown = state.matcher.explain_apprentice_shop(&req.apprentice, &req.shop);
    tracing::debug!(apprentice = %req.apprentice.id, shop = %req.shop.id, score = breakdown.total, "scored pair");

    Ok(HttpResponse::Ok().json(breakdown))
}

/// Recommend active jobs to an apprentice
///
/// POST /api/v1/jobs/recommend
async fn recommend_jobs(
    state: web::Data<AppState>,
    req: web::Json<RecommendJobsRequest>,
) -> Result<HttpResponse, ApiError> {
    req.validate()?;

    let req = req.into_inner();
    tracing::info!("Recommending jobs for apprentice: {} ({} jobs)", req.apprentice.id, req.jobs.len());

    let result = state.matcher.recommend_jobs(&req.apprentice, &req.jobs);

    Ok(HttpResponse::Ok().json(MatchesResponse {
        matches: result.matches,
        total_candidates: result.total_candidates,
    }))
}
