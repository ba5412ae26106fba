use actix_web::{http::StatusCode, web, HttpResponse, Responder};
use validator::Validate;
use crate::core::Matcher;
use crate::models::{RankCandidatesRequest, RankCandidatesResponse, ScorePairRequest};
use crate::routes::{error_response, AppState};
use crate::services::{rank_for_listing, StoreError};

/// Configure compatibility routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/compatibility/score", web::post().to(score_pair))
        .route("/compatibility/rank", web::post().to(rank_candidates));
}

/// Score one animal/candidate pair
///
/// POST /api/v1/compatibility/score
///
/// Request body:
/// ```json
/// {
///   "animal": { "species": "gato", "size": "pequeno", "characteristics": "dócil" },
///   "candidate": { "species": "felino", "size": "qualquer", "characteristics": "gato dócil" }
/// }
/// ```
async fn score_pair(
    matcher: web::Data<Matcher>,
    req: web::Json<ScorePairRequest>,
) -> impl Responder {
    let compatibility = matcher.score(&req.animal, &req.candidate);
    HttpResponse::Ok().json(compatibility)
}

/// Rank stored candidates for a stored animal
///
/// POST /api/v1/compatibility/rank
///
/// Request body:
/// ```json
/// { "animalId": 42, "limit": 20 }
/// ```
async fn rank_candidates(
    state: web::Data<AppState>,
    req: web::Json<RankCandidatesRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return error_response(StatusCode::BAD_REQUEST, "Validation failed", errors);
    }

    let limit = req
        .limit
        .unwrap_or(state.matching.default_limit)
        .min(state.matching.max_limit) as usize;

    let ranked = rank_for_listing(
        state.postgres.as_ref(),
        &state.matcher,
        req.animal_id,
        limit,
        state.matching.page_size,
    )
    .await;

    let (animal, result) = match ranked {
        Ok(ranked) => ranked,
        Err(StoreError::NotFound(what)) => {
            return error_response(StatusCode::NOT_FOUND, "Animal not found", what);
        }
        Err(e) => {
            tracing::error!("Failed to rank candidates for animal {}: {}", req.animal_id, e);
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to rank candidates", e);
        }
    };

    tracing::info!(
        "Ranked {} of {} candidates for animal {}",
        result.matches.len(),
        result.total_candidates,
        animal.id
    );

    HttpResponse::Ok().json(RankCandidatesResponse {
        matches: result.matches,
        total_candidates: result.total_candidates,
    })
}
