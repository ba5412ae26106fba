// Route exports
pub mod compatibility;
pub mod tickets;

use actix_web::{web, HttpResponse, Responder};
use crate::config::MatchingSettings;
use crate::core::Matcher;
use crate::models::{ErrorResponse, HealthResponse};
use crate::services::PostgresClient;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub postgres: Arc<PostgresClient>,
    pub matcher: Matcher,
    pub matching: MatchingSettings,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .route("/health", web::get().to(health_check))
            .configure(compatibility::configure)
            .configure(tickets::configure::<PostgresClient>),
    );
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let pg_healthy = state.postgres.health_check().await.unwrap_or(false);

    let status = if pg_healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

pub(crate) fn error_response(
    status: actix_web::http::StatusCode,
    error: &str,
    message: impl ToString,
) -> HttpResponse {
    HttpResponse::build(status).json(ErrorResponse {
        error: error.to_string(),
        message: message.to_string(),
        status_code: status.as_u16(),
    })
}
