use serde::{Deserialize, Serialize};
use crate::models::domain::{RankedCandidate, TicketCategory};

/// Response for the rank endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankCandidatesResponse {
    pub matches: Vec<RankedCandidate>,
    pub total_candidates: usize,
}

/// Response for the next-ticket preview
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NextTicketResponse {
    pub category: TicketCategory,
    pub ticket: String,
}

/// Response for a successful sign-up
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterBatchResponse {
    pub category: TicketCategory,
    pub tickets: Vec<String>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
