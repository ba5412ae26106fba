// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{AnimalListing, AdopterCandidate, Compatibility, RankedCandidate, ScoringWeights, TicketCategory, Tutor, PetEntry, Registration};
pub use requests::{ScorePairRequest, RankCandidatesRequest, NextTicketQuery, RegisterBatchRequest, PetRequest};
pub use responses::{RankCandidatesResponse, NextTicketResponse, RegisterBatchResponse, HealthResponse, ErrorResponse};
