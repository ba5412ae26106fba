//! Adopet - adoption matching and sign-up tickets for an animal-welfare NGO
//!
//! Two independent pieces of logic live here:
//! - the compatibility scorer, which ranks candidate adopters for a listed animal
//! - the sequential ticket allocator, which numbers sterilization and
//!   group-event sign-ups per category

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{Matcher, calculate_compatibility, next_ticket, allocate_block, TicketError};
pub use models::{AnimalListing, AdopterCandidate, Compatibility, ScoringWeights, TicketCategory};
pub use services::{ListingStore, RegistrationService, RegistrationStore, MemoryStore, PostgresClient};
