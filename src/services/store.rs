use crate::models::{AdopterCandidate, AnimalListing, Registration, TicketCategory};
use std::future::Future;
use thiserror::Error;

/// Errors that can occur when reading or writing registrations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("SQLx error: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Duplicate ticket: {0}")]
    DuplicateTicket(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

/// Storage seam for ticket lookup and sign-up persistence
pub trait RegistrationStore: Send + Sync {
    /// Tickets to consider when computing the next one for `category`
    ///
    /// Implementations may return every stored ticket or only the highest
    /// one of the category; callers filter and take the maximum themselves.
    fn latest_tickets(
        &self,
        category: TicketCategory,
    ) -> impl Future<Output = Result<Vec<String>, StoreError>> + Send;

    /// Insert every registration or none of them
    ///
    /// Returns the ids the store assigned, in input order. A ticket already
    /// taken yields `StoreError::DuplicateTicket`.
    fn insert_registrations(
        &self,
        registrations: &[Registration],
    ) -> impl Future<Output = Result<Vec<i32>, StoreError>> + Send;
}

/// Read side for adoption listings and interested adopters
pub trait ListingStore: Send + Sync {
    fn fetch_animal(
        &self,
        animal_id: i32,
    ) -> impl Future<Output = Result<AnimalListing, StoreError>> + Send;

    /// Up to `page_size` candidates with an id above `after_id`, by id
    fn fetch_candidates_after(
        &self,
        after_id: i32,
        page_size: usize,
    ) -> impl Future<Output = Result<Vec<AdopterCandidate>, StoreError>> + Send;
}
