use crate::core::tickets::{allocate_block, next_ticket, TicketError};
use crate::models::{PetEntry, Registration, TicketCategory, Tutor};
use crate::services::store::{RegistrationStore, StoreError};
use std::sync::Arc;
use thiserror::Error;

/// Errors that can occur while signing animals up
#[derive(Debug, Error)]
pub enum AllocationError {
    #[error(transparent)]
    Ticket(#[from] TicketError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("ticket collision persisted after {attempts} attempts")]
    Contended { attempts: u32 },
}

/// Allocates tickets and persists sign-ups
///
/// Concurrent requests (possibly on other instances) can read the same
/// highest ticket. The store's unique constraint rejects the loser, which
/// re-reads and retries up to `max_attempts` times.
pub struct RegistrationService<S> {
    store: Arc<S>,
    max_attempts: u32,
}

impl<S> Clone for RegistrationService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            max_attempts: self.max_attempts,
        }
    }
}

impl<S: RegistrationStore> RegistrationService<S> {
    pub fn new(store: Arc<S>, max_attempts: u32) -> Self {
        Self {
            store,
            max_attempts: max_attempts.max(1),
        }
    }

    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// Next ticket for `category` without reserving it
    pub async fn preview_next(&self, category: TicketCategory) -> Result<String, AllocationError> {
        let existing = self.store.latest_tickets(category).await?;
        Ok(next_ticket(existing.iter().map(String::as_str), category)?)
    }

    /// Sign up every pet of one tutor under contiguous tickets
    ///
    /// Returns the stored registrations in the order of `pets`.
    pub async fn register_batch(
        &self,
        category: TicketCategory,
        tutor: &Tutor,
        pets: &[PetEntry],
    ) -> Result<Vec<Registration>, AllocationError> {
        if pets.is_empty() {
            return Ok(Vec::new());
        }

        for attempt in 1..=self.max_attempts {
            let existing = self.store.latest_tickets(category).await?;
            let tickets = allocate_block(existing.iter().map(String::as_str), category, pets.len())?;

            let created_at = chrono::Utc::now();
            let mut registrations: Vec<Registration> = tickets
                .into_iter()
                .zip(pets)
                .map(|(ticket, pet)| Registration {
                    id: None,
                    ticket,
                    category,
                    tutor_name: tutor.name.clone(),
                    tutor_phone: tutor.phone.clone(),
                    pet_name: pet.name.clone(),
                    species: pet.species.clone(),
                    created_at,
                })
                .collect();

            match self.store.insert_registrations(&registrations).await {
                Ok(ids) => {
                    for (registration, id) in registrations.iter_mut().zip(ids) {
                        registration.id = Some(id);
                    }
                    tracing::info!(
                        "Registered {} pets under {} ({} .. {})",
                        registrations.len(),
                        category,
                        registrations[0].ticket,
                        registrations[registrations.len() - 1].ticket
                    );
                    return Ok(registrations);
                }
                Err(StoreError::DuplicateTicket(ticket)) => {
                    tracing::warn!(
                        "Ticket {} taken concurrently (attempt {}/{}), retrying",
                        ticket,
                        attempt,
                        self.max_attempts
                    );
                }
                Err(e) => {
                    tracing::error!("Failed to store registrations for {}: {}", category, e);
                    return Err(e.into());
                }
            }
        }

        Err(AllocationError::Contended {
            attempts: self.max_attempts,
        })
    }
}
