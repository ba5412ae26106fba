use crate::models::{AdopterCandidate, AnimalListing, Registration, TicketCategory};
use crate::services::store::{ListingStore, RegistrationStore, StoreError};
use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard};

/// In-process store with the same rules as the web application's tables
///
/// Tickets are unique across all registrations, ids are assigned in insert
/// order, and candidates page by id.
#[derive(Debug, Default)]
pub struct MemoryStore {
    registrations: Mutex<Vec<Registration>>,
    animals: Mutex<Vec<AnimalListing>>,
    candidates: Mutex<Vec<AdopterCandidate>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of every stored registration, in insertion order
    pub fn registrations(&self) -> Vec<Registration> {
        lock(&self.registrations).clone()
    }

    pub fn tickets(&self) -> Vec<String> {
        lock(&self.registrations).iter().map(|r| r.ticket.clone()).collect()
    }

    pub fn add_animal(&self, animal: AnimalListing) {
        lock(&self.animals).push(animal);
    }

    /// Store a candidate, keeping id order
    pub fn add_candidate(&self, candidate: AdopterCandidate) {
        let mut candidates = lock(&self.candidates);
        let at = candidates.partition_point(|c| c.id <= candidate.id);
        candidates.insert(at, candidate);
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    // A poisoned lock still holds consistent data: every write is all-or-nothing
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl RegistrationStore for MemoryStore {
    /// Every stored ticket; category filtering happens in the allocator
    async fn latest_tickets(&self, _category: TicketCategory) -> Result<Vec<String>, StoreError> {
        Ok(self.tickets())
    }

    async fn insert_registrations(&self, registrations: &[Registration]) -> Result<Vec<i32>, StoreError> {
        let mut stored = lock(&self.registrations);

        let mut taken: HashSet<&str> = stored.iter().map(|r| r.ticket.as_str()).collect();
        for registration in registrations {
            if !taken.insert(registration.ticket.as_str()) {
                return Err(StoreError::DuplicateTicket(registration.ticket.clone()));
            }
        }

        let first_id = i32::try_from(stored.len()).unwrap_or(i32::MAX).saturating_add(1);
        let ids: Vec<i32> = (0..registrations.len())
            .map(|offset| first_id.saturating_add(i32::try_from(offset).unwrap_or(i32::MAX)))
            .collect();

        stored.extend(registrations.iter().zip(&ids).map(|(registration, id)| Registration {
            id: Some(*id),
            ..registration.clone()
        }));

        Ok(ids)
    }
}

impl ListingStore for MemoryStore {
    async fn fetch_animal(&self, animal_id: i32) -> Result<AnimalListing, StoreError> {
        lock(&self.animals)
            .iter()
            .find(|animal| animal.id == animal_id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("animal {}", animal_id)))
    }

    async fn fetch_candidates_after(
        &self,
        after_id: i32,
        page_size: usize,
    ) -> Result<Vec<AdopterCandidate>, StoreError> {
        Ok(lock(&self.candidates)
            .iter()
            .filter(|candidate| candidate.id > after_id)
            .take(page_size)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(id: i32) -> AdopterCandidate {
        AdopterCandidate {
            id,
            name: format!("Interessado {}", id),
            ..Default::default()
        }
    }

    #[test]
    fn test_candidates_page_by_id() {
        let store = MemoryStore::new();
        for id in [3, 1, 2, 5, 4] {
            store.add_candidate(candidate(id));
        }

        tokio_test::block_on(async {
            let first: Vec<i32> = store
                .fetch_candidates_after(0, 2)
                .await
                .unwrap()
                .iter()
                .map(|c| c.id)
                .collect();
            let rest: Vec<i32> = store
                .fetch_candidates_after(2, 10)
                .await
                .unwrap()
                .iter()
                .map(|c| c.id)
                .collect();

            assert_eq!(first, vec![1, 2]);
            assert_eq!(rest, vec![3, 4, 5]);
        });
    }

    #[test]
    fn test_missing_animal_is_not_found() {
        let store = MemoryStore::new();

        tokio_test::block_on(async {
            let err = store.fetch_animal(7).await.unwrap_err();
            assert!(matches!(err, StoreError::NotFound(_)));
        });
    }
}
