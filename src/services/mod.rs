// Service exports
pub mod memory;
pub mod postgres;
pub mod ranking;
pub mod registrations;
pub mod store;

pub use memory::MemoryStore;
pub use postgres::PostgresClient;
pub use ranking::rank_for_listing;
pub use registrations::{AllocationError, RegistrationService};
pub use store::{ListingStore, RegistrationStore, StoreError};
