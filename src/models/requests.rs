use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::{AdopterCandidate, AnimalListing, TicketCategory};

/// Request to score a single animal/candidate pair
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScorePairRequest {
    #[serde(default)]
    pub animal: AnimalListing,
    #[serde(default)]
    pub candidate: AdopterCandidate,
}

/// Request to rank stored candidates against a stored animal
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RankCandidatesRequest {
    #[serde(alias = "animal_id", rename = "animalId")]
    pub animal_id: i32,
    #[validate(range(min = 1))]
    #[serde(default)]
    pub limit: Option<u16>,
}

/// Query string for previewing the next ticket
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NextTicketQuery {
    #[serde(default)]
    pub category: TicketCategory,
}

/// Sign-up submission covering one or more animals of the same tutor
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterBatchRequest {
    #[serde(default)]
    pub category: TicketCategory,
    #[validate(length(min = 1, max = 120))]
    #[serde(alias = "tutor_name", rename = "tutorName")]
    pub tutor_name: String,
    #[validate(length(min = 8, max = 20))]
    #[serde(alias = "tutor_phone", rename = "tutorPhone")]
    pub tutor_phone: String,
    #[validate(length(min = 1, max = 10), nested)]
    pub pets: Vec<PetRequest>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PetRequest {
    #[validate(length(min = 1, max = 80))]
    pub name: String,
    #[serde(default)]
    pub species: String,
}
