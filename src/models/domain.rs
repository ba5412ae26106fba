use serde::{Deserialize, Serialize};
use std::fmt;

/// Animal listed for adoption (a row of `adocao`)
///
/// Text fields default to empty strings so partially filled listings can still
/// be scored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnimalListing {
    #[serde(default)]
    pub id: i32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub species: String,
    #[serde(default)]
    pub size: String,
    #[serde(default)]
    pub characteristics: String,
}

/// Candidate adopter and what they are looking for (a row of
/// `interessados_adocao`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdopterCandidate {
    #[serde(default)]
    pub id: i32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub species: String,
    #[serde(default)]
    pub size: String,
    #[serde(default)]
    pub characteristics: String,
}

/// Outcome of scoring one candidate against one animal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Compatibility {
    pub score: u32,
    pub reasons: Vec<String>,
}

impl Compatibility {
    pub fn is_compatible(&self) -> bool {
        self.score > 0
    }
}

/// Candidate ranked against a listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedCandidate {
    #[serde(rename = "candidateId")]
    pub candidate_id: i32,
    pub name: String,
    pub score: u32,
    pub reasons: Vec<String>,
}

/// Scoring weights
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub species: u32,
    pub size: u32,
    pub keyword: u32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            species: 50,
            size: 30,
            keyword: 5,
        }
    }
}

/// Sign-up category, which decides the ticket prefix
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TicketCategory {
    /// Group sterilization event (mutirão)
    #[serde(alias = "mutirao")]
    GroupEvent,
    #[default]
    LowCost,
    StrayAnimal,
    #[serde(rename = "none")]
    Unprefixed,
}

impl TicketCategory {
    pub const ALL: [TicketCategory; 4] = [
        TicketCategory::GroupEvent,
        TicketCategory::LowCost,
        TicketCategory::StrayAnimal,
        TicketCategory::Unprefixed,
    ];

    pub fn prefix(self) -> Option<char> {
        match self {
            TicketCategory::GroupEvent => Some('M'),
            TicketCategory::LowCost => Some('B'),
            TicketCategory::StrayAnimal => Some('R'),
            TicketCategory::Unprefixed => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TicketCategory::GroupEvent => "group-event",
            TicketCategory::LowCost => "low-cost",
            TicketCategory::StrayAnimal => "stray-animal",
            TicketCategory::Unprefixed => "none",
        }
    }
}

impl fmt::Display for TicketCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tutor bringing animals to a sterilization sign-up
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tutor {
    pub name: String,
    pub phone: String,
}

/// One animal within a sign-up submission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PetEntry {
    pub name: String,
    #[serde(default)]
    pub species: String,
}

/// Sign-up of one animal (a row of `castracao`)
///
/// `id` is assigned by the store on insert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Registration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    pub ticket: String,
    pub category: TicketCategory,
    #[serde(rename = "tutorName")]
    pub tutor_name: String,
    #[serde(rename = "tutorPhone")]
    pub tutor_phone: String,
    #[serde(rename = "petName")]
    pub pet_name: String,
    pub species: String,
    #[serde(rename = "createdAt")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}
