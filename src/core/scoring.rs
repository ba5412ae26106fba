use crate::models::{AnimalListing, AdopterCandidate, Compatibility, ScoringWeights};
use crate::core::{
    keywords::count_keyword_matches,
    normalize::{is_wildcard, normalize_size, normalize_species},
};

pub const REASON_SPECIES_INCOMPATIBLE: &str = "espécie incompatível";
pub const REASON_SPECIES_MATCH: &str = "espécie compatível";
pub const REASON_SIZE_MATCH: &str = "porte compatível";

/// Score how well a candidate adopter fits a listed animal
///
/// Checks run in a fixed order and each one that passes appends its reason:
/// 1. Species gate: mismatch returns score 0 immediately
/// 2. Size: wildcard or equal size adds `weights.size`
/// 3. Keywords: each wanted characteristic found in the animal's
///    description adds `weights.keyword`
pub fn calculate_compatibility(
    animal: &AnimalListing,
    candidate: &AdopterCandidate,
    weights: &ScoringWeights,
) -> Compatibility {
    let mut score: u32 = 0;
    let mut reasons = Vec::with_capacity(3);

    // Species is a hard filter, not a weighted factor
    let wanted_species = normalize_species(&candidate.species);
    if !is_wildcard(&wanted_species) && wanted_species != normalize_species(&animal.species) {
        return Compatibility {
            score: 0,
            reasons: vec![REASON_SPECIES_INCOMPATIBLE.to_string()],
        };
    }
    score = score.saturating_add(weights.species);
    reasons.push(REASON_SPECIES_MATCH.to_string());

    let wanted_size = normalize_size(&candidate.size);
    if is_wildcard(&wanted_size) || wanted_size == normalize_size(&animal.size) {
        score = score.saturating_add(weights.size);
        reasons.push(REASON_SIZE_MATCH.to_string());
    }

    let matches = count_keyword_matches(&candidate.characteristics, &animal.characteristics);
    if matches > 0 {
        let bonus = weights.keyword.saturating_mul(u32::try_from(matches).unwrap_or(u32::MAX));
        score = score.saturating_add(bonus);
        reasons.push(keyword_reason(matches));
    }

    Compatibility { score, reasons }
}

fn keyword_reason(matches: usize) -> String {
    if matches == 1 {
        "1 característica em comum".to_string()
    } else {
        format!("{} características em comum", matches)
    }
}
