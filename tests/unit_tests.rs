// Unit tests for Adopet

use adopet::core::{
    keywords::extract_keywords,
    normalize::{normalize_species, CANINE, FELINE},
    scoring::{calculate_compatibility, REASON_SPECIES_INCOMPATIBLE},
    tickets::{allocate_block, highest_sequence, next_ticket},
};
use adopet::models::{AnimalListing, AdopterCandidate, ScoringWeights, TicketCategory};

fn animal(species: &str, size: &str, characteristics: &str) -> AnimalListing {
    AnimalListing {
        species: species.to_string(),
        size: size.to_string(),
        characteristics: characteristics.to_string(),
        ..Default::default()
    }
}

fn candidate(species: &str, size: &str, characteristics: &str) -> AdopterCandidate {
    AdopterCandidate {
        species: species.to_string(),
        size: size.to_string(),
        characteristics: characteristics.to_string(),
        ..Default::default()
    }
}

const SPECIES: &[&str] = &["gato", "felino", "cachorro", "cão", "canino", "coelho", ""];
const SIZES: &[&str] = &["pequeno", "médio", "grande", "qualquer", ""];

#[test]
fn test_scenario_cat_with_synonym_and_wildcard_size() {
    let result = calculate_compatibility(
        &animal("gato", "pequeno", "dócil e brincalhão"),
        &candidate("felino", "qualquer", "quero um gato dócil"),
        &ScoringWeights::default(),
    );

    assert_eq!(result.score, 85);
    assert_eq!(result.reasons.len(), 3);
}

#[test]
fn test_scenario_dog_vs_cat() {
    let result = calculate_compatibility(
        &animal("cachorro", "", ""),
        &candidate("gato", "", ""),
        &ScoringWeights::default(),
    );

    assert_eq!(result.score, 0);
    assert_eq!(result.reasons, vec![REASON_SPECIES_INCOMPATIBLE]);
}

#[test]
fn test_species_mismatch_always_zero() {
    let weights = ScoringWeights::default();

    for animal_species in SPECIES {
        for wanted_species in SPECIES {
            if normalize_species(animal_species) == normalize_species(wanted_species) {
                continue;
            }
            for size in SIZES {
                let result = calculate_compatibility(
                    &animal(animal_species, size, "dócil calmo"),
                    &candidate(wanted_species, size, "dócil calmo"),
                    &weights,
                );

                assert_eq!(result.score, 0, "{} vs {}", animal_species, wanted_species);
                let incompatible = result.reasons.iter().filter(|r| r.contains("incompatível")).count();
                assert_eq!(result.reasons.len(), 1);
                assert_eq!(incompatible, 1);
            }
        }
    }
}

#[test]
fn test_species_and_size_match_scores_at_least_80() {
    let weights = ScoringWeights::default();

    for species in ["gato", "cachorro", "coelho"] {
        for size in ["pequeno", "médio", "grande"] {
            let same = calculate_compatibility(
                &animal(species, size, ""),
                &candidate(species, size, "nada a ver"),
                &weights,
            );
            let wildcard_size = calculate_compatibility(
                &animal(species, size, ""),
                &candidate(species, "qualquer", ""),
                &weights,
            );

            assert!(same.score >= 80);
            assert!(wildcard_size.score >= 80);
        }
    }
}

#[test]
fn test_full_wildcard_scores_at_least_80() {
    for species in SPECIES {
        for size in SIZES {
            let result = calculate_compatibility(
                &animal(species, size, "arisco"),
                &candidate("qualquer", "qualquer", ""),
                &ScoringWeights::default(),
            );
            assert!(result.score >= 80);
        }
    }
}

#[test]
fn test_keyword_bonus_is_monotonic() {
    let description = "castrado vacinado dócil brincalhão carinhoso calmo";
    let keywords = ["castrado", "vacinado", "dócil", "brincalhão", "carinhoso", "calmo"];
    let weights = ScoringWeights::default();

    let mut wanted = String::new();
    let mut previous = calculate_compatibility(
        &animal("gato", "pequeno", description),
        &candidate("gato", "grande", &wanted),
        &weights,
    )
    .score;

    for keyword in keywords {
        wanted.push(' ');
        wanted.push_str(keyword);

        let score = calculate_compatibility(
            &animal("gato", "pequeno", description),
            &candidate("gato", "grande", &wanted),
            &weights,
        )
        .score;

        assert_eq!(score, previous + weights.keyword);
        previous = score;
    }
}

#[test]
fn test_short_and_stoplisted_words_never_count() {
    let result = calculate_compatibility(
        &animal("gato", "pequeno", "very little animal that likes to have fun"),
        &candidate("gato", "grande", "very little animal likes have the fun"),
        &ScoringWeights::default(),
    );

    assert_eq!(result.score, 50);
}

#[test]
fn test_scoring_is_deterministic() {
    let a = animal("Cão", "Grande", "Protetor, ativo e leal");
    let c = candidate("cachorro", "grande", "leal ativo protetor");
    let weights = ScoringWeights::default();

    let first = calculate_compatibility(&a, &c, &weights);
    let second = calculate_compatibility(&a, &c, &weights);

    assert_eq!(first, second);
    assert_eq!(first.score, 95);
}

#[test]
fn test_keyword_extraction_is_left_to_right() {
    assert_eq!(extract_keywords("zebra, abacate; manga"), vec!["zebra", "abacate", "manga"]);
}

#[test]
fn test_species_canonical_tokens() {
    assert_eq!(normalize_species("GATA"), FELINE);
    assert_eq!(normalize_species("cadela"), CANINE);
}

#[test]
fn test_scenario_gap_uses_max() {
    assert_eq!(
        next_ticket(["M0001", "M0003"], TicketCategory::GroupEvent).unwrap(),
        "M0004"
    );
}

#[test]
fn test_scenario_first_stray_ticket() {
    assert_eq!(
        next_ticket(Vec::<&str>::new(), TicketCategory::StrayAnimal).unwrap(),
        "R0001"
    );
}

#[test]
fn test_scenario_batch_of_three() {
    assert_eq!(
        allocate_block(["B0010"], TicketCategory::LowCost, 3).unwrap(),
        vec!["B0011", "B0012", "B0013"]
    );
}

#[test]
fn test_next_ticket_is_idempotent() {
    let existing = vec!["M0001".to_string(), "M0002".to_string()];

    let first = next_ticket(existing.iter().map(String::as_str), TicketCategory::GroupEvent).unwrap();
    let second = next_ticket(existing.iter().map(String::as_str), TicketCategory::GroupEvent).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_category_isolation() {
    let base = ["R0004"];
    let crowded = ["R0004", "M9999", "B0500", "0777"];

    assert_eq!(
        next_ticket(base, TicketCategory::StrayAnimal).unwrap(),
        next_ticket(crowded, TicketCategory::StrayAnimal).unwrap()
    );
    assert_eq!(highest_sequence(crowded, TicketCategory::Unprefixed), 777);
}

#[test]
fn test_batch_is_distinct_contiguous_and_increasing() {
    let existing = ["M0040", "R0100"];
    let block = allocate_block(existing, TicketCategory::GroupEvent, 8).unwrap();

    let sequences: Vec<u32> = block
        .iter()
        .map(|ticket| {
            assert!(ticket.starts_with('M'));
            assert_eq!(ticket.len(), 5);
            ticket[1..].parse().unwrap()
        })
        .collect();

    assert_eq!(sequences, (41..=48).collect::<Vec<u32>>());
}
