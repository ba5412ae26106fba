use crate::models::{AnimalListing, AdopterCandidate, Compatibility, RankedCandidate, ScoringWeights};
use crate::core::scoring::calculate_compatibility;

/// Result of ranking candidates for one listing
#[derive(Debug)]
pub struct RankResult {
    pub matches: Vec<RankedCandidate>,
    pub total_candidates: usize,
}

/// Ranks candidate adopters against a listed animal
///
/// Owns the scoring weights so handlers never pass literals around.
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
}

impl Matcher {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
        }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Score a single pair
    pub fn score(&self, animal: &AnimalListing, candidate: &AdopterCandidate) -> Compatibility {
        calculate_compatibility(animal, candidate, &self.weights)
    }

    /// Rank candidates for `animal`
    ///
    /// Candidates that fail the species gate are dropped. The remaining ones
    /// are ordered by score, highest first; ties keep their input order.
    pub fn rank(
        &self,
        animal: &AnimalListing,
        candidates: Vec<AdopterCandidate>,
        limit: usize,
    ) -> RankResult {
        let mut ranking = self.ranking(animal, limit);
        ranking.extend(candidates);
        ranking.finish()
    }

    /// Start an incremental ranking, fed one page of candidates at a time
    pub fn ranking<'a>(&'a self, animal: &'a AnimalListing, limit: usize) -> Ranking<'a> {
        Ranking {
            matcher: self,
            animal,
            limit,
            matches: Vec::with_capacity(limit),
            total_candidates: 0,
        }
    }
}

/// Running top-`limit` over candidates seen so far
///
/// Pages must arrive in storage order. Only the best `limit` matches are
/// kept between pages, so memory stays bounded however many rows are read.
pub struct Ranking<'a> {
    matcher: &'a Matcher,
    animal: &'a AnimalListing,
    limit: usize,
    matches: Vec<RankedCandidate>,
    total_candidates: usize,
}

impl Ranking<'_> {
    pub fn extend<I>(&mut self, candidates: I)
    where
        I: IntoIterator<Item = AdopterCandidate>,
    {
        for candidate in candidates {
            self.total_candidates += 1;

            let compatibility = self.matcher.score(self.animal, &candidate);
            if !compatibility.is_compatible() {
                continue;
            }

            self.matches.push(RankedCandidate {
                candidate_id: candidate.id,
                name: candidate.name,
                score: compatibility.score,
                reasons: compatibility.reasons,
            });
        }

        // Stable sort keeps storage order between equal scores, and earlier
        // pages stay ahead of later ones on ties
        self.matches.sort_by(|a, b| b.score.cmp(&a.score));
        self.matches.truncate(self.limit);
    }

    pub fn total_candidates(&self) -> usize {
        self.total_candidates
    }

    pub fn finish(self) -> RankResult {
        RankResult {
            matches: self.matches,
            total_candidates: self.total_candidates,
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_candidate(name: &str, species: &str, size: &str, characteristics: &str) -> AdopterCandidate {
        AdopterCandidate {
            id: 0,
            name: name.to_string(),
            species: species.to_string(),
            size: size.to_string(),
            characteristics: characteristics.to_string(),
        }
    }

    fn create_animal() -> AnimalListing {
        AnimalListing {
            id: 1,
            name: "Paçoca".to_string(),
            species: "cachorro".to_string(),
            size: "médio".to_string(),
            characteristics: "calma, castrada, adora crianças".to_string(),
        }
    }

    #[test]
    fn test_rank_drops_incompatible_species() {
        let matcher = Matcher::with_default_weights();
        let candidates = vec![
            create_candidate("Bia", "cão", "medio", ""),
            create_candidate("Caio", "gato", "qualquer", "calma"),
        ];

        let result = matcher.rank(&create_animal(), candidates, 10);

        assert_eq!(result.total_candidates, 2);
        assert_eq!(result.matches.len(), 1);
        assert_eq!(result.matches[0].name, "Bia");
    }

    #[test]
    fn test_rank_orders_by_score() {
        let matcher = Matcher::with_default_weights();
        let candidates = vec![
            create_candidate("Bia", "cachorro", "grande", ""),
            create_candidate("Duda", "qualquer", "qualquer", "calma com crianças"),
            create_candidate("Edu", "canino", "medio", ""),
        ];

        let result = matcher.rank(&create_animal(), candidates, 10);

        let names: Vec<&str> = result.matches.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Duda", "Edu", "Bia"]);
        assert_eq!(result.matches[0].score, 90);
    }

    #[test]
    fn test_rank_ties_keep_input_order() {
        let matcher = Matcher::with_default_weights();
        let candidates = vec![
            create_candidate("Fabi", "cachorro", "medio", ""),
            create_candidate("Gui", "cachorro", "medio", ""),
        ];

        let result = matcher.rank(&create_animal(), candidates, 10);

        assert_eq!(result.matches[0].name, "Fabi");
        assert_eq!(result.matches[1].name, "Gui");
    }

    #[test]
    fn test_respects_limit() {
        let matcher = Matcher::with_default_weights();
        let candidates: Vec<AdopterCandidate> = (0..20)
            .map(|i| create_candidate(&format!("Tutor {}", i), "cachorro", "qualquer", ""))
            .collect();

        let result = matcher.rank(&create_animal(), candidates, 5);

        assert_eq!(result.matches.len(), 5);
        assert_eq!(result.total_candidates, 20);
    }

    #[test]
    fn test_paged_ranking_sees_late_candidates() {
        let matcher = Matcher::with_default_weights();
        let animal = create_animal();
        let mut ranking = matcher.ranking(&animal, 2);

        ranking.extend(vec![
            create_candidate("Hugo", "cachorro", "grande", ""),
            create_candidate("Iris", "cachorro", "medio", ""),
        ]);
        ranking.extend(vec![
            create_candidate("Jade", "gato", "medio", ""),
            create_candidate("Leo", "cachorro", "grande", ""),
        ]);
        ranking.extend(vec![create_candidate("Mia", "canino", "medio", "calma castrada")]);

        assert_eq!(ranking.total_candidates(), 5);
        let result = ranking.finish();
        let ranked: Vec<(&str, u32)> = result
            .matches
            .iter()
            .map(|m| (m.name.as_str(), m.score))
            .collect();
        assert_eq!(ranked, vec![("Mia", 90), ("Iris", 80)]);
    }

    #[test]
    fn test_paged_ranking_matches_single_pass() {
        let matcher = Matcher::with_default_weights();
        let animal = create_animal();
        let candidates: Vec<AdopterCandidate> = (0..12)
            .map(|i| {
                let size = ["grande", "medio", "qualquer"][i % 3];
                create_candidate(&format!("Tutor {}", i), "cachorro", size, "")
            })
            .collect();

        let single = matcher.rank(&animal, candidates.clone(), 5);

        let mut ranking = matcher.ranking(&animal, 5);
        for page in candidates.chunks(4) {
            ranking.extend(page.to_vec());
        }
        let paged = ranking.finish();

        let names = |result: &RankResult| -> Vec<String> {
            result.matches.iter().map(|m| m.name.clone()).collect()
        };
        assert_eq!(names(&paged), names(&single));
        assert_eq!(paged.total_candidates, 12);
    }
}
