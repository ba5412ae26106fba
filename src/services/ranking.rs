use crate::core::{Matcher, RankResult};
use crate::models::AnimalListing;
use crate::services::store::{ListingStore, StoreError};

/// Rank every stored candidate against one listing
///
/// Candidates are read page by page in id order until the table is
/// exhausted; only the best `limit` matches are held between pages.
pub async fn rank_for_listing<S: ListingStore>(
    store: &S,
    matcher: &Matcher,
    animal_id: i32,
    limit: usize,
    page_size: usize,
) -> Result<(AnimalListing, RankResult), StoreError> {
    let animal = store.fetch_animal(animal_id).await?;
    let page_size = page_size.max(1);

    let mut ranking = matcher.ranking(&animal, limit);
    let mut after_id = 0;

    loop {
        let page = store.fetch_candidates_after(after_id, page_size).await?;
        let Some(last) = page.last() else { break };
        after_id = last.id;

        let full_page = page.len() == page_size;
        ranking.extend(page);
        if !full_page {
            break;
        }
    }

    tracing::debug!(
        "Scored {} candidates for animal {}",
        ranking.total_candidates(),
        animal_id
    );

    let result = ranking.finish();
    Ok((animal, result))
}
