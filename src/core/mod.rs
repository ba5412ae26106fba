// Core algorithm exports
pub mod keywords;
pub mod matcher;
pub mod normalize;
pub mod scoring;
pub mod tickets;

pub use keywords::{extract_keywords, count_keyword_matches};
pub use matcher::{Matcher, RankResult, Ranking};
pub use normalize::{fold, normalize_species, normalize_size};
pub use scoring::calculate_compatibility;
pub use tickets::{allocate_block, highest_sequence, next_ticket, TicketError};
