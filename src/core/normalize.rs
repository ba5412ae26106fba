use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

/// Canonical species tokens
pub const FELINE: &str = "felino";
pub const CANINE: &str = "canino";

/// Value meaning "no constraint on this field"
pub const WILDCARD: &str = "qualquer";

const WILDCARD_ALIASES: &[&str] = &["qualquer", "any", "indiferente", "tanto faz"];

const FELINE_ALIASES: &[&str] = &["gato", "gata", "gatos", "gatas", "gatinho", "gatinha", "felino", "felina", "cat", "feline"];
const CANINE_ALIASES: &[&str] = &[
    "cachorro", "cachorra", "cachorros", "cachorrinho", "cao", "caes", "cadela", "canino", "canina",
    "dog", "canine",
];

const SMALL_ALIASES: &[&str] = &["pequeno", "pequena", "p", "small"];
const MEDIUM_ALIASES: &[&str] = &["medio", "media", "m", "medium"];
const LARGE_ALIASES: &[&str] = &["grande", "g", "large"];

/// Lower-case, trim and strip diacritics
///
/// "  Dócil " -> "docil"
pub fn fold(text: &str) -> String {
    text.trim()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Normalize a species field to its canonical token
///
/// Unknown species are returned folded but otherwise untouched, so two
/// identical unknown values still compare equal.
pub fn normalize_species(raw: &str) -> String {
    let folded = fold(raw);
    canonical(&folded, &[(FELINE, FELINE_ALIASES), (CANINE, CANINE_ALIASES)])
}

/// Normalize a size field to its canonical token
pub fn normalize_size(raw: &str) -> String {
    let folded = fold(raw);
    canonical(
        &folded,
        &[("pequeno", SMALL_ALIASES), ("medio", MEDIUM_ALIASES), ("grande", LARGE_ALIASES)],
    )
}

#[inline]
pub fn is_wildcard(normalized: &str) -> bool {
    normalized == WILDCARD
}

fn canonical(folded: &str, groups: &[(&str, &[&str])]) -> String {
    if WILDCARD_ALIASES.contains(&folded) {
        return WILDCARD.to_string();
    }

    groups
        .iter()
        .find(|(_, aliases)| aliases.contains(&folded))
        .map(|(token, _)| token.to_string())
        .unwrap_or_else(|| folded.to_string())
}
