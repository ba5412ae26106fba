use crate::core::normalize::fold;

/// Tokens at or below this length carry no signal
const MIN_TOKEN_CHARS: usize = 3;

const STOPLIST: &[&str] = &[
    "very", "little", "likes", "wants", "animal", "have",
    "muito", "muita", "pouco", "pouca", "gosta", "gosto", "quer", "quero", "animais",
    "bicho", "tenho", "temos", "para", "como", "mais", "menos", "esse", "essa", "este", "esta",
    "seja", "pode", "algum", "alguma", "sera",
];

/// Split free text into comparable keywords, left to right
///
/// Tokens are folded (lower-case, no diacritics); short and stoplisted
/// tokens are dropped. Duplicates are kept.
pub fn extract_keywords(text: &str) -> Vec<String> {
    fold(text)
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| token.chars().count() > MIN_TOKEN_CHARS)
        .filter(|token| !STOPLIST.contains(token))
        .map(str::to_string)
        .collect()
}

/// Count how many of the wanted keywords appear in the description
///
/// Matching is substring-based on folded text, so "brinca" matches
/// "brincalhão".
pub fn count_keyword_matches(wanted: &str, description: &str) -> usize {
    let haystack = fold(description);
    if haystack.is_empty() {
        return 0;
    }

    extract_keywords(wanted)
        .iter()
        .filter(|keyword| haystack.contains(keyword.as_str()))
        .count()
}
