//! Interest and tag normalization.
//!
//! Learner interests are free text ("UI/UX Design", "Frontend Development")
//! while course tags are short lowercase keywords ("uiux", "frontend").
//! Both sides go through [`normalize_interest`] before they are compared.

/// Words of an interest shorter than this never match on their own.
const MIN_WORD_LEN: usize = 3;

/// Lower-case and drop every character outside `[a-z0-9\s]`.
///
/// Total: any input yields a (possibly empty) token.
pub fn normalize_interest(raw: &str) -> String {
    raw.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace())
        .collect()
}

/// Normalize every entry, dropping the ones that normalize to nothing.
pub fn normalize_all<S: AsRef<str>>(raw: &[S]) -> Vec<String> {
    raw.iter()
        .map(|s| normalize_interest(s.as_ref()))
        .filter(|token| !token.trim().is_empty())
        .collect()
}

/// Three-way substring rule between one normalized tag and one normalized
/// interest:
/// 1. the tag contains the interest, or
/// 2. the interest contains the tag, or
/// 3. some whitespace-delimited word of the interest longer than two
///    characters is contained in the tag.
///
/// Empty tokens never match.
pub fn tag_matches_interest(tag: &str, interest: &str) -> bool {
    if tag.trim().is_empty() || interest.trim().is_empty() {
        return false;
    }
    tag.contains(interest)
        || interest.contains(tag)
        || interest
            .split_whitespace()
            .any(|word| word.len() >= MIN_WORD_LEN && tag.contains(word))
}

/// True when the tag matches at least one of the normalized interests.
pub fn tag_matches_any(tag: &str, interests: &[String]) -> bool {
    interests
        .iter()
        .any(|interest| tag_matches_interest(tag, interest))
}
