//! Fuzzy field matching
//!
//! Decides whether a query matches a text field using a cascade of cheap
//! deterministic checks (exact, whole-string ratio, word boundary,
//! substring) before falling back to word-level edit-distance comparison.
//! Query text is always regex-escaped before word-boundary matching, so
//! metacharacters in user input ("C++") are matched literally.

use regex::Regex;

use super::similarity::similarity_ratio;

/// Default threshold when a call site does not specify one.
pub const DEFAULT_THRESHOLD: f64 = 0.6;

/// Queries shorter than this never participate in free substring matching;
/// two-letter fragments show up inside too many unrelated words.
const MIN_SUBSTRING_CHARS: usize = 3;

/// Minimum shorter/longer length ratio before two words are compared by
/// edit distance. Stops short query words from scoring spuriously high
/// against much longer text words.
const WORD_LENGTH_RATIO: f64 = 0.5;

/// Fuzzy matcher with a fixed similarity threshold
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuzzyMatcher {
    threshold: f64,
}

impl Default for FuzzyMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl FuzzyMatcher {
    /// Create a matcher with the default threshold
    pub fn new() -> Self {
        Self::with_threshold(DEFAULT_THRESHOLD)
    }

    /// Create a matcher with a caller-supplied threshold in `[0, 1]`
    pub fn with_threshold(threshold: f64) -> Self {
        Self { threshold }
    }

    /// The threshold this matcher compares similarity ratios against
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Decide whether `query` matches `text`.
    ///
    /// Both sides are trimmed and lowercased first; the cascade stops at the
    /// first rule that succeeds.
    pub fn matches(&self, text: &str, query: &str) -> bool {
        let text = text.trim().to_lowercase();
        let query = query.trim().to_lowercase();

        // 1. Exact match after normalization
        if text == query {
            return true;
        }
        if query.is_empty() {
            return false;
        }

        // 2. Whole-string similarity
        if similarity_ratio(&text, &query) >= self.threshold {
            return true;
        }

        // 3. Query appears as a complete word
        if word_boundary_match(&text, &query) {
            return true;
        }

        // 4. Substring containment, gated on query length
        if query.chars().count() >= MIN_SUBSTRING_CHARS && text.contains(&query) {
            return true;
        }

        // 5. Word-level fuzzy matching
        self.word_level_match(&text, &query)
    }

    fn word_level_match(&self, text: &str, query: &str) -> bool {
        let text_words: Vec<&str> = text.split_whitespace().collect();
        let query_words: Vec<&str> = query.split_whitespace().collect();

        match query_words.as_slice() {
            [] => false,
            [single] => self.single_word_match(&text_words, single),
            many => many
                .iter()
                .all(|word| self.query_word_supported(text, &text_words, word)),
        }
    }

    /// Single-word query against each word of the text
    fn single_word_match(&self, text_words: &[&str], query_word: &str) -> bool {
        let query_len = query_word.chars().count();

        // Too short for meaningful fuzzy comparison; literal containment only
        if query_len <= 2 {
            return text_words.iter().any(|word| word.contains(query_word));
        }

        for word in text_words {
            if *word == query_word {
                return true;
            }
            if query_len >= 4 && word.contains(query_word) {
                return true;
            }
            if length_ratio(word, query_word) >= WORD_LENGTH_RATIO
                && similarity_ratio(word, query_word) >= self.threshold
            {
                return true;
            }
        }

        false
    }

    /// Multi-word queries require every query word to find independent
    /// support in the text, not necessarily from the same text word.
    fn query_word_supported(&self, text: &str, text_words: &[&str], query_word: &str) -> bool {
        if text_words.iter().any(|word| *word == query_word) {
            return true;
        }
        if word_boundary_match(text, query_word) {
            return true;
        }
        if query_word.chars().count() >= MIN_SUBSTRING_CHARS && text.contains(query_word) {
            return true;
        }

        text_words.iter().any(|word| {
            length_ratio(word, query_word) >= WORD_LENGTH_RATIO
                && similarity_ratio(word, query_word) >= self.threshold
        })
    }
}

/// Whether `query` occurs as a complete word inside `text`.
///
/// The query is escaped before being embedded in the pattern; a query made
/// entirely of metacharacters simply fails to match rather than erroring.
fn word_boundary_match(text: &str, query: &str) -> bool {
    match Regex::new(&format!(r"\b{}\b", regex::escape(query))) {
        Ok(re) => re.is_match(text),
        Err(_) => false,
    }
}

/// Shorter length over longer length, in chars
fn length_ratio(a: &str, b: &str) -> f64 {
    let a = a.chars().count() as f64;
    let b = b.chars().count() as f64;
    if a.max(b) == 0.0 {
        return 1.0;
    }

    a.min(b) / a.max(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match_case_insensitive() {
        let matcher = FuzzyMatcher::new();
        assert!(matcher.matches("OpenAI", "openai"));
        assert!(matcher.matches("  Remote ", "remote"));
    }

    #[test]
    fn test_empty_query_only_matches_empty_text() {
        let matcher = FuzzyMatcher::new();
        assert!(matcher.matches("", ""));
        assert!(matcher.matches("   ", ""));
        assert!(!matcher.matches("hello", ""));
    }

    #[test]
    fn test_whole_string_similarity() {
        let matcher = FuzzyMatcher::with_threshold(0.8);
        // one substitution in eight chars
        assert!(matcher.matches("engineer", "enginear"));
        assert!(!matcher.matches("engineer", "plumber"));
    }

    #[test]
    fn test_word_boundary() {
        let matcher = FuzzyMatcher::with_threshold(0.95);
        assert!(matcher.matches("Acme Corp", "acme"));
        assert!(!matcher.matches("Macmean Ltd", "acme"));
    }

    #[test]
    fn test_substring_needs_three_chars() {
        let matcher = FuzzyMatcher::new();
        assert!(matcher.matches("JavaScript Developer", "script"));
        // "va" is a substring but under the 3-char gate; containment still
        // applies through the short-word branch of step 5
        assert!(matcher.matches("JavaScript Developer", "va"));
        assert!(!matcher.matches("Rust Developer", "qa"));
    }

    #[test]
    fn test_short_query_never_fuzzy() {
        let matcher = FuzzyMatcher::new();
        // "ai" appears as a literal word: matches
        assert!(matcher.matches("david ai", "ai"));
        // no literal "ai" anywhere: must not match via similarity
        assert!(!matcher.matches("developer", "ai"));
        assert!(!matcher.matches("dravid", "ai"));
    }

    #[test]
    fn test_regex_metacharacters_are_literal() {
        let matcher = FuzzyMatcher::new();
        // must not panic and must return a boolean
        assert!(matcher.matches("C++ Engineer", "C++"));
        assert!(matcher.matches("Lead (Remote)", "(remote)"));
        assert!(!matcher.matches("Plain text", "[a-z]+++"));
    }

    #[test]
    fn test_single_word_fuzzy_against_text_words() {
        let matcher = FuzzyMatcher::new();
        // "develper" vs "developer": ratio 8/9 over the word pair
        assert!(matcher.matches("Senior Developer", "develper"));
        // length-ratio gate: 3 vs 9 chars is below 0.5, no fuzzy comparison
        assert!(!matcher.matches("refrigeration", "fry"));
    }

    #[test]
    fn test_multi_word_requires_every_word() {
        let matcher = FuzzyMatcher::new();
        assert!(matcher.matches("Senior Frontend Developer", "senior frontend"));
        assert!(matcher.matches("Senior Frontend Developer", "frontend develper"));
        assert!(!matcher.matches("Senior Frontend Developer", "senior backend"));
    }

    #[test]
    fn test_reflexive() {
        for threshold in [0.0, 0.6, 1.0] {
            let matcher = FuzzyMatcher::with_threshold(threshold);
            assert!(matcher.matches("Staff Engineer", "Staff Engineer"));
        }
    }
}
