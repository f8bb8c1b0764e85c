//! Structured query parsing
//!
//! Extracts `@age:`, `@company:` and `@location:` tags from free-form
//! search input, leaving the residual general-text query. Tag keywords are
//! case-insensitive; values are single whitespace-delimited tokens.

use regex::Regex;
use std::sync::OnceLock;

/// Parsed search input: scoped tag values plus the residual free text
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedSearch {
    /// Age cutoff in days from `@age:N`
    pub age: Option<u32>,
    /// Company scope from `@company:TEXT`
    pub company: Option<String>,
    /// Location scope from `@location:TEXT`
    pub location: Option<String>,
    /// Whatever text remains after tag extraction, whitespace-collapsed
    pub general_search: String,
}

fn age_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)@age:(\d+)").expect("age tag pattern"))
}

fn company_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)@company:([^@\s]+)").expect("company tag pattern"))
}

fn location_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)@location:([^@\s]+)").expect("location tag pattern"))
}

/// Parse raw search input into tag values and residual text.
///
/// Extraction runs age, then company, then location; each tag is taken at
/// most once and each extraction operates on the already-stripped remainder.
/// Repeated occurrences of the same tag are left embedded in the general
/// text as literal tokens.
pub fn parse_search_text(raw: &str) -> ParsedSearch {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return ParsedSearch::default();
    }

    let mut remainder = trimmed.to_string();

    let age = extract(age_re(), &mut remainder).and_then(|v| v.parse::<u32>().ok());
    let company = extract(company_re(), &mut remainder);
    let location = extract(location_re(), &mut remainder);

    let general_search = remainder
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");

    ParsedSearch {
        age,
        company,
        location,
        general_search,
    }
}

/// Remove the first match of `re` from `remainder`, returning its captured
/// value trimmed, or None when the tag is absent.
fn extract(re: &Regex, remainder: &mut String) -> Option<String> {
    let captures = re.captures(remainder)?;
    let value = captures.get(1).map(|m| m.as_str().trim().to_string());
    let span = captures.get(0).map(|m| m.range())?;
    remainder.replace_range(span, " ");

    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(parse_search_text(""), ParsedSearch::default());
        assert_eq!(parse_search_text("   "), ParsedSearch::default());
    }

    #[test]
    fn test_plain_text_passthrough() {
        let parsed = parse_search_text("senior rust engineer");
        assert_eq!(parsed.age, None);
        assert_eq!(parsed.company, None);
        assert_eq!(parsed.location, None);
        assert_eq!(parsed.general_search, "senior rust engineer");
    }

    #[test]
    fn test_age_extraction() {
        let parsed = parse_search_text("@age:7 react");
        assert_eq!(parsed.age, Some(7));
        assert_eq!(parsed.general_search, "react");
        assert_eq!(parsed.company, None);
        assert_eq!(parsed.location, None);
    }

    #[test]
    fn test_company_and_location_round_trip() {
        let parsed = parse_search_text("@company:OpenAI @location:Remote senior engineer");
        assert_eq!(parsed.company.as_deref(), Some("OpenAI"));
        assert_eq!(parsed.location.as_deref(), Some("Remote"));
        assert_eq!(parsed.general_search, "senior engineer");
        assert_eq!(parsed.age, None);
    }

    #[test]
    fn test_keywords_case_insensitive() {
        let parsed = parse_search_text("@Company:Acme @LOCATION:Berlin @Age:14");
        assert_eq!(parsed.company.as_deref(), Some("Acme"));
        assert_eq!(parsed.location.as_deref(), Some("Berlin"));
        assert_eq!(parsed.age, Some(14));
        assert_eq!(parsed.general_search, "");
    }

    #[test]
    fn test_tags_anywhere_in_text() {
        let parsed = parse_search_text("backend @company:Acme golang");
        assert_eq!(parsed.company.as_deref(), Some("Acme"));
        assert_eq!(parsed.general_search, "backend golang");
    }

    #[test]
    fn test_repeated_tag_stays_literal() {
        // Only the first occurrence is honored; the repeat is left in the
        // general text as-is.
        let parsed = parse_search_text("@company:Acme @company:Globex infra");
        assert_eq!(parsed.company.as_deref(), Some("Acme"));
        assert_eq!(parsed.general_search, "@company:Globex infra");
    }

    #[test]
    fn test_valueless_tag_is_not_extracted() {
        let parsed = parse_search_text("@company: react");
        assert_eq!(parsed.company, None);
        assert!(parsed.general_search.contains("react"));
    }

    #[test]
    fn test_age_requires_digits() {
        let parsed = parse_search_text("@age:soon react");
        assert_eq!(parsed.age, None);
        assert_eq!(parsed.general_search, "@age:soon react");
    }

    #[test]
    fn test_all_tags_with_general_text() {
        let parsed = parse_search_text("rust @age:30 @company:Initech @location:Austin staff");
        assert_eq!(parsed.age, Some(30));
        assert_eq!(parsed.company.as_deref(), Some("Initech"));
        assert_eq!(parsed.location.as_deref(), Some("Austin"));
        assert_eq!(parsed.general_search, "rust staff");
    }
}
