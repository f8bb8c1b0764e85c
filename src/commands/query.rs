//! Query command implementation
//!
//! Loads the snapshot, runs the search engine and renders a markdown
//! result list with the matched terms highlighted.

use std::collections::BTreeSet;
use tracing::debug;
use unicode_segmentation::UnicodeSegmentation;

use crate::cli::QueryArgs;
use crate::error::{normalize_text, validate_query, AppError};
use crate::jobs::{JobRecord, JobSource, SnapshotSource};
use crate::saved::SavedStore;
use crate::search::{FuzzyThresholds, QueryEngine, QueryOptions, SortKey};

const DEFAULT_LIMIT: usize = 50;
const MAX_LIMIT: usize = 200;

/// Execute the query command
pub fn execute_query(args: QueryArgs) -> Result<String, AppError> {
    let query = normalize_text(&args.query);
    validate_query(&query)?;

    let sort_by: SortKey = args.sort.parse()?;
    let mut thresholds = FuzzyThresholds::default();
    if let Some(value) = args.company_threshold {
        thresholds.company = value;
    }
    if let Some(value) = args.location_threshold {
        thresholds.location = value;
    }
    if let Some(value) = args.general_threshold {
        thresholds.general = value;
    }

    let engine = QueryEngine::new(QueryOptions {
        sort_by,
        age_filter_days: args.age,
        thresholds,
    })?;

    debug!(
        "Query '{}' against {} (sort: {})",
        query,
        args.input.display(),
        sort_by.as_str()
    );

    let mut source = SnapshotSource::new(&args.input);
    if let Some(enrich) = &args.enrich {
        source = source.with_enrichment(enrich);
    }
    let jobs = source.load()?;

    let outcome = engine.query(&jobs, &query);
    let mut results = outcome.jobs;

    if args.saved_only {
        let store = SavedStore::open_default()?;
        let saved: BTreeSet<String> = store.list()?.into_iter().collect();
        results.retain(|job| saved.contains(&job.url));
    }

    let total = results.len();
    let limit = args.limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT);
    results.truncate(limit);

    Ok(format_query_results(
        &results,
        &outcome.general_search,
        total,
    ))
}

/// Render matched listings as markdown, highlighting general-search terms
/// in the title and company lines.
pub fn format_query_results(jobs: &[&JobRecord], general_search: &str, total: usize) -> String {
    if jobs.is_empty() {
        return if general_search.is_empty() {
            "No listings matched.".to_string()
        } else {
            format!("No listings matched `{}`.", general_search)
        };
    }

    let terms: Vec<&str> = general_search.unicode_words().collect();

    let mut output = format!("# Listings ({} of {} shown)\n\n", jobs.len(), total);
    for (index, job) in jobs.iter().enumerate() {
        output.push_str(&format!(
            "## {}. {} — {}\n",
            index + 1,
            highlight(&job.title, &terms),
            highlight(&job.company, &terms)
        ));
        output.push_str(&format!("- Location: {}\n", job.location));
        if let Some(posted_at) = &job.posted_at {
            output.push_str(&format!("- Posted: {}\n", posted_at));
        }
        if let Some(salary) = &job.salary_summary {
            output.push_str(&format!("- Salary: {}\n", salary));
        }
        if let Some(experience) = &job.experience {
            output.push_str(&format!("- Experience: {}\n", experience));
        }
        if !job.url.is_empty() {
            output.push_str(&format!("- {}\n", job.url));
        }
        output.push('\n');
    }

    if !general_search.is_empty() {
        output.push_str(&format!("Search: `{}`\n", general_search));
    }

    output
}

/// Find all case-insensitive term occurrences, merge adjacent and
/// overlapping ranges, and wrap each merged range in **bold**.
fn highlight(text: &str, terms: &[&str]) -> String {
    if terms.is_empty() {
        return text.to_string();
    }

    let lower = text.to_lowercase();
    // Lowercasing can shift byte offsets for a handful of characters; skip
    // highlighting rather than risk slicing off a char boundary.
    if lower.len() != text.len() {
        return text.to_string();
    }

    let mut ranges: Vec<(usize, usize)> = Vec::new();
    for term in terms {
        let term = term.to_lowercase();
        if term.is_empty() {
            continue;
        }
        let mut index = 0usize;
        while let Some(position) = lower[index..].find(&term) {
            let start = index + position;
            ranges.push((start, start + term.len()));
            index = start + term.len();
        }
    }

    if ranges.is_empty() {
        return text.to_string();
    }

    ranges.sort_by_key(|range| range.0);
    let mut merged: Vec<(usize, usize)> = Vec::new();
    for (start, end) in ranges {
        match merged.last_mut() {
            Some(last) if start <= last.1 => last.1 = last.1.max(end),
            _ => merged.push((start, end)),
        }
    }

    let mut result = String::new();
    let mut cursor = 0usize;
    for (start, end) in merged {
        result.push_str(&text[cursor..start]);
        result.push_str("**");
        result.push_str(&text[start..end]);
        result.push_str("**");
        cursor = end;
    }
    result.push_str(&text[cursor..]);

    result
}
