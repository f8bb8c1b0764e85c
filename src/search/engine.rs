//! Job collection query engine
//!
//! Composes the structured query parser, the fuzzy field matcher and the
//! numeric extractors into one filter-and-sort pipeline over an in-memory
//! job collection. The engine is a pure function of its inputs: records are
//! never mutated, and every derived value (timestamps, sort keys) is
//! recomputed per evaluation.

use chrono::{DateTime, Duration, Utc};
use std::cmp::Ordering;
use std::str::FromStr;
use tracing::debug;

use crate::error::AppError;
use crate::jobs::JobRecord;

use super::fuzzy::FuzzyMatcher;
use super::numeric::{experience_value, salary_value};
use super::parser::parse_search_text;

/// Sort orders the engine can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Title,
    Company,
    Location,
    Recent,
    Experience,
    Salary,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Title => "title",
            SortKey::Company => "company",
            SortKey::Location => "location",
            SortKey::Recent => "recent",
            SortKey::Experience => "experience",
            SortKey::Salary => "salary",
        }
    }
}

impl Default for SortKey {
    fn default() -> Self {
        SortKey::Recent
    }
}

impl FromStr for SortKey {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "title" => Ok(SortKey::Title),
            "company" => Ok(SortKey::Company),
            "location" => Ok(SortKey::Location),
            "recent" => Ok(SortKey::Recent),
            "experience" => Ok(SortKey::Experience),
            "salary" => Ok(SortKey::Salary),
            other => Err(AppError::Configuration(format!(
                "unknown sort key: {} (expected title, company, location, recent, experience or salary)",
                other
            ))),
        }
    }
}

/// Fuzzy-match thresholds per query scope.
///
/// Policy constants of the deployment, exposed as configuration rather than
/// hard-coded at the call sites.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuzzyThresholds {
    /// `@company:` tag matching
    pub company: f64,
    /// `@location:` tag matching
    pub location: f64,
    /// General free-text matching against title, company and location
    pub general: f64,
}

impl Default for FuzzyThresholds {
    fn default() -> Self {
        Self {
            company: 0.95,
            location: 0.85,
            general: 0.75,
        }
    }
}

/// Engine configuration, validated before any query runs
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct QueryOptions {
    pub sort_by: SortKey,
    /// Explicit age cutoff in days; an `@age:` tag in the query overrides it
    pub age_filter_days: Option<u32>,
    pub thresholds: FuzzyThresholds,
}

impl QueryOptions {
    /// Fail fast on configuration that would otherwise surface as quietly
    /// wrong results deep inside the pipeline.
    pub fn validate(&self) -> Result<(), AppError> {
        for (scope, value) in [
            ("company", self.thresholds.company),
            ("location", self.thresholds.location),
            ("general", self.thresholds.general),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(AppError::Configuration(format!(
                    "{} threshold {} is outside [0, 1]",
                    scope, value
                )));
            }
        }

        Ok(())
    }
}

/// Result of one query evaluation: borrowed records in final order plus the
/// residual general-search text for display.
#[derive(Debug, PartialEq)]
pub struct QueryOutcome<'a> {
    pub jobs: Vec<&'a JobRecord>,
    pub general_search: String,
}

/// Filter-and-sort engine over a job collection
#[derive(Debug, Clone)]
pub struct QueryEngine {
    options: QueryOptions,
}

impl QueryEngine {
    /// Build an engine, rejecting invalid configuration up front
    pub fn new(options: QueryOptions) -> Result<Self, AppError> {
        options.validate()?;
        Ok(Self { options })
    }

    pub fn options(&self) -> &QueryOptions {
        &self.options
    }

    /// Evaluate one query against the collection.
    ///
    /// Pipeline order: parse tags → age cutoff → company scope → location
    /// scope → general text → sort. Malformed record data never errors; it
    /// degrades to "excluded from the age filter" or "sorts last".
    pub fn query<'a>(&self, jobs: &'a [JobRecord], raw_search: &str) -> QueryOutcome<'a> {
        let parsed = parse_search_text(raw_search);
        let now = Utc::now();

        let mut kept: Vec<&JobRecord> = jobs.iter().collect();

        let cutoff_days = parsed.age.or(self.options.age_filter_days);
        if let Some(days) = cutoff_days {
            let oldest = now - Duration::days(i64::from(days));
            kept.retain(|job| matches!(job.posted_timestamp(), Some(ts) if ts >= oldest));
        }

        if let Some(company) = &parsed.company {
            let matcher = FuzzyMatcher::with_threshold(self.options.thresholds.company);
            kept.retain(|job| matcher.matches(&job.company, company));
        }

        if let Some(location) = &parsed.location {
            let matcher = FuzzyMatcher::with_threshold(self.options.thresholds.location);
            kept.retain(|job| matcher.matches(&job.location, location));
        }

        if !parsed.general_search.is_empty() {
            let matcher = FuzzyMatcher::with_threshold(self.options.thresholds.general);
            kept.retain(|job| {
                job.searchable_text()
                    .iter()
                    .any(|field| matcher.matches(field, &parsed.general_search))
            });
        }

        debug!(
            "query kept {} of {} listings (age={:?}, company={:?}, location={:?}, general='{}')",
            kept.len(),
            jobs.len(),
            cutoff_days,
            parsed.company,
            parsed.location,
            parsed.general_search
        );

        QueryOutcome {
            jobs: self.sorted(kept),
            general_search: parsed.general_search,
        }
    }

    /// Stable sort under the configured key. Sort keys are computed once per
    /// record per evaluation, not inside the comparator.
    fn sorted<'a>(&self, jobs: Vec<&'a JobRecord>) -> Vec<&'a JobRecord> {
        match self.options.sort_by {
            SortKey::Title => sort_by_text(jobs, |job| &job.title),
            SortKey::Company => sort_by_text(jobs, |job| &job.company),
            SortKey::Location => sort_by_text(jobs, |job| &job.location),
            SortKey::Recent => sort_by_recency(jobs),
            SortKey::Experience => {
                sort_by_value(jobs, |job| experience_value(job.experience.as_deref()), false)
            }
            SortKey::Salary => {
                sort_by_value(jobs, |job| salary_value(job.salary_summary.as_deref()), true)
            }
        }
    }
}

/// Case-insensitive ascending ordering on a trimmed text field
fn sort_by_text<'a>(
    jobs: Vec<&'a JobRecord>,
    field: impl Fn(&JobRecord) -> &str,
) -> Vec<&'a JobRecord> {
    let mut decorated: Vec<(String, &JobRecord)> = jobs
        .into_iter()
        .map(|job| (field(job).trim().to_lowercase(), job))
        .collect();
    decorated.sort_by(|a, b| a.0.cmp(&b.0));

    decorated.into_iter().map(|(_, job)| job).collect()
}

/// Newest first; records with no parsable timestamp sort last, ties keep
/// their input order (stable sort).
fn sort_by_recency(jobs: Vec<&JobRecord>) -> Vec<&JobRecord> {
    let mut decorated: Vec<(Option<DateTime<Utc>>, &JobRecord)> = jobs
        .into_iter()
        .map(|job| (job.posted_timestamp(), job))
        .collect();
    decorated.sort_by(|a, b| match (a.0, b.0) {
        (Some(left), Some(right)) => right.cmp(&left),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });

    decorated.into_iter().map(|(_, job)| job).collect()
}

fn sort_by_value<'a>(
    jobs: Vec<&'a JobRecord>,
    value: impl Fn(&JobRecord) -> f64,
    descending: bool,
) -> Vec<&'a JobRecord> {
    let mut decorated: Vec<(f64, &JobRecord)> =
        jobs.into_iter().map(|job| (value(job), job)).collect();
    decorated.sort_by(|a, b| {
        if descending {
            b.0.total_cmp(&a.0)
        } else {
            a.0.total_cmp(&b.0)
        }
    });

    decorated.into_iter().map(|(_, job)| job).collect()
}
