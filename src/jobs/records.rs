//! Job listing records
//!
//! The record shape mirrors the snapshot files produced upstream
//! (camelCase keys). Records are read-only to the search pipeline; derived
//! values like parsed timestamps are computed on demand and never stored
//! back.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::parse_posted_at;

/// One job listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRecord {
    pub title: String,
    pub company: String,
    pub location: String,
    /// Listing URL; the stable key for enrichment patches and the saved store
    #[serde(default)]
    pub url: String,
    /// Applicant-tracking-system identifier, when the upstream board has one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ats_id: Option<String>,
    /// Posting date as scraped; see [`crate::utils::parse_posted_at`] for
    /// the accepted shapes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub posted_at: Option<String>,
    /// Free-text salary ("$145K-$175K", "{'unit': 'USD', 'amount': ...}")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary_summary: Option<String>,
    /// Free-text experience requirement ("3-5 years")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<String>,
}

impl JobRecord {
    /// The fields general free-text search runs against
    pub fn searchable_text(&self) -> [&str; 3] {
        [&self.title, &self.company, &self.location]
    }

    /// Posting timestamp, when the posted-at text is parsable
    pub fn posted_timestamp(&self) -> Option<DateTime<Utc>> {
        self.posted_at.as_deref().and_then(parse_posted_at)
    }
}
