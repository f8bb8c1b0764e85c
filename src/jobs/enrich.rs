//! Enrichment patches
//!
//! The snapshot carries whatever the scrape saw; a relational store may
//! know better values for individual listings (corrected posting dates,
//! structured salary). Enrichment is modeled as a URL-keyed map of field
//! patches applied after the snapshot loads. A patch only overrides the
//! fields it carries.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::records::JobRecord;

/// Field overrides for one listing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub posted_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary_summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<String>,
}

impl JobPatch {
    /// Apply this patch to a record, overriding only the carried fields
    pub fn apply(&self, job: &mut JobRecord) {
        if let Some(posted_at) = &self.posted_at {
            job.posted_at = Some(posted_at.clone());
        }
        if let Some(salary_summary) = &self.salary_summary {
            job.salary_summary = Some(salary_summary.clone());
        }
        if let Some(experience) = &self.experience {
            job.experience = Some(experience.clone());
        }
    }
}

/// Apply a URL-keyed patch map to a collection in place
pub fn apply_enrichment(jobs: &mut [JobRecord], patches: &HashMap<String, JobPatch>) {
    for job in jobs.iter_mut() {
        if job.url.is_empty() {
            continue;
        }
        if let Some(patch) = patches.get(&job.url) {
            patch.apply(job);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(url: &str) -> JobRecord {
        serde_json::from_str(&format!(
            r#"{{"title": "Dev", "company": "Acme", "location": "X", "url": "{}", "experience": "2 years"}}"#,
            url
        ))
        .unwrap()
    }

    #[test]
    fn test_patch_overrides_only_carried_fields() {
        let mut job = record("https://example.com/1");
        let patch = JobPatch {
            salary_summary: Some("$120K".to_string()),
            ..JobPatch::default()
        };
        patch.apply(&mut job);
        assert_eq!(job.salary_summary.as_deref(), Some("$120K"));
        // untouched
        assert_eq!(job.experience.as_deref(), Some("2 years"));
    }

    #[test]
    fn test_enrichment_keyed_by_url() {
        let mut jobs = vec![record("https://example.com/1"), record("https://example.com/2")];
        let mut patches = HashMap::new();
        patches.insert(
            "https://example.com/2".to_string(),
            JobPatch {
                posted_at: Some("2026-08-01".to_string()),
                ..JobPatch::default()
            },
        );

        apply_enrichment(&mut jobs, &patches);
        assert_eq!(jobs[0].posted_at, None);
        assert_eq!(jobs[1].posted_at.as_deref(), Some("2026-08-01"));
    }

    #[test]
    fn test_urlless_records_skipped() {
        let mut jobs = vec![record("")];
        let mut patches = HashMap::new();
        patches.insert(
            "".to_string(),
            JobPatch {
                posted_at: Some("2026-08-01".to_string()),
                ..JobPatch::default()
            },
        );

        apply_enrichment(&mut jobs, &patches);
        assert_eq!(jobs[0].posted_at, None);
    }
}
