//! Catalog trait: read-only reference data consulted by the tools.
//!
//! Two mappings back the dispatcher: job title → assessment link, and
//! job id → job record. Both are keyed by exact string match. A miss is
//! an expected case and resolves to the catalog's fallback values.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Link returned when a job title has no dedicated assessment.
pub const DEFAULT_ASSESSMENT_LINK: &str = "https://assess.example.com/general";

/// Title used when a job id is not in the catalog.
pub const GENERIC_JOB_TITLE: &str = "Software Engineer";

/// Description used when a job id is not in the catalog.
pub const GENERIC_JOB_DESCRIPTION: &str = "Software engineering role requiring technical expertise.";

/// A job posting's title and description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRecord {
    pub title: String,
    pub description: String,
}

impl JobRecord {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    /// The generic record used for unknown job ids.
    pub fn generic() -> Self {
        Self::new(GENERIC_JOB_TITLE, GENERIC_JOB_DESCRIPTION)
    }
}

/// A read-only source of jobs and assessment links.
///
/// Implementations must not change their contents while dispatches are
/// running; the orchestrator shares one catalog across every call.
pub trait Catalog: Send + Sync {
    /// Exact-match job lookup.
    fn job(&self, job_id: &str) -> Option<JobRecord>;

    /// Exact-match assessment link lookup by job title.
    fn assessment_link(&self, job_title: &str) -> Option<String>;

    /// Every job with its id, ordered by id.
    fn jobs(&self) -> Vec<(String, JobRecord)>;

    fn fallback_job(&self) -> JobRecord {
        JobRecord::generic()
    }

    fn fallback_link(&self) -> String {
        DEFAULT_ASSESSMENT_LINK.to_string()
    }

    /// Job lookup with the documented default. The flag is `true` on a hit.
    fn resolve_job(&self, job_id: &str) -> (JobRecord, bool) {
        match self.job(job_id) {
            Some(job) => (job, true),
            None => (self.fallback_job(), false),
        }
    }

    /// Link lookup with the documented default. The flag is `true` on a hit.
    fn resolve_link(&self, job_title: &str) -> (String, bool) {
        match self.assessment_link(job_title) {
            Some(link) => (link, true),
            None => (self.fallback_link(), false),
        }
    }
}

/// In-memory catalog, built once at startup and shared behind an `Arc`.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    links: BTreeMap<String, String>,
    jobs: BTreeMap<String, JobRecord>,
    fallback_link: String,
    fallback_job: JobRecord,
}

impl StaticCatalog {
    /// An empty catalog: every lookup falls back.
    pub fn new() -> Self {
        Self {
            links: BTreeMap::new(),
            jobs: BTreeMap::new(),
            fallback_link: DEFAULT_ASSESSMENT_LINK.into(),
            fallback_job: JobRecord::generic(),
        }
    }

    /// The built-in sample postings and assessment links.
    pub fn builtin() -> Self {
        Self::new()
            .with_link("Python Developer", "https://assess.example.com/python")
            .with_link("Data Analyst", "https://assess.example.com/data")
            .with_link("Frontend Developer", "https://assess.example.com/frontend")
            .with_link("DevOps Engineer", "https://assess.example.com/devops")
            .with_link("Product Manager", "https://assess.example.com/product")
            .with_job(
                "J123",
                JobRecord::new(
                    "Python Developer",
                    "Python Developer role requiring FastAPI, async programming, REST APIs, \
                     PostgreSQL, and Docker. Must have 3+ years experience building scalable \
                     backend services.",
                ),
            )
            .with_job(
                "J456",
                JobRecord::new(
                    "Data Analyst",
                    "Data Analyst role requiring SQL, Tableau, Python for data analysis, \
                     statistical modeling, and experience with data warehousing concepts.",
                ),
            )
            .with_job(
                "J789",
                JobRecord::new(
                    "Frontend Developer",
                    "Frontend Developer role requiring React, TypeScript, modern CSS \
                     frameworks, and experience with responsive design and accessibility \
                     standards.",
                ),
            )
            .with_job(
                "J101",
                JobRecord::new(
                    "DevOps Engineer",
                    "DevOps Engineer role requiring Kubernetes, CI/CD pipelines, AWS/Azure, \
                     Terraform, and strong Linux system administration skills.",
                ),
            )
    }

    pub fn with_link(mut self, job_title: impl Into<String>, url: impl Into<String>) -> Self {
        self.links.insert(job_title.into(), url.into());
        self
    }

    pub fn with_job(mut self, job_id: impl Into<String>, record: JobRecord) -> Self {
        self.jobs.insert(job_id.into(), record);
        self
    }

    pub fn with_fallback_link(mut self, url: impl Into<String>) -> Self {
        self.fallback_link = url.into();
        self
    }

    pub fn with_fallback_job(mut self, record: JobRecord) -> Self {
        self.fallback_job = record;
        self
    }

    /// Assessment links ordered by job title.
    pub fn links(&self) -> impl Iterator<Item = (&str, &str)> {
        self.links.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn job_count(&self) -> usize {
        self.jobs.len()
    }

    pub fn link_count(&self) -> usize {
        self.links.len()
    }
}

impl Default for StaticCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalog for StaticCatalog {
    fn job(&self, job_id: &str) -> Option<JobRecord> {
        self.jobs.get(job_id).cloned()
    }

    fn assessment_link(&self, job_title: &str) -> Option<String> {
        self.links.get(job_title).cloned()
    }

    fn jobs(&self) -> Vec<(String, JobRecord)> {
        self.jobs
            .iter()
            .map(|(id, job)| (id.clone(), job.clone()))
            .collect()
    }

    fn fallback_job(&self) -> JobRecord {
        self.fallback_job.clone()
    }

    fn fallback_link(&self) -> String {
        self.fallback_link.clone()
    }
}
