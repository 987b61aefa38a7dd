//! GitHub profile report records.
//!
//! These types are the structured result of a GitHub collection run. They
//! deserialize directly from the REST API payloads and carry everything the
//! text renderer needs; rendering itself lives in [`crate::report::render`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::Section;

/// Account-level fields of a GitHub user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GithubProfile {
    pub login: String,
    pub id: u64,
    pub name: Option<String>,
    pub company: Option<String>,
    pub blog: Option<String>,
    pub location: Option<String>,
    pub email: Option<String>,
    pub bio: Option<String>,
    pub twitter_username: Option<String>,
    #[serde(default)]
    pub public_repos: Option<u64>,
    #[serde(default)]
    pub followers: Option<u64>,
    #[serde(default)]
    pub following: Option<u64>,
    pub created_at: Option<String>,
}

/// A public organization membership.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Organization {
    pub login: String,
    pub description: Option<String>,
}

/// Repository fields taken from the repository listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repository {
    pub name: String,
    pub description: Option<String>,
    pub html_url: Option<String>,
    pub language: Option<String>,
    #[serde(default)]
    pub stargazers_count: Option<u64>,
    #[serde(default)]
    pub forks_count: Option<u64>,
    #[serde(default)]
    pub open_issues_count: Option<u64>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub default_branch: Option<String>,
}

/// A commit reduced to the fields shown in the report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitSummary {
    /// First 7 characters of the commit SHA.
    pub short_sha: String,
    /// First line of the commit message.
    pub message: String,
    /// Author date as reported by the API.
    pub date: Option<String>,
}

/// A repository together with its per-repository sub-collections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositoryDetail {
    pub repository: Repository,
    /// Language name to byte count.
    pub languages: Section<BTreeMap<String, u64>>,
    pub branches: Section<Vec<String>>,
    /// Up to the 5 most recent commits.
    pub commits: Section<Vec<CommitSummary>>,
}

/// A public gist.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Gist {
    pub html_url: Option<String>,
    pub description: Option<String>,
}

/// A public event reduced to the fields shown in the report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventSummary {
    pub event_type: String,
    pub created_at: Option<String>,
    pub repo_name: Option<String>,
}

/// The full result of one GitHub collection run.
///
/// The profile is mandatory: a failed profile lookup aborts collection
/// entirely. Every other section degrades independently via [`Section`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GithubReport {
    pub username: String,
    pub profile: GithubProfile,
    pub organizations: Section<Vec<Organization>>,
    pub repositories: Section<Vec<RepositoryDetail>>,
    pub gists: Section<Vec<Gist>>,
    pub events: Section<Vec<EventSummary>>,
}
