//! GitHub profile collector.
//!
//! Gathers a user's public profile, organizations, repositories (with
//! per-repository languages, branches, and recent commits), gists, and
//! events through the REST API, strictly sequentially, and returns a
//! structured [`GithubReport`].

use std::collections::BTreeMap;

use reqwest::Client;
use reqwest::header::{AUTHORIZATION, USER_AGENT};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use outreach_core::config::OutreachConfig;
use outreach_core::error::{OutreachError, Result};
use outreach_core::report::Section;
use outreach_core::report::github::{
    CommitSummary, EventSummary, Gist, GithubProfile, GithubReport, Organization, Repository,
    RepositoryDetail,
};

const DEFAULT_BASE_URL: &str = "https://api.github.com";
const SERVICE: &str = "GitHub";
const AGENT: &str = "outreach";

/// Collector for public GitHub profile data.
///
/// A collector is a pure function of its inputs: the username comes in as
/// a parameter and the token is injected at construction, never read from
/// ambient state. When a token is present every call is authenticated;
/// otherwise calls go out unauthenticated under the API's stricter rate
/// limits.
#[derive(Clone)]
pub struct GithubCollector {
    client: Client,
    base_url: String,
    token: Option<String>,
    page_size: u32,
    commit_limit: usize,
}

impl GithubCollector {
    /// Creates a collector with default limits.
    pub fn new(token: Option<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            token,
            page_size: 100,
            commit_limit: 5,
        }
    }

    /// Creates a collector with the limits from `config`.
    pub fn from_config(config: &OutreachConfig, token: Option<String>) -> Self {
        Self::new(token)
            .with_page_size(config.page_size)
            .with_commit_limit(config.commit_limit)
    }

    /// Overrides the API base URL. Primarily for tests.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Overrides the pagination page size.
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Overrides the number of commits kept per repository.
    pub fn with_commit_limit(mut self, commit_limit: usize) -> Self {
        self.commit_limit = commit_limit;
        self
    }

    /// Collects the full report for `username`.
    ///
    /// A failed profile lookup short-circuits the whole collection; every
    /// other section degrades independently into
    /// [`Section::Unavailable`] without aborting the run.
    pub async fn collect(&self, username: &str) -> Result<GithubReport> {
        let profile: GithubProfile = self
            .get_json(&format!("/users/{username}"), &[])
            .await
            .map_err(|err| match err {
                OutreachError::UpstreamRejected { status: 404, .. } => {
                    OutreachError::not_found("GitHub user", username)
                }
                other => other,
            })?;
        debug!(username, "fetched GitHub profile");

        let organizations = Section::from_result(self.fetch_organizations(username).await);
        let repositories = Section::from_result(self.fetch_repositories(username).await);
        let gists = Section::from_result(self.fetch_gists(username).await);
        let events = Section::from_result(self.fetch_events(username).await);

        Ok(GithubReport {
            username: username.to_string(),
            profile,
            organizations,
            repositories,
            gists,
            events,
        })
    }

    async fn fetch_organizations(&self, username: &str) -> Result<Vec<Organization>> {
        self.get_json(&format!("/users/{username}/orgs"), &[]).await
    }

    async fn fetch_repositories(&self, username: &str) -> Result<Vec<RepositoryDetail>> {
        let repositories: Vec<Repository> =
            self.fetch_all_pages(&format!("/users/{username}/repos")).await?;

        let mut details = Vec::with_capacity(repositories.len());
        for repository in repositories {
            let detail = self.fetch_repository_detail(username, repository).await;
            details.push(detail);
        }
        Ok(details)
    }

    /// Issues the three per-repository sub-calls, each degrading
    /// independently.
    async fn fetch_repository_detail(
        &self,
        username: &str,
        repository: Repository,
    ) -> RepositoryDetail {
        let name = repository.name.clone();

        let languages: Result<BTreeMap<String, u64>> = self
            .get_json(&format!("/repos/{username}/{name}/languages"), &[])
            .await;
        let branches: Result<Vec<BranchDto>> = self
            .get_json(&format!("/repos/{username}/{name}/branches"), &[])
            .await;
        let commits: Result<Vec<CommitDto>> = self
            .get_json(
                &format!("/repos/{username}/{name}/commits"),
                &[("per_page", self.commit_limit.to_string())],
            )
            .await;

        RepositoryDetail {
            repository,
            languages: Section::from_result(languages),
            branches: Section::from_result(
                branches.map(|list| list.into_iter().map(|b| b.name).collect()),
            ),
            commits: Section::from_result(commits.map(|list| {
                list.into_iter()
                    .take(self.commit_limit)
                    .map(CommitDto::into_summary)
                    .collect()
            })),
        }
    }

    async fn fetch_gists(&self, username: &str) -> Result<Vec<Gist>> {
        self.fetch_all_pages(&format!("/users/{username}/gists")).await
    }

    async fn fetch_events(&self, username: &str) -> Result<Vec<EventSummary>> {
        let events: Vec<EventDto> =
            self.fetch_all_pages(&format!("/users/{username}/events")).await?;
        Ok(events.into_iter().map(EventDto::into_summary).collect())
    }

    /// Fetches successive pages until a page comes back shorter than the
    /// page size.
    ///
    /// An error on the first page fails the whole section; an error on a
    /// later page terminates pagination and keeps what was fetched, since
    /// the data so far is still useful.
    async fn fetch_all_pages<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>> {
        let mut items = Vec::new();
        let mut page: u32 = 1;
        loop {
            let query = [
                ("per_page", self.page_size.to_string()),
                ("page", page.to_string()),
            ];
            match self.get_json::<Vec<T>>(path, &query).await {
                Ok(batch) => {
                    let fetched = batch.len();
                    items.extend(batch);
                    if (fetched as u32) < self.page_size {
                        break;
                    }
                    page += 1;
                }
                Err(err) if page == 1 => return Err(err),
                Err(err) => {
                    warn!(path, page, error = %err, "pagination terminated early");
                    break;
                }
            }
        }
        Ok(items)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.client.get(&url).header(USER_AGENT, AGENT).query(query);
        if let Some(token) = &self.token {
            request = request.header(AUTHORIZATION, format!("token {token}"));
        }

        let response = request.send().await.map_err(|err| {
            OutreachError::upstream_unavailable(SERVICE, format!("request to {url} failed: {err}"))
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "failed to read error body".to_string());
            return Err(OutreachError::upstream_rejected(
                SERVICE,
                status.as_u16(),
                body,
            ));
        }

        response.json().await.map_err(|err| OutreachError::Serialization {
            format: "JSON".to_string(),
            message: format!("failed to parse {url} response: {err}"),
        })
    }
}

#[derive(Debug, Deserialize)]
struct BranchDto {
    name: String,
}

#[derive(Debug, Deserialize)]
struct CommitDto {
    sha: String,
    commit: Option<CommitDetailDto>,
}

#[derive(Debug, Deserialize)]
struct CommitDetailDto {
    message: Option<String>,
    author: Option<CommitAuthorDto>,
}

#[derive(Debug, Deserialize)]
struct CommitAuthorDto {
    date: Option<String>,
}

impl CommitDto {
    /// Reduces a commit to a 7-character short hash, the first line of
    /// its message, and the author date.
    fn into_summary(self) -> CommitSummary {
        let detail = self.commit;
        let message = detail
            .as_ref()
            .and_then(|d| d.message.as_deref())
            .unwrap_or_default()
            .lines()
            .next()
            .unwrap_or_default()
            .to_string();
        let date = detail.and_then(|d| d.author).and_then(|a| a.date);
        CommitSummary {
            short_sha: self.sha.chars().take(7).collect(),
            message,
            date,
        }
    }
}

#[derive(Debug, Deserialize)]
struct EventDto {
    #[serde(rename = "type")]
    event_type: String,
    created_at: Option<String>,
    repo: Option<EventRepoDto>,
}

#[derive(Debug, Deserialize)]
struct EventRepoDto {
    name: Option<String>,
}

impl EventDto {
    fn into_summary(self) -> EventSummary {
        EventSummary {
            event_type: self.event_type,
            created_at: self.created_at,
            repo_name: self.repo.and_then(|r| r.name),
        }
    }
}
