//! LinkedIn profile collector.
//!
//! One authenticated call to the Proxycurl person endpoint, returning a
//! structured [`LinkedInProfile`]. A non-success response is a typed
//! rejection carrying the status code and body, never payload text posing
//! as a successful report.

use reqwest::Client;
use tracing::debug;

use outreach_core::error::{OutreachError, Result};
use outreach_core::report::linkedin::LinkedInProfile;

const DEFAULT_BASE_URL: &str = "https://nubela.co/proxycurl/api/v2/linkedin";
const SERVICE: &str = "Proxycurl";

/// The fixed set of optional field groups requested from the provider.
const INCLUDE_FIELDS: [&str; 9] = [
    "skills",
    "personal_contact_info",
    "experiences",
    "educations",
    "accomplishments",
    "certifications",
    "projects",
    "languages",
    "about",
];

/// Collector for LinkedIn profile data via Proxycurl.
#[derive(Clone)]
pub struct LinkedInCollector {
    client: Client,
    base_url: String,
    api_key: String,
}

impl LinkedInCollector {
    /// Creates a collector authenticating with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
        }
    }

    /// Overrides the API base URL. Primarily for tests.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Fetches the profile behind `profile_url`.
    pub async fn collect(&self, profile_url: &str) -> Result<LinkedInProfile> {
        let mut query: Vec<(&str, &str)> = vec![
            ("url", profile_url),
            ("use_cache", "if-present"),
        ];
        query.extend(INCLUDE_FIELDS.iter().map(|field| (*field, "include")));

        let response = self
            .client
            .get(&self.base_url)
            .bearer_auth(&self.api_key)
            .query(&query)
            .send()
            .await
            .map_err(|err| {
                OutreachError::upstream_unavailable(SERVICE, format!("request failed: {err}"))
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

        let profile: LinkedInProfile = response.json().await.map_err(|err| {
            OutreachError::Serialization {
                format: "JSON".to_string(),
                message: format!("failed to parse {SERVICE} response: {err}"),
            }
        })?;
        debug!(
            name = profile.full_name.as_deref().unwrap_or("unknown"),
            "fetched LinkedIn profile"
        );
        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use outreach_core::report::linkedin::Language;
    use serde_json::json;
    use wiremock::matchers::{header, method, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn collector(server: &MockServer) -> LinkedInCollector {
        LinkedInCollector::new("pc-key").with_base_url(server.uri())
    }

    #[tokio::test]
    async fn test_collect_sends_fixed_query_and_bearer_auth() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(header("Authorization", "Bearer pc-key"))
            .and(query_param("url", "https://www.linkedin.com/in/ada"))
            .and(query_param("use_cache", "if-present"))
            .and(query_param("skills", "include"))
            .and(query_param("languages", "include"))
            .and(query_param("about", "include"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "full_name": "Ada Lovelace",
                "headline": "Mathematician",
                "about": "First programmer.",
                "public_identifier": "ada",
                "personal_contact_info": {"email": "ada@example.com", "phone_number": "+44 1"},
                "experiences": [{"title": "Analyst", "company": "Analytical Engines Ltd",
                                 "start_date": "1840", "end_date": null}],
                "skills": ["Mathematics"],
                "languages": ["English", {"name": "French", "proficiency": "ELEMENTARY"}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let profile = collector(&server)
            .collect("https://www.linkedin.com/in/ada")
            .await
            .unwrap();

        assert_eq!(profile.full_name.as_deref(), Some("Ada Lovelace"));
        assert_eq!(
            profile.personal_contact_info.email.as_deref(),
            Some("ada@example.com")
        );
        assert_eq!(profile.experiences.len(), 1);
        assert_eq!(profile.languages.len(), 2);
        assert!(matches!(profile.languages[0], Language::Name(_)));
        assert!(matches!(profile.languages[1], Language::Detailed { .. }));
    }

    #[tokio::test]
    async fn test_non_success_is_a_typed_rejection_not_content() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(403).set_body_string("invalid API key"))
            .mount(&server)
            .await;

        let err = collector(&server)
            .collect("https://www.linkedin.com/in/ada")
            .await
            .unwrap_err();

        match err {
            OutreachError::UpstreamRejected { status, body, .. } => {
                assert_eq!(status, 403);
                assert!(body.contains("invalid API key"));
            }
            other => panic!("expected UpstreamRejected, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_minimal_profile_deserializes_with_defaults() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&server)
            .await;

        let profile = collector(&server)
            .collect("https://www.linkedin.com/in/nobody")
            .await
            .unwrap();

        assert!(profile.full_name.is_none());
        assert!(profile.experiences.is_empty());
        assert!(profile.personal_contact_info.email.is_none());
    }
}
