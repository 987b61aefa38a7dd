//! Text rendering for profile reports.
//!
//! Collectors return structured records; turning them into the flat text
//! blobs that feed the aggregated context is a separate step behind
//! [`ReportRenderer`], so a machine-readable renderer can be swapped in
//! without touching collection.

use std::fmt::Write as _;

use super::Section;
use super::github::{GithubReport, RepositoryDetail};
use super::linkedin::{Language, LinkedInProfile};

/// Marker used wherever an absent scalar field would otherwise be omitted.
///
/// Sections always render with a stable structure, so downstream consumers
/// see the same shape regardless of which fields the upstream returned.
pub const NOT_AVAILABLE: &str = "not available";

/// Renders collected reports into display text.
pub trait ReportRenderer {
    fn render_github(&self, report: &GithubReport) -> String;
    fn render_linkedin(&self, profile: &LinkedInProfile) -> String;
}

/// The default plain-text renderer.
#[derive(Debug, Clone)]
pub struct TextRenderer {
    /// Number of events shown in the events section.
    pub event_limit: usize,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self { event_limit: 10 }
    }
}

impl TextRenderer {
    pub fn new(event_limit: usize) -> Self {
        Self { event_limit }
    }
}

fn opt(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or(NOT_AVAILABLE)
}

fn opt_num(value: &Option<u64>) -> String {
    value
        .map(|n| n.to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Renders a loaded-but-empty or unavailable section body.
///
/// `empty_marker` is the message for a genuinely empty collection;
/// an unavailable section renders its error instead, so the two stay
/// distinguishable in the output.
fn section_fallback<T>(out: &mut String, section: &Section<Vec<T>>, label: &str, empty_marker: &str) {
    match section {
        Section::Loaded(items) if items.is_empty() => {
            let _ = writeln!(out, "{empty_marker}");
        }
        Section::Loaded(_) => {}
        Section::Unavailable(err) => {
            let _ = writeln!(out, "{label} unavailable: {err}");
        }
    }
}

impl ReportRenderer for TextRenderer {
    fn render_github(&self, report: &GithubReport) -> String {
        let mut out = String::new();
        let profile = &report.profile;

        let _ = writeln!(out, "--- Profile for {} ---", report.username);
        let _ = writeln!(out, "login: {}", profile.login);
        let _ = writeln!(out, "id: {}", profile.id);
        let _ = writeln!(out, "name: {}", opt(&profile.name));
        let _ = writeln!(out, "company: {}", opt(&profile.company));
        let _ = writeln!(out, "blog: {}", opt(&profile.blog));
        let _ = writeln!(out, "location: {}", opt(&profile.location));
        let _ = writeln!(out, "email: {}", opt(&profile.email));
        let _ = writeln!(out, "bio: {}", opt(&profile.bio));
        let _ = writeln!(out, "twitter_username: {}", opt(&profile.twitter_username));
        let _ = writeln!(out, "public_repos: {}", opt_num(&profile.public_repos));
        let _ = writeln!(out, "followers: {}", opt_num(&profile.followers));
        let _ = writeln!(out, "following: {}", opt_num(&profile.following));
        let _ = writeln!(out, "created_at: {}", opt(&profile.created_at));

        let _ = writeln!(out, "\n--- Organizations ---");
        if let Some(orgs) = report.organizations.loaded() {
            for org in orgs {
                let _ = writeln!(out, "- {} ({})", org.login, opt(&org.description));
            }
        }
        section_fallback(
            &mut out,
            &report.organizations,
            "Organizations",
            "No public organizations found.",
        );

        let _ = writeln!(out, "\n--- Public Repositories ---");
        if let Some(repos) = report.repositories.loaded() {
            for detail in repos {
                render_repository(&mut out, detail);
            }
        }
        section_fallback(
            &mut out,
            &report.repositories,
            "Repositories",
            "No public repositories found.",
        );

        let _ = writeln!(out, "\n--- Public Gists ---");
        if let Some(gists) = report.gists.loaded() {
            for gist in gists {
                let _ = writeln!(
                    out,
                    "- {}: {}",
                    opt(&gist.html_url),
                    gist.description.as_deref().unwrap_or("No description"),
                );
            }
        }
        section_fallback(&mut out, &report.gists, "Gists", "No public gists found.");

        let _ = writeln!(out, "\n--- Recent Public Events ---");
        if let Some(events) = report.events.loaded() {
            for event in events.iter().take(self.event_limit) {
                let _ = writeln!(
                    out,
                    "- {} at {} in repo {}",
                    event.event_type,
                    opt(&event.created_at),
                    opt(&event.repo_name),
                );
            }
        }
        section_fallback(
            &mut out,
            &report.events,
            "Events",
            "No recent public events found.",
        );

        out.trim_end().to_string()
    }

    fn render_linkedin(&self, profile: &LinkedInProfile) -> String {
        let mut out = String::new();
        let na = |value: &Option<String>| -> String {
            value
                .as_deref()
                .unwrap_or("Not available")
                .to_string()
        };

        let _ = writeln!(out, "==== LinkedIn Profile ====");
        let _ = writeln!(out, "Name: {}", na(&profile.full_name));
        let _ = writeln!(out, "Headline: {}", na(&profile.headline));
        let _ = writeln!(out, "About/Bio: {}", na(&profile.about));
        let _ = writeln!(out, "Location: {}", na(&profile.location));
        let _ = writeln!(out, "Profile URL: {}", na(&profile.public_identifier));
        let _ = writeln!(out, "Profile Picture: {}", na(&profile.profile_pic_url));
        let contact = &profile.personal_contact_info;
        let _ = writeln!(
            out,
            "Email: {}",
            contact.email.as_deref().unwrap_or("N/A")
        );
        let _ = writeln!(
            out,
            "Phone: {}",
            contact.phone_number.as_deref().unwrap_or("N/A")
        );

        let _ = writeln!(out, "\n== Experiences ==");
        if profile.experiences.is_empty() {
            let _ = writeln!(out, "No experiences listed.");
        }
        for exp in &profile.experiences {
            let _ = writeln!(
                out,
                "- {} at {} ({} - {})",
                na(&exp.title),
                na(&exp.company),
                na(&exp.start_date),
                exp.end_date.as_deref().unwrap_or("Present"),
            );
        }

        let _ = writeln!(out, "\n== Education ==");
        if profile.educations.is_empty() {
            let _ = writeln!(out, "No education listed.");
        }
        for edu in &profile.educations {
            let _ = writeln!(out, "- {} ({})", na(&edu.school), na(&edu.degree_name));
        }

        let _ = writeln!(out, "\n== Skills ==");
        if profile.skills.is_empty() {
            let _ = writeln!(out, "No skills listed.");
        }
        for skill in &profile.skills {
            let _ = writeln!(out, "- {skill}");
        }

        let _ = writeln!(out, "\n== Projects ==");
        if profile.projects.is_empty() {
            let _ = writeln!(out, "No projects listed.");
        }
        for project in &profile.projects {
            let _ = writeln!(
                out,
                "- {}: {}",
                project.name.as_deref().unwrap_or("Unnamed Project"),
                project.description.as_deref().unwrap_or("No description"),
            );
        }

        let _ = writeln!(out, "\n== Certifications ==");
        if profile.certifications.is_empty() {
            let _ = writeln!(out, "No certifications listed.");
        }
        for cert in &profile.certifications {
            let _ = writeln!(out, "- {} from {}", na(&cert.name), na(&cert.issuer));
        }

        let _ = writeln!(out, "\n== Languages ==");
        if profile.languages.is_empty() {
            let _ = writeln!(out, "No languages listed.");
        }
        for language in &profile.languages {
            match language {
                Language::Name(name) => {
                    let _ = writeln!(out, "- {name}");
                }
                Language::Detailed { name, proficiency } => {
                    let _ = writeln!(
                        out,
                        "- {} ({})",
                        name.as_deref().unwrap_or("Not available"),
                        proficiency.as_deref().unwrap_or("N/A"),
                    );
                }
            }
        }

        out.trim_end().to_string()
    }
}

fn render_repository(out: &mut String, detail: &RepositoryDetail) {
    let repo = &detail.repository;
    let _ = writeln!(out, "\nRepo: {}", repo.name);
    let _ = writeln!(out, "  Description: {}", opt(&repo.description));
    let _ = writeln!(out, "  URL: {}", opt(&repo.html_url));
    let _ = writeln!(out, "  Language: {}", opt(&repo.language));
    let _ = writeln!(out, "  Stars: {}", opt_num(&repo.stargazers_count));
    let _ = writeln!(out, "  Forks: {}", opt_num(&repo.forks_count));
    let _ = writeln!(out, "  Open Issues: {}", opt_num(&repo.open_issues_count));
    let _ = writeln!(out, "  Created at: {}", opt(&repo.created_at));
    let _ = writeln!(out, "  Updated at: {}", opt(&repo.updated_at));
    let _ = writeln!(out, "  Default Branch: {}", opt(&repo.default_branch));

    match &detail.languages {
        Section::Loaded(languages) if !languages.is_empty() => {
            let _ = writeln!(out, "  Languages breakdown:");
            for (language, bytes) in languages {
                let _ = writeln!(out, "    {language}: {bytes} bytes");
            }
        }
        Section::Loaded(_) => {
            let _ = writeln!(out, "  No language breakdown available.");
        }
        Section::Unavailable(err) => {
            let _ = writeln!(out, "  Language breakdown unavailable: {err}");
        }
    }

    match &detail.branches {
        Section::Loaded(branches) if !branches.is_empty() => {
            let _ = writeln!(out, "  Branches: {}", branches.join(", "));
        }
        Section::Loaded(_) => {
            let _ = writeln!(out, "  No branches found.");
        }
        Section::Unavailable(err) => {
            let _ = writeln!(out, "  Branches unavailable: {err}");
        }
    }

    match &detail.commits {
        Section::Loaded(commits) if !commits.is_empty() => {
            let _ = writeln!(out, "  Latest commits:");
            for commit in commits {
                let _ = writeln!(
                    out,
                    "    {}: {} ({})",
                    commit.short_sha,
                    commit.message,
                    commit.date.as_deref().unwrap_or(NOT_AVAILABLE),
                );
            }
        }
        Section::Loaded(_) => {
            let _ = writeln!(out, "  No commits found.");
        }
        Section::Unavailable(err) => {
            let _ = writeln!(out, "  Commits unavailable: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OutreachError;
    use crate::report::github::{EventSummary, GithubProfile};
    use crate::report::linkedin::{ContactInfo, Experience};

    fn empty_report() -> GithubReport {
        GithubReport {
            username: "octocat".to_string(),
            profile: GithubProfile {
                login: "octocat".to_string(),
                id: 583231,
                name: Some("The Octocat".to_string()),
                company: None,
                blog: None,
                location: None,
                email: None,
                bio: None,
                twitter_username: None,
                public_repos: Some(8),
                followers: Some(1000),
                following: Some(9),
                created_at: Some("2011-01-25T18:44:36Z".to_string()),
            },
            organizations: Section::Loaded(vec![]),
            repositories: Section::Loaded(vec![]),
            gists: Section::Loaded(vec![]),
            events: Section::Loaded(vec![]),
        }
    }

    #[test]
    fn test_empty_sections_render_markers_in_fixed_order() {
        let text = TextRenderer::default().render_github(&empty_report());

        let positions: Vec<usize> = [
            "--- Profile for octocat ---",
            "--- Organizations ---",
            "--- Public Repositories ---",
            "--- Public Gists ---",
            "--- Recent Public Events ---",
        ]
        .iter()
        .map(|header| text.find(header).expect("section header missing"))
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));

        assert!(text.contains("No public organizations found."));
        assert!(text.contains("No public repositories found."));
        assert!(text.contains("No public gists found."));
        assert!(text.contains("No recent public events found."));
    }

    #[test]
    fn test_absent_profile_fields_render_marker() {
        let text = TextRenderer::default().render_github(&empty_report());
        assert!(text.contains(&format!("company: {NOT_AVAILABLE}")));
        assert!(text.contains(&format!("bio: {NOT_AVAILABLE}")));
    }

    #[test]
    fn test_unavailable_section_is_distinguishable_from_empty() {
        let mut report = empty_report();
        report.gists =
            Section::Unavailable(OutreachError::upstream_rejected("GitHub", 502, "bad gateway"));
        let text = TextRenderer::default().render_github(&report);
        assert!(text.contains("Gists unavailable:"));
        assert!(!text.contains("No public gists found."));
    }

    #[test]
    fn test_event_limit_caps_rendered_events() {
        let mut report = empty_report();
        let events: Vec<EventSummary> = (0..25)
            .map(|i| EventSummary {
                event_type: format!("PushEvent{i}"),
                created_at: None,
                repo_name: Some("octocat/hello-world".to_string()),
            })
            .collect();
        report.events = Section::Loaded(events);

        let text = TextRenderer::default().render_github(&report);
        assert!(text.contains("PushEvent9"));
        assert!(!text.contains("PushEvent10"));
    }

    #[test]
    fn test_linkedin_renders_both_language_shapes() {
        let profile = LinkedInProfile {
            full_name: Some("Ada Lovelace".to_string()),
            languages: vec![
                Language::Name("English".to_string()),
                Language::Detailed {
                    name: Some("French".to_string()),
                    proficiency: Some("ELEMENTARY".to_string()),
                },
            ],
            ..Default::default()
        };
        let text = TextRenderer::default().render_linkedin(&profile);
        assert!(text.contains("- English"));
        assert!(text.contains("- French (ELEMENTARY)"));
    }

    #[test]
    fn test_linkedin_empty_collections_render_placeholders() {
        let profile = LinkedInProfile {
            full_name: Some("Ada Lovelace".to_string()),
            personal_contact_info: ContactInfo::default(),
            experiences: vec![Experience {
                title: Some("Engineer".to_string()),
                company: Some("Analytical Engines Ltd".to_string()),
                start_date: Some("1840".to_string()),
                end_date: None,
            }],
            ..Default::default()
        };
        let text = TextRenderer::default().render_linkedin(&profile);

        assert!(text.contains("- Engineer at Analytical Engines Ltd (1840 - Present)"));
        assert!(text.contains("Email: N/A"));
        assert!(text.contains("No projects listed."));
        assert!(text.contains("No certifications listed."));
        assert!(text.contains("No languages listed."));

        // The rendered shape is stable: every section header is present
        // even when the data behind it is missing.
        for header in [
            "== Experiences ==",
            "== Education ==",
            "== Skills ==",
            "== Projects ==",
            "== Certifications ==",
            "== Languages ==",
        ] {
            assert!(text.contains(header), "missing header {header}");
        }
    }
}
