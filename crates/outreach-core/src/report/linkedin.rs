//! LinkedIn profile report records.
//!
//! Field names follow the Proxycurl v2 person endpoint so the records
//! deserialize straight from the provider response.

use serde::{Deserialize, Serialize};

/// Contact details returned when `personal_contact_info` is requested.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: Option<String>,
    pub phone_number: Option<String>,
}

/// One experience entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    pub title: Option<String>,
    pub company: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// One education entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    pub school: Option<String>,
    pub degree_name: Option<String>,
}

/// One project entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// One certification entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Certification {
    pub name: Option<String>,
    pub issuer: Option<String>,
}

/// A language entry.
///
/// The provider returns either a bare language name or a structured
/// name/proficiency pair; both shapes must deserialize and render.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Language {
    Detailed {
        name: Option<String>,
        proficiency: Option<String>,
    },
    Name(String),
}

/// The full result of one LinkedIn collection run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LinkedInProfile {
    pub full_name: Option<String>,
    pub headline: Option<String>,
    pub about: Option<String>,
    pub location: Option<String>,
    pub public_identifier: Option<String>,
    pub profile_pic_url: Option<String>,
    #[serde(default)]
    pub personal_contact_info: ContactInfo,
    #[serde(default)]
    pub experiences: Vec<Experience>,
    #[serde(default)]
    pub educations: Vec<Education>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub certifications: Vec<Certification>,
    #[serde(default)]
    pub languages: Vec<Language>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_deserializes_from_bare_string() {
        let lang: Language = serde_json::from_str("\"English\"").unwrap();
        assert!(matches!(lang, Language::Name(ref n) if n == "English"));
    }

    #[test]
    fn test_language_deserializes_from_object() {
        let lang: Language =
            serde_json::from_str(r#"{"name": "German", "proficiency": "PROFESSIONAL_WORKING"}"#)
                .unwrap();
        match lang {
            Language::Detailed { name, proficiency } => {
                assert_eq!(name.as_deref(), Some("German"));
                assert_eq!(proficiency.as_deref(), Some("PROFESSIONAL_WORKING"));
            }
            Language::Name(_) => panic!("expected the structured variant"),
        }
    }

    #[test]
    fn test_profile_deserializes_with_missing_collections() {
        let profile: LinkedInProfile =
            serde_json::from_str(r#"{"full_name": "Ada Lovelace"}"#).unwrap();
        assert_eq!(profile.full_name.as_deref(), Some("Ada Lovelace"));
        assert!(profile.experiences.is_empty());
        assert!(profile.languages.is_empty());
    }
}
