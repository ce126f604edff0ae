use std::sync::LazyLock;

use chrono::{DateTime, Datelike, Utc};
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const PROFILE_FILE: &str = "profile.json";

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("content file not found: {0}")]
    Missing(&'static str),
    #[error("couldn't parse content: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Badge {
    pub value: String,
    pub label: String,
    pub caption: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub period: String,
    pub grade: String,
    pub icon: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub title: String,
    pub icon: String,
    pub description: String,
    pub color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    pub title: String,
    pub company: String,
    pub location: String,
    pub period: String,
    pub description: String,
    pub responsibilities: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Certification {
    pub title: String,
    pub status: String,
    pub sponsor: String,
    pub description: String,
    /// Percent complete, 0-100.
    pub progress: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactInfo {
    pub label: String,
    pub value: String,
    #[serde(default)]
    pub href: Option<String>,
    pub icon: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Language {
    pub name: String,
    pub level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub href: String,
    pub icon: String,
}

/// Everything the page displays about its owner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub first_name: String,
    pub last_name: String,
    pub headline: String,
    pub tagline: String,
    pub location: String,
    pub portrait: String,
    pub cv: String,
    pub about: Vec<String>,
    pub badge: Badge,
    pub education: Vec<Education>,
    pub skills: Vec<Skill>,
    pub experience: Vec<Experience>,
    pub certification: Certification,
    pub contact: Vec<ContactInfo>,
    pub languages: Vec<Language>,
    pub social: Vec<SocialLink>,
}

impl Profile {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn parse(data: &[u8]) -> Result<Self, ContentError> {
        Ok(serde_json::from_slice(data)?)
    }

    pub fn load() -> Result<Self, ContentError> {
        let file = Assets::get(PROFILE_FILE).ok_or(ContentError::Missing(PROFILE_FILE))?;
        Self::parse(&file.data)
    }
}

/// The embedded profile, parsed on first use.
pub static PROFILE: LazyLock<Profile> =
    LazyLock::new(|| Profile::load().expect("embedded profile.json should be valid"));

/// Year the site was built, used for the footer copyright so server render
/// and hydration agree.
pub fn build_year() -> i32 {
    DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .map(|t| t.with_timezone(&Utc).year())
        .unwrap_or_else(|_| Utc::now().year())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_profile_loads() {
        let profile = Profile::load().unwrap();
        assert_eq!(profile.full_name(), "MUHAMMAD YOUNIS");
        assert_eq!(profile.about.len(), 3);
        assert_eq!(profile.education.len(), 3);
        assert_eq!(profile.skills.len(), 5);
        assert!(!profile.experience.is_empty());
        assert!(profile.certification.progress <= 100);
    }

    #[test]
    fn test_optional_href() {
        let profile = Profile::load().unwrap();
        let location = profile
            .contact
            .iter()
            .find(|c| c.label == "Location")
            .unwrap();
        assert!(location.href.is_none());
        assert!(profile.contact[0].href.is_some());
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            Profile::parse(b"{\"first_name\": 3}"),
            Err(ContentError::Parse(_))
        ));
    }

    #[test]
    fn test_build_year() {
        assert!(build_year() >= 2024);
    }
}
