use dashmap::DashMap;
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, LazyLock};
use thiserror::Error;

pub const SITE_CONTENT_FILE: &str = "site.json";
pub const MAX_RATING: u8 = 5;
/// Spot in [`Profile::bio`] where the live experience counter goes.
pub const EXPERIENCE_PLACEHOLDER: &str = "{experience}";

pub static GLOBAL_CONTENT_CACHE: LazyLock<DashMap<String, Arc<SiteContent>>> =
    LazyLock::new(DashMap::new);

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("Content file not found: {0}")]
    NotFound(String),
    #[error("Couldn't parse content: {0}")]
    Parse(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub role: String,
    pub brand: String,
    pub tagline: String,
    pub bio: String,
    pub email: String,
    pub portrait: String,
    pub resume: String,
}

impl Profile {
    /// Splits the bio around [`EXPERIENCE_PLACEHOLDER`].
    pub fn bio_parts(&self) -> Option<(&str, &str)> {
        self.bio.split_once(EXPERIENCE_PLACEHOLDER)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavItem {
    pub name: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
    /// Icon font class, e.g. `devicon-github-plain`.
    pub icon: String,
}

/// A number animated from zero in the about section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    pub key: String,
    pub label: String,
    pub target: u32,
    pub duration_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub icon: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub title: String,
    pub period: String,
    pub description: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub period: String,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certification {
    pub title: String,
    pub issuer: String,
    pub year: String,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub tech: Vec<String>,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub github: String,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub name: String,
    pub position: String,
    pub feedback: String,
    pub rating: u8,
    pub avatar: String,
    pub project: String,
}

impl Testimonial {
    /// One flag per star, `true` where the star is filled.
    pub fn stars(&self) -> [bool; MAX_RATING as usize] {
        let filled = self.rating.min(MAX_RATING) as usize;
        std::array::from_fn(|i| i < filled)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

/// Everything the page displays. Read-only once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteContent {
    pub profile: Profile,
    pub nav: Vec<NavItem>,
    pub socials: Vec<SocialLink>,
    pub metrics: Vec<Metric>,
    pub skills: Vec<Skill>,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub certifications: Vec<Certification>,
    pub projects: Vec<Project>,
    pub testimonials: Vec<Testimonial>,
    pub faqs: Vec<Faq>,
}

impl SiteContent {
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        serde_json::from_str(json).map_err(|e| ContentError::Parse(e.to_string()))
    }

    pub fn metric(&self, key: &str) -> Option<&Metric> {
        self.metrics.iter().find(|m| m.key == key)
    }
}

/// Loads an embedded content file, parsing it once per process.
pub fn load(name: &str) -> Result<Arc<SiteContent>, ContentError> {
    let cache = &*GLOBAL_CONTENT_CACHE;
    let entry = cache.entry(name.to_string()).or_try_insert_with(|| {
        let file = Assets::get(name).ok_or_else(|| ContentError::NotFound(name.to_string()))?;
        let json =
            std::str::from_utf8(&file.data).map_err(|e| ContentError::Parse(e.to_string()))?;
        log::debug!("parsed content file {name}");
        Ok(Arc::new(SiteContent::from_json(json)?))
    })?;
    Ok(entry.value().clone())
}

pub fn site_content() -> Result<Arc<SiteContent>, ContentError> {
    load(SITE_CONTENT_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_content_parses() {
        let content = site_content().expect("embedded content should parse");
        assert!(!content.profile.name.is_empty());
        assert!(!content.projects.is_empty());
        assert!(!content.faqs.is_empty());

        let anchors = content.nav.iter().map(|n| n.href.as_str()).collect::<Vec<_>>();
        for anchor in [
            "#home",
            "#about",
            "#projects",
            "#testimonials",
            "#faq",
            "#contact",
        ] {
            assert!(anchors.contains(&anchor), "missing nav anchor {anchor}");
        }
    }

    #[test]
    fn test_metrics_present() {
        let content = site_content().unwrap();
        let projects = content.metric("projects").expect("projects metric");
        assert_eq!(projects.target, 15);
        assert_eq!(projects.duration_ms, 600);
        assert!(content.metric("experience").is_some());
        assert!(content.metric("techs").is_some());
        assert!(content.metric("nope").is_none());
    }

    #[test]
    fn test_bio_parts() {
        let content = site_content().unwrap();
        let (before, after) = content.profile.bio_parts().expect("bio has a placeholder");
        assert!(before.starts_with("a passionate"));
        assert!(after.starts_with("+ years"));

        let mut profile = content.profile.clone();
        profile.bio = "no counter here".to_string();
        assert_eq!(profile.bio_parts(), None);
    }

    #[test]
    fn test_load_is_cached() {
        let a = site_content().unwrap();
        let b = site_content().unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_missing_file() {
        assert_eq!(
            load("missing.json").unwrap_err(),
            ContentError::NotFound("missing.json".to_string())
        );
    }

    #[test]
    fn test_bad_json() {
        assert!(matches!(
            SiteContent::from_json("{\"profile\": 3}"),
            Err(ContentError::Parse(_))
        ));
    }

    #[test]
    fn test_stars() {
        let content = site_content().unwrap();
        for t in &content.testimonials {
            let stars = t.stars();
            assert_eq!(stars.len(), 5);
            assert_eq!(stars.iter().filter(|s| **s).count(), t.rating.min(5) as usize);
        }

        let mut t = content.testimonials[0].clone();
        t.rating = 9;
        assert_eq!(t.stars(), [true; 5]);
        t.rating = 0;
        assert_eq!(t.stars(), [false; 5]);
    }
}
