use crate::weburl;

/// Bundled avatar, served from the static assets directory.
pub const DEFAULT_AVATAR: &str = "/assets/default-avatar.svg";

///
/// The displayed entity: a structured document describing a person.
///
/// Every field defaults so that partial documents still deserialize;
/// unknown fields in the source document are ignored.
///
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Profile {
    pub title: String,
    pub headline: String,
    pub aboutme: String,
    pub timeline: Vec<TimelineEntry>,
    pub skills: Vec<String>,
    pub email: String,
    pub website: String,
    pub dp: Option<String>,
}

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct TimelineEntry {
    pub name: String,
    pub location: String,
    pub position: String,
    pub r#from: String,
    pub to: String,
    pub responsibilities: Vec<String>,
}

impl TimelineEntry {
    pub fn period(&self) -> String {
        format!("{} - {}", self.r#from, self.to)
    }
}

impl Profile {
    /// Overwrite `dp` with the bundled avatar when the source document
    /// provides none, or one that is not URL-shaped.
    pub fn ensure_avatar(&mut self) {
        let valid = self.dp.as_deref().is_some_and(weburl::is_valid_url);
        if !valid {
            self.dp = Some(DEFAULT_AVATAR.to_string());
        }
    }

    pub fn avatar(&self) -> &str {
        self.dp.as_deref().unwrap_or(DEFAULT_AVATAR)
    }
}

/// The compiled-in profile shown when no document could be loaded.
pub fn default_profile() -> Profile {
    Profile {
        title: "RRK Jonnapalli".to_string(),
        headline: "Software Engineer".to_string(),
        aboutme: "I design and build backend systems and the occasional \
                  frontend to go with them. This page is rendered from a \
                  YAML document; point it at your own with ?q=<github-user>."
            .to_string(),
        timeline: vec![TimelineEntry {
            name: "Independent".to_string(),
            location: "Remote".to_string(),
            position: "Software Engineer".to_string(),
            r#from: "2018".to_string(),
            to: "present".to_string(),
            responsibilities: vec![
                "Built and operated data-driven web services".to_string(),
                "Published this portfolio template".to_string(),
            ],
        }],
        skills: vec![
            "Rust".to_string(),
            "TypeScript".to_string(),
            "PostgreSQL".to_string(),
            "Cloud infrastructure".to_string(),
        ],
        email: "hello@example.com".to_string(),
        website: "https://example.com".to_string(),
        dp: Some(DEFAULT_AVATAR.to_string()),
    }
}
