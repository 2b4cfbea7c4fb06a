pub mod error;
pub mod notice;
pub mod profile;
pub mod theme;
pub mod weburl;

/// Identifier used to locate a person's profile document.
pub const FALLBACK_SLUG: &str = "rrkjonnapalli";

/// Page title shown when the requested document did not load.
pub const DEFAULT_PAGE_TITLE: &str = "Portfolio";

///
/// Short token locating a profile document, normalized to lowercase.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileSlug(String);

impl ProfileSlug {
    /// Resolve the slug from the `q` query parameter.
    /// An absent or empty value yields the fallback slug.
    pub fn from_query(q: Option<&str>) -> Self {
        match q {
            Some(q) if !q.is_empty() => Self(q.to_lowercase()),
            _ => Self::fallback(),
        }
    }

    pub fn fallback() -> Self {
        Self(FALLBACK_SLUG.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProfileSlug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
