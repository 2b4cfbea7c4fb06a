use portfolio_core::notice::Notice;
use portfolio_core::profile::{self, Profile};
use portfolio_core::{ProfileSlug, DEFAULT_PAGE_TITLE};
use portfolio_source::document::FetchDocument;

use entrait::entrait_export as entrait;

///
/// Outcome of the two-attempt loading sequence. Infallible: when both the
/// requested and the fallback document fail, the compiled-in default
/// profile is used and the page stays usable.
///
#[derive(Clone, Debug)]
pub struct ResolvedProfile {
    pub profile: Profile,
    pub page_title: String,
    pub notice: Option<Notice>,
}

/// Resolve the profile to display for `slug`.
///
/// Primary fetch -> on any failure, warn and retry with the fallback slug
/// -> on a second failure, keep the default profile. Fetch and parse
/// failures are deliberately not distinguished in the warning.
#[entrait(pub ResolveProfile, mock_api=ResolveProfileMock)]
async fn resolve_profile(deps: &impl FetchDocument, slug: &ProfileSlug) -> ResolvedProfile {
    match deps.fetch_document(slug).await {
        Ok(mut profile) => {
            profile.ensure_avatar();
            ResolvedProfile {
                profile,
                page_title: format!("{slug}'s Portfolio"),
                notice: None,
            }
        }
        Err(error) => {
            tracing::error!("could not load profile document for \"{slug}\": {error}");
            let notice = Notice::error(format!(
                "Could not load data for \"{slug}\". Loading default ..."
            ));

            let profile = match deps.fetch_document(&ProfileSlug::fallback()).await {
                Ok(mut profile) => {
                    profile.ensure_avatar();
                    profile
                }
                Err(error) => {
                    tracing::error!("fallback profile document failed as well: {error}");
                    profile::default_profile()
                }
            };

            ResolvedProfile {
                profile,
                page_title: DEFAULT_PAGE_TITLE.to_string(),
                notice: Some(notice),
            }
        }
    }
}
