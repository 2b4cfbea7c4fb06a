use portfolio_core::error::PortfolioResult;
use portfolio_core::notice::Notice;
use portfolio_core::profile::Profile;
use portfolio_core::theme::{Theme, THEME_KEY};
use portfolio_core::ProfileSlug;
use portfolio_loader::ResolveProfile;

use anyhow::Context;
use askama::Template;
use axum::extract::{Extension, Query};
use axum::response::{Html, Redirect};
use axum::routing::{get, post};
use axum_extra::extract::cookie::{Cookie, CookieJar};

#[derive(serde::Deserialize, Default)]
#[serde(default)]
pub struct PageQuery {
    q: Option<String>,
}

#[derive(Template)]
#[template(path = "portfolio.html")]
struct PortfolioPage {
    page_title: String,
    theme_action: String,
    theme: &'static str,
    profile: Profile,
    notice: Option<Notice>,
}

/// `q` round-trips through the theme toggle, so it goes into the URL
/// percent-encoded.
fn path_with_query(path: &str, q: Option<&str>) -> String {
    match q {
        Some(q) if !q.is_empty() => format!("{path}?q={}", urlencoding::encode(q)),
        _ => path.to_string(),
    }
}

pub struct PortfolioRoutes<A>(std::marker::PhantomData<A>);

impl<A> PortfolioRoutes<A>
where
    A: ResolveProfile + Clone + Send + Sync + 'static,
{
    pub fn router() -> axum::Router {
        axum::Router::new()
            .route("/", get(Self::show))
            .route("/theme", post(Self::toggle_theme))
    }

    async fn show(
        Extension(app): Extension<A>,
        Query(query): Query<PageQuery>,
        jar: CookieJar,
    ) -> PortfolioResult<Html<String>> {
        let slug = ProfileSlug::from_query(query.q.as_deref());
        let theme = Theme::from_stored(jar.get(THEME_KEY).map(|cookie| cookie.value()));

        let resolved = app.resolve_profile(&slug).await;

        let page = PortfolioPage {
            page_title: resolved.page_title,
            theme_action: path_with_query("/theme", Some(slug.as_str())),
            theme: theme.as_str(),
            profile: resolved.profile,
            notice: resolved.notice,
        };

        Ok(Html(
            page.render().context("could not render portfolio page")?,
        ))
    }

    /// Flip the persisted preference and go back to the page, keeping `q`.
    async fn toggle_theme(Query(query): Query<PageQuery>, jar: CookieJar) -> (CookieJar, Redirect) {
        let theme = Theme::from_stored(jar.get(THEME_KEY).map(|cookie| cookie.value())).toggled();
        let jar = jar.add(
            Cookie::build((THEME_KEY, theme.as_str()))
                .path("/")
                .build(),
        );

        let target = path_with_query("/", query.q.as_deref());

        (jar, Redirect::to(&target))
    }
}
