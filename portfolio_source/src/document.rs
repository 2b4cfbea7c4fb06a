use crate::GetSource;

use portfolio_core::error::{PortfolioError, PortfolioResult};
use portfolio_core::profile::Profile;
use portfolio_core::ProfileSlug;

use anyhow::Context;
use entrait::entrait_export as entrait;
use http::StatusCode;
use serde_yaml_ng as serde_yaml;

/// Document location template: `{base}/{q}/{q}/main/{q}.yml`.
pub fn document_url(base_url: &str, slug: &ProfileSlug) -> String {
    format!("{base_url}/{slug}/{slug}/main/{slug}.yml")
}

#[entrait(pub FetchDocument, mock_api=FetchDocumentMock)]
async fn fetch_document(deps: &impl GetSource, slug: &ProfileSlug) -> PortfolioResult<Profile> {
    let source = deps.get_source();
    let url = document_url(&source.base_url, slug);

    tracing::debug!("fetching profile document from {url}");

    let response = source
        .client
        .get(&url)
        .send()
        .await
        .with_context(|| format!("request to {url} failed"))?;

    if response.status() != StatusCode::OK {
        return Err(PortfolioError::Fetch(response.status()));
    }

    let body = response
        .text()
        .await
        .context("could not read profile document body")?;

    parse_document(&body)
}

pub fn parse_document(body: &str) -> PortfolioResult<Profile> {
    serde_yaml::from_str(body).map_err(|e| PortfolioError::Parse(e.to_string()))
}
