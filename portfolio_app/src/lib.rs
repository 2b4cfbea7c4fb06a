pub mod app;
pub mod config;
pub mod routes;

#[cfg(test)]
mod test_util;

use anyhow::Context;
use entrait::Impl;
use tower::ServiceBuilder;

pub async fn serve(app: app::App) -> anyhow::Result<()> {
    let listen_addr = app.config.listen_addr;
    let assets_dir = app.config.assets_dir.clone();

    let router = routes::portfolio_routes::PortfolioRoutes::<Impl<app::App>>::router()
        .nest_service(
            "/assets",
            tower_http::services::ServeDir::new(assets_dir),
        )
        .layer(
            ServiceBuilder::new()
                .layer(axum::extract::Extension(Impl::new(app)))
                // Enables logging. Use `RUST_LOG=tower_http=debug`
                .layer(tower_http::trace::TraceLayer::new_for_http()),
        );

    let listener = tokio::net::TcpListener::bind(listen_addr)
        .await
        .with_context(|| format!("could not bind {listen_addr}"))?;

    tracing::info!("serving portfolio on {listen_addr}");

    axum::serve(listener, router)
        .await
        .context("error running HTTP server")
}
