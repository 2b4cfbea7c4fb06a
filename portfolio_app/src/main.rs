use portfolio_app::{app::App, config::Config};

use clap::Parser;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::parse();
    let source = portfolio_source::Source::new(&config.document_base_url)?;

    portfolio_app::serve(App {
        config: Arc::new(config),
        source,
    })
    .await?;

    Ok(())
}
