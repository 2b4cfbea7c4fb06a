#[derive(clap::Parser)]
pub struct Config {
    #[arg(long, env, default_value = "0.0.0.0:8080")]
    pub listen_addr: std::net::SocketAddr,

    /// Host serving the YAML profile documents. Overridable so tests and
    /// mirrors can swap it out.
    #[arg(long, env, default_value = portfolio_source::DEFAULT_BASE_URL)]
    pub document_base_url: String,

    #[arg(long, env, default_value = "portfolio_app/assets")]
    pub assets_dir: std::path::PathBuf,
}
