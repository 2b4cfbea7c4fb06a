use anyhow::Context;

pub mod document;

pub const DEFAULT_BASE_URL: &str = "https://raw.githubusercontent.com";

///
/// The remote document host. `base_url` is injected so tests can point it
/// at a local mock server.
///
#[derive(Clone)]
pub struct Source {
    pub client: reqwest::Client,
    pub base_url: String,
}

impl Source {
    pub fn new(base_url: impl Into<String>) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("portfolio/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("could not construct http client")?;

        Ok(Source {
            client,
            base_url: base_url.into(),
        })
    }
}

/// Dependency accessor, implemented by every app type that carries a
/// [Source].
pub trait GetSource {
    fn get_source(&self) -> &Source;
}

impl GetSource for Source {
    fn get_source(&self) -> &Source {
        self
    }
}

impl<T: GetSource> GetSource for entrait::Impl<T> {
    fn get_source(&self) -> &Source {
        T::get_source(self)
    }
}

/// Satisfies the `Unimock: GetSource` bound of the generated mock impls.
/// Mocked tests short-circuit at the generated trait impls and never call
/// this.
impl GetSource for unimock::Unimock {
    fn get_source(&self) -> &Source {
        panic!("a mocked Unimock instance carries no real Source")
    }
}
