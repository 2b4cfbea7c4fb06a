use crate::config::Config;
use portfolio_source::{GetSource, Source};

use std::sync::Arc;

#[derive(Clone)]
pub struct App {
    pub config: Arc<Config>,
    pub source: Source,
}

impl GetSource for App {
    fn get_source(&self) -> &Source {
        &self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use clap::Parser;
    use entrait::Impl;

    #[test]
    fn composed_app_should_expose_its_source() {
        let config = Config::parse_from(["portfolio-app"]);
        let source = Source::new("http://localhost:1").unwrap();

        let app = Impl::new(App {
            config: Arc::new(config),
            source,
        });

        assert_eq!("http://localhost:1", app.get_source().base_url);
    }
}
