use anyhow::Context;
use derive_builder::Builder;
use url::Url;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";

#[derive(Debug, Clone, Builder)]
pub struct Config {
    /// base url of the HBnB REST API, `/api/v1` is appended to it
    pub api_url: Url,
    #[builder(setter(into), default = "\"127.0.0.1\".to_string()")]
    pub bind_addr: String,
    #[builder(default = "8080")]
    pub port: u16,
    #[builder(default = "tracing::Level::INFO")]
    pub log_level: tracing::Level,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let mut builder = ConfigBuilder::default();

        let api_url = lookup("HBNB_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());
        builder.api_url(
            Url::parse(&api_url).with_context(|| format!("invalid HBNB_API_URL {api_url}"))?,
        );
        if let Some(addr) = lookup("HBNB_BIND_ADDR") {
            builder.bind_addr(addr);
        }
        if let Some(port) = lookup("HBNB_PORT") {
            builder.port(
                port.parse()
                    .with_context(|| format!("invalid HBNB_PORT {port}"))?,
            );
        }
        if let Some(level) = lookup("HBNB_LOG_LEVEL") {
            builder.log_level(
                level
                    .parse()
                    .with_context(|| format!("invalid HBNB_LOG_LEVEL {level}"))?,
            );
        }

        builder.build().context("fail to build config")
    }
}
