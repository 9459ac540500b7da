use anyhow::{Context, Result};
use derive_getters::Getters;
use derive_new::new;

const DEFAULT_API_HOST: &str = "apidojo-yahoo-finance-v1.p.rapidapi.com";

/// Upstream credentials and request parameters. Both credential values
/// are supplied by the environment (`.env` supported via dotenv), never
/// compiled into source.
#[derive(Clone, Debug, Getters, new)]
pub struct Config {
    api_key: String,
    api_host: String,
    region: String,
}

impl Config {
    pub fn from_env(region: String) -> Result<Self> {
        let api_key =
            std::env::var("RAPIDAPI_KEY").with_context(|| "Missing RAPIDAPI_KEY in environment")?;
        let api_host =
            std::env::var("RAPIDAPI_HOST").unwrap_or_else(|_| DEFAULT_API_HOST.to_string());

        Ok(Self {
            api_key,
            api_host,
            region,
        })
    }
}
