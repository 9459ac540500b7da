use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::{api::FetchError, config::Config};

pub async fn make_request<T>(
    client: &Client,
    config: &Config,
    endpoint: &str,
    query: &[(&str, &str)],
) -> Result<T, FetchError>
where
    T: DeserializeOwned,
{
    let url = format!("https://{}/{}", config.api_host(), endpoint);
    let res = client
        .get(&url)
        .query(query)
        .header("x-rapidapi-key", config.api_key().as_str())
        .header("x-rapidapi-host", config.api_host().as_str())
        .send()
        .await?
        .error_for_status()?;

    let text = res.text().await?;
    let data = serde_json::from_str::<T>(&text)?;

    Ok(data)
}
