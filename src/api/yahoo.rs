use reqwest::Client;

use super::{
    FetchError,
    utils::make_request,
    yahoo_dto::{ChartResponseDto, QuoteResponseDto},
};
use crate::{config::Config, models::Stock};

/// Searches the quote endpoint for `query` and maps each returned record
/// to a `Stock`, preserving upstream order. The query is percent-encoded
/// by the query-pair builder; callers are expected to have trimmed it.
pub async fn search_quotes(
    client: &Client,
    config: &Config,
    query: &str,
) -> Result<Vec<Stock>, FetchError> {
    let res = make_request::<QuoteResponseDto>(
        client,
        config,
        "market/v2/get-quotes",
        &[("region", config.region().as_str()), ("symbols", query)],
    )
    .await?;

    let stocks = res
        .quote_response()
        .result()
        .iter()
        .map(|quote| quote.to_stock())
        .collect();

    Ok(stocks)
}

/// Fetches one month of daily closing prices for `symbol`, oldest first.
/// A response with any nesting level missing yields an empty series.
pub async fn get_chart(
    client: &Client,
    config: &Config,
    symbol: &str,
) -> Result<Vec<f64>, FetchError> {
    let res = make_request::<ChartResponseDto>(
        client,
        config,
        "stock/v2/get-chart",
        &[("symbol", symbol), ("interval", "1d"), ("range", "1mo")],
    )
    .await?;

    Ok(res.into_series())
}
