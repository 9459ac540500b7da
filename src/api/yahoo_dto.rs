use derive_getters::Getters;
use derive_new::new;
use serde::Deserialize;

use crate::models::Stock;

fn unknown_name() -> String {
    String::from("Unknown")
}

#[derive(Debug, Deserialize, Getters, new)]
pub struct QuoteResponseDto {
    #[serde(rename = "quoteResponse")]
    quote_response: QuoteResultDto,
}

#[derive(Debug, Deserialize, Getters, new)]
pub struct QuoteResultDto {
    result: Vec<QuoteDto>,
}

/// One quote record from the search endpoint. Only the symbol is
/// required upstream; every other field carries a documented default
/// (name "Unknown", numerics 0.0, volume 0) applied at this boundary.
#[derive(Debug, Deserialize, Getters, new)]
#[serde(rename_all = "camelCase")]
pub struct QuoteDto {
    symbol: String,
    #[serde(default = "unknown_name")]
    long_name: String,
    #[serde(default)]
    regular_market_price: f64,
    #[serde(default)]
    regular_market_change_percent: f64,
    #[serde(default)]
    regular_market_open: f64,
    #[serde(default)]
    regular_market_day_high: f64,
    #[serde(default)]
    regular_market_day_low: f64,
    #[serde(default)]
    regular_market_volume: i64,
}

impl QuoteDto {
    pub fn to_stock(&self) -> Stock {
        Stock::new(
            self.long_name.clone(),
            self.symbol.clone(),
            self.regular_market_price,
            self.regular_market_change_percent,
            self.regular_market_open,
            self.regular_market_day_high,
            self.regular_market_day_low,
            self.regular_market_volume,
        )
    }
}

/// Response of the chart endpoint, `chart.result[0].indicators.quote[0].close`.
/// Every nesting level defaults, so a missing level yields an empty series
/// rather than a decode failure.
#[derive(Debug, Default, Deserialize, new)]
pub struct ChartResponseDto {
    #[serde(default)]
    chart: ChartDto,
}

#[derive(Debug, Default, Deserialize, new)]
pub struct ChartDto {
    #[serde(default)]
    result: Vec<ChartResultDto>,
}

#[derive(Debug, Default, Deserialize, new)]
pub struct ChartResultDto {
    #[serde(default)]
    indicators: ChartIndicatorsDto,
}

#[derive(Debug, Default, Deserialize, new)]
pub struct ChartIndicatorsDto {
    #[serde(default)]
    quote: Vec<ChartQuoteDto>,
}

#[derive(Debug, Default, Deserialize, new)]
pub struct ChartQuoteDto {
    #[serde(default)]
    close: Vec<f64>,
}

impl ChartResponseDto {
    /// Closing prices of the first result's first quote entry,
    /// chronological as returned upstream.
    pub fn into_series(self) -> Vec<f64> {
        self.chart
            .result
            .into_iter()
            .next()
            .and_then(|result| result.indicators.quote.into_iter().next())
            .map(|quote| quote.close)
            .unwrap_or_default()
    }
}
