use derive_getters::Getters;
use derive_new::new;

/// A single point-in-time price snapshot for one ticker symbol.
#[derive(Clone, Debug, Getters, PartialEq, new)]
pub struct Stock {
    name: String,
    symbol: String,
    price: f64,
    change_percent: f64,
    open: f64,
    high: f64,
    low: f64,
    volume: i64,
}
