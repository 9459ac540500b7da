#[cfg(test)]
mod tests {
    use crate::app::stocks::{ChartState, Stocks};
    use crate::models::Stock;

    fn stock(symbol: &str) -> Stock {
        Stock::new(
            format!("{symbol} Inc."),
            symbol.to_string(),
            100.0,
            0.5,
            99.0,
            101.0,
            98.0,
            1_000,
        )
    }

    #[test]
    fn select_appends_new_symbol_once() {
        let mut stocks = Stocks::default();
        stocks.replace_results(vec![stock("AAPL"), stock("MSFT")]);

        stocks.select(0);
        stocks.dismiss();
        stocks.select(0);

        let symbols: Vec<&str> = stocks
            .watchlist()
            .iter()
            .map(|s| s.symbol().as_str())
            .collect();
        assert_eq!(symbols, vec!["AAPL"]);

        stocks.select(1);
        assert_eq!(stocks.watchlist().len(), 2);
    }

    #[test]
    fn select_sets_selection_and_pending_chart() {
        let mut stocks = Stocks::default();
        stocks.replace_results(vec![stock("AAPL")]);

        let selected = stocks.select(0).cloned();

        assert_eq!(selected.as_ref().map(|s| s.symbol().as_str()), Some("AAPL"));
        assert_eq!(stocks.chart(), &ChartState::Loading);
    }

    #[test]
    fn select_out_of_range_is_none() {
        let mut stocks = Stocks::default();
        stocks.replace_results(vec![stock("AAPL")]);

        assert!(stocks.select(3).is_none());
        assert!(stocks.selected().is_none());
        assert!(stocks.watchlist().is_empty());
    }

    #[test]
    fn dismiss_clears_selection_and_chart() {
        let mut stocks = Stocks::default();
        stocks.replace_results(vec![stock("AAPL")]);
        stocks.select(0);
        stocks.set_chart(ChartState::Ready(vec![10.0, 12.0]));

        stocks.dismiss();

        assert!(stocks.selected().is_none());
        assert_eq!(stocks.chart(), &ChartState::Idle);
        // The watchlist survives the dismissal.
        assert_eq!(stocks.watchlist().len(), 1);
    }

    #[test]
    fn replace_results_is_wholesale() {
        let mut stocks = Stocks::default();
        stocks.replace_results(vec![stock("AAPL"), stock("MSFT")]);

        stocks.replace_results(vec![stock("GOOG")]);

        let symbols: Vec<&str> = stocks
            .search_results()
            .iter()
            .map(|s| s.symbol().as_str())
            .collect();
        assert_eq!(symbols, vec!["GOOG"]);
    }
}
