#[cfg(test)]
mod tests {
    use crate::api::FetchError;
    use crate::app::App;
    use crate::app::app::FetchOutcome;
    use crate::app::stocks::ChartState;
    use crate::config::Config;
    use crate::models::Stock;

    fn test_app() -> App {
        App::new(Config::new(
            String::from("test-key"),
            String::from("example.invalid"),
            String::from("US"),
        ))
    }

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

    fn decode_error() -> FetchError {
        FetchError::from(
            serde_json::from_str::<crate::api::yahoo_dto::QuoteResponseDto>("{}").unwrap_err(),
        )
    }

    #[tokio::test]
    async fn empty_query_performs_no_fetch() {
        let mut app = test_app();

        app.set_search_input("   ");
        app.submit_search();

        assert!(!app.loading());
        assert_eq!(app.search_generation(), 0);
    }

    #[tokio::test]
    async fn matching_search_completion_replaces_results() {
        let mut app = test_app();

        app.apply_outcome(FetchOutcome::Search {
            generation: 0,
            result: Ok(vec![stock("AAPL")]),
        });

        assert_eq!(app.stocks().search_results().len(), 1);
    }

    #[tokio::test]
    async fn stale_search_completion_is_discarded() {
        let mut app = test_app();

        app.apply_outcome(FetchOutcome::Search {
            generation: 7,
            result: Ok(vec![stock("AAPL")]),
        });

        assert!(app.stocks().search_results().is_empty());
    }

    #[tokio::test]
    async fn failed_search_keeps_previous_results() {
        let mut app = test_app();

        app.apply_outcome(FetchOutcome::Search {
            generation: 0,
            result: Ok(vec![stock("AAPL")]),
        });
        app.apply_outcome(FetchOutcome::Search {
            generation: 0,
            result: Err(decode_error()),
        });

        assert!(!app.loading());
        assert_eq!(app.stocks().search_results().len(), 1);
    }

    #[tokio::test]
    async fn chart_completion_without_selection_is_discarded() {
        let mut app = test_app();

        app.apply_outcome(FetchOutcome::Chart {
            generation: 0,
            result: Ok(vec![10.0, 12.0]),
        });

        assert_eq!(app.stocks().chart(), &ChartState::Idle);
    }
}
