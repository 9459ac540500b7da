use crate::models::Stock;

/// What the detail popup knows about its chart series.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ChartState {
    /// No detail popup open.
    #[default]
    Idle,
    /// Fetch in flight.
    Loading,
    /// Non-empty series, oldest sample first.
    Ready(Vec<f64>),
    /// Fetch failed or the upstream series was empty.
    Empty,
}

/// Screen-local state for the Stocks tab: the last completed search
/// result set, the working stock list, and the current selection.
/// Mutated only from the event loop.
#[derive(Clone, Debug, Default)]
pub struct Stocks {
    search_results: Vec<Stock>,
    watchlist: Vec<Stock>,
    selected: Option<Stock>,
    chart: ChartState,
}

impl Stocks {
    pub fn search_results(&self) -> &[Stock] {
        &self.search_results
    }

    pub fn watchlist(&self) -> &[Stock] {
        &self.watchlist
    }

    pub fn selected(&self) -> Option<&Stock> {
        self.selected.as_ref()
    }

    pub fn chart(&self) -> &ChartState {
        &self.chart
    }

    /// Replaces the result set wholesale with the outcome of a
    /// completed search.
    pub fn replace_results(&mut self, results: Vec<Stock>) {
        self.search_results = results;
    }

    /// Activates the result row at `index`: appends the stock to the
    /// watchlist unless a stock with the same symbol is already present,
    /// and makes it the current selection with a pending chart.
    pub fn select(&mut self, index: usize) -> Option<&Stock> {
        let stock = self.search_results.get(index)?.clone();

        if !self
            .watchlist
            .iter()
            .any(|entry| entry.symbol() == stock.symbol())
        {
            self.watchlist.push(stock.clone());
        }

        self.chart = ChartState::Loading;
        self.selected = Some(stock);
        self.selected.as_ref()
    }

    /// Dismisses the detail popup. The chart series is dropped; a
    /// re-opened popup fetches it again.
    pub fn dismiss(&mut self) {
        self.selected = None;
        self.chart = ChartState::Idle;
    }

    pub fn set_chart(&mut self, chart: ChartState) {
        self.chart = chart;
    }
}
