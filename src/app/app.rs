use std::io;

use anyhow::Result;
use crossterm::{
    event::{
        DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyCode, KeyEvent,
        KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::warn;
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
    widgets::ListState,
};
use reqwest::Client;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};
use tokio::sync::mpsc;
use tokio_stream::StreamExt;

use crate::{
    api::{FetchError, yahoo},
    app::{
        stocks::{ChartState, Stocks},
        ui,
    },
    config::Config,
    models::Stock,
};

#[derive(Clone, Copy, Debug, Display, EnumIter, Eq, PartialEq)]
pub enum Tab {
    Stocks,
    News,
}

/// Completion of a spawned fetch, delivered back to the event loop.
/// Each carries the generation it was issued under; the loop discards
/// completions whose generation is no longer the latest.
#[derive(Debug)]
pub enum FetchOutcome {
    Search {
        generation: u64,
        result: Result<Vec<Stock>, FetchError>,
    },
    Chart {
        generation: u64,
        result: Result<Vec<f64>, FetchError>,
    },
}

#[derive(Debug, Eq, PartialEq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct App {
    config: Config,
    client: Client,
    tab: Tab,
    search_input: String,
    loading: bool,
    selection_mode: bool,
    list_state: ListState,
    stocks: Stocks,
    search_generation: u64,
    chart_generation: u64,
    tx: mpsc::Sender<FetchOutcome>,
    rx: mpsc::Receiver<FetchOutcome>,
}

impl App {
    pub fn new(config: Config) -> Self {
        let (tx, rx) = mpsc::channel(8);
        Self {
            config,
            client: Client::new(),
            tab: Tab::Stocks,
            search_input: String::new(),
            loading: false,
            selection_mode: false,
            list_state: ListState::default(),
            stocks: Stocks::default(),
            search_generation: 0,
            chart_generation: 0,
            tx,
            rx,
        }
    }

    pub fn stocks(&self) -> &Stocks {
        &self.stocks
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn search_generation(&self) -> u64 {
        self.search_generation
    }

    pub fn set_search_input(&mut self, input: &str) {
        self.search_input = input.to_string();
    }

    pub async fn run(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.run_app(&mut terminal).await;

        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        result
    }

    async fn run_app<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        let mut events = EventStream::new();

        loop {
            terminal.draw(|frame| {
                ui::render(
                    frame,
                    self.tab,
                    &self.search_input,
                    self.loading,
                    &self.stocks,
                    &mut self.list_state,
                )
            })?;

            tokio::select! {
                event = events.next() => {
                    match event {
                        Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                            if self.handle_key(key) == Flow::Quit {
                                return Ok(());
                            }
                        }
                        Some(Ok(_)) => {}
                        Some(Err(err)) => return Err(err.into()),
                        None => return Ok(()),
                    }
                }
                Some(outcome) = self.rx.recv() => {
                    self.apply_outcome(outcome);
                }
            }
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Flow {
        if key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q'))
        {
            return Flow::Quit;
        }

        // The detail popup captures all input while it is open.
        if self.stocks.selected().is_some() {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
                self.dismiss_detail();
            }
            return Flow::Continue;
        }

        match key.code {
            KeyCode::Tab => self.cycle_tab(1),
            KeyCode::BackTab => self.cycle_tab(-1),
            _ if self.tab == Tab::Stocks => self.handle_stocks_key(key.code),
            _ => {}
        }

        Flow::Continue
    }

    fn handle_stocks_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char(c) => {
                self.selection_mode = false;
                self.list_state.select(None);
                self.search_input.push(c);
            }
            KeyCode::Backspace => {
                self.search_input.pop();
            }
            KeyCode::Enter => {
                if self.selection_mode {
                    if let Some(index) = self.list_state.selected() {
                        self.open_detail(index);
                    }
                } else {
                    self.submit_search();
                }
            }
            KeyCode::Down => {
                self.selection_mode = true;
                let results = self.stocks.search_results();
                if !results.is_empty() {
                    let i = match self.list_state.selected() {
                        Some(i) => {
                            if i >= results.len() - 1 {
                                0
                            } else {
                                i + 1
                            }
                        }
                        None => 0,
                    };
                    self.list_state.select(Some(i));
                }
            }
            KeyCode::Up => {
                self.selection_mode = true;
                let results = self.stocks.search_results();
                if !results.is_empty() {
                    let i = match self.list_state.selected() {
                        Some(i) => {
                            if i == 0 {
                                results.len() - 1
                            } else {
                                i - 1
                            }
                        }
                        None => 0,
                    };
                    self.list_state.select(Some(i));
                }
            }
            KeyCode::Esc => {
                self.selection_mode = false;
                self.list_state.select(None);
            }
            _ => {}
        }
    }

    fn cycle_tab(&mut self, step: isize) {
        let tabs: Vec<Tab> = Tab::iter().collect();
        let i = tabs.iter().position(|tab| *tab == self.tab).unwrap_or(0) as isize;
        let next = (i + step).rem_euclid(tabs.len() as isize) as usize;
        self.tab = tabs[next];
    }

    /// Submits the current search input. Queries that are empty after
    /// trimming perform no fetch and leave the prior results untouched.
    pub fn submit_search(&mut self) {
        let query = self.search_input.trim().to_string();
        if query.is_empty() {
            return;
        }

        self.loading = true;
        self.search_generation += 1;
        let generation = self.search_generation;

        let client = self.client.clone();
        let config = self.config.clone();
        let tx = self.tx.clone();

        tokio::spawn(async move {
            let result = yahoo::search_quotes(&client, &config, &query).await;
            if let Err(err) = &result {
                warn!("quote search for '{query}' failed: {err}");
            }
            let _ = tx.send(FetchOutcome::Search { generation, result }).await;
        });
    }

    fn open_detail(&mut self, index: usize) {
        let Some(stock) = self.stocks.select(index) else {
            return;
        };
        let symbol = stock.symbol().clone();

        self.chart_generation += 1;
        let generation = self.chart_generation;

        let client = self.client.clone();
        let config = self.config.clone();
        let tx = self.tx.clone();

        tokio::spawn(async move {
            let result = yahoo::get_chart(&client, &config, &symbol).await;
            if let Err(err) = &result {
                warn!("chart fetch for {symbol} failed: {err}");
            }
            let _ = tx.send(FetchOutcome::Chart { generation, result }).await;
        });
    }

    fn dismiss_detail(&mut self) {
        // Bump the generation so an in-flight chart fetch for the
        // dismissed popup can never land in a later one.
        self.chart_generation += 1;
        self.stocks.dismiss();
    }

    /// Applies a fetch completion to view state. Stale generations are
    /// discarded outright; failed fetches only clear the loading
    /// indicator, leaving prior results in place.
    pub fn apply_outcome(&mut self, outcome: FetchOutcome) {
        match outcome {
            FetchOutcome::Search { generation, result } => {
                if generation != self.search_generation {
                    return;
                }
                self.loading = false;
                if let Ok(results) = result {
                    self.stocks.replace_results(results);
                    self.selection_mode = false;
                    self.list_state.select(None);
                }
            }
            FetchOutcome::Chart { generation, result } => {
                if generation != self.chart_generation || self.stocks.selected().is_none() {
                    return;
                }
                let chart = match result {
                    Ok(series) if !series.is_empty() => ChartState::Ready(series),
                    _ => ChartState::Empty,
                };
                self.stocks.set_chart(chart);
            }
        }
    }
}
