use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        Axis, Block, Borders, Chart, Clear, Dataset, GraphType, List, ListItem, ListState,
        Paragraph, Tabs,
    },
};
use strum::IntoEnumIterator;

use crate::{
    app::{
        app::Tab,
        calc::direction_hint,
        stocks::{ChartState, Stocks},
    },
    models::Stock,
};

pub fn render(
    frame: &mut Frame,
    tab: Tab,
    search_input: &str,
    loading: bool,
    stocks: &Stocks,
    list_state: &mut ListState,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    let titles: Vec<String> = Tab::iter().map(|tab| tab.to_string()).collect();
    let selected = Tab::iter().position(|t| t == tab).unwrap_or(0);
    let tabs = Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(Color::Cyan))
        .highlight_style(Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED))
        .block(Block::default().title("Stocks TUI").borders(Borders::ALL));
    frame.render_widget(tabs, chunks[0]);

    match tab {
        Tab::Stocks => render_stocks(frame, chunks[1], search_input, loading, stocks, list_state),
        Tab::News => render_news(frame, chunks[1]),
    }

    let help = Paragraph::new(
        "Tab: switch | type + Enter: search | Up/Down + Enter: open | Esc: back | Ctrl+C: quit",
    )
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, chunks[2]);

    if let Some(stock) = stocks.selected() {
        render_detail_popup(frame, stock, stocks.chart());
    }
}

fn render_stocks(
    frame: &mut Frame,
    area: Rect,
    search_input: &str,
    loading: bool,
    stocks: &Stocks,
    list_state: &mut ListState,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let search_title = if loading {
        "Search (loading...)"
    } else {
        "Search"
    };
    let search = Paragraph::new(search_input)
        .block(Block::default().title(search_title).borders(Borders::ALL));
    frame.render_widget(search, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(chunks[1]);

    let results = stocks.search_results();
    if results.is_empty() {
        let empty_message = Paragraph::new("No results to display. Search for a stock first.")
            .style(Style::default().fg(Color::Yellow))
            .block(Block::default().title("Results").borders(Borders::ALL));
        frame.render_widget(empty_message, body[0]);
    } else {
        let items: Vec<ListItem> = results.iter().map(result_row).collect();
        let list = List::new(items)
            .block(Block::default().title("Results").borders(Borders::ALL))
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
        frame.render_stateful_widget(list, body[0], list_state);
    }

    let watchlist: Vec<ListItem> = stocks
        .watchlist()
        .iter()
        .map(|stock| {
            ListItem::new(format!("{}  {:.2}", stock.symbol(), stock.price()))
        })
        .collect();
    let watchlist = List::new(watchlist)
        .block(Block::default().title("Watchlist").borders(Borders::ALL));
    frame.render_widget(watchlist, body[1]);
}

fn result_row(stock: &Stock) -> ListItem<'static> {
    let change = *stock.change_percent();
    let change_color = if change >= 0.0 {
        Color::Green
    } else {
        Color::Red
    };

    ListItem::new(Line::from(vec![
        Span::styled(
            format!("{:<30.30}", stock.name()),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {:<8}", stock.symbol()),
            Style::default().fg(Color::Gray),
        ),
        Span::raw(format!(" ${:>10.2}", stock.price())),
        Span::styled(
            format!(" {:>+7.2}%", change),
            Style::default().fg(change_color),
        ),
    ]))
}

fn render_news(frame: &mut Frame, area: Rect) {
    // Placeholder news items
    let items = [
        "Market surges on strong earnings reports",
        "Federal Reserve announces new policies",
        "Tech stocks rally amid optimistic forecasts",
    ]
    .iter()
    .map(|headline| ListItem::new(*headline))
    .collect::<Vec<_>>();

    let news =
        List::new(items).block(Block::default().title("Market News").borders(Borders::ALL));
    frame.render_widget(news, area);
}

fn render_detail_popup(frame: &mut Frame, stock: &Stock, chart: &ChartState) {
    let area = centered_rect(70, 80, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!("{} ({})", stock.name(), stock.symbol()))
        .borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(7)])
        .split(inner);

    match chart {
        ChartState::Ready(series) => render_chart(frame, chunks[0], stock, series),
        ChartState::Loading => {
            let loading = Paragraph::new("Loading chart...")
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::Gray));
            frame.render_widget(loading, chunks[0]);
        }
        _ => {
            let empty = Paragraph::new("No data available")
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::Gray));
            frame.render_widget(empty, chunks[0]);
        }
    }

    let change = *stock.change_percent();
    let change_color = if change >= 0.0 {
        Color::Green
    } else {
        Color::Red
    };
    let details = vec![
        Line::from(format!("Price:  ${:.2}", stock.price())),
        Line::from(Span::styled(
            format!("Change: {:+.2}%", change),
            Style::default().fg(change_color),
        )),
        Line::from(format!("Open:   ${:.2}", stock.open())),
        Line::from(format!("High:   ${:.2}", stock.high())),
        Line::from(format!("Low:    ${:.2}", stock.low())),
        Line::from(format!("Volume: {}", stock.volume())),
    ];
    let details = Paragraph::new(details)
        .block(Block::default().borders(Borders::TOP));
    frame.render_widget(details, chunks[1]);
}

fn render_chart(frame: &mut Frame, area: Rect, stock: &Stock, series: &[f64]) {
    let points: Vec<(f64, f64)> = series
        .iter()
        .enumerate()
        .map(|(i, close)| (i as f64, *close))
        .collect();

    let accent = if direction_hint(series) > 0 {
        Color::Green
    } else {
        Color::Red
    };

    let min = series.iter().copied().fold(f64::INFINITY, f64::min);
    let max = series.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    // Keep a flat series from collapsing the y axis to a zero-height band.
    let (y_min, y_max) = if (max - min).abs() < f64::EPSILON {
        (min - 1.0, max + 1.0)
    } else {
        (min, max)
    };
    let x_max = (series.len().saturating_sub(1)).max(1) as f64;

    let datasets = vec![
        Dataset::default()
            .name(stock.symbol().clone())
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(accent))
            .data(&points),
    ];

    let chart = Chart::new(datasets)
        .block(Block::default().title("Last month, daily close"))
        .x_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, x_max]),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .bounds([y_min, y_max])
                .labels(vec![
                    Span::raw(format!("{:.2}", y_min)),
                    Span::raw(format!("{:.2}", y_max)),
                ]),
        );

    frame.render_widget(chart, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
