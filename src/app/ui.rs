use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
};
use rust_decimal::Decimal;

use crate::{
    app::{palette::SectorColor, portfolio::Portfolio, utils},
    models::{ComputedHolding, SectorAggregate},
};

pub fn render(
    frame: &mut Frame,
    portfolio: &Portfolio,
    sectors: &[SectorAggregate],
    table_state: &mut TableState,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    let mut title_spans = vec![Span::styled(
        "Portfolio Overview",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )];

    if portfolio.loading() {
        title_spans.push(Span::styled(
            "  Refreshing...",
            Style::default().fg(Color::Yellow),
        ));
    }

    if let Some(refreshed) = portfolio.last_refreshed() {
        title_spans.push(Span::styled(
            format!("  Last update {}", refreshed.format("%H:%M:%S")),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let title =
        Paragraph::new(Line::from(title_spans)).block(Block::default().borders(Borders::ALL));

    frame.render_widget(title, chunks[0]);

    if sectors.is_empty() {
        let empty_message = Paragraph::new("No holdings to display.")
            .style(Style::default().fg(Color::Yellow))
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(empty_message, chunks[1]);
    } else {
        render_table(frame, sectors, table_state, chunks[1]);
    }

    let footer = Paragraph::new("q quit  r refresh  up/down select  esc clear")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, chunks[2]);
}

fn render_table(
    frame: &mut Frame,
    sectors: &[SectorAggregate],
    table_state: &mut TableState,
    area: Rect,
) {
    let header_cells = [
        "Stock",
        "Buy Price",
        "Qty",
        "Investment",
        "Portfolio %",
        "Exchange",
        "CMP",
        "Present Value",
        "P/E",
        "Earnings",
        "Gain/Loss",
        "Returns %",
    ]
    .iter()
    .map(|h| Cell::from(*h).style(Style::default().fg(Color::Yellow)));
    let header = Row::new(header_cells).height(1);

    let mut rows: Vec<Row> = Vec::new();
    for sector in sectors {
        rows.push(sector_row(sector));
        for computed in sector.holdings() {
            rows.push(holding_row(computed));
        }
    }

    let widths = [
        Constraint::Length(24),
        Constraint::Length(11),
        Constraint::Length(6),
        Constraint::Length(13),
        Constraint::Length(11),
        Constraint::Length(9),
        Constraint::Length(11),
        Constraint::Length(14),
        Constraint::Length(8),
        Constraint::Length(10),
        Constraint::Length(13),
        Constraint::Length(10),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().title("Holdings").borders(Borders::ALL))
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    frame.render_stateful_widget(table, area, table_state);
}

/// Sector totals ride on a colored header row, each aligned under the column
/// it totals.
fn sector_row(sector: &SectorAggregate) -> Row<'_> {
    let cells = [
        Cell::from(sector.sector().as_str()),
        Cell::from(""),
        Cell::from(""),
        Cell::from(utils::rupees(sector.total_investment())),
        Cell::from(""),
        Cell::from(""),
        Cell::from(""),
        Cell::from(utils::rupees(sector.total_value())),
        Cell::from(""),
        Cell::from(""),
        Cell::from(utils::abs_rupees(sector.sector_gain())),
        Cell::from(utils::signed_percent(sector.sector_return())),
    ];

    Row::new(cells).height(1).style(
        Style::default()
            .bg(SectorColor::for_label(sector.sector()).color())
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )
}

fn holding_row(computed: &ComputedHolding) -> Row<'_> {
    let holding = computed.holding();

    let stock = Text::from(vec![
        Line::from(holding.name().as_str()),
        Line::from(Span::styled(
            holding.symbol().as_str(),
            Style::default().fg(Color::DarkGray),
        )),
    ]);

    let gain_loss = *computed.gain_loss();
    let return_percent = *computed.return_percent();

    let color_gain_loss = if gain_loss >= Decimal::ZERO {
        Color::Green
    } else {
        Color::Red
    };

    let color_return = if return_percent >= Decimal::ZERO {
        Color::Green
    } else {
        Color::Red
    };

    let cells = [
        Cell::from(stock),
        Cell::from(utils::rupees(holding.purchase_price())),
        Cell::from(format!("{}", holding.quantity())),
        Cell::from(utils::rupees(computed.investment())),
        Cell::from(format!("{:.2}%", computed.portfolio_percent())),
        Cell::from(holding.exchange().as_str()),
        Cell::from(utils::rupees(holding.cmp())),
        Cell::from(utils::rupees(computed.present_value())),
        Cell::from(format!("{:.2}", holding.pe_ratio())),
        Cell::from(holding.earnings().as_str()),
        Cell::from(utils::abs_rupees(&gain_loss)).style(Style::default().fg(color_gain_loss)),
        Cell::from(utils::signed_percent(&return_percent))
            .style(Style::default().fg(color_return)),
    ];

    Row::new(cells).height(2)
}
